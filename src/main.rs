use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use resonant::config::{Config, OutputFormat};
use resonant::glyphs;
use resonant::numerology::maps::CharacterMap;
use resonant::numerology::vector::{numerology_vector, NumerologyVector};
use resonant::output::terminal;

/// Resonant: numerology fingerprints for arbitrary text.
///
/// Scores text under the Pythagorean, Hebrew gematria, and Greek isopsephy
/// systems, then reduces the Latin sum to a digital root and prime signature.
#[derive(Parser)]
#[command(name = "resonant", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the numerology vector for a piece of text
    Score {
        /// Text to score (defaults to RESONANT_DEFAULT_TEXT)
        text: Option<String>,

        /// Print the vector as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score several inputs side by side and flag shared digital roots
    Compare {
        /// Texts to compare
        #[arg(required = true)]
        texts: Vec<String>,

        /// Print the vectors as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show the glyph & rune registry
    Glyphs {
        /// Only show the record with this identifier (e.g. R:FE-001)
        #[arg(long)]
        id: Option<String>,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a character map (pythagorean, hebrew, greek)
    Table {
        /// Which map to show
        map: CharacterMap,

        /// Print the map as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("resonant=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Score { text, json } => {
            let text = text.unwrap_or_else(|| config.default_text.clone());
            info!(chars = text.chars().count(), "Scoring text");

            let vector = numerology_vector(&text);
            match config.format(json) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vector)?),
                OutputFormat::Text => terminal::display_vector(&vector),
            }
        }

        Commands::Compare { texts, json } => {
            info!(inputs = texts.len(), "Comparing texts");

            let vectors: Vec<NumerologyVector> =
                texts.iter().map(|t| numerology_vector(t)).collect();
            match config.format(json) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vectors)?),
                OutputFormat::Text => terminal::display_comparison(&vectors),
            }
        }

        Commands::Glyphs { id, json } => {
            let records = match id.as_deref() {
                Some(id) => match glyphs::find(id) {
                    Some(record) => std::slice::from_ref(record),
                    None => anyhow::bail!(
                        "No glyph with id '{id}'. Run `resonant glyphs` to list all entries."
                    ),
                },
                None => glyphs::registry(),
            };

            match config.format(json) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
                OutputFormat::Text => terminal::display_glyphs(records),
            }
        }

        Commands::Table { map, json } => match config.format(json) {
            OutputFormat::Json => {
                let table: serde_json::Map<String, serde_json::Value> = map
                    .entries()
                    .into_iter()
                    .map(|(ch, value)| (ch.to_string(), value.into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&table)?);
            }
            OutputFormat::Text => {
                terminal::display_map(map);
                println!(
                    "{}",
                    "Characters outside this table weigh 0.".dimmed()
                );
            }
        },
    }

    Ok(())
}
