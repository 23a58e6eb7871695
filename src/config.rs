use std::env;

use anyhow::Result;

/// The dashboard's sample phrase, used when `score` gets no text.
pub const DEFAULT_TEXT: &str = "In the beginning ΑΩ";

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal tables (default)
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so these can live there.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input for `score` when no text argument is given
    pub default_text: String,
    /// Output format when `--json` isn't passed
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed RESONANT_FORMAT is an error.
    pub fn load() -> Result<Self> {
        let output_format = match env::var("RESONANT_FORMAT").ok() {
            Some(value) => parse_format(&value)?,
            None => OutputFormat::Text,
        };

        Ok(Self {
            default_text: env::var("RESONANT_DEFAULT_TEXT")
                .unwrap_or_else(|_| DEFAULT_TEXT.to_string()),
            output_format,
        })
    }

    /// Resolve the effective format: a `--json` flag always wins.
    pub fn format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output_format
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_text: DEFAULT_TEXT.to_string(),
            output_format: OutputFormat::Text,
        }
    }
}

/// Parse a RESONANT_FORMAT value. Empty counts as unset.
pub fn parse_format(value: &str) -> Result<OutputFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!(
            "RESONANT_FORMAT must be 'text' or 'json', got '{other}'.\n\
             Fix it in your .env file or unset it."
        ),
    }
}
