// Colored terminal output for numerology vectors, character maps, and glyphs.
//
// main.rs delegates all human-readable rendering here; JSON output is
// serialized directly in main.rs.

use colored::Colorize;

use crate::glyphs::GlyphRecord;
use crate::numerology::maps::CharacterMap;
use crate::numerology::primes::format_signature;
use crate::numerology::vector::{shared_roots, NumerologyVector};

use super::truncate_chars;

/// Display one vector as a labeled block.
pub fn display_vector(vector: &NumerologyVector) {
    println!(
        "\n{}",
        format!("=== Numerology Vector: \"{}\" ===", truncate_chars(&vector.text_input, 48)).bold()
    );
    println!();

    for map in CharacterMap::ALL {
        println!("  {:<22} {:>8}", map.name(), vector.sum_for(map));
    }
    println!();
    println!(
        "  {:<22} {:>8}",
        "Digital root",
        vector.digital_root.to_string().bright_green().bold()
    );
    println!(
        "  {:<22} {:>8}",
        "Prime signature",
        format_signature(&vector.prime_signature).bright_blue()
    );
    println!();
}

/// Display several vectors as a table, then list any shared digital roots.
pub fn display_comparison(vectors: &[NumerologyVector]) {
    if vectors.is_empty() {
        println!("Nothing to compare.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Comparison ({} inputs) ===", vectors.len()).bold()
    );
    println!();

    println!(
        "  {:>3}  {:<28} {:>6} {:>7} {:>7}  {:>4}  {}",
        "#".dimmed(),
        "Text".dimmed(),
        "Latin".dimmed(),
        "Hebrew".dimmed(),
        "Greek".dimmed(),
        "Root".dimmed(),
        "Signature".dimmed(),
    );
    println!("  {}", "-".repeat(76).dimmed());

    for (i, vector) in vectors.iter().enumerate() {
        println!(
            "  {:>3}  {:<28} {:>6} {:>7} {:>7}  {:>4}  {}",
            i + 1,
            truncate_chars(&vector.text_input, 25),
            vector.pythagorean_sum,
            vector.hebrew_gematria,
            vector.greek_isopsephy,
            vector.digital_root,
            format_signature(&vector.prime_signature),
        );
    }
    println!();

    let groups = shared_roots(vectors);
    if groups.is_empty() {
        println!("  {}", "No shared digital roots.".dimmed());
    }
    for (root, members) in &groups {
        let labels: Vec<String> = members.iter().map(|i| format!("#{}", i + 1)).collect();
        println!(
            "  {} root {} shared by {}",
            "~".yellow(),
            root.to_string().bold(),
            labels.join(", ")
        );
    }
    println!();
}

/// Display a character map's full table.
pub fn display_map(map: CharacterMap) {
    println!("\n{}", format!("=== {} ===", map.name()).bold());
    println!();
    for (ch, value) in map.entries() {
        println!("  {:<4} {:>4}", ch.to_string().bold(), value);
    }
    if map == CharacterMap::Pythagorean {
        println!("\n  {}", "Lowercase letters share the uppercase values.".dimmed());
    }
    println!();
}

/// Display glyph registry records.
pub fn display_glyphs(records: &[GlyphRecord]) {
    println!(
        "\n{}",
        format!("=== Glyph & Rune Registry ({} entries) ===", records.len()).bold()
    );
    println!();

    for record in records {
        println!(
            "  {}  {:<10} {} ({})",
            record.character.bold(),
            record.id.dimmed(),
            record.name,
            record.origin
        );
        println!(
            "      Morphology: {} strokes, symmetry {}",
            record.morphology.strokes, record.morphology.symmetry
        );
        println!("      Notes: {}", truncate_chars(record.notes, 60).dimmed());
        println!();
    }
}
