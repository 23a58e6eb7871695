// Resonant: deterministic numerology fingerprints for arbitrary text
//
// This is the library root. The numerology engine is pure and total; the
// glyph registry is static reference data; config and output serve the CLI.

pub mod config;
pub mod glyphs;
pub mod numerology;
pub mod output;
