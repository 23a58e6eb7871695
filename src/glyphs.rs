// Glyph registry: static reference entries for symbols shown alongside the
// numerology engine. Read-only; nothing here feeds the vector computation.

use serde::Serialize;

/// Shape descriptor for a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Morphology {
    pub strokes: u32,
    pub symmetry: &'static str,
}

/// A single registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlyphRecord {
    /// Registry identifier, `<script>:<code>-<number>`
    pub id: &'static str,
    /// The glyph itself
    #[serde(rename = "char")]
    pub character: &'static str,
    pub name: &'static str,
    pub origin: &'static str,
    pub morphology: Morphology,
    pub notes: &'static str,
}

static REGISTRY: [GlyphRecord; 2] = [
    GlyphRecord {
        id: "G:KZ-023",
        character: "ϟ",
        name: "Greek Koppa variant",
        origin: "Ancient Greek",
        morphology: Morphology {
            strokes: 3,
            symmetry: "none",
        },
        notes: "Used in numeric contexts as 90 in isopsephy",
    },
    GlyphRecord {
        id: "R:FE-001",
        character: "ᚠ",
        name: "Fehu",
        origin: "Elder Futhark",
        morphology: Morphology {
            strokes: 3,
            symmetry: "vertical",
        },
        notes: "Rune for cattle, wealth",
    },
];

/// The registry in its fixed order.
pub fn registry() -> &'static [GlyphRecord] {
    &REGISTRY
}

/// Look up a record by identifier (exact match).
pub fn find(id: &str) -> Option<&'static GlyphRecord> {
    REGISTRY.iter().find(|record| record.id == id)
}
