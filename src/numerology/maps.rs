// Character maps: the three historical letter-to-number systems.
//
// Each map is total: any character outside its declared alphabet weighs 0.
// The Latin map is computed from alphabet position; Hebrew and Greek are
// fixed tables.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// Hebrew gematria values for the 22 base letters (final forms are unmapped).
const HEBREW: [(char, u64); 22] = [
    ('א', 1),
    ('ב', 2),
    ('ג', 3),
    ('ד', 4),
    ('ה', 5),
    ('ו', 6),
    ('ז', 7),
    ('ח', 8),
    ('ט', 9),
    ('י', 10),
    ('כ', 20),
    ('ל', 30),
    ('מ', 40),
    ('נ', 50),
    ('ס', 60),
    ('ע', 70),
    ('פ', 80),
    ('צ', 90),
    ('ק', 100),
    ('ר', 200),
    ('ש', 300),
    ('ת', 400),
];

/// Greek isopsephy values, lowercase only. Includes the archaic stigma (6)
/// and koppa (90); sampi and final sigma are unmapped.
const GREEK: [(char, u64); 26] = [
    ('α', 1),
    ('β', 2),
    ('γ', 3),
    ('δ', 4),
    ('ε', 5),
    ('ϛ', 6),
    ('ζ', 7),
    ('η', 8),
    ('θ', 9),
    ('ι', 10),
    ('κ', 20),
    ('λ', 30),
    ('μ', 40),
    ('ν', 50),
    ('ξ', 60),
    ('ο', 70),
    ('π', 80),
    ('ϙ', 90),
    ('ρ', 100),
    ('σ', 200),
    ('τ', 300),
    ('υ', 400),
    ('φ', 500),
    ('χ', 600),
    ('ψ', 700),
    ('ω', 800),
];

/// One of the three letter-to-number systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterMap {
    /// Latin letters, cyclic 1-9 by alphabet position, case-insensitive
    Pythagorean,
    /// Hebrew gematria
    Hebrew,
    /// Greek isopsephy
    Greek,
}

impl CharacterMap {
    pub const ALL: [CharacterMap; 3] = [
        CharacterMap::Pythagorean,
        CharacterMap::Hebrew,
        CharacterMap::Greek,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterMap::Pythagorean => "pythagorean",
            CharacterMap::Hebrew => "hebrew",
            CharacterMap::Greek => "greek",
        }
    }

    /// Human-readable name for headings.
    pub fn name(&self) -> &'static str {
        match self {
            CharacterMap::Pythagorean => "Pythagorean (Latin)",
            CharacterMap::Hebrew => "Hebrew gematria",
            CharacterMap::Greek => "Greek isopsephy",
        }
    }

    /// Weight of a single character. Never fails; unmapped characters are 0.
    pub fn weight(&self, ch: char) -> u64 {
        match self {
            CharacterMap::Pythagorean => latin_weight(ch),
            CharacterMap::Hebrew => table_weight(&HEBREW, ch),
            CharacterMap::Greek => table_weight(&GREEK, ch),
        }
    }

    /// Sum of weights over every character of `text`.
    ///
    /// No normalization happens here. Callers that want accented letters to
    /// count should pass text through `normalize::normalize_text` first.
    pub fn sum(&self, text: &str) -> u64 {
        text.chars().map(|ch| self.weight(ch)).sum()
    }

    /// The full declared alphabet with its weights, in table order.
    ///
    /// For the Latin map only uppercase letters are listed; lowercase
    /// letters share the same weights.
    pub fn entries(&self) -> Vec<(char, u64)> {
        match self {
            CharacterMap::Pythagorean => ('A'..='Z').map(|ch| (ch, latin_weight(ch))).collect(),
            CharacterMap::Hebrew => HEBREW.to_vec(),
            CharacterMap::Greek => GREEK.to_vec(),
        }
    }
}

impl fmt::Display for CharacterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterMap {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "pythagorean" | "latin" => Ok(CharacterMap::Pythagorean),
            "hebrew" | "gematria" => Ok(CharacterMap::Hebrew),
            "greek" | "isopsephy" => Ok(CharacterMap::Greek),
            other => anyhow::bail!(
                "Unknown character map '{other}'. Expected one of: pythagorean, hebrew, greek"
            ),
        }
    }
}

/// ((position in alphabet) mod 9) + 1 for ASCII letters, 0 otherwise.
fn latin_weight(ch: char) -> u64 {
    if !ch.is_ascii_alphabetic() {
        return 0;
    }
    let position = (ch.to_ascii_uppercase() as u8 - b'A') as u64;
    position % 9 + 1
}

fn table_weight(table: &[(char, u64)], ch: char) -> u64 {
    table
        .iter()
        .find(|(letter, _)| *letter == ch)
        .map(|(_, value)| *value)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_cycle_wraps_every_nine_letters() {
        let map = CharacterMap::Pythagorean;
        assert_eq!(map.weight('A'), 1);
        assert_eq!(map.weight('I'), 9);
        assert_eq!(map.weight('J'), 1);
        assert_eq!(map.weight('R'), 9);
        assert_eq!(map.weight('S'), 1);
        assert_eq!(map.weight('Z'), 8);
    }

    #[test]
    fn test_latin_ignores_non_ascii_letters() {
        // Accented letters only count after normalization
        assert_eq!(CharacterMap::Pythagorean.weight('é'), 0);
        assert_eq!(CharacterMap::Pythagorean.weight('7'), 0);
    }

    #[test]
    fn test_hebrew_final_forms_are_unmapped() {
        assert_eq!(CharacterMap::Hebrew.weight('ך'), 0);
        assert_eq!(CharacterMap::Hebrew.weight('ם'), 0);
    }

    #[test]
    fn test_greek_archaic_numerals() {
        assert_eq!(CharacterMap::Greek.weight('ϛ'), 6);
        assert_eq!(CharacterMap::Greek.weight('ϙ'), 90);
        // Uppercase and final sigma are outside the table
        assert_eq!(CharacterMap::Greek.weight('Α'), 0);
        assert_eq!(CharacterMap::Greek.weight('ς'), 0);
    }

    #[test]
    fn test_entries_cover_declared_alphabets() {
        assert_eq!(CharacterMap::Pythagorean.entries().len(), 26);
        assert_eq!(CharacterMap::Hebrew.entries().len(), 22);
        assert_eq!(CharacterMap::Greek.entries().len(), 26);

        for map in CharacterMap::ALL {
            for (ch, value) in map.entries() {
                assert_eq!(map.weight(ch), value, "{map} entry {ch} disagrees with weight()");
            }
        }
    }

    #[test]
    fn test_from_str_accepts_aliases() {
        assert_eq!("Latin".parse::<CharacterMap>().unwrap(), CharacterMap::Pythagorean);
        assert_eq!("gematria".parse::<CharacterMap>().unwrap(), CharacterMap::Hebrew);
        assert_eq!("GREEK".parse::<CharacterMap>().unwrap(), CharacterMap::Greek);
        assert!("runic".parse::<CharacterMap>().is_err());
    }
}
