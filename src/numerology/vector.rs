// NumerologyVector: the full fingerprint of one input string.
//
// The single entry point the dashboard consumes. Normalization feeds the
// three map sums; the Latin (Pythagorean) sum feeds the digital root and the
// prime signature.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::maps::CharacterMap;
use super::normalize::normalize_text;
use super::primes::{prime_factor_signature, PrimeSignature};
use super::reduce::digital_root;

/// Numeric fingerprints for a single input.
///
/// Built fresh on every call and never mutated afterwards. Field names match
/// the JSON shape the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyVector {
    /// The input exactly as given, before normalization
    pub text_input: String,
    pub pythagorean_sum: u64,
    pub hebrew_gematria: u64,
    pub greek_isopsephy: u64,
    /// Digital root of `pythagorean_sum` (0 when the sum is 0)
    pub digital_root: u64,
    /// Prime signature of `pythagorean_sum`
    pub prime_signature: PrimeSignature,
}

impl NumerologyVector {
    /// The sum for a given map.
    pub fn sum_for(&self, map: CharacterMap) -> u64 {
        match map {
            CharacterMap::Pythagorean => self.pythagorean_sum,
            CharacterMap::Hebrew => self.hebrew_gematria,
            CharacterMap::Greek => self.greek_isopsephy,
        }
    }
}

/// Compute the full vector for `text`. Total: never fails.
pub fn numerology_vector(text: &str) -> NumerologyVector {
    let normalized = normalize_text(text);

    let pythagorean_sum = CharacterMap::Pythagorean.sum(&normalized);
    let hebrew_gematria = CharacterMap::Hebrew.sum(&normalized);
    let greek_isopsephy = CharacterMap::Greek.sum(&normalized);

    let root = if pythagorean_sum > 0 {
        digital_root(pythagorean_sum)
    } else {
        0
    };

    debug!(
        chars = normalized.chars().count(),
        pythagorean = pythagorean_sum,
        hebrew = hebrew_gematria,
        greek = greek_isopsephy,
        "Computed numerology sums"
    );

    NumerologyVector {
        text_input: text.to_string(),
        pythagorean_sum,
        hebrew_gematria,
        greek_isopsephy,
        digital_root: root,
        prime_signature: prime_factor_signature(pythagorean_sum),
    }
}

/// Group vectors by digital root, keeping only roots shared by two or more
/// inputs. Values are indices into `vectors`, in input order.
pub fn shared_roots(vectors: &[NumerologyVector]) -> BTreeMap<u64, Vec<usize>> {
    let mut groups: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
    for (i, vector) in vectors.iter().enumerate() {
        groups.entry(vector.digital_root).or_default().push(i);
    }
    groups.retain(|_, members| members.len() > 1);
    groups
}
