// Numerology engine: character maps, normalization, and number-theoretic
// reductions over the Latin-map sum.

pub mod maps;
pub mod normalize;
pub mod primes;
pub mod reduce;
pub mod vector;
