// Prime factor signature: trial-division factorization into a
// factor -> multiplicity map.
//
// 0 and 1 have no prime factorization; they map to the sentinel signatures
// {0: 1} and {1: 1} so every input produces a non-empty signature.

use std::collections::BTreeMap;

/// Factor -> multiplicity, ascending by factor.
pub type PrimeSignature = BTreeMap<u64, u32>;

/// Factorize `n` by trial division.
///
/// Divisors advance by one without skipping composites; a composite never
/// divides the cofactor because its prime factors were already removed. Once
/// the next divisor squared exceeds the cofactor, the cofactor is prime.
pub fn prime_factor_signature(n: u64) -> PrimeSignature {
    let mut factors = PrimeSignature::new();

    match n {
        0 | 1 => {
            factors.insert(n, 1);
            return factors;
        }
        _ => {}
    }

    let mut remaining = n;
    let mut divisor: u64 = 2;
    while remaining > 1 {
        while remaining % divisor == 0 {
            *factors.entry(divisor).or_insert(0) += 1;
            remaining /= divisor;
        }
        divisor += 1;
        if divisor.saturating_mul(divisor) > remaining && remaining > 1 {
            factors.insert(remaining, 1);
            break;
        }
    }

    factors
}

/// Multiply a signature back out. `None` if the product overflows `u64`.
///
/// The sentinel signatures recompose to their own keys: {0: 1} -> 0,
/// {1: 1} -> 1.
pub fn signature_product(signature: &PrimeSignature) -> Option<u64> {
    signature
        .iter()
        .try_fold(1u64, |acc, (&factor, &power)| {
            factor.checked_pow(power).and_then(|p| acc.checked_mul(p))
        })
}

/// Render a signature as `2^2 × 3`.
pub fn format_signature(signature: &PrimeSignature) -> String {
    signature
        .iter()
        .map(|(factor, power)| {
            if *power == 1 {
                factor.to_string()
            } else {
                format!("{factor}^{power}")
            }
        })
        .collect::<Vec<_>>()
        .join(" × ")
}
