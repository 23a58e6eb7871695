// Digital root by repeated base-10 digit summing.

/// Reduce `n` until it is at most 9.
///
/// 0 stays 0 (the loop never runs), so the result lies in 0..=9.
pub fn digital_root(mut n: u64) -> u64 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
