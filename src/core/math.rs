use crate::error::{Error, Result};

/// `n!` with `0! = 1`.
///
/// Errors:
/// - `Error::Overflow` for `n > 20`.
pub fn factorial(n: u32) -> Result<u64> {
    (1..=u64::from(n))
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or(Error::Overflow { op: "factorial", n })
}

/// Fibonacci sequence seeded with `a = b = 1`, stepping `a, b = a + b, a` `n` times
/// and returning `a`: 1, 2, 3, 5, 8, ...
///
/// Errors:
/// - `Error::Overflow` when `a` no longer fits in a `u64`.
pub fn fibonacci(n: u32) -> Result<u64> {
    let (mut a, mut b) = (1u64, 1u64);
    for _ in 0..n {
        let next = a.checked_add(b).ok_or(Error::Overflow { op: "fibonacci", n })?;
        b = a;
        a = next;
    }
    Ok(a)
}
