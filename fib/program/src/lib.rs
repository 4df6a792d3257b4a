use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Computes the `n`'th fibonacci number, with `fibonacci(0) == 0`.
///
/// Values are exact at any size. A negative `n` runs zero iterations and
/// yields 0, same as `n == 0`.
pub fn fibonacci(n: i64) -> BigUint {
    let mut curr = BigUint::zero();
    let mut next = BigUint::one();
    for _ in 0..n {
        let new_next = &curr + &next;
        curr = std::mem::replace(&mut next, new_next);
    }
    curr
}
