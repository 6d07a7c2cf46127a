//! Prime helpers for table sizing and the secondary hash.
//!
//! Table capacities are always prime so that any stride in `1..capacity`
//! is coprime to the capacity and a double-hash probe visits every slot.

/// Trial division up to sqrt(n)
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Smallest prime >= n
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

/// Largest prime strictly below n, or `None` when n <= 2
pub fn prev_prime(n: usize) -> Option<usize> {
    (2..n).rev().find(|&c| is_prime(c))
}
