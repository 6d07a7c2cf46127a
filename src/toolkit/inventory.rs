//! Inventory dynamic programs.
//!
//! Both tables are indexed by a caller-supplied magnitude (half the coin
//! total, or the carry capacity), so their size is checked against
//! [`MAX_TABLE_CELLS`] before anything is allocated.

use crate::error::ToolkitError;

/// Modulus for [`count_string_possibilities`]
pub const DECODE_MODULUS: u64 = 1_000_000_007;

/// Largest DP table either solver will allocate
pub const MAX_TABLE_CELLS: usize = 1 << 25;

fn check_table(cells: u64) -> Result<usize, ToolkitError> {
    match usize::try_from(cells) {
        Ok(cells) if cells <= MAX_TABLE_CELLS => Ok(cells),
        _ => Err(ToolkitError::TableTooLarge {
            cells,
            limit: MAX_TABLE_CELLS,
        }),
    }
}

/// Smallest possible `|sum(A) - sum(B)|` when splitting `coins` in two
///
/// ```
/// use arcade_ledger::toolkit::optimize_loot_split;
///
/// assert_eq!(optimize_loot_split(&[1_000_000, 2_000_000, 3_000_000]), Ok(0));
/// assert_eq!(optimize_loot_split(&[100]), Ok(100));
/// ```
pub fn optimize_loot_split(coins: &[u64]) -> Result<u64, ToolkitError> {
    let total = coins
        .iter()
        .try_fold(0u64, |acc, &coin| acc.checked_add(coin))
        .ok_or(ToolkitError::ValueOverflow)?;
    let half = check_table(total / 2 + 1)? - 1;

    // reachable[s]: some subset sums to s
    let mut reachable = vec![false; half + 1];
    reachable[0] = true;
    for &coin in coins {
        // Larger than half the total: can never join the smaller side.
        let Some(coin) = usize::try_from(coin).ok().filter(|&c| c <= half) else {
            continue;
        };
        for s in (coin..=half).rev() {
            if reachable[s - coin] {
                reachable[s] = true;
            }
        }
    }

    let best = reachable.iter().rposition(|&r| r).unwrap_or(0) as u64;
    Ok(total - 2 * best)
}

/// Best total value of items fitting in `capacity`, each used at most once
///
/// `items` are `(weight, value)` pairs. A capacity larger than the combined
/// weight of the items is treated as that weight.
///
/// ```
/// use arcade_ledger::toolkit::maximize_carry_value;
///
/// assert_eq!(maximize_carry_value(10, &[(2, 20), (3, 30), (5, 50)]), Ok(100));
/// assert_eq!(maximize_carry_value(10, &[(100, 1000)]), Ok(0));
/// ```
pub fn maximize_carry_value(capacity: usize, items: &[(usize, u64)]) -> Result<u64, ToolkitError> {
    let fitting = items
        .iter()
        .filter(|&&(weight, _)| weight <= capacity)
        .fold(0usize, |acc, &(weight, _)| acc.saturating_add(weight));
    let capacity = capacity.min(fitting);
    if capacity == 0 {
        // Only weightless items fit.
        return items
            .iter()
            .filter(|&&(weight, _)| weight == 0)
            .try_fold(0u64, |acc, &(_, value)| acc.checked_add(value))
            .ok_or(ToolkitError::ValueOverflow);
    }
    check_table(capacity as u64 + 1)?;

    let mut best = vec![0u64; capacity + 1];
    for &(weight, value) in items {
        if weight > capacity {
            continue;
        }
        for w in (weight..=capacity).rev() {
            let with_item = best[w - weight]
                .checked_add(value)
                .ok_or(ToolkitError::ValueOverflow)?;
            best[w] = best[w].max(with_item);
        }
    }
    Ok(best[capacity])
}

/// Number of strings a broken keyboard could have meant by `s`
///
/// The keyboard types "uu" for 'w' and "nn" for 'm', so every adjacent
/// "uu"/"nn" pair may be one letter or two. A 'w' or 'm' in `s` cannot
/// have been typed at all, giving 0. Input is case-insensitive; the count
/// is taken modulo [`DECODE_MODULUS`].
///
/// ```
/// use arcade_ledger::toolkit::count_string_possibilities;
///
/// assert_eq!(count_string_possibilities("uu"), 2);
/// assert_eq!(count_string_possibilities("uuu"), 3);
/// assert_eq!(count_string_possibilities("wow"), 0);
/// assert_eq!(count_string_possibilities(""), 1);
/// ```
pub fn count_string_possibilities(s: &str) -> u64 {
    let chars: Vec<char> = s.chars().map(|c| c.to_ascii_lowercase()).collect();
    if chars.iter().any(|&c| c == 'w' || c == 'm') {
        return 0;
    }

    // ways[i] for the first i chars, rolled into two cells
    let (mut two_back, mut one_back) = (1u64, 1u64);
    for i in 1..chars.len() {
        let mut ways = one_back;
        if chars[i] == chars[i - 1] && matches!(chars[i], 'u' | 'n') {
            ways = (ways + two_back) % DECODE_MODULUS;
        }
        two_back = one_back;
        one_back = ways;
    }
    one_back
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loot_split_empty() {
        assert_eq!(optimize_loot_split(&[]), Ok(0));
    }

    #[test]
    fn test_loot_split_odd_total() {
        assert_eq!(optimize_loot_split(&[1, 2, 4]), Ok(1));
        assert_eq!(optimize_loot_split(&[3, 1, 4, 2, 2]), Ok(0));
    }

    #[test]
    fn test_loot_split_total_overflow() {
        assert_eq!(optimize_loot_split(&[u64::MAX, 1]), Err(ToolkitError::ValueOverflow));
    }

    #[test]
    fn test_loot_split_refuses_huge_table() {
        assert!(matches!(
            optimize_loot_split(&[1 << 40]),
            Err(ToolkitError::TableTooLarge { .. })
        ));
        assert!(matches!(
            optimize_loot_split(&[u64::MAX]),
            Err(ToolkitError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_loot_split_at_table_limit() {
        // half + 1 == MAX_TABLE_CELLS exactly
        let total = 2 * (MAX_TABLE_CELLS as u64 - 1);
        assert_eq!(optimize_loot_split(&[total]), Ok(total));
    }

    #[test]
    fn test_knapsack_edge_cases() {
        assert_eq!(maximize_carry_value(0, &[(1, 10), (2, 20)]), Ok(0));
        assert_eq!(maximize_carry_value(10, &[]), Ok(0));
        assert_eq!(maximize_carry_value(0, &[(0, 7), (1, 10)]), Ok(7));
    }

    #[test]
    fn test_knapsack_prefers_value_density() {
        let items = [(1, 1), (3, 4), (4, 5), (5, 7)];
        assert_eq!(maximize_carry_value(7, &items), Ok(9));
    }

    #[test]
    fn test_knapsack_value_overflow() {
        assert_eq!(
            maximize_carry_value(2, &[(1, u64::MAX), (1, 1)]),
            Err(ToolkitError::ValueOverflow)
        );
    }

    #[test]
    fn test_knapsack_huge_capacity_small_items() {
        let items = [(2, 20), (3, 30)];
        assert_eq!(maximize_carry_value(usize::MAX, &items), Ok(50));
    }

    #[test]
    fn test_knapsack_refuses_huge_table() {
        let items = [(MAX_TABLE_CELLS, 1), (MAX_TABLE_CELLS, 1)];
        assert!(matches!(
            maximize_carry_value(usize::MAX, &items),
            Err(ToolkitError::TableTooLarge { .. })
        ));
    }

    #[test]
    fn test_decode_single_and_mixed() {
        assert_eq!(count_string_possibilities("a"), 1);
        // "uu" -> 2, "nn" -> 2, independent runs multiply
        assert_eq!(count_string_possibilities("uunn"), 4);
        assert_eq!(count_string_possibilities("uunnuunn"), 16);
        // Run of 4 u's: Fibonacci(5)
        assert_eq!(count_string_possibilities("uuuu"), 5);
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(count_string_possibilities("UuNn"), 4);
        assert_eq!(count_string_possibilities("MMMM"), 0);
    }

    #[test]
    fn test_decode_long_run_stays_in_range() {
        let long = "u".repeat(1_000);
        let count = count_string_possibilities(&long);
        assert!(count < DECODE_MODULUS);
        assert!(count > 0);
    }

    #[test]
    fn test_decode_no_cross_letter_pairs() {
        assert_eq!(count_string_possibilities("un"), 1);
        assert_eq!(count_string_possibilities("aa"), 1);
    }
}
