//! Cooldown task scheduling.

use std::collections::{BinaryHeap, VecDeque};

use crate::error::ToolkitError;

/// Fewest time slots to run every task when equal tasks need `cooldown`
/// idle-or-other slots between runs
///
/// Greedy: each slot runs the task with the most remaining copies among
/// those not cooling down. Tasks are letters, case-insensitive.
///
/// ```
/// use arcade_ledger::toolkit::min_intervals;
///
/// let tasks = ['A', 'A', 'A', 'B', 'B', 'B'];
/// assert_eq!(min_intervals(&tasks, 2), Ok(8));
/// ```
pub fn min_intervals(tasks: &[char], cooldown: usize) -> Result<usize, ToolkitError> {
    let mut counts = [0usize; 26];
    for &task in tasks {
        if !task.is_ascii_alphabetic() {
            return Err(ToolkitError::InvalidTask(task));
        }
        counts[(task.to_ascii_uppercase() as u8 - b'A') as usize] += 1;
    }

    let mut ready: BinaryHeap<usize> = counts.iter().copied().filter(|&c| c > 0).collect();
    // (remaining copies, slot at which it may run again)
    let mut cooling: VecDeque<(usize, usize)> = VecDeque::new();
    let mut time = 0;

    while !ready.is_empty() || !cooling.is_empty() {
        time += 1;

        if let Some(count) = ready.pop() {
            if count > 1 {
                cooling.push_back((count - 1, time + cooldown));
            }
        }

        if let Some(&(count, available_at)) = cooling.front() {
            if available_at == time {
                ready.push(count);
                cooling.pop_front();
            }
        }
    }

    Ok(time)
}
