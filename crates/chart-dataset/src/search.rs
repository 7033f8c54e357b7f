// File: crates/chart-dataset/src/search.rs
// Summary: Binary search over entries ordered by x-index (duplicates allowed).
// Notes:
// - Input is expected ascending by `x_index`. Unsorted input still returns a
//   result, it is just not meaningful.

use crate::entry::Entry;

/// Index of the first entry whose x-index equals `x`.
///
/// On a miss this returns the last midpoint the search visited, which is close
/// to where `x` would sit but not guaranteed to be the numerically nearest
/// entry. Returns `None` only for an empty slice.
pub fn index_for_x_index(entries: &[Entry], x: i64) -> Option<usize> {
    let mut low = 0usize;
    let mut high = entries.len(); // exclusive
    let mut closest = None;

    while low < high {
        let mut m = low + (high - low - 1) / 2;
        let mid_x = entries[m].x_index;

        if mid_x == x {
            while m > 0 && entries[m - 1].x_index == x {
                m -= 1;
            }
            return Some(m);
        }

        if x > mid_x {
            low = m + 1;
        } else {
            high = m;
        }
        closest = Some(m);
    }

    closest
}

/// All contiguous entries sharing exactly x-index `x`, in stored order.
/// Empty when no entry has that x-index.
pub fn entries_for_x_index(entries: &[Entry], x: i64) -> &[Entry] {
    let mut low = 0usize;
    let mut high = entries.len();

    while low < high {
        let m = low + (high - low - 1) / 2;
        let mid_x = entries[m].x_index;

        if mid_x == x {
            let mut start = m;
            while start > 0 && entries[start - 1].x_index == x {
                start -= 1;
            }
            let mut end = m + 1;
            while end < entries.len() && entries[end].x_index == x {
                end += 1;
            }
            return &entries[start..end];
        }

        if x > mid_x {
            low = m + 1;
        } else {
            high = m;
        }
    }

    &[]
}

/// Position after the last entry with x-index `<= x`; inserting there keeps
/// ascending order and puts a new duplicate after existing ones.
pub fn insertion_point(entries: &[Entry], x: i64) -> usize {
    entries.partition_point(|e| e.x_index <= x)
}

pub fn is_sorted_by_x(entries: &[Entry]) -> bool {
    entries.windows(2).all(|w| w[0].x_index <= w[1].x_index)
}
