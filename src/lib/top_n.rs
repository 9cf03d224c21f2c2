//! Top-N selection by count.

use crate::WordFreq;
use crate::error::{Result, WordCloudError};

/// Move the `n` highest-count entries to the front of `entries` and drop the
/// rest. `n` is clamped to `entries.len()`.
///
/// Uses `select_nth_unstable_by`, so this runs in expected linear time and
/// leaves the survivors in no particular order. Entries tied with the n-th
/// count may go either way.
#[tracing::instrument(skip(entries), fields(table_size = entries.len()))]
pub fn select_top<K>(mut entries: Vec<WordFreq<K>>, n: usize) -> Result<Vec<WordFreq<K>>> {
    let n = n.min(entries.len());
    if n == 0 {
        return Err(WordCloudError::EmptySelection);
    }

    if n < entries.len() {
        entries.select_nth_unstable_by(n - 1, |a, b| b.1.cmp(&a.1));
        entries.truncate(n);
    }
    tracing::debug!(selected = n, "top entries selected");
    Ok(entries)
}

/// Smallest and largest count among `entries`. Requires a scan since
/// selection leaves them unordered.
pub fn count_range<K>(entries: &[WordFreq<K>]) -> Option<(u32, u32)> {
    entries.iter().fold(None, |acc, &(_, count)| match acc {
        None => Some((count, count)),
        Some((lo, hi)) => Some((lo.min(count), hi.max(count))),
    })
}
