//! Static division of the discovered files across worker slots.

use std::ops::Range;

/// A contiguous slice of the discovered file list owned by one worker task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// 0-based worker slot this partition is assigned to.
    pub worker: usize,
    /// Indices into the discovered file list.
    pub range: Range<usize>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Files per worker before the last slot absorbs the remainder: `max(1, n / w)`.
pub fn chunk_size(file_count: usize, workers: usize) -> usize {
    (file_count / workers.max(1)).max(1)
}

/// Split `file_count` files into at most `workers` contiguous partitions.
///
/// Worker `i` gets `[i * chunk, (i + 1) * chunk)`; the last worker slot runs to
/// the end of the list. Slots whose start falls past the end are not
/// scheduled, so fewer than `workers` partitions come back when there are
/// fewer files than workers. No files means no partitions.
///
/// # Examples
///
/// ```
/// use bench_runtime::partitioner::partition;
///
/// let parts = partition(10, 3);
/// let ranges: Vec<_> = parts.iter().map(|p| p.range.clone()).collect();
/// assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
/// ```
pub fn partition(file_count: usize, workers: usize) -> Vec<Partition> {
    let workers = workers.max(1);
    let chunk = chunk_size(file_count, workers);
    let mut partitions = Vec::with_capacity(workers.min(file_count));

    for worker in 0..workers {
        let start = worker * chunk;
        if start >= file_count {
            break;
        }
        let end = if worker == workers - 1 {
            file_count
        } else {
            (start + chunk).min(file_count)
        };
        partitions.push(Partition {
            worker,
            range: start..end,
        });
    }

    partitions
}
