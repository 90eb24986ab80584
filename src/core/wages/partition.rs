use std::ops::Range;

/// Split `len` roster indices into `workers` contiguous chunks.
///
/// Every chunk has `len / workers` items except the last one, which also
/// absorbs the remainder. A worker count of 0 is treated as 1.
pub fn partition(len: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = len / workers;

    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { len } else { start + chunk };
            start..end
        })
        .collect()
}

/// Worker count reported by the host, never below 1.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
