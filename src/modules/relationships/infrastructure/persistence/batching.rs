use std::future::Future;

use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;

/// Number of partitions `len` values split into at `partition_size` per partition
pub fn partition_count(len: usize, partition_size: usize) -> usize {
    len.div_ceil(partition_size.max(1))
}

/// Sorted, duplicate-free copy of `ids`, so no value lands in two partitions
pub fn distinct_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Run `run` once per partition of at most `partition_size` values and
/// concatenate the results.
///
/// Partitions are issued one after another. The first failure aborts the call
/// and discards everything collected so far; later partitions are never issued.
pub async fn execute_in_partitions<T, R, F, Fut>(
    values: &[T],
    partition_size: usize,
    mut run: F,
) -> AppResult<Vec<R>>
where
    T: Clone,
    F: FnMut(Vec<T>) -> Fut,
    Fut: Future<Output = AppResult<Vec<R>>>,
{
    let partition_size = partition_size.max(1);
    let total = partition_count(values.len(), partition_size);
    let mut results = Vec::new();

    for (index, partition) in values.chunks(partition_size).enumerate() {
        LogContext::partition_progress(index, total, partition.len());
        results.extend(run(partition.to_vec()).await?);
    }

    Ok(results)
}
