//! Size-bounded partitioning of the record list
//!
//! Sizes are the JSON-serialized byte length of each record, which is what
//! upload-limited sinks receive.

use crate::app::models::IndexedRecord;

/// Plan chunks of record positions whose summed size stays within `max_bytes`
///
/// When the whole list fits, a single chunk holds every position. Otherwise
/// records are packed greedily in order; a record larger than the budget
/// gets a chunk of its own.
pub fn plan_chunks(records: &[IndexedRecord], max_bytes: usize) -> Vec<Vec<usize>> {
    if records.is_empty() {
        return Vec::new();
    }

    let sizes: Vec<usize> = records.iter().map(|entry| entry.record.json_size()).collect();
    // Array brackets plus one separator between neighbours
    let whole = sizes.iter().sum::<usize>() + sizes.len() + 1;
    if whole <= max_bytes {
        return vec![(0..records.len()).collect()];
    }

    let mut chunks = Vec::new();
    let mut current = Vec::new();
    let mut current_size = 0;

    for (position, size) in sizes.into_iter().enumerate() {
        if current_size + size > max_bytes && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_size = 0;
        }
        current.push(position);
        current_size += size;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
