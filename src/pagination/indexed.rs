use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::error::{PaginationError, PaginationResult};
use super::ensure_positive;
use crate::dataset::Row;

/// A page addressed by key, with the key to resume from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyperIndex {
    pub index: usize,
    pub data: Vec<Row>,
    /// Rows actually returned, which may be fewer than requested at the end
    pub page_size: usize,
    pub next_index: usize,
}

/// Rows keyed by their load-time position.
///
/// Keys are assigned `0..len` once and never reused or shifted. Removing a
/// row leaves a hole, so a key always names the same row or nothing.
///
/// `build` clones every row into the map, so next to the cached dataset the
/// rows are held twice for as long as the index lives. That is fine for a
/// small dataset that stays static after load; larger data should key into
/// the cached rows instead of copying them. The copy also keeps removals
/// from touching the cached rows.
#[derive(Debug)]
pub struct IndexedDataset {
    rows: RwLock<BTreeMap<usize, Row>>,
    len: usize,
}

impl IndexedDataset {
    pub fn build(rows: &[Row]) -> Self {
        let map: BTreeMap<usize, Row> = rows.iter().cloned().enumerate().collect();
        debug!(keys = map.len(), "built key index");
        Self {
            rows: RwLock::new(map),
            len: rows.len(),
        }
    }

    /// Number of keys ever assigned, live or removed
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of keys still present
    pub fn live_len(&self) -> usize {
        self.read().len()
    }

    pub fn contains(&self, key: usize) -> bool {
        self.read().contains_key(&key)
    }

    pub fn get(&self, key: usize) -> Option<Row> {
        self.read().get(&key).cloned()
    }

    /// Drop a key; every other key keeps its row
    pub fn remove(&self, key: usize) -> Option<Row> {
        let removed = self.write().remove(&key);
        if removed.is_some() {
            debug!(key, "removed key from index");
        }
        removed
    }

    /// Collect up to `page_size` live rows starting at key `index`.
    ///
    /// The scan stops after `page_size` rows or at the last assigned key,
    /// whichever comes first. `next_index` is one past the last key visited,
    /// so passing it back continues without repeating or skipping rows even
    /// if earlier keys are removed in between.
    pub fn hyper_index(&self, index: usize, page_size: usize) -> PaginationResult<HyperIndex> {
        if index >= self.len {
            return Err(PaginationError::OutOfRange {
                index,
                len: self.len,
            });
        }
        ensure_positive("page_size", page_size)?;

        let rows = self.read();
        let mut data = Vec::with_capacity(page_size);
        let mut next_index = self.len;
        for (&key, row) in rows.range(index..self.len) {
            data.push(row.clone());
            if data.len() == page_size {
                next_index = key + 1;
                break;
            }
        }
        drop(rows);

        debug!(index, returned = data.len(), next_index, "built index page");
        Ok(HyperIndex {
            index,
            page_size: data.len(),
            data,
            next_index,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<usize, Row>> {
        // Writers only remove whole entries, so a poisoned map is still consistent
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<usize, Row>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}
