use crate::cuckoo_filters::{CuckooFilter, Filter};
use std::collections::HashMap;
use tracing::trace;

/// One filter per key, created the first time something is inserted for it.
///
/// All filters are sized for the same expected number of items. A key that
/// never had an insert answers `false` to every lookup.
///
/// ```
/// use c_f::FilterRegistry;
///
/// let mut watched = FilterRegistry::new(6);
/// assert!(watched.insert("user1", b"video1"));
/// assert!(watched.lookup("user1", b"video1"));
/// assert!(!watched.lookup("user2", b"video1"));
/// ```
#[derive(Debug)]
pub struct FilterRegistry<F = CuckooFilter> {
    expected_count: u32,
    filters: HashMap<String, F>,
}

impl FilterRegistry {
    pub fn new(expected_count: u32) -> Self {
        Self::with_expected_count(expected_count)
    }
}

impl<F: Filter> FilterRegistry<F> {
    pub fn with_expected_count(expected_count: u32) -> Self {
        Self {
            expected_count,
            filters: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: &str, value: &[u8]) -> bool {
        let expected_count = self.expected_count;
        let filter = self.filters.entry(key.to_owned()).or_insert_with(|| {
            trace!(key, expected_count, "creating filter");
            F::new(expected_count)
        });
        filter.insert(value)
    }

    pub fn lookup(&self, key: &str, value: &[u8]) -> bool {
        self.filters
            .get(key)
            .map_or(false, |filter| filter.lookup(value))
    }

    pub fn get(&self, key: &str) -> Option<&F> {
        self.filters.get(key)
    }

    pub fn expected_count(&self) -> u32 {
        self.expected_count
    }

    /// number of keys with a filter
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
