//! # Content snapshots
//!
//! [`ContentStore`] holds one collection (standards or guides) as a full,
//! consistent snapshot of the backend's last successful response. There is no
//! merge or patch path: every mutation round-trip is followed by a wholesale
//! re-fetch, so the snapshot can never drift from the server at the cost of
//! one extra request per mutation.

/// A full-snapshot collection, replaced wholesale after each successful fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentStore<T> {
    items: Vec<T>,
}

impl<T> ContentStore<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the snapshot with the server's latest response.
    /// Server order is preserved; nothing is sorted client-side.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// The current snapshot, in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop everything (logout or session expiry).
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_all_swaps_the_snapshot() {
        let mut store = ContentStore::new();
        assert!(store.is_empty());

        store.replace_all(vec![3, 1, 2]);
        assert_eq!(store.items(), [3, 1, 2]); // server order, unsorted

        store.replace_all(vec![7]);
        assert_eq!(store.items(), [7]);
    }

    #[test]
    fn clear_empties_the_snapshot() {
        let mut store = ContentStore::new();
        store.replace_all(vec!["a", "b"]);
        store.clear();
        assert!(store.is_empty());
    }
}
