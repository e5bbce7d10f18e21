//! Cache Entry Module
//!
//! Defines the node stored in the recency list and the handle used to address it.

// == Handle ==
/// Stable index of an entry slot inside the recency list arena.
///
/// A handle stays valid until its entry is detached; afterwards the slot may
/// be reused by a later insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

impl Handle {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

// == Cache Entry ==
/// A single key/value pair plus its links in the recency order.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    /// The key, duplicated from the index so eviction can find it
    pub key: K,
    /// The stored value
    pub value: V,
    /// Neighbor closer to the front (more recently used)
    pub(crate) prev: Option<Handle>,
    /// Neighbor closer to the back (less recently used)
    pub(crate) next: Option<Handle>,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    /// Splits the entry into its key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    // == Is Linked ==
    /// Returns true if the entry has at least one neighbor.
    pub fn is_linked(&self) -> bool {
        self.prev.is_some() || self.next.is_some()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new_is_unlinked() {
        let entry = Entry::new(1, "one");
        assert_eq!(entry.key, 1);
        assert_eq!(entry.value, "one");
        assert!(!entry.is_linked());
    }

    #[test]
    fn test_entry_into_pair() {
        let entry = Entry::new("k".to_string(), 42);
        assert_eq!(entry.into_pair(), ("k".to_string(), 42));
    }

    #[test]
    fn test_handle_index() {
        assert_eq!(Handle(7).index(), 7);
    }
}
