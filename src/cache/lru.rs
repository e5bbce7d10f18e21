//! Recency List Module
//!
//! Implements the access-ordered sequence behind LRU eviction.
//!
//! Entries live in a slot arena and are linked by [`Handle`] indices, so
//! moving an entry to the front or detaching it is O(1) without aliased
//! pointers.
//!
//! ```text
//!   head ─► [h1] ◄──► [h4] ◄──► [h2] ◄── tail
//!           MRU                  LRU
//! ```

use crate::cache::{Entry, Handle};

// == Recency List ==
/// Doubly linked list of entries ordered by access time.
///
/// - Front = Most recently used
/// - Back = Least recently used
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Entry slots, `None` when vacant
    slots: Vec<Option<Entry<K, V>>>,
    /// Vacant slot indices available for reuse
    free: Vec<usize>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates a new empty recency list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    // == Add To Front ==
    /// Creates a new entry and links it at the front.
    ///
    /// The caller guarantees the key is not already present.
    pub fn add_to_front(&mut self, key: K, value: V) -> Handle {
        let entry = Entry::new(key, value);
        let handle = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                Handle(idx)
            }
            None => {
                self.slots.push(Some(entry));
                Handle(self.slots.len() - 1)
            }
        };
        self.len += 1;
        self.attach_front(handle);
        handle
    }

    // == Move To Front ==
    /// Marks an entry as most recently used.
    ///
    /// No-op if the entry is already at the front or the handle is vacant.
    pub fn move_to_front(&mut self, handle: Handle) {
        if self.head == Some(handle) || self.get(handle).is_none() {
            return;
        }
        self.detach(handle);
        self.attach_front(handle);
    }

    // == Remove Tail ==
    /// Detaches and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn remove_tail(&mut self) -> Option<Entry<K, V>> {
        let tail = self.tail?;
        self.remove_node(tail)
    }

    // == Remove Node ==
    /// Detaches an arbitrary entry and frees its slot.
    ///
    /// Returns None if the handle is vacant.
    pub fn remove_node(&mut self, handle: Handle) -> Option<Entry<K, V>> {
        self.get(handle)?;
        self.detach(handle);
        let mut entry = self.slots[handle.0].take()?;
        self.free.push(handle.0);
        self.len -= 1;
        entry.prev = None;
        entry.next = None;
        Some(entry)
    }

    // == Peek ==
    /// Returns the handle of the most recently used entry.
    pub fn front(&self) -> Option<Handle> {
        self.head
    }

    /// Returns the handle of the least recently used entry.
    pub fn back(&self) -> Option<Handle> {
        self.tail
    }

    /// Returns the entry behind a handle, if the slot is occupied.
    pub fn get(&self, handle: Handle) -> Option<&Entry<K, V>> {
        self.slots.get(handle.0).and_then(|slot| slot.as_ref())
    }

    /// Returns a mutable reference to the value behind a handle.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut V> {
        self.slots
            .get_mut(handle.0)
            .and_then(|slot| slot.as_mut())
            .map(|entry| &mut entry.value)
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Iteration ==
    /// Iterates entries from front (MRU) to back (LRU).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    // == Clear ==
    /// Drops every entry and releases all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Linking ==
    fn entry_mut(&mut self, handle: Handle) -> &mut Entry<K, V> {
        match self.slots.get_mut(handle.0).and_then(|slot| slot.as_mut()) {
            Some(entry) => entry,
            None => unreachable!("linked handle {:?} points at a vacant slot", handle),
        }
    }

    /// Unlinks an occupied entry, re-linking its neighbors.
    fn detach(&mut self, handle: Handle) {
        let (prev, next) = {
            let entry = self.entry_mut(handle);
            (entry.prev.take(), entry.next.take())
        };

        match prev {
            Some(prev) => self.entry_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.entry_mut(next).prev = prev,
            None => self.tail = prev,
        }
    }

    /// Links an unlinked, occupied entry at the front.
    fn attach_front(&mut self, handle: Handle) {
        let old_head = self.head;
        {
            let entry = self.entry_mut(handle);
            entry.prev = None;
            entry.next = old_head;
        }
        match old_head {
            Some(old) => self.entry_mut(old).prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
    }

    /// Walks both directions and checks link consistency.
    #[cfg(test)]
    pub(crate) fn check_links(&self) -> bool {
        let forward: Vec<Handle> = self.handles_from(self.head, |e| e.next);
        let mut backward: Vec<Handle> = self.handles_from(self.tail, |e| e.prev);
        backward.reverse();
        forward.len() == self.len
            && forward == backward
            && self.slots.iter().filter(|s| s.is_some()).count() == self.len
    }

    #[cfg(test)]
    fn handles_from(
        &self,
        start: Option<Handle>,
        step: impl Fn(&Entry<K, V>) -> Option<Handle>,
    ) -> Vec<Handle> {
        let mut out = Vec::new();
        let mut current = start;
        while let Some(handle) = current {
            if out.len() > self.slots.len() {
                break;
            }
            out.push(handle);
            current = self.get(handle).and_then(&step);
        }
        out
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Front-to-back iterator over `(key, value)` pairs.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    current: Option<Handle>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.list.get(self.current?)?;
        self.current = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
