use serde::{Deserialize, Serialize};

/// Stable reference to a node stored in a [`ListArena`].
///
/// Handles stay valid until the node they point to is removed. A slot freed by
/// removal is reused by a later insertion, so a stale handle must not be kept
/// across a [`ListArena::retain`] sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(u32);

impl Handle {
    /// Index of the slot backing this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<u32> },
}

/// A doubly linked list whose nodes live in one contiguous slot vector.
///
/// Links are slot indices rather than pointers, so the list owns every node
/// outright. Removed slots are chained on a free list and handed out again by
/// [`push_front`](Self::push_front) before the vector grows, which keeps the
/// storage bounded by the peak number of live nodes.
#[derive(Debug, Clone)]
pub struct ListArena<T> {
    slots: Vec<Slot<T>>,
    head: Option<Handle>,
    free: Option<u32>,
    len: usize,
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            free: None,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            free: None,
            len: 0,
        }
    }

    /// Number of nodes reachable from the head.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots allocated, occupied or not.
    pub fn capacity_used(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn head(&self) -> Option<Handle> {
        self.head
    }

    /// Insert `value` as the new head and return its handle.
    pub fn push_front(&mut self, value: T) -> Handle {
        let node = Node {
            value,
            prev: None,
            next: self.head,
        };

        let handle = match self.free {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                self.free = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                *slot = Slot::Occupied(node);
                Handle(index)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot::Occupied(node));
                Handle(index)
            }
        };

        if let Some(old_head) = self.head {
            self.node_mut(old_head).prev = Some(handle);
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    /// Borrow the value behind `handle`, or `None` if the slot is vacant.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        match self.slots.get(handle.index()) {
            Some(Slot::Occupied(node)) => Some(&node.value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        match self.slots.get_mut(handle.index()) {
            Some(Slot::Occupied(node)) => Some(&mut node.value),
            _ => None,
        }
    }

    /// Successor of `handle` in list order.
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        match self.slots.get(handle.index()) {
            Some(Slot::Occupied(node)) => node.next,
            _ => None,
        }
    }

    /// Predecessor of `handle` in list order.
    pub fn prev(&self, handle: Handle) -> Option<Handle> {
        match self.slots.get(handle.index()) {
            Some(Slot::Occupied(node)) => node.prev,
            _ => None,
        }
    }

    /// Walk the list once from the head and unlink every node for which
    /// `keep` returns `false`. Returns the number of nodes removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.head;

        while let Some(handle) = cursor {
            let (prev, next, kept) = {
                let node = self.node(handle);
                (node.prev, node.next, keep(&node.value))
            };
            cursor = next;

            if kept {
                continue;
            }

            match (prev, next) {
                (None, None) => self.head = None,
                (None, Some(next)) => {
                    self.node_mut(next).prev = None;
                    self.head = Some(next);
                }
                (Some(prev), None) => self.node_mut(prev).next = None,
                (Some(prev), Some(next)) => {
                    self.node_mut(next).prev = Some(prev);
                    self.node_mut(prev).next = Some(next);
                }
            }

            self.release(handle);
            removed += 1;
        }

        removed
    }

    /// Drop every node and forget all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.free = None;
        self.len = 0;
    }

    /// Iterate over values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: self,
            cursor: self.head,
        }
    }

    fn node(&self, handle: Handle) -> &Node<T> {
        match &self.slots[handle.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked handle points at a vacant slot"),
        }
    }

    fn node_mut(&mut self, handle: Handle) -> &mut Node<T> {
        match &mut self.slots[handle.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("linked handle points at a vacant slot"),
        }
    }

    fn release(&mut self, handle: Handle) {
        self.slots[handle.index()] = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(handle.0);
        self.len -= 1;
    }
}

pub struct Iter<'a, T> {
    arena: &'a ListArena<T>,
    cursor: Option<Handle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.cursor?;
        let node = self.arena.node(handle);
        self.cursor = node.next;
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a ListArena<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_of(values: &[u32]) -> ListArena<u32> {
        let mut arena = ListArena::new();
        for &v in values {
            arena.push_front(v);
        }
        arena
    }

    /// Check that forward and backward links agree and the length matches.
    fn assert_links_consistent(arena: &ListArena<u32>) {
        let mut count = 0;
        let mut prev = None;
        let mut cursor = arena.head();
        while let Some(handle) = cursor {
            assert_eq!(arena.prev(handle), prev);
            prev = Some(handle);
            cursor = arena.next(handle);
            count += 1;
        }
        assert_eq!(count, arena.len());
    }

    #[test]
    fn test_push_front_orders_newest_first() {
        let arena = arena_of(&[1, 2, 3]);
        let values: Vec<u32> = arena.iter().copied().collect();
        assert_eq!(values, vec![3, 2, 1]);
        assert_links_consistent(&arena);
    }

    #[test]
    fn test_retain_removes_head() {
        let mut arena = arena_of(&[1, 2, 3]);
        assert_eq!(arena.retain(|&v| v != 3), 1);
        assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
        assert_links_consistent(&arena);
    }

    #[test]
    fn test_retain_removes_tail() {
        let mut arena = arena_of(&[1, 2, 3]);
        assert_eq!(arena.retain(|&v| v != 1), 1);
        assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![3, 2]);
        assert_links_consistent(&arena);
    }

    #[test]
    fn test_retain_removes_interior() {
        let mut arena = arena_of(&[1, 2, 3]);
        assert_eq!(arena.retain(|&v| v != 2), 1);
        assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
        assert_links_consistent(&arena);
    }

    #[test]
    fn test_retain_singleton_becomes_empty() {
        let mut arena = arena_of(&[7]);
        assert_eq!(arena.retain(|_| false), 1);
        assert!(arena.is_empty());
        assert_eq!(arena.head(), None);
    }

    #[test]
    fn test_retain_adjacent_runs() {
        let mut arena = arena_of(&[1, 2, 3, 4, 5, 6]);
        // Drops 6,5 (head run), 3 (interior), 1 (tail).
        let removed = arena.retain(|&v| v == 4 || v == 2);
        assert_eq!(removed, 4);
        assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![4, 2]);
        assert_links_consistent(&arena);
    }

    #[test]
    fn test_retain_keep_all_is_noop() {
        let mut arena = arena_of(&[1, 2, 3]);
        assert_eq!(arena.retain(|_| true), 0);
        assert_eq!(arena.len(), 3);
        assert_links_consistent(&arena);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut arena = arena_of(&[1, 2, 3, 4]);
        arena.retain(|&v| v % 2 == 0);
        assert_eq!(arena.capacity_used(), 4);

        arena.push_front(10);
        arena.push_front(11);
        assert_eq!(arena.capacity_used(), 4);
        assert_eq!(arena.iter().copied().collect::<Vec<_>>(), vec![11, 10, 4, 2]);
        assert_links_consistent(&arena);

        arena.push_front(12);
        assert_eq!(arena.capacity_used(), 5);
    }

    #[test]
    fn test_get_vacant_slot_is_none() {
        let mut arena = ListArena::new();
        let h = arena.push_front(1u32);
        arena.retain(|_| false);
        assert!(arena.get(h).is_none());
        assert!(arena.next(h).is_none());
    }

    #[test]
    fn test_clear() {
        let mut arena = arena_of(&[1, 2]);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.iter().count(), 0);
        assert_eq!(arena.capacity_used(), 0);
    }
}
