//! Singly-linked list over external storage.
//!
//! Nodes live in a [`Storage`]; the list only tracks the head, the tail and
//! the length. Links are storage indices, so the list never holds a pointer
//! into memory it does not own.
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same storage instance.
//! Passing a different storage is a logic error: operations will panic on a
//! link that names a vacant slot, or silently operate on foreign nodes.
//!
//! # Example
//!
//! ```
//! use nexus_slist::{ArenaListStorage, ListError, SList};
//!
//! let mut storage: ArenaListStorage<u64> = ArenaListStorage::with_capacity(16);
//! let mut list: SList<u64, ArenaListStorage<u64>> = SList::new();
//!
//! list.push_back(&mut storage, 10);
//! list.push_back(&mut storage, 20);
//! list.push_back(&mut storage, 30);
//!
//! list.insert_at(&mut storage, 1, 99).unwrap();
//! assert_eq!(list.iter(&storage).copied().collect::<Vec<_>>(), [10, 99, 20, 30]);
//!
//! assert_eq!(list.remove_value(&mut storage, &20), Ok(20));
//! assert_eq!(
//!     list.get(&storage, 5),
//!     Err(ListError::OutOfRange { position: 5, len: 3 })
//! );
//! ```
//!
//! # Sharing Storage
//!
//! Several lists can draw nodes from one storage pool. Each node still
//! belongs to exactly one list.
//!
//! ```
//! use nexus_slist::{ArenaListStorage, SList};
//!
//! let mut pool: ArenaListStorage<&str> = ArenaListStorage::new();
//! let mut evens: SList<&str, ArenaListStorage<&str>> = SList::new();
//! let mut odds: SList<&str, ArenaListStorage<&str>> = SList::new();
//!
//! evens.push_back(&mut pool, "zero");
//! odds.push_back(&mut pool, "one");
//! evens.push_back(&mut pool, "two");
//!
//! assert_eq!(evens.len(), 2);
//! assert_eq!(odds.front(&pool), Some(&"one"));
//! ```

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::{Arena, Index, ListError, OutOfRange, Storage};

/// Arena storage holding list nodes.
pub type ArenaListStorage<T, Idx = u32> = Arena<ListNode<T, Idx>, Idx>;

/// `slab::Slab` storage holding list nodes.
#[cfg(feature = "slab")]
pub type SlabListStorage<T> = slab::Slab<ListNode<T, usize>>;

/// A node in the chain: one value and the link to its successor.
///
/// Users only see `&T` / `&mut T`; the node layout is an implementation
/// detail of the list.
#[derive(Debug, Clone)]
pub struct ListNode<T, Idx: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: Idx,
}

impl<T, Idx: Index> ListNode<T, Idx> {
    #[inline]
    fn new(data: T, next: Idx) -> Self {
        Self { data, next }
    }
}

/// A singly-linked list over external storage.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`ArenaListStorage<T>`])
/// - `Idx`: Index type (default `u32`)
#[derive(Debug)]
pub struct SList<T, S, Idx: Index = u32>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    head: Idx,
    tail: Idx,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, Idx: Index> Default for SList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, Idx: Index> SList<T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: Idx::NONE,
            tail: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list has no head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the head node's index, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<Idx> {
        self.head.to_option()
    }

    /// Returns the tail node's index, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<Idx> {
        self.tail.to_option()
    }

    /// Returns the index of the node following `key`.
    ///
    /// Returns `None` if `key` is the tail or not occupied.
    #[inline]
    pub fn next_key(&self, storage: &S, key: Idx) -> Option<Idx> {
        storage.get(key)?.next.to_option()
    }

    /// Returns the index of the node at `position`, walking from the head.
    pub fn key_at(&self, storage: &S, position: usize) -> Option<Idx> {
        if position >= self.len {
            return None;
        }
        Some(self.walk(storage, position))
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Links a new node in front of the head.
    ///
    /// Returns the index of the inserted node.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> Idx {
        let key = storage.insert(ListNode::new(value, self.head));
        if self.tail.is_none() {
            self.tail = key;
        }
        self.head = key;
        self.len += 1;
        key
    }

    /// Links a new node after the last node.
    ///
    /// Returns the index of the inserted node.
    #[inline]
    pub fn push_back(&mut self, storage: &mut S, value: T) -> Idx {
        let key = storage.insert(ListNode::new(value, Idx::NONE));
        if self.tail.is_some() {
            Self::node_mut(storage, self.tail).next = key;
        } else {
            self.head = key;
        }
        self.tail = key;
        self.len += 1;
        key
    }

    /// Links a new node directly after `after`.
    ///
    /// `after` must be a node of this list.
    ///
    /// # Panics
    ///
    /// Panics if `after` is not occupied in storage.
    #[inline]
    pub fn insert_after(&mut self, storage: &mut S, after: Idx, value: T) -> Idx {
        let next = Self::node(storage, after).next;
        let key = storage.insert(ListNode::new(value, next));
        Self::node_mut(storage, after).next = key;
        if self.tail == after {
            self.tail = key;
        }
        self.len += 1;
        key
    }

    /// Inserts `value` so that it lands at index `position`.
    ///
    /// `position == len` appends.
    ///
    /// # Errors
    ///
    /// Returns the value inside [`OutOfRange`] if `position > len`; the list
    /// is unchanged.
    pub fn insert_at(
        &mut self,
        storage: &mut S,
        position: usize,
        value: T,
    ) -> Result<Idx, OutOfRange<T>> {
        if position > self.len {
            tracing::debug!(position, len = self.len, "position exceeds list size");
            return Err(OutOfRange {
                value,
                position,
                len: self.len,
            });
        }
        Ok(self.splice_at(storage, position, value))
    }

    /// Inserts `value` at `position`, appending when `position` is past the
    /// end instead of rejecting it.
    pub fn insert_at_or_back(&mut self, storage: &mut S, position: usize, value: T) -> Idx {
        if position > self.len {
            tracing::debug!(position, len = self.len, "position exceeds list size, appending");
            return self.push_back(storage, value);
        }
        self.splice_at(storage, position, value)
    }

    /// Requires `position <= len`.
    fn splice_at(&mut self, storage: &mut S, position: usize, value: T) -> Idx {
        if position == 0 {
            return self.push_front(storage, value);
        }
        if position == self.len {
            return self.push_back(storage, value);
        }
        let prev = self.walk(storage, position - 1);
        self.insert_after(storage, prev, value)
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the head node and promotes its successor.
    ///
    /// Returns `None` on an empty list.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<T> {
        let Some(head) = self.head.to_option() else {
            tracing::debug!("list is empty");
            return None;
        };
        Some(self.detach(storage, Idx::NONE, head))
    }

    /// Removes the last node.
    ///
    /// Nodes have no backward link, so this walks to the tail's predecessor.
    /// Returns `None` on an empty list.
    pub fn pop_back(&mut self, storage: &mut S) -> Option<T> {
        let Some(mut curr) = self.head.to_option() else {
            tracing::debug!("list is empty");
            return None;
        };
        let mut prev = Idx::NONE;
        loop {
            let next = Self::node(storage, curr).next;
            if next.is_none() {
                break;
            }
            prev = curr;
            curr = next;
        }
        Some(self.detach(storage, prev, curr))
    }

    /// Removes the node at `position` and relinks its neighbours.
    ///
    /// # Errors
    ///
    /// - [`ListError::Empty`] if the list has no nodes
    /// - [`ListError::OutOfRange`] if `position >= len`
    pub fn remove_at(&mut self, storage: &mut S, position: usize) -> Result<T, ListError> {
        self.check_position(position)?;

        let mut prev = Idx::NONE;
        let mut curr = self.head;
        for _ in 0..position {
            prev = curr;
            curr = Self::node(storage, curr).next;
        }
        Ok(self.detach(storage, prev, curr))
    }

    /// Removes the first node whose value equals `value`.
    ///
    /// # Errors
    ///
    /// - [`ListError::Empty`] if the list has no nodes
    /// - [`ListError::ValueNotFound`] if no node matches
    pub fn remove_value(&mut self, storage: &mut S, value: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        if self.head.is_none() {
            tracing::debug!("list is empty");
            return Err(ListError::Empty);
        }

        let mut prev = Idx::NONE;
        let mut curr = self.head;
        while curr.is_some() {
            let node = Self::node(storage, curr);
            let matched = node.data == *value;
            let next = node.next;
            if matched {
                return Ok(self.detach(storage, prev, curr));
            }
            prev = curr;
            curr = next;
        }

        tracing::debug!(len = self.len, "value not found");
        Err(ListError::ValueNotFound)
    }

    /// Releases every node and resets the list to empty.
    pub fn clear(&mut self, storage: &mut S) {
        let mut curr = self.head;
        while curr.is_some() {
            curr = Self::take(storage, curr).next;
        }

        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;
    }

    /// Empties the list, returning an iterator over the removed values.
    ///
    /// Nodes are released as the iterator advances; whatever is left is
    /// released when the iterator is dropped.
    pub fn drain<'a>(&mut self, storage: &'a mut S) -> Drain<'a, T, S, Idx> {
        let head = self.head;
        let remaining = self.len;
        self.head = Idx::NONE;
        self.tail = Idx::NONE;
        self.len = 0;

        Drain {
            storage,
            next: head,
            remaining,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the value at `position`.
    ///
    /// # Errors
    ///
    /// - [`ListError::Empty`] if the list has no nodes
    /// - [`ListError::OutOfRange`] if `position >= len`
    pub fn get<'a>(&self, storage: &'a S, position: usize) -> Result<&'a T, ListError> {
        self.check_position(position)?;
        let key = self.walk(storage, position);
        Ok(&Self::node(storage, key).data)
    }

    /// Returns the value at `position` mutably.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub fn get_mut<'a>(&self, storage: &'a mut S, position: usize) -> Result<&'a mut T, ListError> {
        self.check_position(position)?;
        let key = self.walk(storage, position);
        Ok(&mut Self::node_mut(storage, key).data)
    }

    /// Returns the head value.
    #[inline]
    pub fn front<'a>(&self, storage: &'a S) -> Option<&'a T> {
        let head = self.head.to_option()?;
        Some(&Self::node(storage, head).data)
    }

    /// Returns the head value mutably.
    #[inline]
    pub fn front_mut<'a>(&self, storage: &'a mut S) -> Option<&'a mut T> {
        let head = self.head.to_option()?;
        Some(&mut Self::node_mut(storage, head).data)
    }

    /// Returns the tail value.
    #[inline]
    pub fn back<'a>(&self, storage: &'a S) -> Option<&'a T> {
        let tail = self.tail.to_option()?;
        Some(&Self::node(storage, tail).data)
    }

    /// Returns the tail value mutably.
    #[inline]
    pub fn back_mut<'a>(&self, storage: &'a mut S) -> Option<&'a mut T> {
        let tail = self.tail.to_option()?;
        Some(&mut Self::node_mut(storage, tail).data)
    }

    /// Returns the position of the first node equal to `value`.
    pub fn position(&self, storage: &S, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter(storage).position(|v| v == value)
    }

    /// Returns `true` if any node equals `value`.
    #[inline]
    pub fn contains(&self, storage: &S, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(storage, value).is_some()
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to values, head to tail.
    ///
    /// The iterator is lazy; calling `iter` again starts over from the head.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, Idx> {
        Iter {
            storage,
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to values, head to tail.
    #[inline]
    pub fn iter_mut<'a>(&self, storage: &'a mut S) -> IterMut<'a, T, S, Idx> {
        IterMut {
            storage,
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Unlinks and releases `curr`, whose predecessor is `prev`
    /// (`Idx::NONE` when `curr` is the head).
    fn detach(&mut self, storage: &mut S, prev: Idx, curr: Idx) -> T {
        let node = Self::take(storage, curr);
        if prev.is_some() {
            Self::node_mut(storage, prev).next = node.next;
        } else {
            self.head = node.next;
        }
        if self.tail == curr {
            self.tail = prev;
        }
        self.len -= 1;
        node.data
    }

    /// Follows `steps` links from the head. Requires `steps < len`.
    fn walk(&self, storage: &S, steps: usize) -> Idx {
        let mut curr = self.head;
        for _ in 0..steps {
            curr = Self::node(storage, curr).next;
        }
        curr
    }

    fn check_position(&self, position: usize) -> Result<(), ListError> {
        if self.len == 0 {
            tracing::debug!(position, "list is empty");
            return Err(ListError::Empty);
        }
        if position >= self.len {
            tracing::debug!(position, len = self.len, "position exceeds list size");
            return Err(ListError::OutOfRange {
                position,
                len: self.len,
            });
        }
        Ok(())
    }

    #[inline]
    fn node(storage: &S, key: Idx) -> &ListNode<T, Idx> {
        match storage.get(key) {
            Some(node) => node,
            None => dangling(key),
        }
    }

    #[inline]
    fn node_mut(storage: &mut S, key: Idx) -> &mut ListNode<T, Idx> {
        match storage.get_mut(key) {
            Some(node) => node,
            None => dangling(key),
        }
    }

    #[inline]
    fn take(storage: &mut S, key: Idx) -> ListNode<T, Idx> {
        match storage.remove(key) {
            Some(node) => node,
            None => dangling(key),
        }
    }
}

#[cold]
#[inline(never)]
fn dangling<Idx: fmt::Debug>(key: Idx) -> ! {
    panic!("link {key:?} does not name a live node; list used with foreign storage?")
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list values.
pub struct Iter<'a, T, S, Idx: Index = u32> {
    storage: &'a S,
    next: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<T, S, Idx: Index> Clone for Iter<'_, T, S, Idx> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a, S, Idx: Index> Iterator for Iter<'a, T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next.to_option()?;
        let node = SList::<T, S, Idx>::node(self.storage, key);
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, Idx: Index> ExactSizeIterator for Iter<'a, T, S, Idx> where
    S: Storage<ListNode<T, Idx>, Index = Idx>
{
}

impl<'a, T: 'a, S, Idx: Index> FusedIterator for Iter<'a, T, S, Idx> where
    S: Storage<ListNode<T, Idx>, Index = Idx>
{
}

/// Iterator over mutable references to list values.
pub struct IterMut<'a, T, S, Idx: Index = u32> {
    storage: &'a mut S,
    next: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, Idx: Index> Iterator for IterMut<'a, T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next.to_option()?;
        let node: *mut ListNode<T, Idx> = SList::<T, S, Idx>::node_mut(self.storage, key);
        // Safety: the chain is acyclic, so every node is yielded at most once
        // and the returned references never alias. Storage is not resized
        // while the iterator holds it.
        let node = unsafe { &mut *node };
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&mut node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: 'a, S, Idx: Index> ExactSizeIterator for IterMut<'a, T, S, Idx> where
    S: Storage<ListNode<T, Idx>, Index = Idx>
{
}

/// Iterator that removes values from a list, head first.
pub struct Drain<'a, T, S, Idx: Index = u32>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    storage: &'a mut S,
    next: Idx,
    remaining: usize,
    _marker: PhantomData<T>,
}

impl<T, S, Idx: Index> Iterator for Drain<'_, T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next.to_option()?;
        let node = SList::<T, S, Idx>::take(self.storage, key);
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, S, Idx: Index> Drop for Drain<'_, T, S, Idx>
where
    S: Storage<ListNode<T, Idx>, Index = Idx>,
{
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
