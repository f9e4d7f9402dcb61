//! SinglyLinkedList - a singly-linked list that owns its storage.

use core::fmt;
use core::iter::FusedIterator;

use crate::list::{ArenaListStorage, Drain, Iter, IterMut, SList};
use crate::{Index, ListError, OutOfRange};

/// A singly-linked list that owns its node arena.
///
/// Convenience wrapper around [`SList`] + [`ArenaListStorage`] for the
/// common case of one list per pool. Dropping the list releases every
/// remaining node.
///
/// # Example
///
/// ```
/// use nexus_slist::{ListError, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<i32> = [10, 20, 30].into_iter().collect();
///
/// list.insert_at(1, 99).unwrap();
/// assert_eq!(list.to_string(), "[10, 99, 20, 30]");
///
/// assert_eq!(list.remove_value(&20), Ok(20));
/// assert_eq!(list.remove_at(7), Err(ListError::OutOfRange { position: 7, len: 3 }));
///
/// assert_eq!(list.front(), Some(&10));
/// assert_eq!(list.back(), Some(&30));
/// ```
pub struct SinglyLinkedList<T, Idx: Index = u32> {
    storage: ArenaListStorage<T, Idx>,
    list: SList<T, ArenaListStorage<T, Idx>, Idx>,
}

impl<T, Idx: Index> SinglyLinkedList<T, Idx> {
    /// Creates an empty list without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: ArenaListStorage::new(),
            list: SList::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: ArenaListStorage::with_capacity(capacity),
            list: SList::new(),
        }
    }

    /// Returns the number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the arena capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Inserts a value at the head.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.list.push_front(&mut self.storage, value);
    }

    /// Appends a value after the last node.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.list.push_back(&mut self.storage, value);
    }

    /// Inserts `value` so it lands at index `position`.
    ///
    /// # Errors
    ///
    /// Returns the value inside [`OutOfRange`] if `position > len`.
    #[inline]
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<(), OutOfRange<T>> {
        self.list
            .insert_at(&mut self.storage, position, value)
            .map(|_| ())
    }

    /// Inserts `value` at `position`, appending if `position` is past the end.
    #[inline]
    pub fn insert_at_or_back(&mut self, position: usize, value: T) {
        self.list.insert_at_or_back(&mut self.storage, position, value);
    }

    /// Removes and returns the head value.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front(&mut self.storage)
    }

    /// Removes and returns the last value.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back(&mut self.storage)
    }

    /// Removes and returns the value at `position`.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] or [`ListError::OutOfRange`]; the list is unchanged.
    #[inline]
    pub fn remove_at(&mut self, position: usize) -> Result<T, ListError> {
        self.list.remove_at(&mut self.storage, position)
    }

    /// Removes the first value equal to `value`.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] or [`ListError::ValueNotFound`]; the list is unchanged.
    #[inline]
    pub fn remove_value(&mut self, value: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        self.list.remove_value(&mut self.storage, value)
    }

    /// Returns the value at `position`.
    #[inline]
    pub fn get(&self, position: usize) -> Result<&T, ListError> {
        self.list.get(&self.storage, position)
    }

    /// Returns the value at `position` mutably.
    #[inline]
    pub fn get_mut(&mut self, position: usize) -> Result<&mut T, ListError> {
        self.list.get_mut(&mut self.storage, position)
    }

    /// Returns the head value.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front(&self.storage)
    }

    /// Returns the head value mutably.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.list.front_mut(&mut self.storage)
    }

    /// Returns the last value.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back(&self.storage)
    }

    /// Returns the last value mutably.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.list.back_mut(&mut self.storage)
    }

    /// Returns the position of the first value equal to `value`.
    #[inline]
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.list.position(&self.storage, value)
    }

    /// Returns `true` if any value equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.list.contains(&self.storage, value)
    }

    /// Releases every node. Calling it on an empty list does nothing.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.storage);
        self.storage.clear();
    }

    /// Returns an iterator over references to values, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, ArenaListStorage<T, Idx>, Idx> {
        self.list.iter(&self.storage)
    }

    /// Returns an iterator over mutable references to values, head to tail.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, ArenaListStorage<T, Idx>, Idx> {
        self.list.iter_mut(&mut self.storage)
    }

    /// Removes every value, yielding them head first.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T, ArenaListStorage<T, Idx>, Idx> {
        self.list.drain(&mut self.storage)
    }
}

impl<T, Idx: Index> Drop for SinglyLinkedList<T, Idx> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, Idx: Index> Default for SinglyLinkedList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, Idx: Index> Clone for SinglyLinkedList<T, Idx> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: PartialEq, Idx: Index> PartialEq for SinglyLinkedList<T, Idx> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, Idx: Index> Eq for SinglyLinkedList<T, Idx> {}

impl<T: fmt::Debug, Idx: Index> fmt::Debug for SinglyLinkedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders values head to tail as `[a, b, c]`; an empty list is `[]`.
impl<T: fmt::Display, Idx: Index> fmt::Display for SinglyLinkedList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T, Idx: Index> Extend<T> for SinglyLinkedList<T, Idx> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.storage.reserve(iter.size_hint().0);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, Idx: Index> FromIterator<T> for SinglyLinkedList<T, Idx> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a SinglyLinkedList<T, Idx> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, ArenaListStorage<T, Idx>, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, Idx: Index> IntoIterator for &'a mut SinglyLinkedList<T, Idx> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, ArenaListStorage<T, Idx>, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, Idx: Index> IntoIterator for SinglyLinkedList<T, Idx> {
    type Item = T;
    type IntoIter = IntoIter<T, Idx>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Owning iterator, yields values head first.
pub struct IntoIter<T, Idx: Index = u32> {
    list: SinglyLinkedList<T, Idx>,
}

impl<T, Idx: Index> Iterator for IntoIter<T, Idx> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, Idx: Index> ExactSizeIterator for IntoIter<T, Idx> {}

impl<T, Idx: Index> FusedIterator for IntoIter<T, Idx> {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    /// Bumps a shared counter when dropped.
    struct Tracked(Rc<Cell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn list_of(values: &[i32]) -> SinglyLinkedList<i32> {
        values.iter().copied().collect()
    }

    fn contents(list: &SinglyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn push_front_then_front() {
        let mut list = list_of(&[1, 2]);
        list.push_front(7);
        assert_eq!(list.front(), Some(&7));
        assert_eq!(contents(&list), [7, 1, 2]);
    }

    #[test]
    fn push_back_then_back() {
        let mut list = list_of(&[1, 2]);
        list.push_back(7);
        assert_eq!(list.back(), Some(&7));
    }

    #[test]
    fn insert_at_rejects_past_end() {
        let mut list = list_of(&[1]);
        let err = list.insert_at(2, 5).unwrap_err();
        assert_eq!(err.into_inner(), 5);
        assert_eq!(contents(&list), [1]);

        list.insert_at_or_back(2, 5);
        assert_eq!(contents(&list), [1, 5]);
    }

    #[test]
    fn pop_on_empty_is_noop() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn single_node_pop_back_empties() {
        let mut list = list_of(&[10]);
        assert_eq!(list.pop_back(), Some(10));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
    }

    #[test]
    fn get_mut_front_mut_back_mut() {
        let mut list = list_of(&[1, 2, 3]);
        *list.get_mut(1).unwrap() = 20;
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(contents(&list), [10, 20, 30]);
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(list_of(&[10, 20, 30]).to_string(), "[10, 20, 30]");
        assert_eq!(list_of(&[]).to_string(), "[]");
        assert_eq!(format!("{:?}", list_of(&[1, 2])), "[1, 2]");
    }

    #[test]
    fn clone_and_eq() {
        let list = list_of(&[1, 2, 3]);
        let copy = list.clone();
        assert_eq!(list, copy);
        assert_ne!(list, list_of(&[1, 2]));
    }

    #[test]
    fn iterators() {
        let mut list = list_of(&[1, 2, 3]);

        for v in &mut list {
            *v += 1;
        }
        let borrowed: Vec<_> = (&list).into_iter().copied().collect();
        assert_eq!(borrowed, [2, 3, 4]);

        let owned: Vec<_> = list.into_iter().collect();
        assert_eq!(owned, [2, 3, 4]);
    }

    #[test]
    fn drain_empties() {
        let mut list = list_of(&[1, 2, 3]);
        let drained: Vec<_> = list.drain().collect();
        assert_eq!(drained, [1, 2, 3]);
        assert!(list.is_empty());

        list.push_back(4);
        assert_eq!(contents(&list), [4]);
    }

    #[test]
    fn clear_twice() {
        let mut list = list_of(&[1, 2, 3]);
        list.clear();
        assert!(list.is_empty());
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn drop_releases_every_node() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut list: SinglyLinkedList<Tracked> = SinglyLinkedList::new();
            for _ in 0..5 {
                list.push_back(Tracked(drops.clone()));
            }
            drop(list.remove_at(2));
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn into_iter_dropped_early_releases_rest() {
        let drops = Rc::new(Cell::new(0));
        let list: SinglyLinkedList<Tracked> =
            (0..4).map(|_| Tracked(drops.clone())).collect();

        let mut iter = list.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn small_index_type() {
        let mut list: SinglyLinkedList<u8, u8> = SinglyLinkedList::with_capacity(8);
        for i in 0..200 {
            list.push_back(i);
        }
        assert_eq!(list.len(), 200);
        assert_eq!(list.get(199), Ok(&199));
    }
}
