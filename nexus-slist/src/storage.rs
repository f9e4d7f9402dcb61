//! Slot storage with stable indices.
//!
//! Lists never allocate nodes themselves. They ask a [`Storage`] for a slot,
//! keep the returned index as a link, and hand the slot back on removal.
//! An index stays valid until the slot is removed.

use crate::Index;

/// Slab-like storage with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations
/// - **Slot reuse**: removed slots can be handed out again by later inserts
///
/// # Implementations
///
/// - [`Arena<T>`] - growable, `Vec` backed (in this crate)
/// - `slab::Slab<T>` - growable (feature `slab`)
pub trait Storage<T> {
    /// Index type handed out by this storage.
    type Index: Index;

    /// Inserts a value, returning its stable index.
    fn insert(&mut self, value: T) -> Self::Index;

    /// Removes and returns the value at `index`, if occupied.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if occupied.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if occupied.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Arena - growable slot vector with an intrusive free list
// =============================================================================

#[derive(Debug, Clone)]
enum Entry<T, Idx> {
    Occupied(T),
    /// Vacant slots chain to the next vacant slot.
    Vacant(Idx),
}

/// Growable slot storage.
///
/// Slots live in a single `Vec`. Removing a value turns its slot into a
/// vacant entry that links to the previously freed slot, so the free list
/// costs no extra memory. Inserts pop the most recently freed slot first
/// and only grow the vector when the free list is empty.
///
/// # Example
///
/// ```
/// use nexus_slist::{Arena, Storage};
///
/// let mut arena: Arena<&str> = Arena::with_capacity(4);
/// let a = arena.insert("a");
/// let b = arena.insert("b");
///
/// assert_eq!(arena.remove(a), Some("a"));
/// // Freed slot is handed out again
/// assert_eq!(arena.insert("c"), a);
/// assert_eq!(arena.get(b), Some(&"b"));
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T, Idx: Index = u32> {
    entries: Vec<Entry<T, Idx>>,
    free_head: Idx,
    len: usize,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an empty arena without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of slots the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are occupied.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every stored value and forgets all slots.
    ///
    /// Indices handed out before the call become invalid. Lists holding
    /// links into this arena must be cleared first.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_head = Idx::NONE;
        self.len = 0;
    }

    /// Reserves room for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        let vacant = self.entries.len() - self.len;
        if additional > vacant {
            self.entries.reserve(additional - vacant);
        }
    }

    #[cold]
    #[inline(never)]
    fn index_exhausted() -> ! {
        panic!("arena exceeds index type maximum");
    }
}

impl<T, Idx: Index> Default for Arena<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> Storage<T> for Arena<T, Idx> {
    type Index = Idx;

    /// # Panics
    ///
    /// Panics if the arena would need more slots than `Idx` can address.
    #[inline]
    fn insert(&mut self, value: T) -> Idx {
        if self.free_head.is_some() {
            let idx = self.free_head;
            let slot = &mut self.entries[idx.as_usize()];
            let next_free = match slot {
                Entry::Vacant(next) => *next,
                Entry::Occupied(_) => unreachable!("free list names an occupied slot"),
            };
            *slot = Entry::Occupied(value);
            self.free_head = next_free;
            self.len += 1;
            return idx;
        }

        let Some(idx) = Idx::try_from_usize(self.entries.len()) else {
            Self::index_exhausted();
        };
        self.entries.push(Entry::Occupied(value));
        self.len += 1;
        idx
    }

    #[inline]
    fn remove(&mut self, index: Idx) -> Option<T> {
        let slot = self.entries.get_mut(index.as_usize())?;
        if let Entry::Vacant(_) = slot {
            return None;
        }

        let Entry::Occupied(value) = core::mem::replace(slot, Entry::Vacant(self.free_head)) else {
            return None;
        };
        self.free_head = index;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn get(&self, index: Idx) -> Option<&T> {
        match self.entries.get(index.as_usize()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        match self.entries.get_mut(index.as_usize()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        slab::Slab::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        slab::Slab::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        slab::Slab::get_mut(self, index)
    }

    #[inline]
    fn len(&self) -> usize {
        slab::Slab::len(self)
    }
}
