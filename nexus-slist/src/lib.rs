//! Singly-linked list over slot-arena storage.
//!
//! Nodes are not individually boxed. They live in a storage pool and link to
//! each other by index:
//!
//! ```text
//! Storage (Arena)   - owns nodes, hands out stable indices, recycles freed slots
//! SList             - head/tail/len, walks and splices the chain
//! SinglyLinkedList  - SList + its own Arena, releases everything on drop
//! ```
//!
//! Removing a node turns its slot into a free-list entry; the next insert
//! reuses it, so a list under churn stops allocating once it reaches its
//! high-water mark.
//!
//! # Quick Start
//!
//! ```
//! use nexus_slist::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u32> = SinglyLinkedList::new();
//! list.push_back(10);
//! list.push_back(20);
//! list.push_back(30);
//!
//! list.insert_at(1, 99).unwrap();
//! assert_eq!(list.to_string(), "[10, 99, 20, 30]");
//!
//! list.remove_at(0).unwrap();
//! assert_eq!(list.get(0), Ok(&99));
//! ```
//!
//! # Status Reporting
//!
//! Positional and value-addressed operations never panic. When they cannot
//! do what was asked they leave the list untouched and say why:
//!
//! | Condition | Delete / query | `insert_at` | `insert_at_or_back` |
//! |-----------|----------------|-------------|---------------------|
//! | empty list | [`ListError::Empty`] (`pop_*` return `None`) | inserts at 0, else [`OutOfRange`] | inserts |
//! | `position` past the end | [`ListError::OutOfRange`] | [`OutOfRange`] with the value | appends |
//! | no matching value | [`ListError::ValueNotFound`] | - | - |
//!
//! The same conditions are emitted as `tracing` debug events.
//!
//! # Positions
//!
//! Positions are zero-based. Everything addressed by position or by value
//! walks the chain from the head, so those operations are O(n); pushes at
//! either end, `front`, `back` and `len` are O(1).
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod list;
pub mod owned;
pub mod storage;

pub use error::{ListError, OutOfRange};
pub use index::Index;
pub use list::{ArenaListStorage, Drain, Iter, IterMut, ListNode, SList};
pub use owned::{IntoIter, SinglyLinkedList};
pub use storage::{Arena, Storage};

#[cfg(feature = "slab")]
pub use list::SlabListStorage;
