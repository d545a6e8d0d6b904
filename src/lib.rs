//! This crate provides a singly-linked list with owned nodes, anchored by a
//! permanent sentinel node and shortcut by a tail pointer.
//!
//! The [`LinkedList`] allows appending and prepending elements in constant
//! time. In compromise, accessing, inserting or removing elements at any other
//! position take *O*(*n*) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use sentinel_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.append(1);
//! list.append(2);
//! list.append(3);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list.pop_left(), Ok(1));
//! assert_eq!(list.at(-1), Ok(&2));
//!
//! let mut list = LinkedList::from_sequence(vec![10, 20, 30]);
//! assert_eq!(list.remove_at(1), Ok(20));
//! assert_eq!(list.update_at(0, 99), Ok(10));
//! assert_eq!(list.to_vec(), vec![99, 30]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!   (Sentinel)
//!  ┌───────────┐           ╔═══════════╗                        ╔═══════════╗
//!  │   next    │ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──→ None
//!  ├───────────┤           ╟───────────╢     Node 1, 2, ...     ╟───────────╢
//!  ┊No payload ┊           ║ payload T ║                        ║ payload T ║
//!  └╌╌╌╌╌╌╌╌╌╌╌┘           ╚═══════════╝                        ╚═══════════╝
//!        ↑                     Node 0                             Node N-1
//!        │                                                            ↑
//! ╔═══════════╗                                                       │
//! ║ sentinel  ║                                                       │
//! ╟───────────╢                                                       │
//! ║   tail    ║ ──────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!  LinkedList
//! ```
//! The `LinkedList` contains:
//! - a pointer `sentinel` that points to the sentinel node;
//! - a pointer `tail` that points to the last node, or to the sentinel if the
//!   list is empty. It does not own the node it points to;
//! - a length field `len` counting the elements.
//!
//! Each node of the list `LinkedList<T>` is allocated on heap, and contains:
//! - the `next` pointer, which owns the next node (or is `None` for the last
//!   node);
//! - the actual payload `T`, except the sentinel node, whose payload is never
//!   initialized.
//!
//! Dropping the list releases every node in list order, then the sentinel.
//!
//! # Positions
//!
//! Positions are signed and wrap around the length of the list, so `-1` is
//! the last element and `len` is the first one again. See [`LinkedList`] for
//! the exact rule, including the positions that resolve to nothing.
//!
//! ```
//! use sentinel_list::{LinkedList, ListError};
//!
//! let list = LinkedList::from_sequence(vec!['a', 'b', 'c']);
//! assert_eq!(list.at(-1), Ok(&'c'));
//! assert_eq!(list.at(-3), Ok(&'a'));
//! assert_eq!(list.at(3), Ok(&'a'));
//! assert_eq!(list.at(-4), Err(ListError::IndexOutOfRange { pos: -4, len: 3 }));
//! ```
//!
//! # Features
//!
//! - `tracing` (default): emit `trace` events through the [`tracing`] crate
//!   when an operation is rejected.
//!
//! [`LinkedList`]: crate::LinkedList
//! [`tracing`]: https://docs.rs/tracing

#[doc(inline)]
pub use list::error::ListError;
#[doc(inline)]
pub use list::LinkedList;

pub mod list;
