//! This crate provides a double-ended queue of byte strings, implemented as a
//! cyclic doubly-linked list whose nodes live in one arena.
//!
//! The [`Queue`] allows inserting and removing payloads at both ends in constant
//! time, and rearranges its nodes in place: deleting the middle element,
//! collapsing runs of duplicated payloads, swapping adjacent pairs, reversing,
//! and a stable merge sort.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["dolphin", "bear", "gerbil", "bear"]);
//!
//! queue.insert_head(b"meerkat").unwrap();
//! queue.sort();
//! assert_eq!(queue, Queue::from_iter(["bear", "bear", "dolphin", "gerbil", "meerkat"]));
//!
//! queue.delete_duplicate_runs().unwrap();
//! assert_eq!(queue, Queue::from_iter(["dolphin", "gerbil", "meerkat"]));
//!
//! let element = queue.remove_head(None).unwrap(); // the caller now owns it
//! assert_eq!(queue.value(&element), Some(&b"dolphin"[..]));
//! queue.release(element);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the queue is like the following graph:
//! ```text
//!          ┌──────────────────────────────────────────────────────────────────────┐
//!          ↓                                                                      │
//!    ╔═══════════╗           ╔═══════════╗                        ╔═══════════╗   │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ ║   next    ║ ──┘
//!    ╟───────────╢           ╟───────────╢     slots 3, 4, ...    ╟───────────╢
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── ║   prev    ║
//! │  ╟───────────╢           ╟───────────╢                        ╟───────────╢
//! │  ║   Ghost   ║           ║  Linked   ║ ──→ [u8] payload       ║  Linked   ║ ──→ [u8]
//! │  ╚═══════════╝           ╚═══════════╝                        ╚═══════════╝
//! │     slot 0                  slot 1                               slot n ↑
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Every node is a slot of the `nodes` arena of the [`Queue`], and `next` and
//! `prev` are slot indices. Each slot is in one of four states:
//! - `Ghost`: slot 0, the anchor of the ring. It has *NO* payload;
//! - `Linked`: an element reachable from the ghost node, owning its payload;
//! - `Detached`: an element removed from the ring, owned by an [`Element`]
//!   handle until it is released;
//! - `Vacant`: a free slot, reused by the next insertion.
//!
//! Initially, there is only the ghost node in an empty queue, of which the
//! `next` and `prev` point to itself.
//!
//! As elements are inserted, `ghost.next` points to the first element, and
//! `ghost.prev` points to the last element of the queue.
//!
//! # Remove and Delete
//!
//! The queue keeps two ways of taking an element out apart:
//! - [`remove_head`] and [`remove_tail`] unlink an element and hand it to the
//!   caller as an [`Element`]. The payload stays readable with [`value`] until
//!   the caller gives the handle back to [`release`];
//! - [`delete_middle`] and [`delete_duplicate_runs`] unlink elements and
//!   destroy them at once.
//!
//! ## Examples
//!
//! ```
//! use cyclic_queue::Queue;
//! use std::iter::FromIterator;
//!
//! let mut queue = Queue::from_iter(["a", "b", "c", "d"]);
//!
//! let mut buf = [0u8; 8];
//! let element = queue.remove_tail(Some(&mut buf)).unwrap();
//! assert_eq!(&buf[..2], b"d\0");
//! queue.release(element);
//!
//! queue.delete_middle().unwrap(); // deletes "b", at index 3 / 2
//! assert_eq!(queue, Queue::from_iter(["a", "c"]));
//! ```
//!
//! # Errors
//!
//! Insertions copy the payload into storage obtained with fallible
//! reservations, and report [`QueueError::Alloc`] instead of aborting. The
//! queue is not changed when an operation fails.
//!
//! [`Queue`]: crate::Queue
//! [`Element`]: crate::Element
//! [`QueueError::Alloc`]: crate::QueueError::Alloc
//! [`remove_head`]: crate::Queue::remove_head
//! [`remove_tail`]: crate::Queue::remove_tail
//! [`value`]: crate::Queue::value
//! [`release`]: crate::Queue::release
//! [`delete_middle`]: crate::Queue::delete_middle
//! [`delete_duplicate_runs`]: crate::Queue::delete_duplicate_runs

#[doc(inline)]
pub use error::{QueueError, Result};
#[doc(inline)]
pub use queue::{Element, Iter, Queue};

pub mod error;
pub mod queue;
