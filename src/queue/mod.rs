use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};

use log::{trace, warn};

use crate::error::Result;
use crate::queue::element::copy_out;

pub use crate::queue::element::Element;
pub use crate::queue::iterator::Iter;

pub mod element;
pub mod iterator;

mod algorithms;

/// Arena index of the ghost node. It is the first slot of every queue and is
/// never freed.
pub(crate) const GHOST: usize = 0;

/// Source of queue identities, stamped into every [`Element`] handle.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// The `Queue` is a double-ended queue of byte strings, implemented as a cyclic
/// doubly-linked list whose nodes live in a single arena.
///
/// Inserting and removing at either end take *O*(1) time. The links of a node
/// are arena indices, so relinking never moves a payload.
///
/// The `Queue` contains:
/// - the arena `nodes`, whose slot 0 is the ghost node;
/// - the head of the free list of vacant slots, reused by later insertions;
/// - a length field `len` counting the linked elements. It can be disabled by
///   disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// cyclic_queue = { default-features = false }
/// ```
///
/// # Naming Conventions
///
/// - "remove" detaches an element and hands it to the caller as an [`Element`];
/// - "delete" detaches an element and destroys it at once.
pub struct Queue {
    /// identity checked against `Element` handles
    id: u64,
    nodes: Vec<Node>,
    /// the first vacant slot, chained through `next` and terminated by `GHOST`
    free: Option<usize>,
    #[cfg(feature = "length")]
    /// the number of linked elements
    pub(crate) len: usize,
}

pub(crate) struct Node {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) slot: Slot,
}

/// State of an arena slot.
pub(crate) enum Slot {
    /// The anchor of the ring, slot 0.
    Ghost,
    /// Reachable from the ghost node.
    Linked(Box<[u8]>),
    /// Removed from the ring and owned by an [`Element`] handle.
    Detached(Box<[u8]>),
    /// Free for reuse.
    Vacant,
}

impl Slot {
    fn payload(&self) -> Option<&[u8]> {
        match self {
            Slot::Linked(payload) | Slot::Detached(payload) => Some(&payload[..]),
            Slot::Ghost | Slot::Vacant => None,
        }
    }
}

impl Node {
    fn ghost() -> Self {
        Node {
            next: GHOST,
            prev: GHOST,
            slot: Slot::Ghost,
        }
    }
}

// private methods
impl Queue {
    pub(crate) fn front_node(&self) -> usize {
        self.nodes[GHOST].next
    }
    pub(crate) fn back_node(&self) -> usize {
        self.nodes[GHOST].prev
    }
    pub(crate) fn next_of(&self, node: usize) -> usize {
        self.nodes[node].next
    }
    pub(crate) fn prev_of(&self, node: usize) -> usize {
        self.nodes[node].prev
    }

    /// The payload of `node`, or an empty slice for the ghost node.
    pub(crate) fn element(&self, node: usize) -> &[u8] {
        self.nodes[node].slot.payload().unwrap_or_default()
    }

    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Copy `payload` into a fresh slot that is not linked yet.
    ///
    /// Both the payload storage and the arena slot are reserved before
    /// anything is written, so a failure leaves the queue untouched.
    fn alloc_node(&mut self, payload: &[u8]) -> Result<usize> {
        let mut storage = Vec::new();
        storage.try_reserve_exact(payload.len())?;
        storage.extend_from_slice(payload);
        let slot = Slot::Linked(storage.into_boxed_slice());

        if let Some(node) = self.free {
            let next = self.nodes[node].next;
            self.free = if next == GHOST { None } else { Some(next) };
            self.nodes[node].slot = slot;
            return Ok(node);
        }
        self.nodes.try_reserve(1)?;
        self.nodes.push(Node {
            next: GHOST,
            prev: GHOST,
            slot,
        });
        Ok(self.nodes.len() - 1)
    }

    /// Put a slot back on the free list, dropping whatever payload it holds.
    fn free_node(&mut self, node: usize) {
        debug_assert_ne!(node, GHOST, "Cannot free the ghost node");
        let next = self.free.unwrap_or(GHOST);
        let freed = &mut self.nodes[node];
        freed.slot = Slot::Vacant;
        freed.next = next;
        freed.prev = GHOST;
        self.free = Some(node);
    }

    /// Attach a single node `node` to the queue, between `prev` and `next`.
    ///
    /// If the `prev` and `next` are not adjacent nodes of the queue, this
    /// call makes the queue ill-formed. Adjacency is only checked in
    /// `#[cfg(debug_assertions)]`.
    pub(crate) fn attach_node(&mut self, prev: usize, next: usize, node: usize) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        self.connect(prev, node);
        self.connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
    }

    /// Detach a single linked node `node` from the queue, and return its
    /// payload. The slot is left vacant but not yet on the free list.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not linked. The ring is not touched in that case.
    pub(crate) fn detach_node(&mut self, node: usize) -> Box<[u8]> {
        debug_assert_ne!(node, GHOST, "Cannot detach the ghost node");
        let (prev, next) = (self.prev_of(node), self.next_of(node));
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
        let payload = match mem::replace(&mut self.nodes[node].slot, Slot::Vacant) {
            Slot::Linked(payload) => payload,
            _ => unreachable!("Cannot detach node {} that is not linked", node),
        };
        self.connect(prev, next);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        payload
    }

    /// Detach `node` and destroy it, returning its payload to the caller for
    /// a last look.
    pub(crate) fn destroy_node(&mut self, node: usize) -> Box<[u8]> {
        let payload = self.detach_node(node);
        self.free_node(node);
        payload
    }

    /// Move the linked node `from` to the position right before the linked
    /// node `to`. No slot is allocated or freed.
    pub(crate) fn move_node(&mut self, from: usize, to: usize) {
        debug_assert_ne!(from, to, "Cannot move a node before itself");
        self.connect(self.prev_of(from), self.next_of(from));
        self.connect(self.prev_of(to), from);
        self.connect(from, to);
    }

    fn remove_node(&mut self, node: usize, out: Option<&mut [u8]>) -> Element {
        let payload = self.detach_node(node);
        if let Some(buf) = out {
            copy_out(&payload, buf);
        }
        trace!("removed element {} ({} bytes)", node, payload.len());
        self.nodes[node].slot = Slot::Detached(payload);
        Element::new(self.id, node)
    }

    /// The slot `element` names, if it was removed from this queue and is
    /// still detached.
    fn detached_slot(&self, element: &Element) -> Option<&Slot> {
        if element.queue() != self.id {
            return None;
        }
        self.nodes
            .get(element.index())
            .map(|node| &node.slot)
            .filter(|slot| matches!(slot, Slot::Detached(_)))
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.nodes[prev].next, next);
        assert_eq!(self.nodes[next].prev, prev);
    }
}

impl Queue {
    /// Create an empty `Queue`.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::Queue;
    /// let queue = Queue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            id: next_id(),
            nodes: vec![Node::ghost()],
            free: None,
            #[cfg(feature = "length")]
            len: 0,
        }
    }

    /// Create an empty `Queue`, reporting an allocation failure of the ghost
    /// node instead of aborting.
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::Queue;
    /// let queue = Queue::try_new().expect("allocation failed");
    /// assert_eq!(queue.size(), 0);
    /// ```
    pub fn try_new() -> Result<Self> {
        let mut nodes = Vec::new();
        nodes.try_reserve(1)?;
        nodes.push(Node::ghost());
        Ok(Self {
            id: next_id(),
            nodes,
            free: None,
            #[cfg(feature = "length")]
            len: 0,
        })
    }

    /// Returns `true` if the `Queue` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == GHOST
    }

    /// Returns the length of the `Queue`. Enabled by `feature = "length"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// #![cfg(feature = "length")]
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail(b"foo").unwrap();
    /// queue.insert_head(b"bar").unwrap();
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Counts the elements of the `Queue` by walking the ring.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.size(), 0);
    ///
    /// queue.insert_tail(b"a").unwrap();
    /// queue.insert_tail(b"b").unwrap();
    /// assert_eq!(queue.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut node = self.front_node();
        while node != GHOST {
            size += 1;
            node = self.next_of(node);
        }
        size
    }

    /// Destroys all linked elements of the `Queue`.
    ///
    /// Elements that were removed and not released yet stay valid.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        let mut node = self.front_node();
        while node != GHOST {
            let next = self.next_of(node);
            self.destroy_node(node);
            node = next;
        }
    }

    /// Provides the payload of the front element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.front(), None);
    ///
    /// queue.insert_head(b"1").unwrap();
    /// assert_eq!(queue.front(), Some(&b"1"[..]));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&[u8]> {
        self.iter().next()
    }

    /// Provides the payload of the back element, or `None` if the queue is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&[u8]> {
        self.iter().next_back()
    }

    /// Copies `payload` into a new element placed first in the queue.
    ///
    /// On an allocation failure the queue is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) amortized time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.insert_head(b"2").unwrap();
    /// queue.insert_head(b"1").unwrap();
    /// assert_eq!(queue.front(), Some(&b"1"[..]));
    /// ```
    pub fn insert_head(&mut self, payload: &[u8]) -> Result<()> {
        let node = self.alloc_node(payload)?;
        self.attach_node(GHOST, self.front_node(), node);
        trace!("inserted element {} at head ({} bytes)", node, payload.len());
        Ok(())
    }

    /// Copies `payload` into a new element placed last in the queue.
    ///
    /// On an allocation failure the queue is left unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) amortized time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    ///
    /// queue.insert_tail(b"1").unwrap();
    /// queue.insert_tail(b"2").unwrap();
    /// assert_eq!(queue.back(), Some(&b"2"[..]));
    /// ```
    pub fn insert_tail(&mut self, payload: &[u8]) -> Result<()> {
        let node = self.alloc_node(payload)?;
        self.attach_node(self.back_node(), GHOST, node);
        trace!("inserted element {} at tail ({} bytes)", node, payload.len());
        Ok(())
    }

    /// Unlinks the first element and hands it to the caller, or returns
    /// `None` if the queue is empty.
    ///
    /// If `out` is given, the payload is copied into it: at most
    /// `out.len() - 1` bytes, followed by zero bytes up to the end of `out`.
    /// Longer payloads are truncated.
    ///
    /// The element is not destroyed. Hand it back to [`Queue::release`] once
    /// done with it: dropping the returned [`Element`] leaves its slot
    /// detached until the queue is dropped, and the slot is never reused.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.remove_head(None).is_none());
    ///
    /// queue.insert_tail(b"hello").unwrap();
    /// queue.insert_tail(b"world").unwrap();
    ///
    /// let mut buf = [0xff; 4];
    /// let element = queue.remove_head(Some(&mut buf)).unwrap();
    /// assert_eq!(&buf, b"hel\0");
    /// assert_eq!(queue.value(&element), Some(&b"hello"[..]));
    /// queue.release(element);
    ///
    /// assert_eq!(queue.size(), 1);
    /// ```
    pub fn remove_head(&mut self, out: Option<&mut [u8]>) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_node(self.front_node(), out))
    }

    /// Unlinks the last element and hands it to the caller, or returns
    /// `None` if the queue is empty.
    ///
    /// Copying into `out` works like [`Queue::remove_head`]. The returned
    /// [`Element`] must likewise be given to [`Queue::release`], or its slot
    /// stays detached until the queue is dropped.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_tail(b"1").unwrap();
    /// queue.insert_tail(b"3").unwrap();
    ///
    /// let element = queue.remove_tail(None).unwrap();
    /// assert_eq!(queue.value(&element), Some(&b"3"[..]));
    /// queue.release(element);
    /// ```
    pub fn remove_tail(&mut self, out: Option<&mut [u8]>) -> Option<Element> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_node(self.back_node(), out))
    }

    /// Provides the payload of a removed element that has not been released.
    ///
    /// Returns `None` for a handle removed from another queue.
    pub fn value(&self, element: &Element) -> Option<&[u8]> {
        match self.detached_slot(element) {
            Some(Slot::Detached(payload)) => Some(&payload[..]),
            _ => None,
        }
    }

    /// Destroys a removed element and its payload.
    ///
    /// A handle removed from another queue is ignored, and a warning is
    /// logged.
    pub fn release(&mut self, element: Element) {
        let node = element.index();
        if self.detached_slot(&element).is_some() {
            self.free_node(node);
            trace!("released element {}", node);
        } else {
            warn!(
                "element {} of queue {} is not detached from queue {}",
                node,
                element.queue(),
                self.id
            );
        }
    }

    /// Provides a forward iterator over the payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["a", "b"]);
    /// let mut iter = queue.iter();
    /// assert_eq!(iter.next(), Some(&b"a"[..]));
    /// assert_eq!(iter.next(), Some(&b"b"[..]));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Walks the ring in both directions and checks that every linked node
    /// is pointed back to by its neighbours.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn check_links(&self) -> bool {
        // A well-formed ring visits at most every slot once.
        let bound = self.nodes.len();
        let mut forward = 0;
        let mut node = GHOST;
        loop {
            let next = self.next_of(node);
            if next >= bound || self.prev_of(next) != node {
                return false;
            }
            if next == GHOST {
                break;
            }
            if !matches!(self.nodes[next].slot, Slot::Linked(_)) {
                return false;
            }
            forward += 1;
            if forward >= bound {
                return false;
            }
            node = next;
        }

        let mut backward = 0;
        let mut node = self.back_node();
        while node != GHOST {
            backward += 1;
            if backward > forward {
                return false;
            }
            node = self.prev_of(node);
        }

        #[cfg(feature = "length")]
        if self.len != forward {
            return false;
        }
        forward == backward
    }
}

/// Debug view of a payload as a byte string literal.
pub(crate) struct Escaped<'a>(pub(crate) &'a [u8]);

impl Debug for Escaped<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

impl Debug for Queue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Escaped)).finish()
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::queue::{Queue, GHOST};
    use crate::QueueError;
    use std::iter::FromIterator;

    #[test]
    fn queue_create() {
        let mut queue = Queue::try_new().unwrap();
        assert!(queue.is_empty());
        assert_eq!(queue.front_node(), GHOST);
        assert_eq!(queue.back_node(), GHOST);
        queue.insert_tail(b"1").unwrap();
        assert!(!queue.is_empty());
        let element = queue.remove_tail(None).unwrap();
        queue.release(element);
        assert!(queue.is_empty());
        assert_eq!(queue.nodes[GHOST].next, GHOST);
        assert_eq!(queue.nodes[GHOST].prev, GHOST);
        assert!(queue.check_links());
    }

    #[test]
    fn queue_insert_and_remove() {
        let mut queue = Queue::new();
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
        assert!(queue.remove_head(None).is_none());
        assert!(queue.remove_tail(None).is_none());

        queue.insert_tail(b"1").unwrap();
        queue.insert_head(b"2").unwrap();
        queue.insert_tail(b"3").unwrap();
        assert!(queue.check_links());
        assert_eq!(queue, Queue::from_iter(["2", "1", "3"]));
        assert_eq!(queue.size(), 3);
        #[cfg(feature = "length")]
        assert_eq!(queue.len(), 3);

        let element = queue.remove_head(None).unwrap();
        assert_eq!(queue.value(&element), Some(&b"2"[..]));
        queue.release(element);
        let element = queue.remove_tail(None).unwrap();
        assert_eq!(queue.value(&element), Some(&b"3"[..]));
        queue.release(element);
        assert!(queue.check_links());

        assert_eq!(queue.front(), Some(&b"1"[..]));
        assert_eq!(queue.back(), Some(&b"1"[..]));
        let element = queue.remove_head(None).unwrap();
        queue.release(element);
        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);
        #[cfg(feature = "length")]
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn queue_round_trip() {
        let mut queue = Queue::new();
        let payloads: [&[u8]; 3] = [b"", b"x", b"a longer payload with spaces"];
        for payload in payloads.iter().copied() {
            queue.insert_tail(payload).unwrap();
            let element = queue.remove_head(None).unwrap();
            assert_eq!(queue.value(&element), Some(payload));
            queue.release(element);
            assert!(queue.is_empty());
        }
    }

    #[test]
    fn queue_remove_copies_out() {
        let mut queue = Queue::from_iter(["abcdef", "xy"]);

        let mut buf = [0xff_u8; 4];
        let element = queue.remove_head(Some(&mut buf)).unwrap();
        assert_eq!(&buf, b"abc\0");
        assert_eq!(queue.value(&element), Some(&b"abcdef"[..]));
        queue.release(element);

        let mut buf = [0xff_u8; 5];
        let element = queue.remove_tail(Some(&mut buf)).unwrap();
        assert_eq!(&buf, b"xy\0\0\0");
        queue.release(element);

        queue.insert_tail(b"z").unwrap();
        let mut buf = [0xff_u8; 0];
        let element = queue.remove_head(Some(&mut buf)).unwrap();
        assert_eq!(queue.value(&element), Some(&b"z"[..]));
        queue.release(element);
    }

    #[test]
    fn queue_removed_element_outlives_clear() {
        let mut queue = Queue::from_iter(["a", "b", "c"]);
        let element = queue.remove_head(None).unwrap();
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.check_links());
        assert_eq!(queue.value(&element), Some(&b"a"[..]));
        queue.release(element);
    }

    #[test]
    fn queue_reuses_released_slots() {
        let mut queue = Queue::new();
        for _ in 0..4 {
            queue.insert_tail(b"payload").unwrap();
        }
        let slots = queue.nodes.len();
        for _ in 0..4 {
            let element = queue.remove_head(None).unwrap();
            queue.release(element);
        }
        for _ in 0..4 {
            queue.insert_head(b"again").unwrap();
        }
        assert_eq!(queue.nodes.len(), slots);
        assert_eq!(queue.size(), 4);
        assert!(queue.check_links());
    }

    #[test]
    fn queue_release_foreign_element() {
        let mut queue = Queue::from_iter(["a"]);
        let mut other = Queue::from_iter(["b", "c"]);
        let element = other.remove_tail(None).unwrap();
        // Slot 2 of `queue` does not exist.
        queue.release(element);
        assert_eq!(queue, Queue::from_iter(["a"]));
        assert!(queue.check_links());
    }

    #[test]
    fn queue_foreign_element_at_same_slot() {
        let mut queue = Queue::from_iter(["a", "b"]);
        let mut other = Queue::from_iter(["x", "y"]);
        let mine = queue.remove_tail(None).unwrap();
        let foreign = other.remove_tail(None).unwrap();
        assert_eq!(mine.index(), foreign.index());

        assert_eq!(queue.value(&foreign), None);
        assert_eq!(other.value(&mine), None);
        queue.release(foreign);
        assert_eq!(queue.value(&mine), Some(&b"b"[..]));

        // The slot of `mine` is still detached, so it is not reused.
        queue.insert_tail(b"c").unwrap();
        assert_eq!(queue.value(&mine), Some(&b"b"[..]));
        assert_eq!(queue, Queue::from_iter(["a", "c"]));
        queue.release(mine);
        assert!(queue.check_links());
    }

    #[test]
    #[should_panic]
    fn queue_detach_unlinked_node() {
        let mut queue = Queue::from_iter(["a"]);
        let element = queue.remove_head(None).unwrap();
        let _ = queue.detach_node(element.index());
    }

    #[test]
    fn queue_error_display() {
        assert_eq!(QueueError::Empty.to_string(), "queue is empty");
        let err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        assert!(QueueError::from(err)
            .to_string()
            .starts_with("allocation failed"));
    }

    #[test]
    fn queue_debug() {
        let queue = Queue::from_iter(["a", "b\n"]);
        assert_eq!(format!("{:?}", queue), r#"[b"a", b"b\n"]"#);
    }

    #[test]
    fn queue_size_matches_model() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        use std::collections::VecDeque;

        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut queue = Queue::new();
        let mut model = VecDeque::new();
        for round in 0..2000 {
            let payload = format!("{}", rng.gen_range(0..50)).into_bytes();
            match rng.gen_range(0..4) {
                0 => {
                    queue.insert_head(&payload).unwrap();
                    model.push_front(payload);
                }
                1 => {
                    queue.insert_tail(&payload).unwrap();
                    model.push_back(payload);
                }
                2 => {
                    let removed = queue.remove_head(None);
                    let expected = model.pop_front();
                    assert_eq!(removed.is_some(), expected.is_some());
                    if let Some(element) = removed {
                        assert_eq!(queue.value(&element), expected.as_deref());
                        queue.release(element);
                    }
                }
                _ => {
                    let removed = queue.remove_tail(None);
                    let expected = model.pop_back();
                    assert_eq!(removed.is_some(), expected.is_some());
                    if let Some(element) = removed {
                        assert_eq!(queue.value(&element), expected.as_deref());
                        queue.release(element);
                    }
                }
            }
            assert_eq!(queue.size(), model.len(), "round {}", round);
        }
        assert!(queue.check_links());
        assert!(queue.iter().eq(model.iter().map(Vec::as_slice)));
    }
}
