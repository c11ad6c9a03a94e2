use crate::error::{QueueError, Result};
use crate::queue::{Queue, GHOST};
use log::{debug, trace};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

use self::sort::merge_sort;

mod sort;

impl PartialEq for Queue {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for Queue {}

impl PartialOrd for Queue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queue {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl Clone for Queue {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl Hash for Queue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl Queue {
    /// Returns `true` if the `Queue` contains an element equal to the given
    /// payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let queue = Queue::from_iter(["0", "1", "2"]);
    ///
    /// assert_eq!(queue.contains(b"0"), true);
    /// assert_eq!(queue.contains(b"10"), false);
    /// ```
    pub fn contains(&self, payload: &[u8]) -> bool {
        self.iter().any(|e| e == payload)
    }

    /// Deletes the element at index ⌊*n* / 2⌋ counting from the front, where
    /// *n* is the length of the queue.
    ///
    /// The target is found with a slow and a fast cursor, the fast one moving
    /// two nodes per step of the slow one, so *n* is never computed.
    ///
    /// Returns `Err(QueueError::Empty)` if there is nothing to delete.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{Queue, QueueError};
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["a", "b", "c", "d", "e", "f"]);
    /// queue.delete_middle().unwrap();
    /// assert_eq!(queue, Queue::from_iter(["a", "b", "c", "e", "f"]));
    ///
    /// let mut queue = Queue::from_iter(["a"]);
    /// queue.delete_middle().unwrap();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.delete_middle(), Err(QueueError::Empty));
    /// ```
    pub fn delete_middle(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let (mut slow, mut fast) = (self.front_node(), self.front_node());
        while fast != GHOST && self.next_of(fast) != GHOST {
            slow = self.next_of(slow);
            fast = self.next_of(self.next_of(fast));
        }
        let payload = self.destroy_node(slow);
        debug!("deleted middle element {} ({} bytes)", slow, payload.len());
        debug_assert!(self.check_links());
        Ok(())
    }

    /// Deletes every element whose payload occurs more than once, leaving only
    /// the payloads that occur exactly once.
    ///
    /// The queue must already be sorted, so that equal payloads are adjacent.
    /// Each run of equal payloads is deleted as a whole, its first element
    /// included.
    ///
    /// Returns `Err(QueueError::Empty)` without touching the queue if it
    /// holds fewer than two elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "1", "2", "3", "3"]);
    /// queue.delete_duplicate_runs().unwrap();
    /// assert_eq!(queue, Queue::from_iter(["2"]));
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3"]);
    /// queue.delete_duplicate_runs().unwrap();
    /// assert_eq!(queue, Queue::from_iter(["1", "2", "3"]));
    /// ```
    pub fn delete_duplicate_runs(&mut self) -> Result<()> {
        let mut node = self.front_node();
        if node == GHOST || self.next_of(node) == GHOST {
            return Err(QueueError::Empty);
        }
        let mut deleted = 0_usize;
        while node != GHOST && self.next_of(node) != GHOST {
            let next = self.next_of(node);
            if self.element(node) != self.element(next) {
                node = next;
                continue;
            }
            // The payload of the first node of the run is the key for the rest.
            let key = self.destroy_node(node);
            deleted += 1;
            node = next;
            while node != GHOST && self.element(node) == &key[..] {
                let next = self.next_of(node);
                self.destroy_node(node);
                deleted += 1;
                node = next;
            }
        }
        debug!("deleted {} duplicated elements", deleted);
        debug_assert!(self.check_links());
        Ok(())
    }

    /// Swaps every two adjacent elements: the first with the second, the third
    /// with the fourth, and so on. A trailing element without a partner stays
    /// in place.
    ///
    /// Nodes are relinked; no element is allocated or destroyed.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3", "4", "5"]);
    /// queue.swap_adjacent_pairs();
    /// assert_eq!(queue, Queue::from_iter(["2", "1", "4", "3", "5"]));
    /// ```
    pub fn swap_adjacent_pairs(&mut self) {
        let mut left = self.front_node();
        let mut swapped = 0_usize;
        while left != GHOST {
            let right = self.next_of(left);
            if right == GHOST {
                break;
            }
            self.move_node(right, left);
            swapped += 1;
            left = self.next_of(left);
        }
        trace!("swapped {} pairs", swapped);
        debug_assert!(self.check_links());
    }

    /// Reverses the order of the elements in place.
    ///
    /// One pass, starting and ending at the ghost node, swaps the `prev` and
    /// `next` links of every node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["1", "2", "3"]);
    /// queue.reverse();
    /// assert_eq!(queue, Queue::from_iter(["3", "2", "1"]));
    /// ```
    pub fn reverse(&mut self) {
        if self.front_node() == self.back_node() {
            return;
        }
        let mut node = GHOST;
        loop {
            let current = &mut self.nodes[node];
            mem::swap(&mut current.next, &mut current.prev);
            // The old `next` now sits in `prev`.
            node = current.prev;
            if node == GHOST {
                break;
            }
        }
        trace!("reversed queue");
        debug_assert!(self.check_links());
    }

    /// Sorts the queue in ascending byte-wise lexicographic order.
    ///
    /// This sort is stable (i.e., does not reorder equal payloads).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) memory for the recursion.
    ///
    /// # Current Implementation
    ///
    /// The ring is opened into a chain, split recursively at its midpoint
    /// found by a slow and a fast cursor, merged back, and closed into a ring
    /// again. No node or payload is copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["3", "1", "2"]);
    /// queue.sort();
    /// assert_eq!(queue, Queue::from_iter(["1", "2", "3"]));
    /// ```
    pub fn sort(&mut self) {
        merge_sort(self, |a, b| a < b);
        debug!("sorted queue");
        debug_assert!(self.check_links());
    }

    /// Sorts the queue with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal payloads).
    ///
    /// The comparator function must define a total ordering for the payloads
    /// in the queue. If the ordering is not total, the order of the elements
    /// is unspecified.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Examples
    ///
    /// Ignoring ASCII case:
    ///
    /// ```
    /// use cyclic_queue::Queue;
    /// use std::iter::FromIterator;
    ///
    /// let mut queue = Queue::from_iter(["b", "B", "a", "A"]);
    /// queue.sort_by(|a, b| {
    ///     let a = a.iter().map(u8::to_ascii_lowercase);
    ///     let b = b.iter().map(u8::to_ascii_lowercase);
    ///     a.cmp(b)
    /// });
    /// assert_eq!(queue, Queue::from_iter(["a", "A", "b", "B"]));
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less);
        debug!("sorted queue with a comparator");
        debug_assert!(self.check_links());
    }
}
