use crate::queue::{Escaped, Queue, GHOST};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the payloads of a `Queue`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the queue, where `start` is inclusive and `end` is not. Initially
/// `end` is the ghost node.
///
/// # Examples
///
/// ```compile_fail
/// use cyclic_queue::Queue;
/// use std::iter::FromIterator;
///
/// let mut queue = Queue::from_iter(["1", "2", "3"]);
/// let mut iter = queue.iter();
///
/// // Won't compile, because queue is already borrowed immutably.
/// queue.insert_tail(b"4").unwrap();
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a> {
    queue: &'a Queue,
    start: usize,
    end: usize,
    #[cfg(feature = "length")]
    len: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(queue: &'a Queue) -> Self {
        Self {
            queue,
            start: queue.front_node(),
            end: GHOST,
            #[cfg(feature = "length")]
            len: queue.len(),
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        let mut node = self.start;
        while node != self.end {
            f.field(&Escaped(self.queue.element(node)));
            node = self.queue.next_of(node);
        }
        f.finish()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        let current = self.start;
        self.start = self.queue.next_of(current);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(self.queue.element(current))
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end = self.queue.prev_of(self.end);
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(self.queue.element(self.end))
    }
}

#[cfg(feature = "length")]
impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a [u8];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects payloads into a new queue.
///
/// # Panics
///
/// Panics if storage for an element cannot be allocated, like the standard
/// collections do. Use [`Queue::insert_tail`] to handle the failure instead.
impl<B: AsRef<[u8]>> FromIterator<B> for Queue {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

/// Appends payloads to the back of the queue.
///
/// # Panics
///
/// Panics if storage for an element cannot be allocated.
impl<B: AsRef<[u8]>> Extend<B> for Queue {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for payload in iter {
            if let Err(err) = self.insert_tail(payload.as_ref()) {
                panic!("cannot extend the queue: {}", err);
            }
        }
    }
}
