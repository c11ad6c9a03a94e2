/// An element removed from a [`Queue`], owned by the caller.
///
/// The handle names a detached slot of the queue it was removed from, and
/// carries the identity of that queue: another queue ignores it. The payload
/// stays readable through [`Queue::value`] until the handle is given back to
/// [`Queue::release`], which destroys the element.
///
/// Dropping a handle does *not* free its slot. The slot stays detached until
/// the queue itself is dropped, so a queue whose removed elements are never
/// released grows its arena without bound.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_head(b"gerbil").unwrap();
///
/// let element = queue.remove_tail(None).unwrap();
/// assert!(queue.is_empty());
/// assert_eq!(queue.value(&element), Some(&b"gerbil"[..]));
///
/// queue.release(element);
/// ```
///
/// [`Queue`]: crate::Queue
/// [`Queue::value`]: crate::Queue::value
/// [`Queue::release`]: crate::Queue::release
#[must_use = "a removed element is destroyed only by `Queue::release`"]
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Element {
    queue: u64,
    index: usize,
}

impl Element {
    pub(crate) fn new(queue: u64, index: usize) -> Self {
        Self { queue, index }
    }

    /// Identity of the queue the element was removed from.
    pub(crate) fn queue(&self) -> u64 {
        self.queue
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

/// Copy `payload` into `buf` the way a bounded C string copy does: at most
/// `buf.len() - 1` bytes, then zero bytes up to the end of `buf`.
///
/// An empty `buf` has no room for the terminator and is left untouched.
pub(crate) fn copy_out(payload: &[u8], buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }
    let copied = payload.len().min(buf.len() - 1);
    let (head, tail) = buf.split_at_mut(copied);
    head.copy_from_slice(&payload[..copied]);
    tail.iter_mut().for_each(|byte| *byte = 0);
}

#[cfg(test)]
mod tests {
    use super::copy_out;

    #[test]
    fn copy_out_truncates() {
        let mut buf = [0xff_u8; 4];
        copy_out(b"abcdef", &mut buf);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn copy_out_pads_short_payloads() {
        let mut buf = [0xff_u8; 6];
        copy_out(b"ab", &mut buf);
        assert_eq!(&buf, b"ab\0\0\0\0");

        let mut buf = [0xff_u8; 3];
        copy_out(b"ab", &mut buf);
        assert_eq!(&buf, b"ab\0");
    }

    #[test]
    fn copy_out_tiny_buffers() {
        let mut buf = [0xff_u8; 1];
        copy_out(b"ab", &mut buf);
        assert_eq!(&buf, b"\0");

        let mut buf: [u8; 0] = [];
        copy_out(b"ab", &mut buf);

        let mut buf = [0xff_u8; 2];
        copy_out(b"", &mut buf);
        assert_eq!(&buf, b"\0\0");
    }
}
