use crate::queue::{Queue, GHOST};

/// Stable merge sort over the whole queue, relinking nodes in place.
///
/// The ring is first opened into a chain: the back node already links to the
/// ghost node, which serves as the chain terminator until the sorted chain is
/// threaded back into a ring.
pub(crate) fn merge_sort<F>(queue: &mut Queue, mut less: F)
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    let front = queue.front_node();
    if front == GHOST || queue.next_of(front) == GHOST {
        return;
    }
    let front = sort_chain(queue, front, &mut less);
    rethread(queue, front);
}

/// Cut the open chain starting at `front` behind its midpoint and return the
/// front of the second half. The first half keeps the extra node of an odd
/// chain.
fn split_mid(queue: &mut Queue, front: usize) -> usize {
    let (mut slow, mut fast) = (front, queue.next_of(front));
    while fast != GHOST && queue.next_of(fast) != GHOST {
        slow = queue.next_of(slow);
        fast = queue.next_of(queue.next_of(fast));
    }
    let mid = queue.next_of(slow);
    queue.nodes[slow].next = GHOST;
    mid
}

fn sort_chain<F>(queue: &mut Queue, front: usize, less: &mut F) -> usize
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    if queue.next_of(front) == GHOST {
        return front;
    }
    let mid = split_mid(queue, front);
    let left = sort_chain(queue, front, less);
    let right = sort_chain(queue, mid, less);
    merge(queue, left, right, less)
}

/// Merge two sorted open chains and return the front of the result.
///
/// `ghost.next` is borrowed as the head of the merged chain; `prev` links are
/// left stale until `rethread`.
fn merge<F>(queue: &mut Queue, mut left: usize, mut right: usize, less: &mut F) -> usize
where
    F: FnMut(&[u8], &[u8]) -> bool,
{
    let mut back = GHOST;
    while left != GHOST && right != GHOST {
        // Take from the right only when strictly less, so equal payloads keep
        // their order.
        let taken = if less(queue.element(right), queue.element(left)) {
            &mut right
        } else {
            &mut left
        };
        let node = *taken;
        *taken = queue.next_of(node);
        queue.nodes[back].next = node;
        back = node;
    }
    queue.nodes[back].next = if left != GHOST { left } else { right };
    queue.front_node()
}

/// Close the sorted chain starting at `front` into a ring anchored at the
/// ghost node, fixing every `prev` link in one forward pass.
fn rethread(queue: &mut Queue, front: usize) {
    queue.nodes[GHOST].next = front;
    let (mut prev, mut node) = (GHOST, front);
    while node != GHOST {
        queue.nodes[node].prev = prev;
        prev = node;
        node = queue.next_of(node);
    }
    queue.nodes[GHOST].prev = prev;
}

#[cfg(test)]
mod tests {
    use super::merge_sort;
    use crate::Queue;
    use std::iter::FromIterator;

    #[test]
    fn merge_sort_works() {
        let mut queue = Queue::from_iter([
            "3", "1", "8", "21", "5", "9", "12", "5", "2", "6", "6", "6", "13", "2", "17",
        ]);
        merge_sort(&mut queue, |a, b| a < b);
        assert!(queue.check_links());
        assert_eq!(
            queue,
            Queue::from_iter([
                "1", "12", "13", "17", "2", "2", "21", "3", "5", "5", "6", "6", "6", "8", "9",
            ])
        );
    }

    #[test]
    fn merge_sort_short_queues() {
        let mut queue = Queue::new();
        merge_sort(&mut queue, |a, b| a < b);
        assert!(queue.is_empty());
        assert!(queue.check_links());

        let mut queue = Queue::from_iter(["b", "a"]);
        merge_sort(&mut queue, |a, b| a < b);
        assert_eq!(queue, Queue::from_iter(["a", "b"]));
        assert!(queue.check_links());

        let mut queue = Queue::from_iter(["c", "a", "b"]);
        merge_sort(&mut queue, |a, b| a < b);
        assert_eq!(queue, Queue::from_iter(["a", "b", "c"]));
        assert!(queue.check_links());
    }

    #[test]
    fn merge_sort_with_descending_order() {
        let mut queue = Queue::from_iter(["a", "c", "b", "d"]);
        merge_sort(&mut queue, |a, b| a > b);
        assert_eq!(queue, Queue::from_iter(["d", "c", "b", "a"]));
        assert!(queue.check_links());
    }
}
