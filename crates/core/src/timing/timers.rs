use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Scheduled<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

// Ordered by (due, seq) reversed so the heap top is the earliest timer, and
// timers due at the same instant fire in scheduling order.
impl<T> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

/// One-shot deferred tasks keyed by due time.
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Scheduled<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due_ms: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { due_ms, seq, task });
    }

    /// Cancel every pending timer whose task matches. Returns how many.
    pub fn cancel_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> usize {
        let before = self.heap.len();
        self.heap.retain(|s| !pred(&s.task));
        before - self.heap.len()
    }

    pub fn contains_where(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.heap.iter().any(|s| pred(&s.task))
    }

    /// Remove and return the earliest timer due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, T)> {
        if self.heap.peek()?.due_ms > now_ms {
            return None;
        }
        self.heap.pop().map(|s| (s.due_ms, s.task))
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.heap.peek().map(|s| s.due_ms)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_then_insertion_order() {
        let mut q = TimerQueue::new();
        q.schedule(300, "b");
        q.schedule(100, "a");
        q.schedule(300, "c");

        assert_eq!(q.next_deadline(), Some(100));
        assert_eq!(q.pop_due(99), None);
        assert_eq!(q.pop_due(1000), Some((100, "a")));
        assert_eq!(q.pop_due(1000), Some((300, "b")));
        assert_eq!(q.pop_due(1000), Some((300, "c")));
        assert!(q.is_empty());
    }

    #[test]
    fn cancellation() {
        let mut q = TimerQueue::new();
        q.schedule(10, 1);
        q.schedule(20, 2);
        q.schedule(30, 3);

        assert_eq!(q.cancel_where(|t| *t != 2), 2);
        assert_eq!(q.cancel_where(|t| *t == 3), 0);
        assert!(q.contains_where(|t| *t == 2));
        assert_eq!(q.pop_due(100), Some((20, 2)));
        assert_eq!(q.pop_due(100), None);
    }
}
