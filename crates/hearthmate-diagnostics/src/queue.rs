use std::collections::VecDeque;
use std::sync::Mutex;

/// Thread-safe FIFO container.
///
/// Pure synchronization, no business logic. Each operation holds the
/// lock for its own duration only: concurrent appends may interleave in
/// any order relative to each other, but every individual append/remove
/// is atomic and items are handed out in insertion order.
pub struct ConcurrentQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> ConcurrentQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    pub fn append(&self, item: T) {
        self.items.lock().unwrap().push_back(item);
    }

    /// Atomically take the oldest item. `None` when the queue is empty,
    /// so check-then-remove races between concurrent callers cannot
    /// observe a half-removed state.
    pub fn remove_first(&self) -> Option<T> {
        self.items.lock().unwrap().pop_front()
    }

    /// Point-in-time snapshot; may be stale by the time the caller acts
    /// on it.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.items.lock().unwrap().clear();
    }
}

impl<T> Default for ConcurrentQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
