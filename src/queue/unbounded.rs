//! Growable FIFO queue with non-blocking insert
//!
//! `insert` never suspends: the backing storage grows on demand by
//! amortized doubling. `remove` suspends only while the queue is empty.

use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// FIFO queue that never blocks on insert and blocks on remove only when
/// empty.
///
/// The free-slot semaphore of [`BoundedQueue`](crate::queue::BoundedQueue)
/// is absent here; there is always room for another item. Growth happens
/// inside the mutex-guarded buffer, so a concurrent remover can never
/// observe a torn or partially resized structure. Storage is not shrunk on
/// low occupancy.
#[derive(Debug)]
pub struct UnboundedQueue<T> {
    items: Mutex<VecDeque<T>>,
    occupied: Semaphore,
}

impl<T> Default for UnboundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnboundedQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            occupied: Semaphore::new(0),
        }
    }

    /// Append an item. Never suspends; storage grows as needed.
    ///
    /// Allocation failure while growing aborts the process, consistent
    /// with the no-partial-degradation policy.
    pub fn insert(&self, item: T) {
        self.items.lock().unwrap().push_back(item);
        self.occupied.add_permits(1);
    }

    /// Remove and return the oldest item, suspending while the queue is
    /// empty.
    pub async fn remove(&self) -> T {
        let permit = self
            .occupied
            .acquire()
            .await
            .expect("queue semaphore never closed");
        permit.forget();
        self.items
            .lock()
            .unwrap()
            .pop_front()
            .expect("occupied permit implies a stored item")
    }

    /// Remove and return the oldest item without suspending, or `None` if
    /// the queue is currently empty.
    pub fn try_remove(&self) -> Option<T> {
        let permit = self.occupied.try_acquire().ok()?;
        permit.forget();
        Some(
            self.items
                .lock()
                .unwrap()
                .pop_front()
                .expect("occupied permit implies a stored item"),
        )
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// True when no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
