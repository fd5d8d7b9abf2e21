//! Fixed-capacity blocking FIFO queue
//!
//! `insert` suspends the calling task while the queue is full; `remove`
//! suspends while it is empty. Capacity is fixed at construction.

use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::Semaphore;

/// Fixed-capacity FIFO with blocking insert-when-full and blocking
/// remove-when-empty semantics.
///
/// Internally a mutex-guarded ring buffer paired with two counting
/// semaphores: `slots` tracks free capacity and gates `insert`, `occupied`
/// tracks stored items and gates `remove`. The permit count of `occupied`
/// always equals the number of items in the buffer, so a task cancelled
/// while waiting can never lose or leak an item.
///
/// # Example
///
/// ```rust
/// use newsroom::queue::BoundedQueue;
///
/// # async fn example() {
/// let queue = BoundedQueue::new(2);
/// queue.insert("first").await;
/// queue.insert("second").await;
/// assert_eq!(queue.remove().await, "first");
/// # }
/// ```
#[derive(Debug)]
pub struct BoundedQueue<T> {
    items: Mutex<VecDeque<T>>,
    slots: Semaphore,
    occupied: Semaphore,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Create a queue with the given fixed capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero: a zero-capacity queue could never
    /// accept an item, so every insert would suspend forever.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "BoundedQueue capacity must be at least 1");
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            slots: Semaphore::new(capacity),
            occupied: Semaphore::new(0),
            capacity,
        }
    }

    /// Append an item, suspending while the queue is full.
    ///
    /// Blocking is the only form of backpressure; the operation itself
    /// cannot fail.
    pub async fn insert(&self, item: T) {
        let permit = self
            .slots
            .acquire()
            .await
            .expect("queue semaphore never closed");
        permit.forget();
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
        let item = self
            .items
            .lock()
            .unwrap()
            .pop_front()
            .expect("occupied permit implies a stored item");
        self.slots.add_permits(1);
        item
    }

    /// Remove and return the oldest item without suspending, or `None` if
    /// the queue is currently empty.
    pub fn try_remove(&self) -> Option<T> {
        let permit = self.occupied.try_acquire().ok()?;
        permit.forget();
        let item = self
            .items
            .lock()
            .unwrap()
            .pop_front()
            .expect("occupied permit implies a stored item");
        self.slots.add_permits(1);
        Some(item)
    }

    /// Suspend until the queue holds at least one item, without consuming.
    ///
    /// Cancel-safe: the readiness permit is returned on completion or
    /// cancellation, never consumed. Intended for a single consumer
    /// multiplexing over several queues; with competing consumers a wakeup
    /// does not guarantee the subsequent `try_remove` will succeed.
    pub async fn ready(&self) {
        let _permit = self
            .occupied
            .acquire()
            .await
            .expect("queue semaphore never closed");
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// True when no items are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The fixed capacity this queue was constructed with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
