//! Tests for BoundedQueue blocking and capacity semantics

use crate::queue::BoundedQueue;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

#[tokio::test]
async fn fifo_order_preserved() {
    let queue = BoundedQueue::new(10);

    for i in 0..10 {
        queue.insert(i).await;
    }
    for expected in 0..10 {
        assert_eq!(queue.remove().await, expected);
    }
    assert!(queue.is_empty());
}

#[tokio::test]
async fn capacity_is_fixed_at_construction() {
    let queue: BoundedQueue<u32> = BoundedQueue::new(4);
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.len(), 0);

    queue.insert(1).await;
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.len(), 1);
}

#[test]
#[should_panic(expected = "capacity must be at least 1")]
fn zero_capacity_is_rejected() {
    let _ = BoundedQueue::<u32>::new(0);
}

/// Scenario: capacity 1, insert(A) succeeds immediately, a concurrent
/// insert(B) blocks until remove() returns A, then B becomes removable.
#[tokio::test]
async fn insert_blocks_while_full_until_remove() {
    let queue = Arc::new(BoundedQueue::new(1));
    queue.insert('A').await;

    let writer = Arc::clone(&queue);
    let mut blocked = tokio::spawn(async move {
        writer.insert('B').await;
    });

    // The second insert must still be suspended while the queue is full.
    sleep(Duration::from_millis(50)).await;
    assert!(!blocked.is_finished(), "insert into a full queue returned");
    assert_eq!(queue.len(), 1);

    assert_eq!(queue.remove().await, 'A');
    timeout(Duration::from_secs(1), &mut blocked)
        .await
        .expect("unblocked insert should complete")
        .unwrap();
    assert_eq!(queue.remove().await, 'B');
}

#[tokio::test]
async fn remove_blocks_while_empty_until_insert() {
    let queue: Arc<BoundedQueue<u32>> = Arc::new(BoundedQueue::new(2));

    let reader = Arc::clone(&queue);
    let mut blocked = tokio::spawn(async move { reader.remove().await });

    sleep(Duration::from_millis(50)).await;
    assert!(!blocked.is_finished(), "remove from an empty queue returned");

    queue.insert(7).await;
    let value = timeout(Duration::from_secs(1), &mut blocked)
        .await
        .expect("unblocked remove should complete")
        .unwrap();
    assert_eq!(value, 7);
}

#[tokio::test]
async fn try_remove_is_non_blocking() {
    let queue = BoundedQueue::new(2);
    assert_eq!(queue.try_remove(), None);

    queue.insert(1).await;
    queue.insert(2).await;
    assert_eq!(queue.try_remove(), Some(1));
    assert_eq!(queue.try_remove(), Some(2));
    assert_eq!(queue.try_remove(), None);
}

#[tokio::test]
async fn try_remove_frees_a_slot() {
    let queue = BoundedQueue::new(1);
    queue.insert(1).await;
    assert_eq!(queue.try_remove(), Some(1));

    // The freed slot must accept a new item without suspending.
    timeout(Duration::from_millis(100), queue.insert(2))
        .await
        .expect("insert into freed slot should not block");
    assert_eq!(queue.remove().await, 2);
}

#[tokio::test]
async fn ready_resolves_without_consuming() {
    let queue = BoundedQueue::new(2);
    queue.insert("item").await;

    timeout(Duration::from_millis(100), queue.ready())
        .await
        .expect("ready on a non-empty queue should resolve");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.remove().await, "item");
}

#[tokio::test]
async fn ready_suspends_while_empty() {
    let queue: Arc<BoundedQueue<u32>> = Arc::new(BoundedQueue::new(1));

    let watcher = Arc::clone(&queue);
    let mut waiting = tokio::spawn(async move { watcher.ready().await });

    sleep(Duration::from_millis(50)).await;
    assert!(!waiting.is_finished(), "ready on an empty queue resolved");

    queue.insert(1).await;
    timeout(Duration::from_secs(1), &mut waiting)
        .await
        .expect("ready should resolve after insert")
        .unwrap();
    assert_eq!(queue.len(), 1);
}
