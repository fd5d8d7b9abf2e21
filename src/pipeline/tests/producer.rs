//! Tests for the producer stage

use crate::core::config::ProducerSpec;
use crate::pipeline::article::{Envelope, NUM_ARTICLE_KINDS};
use crate::pipeline::producer::Producer;
use crate::queue::BoundedQueue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

fn spec(id: usize, articles: usize, queue_capacity: usize) -> ProducerSpec {
    ProducerSpec {
        id,
        articles,
        queue_capacity,
    }
}

#[tokio::test]
async fn emits_configured_count_then_sentinel() {
    let spec = spec(1, 5, 8);
    let queue = Arc::new(BoundedQueue::new(spec.queue_capacity));
    let producer = Producer::new(&spec, Arc::clone(&queue), StdRng::seed_from_u64(7));

    let produced = producer.run().await;
    assert_eq!(produced.iter().sum::<usize>(), 5);

    let mut articles = Vec::new();
    loop {
        match queue.try_remove().expect("queue drained before sentinel") {
            Envelope::Article(article) => articles.push(article),
            Envelope::Done => break,
        }
    }
    assert_eq!(articles.len(), 5);
    assert!(articles.iter().all(|a| a.producer == 1));
    // Nothing may follow the sentinel.
    assert!(queue.is_empty());
}

#[tokio::test]
async fn serials_count_per_kind_from_zero() {
    let spec = spec(2, 40, 64);
    let queue = Arc::new(BoundedQueue::new(spec.queue_capacity));
    let producer = Producer::new(&spec, Arc::clone(&queue), StdRng::seed_from_u64(99));

    let produced = producer.run().await;

    let mut next_serial = [0usize; NUM_ARTICLE_KINDS];
    loop {
        match queue.try_remove().expect("queue drained before sentinel") {
            Envelope::Article(article) => {
                let slot = article.kind.index();
                assert_eq!(
                    article.serial, next_serial[slot],
                    "serial for {} out of sequence",
                    article.kind
                );
                next_serial[slot] += 1;
            }
            Envelope::Done => break,
        }
    }
    assert_eq!(next_serial, produced);
}

#[tokio::test]
async fn zero_articles_emits_only_sentinel() {
    let spec = spec(1, 0, 1);
    let queue = Arc::new(BoundedQueue::new(spec.queue_capacity));
    let producer = Producer::new(&spec, Arc::clone(&queue), StdRng::seed_from_u64(0));

    let produced = producer.run().await;
    assert_eq!(produced, [0; NUM_ARTICLE_KINDS]);
    assert_eq!(queue.remove().await, Envelope::Done);
    assert!(queue.is_empty());
}

/// A full queue suspends the producer until the consumer side drains it:
/// the backpressure contract, not an error.
#[tokio::test]
async fn full_queue_applies_backpressure() {
    let spec = spec(1, 3, 1);
    let queue = Arc::new(BoundedQueue::new(spec.queue_capacity));
    let producer = Producer::new(&spec, Arc::clone(&queue), StdRng::seed_from_u64(3));

    let mut task = tokio::spawn(producer.run());
    sleep(Duration::from_millis(50)).await;
    // Capacity 1 and four envelopes to emit: the producer cannot be done.
    assert!(!task.is_finished(), "producer finished against backpressure");

    let mut received = Vec::new();
    for _ in 0..4 {
        received.push(queue.remove().await);
    }
    timeout(Duration::from_secs(1), &mut task)
        .await
        .expect("drained producer should finish")
        .unwrap();

    assert_eq!(received.len(), 4);
    assert!(received[..3].iter().all(|e| !e.is_done()));
    assert!(received[3].is_done());
}
