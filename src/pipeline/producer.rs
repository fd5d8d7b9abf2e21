//! Producer stage
//!
//! Each producer owns one bounded queue and generates a configured number
//! of articles of pseudo-randomly chosen kind, followed by the termination
//! sentinel. A full queue suspends the producer, providing backpressure
//! against a slow dispatcher; that is expected behaviour, not an error.

use crate::core::config::ProducerSpec;
use crate::pipeline::article::{Article, ArticleKind, Envelope, NUM_ARTICLE_KINDS};
use crate::queue::BoundedQueue;
use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Generates articles into a dedicated bounded queue, then signals
/// completion. No two producers share a queue.
pub struct Producer {
    id: usize,
    articles: usize,
    queue: Arc<BoundedQueue<Envelope>>,
    rng: StdRng,
}

impl Producer {
    pub fn new(spec: &ProducerSpec, queue: Arc<BoundedQueue<Envelope>>, rng: StdRng) -> Self {
        Self {
            id: spec.id,
            articles: spec.articles,
            queue,
            rng,
        }
    }

    /// Emit exactly the configured number of articles, then the sentinel.
    ///
    /// Returns the per-kind production tally. `serial` on each article is
    /// the count of previously produced articles of the same kind, so the
    /// tally also records the next serial per kind.
    pub async fn run(mut self) -> [usize; NUM_ARTICLE_KINDS] {
        let kinds: Vec<ArticleKind> = ArticleKind::iter().collect();
        let mut produced = [0usize; NUM_ARTICLE_KINDS];

        for _ in 0..self.articles {
            let kind = kinds[self.rng.gen_range(0..NUM_ARTICLE_KINDS)];
            let serial = produced[kind.index()];
            produced[kind.index()] += 1;
            self.queue
                .insert(Envelope::Article(Article::new(self.id, kind, serial)))
                .await;
        }

        self.queue.insert(Envelope::Done).await;
        log::debug!(
            "producer {} finished: {} articles emitted",
            self.id,
            self.articles
        );
        produced
    }
}
