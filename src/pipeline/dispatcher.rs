//! Dispatcher stage
//!
//! The dispatcher is the exclusive consumer of every producer queue. It
//! scans the producer slots in round-robin order, classifies each article
//! by kind, and routes it to the matching per-kind unbounded queue. A
//! sentinel retires its slot; once every producer has completed, the
//! dispatcher broadcasts exactly one sentinel to each per-kind queue so
//! that every editor terminates.
//!
//! The scan takes at most one item per slot per pass, so a fast producer
//! cannot starve the others. A naive blocking read per slot would stall
//! the whole scan on one empty queue while others hold data; instead each
//! slot is polled with `try_remove`, and an idle pass suspends on a single
//! multiplexed wait that wakes as soon as any active producer queue
//! becomes non-empty. The dispatcher never busy-polls.

use crate::pipeline::article::{Envelope, NUM_ARTICLE_KINDS};
use crate::queue::{BoundedQueue, UnboundedQueue};
use std::sync::Arc;

/// Per-run routing totals reported by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherSummary {
    /// Articles routed, indexed by article kind.
    pub routed: [usize; NUM_ARTICLE_KINDS],
    /// Producers whose sentinel was observed. Always the full producer
    /// count on return.
    pub producers_completed: usize,
}

impl DispatcherSummary {
    /// Total number of articles routed across all kinds.
    pub fn total_routed(&self) -> usize {
        self.routed.iter().sum()
    }
}

/// Routes articles from producer queues to per-kind editor queues and
/// detects global producer completion.
pub struct Dispatcher {
    /// Producer queue per slot; `None` marks a retired slot. Retiring a
    /// slot drops the last dispatcher-side handle to that queue.
    slots: Vec<Option<Arc<BoundedQueue<Envelope>>>>,
    /// One output queue per article kind, indexed by `ArticleKind::index`.
    outputs: Vec<Arc<UnboundedQueue<Envelope>>>,
}

impl Dispatcher {
    /// Build a dispatcher over the given producer queues and per-kind
    /// output queues.
    ///
    /// # Panics
    ///
    /// Panics if `outputs` does not hold exactly one queue per article
    /// kind; the routing table is a closed set.
    pub fn new(
        producer_queues: Vec<Arc<BoundedQueue<Envelope>>>,
        outputs: Vec<Arc<UnboundedQueue<Envelope>>>,
    ) -> Self {
        assert_eq!(
            outputs.len(),
            NUM_ARTICLE_KINDS,
            "dispatcher requires one output queue per article kind"
        );
        Self {
            slots: producer_queues.into_iter().map(Some).collect(),
            outputs,
        }
    }

    /// Drain all producers, route every article, and broadcast the
    /// sentinel once the last producer completes.
    ///
    /// This is the sole exit condition: the loop ends only after exactly
    /// one sentinel per producer has been observed.
    pub async fn run(mut self) -> DispatcherSummary {
        let total = self.slots.len();
        let mut routed = [0usize; NUM_ARTICLE_KINDS];
        let mut done_seen = 0usize;

        while done_seen < total {
            let mut progressed = false;

            for slot in 0..self.slots.len() {
                let envelope = match self.slots[slot].as_ref() {
                    Some(queue) => queue.try_remove(),
                    None => continue,
                };
                match envelope {
                    Some(Envelope::Article(article)) => {
                        progressed = true;
                        routed[article.kind.index()] += 1;
                        self.outputs[article.kind.index()].insert(Envelope::Article(article));
                    }
                    Some(Envelope::Done) => {
                        progressed = true;
                        self.slots[slot] = None;
                        done_seen += 1;
                        log::debug!(
                            "dispatcher: producer slot {} complete ({}/{})",
                            slot,
                            done_seen,
                            total
                        );
                    }
                    None => {}
                }
            }

            if !progressed && done_seen < total {
                self.wait_any_ready().await;
            }
        }

        // Exactly-once broadcast: one sentinel per editor.
        for output in &self.outputs {
            output.insert(Envelope::Done);
        }
        log::debug!(
            "dispatcher finished: {} articles routed from {} producers",
            routed.iter().sum::<usize>(),
            total
        );

        DispatcherSummary {
            routed,
            producers_completed: done_seen,
        }
    }

    /// Suspend until any active producer queue is non-empty.
    ///
    /// Cancel-safe fan-in over the slots' `ready()` futures; no item is
    /// consumed here, the woken pass re-polls with `try_remove`. Called
    /// only while at least one slot is active.
    async fn wait_any_ready(&self) {
        let waits: Vec<_> = self
            .slots
            .iter()
            .flatten()
            .map(|queue| Box::pin(queue.ready()))
            .collect();
        debug_assert!(!waits.is_empty(), "idle wait with no active producers");
        futures::future::select_all(waits).await;
    }
}
