//! Pipeline wiring and lifecycle
//!
//! Builds every queue from the configuration, spawns one task per stage
//! instance, and joins them in dependency order: producers first, then the
//! dispatcher, the editor pool, and finally the manager. Termination is
//! entirely sentinel-driven; there is no cancellation or watchdog path.

use crate::core::config::PipelineConfig;
use crate::pipeline::article::{ArticleKind, Envelope, NUM_ARTICLE_KINDS};
use crate::pipeline::dispatcher::Dispatcher;
use crate::pipeline::editor::Editor;
use crate::pipeline::error::PipelineResult;
use crate::pipeline::manager::{Manager, ManagerSummary};
use crate::pipeline::producer::Producer;
use crate::queue::{BoundedQueue, UnboundedQueue};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Default simulated editing delay, matching the reference configuration.
pub const DEFAULT_EDIT_DELAY: Duration = Duration::from_millis(100);

/// Run-level tunables with no bearing on correctness.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Simulated per-article editing time.
    pub edit_delay: Duration,
    /// Base RNG seed for reproducible article streams. Each producer
    /// derives its own stream from this and its id. `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            edit_delay: DEFAULT_EDIT_DELAY,
            seed: None,
        }
    }
}

/// Execute one full pipeline run and return the manager's summary.
///
/// Spawns one task per producer, one for the dispatcher, one editor per
/// article kind, and one for the manager. The call resolves once the
/// manager has consumed a sentinel from every editor; no task outlives it.
pub async fn run_pipeline<W>(
    config: &PipelineConfig,
    options: &PipelineOptions,
    out: W,
) -> PipelineResult<ManagerSummary>
where
    W: Write + Send + 'static,
{
    let producer_queues: Vec<Arc<BoundedQueue<Envelope>>> = config
        .producers
        .iter()
        .map(|spec| Arc::new(BoundedQueue::new(spec.queue_capacity)))
        .collect();
    let kind_queues: Vec<Arc<UnboundedQueue<Envelope>>> = (0..NUM_ARTICLE_KINDS)
        .map(|_| Arc::new(UnboundedQueue::new()))
        .collect();
    let shared = Arc::new(BoundedQueue::new(config.shared_capacity));

    log::info!(
        "starting pipeline: {} producers, {} editors, shared capacity {}",
        config.producers.len(),
        NUM_ARTICLE_KINDS,
        config.shared_capacity
    );

    let mut producer_tasks = Vec::with_capacity(config.producers.len());
    for (spec, queue) in config.producers.iter().zip(&producer_queues) {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(spec.id as u64)),
            None => StdRng::from_entropy(),
        };
        let producer = Producer::new(spec, Arc::clone(queue), rng);
        producer_tasks.push(tokio::spawn(producer.run()));
    }

    // The dispatcher takes ownership of the producer-side queue handles;
    // it alone decides when each slot's queue is released.
    let dispatcher = Dispatcher::new(producer_queues, kind_queues.clone());
    let dispatcher_task = tokio::spawn(dispatcher.run());

    let mut editor_tasks = Vec::with_capacity(NUM_ARTICLE_KINDS);
    for kind in ArticleKind::iter() {
        let editor = Editor::new(
            kind,
            Arc::clone(&kind_queues[kind.index()]),
            Arc::clone(&shared),
            options.edit_delay,
        );
        editor_tasks.push(tokio::spawn(editor.run()));
    }

    let manager = Manager::new(Arc::clone(&shared), NUM_ARTICLE_KINDS, out);
    let manager_task = tokio::spawn(manager.run());

    for task in producer_tasks {
        task.await?;
    }
    let dispatch_summary = dispatcher_task.await?;
    for task in editor_tasks {
        task.await?;
    }
    let summary = manager_task.await??;

    log::info!(
        "pipeline complete: {} articles routed, {} reported",
        dispatch_summary.total_routed(),
        summary.articles_reported
    );
    Ok(summary)
}
