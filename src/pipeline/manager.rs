//! Manager stage
//!
//! Terminal consumer of the pipeline. The manager is the sole reader of
//! the shared bounded queue: it reports each article exactly once, in the
//! order dequeued, and terminates after observing exactly one sentinel per
//! editor. The report stream is program output, not logging, so it goes
//! through an explicit sink (stdout in the binary, a capture buffer in
//! tests).

use crate::pipeline::article::Envelope;
use crate::pipeline::error::PipelineResult;
use crate::queue::BoundedQueue;
use std::io::Write;
use std::sync::Arc;

/// Totals reported by the manager after a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerSummary {
    /// Articles reported, each exactly once.
    pub articles_reported: usize,
    /// Sentinels consumed; equals the editor count on return.
    pub sentinels_seen: usize,
}

/// Consumes the shared queue, reports articles, and detects completion.
pub struct Manager<W> {
    shared: Arc<BoundedQueue<Envelope>>,
    expected_sentinels: usize,
    out: W,
}

impl<W: Write> Manager<W> {
    /// `expected_sentinels` is the editor count: one sentinel arrives per
    /// editor, and the manager terminates exactly on the last one.
    pub fn new(shared: Arc<BoundedQueue<Envelope>>, expected_sentinels: usize, out: W) -> Self {
        Self {
            shared,
            expected_sentinels,
            out,
        }
    }

    /// Report articles until every editor has signalled completion, then
    /// write the final completion marker.
    pub async fn run(mut self) -> PipelineResult<ManagerSummary> {
        let mut summary = ManagerSummary {
            articles_reported: 0,
            sentinels_seen: 0,
        };

        while summary.sentinels_seen < self.expected_sentinels {
            match self.shared.remove().await {
                Envelope::Article(article) => {
                    writeln!(self.out, "{}", article)?;
                    summary.articles_reported += 1;
                }
                Envelope::Done => {
                    summary.sentinels_seen += 1;
                    log::debug!(
                        "manager: editor complete ({}/{})",
                        summary.sentinels_seen,
                        self.expected_sentinels
                    );
                }
            }
        }

        writeln!(self.out, "DONE")?;
        self.out.flush()?;
        log::debug!(
            "manager finished: {} articles reported",
            summary.articles_reported
        );
        Ok(summary)
    }
}
