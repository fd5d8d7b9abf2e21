//! Editor stage
//!
//! One editor per article kind. Each editor drains its dedicated per-kind
//! queue, simulates editing with a fixed delay, and forwards articles to
//! the shared bounded queue feeding the manager. Editors run concurrently,
//! so articles of different kinds interleave arbitrarily in the shared
//! queue; per-kind order is preserved.

use crate::pipeline::article::{ArticleKind, Envelope};
use crate::queue::{BoundedQueue, UnboundedQueue};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Per-kind transform-and-forward stage.
pub struct Editor {
    kind: ArticleKind,
    inbox: Arc<UnboundedQueue<Envelope>>,
    outbox: Arc<BoundedQueue<Envelope>>,
    edit_delay: Duration,
}

impl Editor {
    /// `edit_delay` is the simulated per-article processing time. It is a
    /// tunable, not a correctness requirement; tests run it near zero.
    pub fn new(
        kind: ArticleKind,
        inbox: Arc<UnboundedQueue<Envelope>>,
        outbox: Arc<BoundedQueue<Envelope>>,
        edit_delay: Duration,
    ) -> Self {
        Self {
            kind,
            inbox,
            outbox,
            edit_delay,
        }
    }

    /// Forward articles until the sentinel arrives, then forward the
    /// sentinel and stop. Returns the number of articles edited.
    pub async fn run(self) -> usize {
        let mut edited = 0usize;
        loop {
            match self.inbox.remove().await {
                Envelope::Article(article) => {
                    sleep(self.edit_delay).await;
                    self.outbox.insert(Envelope::Article(article)).await;
                    edited += 1;
                }
                Envelope::Done => {
                    self.outbox.insert(Envelope::Done).await;
                    break;
                }
            }
        }
        log::debug!("editor {} finished: {} articles edited", self.kind, edited);
        edited
    }
}
