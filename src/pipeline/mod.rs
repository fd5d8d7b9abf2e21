//! News-Processing Pipeline
//!
//! Four cooperating stage types connected by the queues in
//! [`crate::queue`], shut down deterministically by a sentinel protocol:
//! every producer ends its stream with one [`Envelope::Done`]; the
//! dispatcher counts producer sentinels and, on the last one, broadcasts
//! exactly one sentinel per article kind; each editor forwards its
//! sentinel; the manager terminates after consuming one sentinel per
//! editor.
//!
//! # Data flow
//!
//! ```text
//! Producer 1 ──BoundedQueue──┐                 ┌──UnboundedQueue──▶ Editor(Sports) ──┐
//! Producer 2 ──BoundedQueue──┼──▶ Dispatcher ──┼──UnboundedQueue──▶ Editor(News) ────┼──BoundedQueue──▶ Manager
//!     ...                    │                 └──UnboundedQueue──▶ Editor(Weather) ─┘   (shared)
//! Producer N ──BoundedQueue──┘
//! ```
//!
//! FIFO holds within each queue; there is no ordering guarantee across
//! kinds, since routing and editing run in parallel per kind.

pub mod article;
pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod manager;
pub mod producer;
pub mod runner;

pub use article::{Article, ArticleKind, Envelope, NUM_ARTICLE_KINDS};
pub use dispatcher::{Dispatcher, DispatcherSummary};
pub use editor::Editor;
pub use error::{PipelineError, PipelineResult};
pub use manager::{Manager, ManagerSummary};
pub use producer::Producer;
pub use runner::{run_pipeline, PipelineOptions, DEFAULT_EDIT_DELAY};

#[cfg(test)]
mod tests;
