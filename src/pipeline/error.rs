//! Pipeline Error Types

/// Errors that can end a pipeline run.
///
/// Every variant is fatal: a blocked pipeline stage cannot be restarted
/// independently of its upstream and downstream peers, so there is no unit
/// of partial recovery and no retry path.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to write report output: {0}")]
    Report(#[from] std::io::Error),

    #[error("pipeline stage terminated abnormally: {0}")]
    StageFailed(#[from] tokio::task::JoinError),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
