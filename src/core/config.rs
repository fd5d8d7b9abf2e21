//! Pipeline configuration loading
//!
//! The configuration file is a sequence of whitespace/newline-separated
//! integers: one `(producerId, numArticles, queueCapacity)` triple per
//! producer, ids strictly sequential from 1, terminated by exactly one
//! trailing integer giving the shared editor/manager queue capacity.
//! Anything malformed is a hard error; a partial or garbage configuration
//! is never produced.

use std::path::Path;

/// Immutable description of one producer, read once from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerSpec {
    /// Producer id, 1-based and sequential.
    pub id: usize,
    /// Number of articles this producer will generate.
    pub articles: usize,
    /// Capacity of this producer's dedicated bounded queue.
    pub queue_capacity: usize,
}

/// The full run configuration: ordered producer specs plus the shared
/// queue capacity. Created once at startup, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub producers: Vec<ProducerSpec>,
    pub shared_capacity: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid integer in configuration: '{token}'")]
    InvalidInteger { token: String },

    #[error("configuration is empty; expected producer triples and a shared queue capacity")]
    Empty,

    #[error("truncated configuration: {count} values do not form producer triples plus a trailing shared queue capacity")]
    Truncated { count: usize },

    #[error("producer ids must be sequential starting at 1: expected {expected}, found {found}")]
    NonSequentialId { expected: usize, found: usize },

    #[error("queue capacity for producer {id} must be at least 1")]
    ZeroProducerCapacity { id: usize },

    #[error("shared queue capacity must be at least 1")]
    ZeroSharedCapacity,
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

impl PipelineConfig {
    /// Load and parse a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_str_contents(&contents)
    }

    /// Parse configuration text.
    ///
    /// A file holding a single integer (zero producers, shared capacity
    /// only) is valid: the pipeline then completes without reporting any
    /// article.
    pub fn from_str_contents(contents: &str) -> ConfigResult<Self> {
        let mut values = Vec::new();
        for token in contents.split_whitespace() {
            let value = token
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidInteger {
                    token: token.to_string(),
                })?;
            values.push(value);
        }

        if values.is_empty() {
            return Err(ConfigError::Empty);
        }
        if values.len() % 3 != 1 {
            return Err(ConfigError::Truncated {
                count: values.len(),
            });
        }

        let shared_capacity = values.pop().expect("length checked above");
        if shared_capacity == 0 {
            return Err(ConfigError::ZeroSharedCapacity);
        }

        let mut producers = Vec::with_capacity(values.len() / 3);
        for (index, triple) in values.chunks_exact(3).enumerate() {
            let (id, articles, queue_capacity) = (triple[0], triple[1], triple[2]);
            let expected = index + 1;
            if id != expected {
                return Err(ConfigError::NonSequentialId { expected, found: id });
            }
            if queue_capacity == 0 {
                return Err(ConfigError::ZeroProducerCapacity { id });
            }
            producers.push(ProducerSpec {
                id,
                articles,
                queue_capacity,
            });
        }

        Ok(PipelineConfig {
            producers,
            shared_capacity,
        })
    }
}
