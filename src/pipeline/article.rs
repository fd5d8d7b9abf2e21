//! Article types and the queue envelope
//!
//! Every queue in the pipeline carries [`Envelope`] values: either a real
//! [`Article`] or the out-of-band `Done` sentinel. Modelling the sentinel as
//! an enum variant (instead of a magic payload value) makes it impossible
//! for article content to collide with the termination signal.

use std::fmt;
use strum_macros::{Display, EnumCount, EnumIter};

/// Closed set of article categories handled by the pipeline.
///
/// Each kind owns one dispatcher output queue and one editor. The set is
/// process-wide constant data; classification is by construction, not by
/// payload inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum ArticleKind {
    Sports,
    News,
    Weather,
}

/// Number of article kinds, and therefore the editor pool size and the
/// number of sentinels the manager waits for.
pub const NUM_ARTICLE_KINDS: usize = <ArticleKind as strum::EnumCount>::COUNT;

impl ArticleKind {
    /// Stable index used for routing tables and per-kind tallies.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A typed unit of work flowing through the pipeline.
///
/// `serial` is the per-producer running count of articles of this kind at
/// creation time. No component mutates an article after the producer
/// constructs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub producer: usize,
    pub kind: ArticleKind,
    pub serial: usize,
}

impl Article {
    pub fn new(producer: usize, kind: ArticleKind, serial: usize) -> Self {
        Self {
            producer,
            kind,
            serial,
        }
    }
}

impl fmt::Display for Article {
    /// Report line format: `Producer <id> <kind> <serial>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Producer {} {} {}", self.producer, self.kind, self.serial)
    }
}

/// Queue element: a real article, or the "no more input will arrive on this
/// channel" sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Envelope {
    Article(Article),
    Done,
}

impl Envelope {
    /// True for the termination sentinel.
    pub fn is_done(&self) -> bool {
        matches!(self, Envelope::Done)
    }
}
