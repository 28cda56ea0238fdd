//! Event extraction for dockerlog
//!
//! This crate turns Docker API proxy log lines into container and image
//! lifecycle events: relevance filtering, pattern matching, deduplication
//! and record formatting.

mod dedup;
mod error;
mod filter;
mod format;
mod parser;
mod stream;

#[cfg(test)]
mod fixtures;

pub use dedup::SeenLines;
pub use error::ExtractError;
pub use filter::RelevanceFilter;
pub use format::{format_event, write_event};
pub use parser::{
    ContainerDeleteMatcher, ContainerStopMatcher, EventMatcher, EventParser, ImageCreateMatcher,
    ImageDeleteMatcher, StartRestartMatcher,
};
pub use stream::{EventExtractor, RunSummary};

// Re-export types used in our public API
pub use dockerlog_types::{LogEvent, Operation, OutputFormat};
