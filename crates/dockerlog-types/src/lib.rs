//! Shared types for dockerlog
//!
//! This crate contains the event data model produced by the extractor and
//! consumed by the output layer.

use std::fmt;

// ============================================================================
// Operation Types
// ============================================================================

/// Lifecycle operation recognized in a proxy log line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    ContainerStart,
    ContainerRestart,
    ContainerStop,
    ContainerDelete,
    ImageCreate,
    ImageDelete,
}

impl Operation {
    /// Map a container action verb from a request path to its operation
    pub fn from_container_verb(verb: &str) -> Option<Self> {
        match verb {
            "start" => Some(Self::ContainerStart),
            "restart" => Some(Self::ContainerRestart),
            "stop" => Some(Self::ContainerStop),
            _ => None,
        }
    }

    /// Display label, e.g. "Container Start"
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContainerStart => "Container Start",
            Self::ContainerRestart => "Container Restart",
            Self::ContainerStop => "Container Stop",
            Self::ContainerDelete => "Container Delete",
            Self::ImageCreate => "Image Create",
            Self::ImageDelete => "Image Delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Event Types
// ============================================================================

/// A single event extracted from a proxy log line.
///
/// Every field is carried exactly as it appeared in the source line. The
/// timestamp is not reparsed, the duration keeps its unit suffix, and the
/// entity is never normalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEvent {
    timestamp: String,
    entity: String,
    operation: Operation,
    duration: String,
    detail: String,
}

impl LogEvent {
    pub fn new(
        timestamp: impl Into<String>,
        entity: impl Into<String>,
        operation: Operation,
        duration: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            entity: entity.into(),
            operation,
            duration: duration.into(),
            detail: detail.into(),
        }
    }

    /// ISO-8601 UTC instant, `YYYY-MM-DDTHH:MM:SSZ`
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Container ID or image name
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Elapsed time in source units, e.g. "111.718708ms"
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Image tag for image operations, empty otherwise
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

// ============================================================================
// Output Types
// ============================================================================

/// Record layout used when writing events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per event, fields joined by " - "
    #[default]
    Compact,
    /// Labelled multi-line block followed by a blank line
    Readable,
}

impl OutputFormat {
    /// Select the format from the readable-output switch
    pub fn from_readable(readable: bool) -> Self {
        if readable {
            Self::Readable
        } else {
            Self::Compact
        }
    }
}
