use std::io::{BufRead, Write};

use tracing::{debug, trace};

use dockerlog_types::{LogEvent, OutputFormat};

use crate::dedup::SeenLines;
use crate::error::ExtractError;
use crate::filter::RelevanceFilter;
use crate::format::write_event;
use crate::parser::EventParser;

/// Totals for a finished run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub events_emitted: u64,
}

/// Per-run extraction state: filter, matchers and the seen-lines set.
///
/// Create one per run. Lines are processed sequentially in arrival order.
pub struct EventExtractor {
    filter: RelevanceFilter,
    parser: EventParser,
    seen: SeenLines,
}

impl EventExtractor {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            filter: RelevanceFilter::new(),
            parser: EventParser::new()?,
            seen: SeenLines::new(),
        })
    }

    /// Extract an event from one raw line.
    ///
    /// Returns `None` for duplicates of an already extracted line, for
    /// irrelevant lines and for lines no matcher accepts. Only lines that
    /// produce an event are remembered.
    pub fn extract(&mut self, line: &str) -> Option<LogEvent> {
        if self.seen.contains(line) {
            trace!("skipping duplicate line");
            return None;
        }

        if !self.filter.is_relevant(line) {
            trace!("skipping irrelevant line");
            return None;
        }

        let Some(event) = self.parser.parse(line) else {
            trace!("no event pattern matched");
            return None;
        };

        self.seen.insert(line);
        Some(event)
    }

    /// Read lines until end of input, writing one record per new event
    pub fn run<R, W>(
        &mut self,
        mut reader: R,
        writer: &mut W,
        format: OutputFormat,
    ) -> Result<RunSummary, ExtractError>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            summary.lines_read += 1;

            let line = String::from_utf8_lossy(&buf);
            if let Some(event) = self.extract(&line) {
                write_event(writer, &event, format)?;
                summary.events_emitted += 1;
            }
        }

        writer.flush()?;

        debug!(
            lines_read = summary.lines_read,
            events_emitted = summary.events_emitted,
            "end of input"
        );

        Ok(summary)
    }

    /// Lines extracted so far in this run
    #[cfg(test)]
    pub(crate) fn seen(&self) -> &SeenLines {
        &self.seen
    }
}
