use std::collections::HashSet;

/// Raw lines that already produced an event during the current run.
///
/// Lines are stored verbatim, trailing newline included, so two lines that
/// differ only in whitespace are tracked separately. The set only grows;
/// drop it at the end of the run.
#[derive(Clone, Debug, Default)]
pub struct SeenLines {
    lines: HashSet<String>,
}

impl SeenLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether this exact line was already extracted
    pub fn contains(&self, line: &str) -> bool {
        self.lines.contains(line)
    }

    /// Record a line; returns false if it was already present
    pub fn insert(&mut self, line: &str) -> bool {
        if self.lines.contains(line) {
            return false;
        }
        self.lines.insert(line.to_string())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
