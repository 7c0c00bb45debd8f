//! Line cursor over the input text.

/// Ordered lines of the input with a movable read position.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Split `text` into lines. Both `\n` and `\r\n` endings are accepted.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Zero-based index of the next line to read.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 1-based line number of the next line to read.
    pub fn line_number(&self) -> usize {
        self.pos + 1
    }

    /// Number of unread lines.
    pub fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    /// Check if every line has been read.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Check if only blank lines are left.
    pub fn rest_is_blank(&self) -> bool {
        self.lines[self.pos..].iter().all(|l| l.trim().is_empty())
    }

    /// Peek at the next line without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consume the next line, returning it with its 1-based line number.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some((self.pos, line))
    }

    /// Consume `count` lines, or `None` if fewer remain.
    pub fn take(&mut self, count: usize) -> Option<&[&'a str]> {
        if count > self.remaining() {
            return None;
        }
        let start = self.pos;
        self.pos += count;
        Some(&self.lines[start..self.pos])
    }

    /// Consume consecutive blank lines, returning how many were skipped.
    pub fn skip_blank(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|l| l.trim().is_empty()) {
            self.pos += 1;
        }
        let skipped = self.pos - start;
        if skipped > 0 {
            tracing::trace!(skipped, line = start + 1, "skipped blank lines");
        }
        skipped
    }
}
