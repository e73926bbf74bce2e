// Per-invocation output sink

use std::fmt;
use std::fmt::Write as _;

/// Line-oriented capture buffer handed to a snippet body.
///
/// Each invocation gets its own sink; text written through `fmt::Write` is
/// split on `\n`, and a trailing partial line is kept when the sink is
/// drained.
#[derive(Debug, Default)]
pub struct Output {
    lines: Vec<String>,
    pending: String,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line (embedded newlines produce several lines)
    pub fn line(&mut self, text: impl fmt::Display) {
        let _ = writeln!(self, "{}", text);
    }

    /// Completed lines so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(mut self) -> Vec<String> {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.lines.push(rest);
        }
        self.lines
    }
}

impl fmt::Write for Output {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.pending.push_str(s);
        while let Some(pos) = self.pending.find('\n') {
            let line: String = self.pending.drain(..=pos).collect();
            self.lines.push(line[..line.len() - 1].to_string());
        }
        Ok(())
    }
}
