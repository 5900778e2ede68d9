// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Commit message recovered from a patch email.
///
/// Line 0 is the cleaned subject; the remaining lines are the email body
/// verbatim, starting with the blank line that separated it from the
/// headers. There is always at least the subject line, even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    lines: Vec<String>,
}

impl CommitMessage {
    pub fn new(subject: String, body: impl IntoIterator<Item = String>) -> Self {
        let mut lines = vec![subject];
        lines.extend(body);
        Self { lines }
    }

    pub fn subject(&self) -> &str {
        &self.lines[0]
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn body(&self) -> &[String] {
        &self.lines[1..]
    }
}
