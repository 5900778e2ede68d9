// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{CommitMessage, ExtractedPatch};
use crate::error::{Error, Result};
use crate::services::classifier::ChangeClassifier;
use crate::services::diff::DiffParser;
use crate::services::header::HeaderSplitter;

/// The `---` line separating the commit message from the diff-stat and
/// diff body in `git format-patch` output.
pub const DIFF_STAT_MARKER: &str = "---";

/// One-stop extraction: patch text in, `ExtractedPatch` out.
///
/// A pure transform with no side effects. Each document is processed to
/// completion independently; nothing is shared between calls.
pub struct PatchExtractor {
    classifier: ChangeClassifier,
}

impl PatchExtractor {
    pub fn new(rename_detection: bool) -> Self {
        Self {
            classifier: ChangeClassifier::new(rename_detection && DiffParser::SUPPORTS_RENAMES),
        }
    }

    pub fn from_path(&self, path: &Path) -> Result<ExtractedPatch> {
        let text = fs::read_to_string(path)?;
        self.extract(&text)
    }

    /// Extract one patch document into the record the validator consumes.
    ///
    /// Header and subject recovery is best-effort (missing fields stay
    /// `None`); a diff body with no file entries aborts the extraction,
    /// and no partial record is produced.
    pub fn extract(&self, text: &str) -> Result<ExtractedPatch> {
        let lines: Vec<&str> = text.lines().collect();
        let boundary = lines
            .iter()
            .position(|line| *line == DIFF_STAT_MARKER)
            .unwrap_or(lines.len());
        let head = &lines[..boundary];

        let fields = HeaderSplitter::scan(head)?;

        let entries = DiffParser::parse(text);
        if entries.is_empty() {
            return Err(Error::NoParsedLines);
        }
        let changes = self.classifier.classify(&entries);

        // The commit message is the email subject, a blank line, and the
        // email body, still truncated at the diff-stat marker.
        let body = head[fields.header_len..].iter().map(|line| line.to_string());
        let message = CommitMessage::new(fields.subject, body);

        debug!(
            files = changes.len(),
            message_lines = message.lines().len(),
            "patch extracted"
        );

        Ok(ExtractedPatch {
            author: fields.author,
            date: fields.date,
            message,
            changes,
        })
    }
}
