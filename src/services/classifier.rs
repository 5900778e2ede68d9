// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use tracing::{debug, warn};

use crate::domain::{ChangeKind, FileChange};
use crate::services::diff::{DiffEntry, decode_path};

/// Turns raw diff entries into the ordered file-change list the validator
/// consumes. Rename handling is fixed at construction and branched on per
/// entry.
pub struct ChangeClassifier {
    rename_detection: bool,
}

impl ChangeClassifier {
    pub fn new(rename_detection: bool) -> Self {
        if !rename_detection {
            debug!("rename detection disabled, renames will classify as modifications");
        }
        Self { rename_detection }
    }

    /// Classify every entry, preserving diff order. A rename counts as two
    /// operations: the old path is deleted and the new path is added.
    pub fn classify(&self, entries: &[DiffEntry]) -> Vec<FileChange> {
        let mut changes = Vec::with_capacity(entries.len());

        for entry in entries {
            let source = decode_path(&entry.source);
            let source = strip_vcs_prefix(&source).to_string();
            let target = decode_path(&entry.target);
            let target = strip_vcs_prefix(&target).to_string();

            let kind = if entry.is_added {
                ChangeKind::Added
            } else if entry.is_removed {
                ChangeKind::Deleted
            } else if entry.is_rename {
                if self.rename_detection {
                    changes.push(FileChange::new(source.clone(), ChangeKind::Deleted));
                    ChangeKind::Added
                } else {
                    warn!(
                        source = %source,
                        target = %target,
                        "rename metadata ignored (rename detection disabled)"
                    );
                    ChangeKind::Modified
                }
            } else {
                ChangeKind::Modified
            };

            let path = if kind == ChangeKind::Deleted {
                source
            } else {
                target
            };
            changes.push(FileChange::new(path, kind));
        }

        changes
    }
}

fn strip_vcs_prefix(path: &str) -> &str {
    path.strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path)
}
