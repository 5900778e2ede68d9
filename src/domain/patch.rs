// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use chrono::{DateTime, FixedOffset};

use crate::domain::{CommitMessage, FileChange};

/// Everything the changelog validator needs from one patch file.
///
/// Built once per input, consumed immediately, discarded. `author` and
/// `date` stay `None` when the email lacks the corresponding header;
/// whether that matters is the validator's call, not ours.
#[derive(Debug, Clone)]
pub struct ExtractedPatch {
    pub author: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub message: CommitMessage,
    pub changes: Vec<FileChange>,
}
