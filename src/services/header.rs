// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;

use crate::error::{Error, Result};

pub const DATE_PREFIX: &str = "Date: ";
pub const FROM_PREFIX: &str = "From: ";
pub const SUBJECT_PREFIX: &str = "Subject: ";

/// Patch-series marker prepended by `git format-patch`, e.g. `[PATCH 2/5] `.
static SUBJECT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[PATCH( \d+/\d+)?\] ?").unwrap());

/// Header fields recovered from the email preamble of one patch.
#[derive(Debug)]
pub struct HeaderFields {
    pub author: Option<String>,
    pub date: Option<DateTime<FixedOffset>>,
    pub subject: String,
    /// Number of lines before the blank line terminating the header block.
    /// The commit-message body starts here.
    pub header_len: usize,
}

pub struct HeaderSplitter;

impl HeaderSplitter {
    /// Scan the pre-diff portion of a patch email.
    ///
    /// `lines` must already be truncated at the diff-stat marker. The scan
    /// ends at the first blank line; unrecognized headers (`To:`, `Cc:`,
    /// the mbox `From ` line) are skipped, but any such line permanently
    /// breaks subject continuation.
    pub fn scan(lines: &[&str]) -> Result<HeaderFields> {
        let mut date = None;
        let mut author = None;
        let mut subject = String::new();
        let mut continuing_subject = false;
        let mut header_len = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            if let Some(rest) = line.strip_prefix(DATE_PREFIX) {
                date = Some(parse_date(rest)?);
            } else if let Some(rest) = line.strip_prefix(FROM_PREFIX) {
                author = normalize_author(rest);
            } else if let Some(rest) = line.strip_prefix(SUBJECT_PREFIX) {
                subject = rest.to_string();
                continuing_subject = true;
            } else if continuing_subject && (line.starts_with(' ') || line.starts_with('\t')) {
                // RFC-822 folding: the continuation joins with no separator
                subject.push_str(line.trim_start());
            } else if line.is_empty() {
                header_len = idx;
                break;
            } else {
                continuing_subject = false;
            }
        }

        if !subject.is_empty() {
            subject = SUBJECT_MARKER.replace(&subject, "").into_owned();
        }

        Ok(HeaderFields {
            author,
            date,
            subject,
            header_len,
        })
    }
}

/// Canonicalize a `From:` value to `Name <email>` with exactly one space
/// before the address. Values without an address pass through trimmed;
/// author recovery is best-effort and never fails.
fn normalize_author(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.split_once('<') {
        Some((name, addr)) => {
            let name = name.trim_end();
            if name.is_empty() {
                Some(format!("<{addr}"))
            } else {
                Some(format!("{name} <{addr}"))
            }
        }
        None => Some(raw.to_string()),
    }
}

fn parse_date(raw: &str) -> Result<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_err(|_| Error::BadDate {
            value: raw.to_string(),
        })
}
