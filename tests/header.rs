// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use patchlint::error::Error;
use patchlint::services::header::HeaderSplitter;
use proptest::prelude::*;

// ─── Subject marker stripping ────────────────────────────────────────────────

#[test]
fn series_marker_is_stripped() {
    let fields = HeaderSplitter::scan(&["Subject: [PATCH 3/7] Fix bug"]).unwrap();
    insta::assert_snapshot!(fields.subject, @"Fix bug");
}

#[test]
fn bare_marker_is_stripped() {
    let fields = HeaderSplitter::scan(&["Subject: [PATCH] Fix bug"]).unwrap();
    insta::assert_snapshot!(fields.subject, @"Fix bug");
}

#[test]
fn subject_without_marker_is_unchanged() {
    let fields = HeaderSplitter::scan(&["Subject: Fix bug"]).unwrap();
    insta::assert_snapshot!(fields.subject, @"Fix bug");
}

#[test]
fn marker_is_stripped_at_most_once() {
    let fields = HeaderSplitter::scan(&["Subject: [PATCH 1/2] [PATCH 1/2] nested"]).unwrap();
    insta::assert_snapshot!(fields.subject, @"[PATCH 1/2] nested");
}

// ─── Header folding ──────────────────────────────────────────────────────────

#[test]
fn folded_subject_concatenates_without_separator() {
    let fields = HeaderSplitter::scan(&["Subject: Fix the", "   thing"]).unwrap();
    assert_eq!(fields.subject, "Fix thething");
}

#[test]
fn tab_folded_subject_concatenates() {
    let fields = HeaderSplitter::scan(&["Subject: Fix the", "\tthing"]).unwrap();
    assert_eq!(fields.subject, "Fix thething");
}

#[test]
fn continuation_is_broken_by_intervening_line() {
    // Once a non-folded, non-header line appears, later indented lines
    // no longer extend the subject.
    let fields =
        HeaderSplitter::scan(&["Subject: Fix the", "Cc: someone@example.org", "   thing"])
            .unwrap();
    assert_eq!(fields.subject, "Fix the");
}

// ─── Scan boundaries ─────────────────────────────────────────────────────────

#[test]
fn blank_line_ends_the_header_scan() {
    let fields = HeaderSplitter::scan(&[
        "Subject: real subject",
        "",
        "Date: Tue, 4 Jun 2024 09:15:02 +0200",
    ])
    .unwrap();
    assert!(
        fields.date.is_none(),
        "Date after the blank line must not be parsed"
    );
    assert_eq!(fields.header_len, 1);
}

#[test]
fn unrecognized_headers_are_tolerated() {
    let fields = HeaderSplitter::scan(&[
        "To: patches@example.org",
        "From: Jane Hacker <jane@example.org>",
        "Subject: still found",
    ])
    .unwrap();
    assert_eq!(fields.subject, "still found");
    assert_eq!(
        fields.author.as_deref(),
        Some("Jane Hacker <jane@example.org>")
    );
}

#[test]
fn missing_headers_stay_absent() {
    let fields = HeaderSplitter::scan(&["Subject: no date, no author"]).unwrap();
    assert!(fields.date.is_none());
    assert!(fields.author.is_none());
    assert_eq!(fields.subject, "no date, no author");
}

#[test]
fn empty_input_yields_empty_subject() {
    let fields = HeaderSplitter::scan(&[]).unwrap();
    assert_eq!(fields.subject, "");
    assert_eq!(fields.header_len, 0);
}

// ─── Author normalization ────────────────────────────────────────────────────

#[test]
fn author_gets_single_space_before_address() {
    let fields = HeaderSplitter::scan(&["From: Jane Hacker<jane@example.org>"]).unwrap();
    assert_eq!(
        fields.author.as_deref(),
        Some("Jane Hacker <jane@example.org>")
    );
}

#[test]
fn author_without_address_passes_through() {
    let fields = HeaderSplitter::scan(&["From: jane@example.org"]).unwrap();
    assert_eq!(fields.author.as_deref(), Some("jane@example.org"));
}

// ─── Date parsing ────────────────────────────────────────────────────────────

#[test]
fn rfc2822_date_is_parsed() {
    let fields = HeaderSplitter::scan(&["Date: Tue, 4 Jun 2024 09:15:02 +0200"]).unwrap();
    let date = fields.date.expect("date should be present");
    assert_eq!(date.to_rfc3339(), "2024-06-04T09:15:02+02:00");
}

#[test]
fn malformed_date_is_an_error() {
    let result = HeaderSplitter::scan(&["Date: not a date at all"]);
    assert!(
        matches!(result, Err(Error::BadDate { .. })),
        "expected BadDate, got: {result:?}"
    );
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn series_marker_always_strips_cleanly(
        n in 1u32..1000,
        m in 1u32..1000,
        rest in "[a-zA-Z][a-zA-Z ]{0,30}",
    ) {
        let line = format!("Subject: [PATCH {n}/{m}] {rest}");
        let fields = HeaderSplitter::scan(&[line.as_str()]).unwrap();
        prop_assert_eq!(fields.subject, rest);
    }

    #[test]
    fn scan_never_panics(lines in proptest::collection::vec("[^\r\n]{0,40}", 0..12)) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let _ = HeaderSplitter::scan(&refs);
    }
}
