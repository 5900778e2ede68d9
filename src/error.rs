// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("patch contains no parsed lines")]
    #[diagnostic(
        code(patchlint::diff::no_parsed_lines),
        help("The diff body has no recognizable file entries. Is this a 'git format-patch' file?")
    )]
    NoParsedLines,

    #[error("Cannot parse date '{value}'")]
    #[diagnostic(
        code(patchlint::header::bad_date),
        help("Date: headers must be RFC 2822 (the `git format-patch` default) or RFC 3339")
    )]
    BadDate { value: String },

    #[error("No files to process")]
    #[diagnostic(
        code(patchlint::driver::no_input),
        help("Pass patch files, use '-' for stdin, or populate the patches directory")
    )]
    NoFilesToProcess,

    #[error("{failed} of {total} patches failed")]
    #[diagnostic(code(patchlint::driver::checks_failed))]
    ChecksFailed { failed: usize, total: usize },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(patchlint::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
