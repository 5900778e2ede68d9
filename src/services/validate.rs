// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::ExtractedPatch;

/// Resolves auxiliary commit metadata for a validator, e.g. the target of
/// a revert reference. Extraction itself never needs one; pass `None`
/// where no resolver is wired up.
pub trait CommitInfoHook {
    fn info_for(&self, revision: &str) -> Option<ExtractedPatch>;
}

/// Outcome of validating one extracted patch.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The changelog-entry checker consuming extracted patches.
///
/// The entry grammar lives outside this crate; `AcceptAll` stands in
/// wherever no checker is plugged in.
pub trait Validator {
    fn validate(
        &self,
        patch: &ExtractedPatch,
        hook: Option<&dyn CommitInfoHook>,
    ) -> ValidationReport;
}

/// Default validator: accepts every structurally extracted patch.
pub struct AcceptAll;

impl Validator for AcceptAll {
    fn validate(
        &self,
        _patch: &ExtractedPatch,
        _hook: Option<&dyn CommitInfoHook>,
    ) -> ValidationReport {
        ValidationReport::default()
    }
}
