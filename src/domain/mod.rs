// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod change;
mod message;
mod patch;

pub use change::*;
pub use message::*;
pub use patch::*;
