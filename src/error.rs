// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use thiserror::Error;

/// Errors raised at the text and configuration boundaries of the core.
///
/// Rejected intents are never errors; they are silently ignored by the
/// [`crate::MatchController`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid score bucket index: {0}")]
    InvalidLabel(usize),

    #[error("Unknown score label: {0}")]
    UnknownLabel(String),

    #[error("Unknown side: {0}")]
    UnknownSide(String),

    #[error("Match duration must be greater than zero")]
    ZeroDuration,

    #[error("Invalid duration {0:?}, expected MM:SS")]
    InvalidDuration(String),
}
