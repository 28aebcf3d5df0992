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

//! Domain models and core data structures.
//!
//! This module defines the central entities of a bout: the two competitors,
//! the five score buckets each of them carries, timeout counters and the
//! decisions and results produced by adjudication.

mod decision;
mod score;
mod timeouts;

pub use decision::{Decision, MatchResult, PendingDecision, Verdict, reasons};
pub use score::{Buckets, MAX_SCORE, ScoreBoard, ScoreLabel};
pub use timeouts::{MAX_TIMEOUTS, TimeoutState};

use std::{fmt, str::FromStr};

use crate::error::MatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Blue,
    Green,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Blue, Side::Green];

    pub fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Green,
            Side::Green => Side::Blue,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Blue => 0,
            Side::Green => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Blue => f.write_str("BLUE"),
            Side::Green => f.write_str("GREEN"),
        }
    }
}

impl FromStr for Side {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "blue" => Ok(Side::Blue),
            "g" | "green" => Ok(Side::Green),
            _ => Err(MatchError::UnknownSide(s.to_string())),
        }
    }
}
