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

use std::time::Duration;

use crate::model::Side;

/// Reason strings shown alongside a result.
pub mod reasons {
    pub const G_PENALTY: &str = "G PENALTY";
    pub const Y_PENALTIES: &str = "Y PENALTIES";
    pub const POINT_ADVANTAGE: &str = "POINT ADVANTAGE";
    pub const LAST_Y_SCORE: &str = "Last \"Y\" score";
    pub const LAST_C_SCORE: &str = "Last \"C\" score";
    pub const TIME_OUT: &str = "Time out";
    pub const TIE: &str = "TIE";
    pub const HALOL: &str = "HALOL";
}

/// A winner chosen by one of the automatic rules, not yet committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub winner: Side,
    pub reason: String,
}

impl Decision {
    pub fn new(winner: Side, reason: impl Into<String>) -> Self {
        Self {
            winner,
            reason: reason.into(),
        }
    }
}

/// A decision sitting in its override window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDecision {
    pub winner: Side,
    pub reason: String,
    /// Virtual match time at which the window opened.
    pub armed_at: Duration,
}

impl PendingDecision {
    pub(crate) fn is_same(&self, decision: &Decision) -> bool {
        self.winner == decision.winner && self.reason == decision.reason
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Side),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub verdict: Verdict,
    pub reason: String,
}

impl MatchResult {
    pub fn winner(side: Side, reason: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Winner(side),
            reason: reason.into(),
        }
    }

    pub fn tie() -> Self {
        Self {
            verdict: Verdict::Tie,
            reason: reasons::TIE.to_string(),
        }
    }

    pub fn is_tie(&self) -> bool {
        self.verdict == Verdict::Tie
    }
}
