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

//! Countdown clock with the one-time Jaza pause.
//!
//! The clock itself only counts; arming and cancelling the one second tick
//! is the controller's job.

use crate::model::ScoreBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockPhase {
    Stopped,
    Running,
    JazaPaused,
    Finished,
}

/// What a single tick did to the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running, the next tick should be armed.
    Continue,
    /// Halfway with no score on the board; the clock is now paused.
    JazaPause,
    /// Remaining time reached zero and the clock stopped.
    TimeUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    /// Seconds left.
    pub remaining: u32,
    /// Configured bout length in seconds.
    pub total: u32,
    pub running: bool,
    pub jaza_active: bool,
    /// Set once the Jaza pause has fired; only a full match reset clears it.
    pub jaza_consumed: bool,
}

impl ClockState {
    pub fn new(total: u32) -> Self {
        Self {
            remaining: total,
            total,
            running: false,
            jaza_active: false,
            jaza_consumed: false,
        }
    }

    pub fn phase(&self) -> ClockPhase {
        if self.jaza_active {
            ClockPhase::JazaPaused
        } else if self.running {
            ClockPhase::Running
        } else if self.remaining == 0 {
            ClockPhase::Finished
        } else {
            ClockPhase::Stopped
        }
    }

    /// Whether the halfway pause should fire now.
    pub fn jaza_due(&self, board: &ScoreBoard) -> bool {
        !self.jaza_consumed
            && !self.jaza_active
            && self.running
            && u64::from(self.remaining) * 2 <= u64::from(self.total)
            && board.is_all_zero()
    }

    pub(crate) fn can_toggle(&self) -> bool {
        !self.jaza_active && (self.running || self.remaining > 0)
    }

    /// Counts down one second, then checks for time up and the Jaza pause.
    pub(crate) fn tick(&mut self, board: &ScoreBoard) -> TickOutcome {
        self.remaining = self.remaining.saturating_sub(1);

        if self.remaining == 0 {
            self.running = false;
            return TickOutcome::TimeUp;
        }

        if self.jaza_due(board) {
            self.running = false;
            self.jaza_active = true;
            self.jaza_consumed = true;
            return TickOutcome::JazaPause;
        }

        TickOutcome::Continue
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
        self.jaza_active = false;
    }

    pub(crate) fn rewind(&mut self) {
        self.stop();
        self.remaining = self.total;
    }
}
