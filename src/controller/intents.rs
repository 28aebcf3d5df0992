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

use tracing::{debug, info};

use crate::{
    controller::MatchController,
    model::{Decision, ScoreLabel, Side, reasons},
    scoring,
};

impl MatchController {
    /// Adds `delta` to one bucket and applies the mirroring rules.
    pub fn apply_score_delta(&mut self, side: Side, label: ScoreLabel, delta: i32) {
        if !self.accepting() {
            debug!(%side, %label, delta, "Score change rejected");
            return;
        }

        let outcome = scoring::apply_delta(&self.state.board, &self.state.log, side, label, delta);
        self.state.board = outcome.board;
        self.state.log = outcome.log;

        if let Some(decision) = outcome.decision {
            self.schedule_decision(decision);
        }
    }

    /// Clears one bucket. Goes through the regular delta path as a decrement,
    /// so nothing is mirrored or logged.
    pub fn reset_bucket(&mut self, side: Side, label: ScoreLabel) {
        let current = self.state.board.get(side, label);
        self.apply_score_delta(side, label, -i32::from(current));
    }

    /// Counts down one second.
    ///
    /// Hosts that keep their own one second timer call this instead of
    /// [`MatchController::advance`]; the controller's own tick is re-armed
    /// from here so the two never double count.
    pub fn tick(&mut self) {
        if !self.accepting() || !self.state.clock.running {
            return;
        }

        self.cancel_tick();
        self.run_tick();
    }

    /// Starts or pauses the countdown. Ignored while Jaza-paused or when no
    /// time is left.
    pub fn toggle_clock(&mut self) {
        if !self.accepting() || !self.state.clock.can_toggle() {
            return;
        }

        if self.state.clock.running {
            self.cancel_tick();
            self.state.clock.running = false;
            info!(remaining = self.state.clock.remaining, "Clock paused");
        } else {
            self.state.clock.running = true;
            self.arm_tick();
            info!(remaining = self.state.clock.remaining, "Clock started");
        }
    }

    /// Stops the clock and restores the configured duration.
    pub fn reset_clock(&mut self) {
        if !self.accepting() {
            return;
        }

        self.cancel_tick();
        self.state.clock.rewind();
        info!(total = self.state.clock.total, "Clock reset");
    }

    /// Takes a timeout for `side`. A request past the limit means the side
    /// did not come back, and the opponent is awarded the bout.
    pub fn register_timeout(&mut self, side: Side) {
        if self.state.match_over {
            return;
        }

        if self.state.timeouts.take(side) {
            info!(%side, count = self.state.timeouts.count(side), "Timeout");
        } else {
            self.schedule_decision(Decision::new(side.opponent(), reasons::TIME_OUT));
        }
    }

    /// Referee override: ends the match immediately for `side`.
    pub fn declare_immediate_winner(&mut self, side: Side, reason: impl Into<String>) {
        self.finalize_now(side, reason.into());
    }

    /// Ends the Jaza pause, or overrides a pending decision, and lets the
    /// clock run again.
    ///
    /// The clock starts even if it was paused when the decision was armed.
    pub fn resume_from_jaza(&mut self) {
        if self.state.match_over {
            return;
        }
        if !self.state.clock.jaza_active && self.state.pending.is_none() {
            return;
        }

        self.cancel_pending();
        self.state.clock.jaza_active = false;

        if self.state.clock.remaining > 0 {
            self.state.clock.running = true;
            self.arm_tick();
        }
        info!(remaining = self.state.clock.remaining, "Resumed");
    }

    /// Puts the match back to how it was constructed. Allowed in any state.
    pub fn reset_match(&mut self) {
        info!(total = self.config.total_secs(), "Match reset");
        *self = Self::new(self.config);
    }
}
