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

//! Match orchestration.
//!
//! [`MatchController`] owns the whole [`MatchState`] and is the only thing
//! that mutates it. Hosts drive it two ways:
//!
//! 1. **Intents**: discrete referee actions such as scoring, starting the
//!    clock or declaring a winner (see [`Intent`] and the methods in
//!    `intents.rs`). Each one either applies completely or is ignored.
//! 2. **Time**: [`MatchController::advance`] moves the virtual timeline
//!    forward and fires whatever is due, namely the one second clock tick
//!    and the five second decision commit.
//!
//! Both scheduled tasks are held as cancellable handles, so pausing,
//! resetting or overriding never races with a stale callback.

mod intents;

#[cfg(test)]
mod tests;

use std::time::Duration;

use tracing::{debug, info};

use crate::{
    adjudicator::{self, Adjudication},
    clock::{ClockState, TickOutcome},
    config::MatchConfig,
    event_log::EventLog,
    model::{
        Decision, MatchResult, PendingDecision, ScoreBoard, ScoreLabel, Side, TimeoutState,
        Verdict,
    },
    scheduler::{Scheduler, TaskHandle},
};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long an automatic decision can be overridden before it commits.
pub const DECISION_WINDOW: Duration = Duration::from_secs(5);

/// Referee actions accepted by [`MatchController::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ApplyScoreDelta(Side, ScoreLabel, i32),
    ResetBucket(Side, ScoreLabel),
    Tick,
    ToggleClock,
    ResetClock,
    RegisterTimeout(Side),
    DeclareImmediateWinner(Side, String),
    ResumeFromJaza,
    ResetMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchTask {
    ClockTick,
    CommitDecision,
}

/// Everything a presentation layer needs to draw the bout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub board: ScoreBoard,
    pub log: EventLog,
    pub timeouts: TimeoutState,
    pub clock: ClockState,
    pub pending: Option<PendingDecision>,
    /// A tie result stays open; anything else is final once `match_over`.
    pub result: Option<MatchResult>,
    pub match_over: bool,
}

impl MatchState {
    fn new(config: &MatchConfig) -> Self {
        Self {
            board: ScoreBoard::new(),
            log: EventLog::new(),
            timeouts: TimeoutState::new(),
            clock: ClockState::new(config.total_secs()),
            pending: None,
            result: None,
            match_over: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchController {
    config: MatchConfig,
    state: MatchState,
    now: Duration,
    scheduler: Scheduler<MatchTask>,
    tick_task: Option<TaskHandle>,
    decision_task: Option<TaskHandle>,
}

impl MatchController {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            state: MatchState::new(&config),
            config,
            now: Duration::ZERO,
            scheduler: Scheduler::new(),
            tick_task: None,
            decision_task: None,
        }
    }

    /// Routes an [`Intent`] to the matching operation.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::ApplyScoreDelta(side, label, delta) => self.apply_score_delta(side, label, delta),
            Intent::ResetBucket(side, label) => self.reset_bucket(side, label),
            Intent::Tick => self.tick(),
            Intent::ToggleClock => self.toggle_clock(),
            Intent::ResetClock => self.reset_clock(),
            Intent::RegisterTimeout(side) => self.register_timeout(side),
            Intent::DeclareImmediateWinner(side, reason) => self.declare_immediate_winner(side, reason),
            Intent::ResumeFromJaza => self.resume_from_jaza(),
            Intent::ResetMatch => self.reset_match(),
        }
    }

    /// Moves virtual time forward by `elapsed`, firing due tasks in order.
    ///
    /// Each task runs at its own due instant, so a tick armed by a tick lands
    /// exactly one interval later regardless of how coarse `elapsed` is.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.now + elapsed;

        while let Some((handle, task)) = self.scheduler.pop_due(target) {
            self.now = handle.due();
            match task {
                MatchTask::ClockTick => {
                    self.tick_task = None;
                    self.run_tick();
                }
                MatchTask::CommitDecision => {
                    self.decision_task = None;
                    self.commit_pending();
                }
            }
        }

        self.now = target;
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.state.board
    }

    pub fn clock(&self) -> &ClockState {
        &self.state.clock
    }

    pub fn timeouts(&self) -> &TimeoutState {
        &self.state.timeouts
    }

    pub fn event_log(&self) -> &EventLog {
        &self.state.log
    }

    pub fn is_match_over(&self) -> bool {
        self.state.match_over
    }

    pub fn result(&self) -> Option<&MatchResult> {
        self.state.result.as_ref()
    }

    pub fn pending_decision(&self) -> Option<&PendingDecision> {
        self.state.pending.as_ref()
    }

    /// Time left in the override window of the pending decision.
    pub fn decision_time_left(&self) -> Option<Duration> {
        self.decision_task
            .map(|handle| handle.due().saturating_sub(self.now))
    }

    /// Virtual time since construction or the last full reset.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Intents that change the board or the clock are ignored once the match
    /// is over or while a decision waits out its window.
    fn accepting(&self) -> bool {
        !self.state.match_over && self.state.pending.is_none()
    }

    fn run_tick(&mut self) {
        let outcome = self.state.clock.tick(&self.state.board);
        debug!(remaining = self.state.clock.remaining, ?outcome, "Clock tick");

        match outcome {
            TickOutcome::Continue => self.arm_tick(),
            TickOutcome::JazaPause => {
                info!(remaining = self.state.clock.remaining, "Jaza pause");
            }
            TickOutcome::TimeUp => {
                info!("Time up");
                self.adjudicate_time_up();
            }
        }
    }

    fn adjudicate_time_up(&mut self) {
        if !self.accepting() {
            return;
        }

        match adjudicator::adjudicate(&self.state.board, &self.state.log) {
            Adjudication::Decided(decision) => self.schedule_decision(decision),
            Adjudication::Tie => {
                info!("Time up with no way to break the tie");
                self.state.result = Some(MatchResult::tie());
            }
        }
    }

    /// Arms `decision` behind the override window.
    ///
    /// Re-arming the decision that is already pending keeps its window.
    pub(crate) fn schedule_decision(&mut self, decision: Decision) {
        if self.state.match_over {
            return;
        }
        if self
            .state
            .pending
            .as_ref()
            .is_some_and(|pending| pending.is_same(&decision))
        {
            return;
        }

        self.stop_clock();
        self.cancel_pending();
        self.state.result = None;

        info!(winner = %decision.winner, reason = %decision.reason, "Decision armed");

        self.decision_task = Some(
            self.scheduler
                .schedule(self.now + DECISION_WINDOW, MatchTask::CommitDecision),
        );
        self.state.pending = Some(PendingDecision {
            winner: decision.winner,
            reason: decision.reason,
            armed_at: self.now,
        });
    }

    /// Ends the match at once, discarding any pending decision.
    pub(crate) fn finalize_now(&mut self, winner: Side, reason: String) {
        if self.state.match_over {
            return;
        }

        self.cancel_pending();
        self.conclude(winner, reason);
    }

    fn commit_pending(&mut self) {
        if let Some(pending) = self.state.pending.take() {
            self.conclude(pending.winner, pending.reason);
        }
    }

    fn conclude(&mut self, winner: Side, reason: String) {
        self.stop_clock();

        info!(%winner, %reason, "Match over");

        self.state.match_over = true;
        self.state.result = Some(MatchResult {
            verdict: Verdict::Winner(winner),
            reason,
        });
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.decision_task.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(pending) = self.state.pending.take() {
            info!(winner = %pending.winner, reason = %pending.reason, "Decision cancelled");
        }
    }

    fn arm_tick(&mut self) {
        self.cancel_tick();
        self.tick_task = Some(
            self.scheduler
                .schedule(self.now + TICK_INTERVAL, MatchTask::ClockTick),
        );
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick_task.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn stop_clock(&mut self) {
        self.cancel_tick();
        self.state.clock.stop();
    }
}
