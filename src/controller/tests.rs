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

use super::*;
use crate::{
    clock::ClockPhase,
    model::{MAX_SCORE, MAX_TIMEOUTS, reasons},
};

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

fn controller(total_secs: u32) -> MatchController {
    MatchController::new(MatchConfig::new(total_secs).unwrap())
}

fn pending(ctrl: &MatchController) -> Option<(Side, &str)> {
    ctrl.pending_decision()
        .map(|p| (p.winner, p.reason.as_str()))
}

#[test]
fn second_y_arms_decision_for_opponent() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::Y, 1);
    assert_eq!(pending(&ctrl), None);

    ctrl.apply_score_delta(Side::Blue, ScoreLabel::Y, 1);
    assert_eq!(pending(&ctrl), Some((Side::Green, reasons::Y_PENALTIES)));
    assert_eq!(ctrl.decision_time_left(), Some(DECISION_WINDOW));
    assert!(!ctrl.is_match_over());
}

#[test]
fn override_of_y_penalties_leaves_board_untouched() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::Y, 2);
    let board = *ctrl.scoreboard();

    ctrl.declare_immediate_winner(Side::Blue, reasons::HALOL);

    assert_eq!(ctrl.scoreboard(), &board);
    assert_eq!(ctrl.pending_decision(), None);
    assert_eq!(ctrl.decision_time_left(), None);
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Blue, reasons::HALOL)));
    assert!(ctrl.is_match_over());

    // The cancelled commit never fires.
    ctrl.advance(secs(10));
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Blue, reasons::HALOL)));
}

#[test]
fn g_penalty_commits_after_window() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Green, ScoreLabel::C, 3);
    ctrl.toggle_clock();
    ctrl.advance(secs(2));

    ctrl.apply_score_delta(Side::Green, ScoreLabel::G, 1);
    assert_eq!(pending(&ctrl), Some((Side::Blue, reasons::G_PENALTY)));
    assert_eq!(ctrl.clock().phase(), ClockPhase::Stopped);
    assert_eq!(ctrl.pending_decision().map(|p| p.armed_at), Some(secs(2)));

    ctrl.advance(secs(4));
    assert!(!ctrl.is_match_over());
    assert_eq!(ctrl.decision_time_left(), Some(secs(1)));

    ctrl.advance(secs(1));
    assert!(ctrl.is_match_over());
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Blue, reasons::G_PENALTY)));
    assert_eq!(ctrl.pending_decision(), None);
}

#[test]
fn scoring_is_rejected_while_pending_and_after_the_match() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::G, 1);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, 1);
    ctrl.toggle_clock();
    assert_eq!(ctrl.scoreboard().get(Side::Blue, ScoreLabel::C), 0);
    assert!(!ctrl.clock().running);

    ctrl.advance(DECISION_WINDOW);
    assert!(ctrl.is_match_over());

    ctrl.apply_score_delta(Side::Green, ScoreLabel::Y, 1);
    ctrl.reset_bucket(Side::Blue, ScoreLabel::G);
    ctrl.register_timeout(Side::Green);
    ctrl.resume_from_jaza();
    assert_eq!(ctrl.scoreboard().get(Side::Green, ScoreLabel::Y), 0);
    assert_eq!(ctrl.scoreboard().get(Side::Blue, ScoreLabel::G), 1);
    assert_eq!(ctrl.timeouts().count(Side::Green), 0);
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Green, reasons::G_PENALTY)));
}

#[test]
fn reset_bucket_does_not_mirror() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::T, 3);
    assert_eq!(ctrl.scoreboard().get(Side::Green, ScoreLabel::C), 3);

    ctrl.reset_bucket(Side::Blue, ScoreLabel::T);

    assert_eq!(ctrl.scoreboard().get(Side::Blue, ScoreLabel::T), 0);
    assert_eq!(ctrl.scoreboard().get(Side::Green, ScoreLabel::C), 3);
}

#[test]
fn huge_score_change_clamps_instead_of_overflowing() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, 5);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, i32::MAX);
    assert_eq!(ctrl.scoreboard().get(Side::Blue, ScoreLabel::C), MAX_SCORE);

    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, i32::MIN);
    assert_eq!(ctrl.scoreboard().get(Side::Blue, ScoreLabel::C), 0);
}

#[test]
fn clock_counts_down_with_coarse_steps() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, 1);
    ctrl.toggle_clock();

    ctrl.advance(Duration::from_millis(2500));
    assert_eq!(ctrl.clock().remaining, 298);

    ctrl.advance(Duration::from_millis(500));
    assert_eq!(ctrl.clock().remaining, 297);

    ctrl.toggle_clock();
    ctrl.advance(secs(30));
    assert_eq!(ctrl.clock().remaining, 297);
    assert_eq!(ctrl.clock().phase(), ClockPhase::Stopped);
}

#[test]
fn manual_tick_only_counts_while_running() {
    let mut ctrl = controller(60);
    ctrl.apply_score_delta(Side::Green, ScoreLabel::C, 1);
    ctrl.tick();
    assert_eq!(ctrl.clock().remaining, 60);

    ctrl.toggle_clock();
    ctrl.handle(Intent::Tick);
    ctrl.handle(Intent::Tick);
    assert_eq!(ctrl.clock().remaining, 58);

    // The manual ticks re-armed the scheduled one rather than adding to it.
    ctrl.advance(Duration::from_millis(999));
    assert_eq!(ctrl.clock().remaining, 58);
    ctrl.advance(Duration::from_millis(1));
    assert_eq!(ctrl.clock().remaining, 57);
}

#[test]
fn jaza_fires_exactly_once() {
    let mut ctrl = controller(300);
    ctrl.toggle_clock();

    ctrl.advance(secs(149));
    assert_eq!(ctrl.clock().remaining, 151);
    assert_eq!(ctrl.clock().phase(), ClockPhase::Running);

    ctrl.advance(secs(1));
    assert_eq!(ctrl.clock().remaining, 150);
    assert_eq!(ctrl.clock().phase(), ClockPhase::JazaPaused);
    assert!(ctrl.clock().jaza_consumed);

    // Paused clocks do not count, and cannot be toggled back on.
    ctrl.advance(secs(20));
    ctrl.toggle_clock();
    assert_eq!(ctrl.clock().remaining, 150);
    assert_eq!(ctrl.clock().phase(), ClockPhase::JazaPaused);

    ctrl.resume_from_jaza();
    assert_eq!(ctrl.clock().phase(), ClockPhase::Running);

    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, 1);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, -1);
    assert!(ctrl.scoreboard().is_all_zero());

    ctrl.advance(secs(10));
    assert_eq!(ctrl.clock().remaining, 140);
    assert_eq!(ctrl.clock().phase(), ClockPhase::Running);
}

#[test]
fn resume_is_ignored_without_pause_or_decision() {
    let mut ctrl = controller(300);
    ctrl.resume_from_jaza();
    assert_eq!(ctrl.clock().phase(), ClockPhase::Stopped);
}

#[test]
fn resume_overrides_a_pending_decision() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Green, ScoreLabel::G, 1);
    assert!(ctrl.pending_decision().is_some());

    ctrl.resume_from_jaza();

    assert_eq!(ctrl.pending_decision(), None);
    assert_eq!(ctrl.clock().phase(), ClockPhase::Running);
    ctrl.advance(secs(10));
    assert!(!ctrl.is_match_over());
}

#[test]
fn timeout_forfeiture() {
    let mut ctrl = controller(300);

    ctrl.register_timeout(Side::Blue);
    assert_eq!(ctrl.timeouts().count(Side::Blue), 1);
    ctrl.register_timeout(Side::Blue);
    assert_eq!(ctrl.timeouts().count(Side::Blue), MAX_TIMEOUTS);
    assert_eq!(ctrl.pending_decision(), None);

    ctrl.register_timeout(Side::Blue);
    assert_eq!(ctrl.timeouts().count(Side::Blue), MAX_TIMEOUTS);
    assert_eq!(pending(&ctrl), Some((Side::Green, reasons::TIME_OUT)));
    assert_eq!(ctrl.timeouts().count(Side::Green), 0);
}

#[test]
fn new_decision_replaces_pending_and_restarts_window() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::G, 1);
    ctrl.advance(secs(3));

    ctrl.schedule_decision(Decision::new(Side::Blue, reasons::TIME_OUT));
    assert_eq!(pending(&ctrl), Some((Side::Blue, reasons::TIME_OUT)));
    assert_eq!(ctrl.decision_time_left(), Some(DECISION_WINDOW));

    // The first decision would have committed here.
    ctrl.advance(secs(2));
    assert!(!ctrl.is_match_over());

    ctrl.advance(secs(3));
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Blue, reasons::TIME_OUT)));
}

#[test]
fn same_decision_keeps_its_window() {
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::G, 1);
    ctrl.advance(secs(3));

    ctrl.schedule_decision(Decision::new(Side::Green, reasons::G_PENALTY));

    assert_eq!(ctrl.decision_time_left(), Some(secs(2)));
}

#[test]
fn immediate_finalize_discards_pending() {
    let mut ctrl = controller(300);
    ctrl.register_timeout(Side::Green);
    ctrl.register_timeout(Side::Green);
    ctrl.register_timeout(Side::Green);
    assert_eq!(pending(&ctrl), Some((Side::Blue, reasons::TIME_OUT)));

    ctrl.handle(Intent::DeclareImmediateWinner(Side::Green, "HALOL".to_string()));

    assert!(ctrl.is_match_over());
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Green, "HALOL")));

    // A second declaration does not replace the result.
    ctrl.declare_immediate_winner(Side::Blue, "HALOL");
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Green, "HALOL")));
}

#[test]
fn point_advantage_at_time_up() {
    let mut ctrl = controller(10);
    ctrl.apply_score_delta(Side::Green, ScoreLabel::C, 4);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::Y, 1);
    ctrl.toggle_clock();

    ctrl.advance(secs(10));

    assert_eq!(ctrl.clock().remaining, 0);
    assert_eq!(ctrl.clock().phase(), ClockPhase::Finished);
    assert_eq!(pending(&ctrl), Some((Side::Blue, reasons::POINT_ADVANTAGE)));

    ctrl.advance(DECISION_WINDOW);
    assert_eq!(ctrl.result(), Some(&MatchResult::winner(Side::Blue, reasons::POINT_ADVANTAGE)));
}

#[test]
fn tie_break_at_time_up() {
    let mut ctrl = controller(10);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, 1);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::T, 1);
    assert_eq!(ctrl.scoreboard().point_pair(Side::Blue), (0, 1));
    assert_eq!(ctrl.scoreboard().point_pair(Side::Green), (0, 1));

    ctrl.toggle_clock();
    ctrl.advance(secs(10));

    // The T mirror into Green's C was the last event.
    assert_eq!(pending(&ctrl), Some((Side::Green, reasons::LAST_C_SCORE)));
}

#[test]
fn tie_without_events_stays_open() {
    let mut ctrl = controller(4);
    ctrl.toggle_clock();

    ctrl.advance(secs(2));
    assert_eq!(ctrl.clock().phase(), ClockPhase::JazaPaused);
    ctrl.resume_from_jaza();
    ctrl.advance(secs(2));

    assert_eq!(ctrl.clock().phase(), ClockPhase::Finished);
    assert_eq!(ctrl.result(), Some(&MatchResult::tie()));
    assert_eq!(ctrl.pending_decision(), None);
    assert!(!ctrl.is_match_over());

    ctrl.advance(secs(30));
    assert!(!ctrl.is_match_over());

    ctrl.declare_immediate_winner(Side::Green, reasons::HALOL);
    assert!(ctrl.is_match_over());
    assert_eq!(ctrl.result().map(|r| r.verdict), Some(Verdict::Winner(Side::Green)));
}

#[test]
fn finished_clock_cannot_restart() {
    let mut ctrl = controller(2);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::C, 1);
    ctrl.apply_score_delta(Side::Green, ScoreLabel::C, 1);
    ctrl.reset_bucket(Side::Blue, ScoreLabel::C);
    ctrl.reset_bucket(Side::Green, ScoreLabel::C);
    ctrl.apply_score_delta(Side::Green, ScoreLabel::C, 1);
    ctrl.toggle_clock();
    ctrl.advance(secs(2));
    ctrl.advance(DECISION_WINDOW);
    assert!(ctrl.is_match_over());

    ctrl.toggle_clock();
    ctrl.reset_clock();
    assert_eq!(ctrl.clock().remaining, 0);
}

#[test]
fn reset_clock_restores_duration() {
    let mut ctrl = controller(120);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::Y, 1);
    ctrl.toggle_clock();
    ctrl.advance(secs(45));

    ctrl.handle(Intent::ResetClock);

    assert_eq!(ctrl.clock().remaining, 120);
    assert_eq!(ctrl.clock().phase(), ClockPhase::Stopped);
    ctrl.advance(secs(5));
    assert_eq!(ctrl.clock().remaining, 120);
}

#[test]
fn reset_match_from_any_state() {
    let config = MatchConfig::new(300).unwrap();
    let fresh = MatchController::new(config);

    // Mid decision window.
    let mut ctrl = controller(300);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::D, 1);
    ctrl.register_timeout(Side::Green);
    ctrl.apply_score_delta(Side::Blue, ScoreLabel::G, 1);
    ctrl.reset_match();
    assert_eq!(ctrl, fresh);

    // After a final result.
    ctrl.declare_immediate_winner(Side::Green, reasons::HALOL);
    ctrl.reset_match();
    assert_eq!(ctrl, fresh);

    // Mid Jaza pause.
    ctrl.toggle_clock();
    ctrl.advance(secs(150));
    assert_eq!(ctrl.clock().phase(), ClockPhase::JazaPaused);
    ctrl.handle(Intent::ResetMatch);
    assert_eq!(ctrl, fresh);
    assert!(!ctrl.clock().jaza_consumed);
    assert!(ctrl.event_log().is_empty());
}
