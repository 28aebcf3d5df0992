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

//! Score mutation and penalty mirroring.
//!
//! [`apply_delta`] is a pure transformation: it takes the current board and
//! event log, and returns the new ones plus any decision the change should
//! arm. The controller decides whether the mutation is allowed at all.

use tracing::debug;

use crate::{
    event_log::EventLog,
    model::{Decision, ScoreBoard, ScoreLabel, Side, reasons},
};

/// A side holding this many `Y` loses the bout.
pub const Y_PENALTY_LIMIT: u8 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaOutcome {
    pub board: ScoreBoard,
    pub log: EventLog,
    /// Change that took effect on the targeted bucket after clamping.
    pub effective: i32,
    pub decision: Option<Decision>,
}

/// Applies `delta` to one bucket and every rule that follows from it.
///
/// Only a positive effective change is logged or mirrored:
///
/// * `G` arms a win for the opponent.
/// * `T` credits the opponent's `C` by the same amount.
/// * `D` credits the opponent's `Y` by the same amount, takes one `C` back
///   from the opponent and removes one of the side's own `T`. A `D` replaces
///   an earlier `T`, so the `C` that `T` gave away is revoked.
///
/// Afterwards any side at [`Y_PENALTY_LIMIT`] or more `Y` loses.
pub fn apply_delta(
    board: &ScoreBoard,
    log: &EventLog,
    side: Side,
    label: ScoreLabel,
    delta: i32,
) -> DeltaOutcome {
    let mut board = *board;
    let mut log = *log;

    let effective = board.adjust(side, label, delta);
    debug!(%side, %label, delta, effective, "Score bucket adjusted");

    if effective <= 0 {
        return DeltaOutcome {
            board,
            log,
            effective,
            decision: None,
        };
    }

    log.record(side, label);

    let opponent = side.opponent();
    match label {
        ScoreLabel::G => {
            return DeltaOutcome {
                board,
                log,
                effective,
                decision: Some(Decision::new(opponent, reasons::G_PENALTY)),
            };
        }
        ScoreLabel::T => credit(&mut board, &mut log, opponent, ScoreLabel::C, effective),
        ScoreLabel::D => {
            credit(&mut board, &mut log, opponent, ScoreLabel::Y, effective);
            board.adjust(opponent, ScoreLabel::C, -1);
            board.adjust(side, ScoreLabel::T, -1);
        }
        ScoreLabel::Y | ScoreLabel::C => {}
    }

    let decision = penalty_threshold(&board);

    DeltaOutcome {
        board,
        log,
        effective,
        decision,
    }
}

/// Checks whether either side has collected too many `Y`.
pub fn penalty_threshold(board: &ScoreBoard) -> Option<Decision> {
    Side::ALL
        .into_iter()
        .find(|&side| board.get(side, ScoreLabel::Y) >= Y_PENALTY_LIMIT)
        .map(|side| Decision::new(side.opponent(), reasons::Y_PENALTIES))
}

fn credit(board: &mut ScoreBoard, log: &mut EventLog, side: Side, label: ScoreLabel, amount: i32) {
    if board.adjust(side, label, amount) > 0 {
        log.record(side, label);
    }
}
