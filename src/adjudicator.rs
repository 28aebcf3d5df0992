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

//! Win determination when the clock runs out.

use crate::{
    event_log::EventLog,
    model::{Decision, ScoreBoard, ScoreLabel, Side, reasons},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adjudication {
    Decided(Decision),
    /// Equal points and nothing logged to break the tie.
    Tie,
}

/// Decides the bout from the board, falling back to the last logged event.
pub fn adjudicate(board: &ScoreBoard, log: &EventLog) -> Adjudication {
    point_advantage(board)
        .or_else(|| last_event_tie_break(log))
        .map_or(Adjudication::Tie, Adjudication::Decided)
}

/// Compares `(Y, C)` per side; a strictly greater pair wins.
pub fn point_advantage(board: &ScoreBoard) -> Option<Decision> {
    let blue = board.point_pair(Side::Blue);
    let green = board.point_pair(Side::Green);

    let winner = if blue > green {
        Side::Blue
    } else if green > blue {
        Side::Green
    } else {
        return None;
    };

    Some(Decision::new(winner, reasons::POINT_ADVANTAGE))
}

/// The most recent of the last positive and last penalty event governs.
///
/// A penalty counts for the opponent, with the reason naming the score it
/// mirrored into (`D` into `Y`, `T` into `C`).
pub fn last_event_tie_break(log: &EventLog) -> Option<Decision> {
    let event = log.latest()?;

    let decision = match event.label {
        ScoreLabel::Y => Decision::new(event.side, reasons::LAST_Y_SCORE),
        ScoreLabel::C => Decision::new(event.side, reasons::LAST_C_SCORE),
        ScoreLabel::D => Decision::new(event.side.opponent(), reasons::LAST_Y_SCORE),
        ScoreLabel::T => Decision::new(event.side.opponent(), reasons::LAST_C_SCORE),
        ScoreLabel::G => return None,
    };

    Some(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::ScoreEvent;

    fn board_with(blue: (u8, u8), green: (u8, u8)) -> ScoreBoard {
        let mut board = ScoreBoard::new();
        board.adjust(Side::Blue, ScoreLabel::Y, i32::from(blue.0));
        board.adjust(Side::Blue, ScoreLabel::C, i32::from(blue.1));
        board.adjust(Side::Green, ScoreLabel::Y, i32::from(green.0));
        board.adjust(Side::Green, ScoreLabel::C, i32::from(green.1));
        board
    }

    fn event(side: Side, label: ScoreLabel, seq: u64) -> Option<ScoreEvent> {
        Some(ScoreEvent { side, label, seq })
    }

    #[test]
    fn y_outranks_any_number_of_c() {
        let decision = point_advantage(&board_with((1, 0), (0, 99)));
        assert_eq!(decision, Some(Decision::new(Side::Blue, reasons::POINT_ADVANTAGE)));
    }

    #[test]
    fn c_breaks_equal_y() {
        let decision = point_advantage(&board_with((1, 1), (1, 2)));
        assert_eq!(decision, Some(Decision::new(Side::Green, reasons::POINT_ADVANTAGE)));
    }

    #[test]
    fn equal_pairs_have_no_advantage() {
        assert_eq!(point_advantage(&board_with((1, 3), (1, 3))), None);
    }

    #[test]
    fn more_recent_penalty_governs() {
        let log = EventLog::with_events(
            event(Side::Blue, ScoreLabel::Y, 5),
            event(Side::Green, ScoreLabel::T, 7),
        );

        assert_eq!(
            last_event_tie_break(&log),
            Some(Decision::new(Side::Blue, reasons::LAST_C_SCORE))
        );
    }

    #[test]
    fn more_recent_positive_governs() {
        let log = EventLog::with_events(
            event(Side::Green, ScoreLabel::C, 9),
            event(Side::Blue, ScoreLabel::D, 3),
        );

        assert_eq!(
            last_event_tie_break(&log),
            Some(Decision::new(Side::Green, reasons::LAST_C_SCORE))
        );
    }

    #[test]
    fn d_penalty_counts_as_opponent_y() {
        let log = EventLog::with_events(None, event(Side::Green, ScoreLabel::D, 2));

        assert_eq!(
            last_event_tie_break(&log),
            Some(Decision::new(Side::Blue, reasons::LAST_Y_SCORE))
        );
    }

    #[test]
    fn tie_without_events() {
        assert_eq!(adjudicate(&board_with((0, 0), (0, 0)), &EventLog::new()), Adjudication::Tie);
    }

    #[test]
    fn points_before_tie_break() {
        let log = EventLog::with_events(event(Side::Green, ScoreLabel::Y, 4), None);

        assert_eq!(
            adjudicate(&board_with((1, 0), (0, 5)), &log),
            Adjudication::Decided(Decision::new(Side::Blue, reasons::POINT_ADVANTAGE))
        );
    }
}
