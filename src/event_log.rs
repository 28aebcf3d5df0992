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

//! Ordered record of scoring events.
//!
//! Only the most recent technique score and the most recent penalty are
//! kept; tie-breaks never look further back than that. Every recorded event
//! takes a fresh value from a monotonic sequence counter, which gives a
//! total order between the two slots independent of wall-clock time.

use crate::model::{ScoreLabel, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEvent {
    pub side: Side,
    pub label: ScoreLabel,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventLog {
    last_positive: Option<ScoreEvent>,
    last_penalty: Option<ScoreEvent>,
    seq: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_positive(&self) -> Option<&ScoreEvent> {
        self.last_positive.as_ref()
    }

    pub fn last_penalty(&self) -> Option<&ScoreEvent> {
        self.last_penalty.as_ref()
    }

    /// The more recent of the two retained events.
    pub fn latest(&self) -> Option<&ScoreEvent> {
        match (&self.last_positive, &self.last_penalty) {
            (Some(pos), Some(pen)) => Some(if pos.seq > pen.seq { pos } else { pen }),
            (Some(pos), None) => Some(pos),
            (None, Some(pen)) => Some(pen),
            (None, None) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_positive.is_none() && self.last_penalty.is_none()
    }

    /// Records an increment of `label` for `side`.
    ///
    /// `G` is not part of either event class and is ignored.
    pub(crate) fn record(&mut self, side: Side, label: ScoreLabel) -> Option<ScoreEvent> {
        let slot = if label.is_positive() {
            &mut self.last_positive
        } else if label.is_penalty() {
            &mut self.last_penalty
        } else {
            return None;
        };

        self.seq += 1;
        let event = ScoreEvent {
            side,
            label,
            seq: self.seq,
        };
        *slot = Some(event);

        Some(event)
    }

    #[cfg(test)]
    pub(crate) fn with_events(
        last_positive: Option<ScoreEvent>,
        last_penalty: Option<ScoreEvent>,
    ) -> Self {
        let seq = last_positive
            .iter()
            .chain(last_penalty.iter())
            .map(|e| e.seq)
            .max()
            .unwrap_or(0);

        Self {
            last_positive,
            last_penalty,
            seq,
        }
    }
}
