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

use std::{fmt, str::FromStr};

use crate::{error::MatchError, model::Side};

/// Upper bound of every score bucket.
pub const MAX_SCORE: u8 = 99;

/// The five per-side score buckets, in display order.
///
/// `G` is a disqualifying penalty, `Y` and `C` are technique scores (a single
/// `Y` outranks any number of `C`), `D` and `T` are penalty grades that credit
/// the opponent's `Y` and `C` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreLabel {
    G,
    Y,
    C,
    D,
    T,
}

impl ScoreLabel {
    pub const ALL: [ScoreLabel; 5] = [
        ScoreLabel::G,
        ScoreLabel::Y,
        ScoreLabel::C,
        ScoreLabel::D,
        ScoreLabel::T,
    ];

    pub fn index(self) -> usize {
        match self {
            ScoreLabel::G => 0,
            ScoreLabel::Y => 1,
            ScoreLabel::C => 2,
            ScoreLabel::D => 3,
            ScoreLabel::T => 4,
        }
    }

    /// Looks up a label by bucket index.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not one of the five bucket indices. An out of range
    /// index can only come from a broken caller, so it is not clamped.
    pub fn from_index(idx: usize) -> Self {
        match Self::try_from(idx) {
            Ok(label) => label,
            Err(e) => panic!("{e}"),
        }
    }

    /// Technique scores, tracked as the last positive event.
    pub fn is_positive(self) -> bool {
        matches!(self, ScoreLabel::Y | ScoreLabel::C)
    }

    /// Penalty grades that mirror into the opponent, tracked as the last
    /// penalty event.
    pub fn is_penalty(self) -> bool {
        matches!(self, ScoreLabel::D | ScoreLabel::T)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreLabel::G => "G",
            ScoreLabel::Y => "Y",
            ScoreLabel::C => "C",
            ScoreLabel::D => "D",
            ScoreLabel::T => "T",
        }
    }
}

impl TryFrom<usize> for ScoreLabel {
    type Error = MatchError;

    fn try_from(idx: usize) -> Result<Self, Self::Error> {
        ScoreLabel::ALL
            .get(idx)
            .copied()
            .ok_or(MatchError::InvalidLabel(idx))
    }
}

impl FromStr for ScoreLabel {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "G" => Ok(ScoreLabel::G),
            "Y" => Ok(ScoreLabel::Y),
            "C" => Ok(ScoreLabel::C),
            "D" => Ok(ScoreLabel::D),
            "T" => Ok(ScoreLabel::T),
            _ => Err(MatchError::UnknownLabel(s.to_string())),
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side's buckets, indexed by [`ScoreLabel::index`].
pub type Buckets = [u8; 5];

/// Score state for both competitors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    buckets: [Buckets; 2],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side, label: ScoreLabel) -> u8 {
        self.buckets[side.index()][label.index()]
    }

    pub fn buckets(&self, side: Side) -> &Buckets {
        &self.buckets[side.index()]
    }

    pub fn is_all_zero(&self) -> bool {
        self.buckets.iter().flatten().all(|&v| v == 0)
    }

    /// The `(Y, C)` pair used for point advantage. Tuples compare
    /// lexicographically, so `Y` dominates and `C` breaks ties.
    pub fn point_pair(&self, side: Side) -> (u8, u8) {
        (self.get(side, ScoreLabel::Y), self.get(side, ScoreLabel::C))
    }

    /// Adds `delta` to a bucket, clamped to `0..=MAX_SCORE`, and returns the
    /// change that actually took effect.
    pub(crate) fn adjust(&mut self, side: Side, label: ScoreLabel, delta: i32) -> i32 {
        let bucket = &mut self.buckets[side.index()][label.index()];
        let old = i32::from(*bucket);
        let new = old.saturating_add(delta).clamp(0, i32::from(MAX_SCORE));
        *bucket = new as u8;

        new - old
    }
}
