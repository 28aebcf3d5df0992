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

use crate::model::Side;

pub const MAX_TIMEOUTS: u8 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutState {
    counts: [u8; 2],
}

impl TimeoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, side: Side) -> u8 {
        self.counts[side.index()]
    }

    pub fn is_exhausted(&self, side: Side) -> bool {
        self.count(side) >= MAX_TIMEOUTS
    }

    /// Takes one timeout for `side`, returns `false` once none are left.
    pub(crate) fn take(&mut self, side: Side) -> bool {
        if self.is_exhausted(side) {
            return false;
        }
        self.counts[side.index()] += 1;

        true
    }
}
