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

//! # Kurash bout adjudication core.
//!
//! The rules that turn referee intents into a match result: score buckets
//! with penalty mirroring, a countdown clock with the one-time Jaza pause,
//! timeout forfeiture, and win determination with a short override window.
//!
//! Nothing in this library renders, plays sounds or reads keys. A host (see
//! the `kurash-board` binary) feeds discrete intents into a
//! [`MatchController`] and advances its virtual time, then reads the
//! resulting state back for display.

pub mod adjudicator;
pub mod clock;
pub mod config;
pub mod controller;
pub mod error;
pub mod event_log;
pub mod model;
pub mod scheduler;
pub mod scoring;

pub use controller::{Intent, MatchController, MatchState};
pub use error::MatchError;
pub use model::{MatchResult, ScoreBoard, ScoreLabel, Side, Verdict};
