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

//! Unicode symbols for the TUI.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

// Clock state (Unicode media controls)
pub(crate) const ICON_RUNNING: &str = "\u{25B6}";
pub(crate) const ICON_PAUSED: &str = "\u{23F8}";
pub(crate) const ICON_STOPPED: &str = "\u{23F9}";

// Decision waiting out its override window
pub(crate) const ICON_HOURGLASS: &str = "\u{231B}";

// Timeouts taken and left
pub(crate) const ICON_TIMEOUT_USED: &str = "\u{25CF}";
pub(crate) const ICON_TIMEOUT_LEFT: &str = "\u{25CB}";
