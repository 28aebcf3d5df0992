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

use std::time::Instant;

use kurash_board::Intent;
use tracing::warn;

use crate::App;

pub(super) fn handle_intent(app: &mut App, intent: Intent) {
    app.message = None;
    app.controller.handle(intent);
}

pub(super) fn handle_tick(app: &mut App) {
    let now = Instant::now();
    let elapsed = now.duration_since(app.last_tick);
    app.last_tick = now;

    app.controller.advance(elapsed);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Command failed");
    app.message = Some(message);
}
