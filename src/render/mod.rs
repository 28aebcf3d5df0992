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

mod commander;
mod icons;
mod scoreboard;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use kurash_board::Side;

use crate::{
    App,
    render::{
        commander::draw_commander,
        scoreboard::{draw_competitor, draw_header},
        status::draw_status,
    },
};

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Outer layout: header, board, status ribbon, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Board layout: blue row above green row, centred vertically
    let board = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(outer[1]);

    draw_header(f, outer[0], app);
    draw_competitor(f, board[1], app, Side::Blue);
    draw_competitor(f, board[3], app, Side::Green);
    draw_status(f, outer[2], app);
    draw_commander(f, outer[3], app);
}
