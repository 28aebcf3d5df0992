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

//! The ribbon between the board and the command line.
//!
//! Shows, in order of precedence: the final result, a decision waiting out
//! its override window, an open tie, the Jaza pause, and the last command
//! error.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use kurash_board::{Side, Verdict};

use crate::{App, render::icons::ICON_HOURGLASS, util};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let Some((text, fg, bg)) = status_line(app) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(app.theme.border_colour));

    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn status_line(app: &App) -> Option<(String, Color, Color)> {
    let controller = &app.controller;
    let theme = &app.theme;

    if let Some(result) = controller.result() {
        match result.verdict {
            Verdict::Winner(side) if controller.is_match_over() => {
                let (fg, bg) = match side {
                    Side::Blue => (theme.text_colour, theme.blue_colour),
                    Side::Green => (Color::Black, theme.green_winner_colour),
                };
                return Some((
                    format!("WINNER {}  ({})   :reset for a new bout", winner_name(app, side), result.reason),
                    fg,
                    bg,
                ));
            }
            Verdict::Tie => {
                return Some((
                    "TIME UP - TIE   :win blue   :win green   :reset".to_string(),
                    theme.label_colour,
                    theme.background_colour,
                ));
            }
            Verdict::Winner(_) => {}
        }
    }

    if let Some(pending) = controller.pending_decision() {
        let left = controller.decision_time_left().unwrap_or_default();
        return Some((
            format!(
                "{} {} by {} in {}   override: :win / :jaza",
                ICON_HOURGLASS,
                winner_name(app, pending.winner),
                pending.reason,
                util::format::format_countdown(left),
            ),
            theme.warning_colour,
            theme.background_colour,
        ));
    }

    if controller.clock().jaza_active {
        return Some((
            "JAZA   :jaza to resume".to_string(),
            theme.label_colour,
            theme.background_colour,
        ));
    }

    app.message
        .as_ref()
        .map(|message| (message.clone(), theme.warning_colour, theme.background_colour))
}

fn winner_name(app: &App, side: Side) -> String {
    let competitor = app.config.competitor(side);
    format!("{} {} ({})", side, competitor.name, competitor.display_code())
}
