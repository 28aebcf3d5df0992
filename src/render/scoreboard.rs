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

//! The header line and the two competitor rows.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use kurash_board::{ScoreLabel, Side, clock::ClockPhase, model::MAX_TIMEOUTS};

use crate::{
    App,
    render::icons::{ICON_PAUSED, ICON_RUNNING, ICON_STOPPED, ICON_TIMEOUT_LEFT, ICON_TIMEOUT_USED},
    util,
};

pub(crate) fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(inner_area);

    let bold = Style::default().add_modifier(Modifier::BOLD);

    f.render_widget(
        Paragraph::new(app.config.event_title.as_str())
            .style(bold.fg(app.theme.text_colour))
            .alignment(Alignment::Left),
        chunks[0],
    );

    let clock = app.controller.clock();
    let icon = match clock.phase() {
        ClockPhase::Running => ICON_RUNNING,
        ClockPhase::Stopped | ClockPhase::JazaPaused => ICON_PAUSED,
        ClockPhase::Finished => ICON_STOPPED,
    };

    let clock_line = Line::from(vec![
        Span::styled(format!("{} ", icon), bold).fg(app.theme.text_colour),
        Span::styled(util::format::format_clock(clock.remaining), bold).fg(app.theme.clock_colour),
    ]);
    f.render_widget(Paragraph::new(clock_line).alignment(Alignment::Center), chunks[1]);

    f.render_widget(
        Paragraph::new(format!("{:?}   {}", app.config.division, app.config.weight))
            .style(bold.fg(app.theme.text_colour))
            .alignment(Alignment::Right),
        chunks[2],
    );
}

pub(crate) fn draw_competitor(f: &mut Frame, area: Rect, app: &App, side: Side) {
    let side_colour = side_colour(app, side);

    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(side_colour));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(28)];
    constraints.extend(ScoreLabel::ALL.iter().map(|_| Constraint::Length(8)));
    constraints.push(Constraint::Length(14));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner_area);

    draw_identity(f, chunks[0], app, side, side_colour);

    let buckets = app.controller.scoreboard().buckets(side);
    for label in ScoreLabel::ALL {
        draw_bucket(f, chunks[1 + label.index()], app, label, buckets[label.index()]);
    }

    draw_timeouts(f, chunks[1 + ScoreLabel::ALL.len()], app, side);
}

fn draw_identity(f: &mut Frame, area: Rect, app: &App, side: Side, side_colour: Color) {
    let competitor = app.config.competitor(side);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", competitor.name), bold))
            .fg(app.theme.text_colour)
            .bg(side_colour),
        Line::from(Span::styled(format!(" {}", competitor.display_code()), bold))
            .fg(app.theme.text_colour),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_bucket(f: &mut Frame, area: Rect, app: &App, label: ScoreLabel, value: u8) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_colour))
        .style(Style::default().bg(app.theme.cell_colour));

    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default()
                .fg(app.theme.text_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            label.as_str(),
            Style::default()
                .fg(app.theme.label_colour)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn draw_timeouts(f: &mut Frame, area: Rect, app: &App, side: Side) {
    let used = app.controller.timeouts().count(side);
    let marks: String = (0..MAX_TIMEOUTS)
        .map(|i| if i < used { ICON_TIMEOUT_USED } else { ICON_TIMEOUT_LEFT })
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(" TIMEOUT", Style::default().fg(app.theme.label_colour))),
        Line::from(format!(" {}", marks)).fg(app.theme.text_colour),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

fn side_colour(app: &App, side: Side) -> Color {
    match side {
        Side::Blue => app.theme.blue_colour,
        Side::Green => app.theme.green_colour,
    }
}
