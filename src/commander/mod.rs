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

//! Command-line input logic and state management.
//!
//! This module implements the command line used to drive the match. `:`
//! opens it, `Esc` closes it, and `Enter` parses the typed command into an
//! application event:
//!
//! | Command                    | Intent                         |
//! |----------------------------|--------------------------------|
//! | `s <side> <label> [delta]` | change a score bucket          |
//! | `z <side> <label>`         | clear a score bucket           |
//! | `p`, `start`               | start or pause the clock       |
//! | `rt`                       | reset the clock                |
//! | `to <side>`                | register a timeout             |
//! | `win <side> [reason...]`   | declare an immediate winner    |
//! | `jaza`                     | resume after the Jaza pause    |
//! | `reset`                    | reset the whole match          |
//! | `q`                        | quit                           |
//!
//! Sides are `blue`/`b` or `green`/`g`, labels are `G Y C D T`, and a delta
//! is `+`, `-` or a signed number (default `+1`).

use std::sync::mpsc::Sender;

use anyhow::{Context, Result, bail};
use crossterm::event::{Event, KeyCode};
use kurash_board::{Intent, model::reasons};
use tracing::warn;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the event was consumed by the command line.
    pub(crate) fn handle_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        warn!(error = %e, "Command dropped, event loop has gone away");
                    }
                }
                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(&event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let event = parse_command(buffer).unwrap_or_else(|e| AppEvent::Error(format!("{e:#}")));
        event_tx.send(event)?;

        Ok(())
    }
}

pub(crate) fn parse_command(buffer: &str) -> Result<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let intent = match parts.as_slice() {
        ["q"] => return Ok(AppEvent::ExitApplication),

        ["s", side, label] => Intent::ApplyScoreDelta(side.parse()?, label.parse()?, 1),
        ["s", side, label, delta] => {
            Intent::ApplyScoreDelta(side.parse()?, label.parse()?, parse_delta(delta)?)
        }
        ["z", side, label] => Intent::ResetBucket(side.parse()?, label.parse()?),

        ["p"] | ["start"] => Intent::ToggleClock,
        ["rt"] => Intent::ResetClock,

        ["to", side] => Intent::RegisterTimeout(side.parse()?),

        ["win", side] => Intent::DeclareImmediateWinner(side.parse()?, reasons::HALOL.to_string()),
        ["win", side, reason @ ..] => Intent::DeclareImmediateWinner(side.parse()?, reason.join(" ")),

        ["jaza"] => Intent::ResumeFromJaza,
        ["reset"] => Intent::ResetMatch,

        [] => bail!("Empty command"),
        [cmd, ..] => bail!("Unknown command: {cmd}"),
    };

    Ok(AppEvent::Intent(intent))
}

fn parse_delta(delta: &str) -> Result<i32> {
    match delta {
        "+" => Ok(1),
        "-" => Ok(-1),
        _ => delta
            .parse()
            .with_context(|| format!("Invalid score change: {delta}")),
    }
}

#[cfg(test)]
mod tests {
    use kurash_board::{ScoreLabel, Side};

    use super::*;

    fn intent(buffer: &str) -> Intent {
        match parse_command(buffer) {
            Ok(AppEvent::Intent(intent)) => intent,
            other => panic!("unexpected result for {buffer:?}: {other:?}"),
        }
    }

    #[test]
    fn parses_score_commands() {
        assert_eq!(intent("s blue y"), Intent::ApplyScoreDelta(Side::Blue, ScoreLabel::Y, 1));
        assert_eq!(intent("s g t -"), Intent::ApplyScoreDelta(Side::Green, ScoreLabel::T, -1));
        assert_eq!(intent("s g c 3"), Intent::ApplyScoreDelta(Side::Green, ScoreLabel::C, 3));
        assert_eq!(intent("z b d"), Intent::ResetBucket(Side::Blue, ScoreLabel::D));
    }

    #[test]
    fn parses_clock_and_match_commands() {
        assert_eq!(intent("p"), Intent::ToggleClock);
        assert_eq!(intent("start"), Intent::ToggleClock);
        assert_eq!(intent("rt"), Intent::ResetClock);
        assert_eq!(intent("to green"), Intent::RegisterTimeout(Side::Green));
        assert_eq!(intent("jaza"), Intent::ResumeFromJaza);
        assert_eq!(intent("reset"), Intent::ResetMatch);
        assert_eq!(parse_command("q").unwrap(), AppEvent::ExitApplication);
    }

    #[test]
    fn win_defaults_to_halol() {
        assert_eq!(
            intent("win blue"),
            Intent::DeclareImmediateWinner(Side::Blue, "HALOL".to_string())
        );
        assert_eq!(
            intent("win g medical stop"),
            Intent::DeclareImmediateWinner(Side::Green, "medical stop".to_string())
        );
    }

    #[test]
    fn enter_survives_a_closed_event_loop() {
        use crossterm::event::KeyEvent;

        let (tx, rx) = std::sync::mpsc::channel();
        drop(rx);

        let mut commander = Commander::new();
        for code in [KeyCode::Char(':'), KeyCode::Char('p'), KeyCode::Enter] {
            assert!(commander.handle_event(Event::Key(KeyEvent::from(code)), &tx));
        }

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
    }

    #[test]
    fn rejects_bad_commands() {
        assert!(parse_command("dance").is_err());
        assert!(parse_command("s red y").is_err());
        assert!(parse_command("s blue x").is_err());
        assert!(parse_command("s blue y many").is_err());
        assert!(parse_command("").is_err());
    }
}
