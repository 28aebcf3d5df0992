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

//! Application configuration.
//!
//! This module manages the application configuration file and derives the
//! one value the adjudication core needs from it: the bout length.

use serde::{Deserialize, Serialize};

use crate::{error::MatchError, model::Side};

const CONFIG_NAME: &str = "kurash-board";

const DEFAULT_TOTAL_SECS: u32 = 5 * 60;

/// Configuration consumed by [`crate::MatchController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    total_secs: u32,
}

impl MatchConfig {
    pub fn new(total_secs: u32) -> Result<Self, MatchError> {
        if total_secs == 0 {
            return Err(MatchError::ZeroDuration);
        }

        Ok(Self { total_secs })
    }

    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_secs: DEFAULT_TOTAL_SECS,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    Men,
    Women,
    Boys,
    Girls,
}

/// Bout length per division, as `MM:SS`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DurationPresets {
    pub men: String,
    pub women: String,
    pub boys: String,
    pub girls: String,
}

impl Default for DurationPresets {
    fn default() -> Self {
        Self {
            men: "05:00".to_string(),
            women: "04:00".to_string(),
            boys: "05:00".to_string(),
            girls: "04:00".to_string(),
        }
    }
}

impl DurationPresets {
    pub fn for_division(&self, division: Division) -> &str {
        match division {
            Division::Men => &self.men,
            Division::Women => &self.women,
            Division::Boys => &self.boys,
            Division::Girls => &self.girls,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    pub name: String,
    /// IOC country code.
    pub code: String,
}

impl Competitor {
    /// Upper-cased, at most three characters.
    pub fn display_code(&self) -> String {
        self.code.trim().chars().take(3).collect::<String>().to_uppercase()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub division: Division,
    pub durations: DurationPresets,
    pub event_title: String,
    pub weight: String,
    pub blue: Competitor,
    pub green: Competitor,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            division: Division::Men,
            durations: DurationPresets::default(),
            event_title: "G-1 / No.48   Final".to_string(),
            weight: "-81Kg".to_string(),
            blue: Competitor {
                name: "OMIROV DAYANCH".to_string(),
                code: "TKM".to_string(),
            },
            green: Competitor {
                name: "TOJIEV ARSLONBEK".to_string(),
                code: "UZB".to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn match_config(&self) -> Result<MatchConfig, MatchError> {
        let total_secs = parse_mmss(self.durations.for_division(self.division))?;
        MatchConfig::new(total_secs)
    }

    pub fn competitor(&self, side: Side) -> &Competitor {
        match side {
            Side::Blue => &self.blue,
            Side::Green => &self.green,
        }
    }
}

/// Parses `MM:SS` into seconds. Each field is clamped to `0..=59`.
pub fn parse_mmss(value: &str) -> Result<u32, MatchError> {
    let invalid = || MatchError::InvalidDuration(value.to_string());

    let (mm, ss) = value.trim().split_once(':').ok_or_else(invalid)?;
    let mm: u32 = mm.trim().parse().map_err(|_| invalid())?;
    let ss: u32 = ss.trim().parse().map_err(|_| invalid())?;

    Ok(mm.min(59) * 60 + ss.min(59))
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
