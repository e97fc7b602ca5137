use crate::error::{ContribError, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL_CONDENSED, UTF8_FULL_CONDENSED};
use comfy_table::{Color, Table};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Grouping column (year).
    pub accent: Color,
    pub bar: Color,
    pub marker: Color,
}

impl Theme {
    pub const DARK: Theme = Theme {
        accent: Color::Cyan,
        bar: Color::Green,
        marker: Color::Magenta,
    };

    pub const LIGHT: Theme = Theme {
        accent: Color::DarkBlue,
        bar: Color::DarkGreen,
        marker: Color::DarkMagenta,
    };
}

impl FromStr for Theme {
    type Err = ContribError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::DARK),
            "light" => Ok(Theme::LIGHT),
            other => Err(ContribError::Config(format!(
                "Unknown theme: {other} (valid: dark, light)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    Unicode,
    Ascii,
}

impl TableStyle {
    pub fn apply(self, table: &mut Table) {
        match self {
            TableStyle::Unicode => {
                table
                    .load_preset(UTF8_FULL_CONDENSED)
                    .apply_modifier(UTF8_ROUND_CORNERS);
            }
            TableStyle::Ascii => {
                table.load_preset(ASCII_FULL_CONDENSED);
            }
        }
    }
}

impl FromStr for TableStyle {
    type Err = ContribError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "unicode" => Ok(TableStyle::Unicode),
            "ascii" => Ok(TableStyle::Ascii),
            other => Err(ContribError::Config(format!(
                "Unknown style: {other} (valid: unicode, ascii)"
            ))),
        }
    }
}
