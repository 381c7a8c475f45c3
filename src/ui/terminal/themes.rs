//! Theme system for terminal UI
//!
//! Three fixed color schemes, selected by the `theme` configuration key.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl ThemeVariant {
    pub const ALL: [ThemeVariant; 3] = [
        ThemeVariant::Dark,
        ThemeVariant::Light,
        ThemeVariant::HighContrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
            ThemeVariant::HighContrast => "high-contrast",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ThemeVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == normalized)
            .ok_or_else(|| {
                format!("Theme '{}' not found (expected dark, light or high-contrast)", s)
            })
    }
}

/// Color palette for the theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub primary: Color,
    pub foreground: Color,
    pub border: Color,
    pub muted: Color,
    pub danger: Color,
    pub info: Color,
    pub header_bg: Color,
    pub table_header: Color,
    pub table_cell: Color,
    pub selected: Color,
}

/// Style definitions for UI elements
#[derive(Debug, Clone)]
pub struct ThemeStyles {
    pub header: Style,
    pub footer: Style,
    pub panel_title: Style,
    pub panel_border: Style,
    pub text_normal: Style,
    pub text_muted: Style,
    pub table_header: Style,
    pub table_cell: Style,
    pub selected: Style,
    pub error: Style,
    pub info: Style,
}

/// Complete theme definition
#[derive(Debug, Clone)]
pub struct Theme {
    pub styles: ThemeStyles,
}

const ORANGE: Color = Color::Rgb(255, 165, 0);

impl Theme {
    pub fn from_variant(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::Dark => ThemeColors {
                primary: Color::Cyan,
                foreground: Color::White,
                border: Color::DarkGray,
                muted: Color::Gray,
                danger: Color::Red,
                info: Color::LightBlue,
                header_bg: Color::Blue,
                table_header: ORANGE,
                table_cell: Color::Green,
                selected: Color::Cyan,
            },
            ThemeVariant::Light => ThemeColors {
                primary: Color::Blue,
                foreground: Color::Black,
                border: Color::Gray,
                muted: Color::DarkGray,
                danger: Color::Red,
                info: Color::Blue,
                header_bg: Color::LightBlue,
                table_header: Color::Rgb(204, 102, 0),
                table_cell: Color::Rgb(0, 120, 0),
                selected: Color::Blue,
            },
            ThemeVariant::HighContrast => ThemeColors {
                primary: Color::White,
                foreground: Color::White,
                border: Color::White,
                muted: Color::White,
                danger: Color::LightRed,
                info: Color::LightCyan,
                header_bg: Color::Black,
                table_header: Color::Yellow,
                table_cell: Color::LightGreen,
                selected: Color::Yellow,
            },
        };

        Theme {
            styles: ThemeStyles::from_colors(&colors),
        }
    }

    pub fn dark() -> Self {
        Self::from_variant(ThemeVariant::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeStyles {
    fn from_colors(colors: &ThemeColors) -> Self {
        ThemeStyles {
            header: Style::default()
                .bg(colors.header_bg)
                .fg(colors.foreground)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().fg(colors.muted),

            panel_title: Style::default()
                .fg(colors.primary)
                .add_modifier(Modifier::BOLD),

            panel_border: Style::default().fg(colors.border),

            text_normal: Style::default().fg(colors.foreground),

            text_muted: Style::default().fg(colors.muted),

            table_header: Style::default()
                .fg(colors.table_header)
                .add_modifier(Modifier::BOLD),

            table_cell: Style::default().fg(colors.table_cell),

            selected: Style::default()
                .fg(colors.selected)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),

            error: Style::default()
                .fg(colors.danger)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(colors.info),
        }
    }
}
