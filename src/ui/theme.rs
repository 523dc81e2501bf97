use ratatui::style::{Color, Modifier, Style};

use crate::format::Severity;

/// Border color tag carried by a panel. Each metric domain owns one tone;
/// `Alert` marks a panel whose metrics could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderTone {
    Green,
    Blue,
    Magenta,
    Cyan,
    White,
    Alert,
}

impl BorderTone {
    pub fn color(self) -> Color {
        match self {
            BorderTone::Green => Color::Green,
            BorderTone::Blue => Color::Blue,
            BorderTone::Magenta => Color::Magenta,
            BorderTone::Cyan => Color::Cyan,
            BorderTone::White => Color::White,
            BorderTone::Alert => Color::LightRed,
        }
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ok => Color::Green,
        Severity::Warn => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

pub fn severity_style(severity: Severity) -> Style {
    Style::default().fg(severity_color(severity))
}

pub fn label_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

// Process table columns.
pub const PID_COLOR: Color = Color::Cyan;
pub const NAME_COLOR: Color = Color::Magenta;
pub const OWNER_COLOR: Color = Color::Green;
pub const CPU_SHARE_COLOR: Color = Color::Yellow;
