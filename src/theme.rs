//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles the trainer screens use.
//!
//! # Usage
//! ```rust
//! use cubetrainer::theme::{Colors, Styles, Theme};
//! use cubetrainer::types::Face;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let sticker = Theme::face_style(Face::Front);
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::types::Face;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help overlay
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors (status, feedback)
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Sticker Colors (standard color scheme, white on top, green in front)
    // -------------------------------------------------------------------------

    pub const STICKER_UP: Color = Color::White;
    pub const STICKER_DOWN: Color = Color::Yellow;
    pub const STICKER_RIGHT: Color = Color::Red;
    pub const STICKER_LEFT: Color = Color::Rgb(255, 140, 0);
    pub const STICKER_FRONT: Color = Color::Green;
    pub const STICKER_BACK: Color = Color::Blue;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Secondary text (gray)
    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Section header style
    pub fn header() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Key label in the nav bar and help overlay
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Large running timer
    pub fn timer(running: bool) -> Style {
        let color = if running {
            Colors::WARNING
        } else {
            Colors::FG_PRIMARY
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// SEMANTIC HELPERS
// =============================================================================

pub struct Theme;

impl Theme {
    /// Sticker color of a face's center
    pub fn face_color(face: Face) -> Color {
        match face {
            Face::Up => Colors::STICKER_UP,
            Face::Down => Colors::STICKER_DOWN,
            Face::Right => Colors::STICKER_RIGHT,
            Face::Left => Colors::STICKER_LEFT,
            Face::Front => Colors::STICKER_FRONT,
            Face::Back => Colors::STICKER_BACK,
        }
    }

    /// Bold token style colored by face
    pub fn face_style(face: Face) -> Style {
        Style::default()
            .fg(Self::face_color(face))
            .add_modifier(Modifier::BOLD)
    }

    /// Border style depending on focus
    pub fn border(active: bool) -> Style {
        if active {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_face_colors_are_distinct() {
        let colors: HashSet<_> = Face::ALL.iter().map(|f| Theme::face_color(*f)).collect();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn test_border_style_follows_focus() {
        assert_eq!(Theme::border(true), Styles::border_active());
        assert_eq!(Theme::border(false), Styles::border_inactive());
    }
}
