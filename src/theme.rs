//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the display,
//! keypad, history panel and overlays.
//!
//! # Usage
//! ```rust
//! use calctui::theme::{ButtonKind, Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let key_style = Theme::button_style(ButtonKind::Operator, false);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Panel background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Keypad button background
    pub const BG_BUTTON: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles
    pub const PRIMARY: Color = Color::Cyan;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Error sentinel on the display
    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // Keypad Colors
    // -------------------------------------------------------------------------

    /// Binary operators and equals
    pub const OPERATOR: Color = Color::Yellow;

    /// Scientific functions
    pub const FUNCTION: Color = Color::LightBlue;

    /// Clear, backspace, clear history
    pub const ACTION: Color = Color::LightRed;

    /// Background of a pressed button
    pub const PRESSED_BG: Color = Color::Cyan;

    /// Text of a pressed button
    pub const PRESSED_FG: Color = Color::Black;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected history row
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected history row text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Help overlay category header
    pub const CATEGORY: Color = Color::Yellow;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
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

    /// Muted text
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

    /// Category header (yellow)
    pub fn category() -> Style {
        Style::default()
            .fg(Colors::CATEGORY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive border style
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Panel background
    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected history row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Main display value
    pub fn display_value() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Main display showing the error sentinel
    pub fn display_error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding in the help overlay
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Visual group of a keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Function,
    Action,
}

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style for a keypad button
    pub fn button_style(kind: ButtonKind, pressed: bool) -> Style {
        if pressed {
            return Style::default()
                .fg(Colors::PRESSED_FG)
                .bg(Colors::PRESSED_BG)
                .add_modifier(Modifier::BOLD);
        }

        let fg = match kind {
            ButtonKind::Digit => Colors::FG_PRIMARY,
            ButtonKind::Operator => Colors::OPERATOR,
            ButtonKind::Function => Colors::FUNCTION,
            ButtonKind::Action => Colors::ACTION,
        };
        Style::default().fg(fg).bg(Colors::BG_BUTTON)
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Title bar height
    pub const HEADER_HEIGHT: u16 = 1;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Display panel height (border, pending expression, value, border)
    pub const DISPLAY_HEIGHT: u16 = 4;

    /// Width of the history panel
    pub const HISTORY_WIDTH: u16 = 32;

    /// Help overlay width percentage
    pub const HELP_WIDTH_PCT: u16 = 60;

    /// Help overlay height percentage
    pub const HELP_HEIGHT_PCT: u16 = 80;
}
