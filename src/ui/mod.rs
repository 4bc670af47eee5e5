//! User interface rendering module
//!
//! - `header` - title bar, nav bar and help overlay
//! - `display` - pending expression and current operand
//! - `history` - history panel
//!
//! The keypads themselves are widgets in [`crate::components::keypad`].
//!
//! ```text
//! +----------------------------------------------------+
//! | calctui [Normal]                          status   |
//! | +----------------------------+ +- History -------+ |
//! | |                      7 +   | | 7 + 3 = 10      | |
//! | |                        3   | | 2² = 4          | |
//! | +----------------------------+ |                 | |
//! | +- Scientific ---------------+ |                 | |
//! | +- Keypad -------------------+ |                 | |
//! | +----------------------------+ +-----------------+ |
//! | [Enter] Equals  [Esc] Clear ...                    |
//! +----------------------------------------------------+
//! ```

mod display;
mod header;
mod history;

use crate::app::{AppState, ScreenRegions};
use crate::components::keybindings::KeybindingContext;
use crate::components::keypad::{Keypad, KeypadWidget};
use crate::engine::Intent;
use crate::theme::UiConstants;
use crate::types::KeypadMode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position},
    Frame,
};

/// UI renderer for the application
///
/// Holds the keypad layouts so rendering and mouse hit testing agree on
/// which button sits where.
pub struct UiRenderer {
    normal_pad: Keypad,
    scientific_pad: Keypad,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            normal_pad: Keypad::normal(),
            scientific_pad: Keypad::scientific(),
        }
    }

    /// Render the complete UI and report where the clickable parts went
    pub fn render_with_context(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
    ) -> ScreenRegions {
        let mut regions = ScreenRegions::default();

        // Create main layout with nav bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        let title_area = main_chunks[0];
        let body_area = main_chunks[1];
        let nav_bar_area = main_chunks[2];

        header::render_title_bar(f, state, title_area);

        let (calc_area, history_area) = if state.history_visible {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(UiConstants::HISTORY_WIDTH),
                ])
                .split(body_area);
            (chunks[0], Some(chunks[1]))
        } else {
            (body_area, None)
        };

        let calc_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::DISPLAY_HEIGHT),
                Constraint::Min(1),
            ])
            .split(calc_area);

        let snapshot = state.snapshot();
        display::render_display(f, &snapshot, calc_chunks[0]);

        let pressed = state.pressed_intent();
        let keypad_area = match state.mode {
            KeypadMode::Normal => calc_chunks[1],
            KeypadMode::Scientific => {
                let pads = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .split(calc_chunks[1]);
                f.render_widget(
                    KeypadWidget::new(&self.scientific_pad).pressed(pressed),
                    pads[0],
                );
                regions.scientific = Some(pads[0]);
                pads[1]
            }
        };
        f.render_widget(
            KeypadWidget::new(&self.normal_pad).pressed(pressed),
            keypad_area,
        );
        regions.keypad = Some(keypad_area);

        if let Some(area) = history_area {
            let (rows, offset) = history::render_history_panel(
                f,
                &snapshot.history,
                state.history_selection,
                area,
            );
            regions.history_rows = Some(rows);
            regions.history_offset = offset;
        }

        header::render_nav_bar(f, state, keybinding_ctx, nav_bar_area);

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }

        regions
    }

    /// The keypad button at a screen position, given the last frame's regions
    pub fn button_at(&self, regions: &ScreenRegions, x: u16, y: u16) -> Option<Intent> {
        let normal = regions
            .keypad
            .and_then(|area| self.normal_pad.hit_test(area, x, y));
        let scientific = regions
            .scientific
            .and_then(|area| self.scientific_pad.hit_test(area, x, y));
        normal.or(scientific).map(|b| b.intent)
    }

    /// The history record index at a screen position, if any
    pub fn history_row_at(regions: &ScreenRegions, x: u16, y: u16) -> Option<usize> {
        let rows = regions.history_rows?;
        rows.contains(Position::new(x, y))
            .then(|| regions.history_offset + usize::from(y - rows.y))
    }
}
