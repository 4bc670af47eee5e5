//! Title bar, nav bar and help overlay rendering

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the title bar: program name and mode on the left, status on the right
pub fn render_title_bar(f: &mut Frame, state: &AppState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(1)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" calctui ", Styles::title()),
        Span::styled(
            format!("[{}]", state.mode.title()),
            Style::default().fg(Colors::SECONDARY),
        ),
    ]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    let status_style = if state.calculator.error().is_some() {
        Style::default().fg(Colors::ERROR)
    } else {
        Styles::text_secondary()
    };
    let status = Paragraph::new(Span::styled(state.status_message.clone(), status_style))
        .alignment(Alignment::Right);
    f.render_widget(status, chunks[1]);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
