//! Main display: pending expression above the current operand

use crate::engine::{DisplaySnapshot, ERROR_TEXT};
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the display panel
pub fn render_display(f: &mut Frame, snapshot: &DisplaySnapshot, area: Rect) {
    let value_style = if snapshot.current_operand == ERROR_TEXT {
        Styles::display_error()
    } else {
        Styles::display_value()
    };

    let lines = vec![
        Line::from(Span::styled(
            snapshot.previous_operand.clone(),
            Styles::text_secondary(),
        )),
        Line::from(Span::styled(snapshot.current_operand.clone(), value_style)),
    ];

    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active()),
        );
    f.render_widget(display, area);
}
