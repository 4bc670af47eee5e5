//! History panel

use crate::engine::HistoryRecord;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// First record drawn so that `selection` stays inside `visible_rows`
fn scroll_offset(selection: usize, visible_rows: u16) -> usize {
    selection.saturating_sub(usize::from(visible_rows.max(1)) - 1)
}

/// Render the history panel.
///
/// Returns the area of the record rows and the index of the record drawn
/// on its first line.
pub fn render_history_panel(
    f: &mut Frame,
    records: &[HistoryRecord],
    selection: usize,
    area: Rect,
) -> (Rect, usize) {
    let block = Block::default()
        .title(" History ")
        .borders(Borders::ALL)
        .border_style(Styles::border_inactive());
    let inner = block.inner(area);
    let offset = scroll_offset(selection, inner.height);

    let lines: Vec<Line> = if records.is_empty() {
        vec![Line::from(Span::styled("No calculations yet", Styles::text_muted()))]
    } else {
        records
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, record)| {
                let style = if i == selection {
                    Styles::selected()
                } else {
                    Styles::text()
                };
                Line::from(Span::styled(
                    format!("{} = {}", record.expression, record.result),
                    style,
                ))
            })
            .collect()
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
    (inner, offset)
}
