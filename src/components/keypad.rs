//! On-screen keypads
//!
//! Two button grids: the normal pad with digits and binary operators, and
//! the scientific function pad shown next to it in scientific mode. Each
//! button carries the [`Intent`] it sends, so a mouse click and the
//! equivalent key press go through the same path.

use crate::engine::{Intent, Operator, ScientificFunction};
use crate::theme::{ButtonKind, Styles, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Intent sent when the button is clicked
    pub intent: Intent,
    pub kind: ButtonKind,
}

impl KeypadButton {
    fn digit(d: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        Self {
            label: LABELS[usize::from(d.min(9))],
            intent: Intent::Digit(d),
            kind: ButtonKind::Digit,
        }
    }

    fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            intent: Intent::Operator(op),
            kind: ButtonKind::Operator,
        }
    }

    fn function(function: ScientificFunction) -> Self {
        Self {
            label: function.label(),
            intent: Intent::Scientific(function),
            kind: ButtonKind::Function,
        }
    }

    fn action(label: &'static str, intent: Intent) -> Self {
        let kind = if intent == Intent::Equals {
            ButtonKind::Operator
        } else if intent == Intent::DecimalPoint {
            ButtonKind::Digit
        } else {
            ButtonKind::Action
        };
        Self {
            label,
            intent,
            kind,
        }
    }
}

/// A grid of buttons in row-major order
#[derive(Debug, Clone)]
pub struct Keypad {
    title: &'static str,
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Keypad {
    /// The normal pad
    /// ```text
    /// [ C ] [ ⌫ ] [ ^ ] [ ÷ ]
    /// [ 7 ] [ 8 ] [ 9 ] [ × ]
    /// [ 4 ] [ 5 ] [ 6 ] [ - ]
    /// [ 1 ] [ 2 ] [ 3 ] [ + ]
    /// [ 0 ] [ . ] [ = ] [ CH]
    /// ```
    pub fn normal() -> Self {
        use KeypadButton as B;
        let buttons = vec![
            B::action("C", Intent::Clear),
            B::action("⌫", Intent::Backspace),
            B::operator(Operator::Power),
            B::operator(Operator::Divide),
            B::digit(7),
            B::digit(8),
            B::digit(9),
            B::operator(Operator::Multiply),
            B::digit(4),
            B::digit(5),
            B::digit(6),
            B::operator(Operator::Subtract),
            B::digit(1),
            B::digit(2),
            B::digit(3),
            B::operator(Operator::Add),
            B::digit(0),
            B::action(".", Intent::DecimalPoint),
            B::action("=", Intent::Equals),
            B::action("CH", Intent::ClearHistory),
        ];

        Self {
            title: " Keypad ",
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// The scientific function pad
    /// ```text
    /// [sin] [cos] [tan] [log]
    /// [ln ] [ √ ] [x² ] [x³ ]
    /// [xʸ ] [n! ] [ π ] [ e ]
    /// ```
    pub fn scientific() -> Self {
        Self {
            title: " Scientific ",
            buttons: ScientificFunction::ALL
                .iter()
                .map(|f| KeypadButton::function(*f))
                .collect(),
            cols: 4,
            rows: 3,
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Returns an iterator over buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, btn)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), btn)
        })
    }

    /// Size of one button cell inside a bordered `area`
    fn cell_size(&self, area: Rect) -> Option<(u16, u16)> {
        let btn_width = area.width.saturating_sub(2) / self.cols as u16;
        let btn_height = area.height.saturating_sub(2) / self.rows as u16;
        (btn_width > 0 && btn_height > 0).then_some((btn_width, btn_height))
    }

    /// Converts a click position to the button under it, if any.
    ///
    /// `area` is the full widget area including its border.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<&KeypadButton> {
        if !area.contains(Position::new(x, y)) {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // border is one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area)?;
        let col = usize::from((rel_x - 1) / btn_width);
        let row = usize::from((rel_y - 1) / btn_height);

        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    /// Intent of the button to draw as pressed
    pressed: Option<Intent>,
}

impl<'a> KeypadWidget<'a> {
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            pressed: None,
        }
    }

    /// Highlight the button sending `intent`
    pub fn pressed(mut self, intent: Option<Intent>) -> Self {
        self.pressed = intent;
        self
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(self.keypad.title)
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .render(area, buf);

        let Some((btn_width, btn_height)) = self.keypad.cell_size(area) else {
            return;
        };
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        for ((row, col), btn) in self.keypad.buttons_with_positions() {
            let cell = Rect {
                x: inner.x + col as u16 * btn_width,
                y: inner.y + row as u16 * btn_height,
                // leave a one column gap between buttons when there is room
                width: if btn_width > 3 { btn_width - 1 } else { btn_width },
                height: btn_height,
            };

            let style = Theme::button_style(btn.kind, self.pressed == Some(btn.intent));
            buf.set_style(cell, style);

            let label_len = btn.label.chars().count() as u16;
            let label_x = cell.x + cell.width.saturating_sub(label_len) / 2;
            let label_y = cell.y + cell.height / 2;
            buf.set_span(label_x, label_y, &Span::styled(btn.label, style), cell.width);
        }
    }
}
