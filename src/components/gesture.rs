//! Pointer gesture recognition
//!
//! Turns the press / drag / release sequence of the left mouse button into
//! either a tap or a horizontal swipe. A gesture produces at most one swipe.

use ratatui::layout::Position;

/// Direction of a horizontal swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// A completed pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Press and release without a swipe
    Tap { start: Position, end: Position },
    Swipe(SwipeDirection),
}

/// Tracks one left-button gesture at a time
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    /// Minimum horizontal distance, in columns
    threshold: u16,
    origin: Option<Position>,
    swiped: bool,
}

impl SwipeTracker {
    /// Create a tracker; a threshold of 0 is treated as 1
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            origin: None,
            swiped: false,
        }
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Left button pressed
    pub fn press(&mut self, column: u16, row: u16) {
        self.origin = Some(Position::new(column, row));
        self.swiped = false;
    }

    /// Pointer moved with the button held.
    ///
    /// Returns the swipe the first time the drag qualifies as one.
    pub fn drag(&mut self, column: u16, row: u16) -> Option<SwipeDirection> {
        let origin = self.origin?;
        if self.swiped {
            return None;
        }
        let direction = self.classify(origin, Position::new(column, row))?;
        self.swiped = true;
        Some(direction)
    }

    /// Left button released; ends the gesture.
    ///
    /// A swipe already reported by [`SwipeTracker::drag`] is not reported
    /// again, so the release yields `None` in that case.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Gesture> {
        let origin = self.origin.take()?;
        let end = Position::new(column, row);

        if std::mem::take(&mut self.swiped) {
            return None;
        }
        match self.classify(origin, end) {
            Some(direction) => Some(Gesture::Swipe(direction)),
            None => Some(Gesture::Tap { start: origin, end }),
        }
    }

    /// A movement is a swipe when it is at least `threshold` columns wide
    /// and wider than it is tall
    fn classify(&self, from: Position, to: Position) -> Option<SwipeDirection> {
        let dx = i32::from(to.x) - i32::from(from.x);
        let dy = i32::from(to.y) - i32::from(from.y);

        if dx.unsigned_abs() < u32::from(self.threshold) || dx.abs() <= dy.abs() {
            return None;
        }
        Some(if dx < 0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }
}
