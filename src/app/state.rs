//! Application state definitions
//!
//! `AppState` couples the calculator engine with the presentation flags the
//! terminal front end needs: keypad mode, panel visibility, the press
//! highlight and the screen regions used for mouse hit testing.

use crate::components::gesture::{SwipeDirection, SwipeTracker};
use crate::config_file::CalculatorConfig;
use crate::engine::{Calculator, DisplaySnapshot, Intent};
use crate::types::KeypadMode;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tracing::debug;

/// The most recently pressed keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressedButton {
    pub intent: Intent,
    pub at: Instant,
}

/// Where the last frame drew its clickable parts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRegions {
    /// Normal keypad, including its border
    pub keypad: Option<Rect>,
    /// Scientific keypad, including its border
    pub scientific: Option<Rect>,
    /// History rows (inside the panel border), one record per line
    pub history_rows: Option<Rect>,
    /// Index of the record on the first history row
    pub history_offset: usize,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Calculator engine
    pub calculator: Calculator,
    /// Current keypad mode
    pub mode: KeypadMode,
    /// Whether the history panel is open
    pub history_visible: bool,
    /// Selected history row (0 = newest)
    pub history_selection: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Button drawn as pressed until the highlight expires
    pub pressed: Option<PressedButton>,
    /// How long a press stays highlighted
    pub press_highlight: Duration,
    /// Status message for user feedback
    pub status_message: String,
    /// Mouse gesture in progress
    pub swipe: SwipeTracker,
    /// Regions of the last rendered frame
    pub regions: ScreenRegions,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

impl AppState {
    /// Create the startup state described by `config`
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::new(),
            mode: config.start_mode,
            history_visible: config.show_history,
            history_selection: 0,
            help_visible: false,
            pressed: None,
            press_highlight: Duration::from_millis(config.press_highlight_ms),
            status_message: String::new(),
            swipe: SwipeTracker::new(config.swipe_threshold),
            regions: ScreenRegions::default(),
        }
    }

    /// What the display shows
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.calculator.snapshot()
    }

    /// Forward an intent to the calculator and highlight its button
    pub fn apply_intent(&mut self, intent: Intent, now: Instant) {
        self.calculator.apply(intent);
        self.pressed = Some(PressedButton { intent, at: now });

        self.status_message = match self.calculator.error() {
            Some(err) => err.to_string(),
            None => String::new(),
        };
        self.clamp_history_selection();
    }

    /// Intent of the highlighted button, if the highlight is still live
    pub fn pressed_intent(&self) -> Option<Intent> {
        self.pressed.map(|p| p.intent)
    }

    /// Drop the press highlight once it is older than the configured time
    pub fn expire_press(&mut self, now: Instant) {
        if let Some(pressed) = self.pressed {
            if now.saturating_duration_since(pressed.at) >= self.press_highlight {
                self.pressed = None;
            }
        }
    }

    /// Switch between the normal and scientific keypad
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.status_message = format!("{} mode", self.mode.title());
        debug!("Keypad mode is now {}", self.mode);
    }

    pub fn toggle_history(&mut self) {
        self.set_history_visible(!self.history_visible);
    }

    pub fn set_history_visible(&mut self, visible: bool) {
        if self.history_visible != visible {
            debug!("History panel {}", if visible { "opened" } else { "closed" });
        }
        self.history_visible = visible;
        self.clamp_history_selection();
    }

    /// Swiping left opens the history panel, swiping right closes it
    pub fn apply_swipe(&mut self, direction: SwipeDirection) {
        self.set_history_visible(direction == SwipeDirection::Left);
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Move the history selection towards the newest record
    pub fn select_newer(&mut self) {
        self.history_selection = self.history_selection.saturating_sub(1);
    }

    /// Move the history selection towards the oldest record
    pub fn select_older(&mut self) {
        let len = self.calculator.history().len();
        if self.history_selection + 1 < len {
            self.history_selection += 1;
        }
    }

    /// Recall history record `index` into the display
    pub fn recall(&mut self, index: usize, now: Instant) {
        if index < self.calculator.history().len() {
            self.history_selection = index;
        }
        self.apply_intent(Intent::RecallHistory(index), now);
    }

    /// Recall the selected history record
    pub fn recall_selected(&mut self, now: Instant) {
        self.recall(self.history_selection, now);
    }

    fn clamp_history_selection(&mut self) {
        let len = self.calculator.history().len();
        self.history_selection = self.history_selection.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    fn compute_sum(state: &mut AppState, a: u8, b: u8, now: Instant) {
        state.apply_intent(Intent::Digit(a), now);
        state.apply_intent(Intent::Operator(Operator::Add), now);
        state.apply_intent(Intent::Digit(b), now);
        state.apply_intent(Intent::Equals, now);
    }

    #[test]
    fn test_state_follows_config() {
        let config = CalculatorConfig {
            start_mode: KeypadMode::Scientific,
            show_history: true,
            press_highlight_ms: 300,
            swipe_threshold: 6,
        };
        let state = AppState::from_config(&config);

        assert_eq!(state.mode, KeypadMode::Scientific);
        assert!(state.history_visible);
        assert_eq!(state.press_highlight, Duration::from_millis(300));
        assert_eq!(state.swipe.threshold(), 6);
    }

    #[test]
    fn test_press_highlight_expires() {
        let mut state = AppState::default();
        let t0 = Instant::now();
        state.apply_intent(Intent::Digit(5), t0);
        assert_eq!(state.pressed_intent(), Some(Intent::Digit(5)));

        state.expire_press(t0 + Duration::from_millis(100));
        assert_eq!(state.pressed_intent(), Some(Intent::Digit(5)));

        state.expire_press(t0 + Duration::from_millis(200));
        assert_eq!(state.pressed_intent(), None);
    }

    #[test]
    fn test_error_sets_status_message() {
        let mut state = AppState::default();
        let now = Instant::now();
        state.apply_intent(Intent::Digit(1), now);
        state.apply_intent(Intent::Operator(Operator::Divide), now);
        state.apply_intent(Intent::Digit(0), now);
        state.apply_intent(Intent::Equals, now);
        assert_eq!(state.status_message, "Cannot divide by zero");

        state.apply_intent(Intent::Clear, now);
        assert!(state.status_message.is_empty());
    }

    #[test]
    fn test_swipe_directions() {
        let mut state = AppState::default();
        state.apply_swipe(SwipeDirection::Left);
        assert!(state.history_visible);
        state.apply_swipe(SwipeDirection::Left);
        assert!(state.history_visible);
        state.apply_swipe(SwipeDirection::Right);
        assert!(!state.history_visible);
    }

    #[test]
    fn test_history_selection_is_clamped() {
        let mut state = AppState::default();
        let now = Instant::now();
        compute_sum(&mut state, 1, 1, now);
        compute_sum(&mut state, 2, 2, now);

        state.select_older();
        state.select_older();
        state.select_older();
        assert_eq!(state.history_selection, 1);

        state.select_newer();
        state.select_newer();
        assert_eq!(state.history_selection, 0);

        state.select_older();
        state.apply_intent(Intent::ClearHistory, now);
        assert_eq!(state.history_selection, 0);
    }

    #[test]
    fn test_recall_selected() {
        let mut state = AppState::default();
        let now = Instant::now();
        compute_sum(&mut state, 1, 1, now);
        compute_sum(&mut state, 3, 4, now);

        state.select_older();
        state.recall_selected(now);

        assert_eq!(state.snapshot().current_operand, "2");
        assert_eq!(state.pressed_intent(), Some(Intent::RecallHistory(1)));
    }

    #[test]
    fn test_toggle_mode_updates_status() {
        let mut state = AppState::default();
        state.toggle_mode();
        assert_eq!(state.mode, KeypadMode::Scientific);
        assert_eq!(state.status_message, "Scientific mode");
    }
}
