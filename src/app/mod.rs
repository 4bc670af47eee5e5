//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, ScreenRegions, PressedButton)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, PressedButton, ScreenRegions};

use crate::components::gesture::Gesture;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config_file::CalculatorConfig;
use crate::ui::UiRenderer;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// How long the event loop waits for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key dispatch, navigation hints and help
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &CalculatorConfig) -> Self {
        info!(
            "Creating new App instance (mode: {}, history: {})",
            config.start_mode, config.show_history
        );

        Self {
            state: AppState::from_config(config),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.toggle_help();
    }

    /// Main event loop; returns when the user quits
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting main application loop");

        loop {
            self.state.expire_press(Instant::now());
            self.draw(terminal)?;

            // Handle input events
            if crossterm::event::poll(POLL_INTERVAL)? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event) {
                            break; // Exit requested
                        }
                    }
                    Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
                    _ => {}
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Render one frame and remember where the clickable parts went
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let mut regions = ScreenRegions::default();
        terminal.draw(|f| {
            regions = self
                .ui_renderer
                .render_with_context(f, &self.state, &self.keybinding_context);
        })?;
        self.state.regions = regions;
        Ok(())
    }

    /// Handle keyboard input events. Returns `true` when the app should quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }

        // Handle help overlay - ? or Esc dismisses it
        if self.state.help_visible {
            match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => self.state.help_visible = false,
                _ => {
                    if self.keybinding_context.resolve(&self.state.mode, &key_event)
                        == Some(KeyAction::Quit)
                    {
                        return true;
                    }
                }
            }
            return false;
        }

        let Some(action) = self
            .keybinding_context
            .resolve(&self.state.mode, &key_event)
        else {
            debug!("Unbound key {:?}", key_event.code);
            return false;
        };

        self.dispatch(action, Instant::now())
    }

    /// Perform a key action. Returns `true` when the app should quit.
    fn dispatch(&mut self, action: KeyAction, now: Instant) -> bool {
        match action {
            KeyAction::Calculator(intent) => self.state.apply_intent(intent, now),
            KeyAction::ToggleMode => self.state.toggle_mode(),
            KeyAction::ToggleHistory => self.state.toggle_history(),
            KeyAction::HistoryUp => self.state.select_newer(),
            KeyAction::HistoryDown => self.state.select_older(),
            KeyAction::RecallSelected => self.state.recall_selected(now),
            KeyAction::Help => self.toggle_help(),
            KeyAction::Quit => {
                info!("Quit requested");
                return true;
            }
        }
        false
    }

    /// Handle mouse input: keypad clicks, history clicks, swipes and scrolling
    pub fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let (x, y) = (mouse_event.column, mouse_event.row);
        let now = Instant::now();

        match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.state.swipe.press(x, y),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(direction) = self.state.swipe.drag(x, y) {
                    debug!("Swipe {:?}", direction);
                    self.state.apply_swipe(direction);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => match self.state.swipe.release(x, y) {
                Some(Gesture::Swipe(direction)) => {
                    debug!("Swipe {:?}", direction);
                    self.state.apply_swipe(direction);
                }
                Some(Gesture::Tap { start, end }) => {
                    self.handle_tap(start.x, start.y, end.x, end.y, now)
                }
                None => {}
            },
            MouseEventKind::ScrollUp if self.state.history_visible => self.state.select_newer(),
            MouseEventKind::ScrollDown if self.state.history_visible => self.state.select_older(),
            _ => {}
        }
    }

    /// A click counts when press and release land on the same target
    fn handle_tap(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, now: Instant) {
        if self.state.help_visible {
            self.state.help_visible = false;
            return;
        }

        let regions = self.state.regions;
        if let Some(intent) = self.ui_renderer.button_at(&regions, x1, y1) {
            if self.ui_renderer.button_at(&regions, x0, y0) == Some(intent) {
                debug!("Keypad click {:?}", intent);
                self.state.apply_intent(intent, now);
            }
            return;
        }

        if let Some(index) = UiRenderer::history_row_at(&regions, x1, y1) {
            if UiRenderer::history_row_at(&regions, x0, y0) == Some(index) {
                debug!("History click on row {}", index);
                self.state.recall(index, now);
            }
        }
    }
}
