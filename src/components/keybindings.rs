//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change with the keypad mode. The
//! same registry resolves key presses, feeds the nav bar and builds the help
//! overlay, so the three never disagree.

use crate::engine::{Exponent, Intent, Operator, ScientificFunction};
use crate::types::KeypadMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Forward an intent to the calculator
    Calculator(Intent),
    ToggleMode,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    RecallSelected,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// SHIFT is ignored for character keys: `^`, `!` and `+` arrive with it
    /// on most layouts.
    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        match event.code {
            KeyCode::Char(_) => self.modifiers == event.modifiers.difference(KeyModifiers::SHIFT),
            _ => self.modifiers == event.modifiers,
        }
    }
}

fn calc(intent: Intent) -> KeyAction {
    KeyAction::Calculator(intent)
}

fn func(function: ScientificFunction) -> KeyAction {
    KeyAction::Calculator(Intent::Scientific(function))
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<KeypadMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        let mut global: Vec<Keybinding> = (0..=9u8)
            .map(|d| {
                Keybinding::new(
                    KeyCode::Char(char::from(b'0' + d)),
                    calc(Intent::Digit(d)),
                    "0-9",
                    "Enter digit",
                )
            })
            .collect();

        global.extend([
            Keybinding::new(KeyCode::Char('.'), calc(Intent::DecimalPoint), ".", "Decimal point"),
            Keybinding::new(KeyCode::Backspace, calc(Intent::Backspace), "Bksp", "Delete last digit"),
            Keybinding::new(KeyCode::Esc, calc(Intent::Clear), "Esc", "Clear"),
            Keybinding::new(KeyCode::Char('+'), calc(Intent::Operator(Operator::Add)), "+", "Add"),
            Keybinding::new(KeyCode::Char('-'), calc(Intent::Operator(Operator::Subtract)), "-", "Subtract"),
            Keybinding::new(KeyCode::Char('*'), calc(Intent::Operator(Operator::Multiply)), "*", "Multiply"),
            Keybinding::new(KeyCode::Char('/'), calc(Intent::Operator(Operator::Divide)), "/", "Divide"),
            Keybinding::new(KeyCode::Char('^'), calc(Intent::Operator(Operator::Power)), "^", "Power"),
            Keybinding::new(KeyCode::Enter, calc(Intent::Equals), "Enter", "Equals"),
            Keybinding::new(KeyCode::Char('='), calc(Intent::Equals), "=", "Equals"),
            Keybinding::new(KeyCode::Char('h'), KeyAction::ToggleHistory, "H", "History"),
            Keybinding::new(KeyCode::Up, KeyAction::HistoryUp, "Up", "Newer entry"),
            Keybinding::new(KeyCode::Down, KeyAction::HistoryDown, "Down", "Older entry"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::RecallSelected, "R", "Recall entry"),
            Keybinding::new(KeyCode::Delete, calc(Intent::ClearHistory), "Del", "Clear history"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ]);
        self.global_bindings = global;

        // Normal
        self.mode_bindings.insert(
            KeypadMode::Normal,
            vec![Keybinding::new(
                KeyCode::Tab,
                KeyAction::ToggleMode,
                "Tab",
                "Scientific",
            )],
        );

        // Scientific
        self.mode_bindings.insert(
            KeypadMode::Scientific,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::ToggleMode, "Tab", "Normal"),
                Keybinding::new(KeyCode::Char('s'), func(ScientificFunction::Sin), "S", "sin (degrees)"),
                Keybinding::new(KeyCode::Char('c'), func(ScientificFunction::Cos), "C", "cos (degrees)"),
                Keybinding::new(KeyCode::Char('t'), func(ScientificFunction::Tan), "T", "tan (degrees)"),
                Keybinding::new(KeyCode::Char('l'), func(ScientificFunction::Log), "L", "log base 10"),
                Keybinding::new(KeyCode::Char('n'), func(ScientificFunction::Ln), "N", "Natural log"),
                Keybinding::new(KeyCode::Char('v'), func(ScientificFunction::Sqrt), "V", "Square root"),
                Keybinding::new(
                    KeyCode::Char('x'),
                    func(ScientificFunction::Power(Exponent::Square)),
                    "X",
                    "Square",
                ),
                Keybinding::new(
                    KeyCode::Char('u'),
                    func(ScientificFunction::Power(Exponent::Cube)),
                    "U",
                    "Cube",
                ),
                Keybinding::new(
                    KeyCode::Char('y'),
                    func(ScientificFunction::Power(Exponent::Y)),
                    "Y",
                    "x to the power y",
                ),
                Keybinding::new(KeyCode::Char('!'), func(ScientificFunction::Factorial), "!", "Factorial"),
                Keybinding::new(KeyCode::Char('p'), func(ScientificFunction::Pi), "P", "Pi"),
                Keybinding::new(KeyCode::Char('e'), func(ScientificFunction::E), "E", "Euler's number"),
            ],
        );
    }

    /// Get keybindings for a specific mode (mode bindings first, then global)
    pub fn get_bindings(&self, mode: &KeypadMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key event to the action bound to it in `mode`
    pub fn resolve(&self, mode: &KeypadMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &KeypadMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let priority_actions = [
            calc(Intent::Equals),
            calc(Intent::Clear),
            KeyAction::ToggleMode,
            KeyAction::ToggleHistory,
            KeyAction::Help,
            KeyAction::Quit,
        ];

        priority_actions
            .iter()
            .filter_map(|action| bindings.iter().find(|b| b.action == *action))
            .map(|binding| NavBarItem {
                key_display: binding.display.clone(),
                action_label: binding.description.clone(),
            })
            .collect()
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &KeypadMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 5] = [
            ("Entry", |a| {
                matches!(
                    a,
                    KeyAction::Calculator(
                        Intent::Digit(_) | Intent::DecimalPoint | Intent::Backspace | Intent::Clear
                    )
                )
            }),
            ("Operators", |a| {
                matches!(
                    a,
                    KeyAction::Calculator(Intent::Operator(_) | Intent::Equals)
                )
            }),
            ("Scientific", |a| {
                matches!(a, KeyAction::Calculator(Intent::Scientific(_)))
            }),
            ("History", |a| {
                matches!(
                    a,
                    KeyAction::ToggleHistory
                        | KeyAction::HistoryUp
                        | KeyAction::HistoryDown
                        | KeyAction::RecallSelected
                        | KeyAction::Calculator(Intent::ClearHistory | Intent::RecallHistory(_))
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::ToggleMode | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(mode);
        let mut sections = Vec::new();

        for (title, belongs) in groups {
            let mut items: Vec<(String, String)> = Vec::new();
            for binding in bindings.iter().filter(|b| belongs(&b.action)) {
                let item = (binding.display.clone(), binding.description.clone());
                // the ten digit keys share one entry
                if !items.contains(&item) {
                    items.push(item);
                }
            }

            if !items.is_empty() {
                sections.push(HelpSection {
                    title: title.to_string(),
                    items,
                });
            }
        }

        sections
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_resolve_in_both_modes() {
        let ctx = KeybindingContext::new();
        for mode in [KeypadMode::Normal, KeypadMode::Scientific] {
            assert_eq!(
                ctx.resolve(&mode, &key(KeyCode::Char('7'))),
                Some(calc(Intent::Digit(7)))
            );
        }
    }

    #[test]
    fn test_keyboard_operator_symbols() {
        let ctx = KeybindingContext::new();
        let mode = KeypadMode::Normal;
        assert_eq!(
            ctx.resolve(&mode, &key(KeyCode::Char('*'))),
            Some(calc(Intent::Operator(Operator::Multiply)))
        );
        assert_eq!(
            ctx.resolve(&mode, &key(KeyCode::Char('/'))),
            Some(calc(Intent::Operator(Operator::Divide)))
        );
        assert_eq!(
            ctx.resolve(&mode, &key(KeyCode::Enter)),
            Some(calc(Intent::Equals))
        );
    }

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('^'), KeyModifiers::SHIFT);
        assert_eq!(
            ctx.resolve(&KeypadMode::Normal, &event),
            Some(calc(Intent::Operator(Operator::Power)))
        );
    }

    #[test]
    fn test_scientific_keys_only_in_scientific_mode() {
        let ctx = KeybindingContext::new();
        let s = key(KeyCode::Char('s'));
        assert_eq!(ctx.resolve(&KeypadMode::Normal, &s), None);
        assert_eq!(
            ctx.resolve(&KeypadMode::Scientific, &s),
            Some(func(ScientificFunction::Sin))
        );
    }

    #[test]
    fn test_ctrl_c_quits_but_c_is_cosine() {
        let ctx = KeybindingContext::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            ctx.resolve(&KeypadMode::Scientific, &ctrl_c),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            ctx.resolve(&KeypadMode::Scientific, &key(KeyCode::Char('c'))),
            Some(func(ScientificFunction::Cos))
        );
        assert_eq!(ctx.resolve(&KeypadMode::Normal, &key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_nav_items_follow_mode() {
        let ctx = KeybindingContext::new();
        let normal = ctx.get_nav_items(&KeypadMode::Normal);
        let scientific = ctx.get_nav_items(&KeypadMode::Scientific);

        assert_eq!(normal.len(), 6);
        assert!(normal.iter().any(|i| i.action_label == "Scientific"));
        assert!(scientific.iter().any(|i| i.action_label == "Normal"));
    }

    #[test]
    fn test_help_content_groups() {
        let ctx = KeybindingContext::new();

        let normal = ctx.get_help_content(&KeypadMode::Normal);
        assert!(normal.iter().all(|s| s.title != "Scientific"));

        let scientific = ctx.get_help_content(&KeypadMode::Scientific);
        let entry = scientific.iter().find(|s| s.title == "Entry").unwrap();
        let digit_rows = entry.items.iter().filter(|(k, _)| k == "0-9").count();
        assert_eq!(digit_rows, 1);
        assert!(scientific.iter().any(|s| s.title == "Scientific"));
    }
}
