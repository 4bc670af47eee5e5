//! Reusable TUI components
//!
//! - `keybindings` - per-mode key registry, nav bar items, help content
//! - `keypad` - on-screen keypads with hit testing
//! - `gesture` - tap / swipe recognition for the mouse
//! - `nav_bar` - key hint line
//! - `help_overlay` - keybinding help popup

pub mod gesture;
pub mod help_overlay;
pub mod keybindings;
pub mod keypad;
pub mod nav_bar;
