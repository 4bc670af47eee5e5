//! Shared front end types
//!
//! Enums that appear both in the configuration file and in the interactive
//! state, with `strum` providing the display and parse mapping.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which keypad panels are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum KeypadMode {
    /// Digits and the five binary operators
    #[default]
    #[strum(serialize = "normal")]
    Normal,
    /// The normal pad plus the scientific function panel
    #[strum(serialize = "scientific")]
    Scientific,
}

impl KeypadMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Scientific,
            Self::Scientific => Self::Normal,
        }
    }

    /// Label shown in the title bar
    pub fn title(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Scientific => "Scientific",
        }
    }
}
