use crate::command::MouseCommand;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    Button4,
    Button5,
}

/// A pointer binding. Drags report `start` once and `command` on every motion.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum MouseBinding {
    Drag {
        modifier: Vec<String>,
        button: Button,
        command: MouseCommand,
        start: MouseCommand,
    },
    Click {
        modifier: Vec<String>,
        button: Button,
        command: MouseCommand,
    },
}

impl MouseBinding {
    pub fn modifier(&self) -> &[String] {
        match self {
            Self::Drag { modifier, .. } | Self::Click { modifier, .. } => modifier,
        }
    }

    pub fn modifier_mut(&mut self) -> &mut Vec<String> {
        match self {
            Self::Drag { modifier, .. } | Self::Click { modifier, .. } => modifier,
        }
    }

    pub fn button(&self) -> Button {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => *button,
        }
    }
}
