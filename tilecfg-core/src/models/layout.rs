use super::{Match, WindowProperties, WindowType};
use serde::{Deserialize, Serialize};

/// Tiling algorithm selected for a group. The runtime cycles through the configured list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Layout {
    Columns(Columns),
    Max,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Columns(_) => "columns",
            Self::Max => "max",
        }
    }

    /// Colors this layout draws with, for validation.
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Self::Columns(columns) => vec![
                columns.border_focus.as_str(),
                columns.border_normal.as_str(),
            ],
            Self::Max => vec![],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Columns {
    pub margin: u32,
    pub border_width: u32,
    pub border_focus: String,
    pub border_normal: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            margin: 0,
            border_width: 2,
            border_focus: "#881111".to_owned(),
            border_normal: "#220000".to_owned(),
        }
    }
}

/// Floating windows escape tiling; `float_rules` decide which windows start floating.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FloatingLayout {
    pub border_width: u32,
    pub border_focus: String,
    pub border_normal: String,
    pub float_rules: Vec<Match>,
}

impl Default for FloatingLayout {
    fn default() -> Self {
        Self {
            border_width: 1,
            border_focus: "#0000ff".to_owned(),
            border_normal: "#000000".to_owned(),
            float_rules: Self::default_float_rules(),
        }
    }
}

impl FloatingLayout {
    /// Windows that float regardless of user rules: transient window types and fixed-size
    /// clients.
    pub fn default_float_rules() -> Vec<Match> {
        let types = [
            WindowType::Utility,
            WindowType::Notification,
            WindowType::Toolbar,
            WindowType::Splash,
            WindowType::Dialog,
        ];
        let classes = [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ];
        let mut rules: Vec<Match> = types.iter().map(|t| Match::wm_type(*t)).collect();
        rules.extend(classes.iter().map(|c| Match::wm_class(*c)));
        rules.push(Match {
            fixed_size: Some(true),
            ..Match::default()
        });
        rules.push(Match {
            fixed_ratio: Some(true),
            ..Match::default()
        });
        rules
    }

    /// Default rules followed by `extra`.
    pub fn with_rules(extra: impl IntoIterator<Item = Match>) -> Self {
        let mut layout = Self::default();
        layout.float_rules.extend(extra);
        layout
    }

    pub fn should_float(&self, window: &WindowProperties) -> bool {
        self.float_rules.iter().any(|rule| rule.matches(window))
    }
}
