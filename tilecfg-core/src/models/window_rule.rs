use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE` of a client, as far as floating rules care.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    Normal,
    Dialog,
    Utility,
    Toolbar,
    Splash,
    Notification,
}

/// What the runtime knows about a window when it is mapped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowProperties {
    /// Both parts of `WM_CLASS` (instance and class).
    pub wm_class: Vec<String>,
    /// `_NET_WM_NAME`, falling back to `WM_NAME`.
    pub title: Option<String>,
    pub wm_type: Option<WindowType>,
    /// Min and max size hints are equal.
    pub fixed_size: bool,
    /// Min and max aspect hints are equal.
    pub fixed_ratio: bool,
}

/// Predicate selecting windows by their properties.
///
/// Every criterion that is set has to hold. A rule without any criterion matches nothing.
///
/// # Example
///
/// ```toml
/// [[floating_layout.float_rules]]
/// wm_class = "ssh-askpass"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Match {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_type: Option<WindowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_ratio: Option<bool>,
}

impl Match {
    pub fn wm_class(class: impl Into<String>) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Self::default()
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn wm_type(wm_type: WindowType) -> Self {
        Self {
            wm_type: Some(wm_type),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, window: &WindowProperties) -> bool {
        if self.is_empty() {
            return false;
        }
        let class_ok = self
            .wm_class
            .as_ref()
            .map_or(true, |class| window.wm_class.iter().any(|c| c == class));
        let title_ok = self
            .title
            .as_ref()
            .map_or(true, |title| window.title.as_ref() == Some(title));
        let type_ok = self
            .wm_type
            .map_or(true, |wm_type| window.wm_type == Some(wm_type));
        let size_ok = self
            .fixed_size
            .map_or(true, |fixed| window.fixed_size == fixed);
        let ratio_ok = self
            .fixed_ratio
            .map_or(true, |fixed| window.fixed_ratio == fixed);
        class_ok && title_ok && type_ok && size_ok && ratio_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(class: &str, title: &str) -> WindowProperties {
        WindowProperties {
            wm_class: vec![class.to_owned(), class.to_uppercase()],
            title: Some(title.to_owned()),
            ..WindowProperties::default()
        }
    }

    #[test]
    fn class_matches_either_part_of_wm_class() {
        let rule = Match::wm_class("GITK");
        assert!(rule.matches(&window("gitk", "branchdialog")));
        assert!(!rule.matches(&window("firefox", "branchdialog")));
    }

    #[test]
    fn all_set_criteria_must_hold() {
        let rule = Match {
            wm_class: Some("gitk".to_owned()),
            title: Some("branchdialog".to_owned()),
            ..Match::default()
        };
        assert!(rule.matches(&window("gitk", "branchdialog")));
        assert!(!rule.matches(&window("gitk", "main")));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        assert!(!Match::default().matches(&window("gitk", "branchdialog")));
    }

    #[test]
    fn fixed_size_rule() {
        let rule = Match {
            fixed_size: Some(true),
            ..Match::default()
        };
        let mut props = window("mpv", "video");
        assert!(!rule.matches(&props));
        props.fixed_size = true;
        assert!(rule.matches(&props));
    }
}
