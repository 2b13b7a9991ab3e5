use super::Match;
use serde::{Deserialize, Serialize};

/// How to react when a client asks to be activated.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    Focus,
    /// Focus if the window is on the current group, mark it urgent otherwise.
    #[default]
    Smart,
    Urgent,
    Never,
}

/// Process-wide toggles read continuously by the runtime.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GlobalFlags {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Let clients such as games minimize themselves when they lose focus.
    pub auto_minimize: bool,
    /// Name reported through `_NET_WM_NAME` on the supporting WM check window.
    /// Java toolkits only work with a short list of known names.
    pub wmname: String,
    pub dgroups_app_rules: Vec<Match>,
}

impl Default for GlobalFlags {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".to_owned(),
            dgroups_app_rules: vec![],
        }
    }
}
