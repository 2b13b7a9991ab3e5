//! Typed entities of a configuration descriptor.
mod flags;
mod group;
mod keybind;
mod layout;
mod mouse;
mod widget;
mod window_rule;

pub use flags::{FocusOnActivation, GlobalFlags};
pub use group::Group;
pub use keybind::{substitute_modkey, Keybind, MODKEY_PLACEHOLDER};
pub use layout::{Columns, FloatingLayout, Layout};
pub use mouse::{Button, MouseBinding};
pub use widget::{
    Bar, CheckUpdates, Chord, ChordColors, Clock, Df, GroupBox, HighlightMethod, NameTransform,
    Net, Prompt, ResolvedStyle, Screen, Style, Systray, TextBox, Widget, WidgetDefaults,
    WindowName,
};
pub use window_rule::{Match, WindowProperties, WindowType};
