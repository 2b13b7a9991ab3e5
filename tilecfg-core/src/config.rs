use crate::models::{
    FloatingLayout, GlobalFlags, Group, Keybind, Layout, MouseBinding, Screen, WidgetDefaults,
};
use std::path::PathBuf;

/// What a window manager runtime reads from a configuration.
///
/// Implementors are plain data; nothing here is expected to fail. Malformed entries are the
/// runtime's business when it validates the descriptor.
pub trait Config {
    /// Returns a collection of bindings with the mod key mapped.
    fn mapped_bindings(&self) -> Vec<Keybind>;

    /// Mouse bindings with the mod key mapped.
    fn mapped_mouse(&self) -> Vec<MouseBinding>;

    fn groups(&self) -> &[Group];

    fn layouts(&self) -> &[Layout];

    fn floating_layout(&self) -> &FloatingLayout;

    fn screens(&self) -> &[Screen];

    fn widget_defaults(&self) -> &WidgetDefaults;

    /// Defaults for launcher extensions; the widget defaults unless overridden.
    fn extension_defaults(&self) -> WidgetDefaults {
        self.widget_defaults().clone()
    }

    fn flags(&self) -> &GlobalFlags;

    /// Script spawned once when the runtime first starts.
    fn autostart_script(&self) -> Option<PathBuf>;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub screens: Vec<Screen>,
    pub widget_defaults: WidgetDefaults,
    pub flags: GlobalFlags,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            groups: vec![Group::new("a"), Group::new("b")],
            layouts: vec![Layout::Max],
            floating_layout: FloatingLayout::default(),
            screens: vec![],
            widget_defaults: WidgetDefaults::default(),
            flags: GlobalFlags::default(),
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn mapped_bindings(&self) -> Vec<Keybind> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, group)| Keybind {
                modifier: vec!["mod4".to_owned()],
                key: (i + 1).to_string(),
                command: crate::Command::GroupToScreen(group.name.clone()),
                desc: None,
            })
            .collect()
    }
    fn mapped_mouse(&self) -> Vec<MouseBinding> {
        vec![]
    }
    fn groups(&self) -> &[Group] {
        &self.groups
    }
    fn layouts(&self) -> &[Layout] {
        &self.layouts
    }
    fn floating_layout(&self) -> &FloatingLayout {
        &self.floating_layout
    }
    fn screens(&self) -> &[Screen] {
        &self.screens
    }
    fn widget_defaults(&self) -> &WidgetDefaults {
        &self.widget_defaults
    }
    fn flags(&self) -> &GlobalFlags {
        &self.flags
    }
    fn autostart_script(&self) -> Option<PathBuf> {
        None
    }
}
