use crate::errors::Result;
use crate::models::{
    FloatingLayout, GlobalFlags, Group, Keybind, Layout, MouseBinding, Screen, WidgetDefaults,
};
use crate::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fully resolved snapshot of a [`Config`], in the shape handed to the runtime.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Descriptor {
    pub keys: Vec<Keybind>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    #[serde(flatten)]
    pub flags: GlobalFlags,
    pub autostart: Option<PathBuf>,
}

impl Descriptor {
    pub fn from_config<C: Config>(config: &C) -> Self {
        Self {
            keys: config.mapped_bindings(),
            mouse: config.mapped_mouse(),
            groups: config.groups().to_vec(),
            layouts: config.layouts().to_vec(),
            floating_layout: config.floating_layout().clone(),
            widget_defaults: config.widget_defaults().clone(),
            extension_defaults: config.extension_defaults(),
            screens: config.screens().to_vec(),
            flags: config.flags().clone(),
            autostart: config.autostart_script(),
        }
    }

    /// # Errors
    ///
    /// Only fails if serialization fails, which the derived impls do not.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;

    #[test]
    fn descriptor_mirrors_config() {
        let config = TestConfig::default();
        let descriptor = Descriptor::from_config(&config);
        assert_eq!(descriptor.groups, config.groups);
        assert_eq!(descriptor.keys.len(), 2);
        assert_eq!(descriptor.extension_defaults, descriptor.widget_defaults);
        assert_eq!(descriptor.flags.wmname, "LG3D");
    }

    #[test]
    fn descriptor_json_has_flat_flags() {
        let descriptor = Descriptor::from_config(&TestConfig::default());
        let json = descriptor.to_json().expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["auto_fullscreen"], serde_json::Value::Bool(true));
        assert_eq!(value["focus_on_window_activation"], "smart");
        assert_eq!(value["layouts"][0]["kind"], "Max");
    }
}
