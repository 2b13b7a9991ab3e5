//! `tilecfg` general configuration

mod checks;
mod decorations;
mod default;
mod keybind;
mod workspace_keys;

pub use self::checks::is_valid_color;
pub use self::decorations::{icon, separator};
pub use self::keybind::{Keybind, Modifier};
pub use self::workspace_keys::group_bindings;

use super::BaseCommand;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tilecfg_core::{
    child_process::autostart_path,
    models::{
        substitute_modkey, FloatingLayout, GlobalFlags, Group, Layout, MouseBinding, Screen,
        WidgetDefaults,
    },
};
use xdg::BaseDirectories;

const CONFIG_FILE: &str = "config.toml";

/// General configuration
///
/// Workspace bindings are not stored in `keybind`; they are derived from `groups` whenever the
/// bindings are mapped, so they always follow the group order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    /// Palette the shipped configuration draws its colors from.
    pub colors: Vec<String>,
    /// Overrides `<config dir>/autostart.sh`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autostart: Option<PathBuf>,
    // NOTE: plain values must stay above this line, TOML writes tables last.
    pub keybind: Vec<Keybind>,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub flags: GlobalFlags,
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| log::error!("ERROR LOADING CONFIG: {:?}", err))
        .unwrap_or_default()
}

/// Path of `config.toml`, creating the config directory if needed.
///
/// # Errors
///
/// Errors if the xdg base directories cannot be determined or the directory cannot be created.
pub fn config_file_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tilecfg")?;
    Ok(path.place_config_file(CONFIG_FILE)?)
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.toml, if config.toml cannot be read (access writes, malformed file,
/// etc.).
/// Function can also error from inability to save config.toml (if it is the first time running
/// `tilecfg`).
fn load_from_file() -> Result<Config> {
    let config_filename = config_file_path()?;
    if Path::new(&config_filename).exists() {
        log::debug!("Config file '{}' found.", config_filename.display());
        load_from_path(&config_filename)
    } else {
        log::debug!("Config file not found. Writing default config file.");
        let config = Config::default();
        config.write_to(&config_filename)?;
        Ok(config)
    }
}

/// Load a configuration from an explicit file. Missing fields take their default value.
///
/// # Errors
///
/// Errors if the file cannot be read or is not valid TOML for a [`Config`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

impl Config {
    /// Hand written bindings followed by the bindings derived from `groups`.
    pub fn all_keybinds(&self) -> Vec<Keybind> {
        let mut keybinds = self.keybind.clone();
        keybinds.extend(group_bindings(&self.groups));
        keybinds
    }

    /// Serialize to TOML.
    ///
    /// # Errors
    ///
    /// Errors if a value cannot be represented in TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Write the configuration, with a short header, to `path`.
    ///
    /// # Errors
    ///
    /// Errors on serialization or filesystem failure.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let header = "# tilecfg configuration\n\
            # Workspace bindings (modkey + N, modkey + shift + N) are generated from `groups`.\n\n";
        fs::write(path, format!("{}{}", header, self.to_toml()?))?;
        Ok(())
    }
}

impl tilecfg_core::Config for Config {
    fn mapped_bindings(&self) -> Vec<tilecfg_core::Keybind> {
        self.all_keybinds()
            .into_iter()
            .filter_map(
                |keybind| match keybind.try_convert_to_core_keybind(&self.modkey) {
                    Ok(internal_keybind) => Some(internal_keybind),
                    Err(err) => {
                        log::error!("Invalid key binding: {}\n{:?}", err, keybind);
                        None
                    }
                },
            )
            .collect()
    }

    fn mapped_mouse(&self) -> Vec<MouseBinding> {
        self.mouse
            .iter()
            .cloned()
            .map(|mut binding| {
                substitute_modkey(binding.modifier_mut(), &self.modkey);
                binding
            })
            .collect()
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
        if let Some(path) = &self.autostart {
            return Some(path.clone());
        }
        match autostart_path() {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("No config directory for the autostart script: {}", err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecfg_core::{Command, Config as _, Descriptor};

    #[test]
    fn config_serializes_to_valid_toml_test() {
        let config = Config::default();
        let toml = config.to_toml();
        assert!(toml.is_ok(), "Could not serialize default config");

        let toml_config = toml::from_str::<Config>(&toml.unwrap());
        assert!(toml_config.is_ok(), "Could not deserialize default config");
        assert_eq!(toml_config.unwrap(), config);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "modkey = \"mod1\"\n\n[[groups]]\nname = \"a\"\n\n[[groups]]\nname = \"b\"\n",
        )
        .unwrap();
        let config = load_from_path(&path).unwrap();
        assert_eq!(config.modkey, "mod1");
        assert_eq!(config.groups, vec![Group::new("a"), Group::new("b")]);
        assert_eq!(config.keybind, Config::default().keybind);
        assert_eq!(config.flags, GlobalFlags::default());
    }

    #[test]
    fn written_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config::default();
        config.write_to(&path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "groups = 3").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn group_bindings_follow_overridden_groups() {
        let config = Config {
            groups: vec![Group::new("one"), Group::new("two"), Group::new("three")],
            ..Config::default()
        };
        let mapped = config.mapped_bindings();
        let targets: Vec<&str> = mapped
            .iter()
            .filter_map(|bind| bind.command.group_target())
            .collect();
        assert_eq!(targets, vec!["one", "one", "two", "two", "three", "three"]);
    }

    #[test]
    fn modkey_is_substituted() {
        let config = Config {
            modkey: "mod1".to_owned(),
            ..Config::default()
        };
        let mapped = config.mapped_bindings();
        assert!(mapped.iter().all(|bind| !bind.modifier.contains(&"modkey".to_owned())));
        let kill = mapped
            .iter()
            .find(|bind| bind.command == Command::KillWindow)
            .unwrap();
        assert_eq!(kill.modifier, vec!["mod1".to_owned()]);
        assert!(config
            .mapped_mouse()
            .iter()
            .all(|binding| binding.modifier() == ["mod1".to_owned()]));
    }

    #[test]
    fn invalid_bindings_are_dropped() {
        let mut config = Config::default();
        config
            .keybind
            .push(Keybind::new(&["modkey"], "e", BaseCommand::Spawn));
        assert_eq!(
            config.mapped_bindings().len(),
            Config::default().mapped_bindings().len()
        );
    }

    #[test]
    fn explicit_autostart_wins() {
        let config = Config {
            autostart: Some(PathBuf::from("/opt/start.sh")),
            ..Config::default()
        };
        assert_eq!(
            config.autostart_script(),
            Some(PathBuf::from("/opt/start.sh"))
        );
        let descriptor = Descriptor::from_config(&config);
        assert_eq!(descriptor.autostart, Some(PathBuf::from("/opt/start.sh")));
    }
}
