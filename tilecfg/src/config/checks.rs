use super::{BaseCommand, Config};
use std::collections::HashSet;
use tilecfg_core::models::Widget;

/// Digit keys available for workspace bindings.
const MAX_NUMBERED_GROUPS: usize = 9;

/// `#rrggbb` or `rrggbb`. An empty string means "no color" and is accepted.
pub fn is_valid_color(color: &str) -> bool {
    if color.is_empty() {
        return true;
    }
    let hex = color.strip_prefix('#').unwrap_or(color);
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

impl Config {
    /// Check all keybinds to ensure that required values are provided,
    /// that no key combination is bound twice
    /// and that group commands name an existing group.
    pub fn check_keybinds(&self, verbose: bool) -> Vec<String> {
        let mut returns = Vec::new();
        let mut bindings = HashSet::new();
        let group_names: HashSet<&str> = self.groups.iter().map(|g| g.name.as_str()).collect();

        for keybind in self.all_keybinds() {
            if verbose {
                println!(
                    "Keybind: {} + {} -> {:?} value field is empty: {}",
                    keybind
                        .modifier
                        .as_ref()
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    keybind.key,
                    keybind.command,
                    keybind.value.is_empty()
                );
            }
            let core = match keybind.try_convert_to_core_keybind(&self.modkey) {
                Ok(core) => core,
                Err(err) => {
                    returns.push(format!("{} for keybind {:?}", err, keybind));
                    continue;
                }
            };

            if matches!(
                keybind.command,
                BaseCommand::GroupToScreen | BaseCommand::WindowToGroup
            ) && !group_names.contains(keybind.value.as_str())
            {
                returns.push(format!(
                    "Keybind {:?} refers to unknown group `{}`",
                    keybind, keybind.value
                ));
            }

            let mut modifier: Vec<String> =
                core.modifier.iter().map(|m| m.to_lowercase()).collect();
            modifier.sort_unstable();
            let combo = format!("{} + {}", modifier.join("+"), core.key);
            if !bindings.insert(combo.clone()) {
                returns.push(format!(
                    "Multiple commands bound to key combination {}",
                    combo
                ));
            }
        }
        returns
    }

    pub fn check_groups(&self, verbose: bool) -> Vec<String> {
        let mut returns = Vec::new();
        if verbose {
            println!("Checking {} groups.", self.groups.len());
        }
        if self.groups.is_empty() {
            returns.push("No groups are defined".to_owned());
        }
        let mut seen = HashSet::new();
        for group in &self.groups {
            if !seen.insert(group.name.as_str()) {
                returns.push(format!("Group name `{}` is used twice", group.name));
            }
        }
        if self.groups.len() > MAX_NUMBERED_GROUPS {
            returns.push(format!(
                "Only the first {} of {} groups can be reached with a digit key",
                MAX_NUMBERED_GROUPS,
                self.groups.len()
            ));
        }
        returns
    }

    pub fn check_colors(&self, verbose: bool) -> Vec<String> {
        let mut colors: Vec<(String, &str)> = Vec::new();
        for color in &self.colors {
            colors.push(("palette".to_owned(), color.as_str()));
        }
        for layout in &self.layouts {
            for color in layout.colors() {
                colors.push((format!("layout {}", layout.name()), color));
            }
        }
        colors.push((
            "floating layout".to_owned(),
            self.floating_layout.border_focus.as_str(),
        ));
        colors.push((
            "floating layout".to_owned(),
            self.floating_layout.border_normal.as_str(),
        ));
        for (i, widget) in self.bar_widgets().enumerate() {
            for color in widget.colors() {
                colors.push((format!("widget #{} ({})", i, widget.kind()), color));
            }
        }

        if verbose {
            println!("Checking {} colors.", colors.len());
        }
        colors
            .into_iter()
            .filter(|(_, color)| !is_valid_color(color))
            .map(|(owner, color)| format!("Color `{}` of {} is not valid", color, owner))
            .collect()
    }

    pub fn check_mouse(&self, verbose: bool) -> Vec<String> {
        if verbose {
            println!("Checking {} mouse bindings.", self.mouse.len());
        }
        self.mouse
            .iter()
            .filter(|binding| binding.modifier().is_empty())
            .map(|binding| {
                format!(
                    "Mouse binding on {:?} has no modifier, plain clicks will be captured",
                    binding.button()
                )
            })
            .collect()
    }

    /// Every widget on every bar, left to right, screen by screen.
    pub fn bar_widgets(&self) -> impl Iterator<Item = &Widget> {
        self.screens
            .iter()
            .filter_map(|screen| screen.top.as_ref())
            .flat_map(|bar| bar.widgets.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Keybind;
    use tilecfg_core::models::{Button, Group, MouseBinding};
    use tilecfg_core::MouseCommand;

    #[test]
    fn default_config_is_clean() {
        let config = Config::default();
        assert!(config.check_keybinds(false).is_empty());
        assert!(config.check_groups(false).is_empty());
        assert!(config.check_colors(false).is_empty());
        assert!(config.check_mouse(false).is_empty());
    }

    #[test]
    fn colors() {
        assert!(is_valid_color("#277dc2"));
        assert!(is_valid_color("ffffff"));
        assert!(is_valid_color(""));
        assert!(!is_valid_color("#fff"));
        assert!(!is_valid_color("#gggggg"));
    }

    #[test]
    fn duplicate_binding_is_reported() {
        let mut config = Config::default();
        config
            .keybind
            .push(Keybind::new(&["mod4"], "q", BaseCommand::Shutdown));
        let errors = config.check_keybinds(false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("mod4 + q"));
    }

    #[test]
    fn unknown_group_is_reported() {
        let mut config = Config::default();
        config.keybind.push(
            Keybind::new(&["modkey", "control"], "1", BaseCommand::GroupToScreen).value("nope"),
        );
        let errors = config.check_keybinds(false);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("nope"));
    }

    #[test]
    fn too_many_and_duplicate_groups() {
        let config = Config {
            groups: (0..10).map(|i| Group::new((i % 5).to_string())).collect(),
            ..Config::default()
        };
        let errors = config.check_groups(false);
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn bare_mouse_binding_is_reported() {
        let config = Config {
            mouse: vec![MouseBinding::Click {
                modifier: vec![],
                button: Button::Button2,
                command: MouseCommand::BringToFront,
            }],
            ..Config::default()
        };
        assert_eq!(config.check_mouse(false).len(), 1);
    }
}
