use crate::Command;
use serde::{Deserialize, Serialize};

/// Modifier name replaced with the configured mod key when bindings are mapped.
pub const MODKEY_PLACEHOLDER: &str = "modkey";

/// A key binding as handed to the runtime: modifiers already resolved.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Keybind {
    pub modifier: Vec<String>,
    pub key: String,
    pub command: Command,
    pub desc: Option<String>,
}

impl Keybind {
    /// Whether `modifier` and `key` trigger this binding. Modifier order is irrelevant.
    pub fn is_triggered_by(&self, modifier: &[&str], key: &str) -> bool {
        if self.key != key || self.modifier.len() != modifier.len() {
            return false;
        }
        modifier
            .iter()
            .all(|m| self.modifier.iter().any(|own| own.eq_ignore_ascii_case(m)))
    }
}

/// Replace every occurrence of [`MODKEY_PLACEHOLDER`] in `modifiers` with `modkey`.
pub fn substitute_modkey(modifiers: &mut [String], modkey: &str) {
    for m in modifiers.iter_mut() {
        if m == MODKEY_PLACEHOLDER {
            *m = modkey.to_owned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_only_touches_placeholder() {
        let mut mods = vec!["modkey".to_owned(), "shift".to_owned()];
        substitute_modkey(&mut mods, "mod4");
        assert_eq!(mods, vec!["mod4".to_owned(), "shift".to_owned()]);
    }

    #[test]
    fn trigger_ignores_modifier_order() {
        let bind = Keybind {
            modifier: vec!["mod4".to_owned(), "shift".to_owned()],
            key: "h".to_owned(),
            command: Command::ShuffleLeft,
            desc: None,
        };
        assert!(bind.is_triggered_by(&["shift", "mod4"], "h"));
        assert!(!bind.is_triggered_by(&["mod4"], "h"));
        assert!(!bind.is_triggered_by(&["mod4", "shift"], "l"));
    }
}
