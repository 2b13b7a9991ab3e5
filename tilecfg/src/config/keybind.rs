use super::BaseCommand;
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use tilecfg_core::Command;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl Keybind {
    pub fn new(modifier: &[&str], key: &str, command: BaseCommand) -> Self {
        let modifier = if modifier.is_empty() {
            None
        } else {
            Some(
                modifier
                    .iter()
                    .map(|m| (*m).to_owned())
                    .collect::<Vec<_>>()
                    .into(),
            )
        };
        Self {
            command,
            value: String::default(),
            modifier,
            key: key.to_owned(),
            desc: None,
        }
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Resolve the command and its value into the typed binding the runtime consumes.
    ///
    /// # Errors
    ///
    /// Errors if the command requires a value and none is given.
    pub fn try_convert_to_core_keybind(&self, modkey: &str) -> Result<tilecfg_core::Keybind> {
        if self.command.needs_value() {
            ensure!(
                !self.value.trim().is_empty(),
                "value must not be empty for {:?}",
                self.command
            );
        }
        ensure!(!self.key.is_empty(), "key must not be empty");

        let command = match self.command {
            BaseCommand::LayoutLeft => Command::LayoutLeft,
            BaseCommand::LayoutRight => Command::LayoutRight,
            BaseCommand::LayoutDown => Command::LayoutDown,
            BaseCommand::LayoutUp => Command::LayoutUp,
            BaseCommand::LayoutNext => Command::LayoutNext,
            BaseCommand::ShuffleLeft => Command::ShuffleLeft,
            BaseCommand::ShuffleRight => Command::ShuffleRight,
            BaseCommand::ShuffleDown => Command::ShuffleDown,
            BaseCommand::ShuffleUp => Command::ShuffleUp,
            BaseCommand::GrowLeft => Command::GrowLeft,
            BaseCommand::GrowRight => Command::GrowRight,
            BaseCommand::GrowDown => Command::GrowDown,
            BaseCommand::GrowUp => Command::GrowUp,
            BaseCommand::Normalize => Command::Normalize,
            BaseCommand::ToggleSplit => Command::ToggleSplit,
            BaseCommand::NextLayout => Command::NextLayout,
            BaseCommand::KillWindow => Command::KillWindow,
            BaseCommand::ReloadConfig => Command::ReloadConfig,
            BaseCommand::Shutdown => Command::Shutdown,
            BaseCommand::SpawnCmd => Command::SpawnCmd,
            BaseCommand::Spawn => Command::Spawn(self.value.clone()),
            BaseCommand::GroupToScreen => Command::GroupToScreen(self.value.clone()),
            BaseCommand::WindowToGroup => Command::WindowToGroup(self.value.clone()),
        };

        let mut modifier: Vec<String> = self.modifier.clone().map(Into::into).unwrap_or_default();
        tilecfg_core::models::substitute_modkey(&mut modifier, modkey);

        Ok(tilecfg_core::Keybind {
            modifier,
            key: self.key.clone(),
            command,
            desc: self.desc.clone(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl std::convert::From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{}", modifier),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
