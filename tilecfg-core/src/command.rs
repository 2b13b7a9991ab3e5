use serde::{Deserialize, Serialize};

/// An action the runtime performs when a key binding fires.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Command {
    LayoutLeft,
    LayoutRight,
    LayoutDown,
    LayoutUp,
    LayoutNext,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    Normalize,
    ToggleSplit,
    NextLayout,
    KillWindow,
    ReloadConfig,
    Shutdown,
    /// Open the prompt widget to run a command.
    SpawnCmd,
    Spawn(String),
    /// Show the named group on the current screen.
    GroupToScreen(String),
    /// Send the focused window to the named group.
    WindowToGroup(String),
}

impl Command {
    /// The group a command addresses, if it addresses one.
    pub fn group_target(&self) -> Option<&str> {
        match self {
            Self::GroupToScreen(group) | Self::WindowToGroup(group) => Some(group),
            _ => None,
        }
    }
}

/// An action bound to a mouse button.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MouseCommand {
    SetPositionFloating,
    GetPosition,
    SetSizeFloating,
    GetSize,
    BringToFront,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_group_commands_have_a_target() {
        assert_eq!(
            Command::GroupToScreen("web".to_owned()).group_target(),
            Some("web")
        );
        assert_eq!(
            Command::WindowToGroup("dev".to_owned()).group_target(),
            Some("dev")
        );
        assert_eq!(Command::Spawn("firefox".to_owned()).group_target(), None);
        assert_eq!(Command::NextLayout.group_target(), None);
    }
}
