use serde::{Deserialize, Serialize};

/// Flat command name as written in `config.toml`.
///
/// TOML cannot express `tilecfg_core::Command` with its payloads nicely, so keybinds carry the
/// payload in a separate `value` string and are converted when mapped.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
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
    SpawnCmd,
    Spawn,
    GroupToScreen,
    WindowToGroup,
}

impl BaseCommand {
    /// Commands that are meaningless without a `value`.
    pub fn needs_value(self) -> bool {
        matches!(self, Self::Spawn | Self::GroupToScreen | Self::WindowToGroup)
    }
}
