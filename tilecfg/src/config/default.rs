use super::{icon, separator, BaseCommand, Config, Keybind};
use std::collections::BTreeMap;
use tilecfg_core::models::{
    Bar, CheckUpdates, Chord, ChordColors, Clock, Columns, Df, FloatingLayout, GlobalFlags,
    Group, GroupBox, HighlightMethod, Layout, Match, NameTransform, Net, Prompt, Screen, Style,
    Systray, Widget, WidgetDefaults, WindowName, MODKEY_PLACEHOLDER,
};
use tilecfg_core::{models::Button, models::MouseBinding, MouseCommand};

const MOD: &str = MODKEY_PLACEHOLDER;

/// Focus blue, not focus light blue, options green, options green 2, options blue,
/// options blue 2.
const COLORS: [&str; 6] = [
    "#277dc2", "#cfe7fa", "#1cb850", "#2aa353", "#2aa37d", "#1eba89",
];

const GROUP_NAMES: [&str; 8] = [
    " \u{f269}  ",
    " \u{e795}  ",
    " \u{f74a}  ",
    " \u{f121}  ",
    " \u{f419} ",
    " \u{f308}  ",
    " \u{f7e8}  ",
    " \u{f827}  ",
];

impl Default for Config {
    fn default() -> Self {
        let colors: Vec<String> = COLORS.iter().map(|c| (*c).to_owned()).collect();

        Self {
            modkey: "mod4".to_owned(), // win key
            autostart: None,
            keybind: keybinds(),
            groups: GROUP_NAMES.iter().map(|name| Group::new(*name)).collect(),
            layouts: vec![
                Layout::Columns(Columns {
                    margin: 3,
                    border_width: 2,
                    border_focus: colors[4].clone(),
                    border_normal: colors[1].clone(),
                }),
                Layout::Max,
            ],
            floating_layout: FloatingLayout::with_rules(vec![
                Match::wm_class("confirmreset"), // gitk
                Match::wm_class("makebranch"),   // gitk
                Match::wm_class("maketag"),      // gitk
                Match::wm_class("ssh-askpass"),  // ssh-askpass
                Match::title("branchdialog"),    // gitk
                Match::title("pinentry"),        // GPG key password entry
            ]),
            widget_defaults: WidgetDefaults::default(),
            screens: vec![Screen {
                top: Some(Bar {
                    opacity: 0.85,
                    ..Bar::new(bar_widgets(&colors), 25)
                }),
            }],
            mouse: vec![
                MouseBinding::Drag {
                    modifier: vec![MOD.to_owned()],
                    button: Button::Button1,
                    command: MouseCommand::SetPositionFloating,
                    start: MouseCommand::GetPosition,
                },
                MouseBinding::Drag {
                    modifier: vec![MOD.to_owned()],
                    button: Button::Button3,
                    command: MouseCommand::SetSizeFloating,
                    start: MouseCommand::GetSize,
                },
                MouseBinding::Click {
                    modifier: vec![MOD.to_owned()],
                    button: Button::Button2,
                    command: MouseCommand::BringToFront,
                },
            ],
            flags: GlobalFlags::default(),
            colors,
        }
    }
}

// A flat table is the clearest way to read these.
#[allow(clippy::too_many_lines)]
fn keybinds() -> Vec<Keybind> {
    use BaseCommand::{
        GrowDown, GrowLeft, GrowRight, GrowUp, KillWindow, LayoutDown, LayoutLeft, LayoutNext,
        LayoutRight, LayoutUp, NextLayout, Normalize, ReloadConfig, ShuffleDown, ShuffleLeft,
        ShuffleRight, ShuffleUp, Shutdown, Spawn, SpawnCmd, ToggleSplit,
    };
    vec![
        Keybind::new(&[MOD], "h", LayoutLeft).desc("Move focus to left"),
        Keybind::new(&[MOD], "l", LayoutRight).desc("Move focus to right"),
        Keybind::new(&[MOD], "j", LayoutDown).desc("Move focus down"),
        Keybind::new(&[MOD], "k", LayoutUp).desc("Move focus up"),
        Keybind::new(&[MOD], "space", LayoutNext).desc("Move window focus to other window"),
        // Moving out of range in the columns layout creates a new column.
        Keybind::new(&[MOD, "shift"], "h", ShuffleLeft).desc("Move window to the left"),
        Keybind::new(&[MOD, "shift"], "l", ShuffleRight).desc("Move window to the right"),
        Keybind::new(&[MOD, "shift"], "j", ShuffleDown).desc("Move window down"),
        Keybind::new(&[MOD, "shift"], "k", ShuffleUp).desc("Move window up"),
        // Growing towards the screen edge shrinks a window that already touches it.
        Keybind::new(&[MOD, "control"], "h", GrowLeft).desc("Grow window to the left"),
        Keybind::new(&[MOD, "control"], "l", GrowRight).desc("Grow window to the right"),
        Keybind::new(&[MOD, "control"], "j", GrowDown).desc("Grow window down"),
        Keybind::new(&[MOD, "control"], "k", GrowUp).desc("Grow window up"),
        Keybind::new(&[MOD], "n", Normalize).desc("Reset all window sizes"),
        Keybind::new(&[MOD, "shift"], "Return", ToggleSplit)
            .desc("Toggle between split and unsplit sides of stack"),
        Keybind::new(&[MOD], "Return", Spawn)
            .value("alacritty")
            .desc("Launch terminal"),
        Keybind::new(&[MOD], "Tab", NextLayout).desc("Toggle between layouts"),
        Keybind::new(&[MOD], "q", KillWindow).desc("Kill focused window"),
        Keybind::new(&[MOD, "control"], "r", ReloadConfig).desc("Reload the config"),
        Keybind::new(&[MOD, "control"], "q", Shutdown).desc("Shutdown the window manager"),
        Keybind::new(&[MOD], "d", SpawnCmd).desc("Spawn a command using a prompt widget"),
        Keybind::new(&[MOD, "shift"], "d", SpawnCmd)
            .desc("Spawn a command using a prompt widget"),
        // Browser
        Keybind::new(&[MOD], "b", Spawn)
            .value("firefox")
            .desc("Spawn a firefox browser"),
        // Sound
        Keybind::new(&[], "XF86AudioMute", Spawn).value("amixer -q set Master toggle"),
        Keybind::new(&[], "XF86AudioLowerVolume", Spawn)
            .value("amixer -c 0 sset Master 1- unmute"),
        Keybind::new(&[], "XF86AudioRaiseVolume", Spawn)
            .value("amixer -c 0 sset Master 1+ unmute"),
        // Brightness
        Keybind::new(&[], "XF86MonBrightnessUp", Spawn).value("brightnessctl set +5%"),
        Keybind::new(&[], "XF86MonBrightnessDown", Spawn).value("brightnessctl set 5%-"),
        // Screenshots
        Keybind::new(&[MOD], "s", Spawn)
            .value("scrot")
            .desc("Launch scrot to take screenshots"),
        Keybind::new(&[MOD, "shift"], "s", Spawn)
            .value("scrot -s")
            .desc("Launch scrot to take screenshots for selected area"),
        // Screen lock (temporary)
        Keybind::new(&[MOD], "x", Spawn)
            .value("dm-tool switch-to-greeter")
            .desc("Launches a screen locker"),
    ]
}

fn bar_widgets(colors: &[String]) -> Vec<Widget> {
    let mut chords_colors = BTreeMap::new();
    chords_colors.insert(
        "launch".to_owned(),
        ChordColors {
            background: "#ff0000".to_owned(),
            foreground: "#ffffff".to_owned(),
        },
    );

    vec![
        Widget::GroupBox(GroupBox {
            border_width: 1,
            highlight_method: HighlightMethod::Line,
            rounded: true,
            spacing: 3,
            highlight_color: vec![colors[4].clone(), colors[4].clone()],
            style: Style {
                font: Some("UbuntuMono Nerd Font".to_owned()),
                fontsize: Some(16),
                ..Style::with_background("#171717")
            },
        }),
        Widget::Prompt(Prompt::default()),
        Widget::WindowName(WindowName {
            style: Style {
                fontsize: Some(0),
                ..Style::default()
            },
        }),
        Widget::Chord(Chord {
            name_transform: NameTransform::Uppercase,
            chords_colors,
            style: Style::default(),
        }),
        separator("", "#06c947"),
        Widget::CheckUpdates(CheckUpdates {
            format: "Updates: {updates}".to_owned(),
            no_update_string: "\u{f546}".to_owned(),
            colour_have_updates: "#e3051b".to_owned(),
            colour_no_updates: "#ffffff".to_owned(),
            style: Style {
                fontsize: Some(24),
                ..Style::with_background("#06c947")
            },
        }),
        separator("#06c947", &colors[2]),
        icon(&colors[2], "\u{f7c9} "),
        Widget::Df(Df {
            format: "{uf} {m} - {r:.0f}%".to_owned(),
            visible_on_warn: false,
            padding_x: 15,
            style: Style {
                fontsize: Some(12),
                ..Style::with_background("#1cb850")
            },
            ..Df::default()
        }),
        separator(&colors[2], &colors[3]),
        icon(&colors[3], "\u{faa8} "),
        Widget::Net(Net {
            interface: "wlp2s0".to_owned(),
            format: "{down} \u{2193}\u{2191} {up}  ".to_owned(),
            style: Style::with_background(colors[3].clone()),
        }),
        separator(&colors[3], &colors[5]),
        icon(&colors[5], "\u{f073} "),
        Widget::Clock(Clock {
            format: "%d/%m/%Y |".to_owned(),
            style: Style {
                padding: Some(5),
                ..Style::with_background(colors[5].clone())
            },
        }),
        icon(&colors[5], "\u{f64f} "),
        Widget::Clock(Clock {
            format: "%I:%M:%S %p ".to_owned(),
            style: Style {
                padding: Some(5),
                ..Style::with_background(colors[5].clone())
            },
        }),
        separator(&colors[5], &colors[4]),
        Widget::Systray(Systray {
            style: Style::with_background(colors[4].clone()),
        }),
    ]
}

#[cfg(test)]
mod tests {
    use crate::Config;
    use tilecfg_core::models::Widget;
    use tilecfg_core::Config as _;

    #[test]
    fn serialize_default_config() {
        let config = Config::default();
        assert!(toml::to_string(&config).is_ok());
    }

    #[test]
    fn default_binding_counts() {
        let config = Config::default();
        assert_eq!(config.keybind.len(), 31);
        assert_eq!(config.groups.len(), 8);
        assert_eq!(config.all_keybinds().len(), 31 + 2 * 8);
        assert_eq!(config.mapped_bindings().len(), 31 + 2 * 8);
    }

    #[test]
    fn default_bar_order() {
        let config = Config::default();
        let bar = config.screens[0].top.as_ref().unwrap();
        let kinds: Vec<&str> = bar.widgets.iter().map(Widget::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "GroupBox",
                "Prompt",
                "WindowName",
                "Chord",
                "TextBox",
                "CheckUpdates",
                "TextBox",
                "TextBox",
                "Df",
                "TextBox",
                "TextBox",
                "Net",
                "TextBox",
                "TextBox",
                "Clock",
                "TextBox",
                "Clock",
                "TextBox",
                "Systray",
            ]
        );
        assert_eq!(bar.size, 25);
        assert!((bar.opacity - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn default_columns_use_palette() {
        let config = Config::default();
        assert_eq!(config.layouts[0].colors(), vec!["#2aa37d", "#cfe7fa"]);
        assert_eq!(config.layouts[1].name(), "max");
    }

    #[test]
    fn default_flags() {
        let flags = Config::default().flags;
        assert!(flags.follow_mouse_focus);
        assert!(!flags.bring_front_click);
        assert!(!flags.cursor_warp);
        assert!(flags.auto_fullscreen);
        assert_eq!(flags.wmname, "LG3D");
    }
}
