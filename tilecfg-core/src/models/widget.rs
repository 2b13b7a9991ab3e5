//! Status bar composition.
//!
//! Widgets only carry display options; polling and drawing belong to the runtime. The order of
//! `Bar::widgets` is the left-to-right order on screen.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Font settings applied to every widget that leaves them unset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: i32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "sans".to_owned(),
            fontsize: 12,
            padding: 3,
        }
    }
}

/// Display options shared by all widgets. Unset values come from [`WidgetDefaults`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl Style {
    pub fn with_background(background: impl Into<String>) -> Self {
        Self {
            background: Some(background.into()),
            ..Self::default()
        }
    }
}

/// A [`Style`] with the defaults filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedStyle<'a> {
    pub font: &'a str,
    pub fontsize: u32,
    pub padding: i32,
    pub foreground: Option<&'a str>,
    pub background: Option<&'a str>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMethod {
    #[default]
    Border,
    Block,
    Text,
    Line,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GroupBox {
    pub border_width: u32,
    pub highlight_method: HighlightMethod,
    pub rounded: bool,
    pub spacing: u32,
    /// Gradient stops of the highlight.
    pub highlight_color: Vec<String>,
    pub style: Style,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Prompt {
    pub style: Style,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WindowName {
    pub style: Style,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NameTransform {
    #[default]
    None,
    Uppercase,
}

impl NameTransform {
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::None => name.to_owned(),
            Self::Uppercase => name.to_uppercase(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordColors {
    pub background: String,
    pub foreground: String,
}

/// Shows the active key chord (mode).
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Chord {
    pub name_transform: NameTransform,
    /// Colors per chord name.
    pub chords_colors: BTreeMap<String, ChordColors>,
    pub style: Style,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TextBox {
    pub text: String,
    pub style: Style,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CheckUpdates {
    /// `{updates}` is replaced with the number of pending updates.
    pub format: String,
    pub no_update_string: String,
    pub colour_have_updates: String,
    pub colour_no_updates: String,
    pub style: Style,
}

impl Default for CheckUpdates {
    fn default() -> Self {
        Self {
            format: "Updates: {updates}".to_owned(),
            no_update_string: String::new(),
            colour_have_updates: "ffffff".to_owned(),
            colour_no_updates: "ffffff".to_owned(),
            style: Style::default(),
        }
    }
}

/// Disk free space.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Df {
    pub partition: String,
    /// `{p}` partition, `{s}` size, `{f}` free, `{uf}` user free, `{m}` unit, `{r}` ratio used.
    pub format: String,
    /// Only show the widget when free space is below `warn_space`.
    pub visible_on_warn: bool,
    pub warn_space: u32,
    pub padding_x: u32,
    pub style: Style,
}

impl Default for Df {
    fn default() -> Self {
        Self {
            partition: "/".to_owned(),
            format: "{p} ({uf}{m}|{r:.0f}%)".to_owned(),
            visible_on_warn: true,
            warn_space: 2,
            padding_x: 0,
            style: Style::default(),
        }
    }
}

/// Network throughput of one interface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Net {
    pub interface: String,
    pub format: String,
    pub style: Style,
}

impl Default for Net {
    fn default() -> Self {
        Self {
            interface: String::new(),
            format: "{interface}: {down} \u{2193}\u{2191} {up}".to_owned(),
            style: Style::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Clock {
    /// strftime format.
    pub format: String,
    pub style: Style,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            format: "%H:%M".to_owned(),
            style: Style::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Systray {
    pub style: Style,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Widget {
    GroupBox(GroupBox),
    Prompt(Prompt),
    WindowName(WindowName),
    Chord(Chord),
    TextBox(TextBox),
    CheckUpdates(CheckUpdates),
    Df(Df),
    Net(Net),
    Clock(Clock),
    Systray(Systray),
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GroupBox(_) => "GroupBox",
            Self::Prompt(_) => "Prompt",
            Self::WindowName(_) => "WindowName",
            Self::Chord(_) => "Chord",
            Self::TextBox(_) => "TextBox",
            Self::CheckUpdates(_) => "CheckUpdates",
            Self::Df(_) => "Df",
            Self::Net(_) => "Net",
            Self::Clock(_) => "Clock",
            Self::Systray(_) => "Systray",
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Self::GroupBox(w) => &w.style,
            Self::Prompt(w) => &w.style,
            Self::WindowName(w) => &w.style,
            Self::Chord(w) => &w.style,
            Self::TextBox(w) => &w.style,
            Self::CheckUpdates(w) => &w.style,
            Self::Df(w) => &w.style,
            Self::Net(w) => &w.style,
            Self::Clock(w) => &w.style,
            Self::Systray(w) => &w.style,
        }
    }

    pub fn resolved_style<'a>(&'a self, defaults: &'a WidgetDefaults) -> ResolvedStyle<'a> {
        let style = self.style();
        ResolvedStyle {
            font: style.font.as_deref().unwrap_or(&defaults.font),
            fontsize: style.fontsize.unwrap_or(defaults.fontsize),
            padding: style.padding.unwrap_or(defaults.padding),
            foreground: style.foreground.as_deref(),
            background: style.background.as_deref(),
        }
    }

    /// Every color the widget is configured with, including widget specific ones.
    pub fn colors(&self) -> Vec<&str> {
        let style = self.style();
        let mut colors: Vec<&str> = style
            .foreground
            .iter()
            .chain(style.background.iter())
            .map(String::as_str)
            .collect();
        match self {
            Self::GroupBox(w) => colors.extend(w.highlight_color.iter().map(String::as_str)),
            Self::Chord(w) => {
                for c in w.chords_colors.values() {
                    colors.push(&c.background);
                    colors.push(&c.foreground);
                }
            }
            Self::CheckUpdates(w) => {
                colors.push(&w.colour_have_updates);
                colors.push(&w.colour_no_updates);
            }
            _ => {}
        }
        colors
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Bar {
    /// Height in pixels.
    pub size: u32,
    pub opacity: f64,
    pub widgets: Vec<Widget>,
}

impl Default for Bar {
    fn default() -> Self {
        Self {
            size: 24,
            opacity: 1.0,
            widgets: vec![],
        }
    }
}

impl Bar {
    pub fn new(widgets: Vec<Widget>, size: u32) -> Self {
        Self {
            size,
            widgets,
            ..Self::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Bar>,
}
