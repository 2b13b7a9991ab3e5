//! Powerline style bar decorations.
use tilecfg_core::models::{Style, TextBox, Widget};

const NERD_FONT: &str = "UbuntuMono Nerd Font";
/// nf-oct-triangle_left
const TRIANGLE_LEFT: &str = "\u{f438}";

/// Triangle drawn in `fg` on `bg`, used to blend two adjacent widget backgrounds.
pub fn separator(bg: &str, fg: &str) -> Widget {
    Widget::TextBox(TextBox {
        text: TRIANGLE_LEFT.to_owned(),
        style: Style {
            font: Some(NERD_FONT.to_owned()),
            fontsize: Some(39),
            padding: Some(-3),
            foreground: Some(fg.to_owned()),
            background: Some(bg.to_owned()),
        },
    })
}

/// A glyph in white on `bg`, placed in front of the widget it labels.
pub fn icon(bg: &str, icon: &str) -> Widget {
    Widget::TextBox(TextBox {
        text: icon.to_owned(),
        style: Style {
            font: Some(NERD_FONT.to_owned()),
            fontsize: Some(16),
            padding: None,
            foreground: Some("ffffff".to_owned()),
            background: Some(bg.to_owned()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_pure() {
        assert_eq!(separator("#06c947", "#1cb850"), separator("#06c947", "#1cb850"));
        assert_ne!(separator("#06c947", "#1cb850"), separator("#1cb850", "#06c947"));
    }

    #[test]
    fn icon_is_pure() {
        assert_eq!(icon("#2aa353", "\u{faa8} "), icon("#2aa353", "\u{faa8} "));
        assert_ne!(icon("#2aa353", "a"), icon("#2aa353", "b"));
    }

    #[test]
    fn separator_colors() {
        match separator("", "#06c947") {
            Widget::TextBox(text_box) => {
                assert_eq!(text_box.text, TRIANGLE_LEFT);
                assert_eq!(text_box.style.foreground.as_deref(), Some("#06c947"));
                assert_eq!(text_box.style.background.as_deref(), Some(""));
                assert_eq!(text_box.style.padding, Some(-3));
            }
            other => panic!("unexpected widget {:?}", other),
        }
    }

    #[test]
    fn icon_uses_default_padding() {
        match icon("#1cb850", "") {
            Widget::TextBox(text_box) => {
                assert_eq!(text_box.style.padding, None);
                assert_eq!(text_box.style.fontsize, Some(16));
                assert_eq!(text_box.style.foreground.as_deref(), Some("ffffff"));
            }
            other => panic!("unexpected widget {:?}", other),
        }
    }
}
