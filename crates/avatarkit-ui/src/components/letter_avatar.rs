//! Letter Avatar
//!
//! Initials on a coloured rounded square, drawn as inline SVG.

use avatarkit_core::letter::{CORNER_RADIUS, FONT_SIZE, TEXT_COLOR, VIEW_BOX_SIZE};
use avatarkit_core::{LetterGraphic, LetterProps};
use dioxus::prelude::*;

/// Accessible label: the display name, else the initials
pub fn letter_label(letter: &LetterProps, graphic: &LetterGraphic) -> String {
    match letter.display_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => graphic.initials.clone(),
    }
}

#[component]
pub fn LetterAvatar(letter: LetterProps) -> Element {
    let graphic = letter.graphic();
    let label = letter_label(&letter, &graphic);
    let style = avatarkit_core::style::inner_style(letter.round, letter.suggested);
    let view_box = LetterGraphic::view_box();

    rsx! {
        svg {
            class: "avatar__letter",
            view_box: "{view_box}",
            style: "{style}",
            role: "img",
            "aria-label": "{label}",
            rect {
                x: "0",
                y: "0",
                width: "{VIEW_BOX_SIZE}",
                height: "{VIEW_BOX_SIZE}",
                rx: "{CORNER_RADIUS}",
                ry: "{CORNER_RADIUS}",
                fill: "{graphic.color}",
            }
            text {
                x: "50%",
                y: "50%",
                font_size: "{FONT_SIZE}",
                style: "dominant-baseline: central",
                text_anchor: "middle",
                fill: TEXT_COLOR,
                "{graphic.initials}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(display_name: Option<&str>) -> LetterProps {
        LetterProps {
            identifier: "u-1".to_string(),
            round: false,
            suggested: false,
            display_name: display_name.map(str::to_string),
        }
    }

    #[test]
    fn label_prefers_display_name() {
        let letter = props(Some("Jane Doe"));
        assert_eq!(letter_label(&letter, &letter.graphic()), "Jane Doe");
    }

    #[test]
    fn label_falls_back_to_initials() {
        let letter = props(None);
        assert_eq!(letter_label(&letter, &letter.graphic()), "?");

        let blank = props(Some("  "));
        assert_eq!(letter_label(&blank, &blank.graphic()), "?");
    }
}
