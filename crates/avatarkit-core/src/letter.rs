//! Letter avatar synthesis
//!
//! Deterministic initials + background colour derived from an identifier
//! and display name. The same graphic is emitted as Dioxus markup by the UI
//! crate and as standalone SVG by [`LetterGraphic::to_svg`].

use serde::Serialize;

/// Background palette, indexed by identifier hash
pub const LETTER_COLORS: [&str; 12] = [
    "#4674ca", // blue
    "#315cac", // blue_dark
    "#57be8c", // green
    "#3fa372", // green_dark
    "#f9a66d", // yellow_orange
    "#ec5e44", // red
    "#e63717", // red_dark
    "#f868bc", // pink
    "#6c5fc7", // purple
    "#4e3fb4", // purple_dark
    "#57b1be", // teal
    "#847a8c", // gray
];

/// Edge length of the SVG view box
pub const VIEW_BOX_SIZE: u32 = 120;
pub const CORNER_RADIUS: u32 = 15;
pub const FONT_SIZE: u32 = 65;
pub const TEXT_COLOR: &str = "#FFFFFF";

/// Initials shown when no usable display name exists
pub const FALLBACK_INITIAL: &str = "?";

fn hash_identifier(identifier: &str) -> u64 {
    identifier.encode_utf16().map(u64::from).sum()
}

/// Palette colour for an identifier
pub fn letter_color(identifier: Option<&str>) -> &'static str {
    match identifier {
        Some(id) if !id.is_empty() => {
            LETTER_COLORS[(hash_identifier(id) % LETTER_COLORS.len() as u64) as usize]
        }
        _ => LETTER_COLORS[LETTER_COLORS.len() - 1],
    }
}

/// Initials of the first and last word, upper-cased.
///
/// Words are split on whitespace and `@`, so e-mail addresses yield the
/// first letter of the local part and of the domain.
pub fn initials(display_name: Option<&str>) -> String {
    let name = display_name.map(str::trim).unwrap_or_default();
    let words: Vec<&str> = name
        .split(|c: char| c.is_whitespace() || c == '@')
        .filter(|w| !w.is_empty())
        .collect();

    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    match first {
        Some(first) => first
            .to_uppercase()
            .chain(last.into_iter().flat_map(char::to_uppercase))
            .collect(),
        None => FALLBACK_INITIAL.to_string(),
    }
}

/// Everything needed to draw a letter avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterGraphic {
    pub initials: String,
    pub color: &'static str,
}

impl LetterGraphic {
    pub fn new(identifier: Option<&str>, display_name: Option<&str>) -> Self {
        Self {
            initials: initials(display_name),
            color: letter_color(identifier),
        }
    }

    /// `viewBox` attribute value
    pub fn view_box() -> String {
        format!("0 0 {} {}", VIEW_BOX_SIZE, VIEW_BOX_SIZE)
    }

    /// Standalone SVG document
    pub fn to_svg(&self, style: &str) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view_box}" style="{style}">"#,
                r#"<rect x="0" y="0" width="{size}" height="{size}" rx="{radius}" ry="{radius}" fill="{color}"/>"#,
                r#"<text x="50%" y="50%" font-size="{font}" style="dominant-baseline: central" text-anchor="middle" fill="{text}">{initials}</text>"#,
                "</svg>"
            ),
            view_box = Self::view_box(),
            style = escape_xml(style),
            size = VIEW_BOX_SIZE,
            radius = CORNER_RADIUS,
            color = self.color,
            font = FONT_SIZE,
            text = TEXT_COLOR,
            initials = escape_xml(&self.initials),
        )
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
