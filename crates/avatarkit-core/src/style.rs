//! Container and inner-element style computation.
//!
//! The container owns size, shape and the "suggested" treatment; the inner
//! renderer element just fills it with a matching corner radius.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::AvatarTheme;

/// Corner radius of a non-round avatar
pub const SQUARE_RADIUS: &str = "3px";

/// Corner radius of a round avatar
pub const ROUND_RADIUS: &str = "50%";

/// Avatar shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Rounded,
}

impl Shape {
    pub fn from_round(round: bool) -> Self {
        if round {
            Shape::Circle
        } else {
            Shape::Rounded
        }
    }

    /// CSS `border-radius` value
    pub fn border_radius(&self) -> &'static str {
        match self {
            Shape::Circle => ROUND_RADIUS,
            Shape::Rounded => SQUARE_RADIUS,
        }
    }
}

/// Dashed outline drawn around suggested avatars
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashedBorder {
    pub width_px: u32,
    pub color: String,
}

impl fmt::Display for DashedBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px dashed {}", self.width_px, self.color)
    }
}

/// Computed presentation of the outer avatar container
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub shape: Shape,
    pub border: Option<DashedBorder>,
    pub background: Option<String>,
    /// Caller overrides, emitted last so they win
    pub overrides: BTreeMap<String, String>,
}

impl ContainerStyle {
    /// Compute the container style for the common request fields.
    ///
    /// A size of zero counts as no size.
    pub fn compute(
        size: Option<u32>,
        round: bool,
        suggested: bool,
        theme: &AvatarTheme,
        overrides: &BTreeMap<String, String>,
    ) -> Self {
        let (border, background) = if suggested {
            (
                Some(DashedBorder {
                    width_px: 1,
                    color: theme.border_neutral_vibrant.clone(),
                }),
                Some(theme.background_primary.clone()),
            )
        } else {
            (None, None)
        };

        let size = size.filter(|px| *px > 0);

        Self {
            width: size,
            height: size,
            shape: Shape::from_round(round),
            border,
            background,
            overrides: overrides.clone(),
        }
    }

    pub fn border_radius(&self) -> &'static str {
        self.shape.border_radius()
    }

    pub fn is_dashed(&self) -> bool {
        self.border.is_some()
    }

    /// Ordered `(property, value)` declarations
    pub fn declarations(&self) -> Vec<(String, String)> {
        let mut decls = vec![("flex-shrink".to_string(), "0".to_string())];

        if let (Some(w), Some(h)) = (self.width, self.height) {
            decls.push(("width".to_string(), format!("{}px", w)));
            decls.push(("height".to_string(), format!("{}px", h)));
        }

        decls.push((
            "border-radius".to_string(),
            self.border_radius().to_string(),
        ));
        decls.push((
            "border".to_string(),
            self.border
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "none".to_string()),
        ));
        decls.push((
            "background-color".to_string(),
            self.background.clone().unwrap_or_else(|| "none".to_string()),
        ));

        for (property, value) in &self.overrides {
            decls.push((property.clone(), value.clone()));
        }

        decls
    }

    /// Inline `style` attribute text
    pub fn to_css(&self) -> String {
        join_declarations(&self.declarations())
    }
}

/// Style for the image or SVG inside the container
pub fn inner_style(round: bool, suggested: bool) -> String {
    let mut decls = vec![
        ("width".to_string(), "100%".to_string()),
        ("height".to_string(), "100%".to_string()),
        (
            "border-radius".to_string(),
            Shape::from_round(round).border_radius().to_string(),
        ),
    ];
    if suggested {
        decls.push(("opacity".to_string(), "0.5".to_string()));
    }
    join_declarations(&decls)
}

fn join_declarations(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(p, v)| format!("{}: {};", p, v))
        .collect::<Vec<_>>()
        .join(" ")
}
