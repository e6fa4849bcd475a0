//! Tooltip configuration and the resolved tooltip host.

use serde::{Deserialize, Serialize};

/// Where the tooltip appears relative to the avatar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPosition {
    /// Returns the CSS modifier class for this position
    pub fn class(&self) -> &'static str {
        match self {
            TooltipPosition::Top => "tooltip--top",
            TooltipPosition::Bottom => "tooltip--bottom",
            TooltipPosition::Left => "tooltip--left",
            TooltipPosition::Right => "tooltip--right",
        }
    }
}

/// Caller overrides for the tooltip host.
///
/// Content and children are absent: the avatar always supplies those
/// itself. Wrapper skipping is not overridable either, so the avatar
/// container stays the outermost element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipOptions {
    pub position: TooltipPosition,

    /// Hover delay before showing, in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,

    /// Keep the tooltip open while the pointer is over it
    pub is_hoverable: bool,

    /// Show regardless of hover state
    pub force_visible: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,

    /// Overrides the `!has_tooltip` default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Fully resolved tooltip host around an avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipHost {
    /// Content shown in the bubble
    pub title: Option<String>,
    /// Inert passthrough when set
    pub disabled: bool,
    pub position: TooltipPosition,
    pub delay: u32,
    pub is_hoverable: bool,
    pub force_visible: bool,
    pub max_width: Option<u32>,
    /// Always set; the host never adds its own layout box
    pub skip_wrapper: bool,
}

impl TooltipHost {
    /// Default hover delay in milliseconds
    pub const DEFAULT_DELAY: u32 = 50;

    /// Merge caller options over the host defaults
    pub fn new(title: Option<String>, has_tooltip: bool, options: &TooltipOptions) -> Self {
        Self {
            title,
            disabled: options.disabled.unwrap_or(!has_tooltip),
            position: options.position,
            delay: options.delay.unwrap_or(Self::DEFAULT_DELAY),
            is_hoverable: options.is_hoverable,
            force_visible: options.force_visible,
            max_width: options.max_width,
            skip_wrapper: true,
        }
    }

    /// Whether the bubble should be drawn for the given hover state
    pub fn is_visible(&self, hovered: bool) -> bool {
        !self.disabled && self.title.is_some() && (hovered || self.force_visible)
    }
}
