//! Avatar request - the per-render input describing one avatar.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TooltipOptions;

/// Title value meaning "this name was redacted".
///
/// Letter avatars never derive initials from it.
pub const FILTERED_TITLE: &str = "[Filtered]";

/// The render variant of an avatar, discriminated by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AvatarKind {
    /// Remote image looked up by e-mail or hash
    #[serde(rename = "gravatar")]
    Gravatar {
        #[serde(rename = "gravatarId")]
        gravatar_id: String,
    },

    /// Generated initials graphic
    #[serde(rename = "letter", alias = "letter_avatar")]
    Letter {
        #[serde(rename = "letterId")]
        letter_id: String,
    },

    /// Previously uploaded image
    #[serde(rename = "upload")]
    Upload {
        #[serde(rename = "uploadUrl")]
        upload_url: String,
    },
}

impl AvatarKind {
    /// Wire name of the variant tag
    pub fn name(&self) -> &'static str {
        match self {
            AvatarKind::Gravatar { .. } => "gravatar",
            AvatarKind::Letter { .. } => "letter",
            AvatarKind::Upload { .. } => "upload",
        }
    }
}

/// Everything needed to draw one avatar.
///
/// Built fresh for every render pass; the resolver only borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarRequest {
    #[serde(flatten)]
    pub kind: AvatarKind,

    /// Display title; alt text for images, display name for letters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Square edge length in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Circle instead of a rounded square
    #[serde(default)]
    pub round: bool,

    /// Marks a non-final suggestion (dashed border, tinted background)
    #[serde(default)]
    pub suggested: bool,

    /// Enables the tooltip host
    #[serde(default)]
    pub has_tooltip: bool,

    /// Tooltip content; only shown when `has_tooltip` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    #[serde(default)]
    pub tooltip_options: TooltipOptions,

    /// Extra CSS class names for the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Inline style overrides, applied after the computed declarations
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

impl AvatarRequest {
    /// Create a request with every common field at its default
    pub fn new(kind: AvatarKind) -> Self {
        Self {
            kind,
            title: None,
            size: None,
            round: false,
            suggested: false,
            has_tooltip: false,
            tooltip: None,
            tooltip_options: TooltipOptions::default(),
            class_name: None,
            style: BTreeMap::new(),
        }
    }

    pub fn gravatar(gravatar_id: impl Into<String>) -> Self {
        Self::new(AvatarKind::Gravatar {
            gravatar_id: gravatar_id.into(),
        })
    }

    pub fn letter(letter_id: impl Into<String>) -> Self {
        Self::new(AvatarKind::Letter {
            letter_id: letter_id.into(),
        })
    }

    pub fn upload(upload_url: impl Into<String>) -> Self {
        Self::new(AvatarKind::Upload {
            upload_url: upload_url.into(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_suggested(mut self, suggested: bool) -> Self {
        self.suggested = suggested;
        self
    }

    /// Set tooltip content and enable the tooltip host
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self.has_tooltip = true;
        self
    }

    pub fn with_tooltip_options(mut self, options: TooltipOptions) -> Self {
        self.tooltip_options = options;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Whether the title is the redaction sentinel
    pub fn is_title_filtered(&self) -> bool {
        self.title.as_deref() == Some(FILTERED_TITLE)
    }

    /// Parse a single request from JSON
    pub fn from_json(json: &str) -> crate::AvatarResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of requests
    pub fn list_from_json(json: &str) -> crate::AvatarResult<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
