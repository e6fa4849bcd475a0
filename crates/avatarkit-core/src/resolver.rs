//! Avatar resolver
//!
//! Turns an [`AvatarRequest`] into a [`ResolvedAvatar`]: the container
//! presentation shared by every variant, exactly one renderer call, and the
//! tooltip host wrapped around both.
//!
//! ```
//! use avatarkit_core::{AvatarRequest, AvatarResolver, RendererCall};
//!
//! let resolver = AvatarResolver::default();
//! let resolved = resolver.resolve(
//!     &AvatarRequest::upload("https://x/y.png").with_round(true).with_size(40),
//! );
//!
//! assert_eq!(resolved.container.style.width, Some(40));
//! assert!(matches!(resolved.renderer, RendererCall::Image(_)));
//! ```

use serde::Serialize;

use crate::config::AvatarConfig;
use crate::gravatar::{gravatar_url, DEFAULT_REMOTE_SIZE};
use crate::letter::{LetterGraphic, FALLBACK_INITIAL};
use crate::style::{inner_style, ContainerStyle};
use crate::types::{AvatarKind, AvatarRequest, TooltipHost};

/// Image renderer input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProps {
    pub src: String,
    pub round: bool,
    pub alt: String,
    pub suggested: bool,
    /// Letter avatar to show if the image fails to load
    pub fallback: Option<LetterProps>,
}

/// Gravatar renderer input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GravatarProps {
    pub gravatar_id: String,
    pub round: bool,
    pub suggested: bool,
    pub title: String,
    pub remote_size: u32,
    pub url: String,
}

/// Letter renderer input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterProps {
    pub identifier: String,
    pub round: bool,
    pub suggested: bool,
    pub display_name: Option<String>,
}

impl LetterProps {
    pub fn graphic(&self) -> LetterGraphic {
        LetterGraphic::new(Some(&self.identifier), self.display_name.as_deref())
    }

    /// Standalone SVG for this letter avatar
    pub fn to_svg(&self) -> String {
        self.graphic().to_svg(&inner_style(self.round, self.suggested))
    }
}

/// The one renderer a request dispatches to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "renderer", rename_all = "lowercase")]
pub enum RendererCall {
    Image(ImageProps),
    Gravatar(GravatarProps),
    Letter(LetterProps),
}

impl RendererCall {
    pub fn round(&self) -> bool {
        match self {
            RendererCall::Image(p) => p.round,
            RendererCall::Gravatar(p) => p.round,
            RendererCall::Letter(p) => p.round,
        }
    }

    pub fn suggested(&self) -> bool {
        match self {
            RendererCall::Image(p) => p.suggested,
            RendererCall::Gravatar(p) => p.suggested,
            RendererCall::Letter(p) => p.suggested,
        }
    }

    /// Style for the renderer's element inside the container
    pub fn inner_style(&self) -> String {
        inner_style(self.round(), self.suggested())
    }
}

/// Outer `span` of the avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPresentation {
    pub class: String,
    pub title: Option<String>,
    /// `data-test-id` value, `<variant>-avatar`
    pub test_id: String,
    pub style: ContainerStyle,
}

/// Complete render plan for one avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAvatar {
    pub container: ContainerPresentation,
    pub renderer: RendererCall,
    pub tooltip: TooltipHost,
}

/// Selects a renderer and computes container presentation for requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarResolver {
    config: AvatarConfig,
}

impl AvatarResolver {
    pub fn new(config: AvatarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    /// Resolve a request into its render plan. Pure and infallible.
    pub fn resolve(&self, request: &AvatarRequest) -> ResolvedAvatar {
        tracing::debug!(
            kind = request.kind.name(),
            size = ?request.size,
            round = request.round,
            suggested = request.suggested,
            "Resolving avatar"
        );

        ResolvedAvatar {
            container: self.container(request),
            renderer: self.renderer(request),
            tooltip: TooltipHost::new(
                request.tooltip.clone(),
                request.has_tooltip,
                &request.tooltip_options,
            ),
        }
    }

    fn container(&self, request: &AvatarRequest) -> ContainerPresentation {
        let class = match request.class_name.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => format!("avatar {}", extra),
            _ => "avatar".to_string(),
        };

        ContainerPresentation {
            class,
            title: request.title.clone(),
            test_id: format!("{}-avatar", request.kind.name()),
            style: ContainerStyle::compute(
                request.size,
                request.round,
                request.suggested,
                &self.config.theme,
                &request.style,
            ),
        }
    }

    fn renderer(&self, request: &AvatarRequest) -> RendererCall {
        let round = request.round;
        let suggested = request.suggested;
        let title = request.title.clone().unwrap_or_default();

        match &request.kind {
            AvatarKind::Upload { upload_url } => {
                let fallback = self.config.fallback_to_letter.then(|| LetterProps {
                    identifier: upload_url.clone(),
                    round,
                    suggested,
                    display_name: letter_display_name(request),
                });
                RendererCall::Image(ImageProps {
                    src: upload_url.clone(),
                    round,
                    alt: title,
                    suggested,
                    fallback,
                })
            }
            AvatarKind::Gravatar { gravatar_id } => RendererCall::Gravatar(GravatarProps {
                gravatar_id: gravatar_id.clone(),
                round,
                suggested,
                title,
                remote_size: DEFAULT_REMOTE_SIZE,
                url: gravatar_url(&self.config, gravatar_id, DEFAULT_REMOTE_SIZE),
            }),
            AvatarKind::Letter { letter_id } => RendererCall::Letter(LetterProps {
                identifier: letter_id.clone(),
                round,
                suggested,
                display_name: letter_display_name(request),
            }),
        }
    }
}

/// Display name for a letter avatar, with redacted titles replaced
fn letter_display_name(request: &AvatarRequest) -> Option<String> {
    if request.is_title_filtered() {
        Some(FALLBACK_INITIAL.to_string())
    } else {
        request.title.clone()
    }
}
