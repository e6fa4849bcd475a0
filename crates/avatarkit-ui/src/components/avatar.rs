//! Avatar
//!
//! Entry component: resolves an [`AvatarRequest`] with the contextual
//! resolver, draws the container and dispatches to one renderer. The
//! container doubles as the tooltip host, so it is always the outermost
//! element and caller attributes land on it.

use avatarkit_core::{AvatarRequest, RendererCall};
use dioxus::prelude::*;

use super::tooltip::{begin_hover, end_hover, HoverTracker, TooltipBubble};
use super::{Gravatar, ImageAvatar, LetterAvatar};
use crate::context::use_avatar_resolver;

/// Properties for the Avatar component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// What to draw
    pub request: AvatarRequest,
    /// Rich tooltip content; overrides `request.tooltip`
    #[props(default)]
    pub tooltip: Option<Element>,
    /// Extra attributes spread onto the outer container
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Styled avatar for any of the three variants
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Avatar {
///         request: AvatarRequest::letter(user.id.clone())
///             .with_title(user.name.clone())
///             .with_size(32)
///             .with_round(true)
///             .with_tooltip(user.name.clone()),
///     }
/// }
/// ```
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let hover = use_signal(HoverTracker::default);
    let resolver = use_avatar_resolver();
    let plan = resolver.resolve(&props.request);
    let container = plan.container;
    let css = container.style.to_css();
    let host = plan.tooltip;
    let enter_host = host.clone();
    let inert = host.disabled;

    rsx! {
        span {
            class: "{container.class}",
            style: "{css}",
            title: container.title.clone(),
            "data-test-id": "{container.test_id}",
            onmouseenter: move |_| {
                if !inert {
                    begin_hover(hover, &enter_host);
                }
            },
            onmouseleave: move |_| {
                if !inert {
                    end_hover(hover);
                }
            },
            ..props.attributes,
            AvatarRenderer { call: plan.renderer }
            TooltipBubble {
                host,
                content: props.tooltip.clone(),
                hovered: hover.read().is_shown(),
            }
        }
    }
}

/// Renders exactly one of the three renderer components
#[component]
pub fn AvatarRenderer(call: RendererCall) -> Element {
    match call {
        RendererCall::Image(image) => rsx! {
            ImageAvatar { image }
        },
        RendererCall::Gravatar(gravatar) => rsx! {
            Gravatar { gravatar }
        },
        RendererCall::Letter(letter) => rsx! {
            LetterAvatar { letter }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarkit_core::TooltipOptions;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Opening tag of the outermost element
    fn outer_tag(html: &str) -> &str {
        let end = html.find('>').map_or(html.len(), |i| i + 1);
        &html[..end]
    }

    fn forced() -> TooltipOptions {
        TooltipOptions {
            force_visible: true,
            ..Default::default()
        }
    }

    fn letter_app() -> Element {
        rsx! {
            Avatar {
                request: AvatarRequest::letter("u-1")
                    .with_title("Jane Doe")
                    .with_size(40),
            }
        }
    }

    fn id_app() -> Element {
        rsx! {
            Avatar {
                request: AvatarRequest::letter("u-1")
                    .with_title("Jane Doe")
                    .with_tooltip("Jane Doe")
                    .with_tooltip_options(forced()),
                id: "owner-avatar",
            }
        }
    }

    fn forced_without_flag_app() -> Element {
        let mut request = AvatarRequest::letter("u-1")
            .with_title("Jane Doe")
            .with_tooltip_options(forced());
        request.tooltip = Some("Jane Doe".to_string());
        rsx! {
            Avatar { request }
        }
    }

    fn mixed_app() -> Element {
        rsx! {
            Avatar { request: AvatarRequest::gravatar("jane@example.com").with_suggested(true) }
            Avatar { request: AvatarRequest::upload("https://x/y.png").with_round(true) }
            Avatar { request: AvatarRequest::letter("u-2").with_title("[Filtered]") }
        }
    }

    #[test]
    fn letter_container_is_outermost_and_sized() {
        let html = render(letter_app);
        let outer = outer_tag(&html);
        assert!(outer.starts_with("<span"), "{html}");
        assert!(outer.contains("data-test-id=\"letter-avatar\""), "{outer}");
        assert!(outer.contains("width: 40px"), "{outer}");
        assert!(outer.contains("height: 40px"), "{outer}");
        assert!(outer.contains("title=\"Jane Doe\""), "{outer}");
        assert!(html.contains(">JD</text>"), "{html}");
    }

    #[test]
    fn no_tooltip_markup_without_flag() {
        let html = render(forced_without_flag_app);
        assert!(!html.contains("role=\"tooltip\""), "{html}");
        assert!(!html.contains("tooltip-host"), "{html}");
        assert!(outer_tag(&html).contains("data-test-id=\"letter-avatar\""));
    }

    #[test]
    fn caller_id_lands_on_container() {
        let html = render(id_app);
        let outer = outer_tag(&html);
        assert!(outer.contains("id=\"owner-avatar\""), "{outer}");
        assert!(outer.contains("data-test-id=\"letter-avatar\""), "{outer}");
        // The bubble lives inside the container rather than around it
        assert!(html.contains("role=\"tooltip\""), "{html}");
        assert!(html.ends_with("</span></span>"), "{html}");
    }

    #[test]
    fn every_variant_renders_its_test_id() {
        let html = render(mixed_app);
        assert!(html.contains("data-test-id=\"gravatar-avatar\""), "{html}");
        assert!(html.contains("data-test-id=\"upload-avatar\""), "{html}");
        assert!(html.contains("data-test-id=\"letter-avatar\""), "{html}");
        assert!(html.contains("border: 1px dashed #80708f"), "{html}");
        assert!(html.contains("aria-label=\"?\""), "{html}");
    }
}
