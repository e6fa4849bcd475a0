//! Tooltip Host
//!
//! Hover bubble shared by [`super::Avatar`], which hosts it on its own
//! container, and by the standalone [`Tooltip`] wrapper. A disabled host
//! renders its children untouched, with no wrapper element and no listeners.

use std::time::Duration;

use avatarkit_core::TooltipHost;
use dioxus::prelude::*;

/// Hover state with a generation counter.
///
/// Every enter and leave bumps the generation, so a delay started by an
/// earlier hover can never reveal the bubble for a later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverTracker {
    generation: u64,
    inside: bool,
    shown: bool,
}

impl HoverTracker {
    /// Pointer entered; returns the token the delay must present
    pub fn enter(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.inside = true;
        self.shown = false;
        self.generation
    }

    pub fn leave(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.inside = false;
        self.shown = false;
    }

    /// Delay for `token` finished; shows only if that hover is still current
    pub fn delay_elapsed(&mut self, token: u64) {
        if self.inside && token == self.generation {
            self.shown = true;
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

/// Start a hover on `tracker`, revealing after the host delay
pub fn begin_hover(mut tracker: Signal<HoverTracker>, host: &TooltipHost) {
    let token = tracker.write().enter();
    let delay = Duration::from_millis(u64::from(host.delay));
    if delay.is_zero() {
        tracker.write().delay_elapsed(token);
        return;
    }
    spawn(async move {
        tokio::time::sleep(delay).await;
        tracker.write().delay_elapsed(token);
    });
}

pub fn end_hover(mut tracker: Signal<HoverTracker>) {
    tracker.write().leave();
}

/// Class list of the bubble
pub fn bubble_class(host: &TooltipHost) -> String {
    let mut class = format!("tooltip {}", host.position.class());
    if host.is_hoverable {
        class.push_str(" tooltip--hoverable");
    }
    class
}

/// Inline style of the bubble
pub fn bubble_style(host: &TooltipHost) -> String {
    match host.max_width {
        Some(px) => format!("max-width: {}px;", px),
        None => String::new(),
    }
}

/// Whether the bubble is drawn, given whether rich content exists
pub fn bubble_visible(host: &TooltipHost, has_content: bool, hovered: bool) -> bool {
    !host.disabled && (has_content || host.title.is_some()) && (hovered || host.force_visible)
}

/// The bubble itself, positioned against the nearest relative ancestor
#[component]
pub fn TooltipBubble(host: TooltipHost, content: Option<Element>, hovered: bool) -> Element {
    if !bubble_visible(&host, content.is_some(), hovered) {
        return rsx! {};
    }

    rsx! {
        span {
            class: bubble_class(&host),
            style: bubble_style(&host),
            role: "tooltip",
            if let Some(content) = content {
                {content}
            } else if let Some(title) = host.title.clone() {
                "{title}"
            }
        }
    }
}

/// Properties for the Tooltip component
#[derive(Clone, PartialEq, Props)]
pub struct TooltipProps {
    /// Resolved host settings
    pub host: TooltipHost,
    /// Rich bubble content; falls back to `host.title` text
    #[props(default)]
    pub content: Option<Element>,
    pub children: Element,
}

/// Wraps arbitrary children with a hover bubble
#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let hover = use_signal(HoverTracker::default);

    if props.host.disabled {
        return rsx! {
            {props.children}
        };
    }

    let enter_host = props.host.clone();

    rsx! {
        span {
            class: "tooltip-host",
            onmouseenter: move |_| begin_hover(hover, &enter_host),
            onmouseleave: move |_| end_hover(hover),
            {props.children}
            TooltipBubble {
                host: props.host.clone(),
                content: props.content.clone(),
                hovered: hover.read().is_shown(),
            }
        }
    }
}
