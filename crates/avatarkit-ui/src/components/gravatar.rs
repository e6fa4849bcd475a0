//! Gravatar
//!
//! Remote avatar image; the URL (hash, default image, remote size) is
//! computed by the resolver.

use dioxus::prelude::*;

#[component]
pub fn Gravatar(gravatar: avatarkit_core::GravatarProps) -> Element {
    let style = avatarkit_core::style::inner_style(gravatar.round, gravatar.suggested);

    rsx! {
        img {
            class: "avatar__gravatar",
            src: "{gravatar.url}",
            alt: "{gravatar.title}",
            style: "{style}",
            "loading": "lazy",
        }
    }
}
