use avatarkit_core::AvatarRequest;
use avatarkit_ui::{Avatar, AvatarProvider, AvatarStyles};
use dioxus::prelude::*;

use crate::get_gallery;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the avatar config, then lays out the gallery.
#[component]
pub fn App() -> Element {
    let gallery = use_hook(get_gallery);

    rsx! {
        style { {GLOBAL_STYLES} }
        AvatarStyles {}
        AvatarProvider {
            config: gallery.config.clone(),
            main { class: "gallery",
                h1 { class: "gallery-title", "Avatar Gallery" }
                p { class: "gallery-subtitle",
                    "{gallery.requests.len()} avatars from {gallery.source}"
                }
                div { class: "gallery-grid",
                    for (index, request) in gallery.requests.iter().enumerate() {
                        GalleryCell { key: "{index}", request: request.clone() }
                    }
                }
            }
        }
    }
}

/// Caption under each avatar: variant plus title
fn caption(request: &AvatarRequest) -> String {
    match request.title.as_deref() {
        Some(title) => format!("{} · {}", request.kind.name(), title),
        None => request.kind.name().to_string(),
    }
}

#[component]
fn GalleryCell(request: AvatarRequest) -> Element {
    let label = caption(&request);

    rsx! {
        div { class: "gallery-cell",
            Avatar { request }
            span { class: "gallery-caption", "{label}" }
        }
    }
}
