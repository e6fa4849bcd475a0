//! Resolver context for avatar components.
//!
//! ## Usage
//!
//! ```ignore
//! // Near the root
//! AvatarProvider { config: config.clone(), Gallery {} }
//!
//! // In any avatar component
//! let resolver = use_avatar_resolver();
//! ```

use avatarkit_core::{AvatarConfig, AvatarResolver};
use dioxus::prelude::*;

/// The resolver provided by the nearest [`AvatarProvider`], or a default one.
pub fn use_avatar_resolver() -> AvatarResolver {
    try_use_context::<AvatarResolver>().unwrap_or_default()
}

/// Makes an [`AvatarResolver`] built from `config` available to descendants
#[component]
pub fn AvatarProvider(config: AvatarConfig, children: Element) -> Element {
    use_context_provider(|| AvatarResolver::new(config));

    rsx! {
        {children}
    }
}
