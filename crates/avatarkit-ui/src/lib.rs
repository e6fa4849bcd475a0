//! Avatarkit UI Components
//!
//! Dioxus components that render the plans produced by
//! [`avatarkit_core::AvatarResolver`].
//!
//! ## Components
//!
//! - [`Avatar`]: entry point; resolves a request and hosts its own tooltip
//! - [`ImageAvatar`], [`Gravatar`], [`LetterAvatar`]: the three renderers
//! - [`Tooltip`]: standalone hover wrapper, inert when disabled
//!
//! Include [`AvatarStyles`] once near the root for the tooltip and avatar CSS,
//! and wrap the tree in [`AvatarProvider`] to use a non-default config.

pub mod components;
mod context;
mod styles;

pub use components::*;
pub use context::{use_avatar_resolver, AvatarProvider};
pub use styles::{AvatarStyles, AVATAR_STYLES};
