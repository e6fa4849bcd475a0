//! Avatarkit Core Library
//!
//! Avatar request model and resolver, independent of any UI framework.
//!
//! ## Overview
//!
//! An avatar is one of three variants:
//!
//! - **gravatar**: remote image looked up by e-mail or hash
//! - **upload**: an image the user uploaded
//! - **letter**: a generated graphic with the user's initials
//!
//! [`AvatarResolver::resolve`] picks the renderer for a request and computes
//! the container presentation (size, shape, suggested border) that every
//! variant shares. The result is a plain [`ResolvedAvatar`] the UI crate
//! turns into markup.
//!
//! ## Quick Start
//!
//! ```
//! use avatarkit_core::{AvatarRequest, AvatarResolver, RendererCall};
//!
//! let resolver = AvatarResolver::default();
//! let plan = resolver.resolve(&AvatarRequest::letter("user-42").with_title("[Filtered]"));
//!
//! if let RendererCall::Letter(letter) = plan.renderer {
//!     assert_eq!(letter.display_name.as_deref(), Some("?"));
//! }
//! ```

pub mod config;
pub mod error;
pub mod gravatar;
pub mod letter;
pub mod resolver;
pub mod style;
pub mod types;

// Re-exports
pub use config::{AvatarConfig, AvatarTheme};
pub use gravatar::DEFAULT_REMOTE_SIZE;
pub use error::{AvatarError, AvatarResult};
pub use letter::LetterGraphic;
pub use resolver::{
    AvatarResolver, ContainerPresentation, GravatarProps, ImageProps, LetterProps, RendererCall,
    ResolvedAvatar,
};
pub use style::{ContainerStyle, Shape};
pub use types::{
    AvatarKind, AvatarRequest, TooltipHost, TooltipOptions, TooltipPosition, FILTERED_TITLE,
};
