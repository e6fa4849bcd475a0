//! Core types for Avatarkit

mod request;
mod tooltip;

pub use request::{AvatarKind, AvatarRequest, FILTERED_TITLE};
pub use tooltip::{TooltipHost, TooltipOptions, TooltipPosition};
