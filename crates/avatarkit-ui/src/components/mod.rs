//! Avatar components
//!
//! [`Avatar`] is the only component most callers need; the renderers and
//! the tooltip host are exported for custom layouts.

mod avatar;
mod gravatar;
mod image_avatar;
mod letter_avatar;
mod tooltip;

pub use avatar::*;
pub use gravatar::*;
pub use image_avatar::*;
pub use letter_avatar::*;
pub use tooltip::*;
