//! CSS for avatars and the tooltip host.

use dioxus::prelude::*;

pub const AVATAR_STYLES: &str = r#"
/* === Avatar === */
.avatar {
  display: inline-block;
  position: relative;
  vertical-align: middle;
}

.avatar__image,
.avatar__gravatar,
.avatar__letter {
  display: block;
  object-fit: cover;
}

.avatar__letter text {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  font-weight: 600;
  user-select: none;
}

/* === Tooltip === */
.tooltip-host {
  position: relative;
  display: inline-flex;
}

.tooltip {
  position: absolute;
  z-index: 1000;
  padding: 4px 8px;
  border-radius: 4px;
  background: #2b2233;
  color: #ffffff;
  font-size: 0.75rem;
  line-height: 1.4;
  white-space: normal;
  width: max-content;
  pointer-events: none;
}

.tooltip--hoverable {
  pointer-events: auto;
}

.tooltip--top {
  bottom: calc(100% + 6px);
  left: 50%;
  transform: translateX(-50%);
}

.tooltip--bottom {
  top: calc(100% + 6px);
  left: 50%;
  transform: translateX(-50%);
}

.tooltip--left {
  right: calc(100% + 6px);
  top: 50%;
  transform: translateY(-50%);
}

.tooltip--right {
  left: calc(100% + 6px);
  top: 50%;
  transform: translateY(-50%);
}
"#;

/// Injects [`AVATAR_STYLES`] into the document
#[component]
pub fn AvatarStyles() -> Element {
    rsx! {
        style { {AVATAR_STYLES} }
    }
}
