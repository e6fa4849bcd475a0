//! Image Avatar
//!
//! Displays an uploaded image. If the image fails to load and the resolver
//! supplied a fallback, the letter avatar is shown instead.

use avatarkit_core::{ImageProps, LetterProps};
use dioxus::prelude::*;

use super::LetterAvatar;

/// Letter avatar to show in place of `image`, given the last src that
/// failed to load. A new src gets a fresh attempt.
pub fn image_fallback<'a>(
    image: &'a ImageProps,
    failed_src: Option<&str>,
) -> Option<&'a LetterProps> {
    if failed_src == Some(image.src.as_str()) {
        image.fallback.as_ref()
    } else {
        None
    }
}

#[component]
pub fn ImageAvatar(image: ImageProps) -> Element {
    let mut failed_src = use_signal(|| Option::<String>::None);

    if let Some(fallback) = image_fallback(&image, failed_src.read().as_deref()) {
        return rsx! {
            LetterAvatar { letter: fallback.clone() }
        };
    }

    let style = avatarkit_core::style::inner_style(image.round, image.suggested);
    let src = image.src.clone();

    rsx! {
        img {
            class: "avatar__image",
            src: "{image.src}",
            alt: "{image.alt}",
            style: "{style}",
            onerror: move |_| {
                tracing::debug!("Avatar image failed to load: {}", src);
                failed_src.set(Some(src.clone()));
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(with_fallback: bool) -> ImageProps {
        ImageProps {
            src: "https://x/jane.png".to_string(),
            round: true,
            alt: "Jane Doe".to_string(),
            suggested: false,
            fallback: with_fallback.then(|| LetterProps {
                identifier: "https://x/jane.png".to_string(),
                round: true,
                suggested: false,
                display_name: Some("Jane Doe".to_string()),
            }),
        }
    }

    #[test]
    fn loads_image_until_error() {
        assert_eq!(image_fallback(&image(true), None), None);
    }

    #[test]
    fn error_swaps_to_letter() {
        let image = image(true);
        let fallback = image_fallback(&image, Some("https://x/jane.png"));
        assert_eq!(fallback, image.fallback.as_ref());
    }

    #[test]
    fn error_on_previous_src_is_forgotten() {
        assert_eq!(image_fallback(&image(true), Some("https://x/old.png")), None);
    }

    #[test]
    fn error_without_fallback_keeps_image() {
        assert_eq!(image_fallback(&image(false), Some("https://x/jane.png")), None);
    }

    fn image_app() -> Element {
        rsx! {
            ImageAvatar { image: image(true) }
        }
    }

    fn swapped_app() -> Element {
        let image = image(true);
        let letter = image_fallback(&image, Some("https://x/jane.png")).cloned();
        rsx! {
            if let Some(letter) = letter {
                LetterAvatar { letter }
            }
        }
    }

    #[test]
    fn renders_img_before_error() {
        let mut dom = VirtualDom::new(image_app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.starts_with("<img"), "{html}");
        assert!(html.contains("src=\"https://x/jane.png\""), "{html}");
        assert!(html.contains("alt=\"Jane Doe\""), "{html}");
    }

    #[test]
    fn swapped_fallback_renders_initials() {
        let mut dom = VirtualDom::new(swapped_app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.starts_with("<svg"), "{html}");
        assert!(html.contains("aria-label=\"Jane Doe\""), "{html}");
        assert!(html.contains(">JD</text>"), "{html}");
    }
}
