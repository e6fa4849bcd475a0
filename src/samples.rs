//! Built-in requests shown when no `--requests` file is given.

use avatarkit_core::{AvatarRequest, TooltipOptions, TooltipPosition, FILTERED_TITLE};

pub fn sample_requests() -> Vec<AvatarRequest> {
    vec![
        AvatarRequest::letter("user-1")
            .with_title("Jane Doe")
            .with_size(48)
            .with_tooltip("Jane Doe"),
        AvatarRequest::letter("user-2")
            .with_title("priya@example.com")
            .with_size(48)
            .with_round(true),
        AvatarRequest::letter("user-3")
            .with_title(FILTERED_TITLE)
            .with_size(48)
            .with_tooltip("Name redacted"),
        AvatarRequest::letter("team-7")
            .with_title("Platform Team")
            .with_size(48)
            .with_suggested(true)
            .with_tooltip("Suggested owner")
            .with_tooltip_options(TooltipOptions {
                position: TooltipPosition::Bottom,
                ..Default::default()
            }),
        AvatarRequest::gravatar("jane@example.com")
            .with_title("Jane Doe")
            .with_size(48)
            .with_round(true),
        AvatarRequest::gravatar("0bc83cb571cd1c50ba6f3e8a78ef1346")
            .with_size(48)
            .with_suggested(true),
        AvatarRequest::upload("https://avatars.invalid/missing.png")
            .with_title("Broken Upload")
            .with_size(48)
            .with_tooltip("Falls back to letters"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use avatarkit_core::{AvatarResolver, RendererCall};

    #[test]
    fn samples_cover_every_renderer() {
        let resolver = AvatarResolver::default();
        let plans: Vec<_> = sample_requests()
            .iter()
            .map(|r| resolver.resolve(r))
            .collect();

        assert!(plans.iter().any(|p| matches!(p.renderer, RendererCall::Letter(_))));
        assert!(plans.iter().any(|p| matches!(p.renderer, RendererCall::Gravatar(_))));
        assert!(plans.iter().any(|p| matches!(p.renderer, RendererCall::Image(_))));
    }

    #[test]
    fn samples_are_square() {
        for request in sample_requests() {
            assert_eq!(request.size, Some(48));
        }
    }
}
