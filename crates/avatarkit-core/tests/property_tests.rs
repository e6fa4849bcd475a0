//! Property-based tests for the avatar resolver
//!
//! Uses proptest to check the container and dispatch invariants over
//! arbitrary requests.

use proptest::prelude::*;
use avatarkit_core::{
    AvatarKind, AvatarRequest, AvatarResolver, RendererCall, Shape, FILTERED_TITLE,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9@._-]{1,40}").expect("valid regex")
}

fn title_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => Just(None),
        1 => Just(Some(FILTERED_TITLE.to_string())),
        5 => prop::string::string_regex("[a-zA-Z ]{0,30}").expect("valid regex").prop_map(Some),
    ]
}

fn kind_strategy() -> impl Strategy<Value = AvatarKind> {
    prop_oneof![
        id_strategy().prop_map(|gravatar_id| AvatarKind::Gravatar { gravatar_id }),
        id_strategy().prop_map(|letter_id| AvatarKind::Letter { letter_id }),
        id_strategy().prop_map(|id| AvatarKind::Upload {
            upload_url: format!("https://img.example/{}.png", id)
        }),
    ]
}

fn request_strategy() -> impl Strategy<Value = AvatarRequest> {
    (
        kind_strategy(),
        title_strategy(),
        prop::option::of(1u32..512),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop::option::of("[a-z ]{1,20}"),
    )
        .prop_map(|(kind, title, size, round, suggested, has_tooltip, tooltip)| {
            let mut request = AvatarRequest::new(kind);
            request.title = title;
            request.size = size;
            request.round = round;
            request.suggested = suggested;
            request.has_tooltip = has_tooltip;
            request.tooltip = tooltip;
            request
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A size forces a square box of that size
    #[test]
    fn size_gives_square_container(request in request_strategy()) {
        let plan = AvatarResolver::default().resolve(&request);
        prop_assert_eq!(plan.container.style.width, request.size);
        prop_assert_eq!(plan.container.style.height, request.size);
    }

    /// Shape follows the round flag alone
    #[test]
    fn round_controls_shape(request in request_strategy()) {
        let plan = AvatarResolver::default().resolve(&request);
        let expected = if request.round { Shape::Circle } else { Shape::Rounded };
        prop_assert_eq!(plan.container.style.shape, expected);
        prop_assert_eq!(plan.renderer.round(), request.round);
    }

    /// Suggested requests get the dashed border and tinted background, others neither
    #[test]
    fn suggested_controls_border(request in request_strategy()) {
        let plan = AvatarResolver::default().resolve(&request);
        prop_assert_eq!(plan.container.style.border.is_some(), request.suggested);
        prop_assert_eq!(plan.container.style.background.is_some(), request.suggested);
    }

    /// The renderer matches the variant tag
    #[test]
    fn dispatch_matches_kind(request in request_strategy()) {
        let plan = AvatarResolver::default().resolve(&request);
        let matched = matches!(
            (&request.kind, &plan.renderer),
            (AvatarKind::Gravatar { .. }, RendererCall::Gravatar(_))
                | (AvatarKind::Letter { .. }, RendererCall::Letter(_))
                | (AvatarKind::Upload { .. }, RendererCall::Image(_))
        );
        prop_assert!(matched);
        prop_assert_eq!(plan.container.test_id, format!("{}-avatar", request.kind.name()));
    }

    /// Letter display names are the title unless it is redacted
    #[test]
    fn letter_display_name(id in id_strategy(), title in title_strategy()) {
        let mut request = AvatarRequest::letter(id);
        request.title = title.clone();

        let plan = AvatarResolver::default().resolve(&request);
        let RendererCall::Letter(letter) = plan.renderer else {
            return Err(TestCaseError::fail("expected letter renderer"));
        };

        match title.as_deref() {
            Some(FILTERED_TITLE) => prop_assert_eq!(letter.display_name.as_deref(), Some("?")),
            _ => prop_assert_eq!(letter.display_name, title),
        }
    }

    /// Gravatar always asks for the fixed remote resolution
    #[test]
    fn gravatar_remote_size_fixed(id in id_strategy(), size in prop::option::of(1u32..512)) {
        let mut request = AvatarRequest::gravatar(id);
        request.size = size;

        let plan = AvatarResolver::default().resolve(&request);
        let RendererCall::Gravatar(gravatar) = plan.renderer else {
            return Err(TestCaseError::fail("expected gravatar renderer"));
        };
        prop_assert_eq!(gravatar.remote_size, 120);
    }

    /// Without the tooltip flag the host is inert regardless of content
    #[test]
    fn tooltip_inert_without_flag(request in request_strategy()) {
        let plan = AvatarResolver::default().resolve(&request);
        if !request.has_tooltip {
            prop_assert!(plan.tooltip.disabled);
            prop_assert!(!plan.tooltip.is_visible(true));
        }
    }

    /// Identical input gives identical output
    #[test]
    fn resolve_is_deterministic(request in request_strategy()) {
        let resolver = AvatarResolver::default();
        prop_assert_eq!(resolver.resolve(&request), resolver.resolve(&request));
    }

    /// Requests survive a JSON round trip through the wire shape
    #[test]
    fn request_json_shape(request in request_strategy()) {
        let json = serde_json::to_string(&request).unwrap();
        let parsed = AvatarRequest::from_json(&json).unwrap();
        prop_assert_eq!(parsed, request);
    }
}
