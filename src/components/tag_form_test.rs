use super::{TagDraft, TagFormError, hex_color, random_colors, text_color_for};
use crate::net::types::Tag;

// ============================================================================
// Text color derivation
// ============================================================================

#[test]
fn bright_backgrounds_get_black_text() {
    assert_eq!(text_color_for(255, 255, 255), "#000000");
    assert_eq!(text_color_for(200, 230, 180), "#000000");
}

#[test]
fn dark_backgrounds_get_white_text() {
    assert_eq!(text_color_for(0, 0, 0), "#ffffff");
    assert_eq!(text_color_for(40, 60, 90), "#ffffff");
}

#[test]
fn midpoint_brightness_counts_as_dark() {
    // (128*299 + 128*587 + 128*114) / 1000 == 128, which is not > 128.
    assert_eq!(text_color_for(128, 128, 128), "#ffffff");
    assert_eq!(text_color_for(129, 129, 129), "#000000");
}

#[test]
fn green_dominates_the_brightness_weighting() {
    // Pure green clears the midpoint on its own; pure red does not.
    assert_eq!(text_color_for(0, 255, 0), "#000000");
    assert_eq!(text_color_for(255, 0, 0), "#ffffff");
}

// ============================================================================
// Color generation
// ============================================================================

#[test]
fn hex_color_is_lowercase_with_padded_channels() {
    assert_eq!(hex_color(255, 0, 170), "#ff00aa");
    assert_eq!(hex_color(1, 2, 3), "#010203");
}

#[test]
fn random_backgrounds_stay_in_the_pastel_range() {
    for _ in 0..32 {
        let (bg, text) = random_colors();
        assert_eq!(bg.len(), 7);
        for i in [1, 3, 5] {
            let channel = u8::from_str_radix(&bg[i..i + 2], 16).unwrap();
            assert!((128..=227).contains(&channel), "channel {channel} in {bg}");
        }
        assert!(text == "#000000" || text == "#ffffff");
    }
}

// ============================================================================
// Draft validation
// ============================================================================

#[test]
fn valid_draft_produces_a_trimmed_payload() {
    let draft = TagDraft {
        name: "  Groceries  ".to_owned(),
        color_bg: "#aabbcc".to_owned(),
        color_text: "#000000".to_owned(),
    };

    let payload = draft.validate().unwrap();
    assert_eq!(payload.name, "Groceries");
    assert_eq!(payload.color_bg, "#aabbcc");
    assert_eq!(payload.color_text, "#000000");
}

#[test]
fn blank_name_is_rejected() {
    for name in ["", "   "] {
        let draft = TagDraft {
            name: name.to_owned(),
            ..TagDraft::new()
        };
        assert_eq!(draft.validate(), Err(TagFormError::EmptyName));
    }
}

#[test]
fn name_over_fifty_characters_is_rejected() {
    let draft = TagDraft {
        name: "x".repeat(51),
        ..TagDraft::new()
    };
    assert_eq!(draft.validate(), Err(TagFormError::NameTooLong));

    let draft = TagDraft {
        name: "x".repeat(50),
        ..TagDraft::new()
    };
    assert!(draft.validate().is_ok());
}

// ============================================================================
// Edit seeding
// ============================================================================

#[test]
fn drafts_seeded_from_a_tag_keep_its_colors() {
    let tag = Tag {
        id: "tag-1".to_owned(),
        name: "Rent".to_owned(),
        color_bg: "#112233".to_owned(),
        color_text: "#ffffff".to_owned(),
        user_id: Some("user-1".to_owned()),
    };

    let draft = TagDraft::from_tag(&tag);
    assert_eq!(draft.name, "Rent");
    assert_eq!(draft.color_bg, "#112233");
    assert_eq!(draft.color_text, "#ffffff");
}
