use super::*;

// =============================================================
// RevealState latch
// =============================================================

#[test]
fn ungated_state_is_visible_from_construction() {
    let state = RevealState::new(false, 0.5);
    assert!(state.is_visible());
    assert!(!state.has_been_visible());
}

#[test]
fn gated_state_starts_hidden() {
    let state = RevealState::new(true, 0.5);
    assert!(!state.is_visible());
    assert!(!state.has_been_visible());
}

#[test]
fn qualifying_intersection_latches_visible() {
    let mut state = RevealState::new(true, 0.5);
    assert!(state.record_intersection(0.5));
    assert!(state.is_visible());
    assert!(state.has_been_visible());
}

#[test]
fn threshold_comparison_is_inclusive() {
    let mut state = RevealState::new(true, 0.5);
    assert!(!state.record_intersection(0.49));
    assert!(!state.is_visible());
    assert!(state.record_intersection(0.5));
    assert!(state.is_visible());
}

#[test]
fn sub_threshold_intersection_does_not_latch() {
    let mut state = RevealState::new(true, 0.5);
    assert!(!state.record_intersection(0.0));
    assert!(!state.record_intersection(0.25));
    assert!(!state.is_visible());
}

#[test]
fn scrolling_back_out_never_reverts_the_latch() {
    let mut state = RevealState::new(true, 0.5);
    assert!(state.record_intersection(0.8));
    assert!(!state.record_intersection(0.0));
    assert!(state.is_visible());
}

#[test]
fn repeat_qualifying_intersections_latch_exactly_once() {
    let mut state = RevealState::new(true, 0.5);
    assert!(state.record_intersection(0.9));
    assert!(!state.record_intersection(1.0));
    assert!(state.is_visible());
}

#[test]
fn threshold_is_clamped_to_unit_range() {
    let state = RevealState::new(true, 1.5);
    assert_eq!(state.visible_threshold(), 1.0);
    let state = RevealState::new(true, -0.2);
    assert_eq!(state.visible_threshold(), 0.0);
}

#[test]
fn ungated_state_ignores_intersections_entirely() {
    let mut state = RevealState::new(false, 0.5);
    assert!(state.is_visible());
    // A latch still records, but visibility was already unconditional.
    state.record_intersection(1.0);
    assert!(state.is_visible());
}

// =============================================================
// Transition timing and shape
// =============================================================

#[test]
fn effective_delay_adds_base_offset() {
    assert_eq!(format_css_number(effective_delay_seconds(0.0)), "0.04");
    assert_eq!(format_css_number(effective_delay_seconds(0.2)), "0.24");
}

#[test]
fn transition_style_passes_duration_and_easing_through() {
    let css = transition_style(0.4, 0.2, "ease-out");
    assert_eq!(
        css,
        "transition: transform 0.4s ease-out 0.24s, \
         opacity 0.4s ease-out 0.24s, \
         filter 0.4s ease-out 0.24s;"
    );
}

#[test]
fn transition_style_supports_custom_easing() {
    let css = transition_style(1.0, 0.0, "linear");
    assert!(css.contains("transform 1s linear 0.04s"));
    assert!(css.contains("filter 1s linear 0.04s"));
}

#[test]
fn blur_fade_shape_uses_offset_and_radius() {
    let shape = TransitionShape::blur_fade(6.0, "6px");
    assert_eq!(
        shape.hidden,
        "transform: translateY(6px); opacity: 0; filter: blur(6px);"
    );
    assert_eq!(
        shape.visible,
        "transform: translateY(0px); opacity: 1; filter: blur(0px);"
    );
}

#[test]
fn blur_fade_shape_formats_fractional_offsets() {
    let shape = TransitionShape::blur_fade(8.5, "4px");
    assert!(shape.hidden.contains("translateY(8.5px)"));
    assert!(shape.hidden.contains("blur(4px)"));
}

#[test]
fn custom_shape_is_a_plain_value_override() {
    let custom = TransitionShape {
        hidden: "transform: scale(0.9); opacity: 0;".to_owned(),
        visible: "transform: scale(1); opacity: 1;".to_owned(),
    };
    let default = TransitionShape::blur_fade(6.0, "6px");
    // The component renders whichever pose pair it is handed; an override
    // replaces the defaults wholesale rather than merging with them.
    assert_ne!(custom, default);
    assert!(!custom.hidden.contains("blur"));
    assert!(!custom.visible.contains("translateY"));
}

#[test]
fn format_css_number_trims_float_noise() {
    assert_eq!(format_css_number(0.04 + 0.2), "0.24");
    assert_eq!(format_css_number(0.4), "0.4");
    assert_eq!(format_css_number(1.0), "1");
    assert_eq!(format_css_number(0.05 * 3.0), "0.15");
}
