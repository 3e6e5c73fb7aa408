use super::*;

use crate::components::reveal::{effective_delay_seconds, format_css_number};

#[test]
fn section_delays_step_in_base_increments() {
    assert_eq!(section_delay(0), 0.0);
    assert_eq!(format_css_number(section_delay(3)), "0.12");
    assert_eq!(format_css_number(section_delay(11)), "0.44");
}

#[test]
fn item_delays_stagger_within_a_section() {
    assert_eq!(item_delay(6, 0), section_delay(6));
    let spread = item_delay(6, 2) - item_delay(6, 0);
    assert!((spread - 0.1).abs() < 1e-9);
}

#[test]
fn composed_delay_matches_rendered_start_offset() {
    // A section-step-5 heading starts at 0.04 (base) + 0.2 = 0.24s.
    assert_eq!(format_css_number(effective_delay_seconds(section_delay(5))), "0.24");
}
