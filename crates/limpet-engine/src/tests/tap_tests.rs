use super::{bottom_frame, top_frame};
use crate::scroll_state::ScrollState;
use crate::tap::scroll_target_for;
use limpet_geometry::{Axis, EdgeInsets, Point, Size};

fn scroll_fixture(offset_y: f32, top_inset: f32) -> ScrollState {
    let scroll = ScrollState::new();
    scroll.set_container_size(Size::new(320.0, 800.0));
    scroll.set_content_size(Size::new(320.0, 4000.0));
    scroll.set_offset(Point::new(0.0, offset_y));
    scroll.set_content_insets(EdgeInsets::from_components(0.0, top_inset, 0.0, 0.0));
    scroll
}

#[test]
fn starting_edge_target_aligns_the_leading_boundary() {
    // frame.min 500, offset 100, threshold 0, top inset 20 => 620.
    let scroll = scroll_fixture(100.0, 20.0);
    let frame = top_frame(500.0, 40.0);

    let target = scroll_target_for(&frame, Axis::Vertical, 0.0, &scroll);
    assert_eq!(target, Point::new(0.0, 620.0));
}

#[test]
fn target_accounts_for_a_nonzero_threshold() {
    // A stacked element with threshold 80 needs 80 less scroll to stick.
    let scroll = scroll_fixture(100.0, 0.0);
    let frame = top_frame(500.0, 40.0);

    let target = scroll_target_for(&frame, Axis::Vertical, 80.0, &scroll);
    assert_eq!(target, Point::new(0.0, 520.0));
}

#[test]
fn ending_edge_target_aligns_the_trailing_boundary() {
    let scroll = scroll_fixture(100.0, 0.0);
    let frame = bottom_frame(900.0, 40.0);

    // frame.max 940 + offset 100 - threshold 800 + extent 40.
    let target = scroll_target_for(&frame, Axis::Vertical, 800.0, &scroll);
    assert_eq!(target, Point::new(0.0, 280.0));
}

#[test]
fn cross_axis_component_is_preserved() {
    let scroll = ScrollState::new();
    scroll.set_container_size(Size::new(320.0, 800.0));
    scroll.set_offset(Point::new(42.0, 100.0));

    let frame = top_frame(500.0, 40.0);
    let target = scroll_target_for(&frame, Axis::Vertical, 0.0, &scroll);
    assert_eq!(target.x, 42.0);
}

#[test]
fn computing_a_target_does_not_scroll() {
    let scroll = scroll_fixture(100.0, 0.0);
    let frame = top_frame(500.0, 40.0);

    let _ = scroll_target_for(&frame, Axis::Vertical, 0.0, &scroll);
    assert_eq!(scroll.offset(), Point::new(0.0, 100.0));
    assert_eq!(scroll.scroll_target(), None);
}
