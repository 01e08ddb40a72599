use crate::context::StickyContext;
use crate::policy::StickyPolicy;
use limpet_geometry::{Axis, Edge, EdgeInsets, EdgeSet, Point, Rect, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn laid_out_context(policy: StickyPolicy) -> StickyContext {
    let context = StickyContext::new(Axis::Vertical, policy);
    context
        .scroll_state()
        .set_container_size(Size::new(320.0, 800.0));
    context
        .scroll_state()
        .set_content_size(Size::new(320.0, 4000.0));
    context
}

fn header(y: f32) -> Rect {
    Rect::new(0.0, y, 320.0, 40.0)
}

#[test]
fn resolving_before_layout_degrades_to_identity() {
    let context = StickyContext::new(Axis::Vertical, StickyPolicy::Replace);
    let handle = context.attach(header(-10.0), Edge::Starting);

    let output = handle.resolve();
    assert!(!output.is_sticking);
    assert!(!output.overlays);
    assert_eq!(output.offset, Point::ZERO);

    // Tap-to-scroll has nothing to align to either.
    assert_eq!(handle.scroll_target(), None);
}

#[test]
fn a_scrolled_past_header_sticks_and_pins_to_the_edge() {
    let context = laid_out_context(StickyPolicy::Replace);
    let handle = context.attach(header(100.0), Edge::Starting);

    assert!(!handle.resolve().is_sticking);

    // The container scrolled; the element reports its new measured frame.
    handle.update_frame(header(-10.0));
    let output = handle.resolve();
    assert!(output.is_sticking);
    assert_eq!(output.offset, Point::new(0.0, 10.0));
}

#[test]
fn sticking_transitions_fire_the_callback_once_each_way() {
    let context = laid_out_context(StickyPolicy::Replace);
    let handle = context.attach(header(100.0), Edge::Starting);

    let transitions = Rc::new(RefCell::new(Vec::new()));
    let log = transitions.clone();
    handle.on_sticking_changed(move |sticking| log.borrow_mut().push(sticking));

    handle.resolve();
    assert!(transitions.borrow().is_empty());

    handle.update_frame(header(-10.0));
    handle.resolve();
    // Unchanged input: resolving again must not re-fire.
    handle.resolve();

    handle.update_frame(header(100.0));
    handle.resolve();

    assert_eq!(*transitions.borrow(), vec![true, false]);
}

#[test]
fn dropping_a_handle_removes_its_influence_on_neighbors() {
    let context = laid_out_context(StickyPolicy::Stack);
    let first = context.attach(header(-80.0), Edge::Starting);
    let second = context.attach(header(-40.0), Edge::Starting);

    // Queued behind the first header: pinned at y = 40.
    assert_eq!(second.resolve().offset, Point::new(0.0, 80.0));

    drop(first);
    assert_eq!(context.registry().len(), 1);

    // With the first header gone, the second pins at the edge itself.
    assert_eq!(second.resolve().offset, Point::new(0.0, 40.0));
}

#[test]
fn tap_requests_a_scroll_target_only_when_opted_in() {
    let context = laid_out_context(StickyPolicy::Replace);
    let handle = context.attach(header(500.0), Edge::Starting);

    let taps = Rc::new(Cell::new(0u32));
    let tapped = taps.clone();
    handle.on_tap(move || tapped.set(tapped.get() + 1));

    assert_eq!(handle.tap(), None);
    assert_eq!(context.scroll_state().scroll_target(), None);
    assert_eq!(taps.get(), 1);

    handle.set_tap_to_scroll(true);
    context.scroll_state().set_offset(Point::new(0.0, 100.0));
    let target = handle.tap();
    assert_eq!(target, Some(Point::new(0.0, 600.0)));
    assert_eq!(context.scroll_state().take_scroll_target(), target);
    assert_eq!(taps.get(), 2);
}

#[test]
fn tap_target_respects_the_stack_threshold() {
    let context = laid_out_context(StickyPolicy::Stack);
    let _first = context.attach(header(-40.0), Edge::Starting);
    let second = context.attach(header(500.0), Edge::Starting);

    // The second header sticks 40pt below the edge, so it needs 40 less
    // scroll to get there.
    assert_eq!(second.scroll_target(), Some(Point::new(0.0, 460.0)));
}

#[test]
fn safe_area_edges_extend_the_threshold() {
    let context = StickyContext::new(Axis::Vertical, StickyPolicy::Replace)
        .with_safe_area_edges(EdgeSet::VERTICAL)
        .with_safe_area_insets(EdgeInsets::from_components(0.0, 44.0, 0.0, 34.0));
    context
        .scroll_state()
        .set_container_size(Size::new(320.0, 800.0));

    assert_eq!(context.safe_area_inset(Edge::Starting), 44.0);
    assert_eq!(context.safe_area_inset(Edge::Ending), 34.0);

    let handle = context.attach(header(-50.0), Edge::Starting);
    let output = handle.resolve();
    assert!(output.is_sticking);
    // Pinned at -44, flush with the physical screen edge.
    assert_eq!(output.offset, Point::new(0.0, 6.0));
}

#[test]
fn edges_outside_the_safe_area_set_use_no_inset() {
    let context = StickyContext::new(Axis::Vertical, StickyPolicy::Replace)
        .with_safe_area_edges(EdgeSet::NONE)
        .with_safe_area_insets(EdgeInsets::uniform(44.0));
    assert_eq!(context.safe_area_inset(Edge::Starting), 0.0);
    assert_eq!(context.safe_area_inset(Edge::Ending), 0.0);
}

#[test]
fn scroll_state_changes_notify_the_container() {
    let context = laid_out_context(StickyPolicy::Replace);

    let recomputes = Rc::new(Cell::new(0u32));
    let observed = recomputes.clone();
    context
        .scroll_state()
        .add_change_listener(Box::new(move || observed.set(observed.get() + 1)));

    context.scroll_state().set_offset(Point::new(0.0, 50.0));
    assert_eq!(recomputes.get(), 1);

    // Same offset again: no change, no notification.
    context.scroll_state().set_offset(Point::new(0.0, 50.0));
    assert_eq!(recomputes.get(), 1);

    context
        .scroll_state()
        .set_content_insets(EdgeInsets::uniform(8.0));
    assert_eq!(recomputes.get(), 2);
}

#[test]
fn horizontal_axis_drives_the_x_component() {
    let context = StickyContext::new(Axis::Horizontal, StickyPolicy::Replace);
    context
        .scroll_state()
        .set_container_size(Size::new(800.0, 320.0));

    let handle = context.attach(Rect::new(-10.0, 0.0, 40.0, 320.0), Edge::Starting);
    let output = handle.resolve();
    assert!(output.is_sticking);
    assert_eq!(output.offset, Point::new(10.0, 0.0));
}
