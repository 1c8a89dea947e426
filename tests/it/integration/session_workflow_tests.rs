//! Drag/resize session workflow tests.
//!
//! These exercise the full path: pointer events into an `ItemSession`,
//! committed geometry back out of the `BoardStore`.

use crate::helpers::{
    committed_position, committed_size, image_item_at, store_with_board, wide_open_bounds,
};
use moodboard::geometry::{Bounds, Point, Size};
use moodboard::input::{ItemSession, ResizeCorner};
use moodboard::store::BoardStore;
use moodboard::types::{Item, ItemContent};
use uuid::Uuid;

/// Store with one 200x100 image item and a session with a 2.0 aspect ratio.
fn resize_fixture() -> (BoardStore, Uuid, Uuid, ItemSession) {
    let (mut store, board_id) = store_with_board("A");
    let item = image_item_at((50.0, 50.0), (200.0, 100.0));
    let item_id = item.id;
    store.add_item(board_id, item);

    let mut session = ItemSession::new(board_id, item_id);
    session.set_natural_size(200.0, 100.0);
    (store, board_id, item_id, session)
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_scales_width_driven_with_locked_ratio() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    assert!(session.is_resizing());

    // +50 horizontal from session start: 200 -> 250 wide, height derived.
    session.pointer_move(Point::new(300.0, 150.0), wide_open_bounds(), &mut store);
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(250.0, 125.0))
    );

    session.pointer_up(&mut store);
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(250.0, 125.0))
    );
}

#[test]
fn test_resize_ignores_vertical_delta() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    // Huge vertical move, no horizontal: size unchanged.
    session.pointer_move(Point::new(250.0, 5000.0), wide_open_bounds(), &mut store);

    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(200.0, 100.0))
    );
}

#[test]
fn test_resize_floors_width_at_minimum() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    session.pointer_move(Point::new(-750.0, 150.0), wide_open_bounds(), &mut store);

    // -1000 horizontal: width floors at 100, height stays derived (100 / 2.0).
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(100.0, 50.0))
    );
}

#[test]
fn test_resize_commits_on_every_move() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);

    session.pointer_move(Point::new(270.0, 150.0), wide_open_bounds(), &mut store);
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(220.0, 110.0))
    );

    session.pointer_move(Point::new(310.0, 150.0), wide_open_bounds(), &mut store);
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(260.0, 130.0))
    );
}

#[test]
fn test_replaying_final_move_after_release_changes_nothing() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    session.pointer_move(Point::new(300.0, 150.0), wide_open_bounds(), &mut store);
    session.pointer_up(&mut store);

    // The session is idle; a stray repeat of the last move event is inert.
    session.pointer_move(Point::new(300.0, 150.0), wide_open_bounds(), &mut store);
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(250.0, 125.0))
    );
}

#[test]
fn test_unknown_aspect_ratio_falls_back_to_square() {
    let (mut store, board_id) = store_with_board("A");
    let item = image_item_at((0.0, 0.0), (200.0, 100.0));
    let item_id = item.id;
    store.add_item(board_id, item);

    // No natural dimensions ever arrived: ratio defaults to 1.0.
    let mut session = ItemSession::new(board_id, item_id);
    session.begin_resize(ResizeCorner::SouthEast, Point::new(200.0, 100.0), &store);
    session.pointer_move(Point::new(250.0, 100.0), wide_open_bounds(), &mut store);

    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(250.0, 250.0))
    );
}

#[test]
fn test_degenerate_natural_dimensions_fall_back_to_square() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();
    session.set_natural_size(640.0, 0.0);

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    session.pointer_move(Point::new(250.0, 150.0), wide_open_bounds(), &mut store);

    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(200.0, 200.0))
    );
}

#[test]
fn test_ratio_is_locked_while_resizing() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    // Late-arriving image load must not change the scale mid-session.
    session.set_natural_size(100.0, 400.0);
    session.pointer_move(Point::new(300.0, 150.0), wide_open_bounds(), &mut store);

    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(250.0, 125.0))
    );

    // Once the session is over, the update applies to the next one.
    session.pointer_up(&mut store);
    session.set_natural_size(100.0, 400.0);
    assert_eq!(session.aspect_ratio(), 0.25);
}

#[test]
fn test_only_south_east_corner_starts_a_resize() {
    let (store, _board_id, _item_id, mut session) = resize_fixture();

    for corner in [
        ResizeCorner::NorthWest,
        ResizeCorner::NorthEast,
        ResizeCorner::SouthWest,
    ] {
        session.begin_resize(corner, Point::new(250.0, 150.0), &store);
        assert!(!session.is_resizing());
    }
}

#[test]
fn test_resize_uses_fallback_size_when_item_has_none() {
    let (mut store, board_id) = store_with_board("A");
    let mut item = Item::new(ItemContent::Image("img.png".to_string()), Point::ZERO);
    item.size = None;
    let item_id = item.id;
    store.add_item(board_id, item);

    let mut session = ItemSession::new(board_id, item_id);
    session.begin_resize(ResizeCorner::SouthEast, Point::new(0.0, 0.0), &store);
    session.pointer_move(Point::new(50.0, 0.0), wide_open_bounds(), &mut store);

    // Start size falls back to 200x200, so +50 gives 250x250 at ratio 1.0.
    assert_eq!(
        committed_size(&store, board_id, item_id),
        Some(Size::new(250.0, 250.0))
    );
}

// ============================================================================
// Drag
// ============================================================================

#[test]
fn test_drag_commits_once_on_release() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    // Grab the item body 10,10 inside its origin.
    session.begin_drag(Point::new(60.0, 60.0), &store);
    assert!(session.is_dragging());

    session.pointer_move(Point::new(400.0, 300.0), wide_open_bounds(), &mut store);
    // Transient position tracks the pointer; the store is untouched until release.
    assert_eq!(session.preview_position(), Some(Point::new(390.0, 290.0)));
    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(50.0, 50.0))
    );

    session.pointer_up(&mut store);
    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(390.0, 290.0))
    );
    assert!(!session.is_dragging());
}

#[test]
fn test_drag_clamps_to_container_bounds() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();
    let bounds = Bounds::new(Point::ZERO, Size::new(800.0, 600.0));

    session.begin_drag(Point::new(60.0, 60.0), &store);
    // Way past the bottom-right corner: item (200x100) pins to the far edge.
    session.pointer_move(Point::new(5000.0, 5000.0), bounds, &mut store);
    session.pointer_up(&mut store);

    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(600.0, 500.0))
    );
}

#[test]
fn test_drag_final_state_matches_last_move() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_drag(Point::new(50.0, 50.0), &store);
    for step in 1..=5 {
        let target = Point::new(step as f32 * 30.0, step as f32 * 20.0);
        session.pointer_move(target, wide_open_bounds(), &mut store);
    }
    session.pointer_up(&mut store);

    // Moves apply in delivery order; the commit equals the last one.
    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(150.0, 100.0))
    );
}

#[test]
fn test_drag_and_resize_are_mutually_exclusive() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    session.begin_drag(Point::new(60.0, 60.0), &store);
    assert!(session.is_resizing());
    assert!(!session.is_dragging());

    session.pointer_up(&mut store);
    session.begin_drag(Point::new(60.0, 60.0), &store);
    session.begin_resize(ResizeCorner::SouthEast, Point::new(250.0, 150.0), &store);
    assert!(session.is_dragging());
    assert!(!session.is_resizing());

    // The drag still commits normally after the rejected resize entry.
    session.pointer_move(Point::new(70.0, 70.0), wide_open_bounds(), &mut store);
    session.pointer_up(&mut store);
    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(60.0, 60.0))
    );
}

#[test]
fn test_detach_ends_session_without_commit() {
    let (mut store, board_id, item_id, mut session) = resize_fixture();

    session.begin_drag(Point::new(60.0, 60.0), &store);
    session.pointer_move(Point::new(500.0, 500.0), wide_open_bounds(), &mut store);

    // Input surface torn down without a release event.
    session.detach();
    assert!(!session.is_dragging());
    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(50.0, 50.0))
    );

    // A stray pointer-up afterwards mutates nothing.
    session.pointer_up(&mut store);
    assert_eq!(
        committed_position(&store, board_id, item_id),
        Some(Point::new(50.0, 50.0))
    );
}

#[test]
fn test_sessions_on_missing_items_never_start() {
    let (store, board_id) = store_with_board("A");
    let mut session = ItemSession::new(board_id, Uuid::new_v4());

    session.begin_drag(Point::ZERO, &store);
    assert!(!session.is_dragging());

    session.begin_resize(ResizeCorner::SouthEast, Point::ZERO, &store);
    assert!(!session.is_resizing());
}

#[test]
fn test_independent_sessions_on_different_items() {
    let (mut store, board_id) = store_with_board("A");
    let first = image_item_at((0.0, 0.0), (200.0, 100.0));
    let second = image_item_at((300.0, 0.0), (200.0, 200.0));
    let (first_id, second_id) = (first.id, second.id);
    store.add_item(board_id, first);
    store.add_item(board_id, second);

    // Two items may be mid-session at once; the store does not coordinate them.
    let mut drag = ItemSession::new(board_id, first_id);
    let mut resize = ItemSession::new(board_id, second_id);

    drag.begin_drag(Point::new(0.0, 0.0), &store);
    resize.begin_resize(ResizeCorner::SouthEast, Point::new(500.0, 200.0), &store);
    assert!(drag.is_dragging());
    assert!(resize.is_resizing());

    resize.pointer_move(Point::new(550.0, 200.0), wide_open_bounds(), &mut store);
    drag.pointer_move(Point::new(20.0, 30.0), wide_open_bounds(), &mut store);
    drag.pointer_up(&mut store);
    resize.pointer_up(&mut store);

    assert_eq!(
        committed_position(&store, board_id, first_id),
        Some(Point::new(20.0, 30.0))
    );
    assert_eq!(
        committed_size(&store, board_id, second_id),
        Some(Size::new(250.0, 250.0))
    );
}
