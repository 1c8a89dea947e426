//! Per-item session driver - drag and resize from raw pointer events.
//!
//! A session owns no canonical state: it reads the item from the store at
//! entry, accumulates transient geometry while the pointer moves, and commits
//! results back through [`BoardStore::update_item`]. Drag commits once on
//! release; resize commits on every move so the presentation layer gets live
//! feedback, and release itself mutates nothing further.
//!
//! The caller attaches pointer-move/pointer-up listeners to its input surface
//! only while a session is active. If that surface is torn down without a
//! release event, [`ItemSession::detach`] must be called on the way out so a
//! stale session cannot keep acting on a dead item.

use tracing::{debug, trace};
use uuid::Uuid;

use crate::constants::{DEFAULT_ASPECT_RATIO, FALLBACK_ITEM_SIZE, MIN_ITEM_WIDTH};
use crate::geometry::{aspect_ratio, Bounds, Point, Size};
use crate::store::{BoardStore, ItemPatch};

/// Corner handles an item can be resized from.
///
/// Only the south-east handle starts a session today; the other corners are
/// reserved extension points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeCorner {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

/// Interactive drag/resize session manager for exactly one item.
///
/// Sessions on different items are fully independent; the store does not
/// coordinate them.
#[derive(Clone, Debug)]
pub struct ItemSession {
    board_id: Uuid,
    item_id: Uuid,
    state: super::SessionState,
    /// Cached ratio from the item's natural image dimensions, 1.0 until known
    aspect_ratio: f32,
}

impl ItemSession {
    pub fn new(board_id: Uuid, item_id: Uuid) -> Self {
        Self {
            board_id,
            item_id,
            state: super::SessionState::Idle,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }

    pub fn item_id(&self) -> Uuid {
        self.item_id
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.state.is_resizing()
    }

    /// The transient drag position the presentation layer should render,
    /// `None` when no drag is in progress.
    pub fn preview_position(&self) -> Option<Point> {
        self.state.dragged_position()
    }

    /// Consume the natural image dimensions once the image has loaded.
    ///
    /// The cached ratio is locked while a resize is in progress: a
    /// late-arriving load notification must not change the scale mid-session.
    pub fn set_natural_size(&mut self, natural_width: f32, natural_height: f32) {
        if self.state.is_resizing() {
            return;
        }
        self.aspect_ratio = aspect_ratio(natural_width, natural_height);
    }

    // ==================== Session entry ====================

    /// Pointer down on the item body. Starts a drag unless a resize is
    /// already active or the item is gone.
    pub fn begin_drag(&mut self, pointer: Point, store: &BoardStore) {
        if !self.state.is_idle() {
            return;
        }
        let Some(item) = store
            .get_board(self.board_id)
            .and_then(|board| board.get_item(self.item_id))
        else {
            return;
        };

        debug!(item_id = %self.item_id, "drag session started");
        self.state.start_dragging(pointer - item.position, item.position);
    }

    /// Pointer down on a resize handle.
    ///
    /// Captures the start pointer, the item's current size, and the locked
    /// aspect ratio. Corners other than south-east do not start a session.
    pub fn begin_resize(&mut self, corner: ResizeCorner, pointer: Point, store: &BoardStore) {
        if corner != ResizeCorner::SouthEast {
            return;
        }
        if !self.state.is_idle() {
            return;
        }
        let Some(item) = store
            .get_board(self.board_id)
            .and_then(|board| board.get_item(self.item_id))
        else {
            return;
        };

        let start_size = item.size.unwrap_or_else(|| FALLBACK_ITEM_SIZE.into());
        debug!(item_id = %self.item_id, ratio = self.aspect_ratio, "resize session started");
        self.state.start_resizing(pointer, start_size, self.aspect_ratio);
    }

    // ==================== Pointer events ====================

    /// Pointer move. `bounds` is the parent container rectangle supplied by
    /// the rendering surface, used to clamp drags.
    ///
    /// While dragging, only the transient position changes; while resizing,
    /// the derived size is committed to the store on every move.
    pub fn pointer_move(&mut self, pointer: Point, bounds: Bounds, store: &mut BoardStore) {
        match self.state {
            super::SessionState::Dragging { grab_offset, .. } => {
                let item_size = store
                    .get_board(self.board_id)
                    .and_then(|board| board.get_item(self.item_id))
                    .and_then(|item| item.size)
                    .unwrap_or(Size::ZERO);

                let position = bounds.clamp_origin(pointer - grab_offset, item_size);
                trace!(x = position.x, y = position.y, "drag move");
                self.state.update_dragged_position(position);
            }
            super::SessionState::Resizing {
                start_pointer,
                start_size,
                aspect_ratio,
            } => {
                // Width-driven: the vertical delta is ignored and height is
                // always derived, so the item scales uniformly.
                let dx = pointer.x - start_pointer.x;
                let width = (start_size.width + dx).max(MIN_ITEM_WIDTH);
                let height = width / aspect_ratio;

                trace!(width, height, "resize move");
                store.update_item(
                    self.board_id,
                    self.item_id,
                    ItemPatch::new().with_size(Size::new(width, height)),
                );
            }
            super::SessionState::Idle => {}
        }
    }

    /// Pointer up. Commits the final drag position (a single store write) and
    /// ends the session; a resize has already committed its last move.
    pub fn pointer_up(&mut self, store: &mut BoardStore) {
        if let Some(position) = self.state.dragged_position() {
            store.update_item(
                self.board_id,
                self.item_id,
                ItemPatch::new().with_position(position),
            );
        }
        if !self.state.is_idle() {
            debug!(item_id = %self.item_id, "session ended");
        }
        self.state.reset();
    }

    /// Tear the session down without committing anything.
    ///
    /// For the exit path where the input surface disappears before a release
    /// event is delivered.
    pub fn detach(&mut self) {
        if !self.state.is_idle() {
            debug!(item_id = %self.item_id, "session detached");
        }
        self.state.reset();
    }
}
