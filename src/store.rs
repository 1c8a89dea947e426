//! The board store - single source of truth for boards and selection.
//!
//! ## Design
//!
//! Every operation here is total: a lookup that finds no matching board or
//! item leaves the store unchanged and returns normally. That no-op contract
//! is what the presentation layer builds its "board not found" handling on;
//! nothing in this module raises or signals an error.
//!
//! Execution is single-threaded and event-driven, so the store needs no
//! locking. Each operation is applied atomically with respect to readers:
//! a caller never observes a partially merged patch.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::board::Board;
use crate::geometry::{Point, Size};
use crate::types::{Item, ItemContent};

// ============================================================================
// Patches
// ============================================================================

/// Partial board update; `Some` fields are merged, `None` fields are kept.
#[derive(Clone, Debug, Default)]
pub struct BoardPatch {
    pub name: Option<String>,
}

impl BoardPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn apply(self, board: &mut Board) {
        if let Some(name) = self.name {
            board.name = name;
        }
    }
}

/// Partial item update; `Some` fields are merged, `None` fields are kept.
#[derive(Clone, Debug, Default)]
pub struct ItemPatch {
    pub content: Option<ItemContent>,
    pub position: Option<Point>,
    pub size: Option<Size>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, content: ItemContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    fn apply(self, item: &mut Item) {
        if let Some(content) = self.content {
            item.content = content;
        }
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(size) = self.size {
            item.size = Some(size);
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// Owns the canonical collection of boards and the current selection.
///
/// `current_board_id` is a lookup key, not an object handle: it may point at
/// a board that does not (or no longer) exist, and [`BoardStore::current_board`]
/// resolves that to `None`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardStore {
    boards: Vec<Board>,
    current_board_id: Option<Uuid>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Reads ====================

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn get_board(&self, board_id: Uuid) -> Option<&Board> {
        self.boards.iter().find(|board| board.id == board_id)
    }

    pub fn current_board_id(&self) -> Option<Uuid> {
        self.current_board_id
    }

    /// Resolve the selection to a board, `None` if nothing is selected or the
    /// selected board is missing.
    pub fn current_board(&self) -> Option<&Board> {
        self.current_board_id.and_then(|id| self.get_board(id))
    }

    // ==================== Board CRUD ====================

    /// Replace the whole board collection. Selection is left untouched.
    pub fn set_boards(&mut self, boards: Vec<Board>) {
        debug!(count = boards.len(), "replaced board collection");
        self.boards = boards;
    }

    /// Append a board. Unique id generation is the caller's responsibility.
    pub fn add_board(&mut self, board: Board) {
        debug!(board_id = %board.id, name = %board.name, "added board");
        self.boards.push(board);
    }

    /// Remove a board by id, discarding its items as a unit.
    ///
    /// If the removed board was the current selection, the selection resets
    /// to `None`. That side effect is part of the contract, not incidental.
    pub fn remove_board(&mut self, board_id: Uuid) {
        self.boards.retain(|board| board.id != board_id);
        if self.current_board_id == Some(board_id) {
            self.current_board_id = None;
        }
        debug!(%board_id, "removed board");
    }

    /// Merge a patch into the matching board; no-op if the id is unknown.
    pub fn update_board(&mut self, board_id: Uuid, patch: BoardPatch) {
        if let Some(board) = self.boards.iter_mut().find(|board| board.id == board_id) {
            patch.apply(board);
            debug!(%board_id, "updated board");
        }
    }

    /// Set the selection directly.
    ///
    /// Existence is not validated: the selection may transiently point at a
    /// missing board, which readers must resolve via [`BoardStore::current_board`].
    pub fn set_current_board(&mut self, board_id: Option<Uuid>) {
        self.current_board_id = board_id;
    }

    // ==================== Item CRUD ====================

    /// Append an item to a board; no-op if the board is unknown.
    pub fn add_item(&mut self, board_id: Uuid, item: Item) {
        if let Some(board) = self.boards.iter_mut().find(|board| board.id == board_id) {
            debug!(%board_id, item_id = %item.id, kind = item.content.type_label(), "added item");
            board.add_item(item);
        }
    }

    /// Merge a patch into the matching item; no-op if either id is unknown.
    pub fn update_item(&mut self, board_id: Uuid, item_id: Uuid, patch: ItemPatch) {
        if let Some(item) = self
            .boards
            .iter_mut()
            .find(|board| board.id == board_id)
            .and_then(|board| board.get_item_mut(item_id))
        {
            patch.apply(item);
        }
    }

    /// Remove an item; no-op if either id is unknown.
    pub fn remove_item(&mut self, board_id: Uuid, item_id: Uuid) {
        if let Some(board) = self.boards.iter_mut().find(|board| board.id == board_id) {
            board.remove_item(item_id);
            debug!(%board_id, %item_id, "removed item");
        }
    }
}
