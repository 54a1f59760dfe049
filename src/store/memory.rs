use crate::board::model::Board;
use crate::comment::model::Comment;
use crate::utils::error::CustomError;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory backing store for boards and comments.
///
/// Plays the role a database client would otherwise play: services get a
/// shared handle and run their reads and writes through it. Records are
/// soft-deleted, so the vectors only ever grow.
pub struct MemoryStore {
    boards: RwLock<Vec<Board>>,
    comments: RwLock<Vec<Comment>>,
    next_board_id: AtomicU64,
    next_comment_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            boards: RwLock::new(Vec::new()),
            comments: RwLock::new(Vec::new()),
            next_board_id: AtomicU64::new(1),
            next_comment_id: AtomicU64::new(1),
        }
    }

    pub fn next_board_id(&self) -> u64 {
        self.next_board_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_comment_id(&self) -> u64 {
        self.next_comment_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn insert_board(&self, board: Board) -> Result<Board, CustomError> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        boards.push(board.clone());
        Ok(board)
    }

    pub fn insert_comment(&self, comment: Comment) -> Result<Comment, CustomError> {
        let mut comments = self.comments.write().map_err(poisoned)?;
        comments.push(comment.clone());
        Ok(comment)
    }

    /// Snapshot of all live (non-deleted) boards, unordered.
    pub fn live_boards(&self) -> Result<Vec<Board>, CustomError> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(boards.iter().filter(|b| !b.deleted).cloned().collect())
    }

    pub fn find_board(&self, id: u64) -> Result<Option<Board>, CustomError> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(boards.iter().find(|b| b.id == id && !b.deleted).cloned())
    }

    /// Apply `mutate` to the live board `id`; returns the updated record.
    pub fn update_board<F>(&self, id: u64, mutate: F) -> Result<Option<Board>, CustomError>
    where
        F: FnOnce(&mut Board),
    {
        let mut boards = self.boards.write().map_err(poisoned)?;
        match boards.iter_mut().find(|b| b.id == id && !b.deleted) {
            Some(board) => {
                mutate(board);
                Ok(Some(board.clone()))
            }
            None => Ok(None),
        }
    }

    /// Live comments on a board, in insertion order.
    pub fn live_comments(&self, board_id: u64) -> Result<Vec<Comment>, CustomError> {
        let comments = self.comments.read().map_err(poisoned)?;
        Ok(comments
            .iter()
            .filter(|c| c.board_id == board_id && !c.deleted)
            .cloned()
            .collect())
    }

    pub fn find_comment(&self, board_id: u64, id: u64) -> Result<Option<Comment>, CustomError> {
        let comments = self.comments.read().map_err(poisoned)?;
        Ok(comments
            .iter()
            .find(|c| c.id == id && c.board_id == board_id && !c.deleted)
            .cloned())
    }

    pub fn update_comment<F>(
        &self,
        board_id: u64,
        id: u64,
        mutate: F,
    ) -> Result<Option<Comment>, CustomError>
    where
        F: FnOnce(&mut Comment),
    {
        let mut comments = self.comments.write().map_err(poisoned)?;
        match comments
            .iter_mut()
            .find(|c| c.id == id && c.board_id == board_id && !c.deleted)
        {
            Some(comment) => {
                mutate(comment);
                Ok(Some(comment.clone()))
            }
            None => Ok(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CustomError {
    CustomError::InternalServerError("Store lock poisoned".into())
}
