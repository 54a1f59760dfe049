use crate::board::model::{Board, BoardDetail, CreateBoardRequest, UpdateBoardRequest};
use crate::store::MemoryStore;
use crate::utils::error::CustomError;
use crate::utils::pagination::{self, Page};
use crate::utils::{hashing, validation};
use chrono::Utc;
use std::sync::Arc;

pub struct BoardService {
    store: Arc<MemoryStore>,
}

impl BoardService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        BoardService { store }
    }

    pub fn create_board(&self, req: &CreateBoardRequest) -> Result<Board, CustomError> {
        validation::validate_title(&req.title)?;
        validation::validate_board_content(&req.content)?;
        validation::validate_nickname(&req.nickname)?;
        validation::validate_password(&req.password)?;

        let board = Board {
            id: self.store.next_board_id(),
            title: req.title.trim().to_string(),
            content: req.content.trim().to_string(),
            nickname: req.nickname.trim().to_string(),
            password: hashing::hash_password(&req.password)?,
            created_at: Utc::now(),
            updated_at: None,
            deleted: false,
        };

        self.store.insert_board(board)
    }

    /// Live boards, newest first, paginated.
    pub fn list_boards(&self, page: usize, size: usize) -> Result<Page<Board>, CustomError> {
        let mut boards = self.store.live_boards()?;
        boards.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(pagination::paginate(&boards, page, size))
    }

    pub fn get_board(&self, id: u64) -> Result<BoardDetail, CustomError> {
        let board = self
            .store
            .find_board(id)?
            .ok_or_else(|| CustomError::NotFoundError("Board not found".into()))?;
        let comments = self.store.live_comments(id)?;

        Ok(BoardDetail { board, comments })
    }

    pub fn update_board(&self, id: u64, req: &UpdateBoardRequest) -> Result<Board, CustomError> {
        validation::validate_title(&req.title)?;
        validation::validate_board_content(&req.content)?;
        validation::validate_nickname(&req.nickname)?;
        validation::validate_password(&req.password)?;

        let board = self
            .store
            .find_board(id)?
            .ok_or_else(|| CustomError::NotFoundError("Board not found".into()))?;

        if !hashing::verify_password(&req.password, &board.password)? {
            return Err(CustomError::UnauthorizedError(
                "Password does not match".into(),
            ));
        }

        self.store
            .update_board(id, |b| {
                b.title = req.title.trim().to_string();
                b.content = req.content.trim().to_string();
                b.nickname = req.nickname.trim().to_string();
                b.updated_at = Some(Utc::now());
            })?
            .ok_or_else(|| CustomError::NotFoundError("Board not found".into()))
    }

    pub fn delete_board(&self, id: u64, password: &str) -> Result<(), CustomError> {
        validation::validate_password(password)?;

        let board = self
            .store
            .find_board(id)?
            .ok_or_else(|| CustomError::NotFoundError("Board not found".into()))?;

        if !hashing::verify_password(password, &board.password)? {
            return Err(CustomError::UnauthorizedError(
                "Password does not match".into(),
            ));
        }

        self.store
            .update_board(id, |b| {
                b.deleted = true;
                b.updated_at = Some(Utc::now());
            })?
            .ok_or_else(|| CustomError::NotFoundError("Board not found".into()))?;

        Ok(())
    }
}
