use crate::comment::model::{Comment, CreateCommentRequest, UpdateCommentRequest};
use crate::store::MemoryStore;
use crate::utils::error::CustomError;
use crate::utils::{hashing, validation};
use chrono::Utc;
use std::sync::Arc;

pub struct CommentService {
    store: Arc<MemoryStore>,
}

impl CommentService {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        CommentService { store }
    }

    fn require_board(&self, board_id: u64) -> Result<(), CustomError> {
        self.store
            .find_board(board_id)?
            .map(|_| ())
            .ok_or_else(|| CustomError::NotFoundError("Board not found".into()))
    }

    fn require_comment(&self, board_id: u64, id: u64) -> Result<Comment, CustomError> {
        self.store
            .find_comment(board_id, id)?
            .ok_or_else(|| CustomError::NotFoundError("Comment not found".into()))
    }

    pub fn add_comment(
        &self,
        board_id: u64,
        req: &CreateCommentRequest,
    ) -> Result<Comment, CustomError> {
        validation::validate_comment_content(&req.content)?;
        validation::validate_nickname(&req.nickname)?;
        validation::validate_password(&req.password)?;
        self.require_board(board_id)?;

        let comment = Comment {
            id: self.store.next_comment_id(),
            board_id,
            content: req.content.trim().to_string(),
            nickname: req.nickname.trim().to_string(),
            password: hashing::hash_password(&req.password)?,
            created_at: Utc::now(),
            updated_at: None,
            deleted: false,
        };

        self.store.insert_comment(comment)
    }

    /// Live comments on a board, oldest first.
    pub fn comments_for_board(&self, board_id: u64) -> Result<Vec<Comment>, CustomError> {
        self.require_board(board_id)?;
        let mut comments = self.store.live_comments(board_id)?;
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(comments)
    }

    pub fn update_comment(
        &self,
        board_id: u64,
        id: u64,
        req: &UpdateCommentRequest,
    ) -> Result<Comment, CustomError> {
        validation::validate_comment_content(&req.content)?;
        validation::validate_nickname(&req.nickname)?;
        validation::validate_password(&req.password)?;

        let comment = self.require_comment(board_id, id)?;
        if !hashing::verify_password(&req.password, &comment.password)? {
            return Err(CustomError::UnauthorizedError(
                "Password does not match".into(),
            ));
        }

        self.store
            .update_comment(board_id, id, |c| {
                c.content = req.content.trim().to_string();
                c.nickname = req.nickname.trim().to_string();
                c.updated_at = Some(Utc::now());
            })?
            .ok_or_else(|| CustomError::NotFoundError("Comment not found".into()))
    }

    pub fn delete_comment(&self, board_id: u64, id: u64, password: &str) -> Result<(), CustomError> {
        validation::validate_password(password)?;

        let comment = self.require_comment(board_id, id)?;
        if !hashing::verify_password(password, &comment.password)? {
            return Err(CustomError::UnauthorizedError(
                "Password does not match".into(),
            ));
        }

        self.store
            .update_comment(board_id, id, |c| {
                c.deleted = true;
                c.updated_at = Some(Utc::now());
            })?
            .ok_or_else(|| CustomError::NotFoundError("Comment not found".into()))?;

        Ok(())
    }
}
