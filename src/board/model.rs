use crate::comment::model::Comment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub nickname: String,
    /// bcrypt hash, never sent over the wire.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
}

/// Detail view: the board with its live comments embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub title: String,
    pub content: String,
    pub nickname: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBoardRequest {
    pub title: String,
    pub content: String,
    pub nickname: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteBoardQuery {
    pub password: String,
}
