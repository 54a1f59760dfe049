use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields sent when creating or editing a board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardPayload {
    pub title: String,
    pub content: String,
    pub nickname: String,
    pub password: String,
}

/// Fields sent when creating or editing a comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub content: String,
    pub nickname: String,
    pub password: String,
}

/// Board record as it appears on the wire. Passwords never leave the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: u64,
    pub board_id: u64,
    pub content: String,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted: bool,
}

/// Detail response: board fields plus embedded comments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDetailDto {
    #[serde(flatten)]
    pub board: BoardDto,
    pub comments: Vec<CommentDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPageDto {
    pub count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub data: Vec<BoardDto>,
}

/// Common response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub http_status_code: u16,
    pub data: Option<T>,
}
