pub mod model;

use self::model::{
    BoardDetailDto, BoardDto, BoardPageDto, BoardPayload, CommentDto, CommentPayload, Envelope,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Typed client for the board API, one method per endpoint.
pub struct BoardClient {
    http: reqwest::Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        BoardClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /boards?page=&size=
    pub async fn list(&self, page: usize, size: usize) -> Result<BoardPageDto, ClientError> {
        let response = self
            .http
            .get(self.url("/boards"))
            .query(&[("page", page), ("size", size)])
            .send()
            .await?;
        let response = check_status(response).await?;
        Ok(response.json::<BoardPageDto>().await?)
    }

    /// GET /boards/{id}
    pub async fn get(&self, id: u64) -> Result<BoardDetailDto, ClientError> {
        let response = self.http.get(self.url(&format!("/boards/{}", id))).send().await?;
        unwrap_data(check_status(response).await?).await
    }

    /// POST /boards
    pub async fn create(&self, payload: &BoardPayload) -> Result<BoardDto, ClientError> {
        let response = self
            .http
            .post(self.url("/boards"))
            .json(payload)
            .send()
            .await?;
        unwrap_data(check_status(response).await?).await
    }

    /// PUT /boards/{id}
    pub async fn update(&self, id: u64, payload: &BoardPayload) -> Result<BoardDto, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/boards/{}", id)))
            .json(payload)
            .send()
            .await?;
        unwrap_data(check_status(response).await?).await
    }

    /// DELETE /boards/{id}?password=NNNN
    pub async fn delete(&self, id: u64, password: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/boards/{}", id)))
            .query(&[("password", password)])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// POST /boards/{id}/comments
    pub async fn add_comment(
        &self,
        board_id: u64,
        payload: &CommentPayload,
    ) -> Result<CommentDto, ClientError> {
        let response = self
            .http
            .post(self.url(&format!("/boards/{}/comments", board_id)))
            .json(payload)
            .send()
            .await?;
        unwrap_data(check_status(response).await?).await
    }

    /// PUT /boards/{id}/comments/{commentId}
    pub async fn update_comment(
        &self,
        board_id: u64,
        comment_id: u64,
        payload: &CommentPayload,
    ) -> Result<CommentDto, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/boards/{}/comments/{}", board_id, comment_id)))
            .json(payload)
            .send()
            .await?;
        unwrap_data(check_status(response).await?).await
    }

    /// DELETE /boards/{id}/comments/{commentId}, password as a raw text body
    pub async fn delete_comment(
        &self,
        board_id: u64,
        comment_id: u64,
        password: &str,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/boards/{}/comments/{}", board_id, comment_id)))
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(password.to_string())
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turn non-2xx responses into `ClientError::Api`, using the message from the
/// error envelope when the body carries one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<Envelope<serde_json::Value>>().await {
        Ok(envelope) => envelope.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    Err(ClientError::Api { status, message })
}

async fn unwrap_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let envelope = response.json::<Envelope<T>>().await?;
    envelope
        .data
        .ok_or_else(|| ClientError::MalformedResponse("Response envelope had no data".into()))
}
