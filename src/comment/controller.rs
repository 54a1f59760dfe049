use crate::comment::model::{CreateCommentRequest, UpdateCommentRequest};
use crate::comment::service::CommentService;
use crate::utils::error::CustomError;
use actix_web::{HttpResponse, web};
use serde_json::json;

fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Create a comment on a board
/// POST /boards/{board_id}/comments
pub async fn create_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<u64>,
    body: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    let comment = comment_service.add_comment(path.into_inner(), &body)?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Comment created successfully",
        "httpStatusCode": 201,
        "service": service_name(),
        "data": comment,
    })))
}

/// Live comments on a board, oldest first
/// GET /boards/{board_id}/comments
pub async fn get_board_comments(
    comment_service: web::Data<CommentService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, CustomError> {
    let comments = comment_service.comments_for_board(path.into_inner())?;
    let count = comments.len();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comments fetched successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "count": count,
        "data": comments,
    })))
}

/// Update a comment; password travels in the JSON body
/// PUT /boards/{board_id}/comments/{comment_id}
pub async fn update_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<(u64, u64)>,
    body: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse, CustomError> {
    let (board_id, comment_id) = path.into_inner();
    let comment = comment_service.update_comment(board_id, comment_id, &body)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment updated successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "data": comment,
    })))
}

/// Soft-delete a comment; password travels as a raw text body
/// DELETE /boards/{board_id}/comments/{comment_id}
pub async fn delete_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<(u64, u64)>,
    password: String,
) -> Result<HttpResponse, CustomError> {
    let (board_id, comment_id) = path.into_inner();
    comment_service.delete_comment(board_id, comment_id, password.trim())?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Comment deleted successfully",
        "httpStatusCode": 200,
        "service": service_name(),
    })))
}
