use crate::board::model::{CreateBoardRequest, DeleteBoardQuery, UpdateBoardRequest};
use crate::board::service::BoardService;
use crate::utils::error::CustomError;
use crate::utils::pagination::{DEFAULT_PAGE_SIZE, PageQuery};
use actix_web::{HttpResponse, web};
use serde_json::json;

fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Create a new board
/// POST /boards
pub async fn create_board(
    board_service: web::Data<BoardService>,
    body: web::Json<CreateBoardRequest>,
) -> Result<HttpResponse, CustomError> {
    let board = board_service.create_board(&body)?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Board created successfully",
        "httpStatusCode": 201,
        "service": service_name(),
        "data": board,
    })))
}

/// List live boards, newest first
/// GET /boards?page=&size=
pub async fn list_boards(
    board_service: web::Data<BoardService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, CustomError> {
    let page = board_service.list_boards(
        query.page.unwrap_or(1),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
    )?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Boards fetched successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "count": page.total_count,
        "page": page.page,
        "totalPages": page.total_pages,
        "data": page.items,
    })))
}

/// Board detail with its live comments
/// GET /boards/{id}
pub async fn get_board(
    board_service: web::Data<BoardService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, CustomError> {
    let detail = board_service.get_board(path.into_inner())?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Board fetched successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "data": detail,
    })))
}

/// Update a board; password travels in the JSON body
/// PUT /boards/{id}
pub async fn update_board(
    board_service: web::Data<BoardService>,
    path: web::Path<u64>,
    body: web::Json<UpdateBoardRequest>,
) -> Result<HttpResponse, CustomError> {
    let board = board_service.update_board(path.into_inner(), &body)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Board updated successfully",
        "httpStatusCode": 200,
        "service": service_name(),
        "data": board,
    })))
}

/// Soft-delete a board; password travels as a query param
/// DELETE /boards/{id}?password=NNNN
pub async fn delete_board(
    board_service: web::Data<BoardService>,
    path: web::Path<u64>,
    query: web::Query<DeleteBoardQuery>,
) -> Result<HttpResponse, CustomError> {
    board_service.delete_board(path.into_inner(), &query.password)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Board deleted successfully",
        "httpStatusCode": 200,
        "service": service_name(),
    })))
}
