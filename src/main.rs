use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use board_backend::board::service::BoardService;
use board_backend::comment::service::CommentService;
use board_backend::middleware::error_handler::handle_error;
use board_backend::middleware::not_found::not_found;
use board_backend::router::index::routes;
use board_backend::store::{MemoryStore, seed};
use dotenvy::dotenv;
use env_logger::Env;
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the board API",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8085);

    let store = Arc::new(MemoryStore::new());

    // Sample data on by default, SEED_SAMPLE_DATA=false to start empty
    let seed_enabled = std::env::var("SEED_SAMPLE_DATA")
        .map(|v| v != "false")
        .unwrap_or(true);
    if seed_enabled {
        if let Err(e) = seed::seed_sample_data(&store) {
            warn!("Failed to seed sample data: {}", e);
        }
    }

    let board_service = web::Data::new(BoardService::new(store.clone()));
    let comment_service = web::Data::new(CommentService::new(store.clone()));

    info!("Starting server on http://localhost:{}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(board_service.clone())
            .app_data(comment_service.clone())
            .configure(routes)
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::NOT_FOUND, not_found)
                    .default_handler(handle_error),
            )
            .service(default)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
