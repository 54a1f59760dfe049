use super::controller::{create_board, delete_board, get_board, list_boards, update_board};
use crate::comment::index::comment_routes;
use actix_web::web;

pub fn board_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/boards")
            .route("", web::get().to(list_boards))
            .route("", web::post().to(create_board))
            .route("/{id}", web::get().to(get_board))
            .route("/{id}", web::put().to(update_board))
            .route("/{id}", web::delete().to(delete_board))
            .configure(comment_routes),
    );
}
