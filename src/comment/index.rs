use super::controller::{create_comment, delete_comment, get_board_comments, update_comment};
use actix_web::web;

/// Nested under the /boards scope.
pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{board_id}/comments", web::get().to(get_board_comments))
        .route("/{board_id}/comments", web::post().to(create_comment))
        .route(
            "/{board_id}/comments/{comment_id}",
            web::put().to(update_comment),
        )
        .route(
            "/{board_id}/comments/{comment_id}",
            web::delete().to(delete_comment),
        );
}
