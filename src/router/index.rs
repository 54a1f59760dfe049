use crate::board::index::board_routes;
use actix_web::web;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(board_routes);
}
