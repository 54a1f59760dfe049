pub mod board;
pub mod client;
pub mod comment;
pub mod middleware;
pub mod router;
pub mod store;
pub mod utils;
