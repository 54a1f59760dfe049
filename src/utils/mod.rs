pub mod error;
pub mod hashing;
pub mod pagination;
pub mod validation;
