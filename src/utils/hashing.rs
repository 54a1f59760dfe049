use crate::utils::error::CustomError;
use bcrypt::{DEFAULT_COST, hash, verify};

pub fn hash_password(password: &str) -> Result<String, CustomError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| CustomError::InternalServerError(format!("Failed to hash password: {}", e)))
}

/// Lower-cost variant used for seeded sample data.
pub fn hash_password_fast(password: &str) -> Result<String, CustomError> {
    hash(password, 4)
        .map_err(|e| CustomError::InternalServerError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool, CustomError> {
    verify(password, hashed)
        .map_err(|e| CustomError::InternalServerError(format!("Failed to verify password: {}", e)))
}
