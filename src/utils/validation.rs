use crate::utils::error::CustomError;
use regex::Regex;
use std::sync::OnceLock;

pub const TITLE_MAX_CHARS: usize = 20;
pub const BOARD_CONTENT_MAX_CHARS: usize = 3000;
pub const COMMENT_CONTENT_MAX_CHARS: usize = 200;

fn nickname_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9가-힣]{1,10}$").expect("valid nickname pattern"))
}

fn password_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}$").expect("valid password pattern"))
}

/// Title must be 1-20 characters after trimming.
pub fn validate_title(title: &str) -> Result<(), CustomError> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();
    if len == 0 || len > TITLE_MAX_CHARS {
        return Err(CustomError::ValidationError(
            "Title must be between 1 and 20 characters.".into(),
        ));
    }
    Ok(())
}

/// Board content must be 1-3000 characters after trimming.
pub fn validate_board_content(content: &str) -> Result<(), CustomError> {
    let len = content.trim().chars().count();
    if len == 0 || len > BOARD_CONTENT_MAX_CHARS {
        return Err(CustomError::ValidationError(
            "Content must be between 1 and 3000 characters.".into(),
        ));
    }
    Ok(())
}

/// Comment content must be 1-200 characters after trimming.
pub fn validate_comment_content(content: &str) -> Result<(), CustomError> {
    let len = content.trim().chars().count();
    if len == 0 || len > COMMENT_CONTENT_MAX_CHARS {
        return Err(CustomError::ValidationError(
            "Comment must be between 1 and 200 characters.".into(),
        ));
    }
    Ok(())
}

/// Nickname allows 1-10 letters, digits or Hangul syllables.
pub fn validate_nickname(nickname: &str) -> Result<(), CustomError> {
    if !nickname_regex().is_match(nickname.trim()) {
        return Err(CustomError::ValidationError(
            "Nickname must be 1-10 letters, digits or Hangul.".into(),
        ));
    }
    Ok(())
}

/// Password must be exactly 4 digits.
pub fn validate_password(password: &str) -> Result<(), CustomError> {
    if !password_regex().is_match(password) {
        return Err(CustomError::ValidationError(
            "Password must be exactly 4 digits.".into(),
        ));
    }
    Ok(())
}
