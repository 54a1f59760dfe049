use crate::board::model::Board;
use crate::comment::model::Comment;
use crate::store::memory::MemoryStore;
use crate::utils::error::CustomError;
use crate::utils::hashing;
use chrono::{Duration, Utc};
use log::info;

/// Populate the store with the sample data set the board UI ships with:
/// 20 boards a minute apart and 5 comments on the first board, all with
/// password "1234".
pub fn seed_sample_data(store: &MemoryStore) -> Result<(), CustomError> {
    let now = Utc::now();
    let password = hashing::hash_password_fast("1234")?;

    for i in 0..20u64 {
        let board = Board {
            id: store.next_board_id(),
            title: format!("샘플 게시글 {}", i + 1),
            content: format!("이것은 샘플 게시글 {}의 내용입니다.", i + 1),
            nickname: format!("사용자{}", i + 1),
            password: password.clone(),
            created_at: now - Duration::minutes(i as i64),
            updated_at: None,
            deleted: false,
        };
        store.insert_board(board)?;
    }

    for i in 0..5u64 {
        let comment = Comment {
            id: store.next_comment_id(),
            board_id: 1,
            content: format!("샘플 댓글 {}", i + 1),
            nickname: format!("댓글러{}", i + 1),
            password: password.clone(),
            created_at: now - Duration::seconds(10 * i as i64),
            updated_at: None,
            deleted: false,
        };
        store.insert_comment(comment)?;
    }

    info!("Seeded 20 sample boards and 5 sample comments");
    Ok(())
}
