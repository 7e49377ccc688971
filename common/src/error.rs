//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 入力チェックの失敗はここでは扱わない。
/// [`crate::schema::FieldErrors`] としてフォームに返す。
#[derive(Error, Debug)]
pub enum Error {
    #[error("No record at position {index} (list has {len})")]
    NoSuchRecord { index: usize, len: usize },

    #[error("Photo error: {0}")]
    Photo(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
