use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Common(#[from] nominee_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("入力エラーが {0} 件あります")]
    InvalidCandidate(usize),

    #[error("入力プロンプトエラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
