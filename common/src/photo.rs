//! 写真ハンドル
//!
//! 名簿は写真そのものを持たない。フロントエンドが選択ファイルから
//! セッション内だけ有効なハンドル（ブラウザではオブジェクトURL、CLIでは
//! 連番のパス参照）を作り、フォームはそのハンドルを受け渡すだけ。
//! 解放も同じストア経由で明示的に行う。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// セッション内の写真参照
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoHandle(String);

impl PhotoHandle {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 画像の src にそのまま使える値
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// フロントエンドごとのハンドル生成・解放
pub trait PhotoStore {
    /// フロントエンド側の選択ファイル
    type Source;

    fn create(&mut self, source: &Self::Source) -> Result<PhotoHandle>;

    /// ハンドルを解放する。未知のハンドルは無視
    fn release(&mut self, handle: &PhotoHandle);
}
