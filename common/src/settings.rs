//! フォーム表示設定

use crate::labels;
use serde::{Deserialize, Serialize};

/// 両フロントエンド共通の表示設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    /// フォーム上部の見出し
    pub title: String,
    /// プレビュー・一覧の写真幅
    pub preview_width_px: u32,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: labels::TITLE.to_string(),
            preview_width_px: 100,
        }
    }
}
