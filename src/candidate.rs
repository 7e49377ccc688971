//! 候補者ファイル
//!
//! フォーム1回分の入力をJSONで持つ。写真はパスの配列で指定する:
//!
//! ```json
//! { "honorific": "นาย", "firstName": "สมชาย", "photos": ["somchai.jpg"], ... }
//! ```

use crate::error::Result;
use crate::photo_store::FilePhotoStore;
use nominee_common::{Candidate, PhotoSelection, PhotoStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateFile {
    pub honorific: String,
    pub first_name: String,
    pub last_name: String,
    pub career_history: String,
    pub achievements: String,
    pub photos: Vec<PathBuf>,
    pub position: String,
    pub party: String,
}

impl CandidateFile {
    /// 候補者ファイルを読み込む（写真の相対パスはファイルのフォルダ基準）
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut file: CandidateFile = serde_json::from_str(&content)?;

        let base_dir = path.parent().unwrap_or(Path::new("."));
        for photo in &mut file.photos {
            if photo.is_relative() {
                *photo = base_dir.join(&*photo);
            }
        }
        Ok(file)
    }

    /// フォーム値に変換し、先頭の写真だけハンドルを作る
    pub fn into_candidate(self, store: &mut FilePhotoStore) -> Result<Candidate> {
        let photo = match self.photos.first() {
            Some(first) => Some(PhotoSelection {
                count: self.photos.len(),
                handle: store.create(first)?,
            }),
            None => None,
        };

        Ok(Candidate {
            honorific: self.honorific,
            first_name: self.first_name,
            last_name: self.last_name,
            career_history: self.career_history,
            achievements: self.achievements,
            photo,
            position: self.position,
            party: self.party,
        })
    }
}
