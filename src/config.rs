use crate::error::{Result, RosterError};
use nominee_common::FormSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub form: FormSettings,
    pub confirm_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            form: FormSettings::default(),
            confirm_delete: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// `path` を読み込む。ファイルがなければデフォルト値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.check()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.check()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RosterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("nominee-roster").join("config.json"))
    }

    fn check(&self) -> Result<()> {
        if self.form.preview_width_px == 0 {
            return Err(RosterError::Config("previewWidthPx は1以上にしてください".into()));
        }
        Ok(())
    }
}
