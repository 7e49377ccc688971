//! CLIセッション用のファイルパス写真ハンドル

use nominee_common::{Error, PhotoHandle, PhotoStore};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `photo:N` ハンドルと選択ファイルの対応
#[derive(Debug, Default)]
pub struct FilePhotoStore {
    next: usize,
    paths: HashMap<PhotoHandle, PathBuf>,
}

impl FilePhotoStore {
    pub fn resolve(&self, handle: &PhotoHandle) -> Option<&Path> {
        self.paths.get(handle).map(PathBuf::as_path)
    }

    /// 未解放のハンドル数
    pub fn live(&self) -> usize {
        self.paths.len()
    }

    /// パスと、画像として読めればピクセルサイズ
    pub fn describe(&self, handle: &PhotoHandle) -> String {
        match self.resolve(handle) {
            Some(path) => match image::image_dimensions(path) {
                Ok((w, h)) => format!("{} ({}x{})", path.display(), w, h),
                Err(_) => path.display().to_string(),
            },
            None => handle.to_string(),
        }
    }
}

impl PhotoStore for FilePhotoStore {
    type Source = PathBuf;

    fn create(&mut self, source: &PathBuf) -> nominee_common::Result<PhotoHandle> {
        if !source.is_file() {
            return Err(Error::Photo(format!("not a file: {}", source.display())));
        }
        self.next += 1;
        let handle = PhotoHandle::new(format!("photo:{}", self.next));
        tracing::debug!("{} -> {}", handle, source.display());
        self.paths.insert(handle.clone(), source.clone());
        Ok(handle)
    }

    fn release(&mut self, handle: &PhotoHandle) {
        if self.paths.remove(handle).is_some() {
            tracing::debug!("released {}", handle);
        }
    }
}
