//! オブジェクトURLの写真ハンドル

use gloo::file::ObjectUrl;
use nominee_common::{PhotoHandle, PhotoStore, Result};
use std::collections::HashMap;

/// 生存中のオブジェクトURLを保持（drop で revoke される）
#[derive(Default)]
pub struct ObjectUrlStore {
    urls: HashMap<PhotoHandle, ObjectUrl>,
}

impl ObjectUrlStore {
    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

impl PhotoStore for ObjectUrlStore {
    type Source = web_sys::File;

    fn create(&mut self, source: &web_sys::File) -> Result<PhotoHandle> {
        let blob: &web_sys::Blob = source;
        let url = ObjectUrl::from(gloo::file::Blob::from(blob.clone()));
        let handle = PhotoHandle::new(&*url);
        self.urls.insert(handle.clone(), url);
        Ok(handle)
    }

    fn release(&mut self, handle: &PhotoHandle) {
        if self.urls.remove(handle).is_some() {
            tracing::debug!("revoked {}", handle);
        }
    }
}
