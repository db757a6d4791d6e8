use std::{num::NonZeroUsize, sync::Arc};

use druid::ImageBuf;
use lru::LruCache;
use parking_lot::Mutex;

pub struct WebApiCache {
    images: Mutex<LruCache<Arc<str>, ImageBuf>>,
}

impl WebApiCache {
    pub fn new() -> Self {
        const IMAGE_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(256) {
            Some(size) => size,
            None => unreachable!(),
        };
        Self {
            images: Mutex::new(LruCache::new(IMAGE_CACHE_SIZE)),
        }
    }

    pub fn get_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.images.lock().get(uri).cloned()
    }

    pub fn set_image(&self, uri: Arc<str>, image: ImageBuf) {
        self.images.lock().put(uri, image);
    }
}
