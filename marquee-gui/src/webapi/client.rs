use std::sync::Arc;

use druid::{
    image::{self, ImageFormat},
    ImageBuf,
};
use marquee_core::yts::YtsApi;
use once_cell::sync::OnceCell;

use crate::{
    data::{Movie, MovieLink},
    error::Error,
};

use super::cache::WebApiCache;

pub struct WebApi {
    yts: YtsApi,
    cache: WebApiCache,
}

impl WebApi {
    pub fn new(proxy_url: Option<&str>) -> Self {
        Self {
            yts: YtsApi::new(proxy_url),
            cache: WebApiCache::new(),
        }
    }
}

static GLOBAL_WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// Global instance.
impl WebApi {
    pub fn install_as_global(self) {
        if GLOBAL_WEBAPI.set(Arc::new(self)).is_err() {
            log::warn!("WebApi already installed, keeping the first instance");
        }
    }

    pub fn global() -> Arc<Self> {
        GLOBAL_WEBAPI
            .get()
            .cloned()
            .expect("WebApi::install_as_global must run before use")
    }
}

/// Movie endpoints.
impl WebApi {
    pub fn get_movie(&self, link: &MovieLink) -> Result<Movie, Error> {
        let record = self.yts.movie_details(link.movie_id())?;
        Ok(record.into())
    }
}

/// Image endpoints.
impl WebApi {
    pub fn get_cached_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.cache.get_image(uri)
    }

    pub fn get_image(&self, uri: Arc<str>) -> Result<ImageBuf, Error> {
        if let Some(cached_image) = self.cache.get_image(&uri) {
            return Ok(cached_image);
        }

        let body = self.yts.get_bytes(&uri)?;

        let format = match infer::get(&body) {
            Some(kind) if kind.mime_type() == "image/jpeg" => Some(ImageFormat::Jpeg),
            Some(kind) if kind.mime_type() == "image/png" => Some(ImageFormat::Png),
            Some(kind) if kind.mime_type() == "image/webp" => Some(ImageFormat::WebP),
            _ => None,
        };
        let image = if let Some(format) = format {
            image::load_from_memory_with_format(&body, format)?
        } else {
            image::load_from_memory(&body)?
        };
        let image_buf = ImageBuf::from_dynamic_image(image);
        self.cache.set_image(uri, image_buf.clone());
        Ok(image_buf)
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::WebApiError(err.to_string())
    }
}
