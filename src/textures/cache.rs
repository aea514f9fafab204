//! Key → image handle map and the Bevy-backed texture store.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use super::canvas::Canvas;
use super::generator::TextureStore;

/// Every texture available to sprites, whether loaded from disk or generated.
#[derive(Resource, Default)]
pub struct TextureCache {
    handles: HashMap<String, Handle<Image>>,
}

impl TextureCache {
    pub fn contains(&self, key: &str) -> bool {
        self.handles.contains_key(key)
    }

    pub fn insert(&mut self, key: &str, handle: Handle<Image>) {
        self.handles.insert(key.to_string(), handle);
    }

    /// Handle for `key`; the default (blank) handle if it was never registered.
    pub fn get(&self, key: &str) -> Handle<Image> {
        match self.handles.get(key) {
            Some(handle) => handle.clone(),
            None => {
                warn!("Texture '{}' requested but never registered", key);
                Handle::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Convert a finished canvas into a GPU-ready sRGB image.
pub fn canvas_to_image(canvas: Canvas) -> Image {
    let size = Extent3d {
        width: canvas.width(),
        height: canvas.height(),
        depth_or_array_layers: 1,
    };

    Image::new(
        size,
        TextureDimension::D2,
        canvas.into_image().into_raw(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// `TextureStore` that uploads generated canvases into `Assets<Image>`.
pub struct ImageStore<'a> {
    pub cache: &'a mut TextureCache,
    pub images: &'a mut Assets<Image>,
}

impl TextureStore for ImageStore<'_> {
    fn contains(&self, key: &str) -> bool {
        self.cache.contains(key)
    }

    fn insert(&mut self, key: &str, canvas: Canvas) {
        let handle = self.images.add(canvas_to_image(canvas));
        self.cache.insert(key, handle);
    }
}
