//! Textures module - texture keys, the procedural generator and the handle cache.

mod cache;
mod canvas;
mod generator;
pub mod keys;

pub use cache::{canvas_to_image, ImageStore, TextureCache};
pub use canvas::Canvas;
pub use generator::{draw, generate_missing, TextureStore};
