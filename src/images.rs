/*
 * Images Module
 *
 * Loads the card and chip textures. Each image lives in an ImageSlot that
 * also keeps the path text the user is editing and the outcome of the last
 * load, so a failed load leaves the layer empty instead of stopping the app.
 */

use std::path::PathBuf;

use nannou::prelude::*;
use nannou::wgpu;
use tracing::{info, warn};

use crate::error::OverlayError;

pub struct LoadedImage {
    pub texture: wgpu::Texture,
    pub path: PathBuf,
}

impl LoadedImage {
    pub fn load(app: &App, path: &str) -> Result<Self, OverlayError> {
        let path = resolve_path(path)?;
        let texture = wgpu::Texture::from_path(app, &path).map_err(|source| OverlayError::ImageLoad {
            path: path.clone(),
            source,
        })?;

        Ok(Self { texture, path })
    }

    // Pixel size of the texture
    pub fn size(&self) -> Vec2 {
        let [w, h] = self.texture.size();
        vec2(w as f32, h as f32)
    }
}

// Turn the text field contents into a path
pub fn resolve_path(text: &str) -> Result<PathBuf, OverlayError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(OverlayError::EmptyPath);
    }
    Ok(PathBuf::from(trimmed))
}

// One loadable layer (card or chip)
pub struct ImageSlot {
    pub label: &'static str,
    pub path: String,
    pub image: Option<LoadedImage>,
    pub status: Option<String>,
}

impl ImageSlot {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            path: String::new(),
            image: None,
            status: None,
        }
    }

    // Load whatever is in the path field; failures keep the slot empty
    pub fn reload(&mut self, app: &App) {
        match LoadedImage::load(app, &self.path) {
            Ok(image) => {
                let size = image.size();
                info!(slot = self.label, path = %image.path.display(), width = size.x, height = size.y, "image loaded");
                self.status = None;
                self.image = Some(image);
            }
            Err(err) => {
                warn!(slot = self.label, error = %err, "image load failed");
                self.status = Some(err.to_string());
                self.image = None;
            }
        }
    }

    pub fn image(&self) -> Option<&LoadedImage> {
        self.image.as_ref()
    }
}
