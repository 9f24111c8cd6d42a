use std::path::Path;

use egui::{ColorImage, Pos2, Rect, Vec2};
use log::{debug, info, warn};

use crate::error::{ImageLoadError, ImageLoadResult};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Decode an encoded photo into an egui image
pub fn decode_image(bytes: &[u8]) -> ImageLoadResult<ColorImage> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    debug!("Decoded image: {}x{}", size[0], size[1]);
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Read and decode a photo from disk
pub fn load_image_file(path: impl AsRef<Path>) -> ImageLoadResult<ColorImage> {
    let path = path.as_ref();
    if !is_image_path(path) {
        return Err(ImageLoadError::Unsupported(path.display().to_string()));
    }
    info!("Loading image from {}", path.display());
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Load the first usable image among files dropped onto the window
pub fn load_dropped_file(file: &egui::DroppedFile) -> ImageLoadResult<ColorImage> {
    let name = if let Some(path) = &file.path {
        path.display().to_string()
    } else if !file.name.is_empty() {
        file.name.clone()
    } else {
        "unknown".to_owned()
    };

    let looks_like_image = if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else {
        file.path.as_deref().is_some_and(is_image_path)
    };
    if !looks_like_image {
        warn!("Dropped file is not a supported type: {}", name);
        return Err(ImageLoadError::Unsupported(name));
    }

    if let Some(bytes) = &file.bytes {
        info!("Loading dropped image from memory: {} ({} bytes)", name, bytes.len());
        decode_image(bytes)
    } else if let Some(path) = &file.path {
        load_image_file(path)
    } else {
        Err(ImageLoadError::Unsupported(name))
    }
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Largest rect with the image's aspect ratio that fits inside `canvas`,
/// centered
pub fn fit_rect(image_size: Vec2, canvas: Rect) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Rect::from_center_size(canvas.center(), Vec2::ZERO);
    }
    let scale = (canvas.width() / image_size.x).min(canvas.height() / image_size.y);
    Rect::from_center_size(canvas.center(), image_size * scale)
}

/// Canvas-space placement for an image shown in a canvas of `canvas_size`
pub fn fit_to_canvas(image_size: Vec2, canvas_size: Vec2) -> Rect {
    fit_rect(image_size, Rect::from_min_size(Pos2::ZERO, canvas_size))
}

/// Where the base photo sits in canvas space.
///
/// The rect is fixed the first time a non-empty canvas is seen, so markup
/// drawn in canvas pixels stays on the photo when the window is resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlacement {
    image_size: Vec2,
    canvas_rect: Option<Rect>,
}

impl ImagePlacement {
    pub fn new(image_size: Vec2) -> Self {
        Self {
            image_size,
            canvas_rect: None,
        }
    }

    pub fn canvas_rect(&self) -> Option<Rect> {
        self.canvas_rect
    }

    /// Fix the placement against `canvas_size` unless it already is
    pub fn resolve(&mut self, canvas_size: Vec2) -> Option<Rect> {
        if self.canvas_rect.is_none() && canvas_size.x > 0.0 && canvas_size.y > 0.0 {
            let rect = fit_to_canvas(self.image_size, canvas_size);
            debug!("Placed base image at {:?}", rect);
            self.canvas_rect = Some(rect);
        }
        self.canvas_rect
    }
}
