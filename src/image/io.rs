//! I/O helpers for RGB images and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG from disk into an owned RGB buffer.
//! - `decode_rgb_image`: same, from an in-memory byte slice.
//! - `save_rgb_png`: write an owned RGB buffer (e.g. a cropped column) to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::rgb::{Rgb, RgbImageBuf};
use crate::error::GridError;
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImageBuf, GridError> {
    let img = image::open(path).map_err(|source| GridError::Decode {
        source_name: path.display().to_string(),
        source,
    })?;
    Ok(from_dynamic(img))
}

/// Decode an encoded image held in memory (PNG, JPEG) to 8-bit RGB.
pub fn decode_rgb_image(bytes: &[u8]) -> Result<RgbImageBuf, GridError> {
    let img = image::load_from_memory(bytes).map_err(|source| GridError::Decode {
        source_name: format!("<{} bytes in memory>", bytes.len()),
        source,
    })?;
    Ok(from_dynamic(img))
}

fn from_dynamic(img: DynamicImage) -> RgbImageBuf {
    let rgb = img.into_rgb8();
    let width = rgb.width() as usize;
    let height = rgb.height() as usize;
    let data: Vec<Rgb> = rgb
        .into_raw()
        .chunks_exact(3)
        .map(|px| [px[0], px[1], px[2]])
        .collect();
    RgbImageBuf::new(width, height, data)
}

/// Save an owned RGB buffer as PNG, creating parent directories.
pub fn save_rgb_png(buffer: &RgbImageBuf, path: &Path) -> Result<(), GridError> {
    ensure_parent_dir(path)?;
    let raw: Vec<u8> = buffer.pixels().iter().flatten().copied().collect();
    let Some(image) = RgbImage::from_raw(buffer.width() as u32, buffer.height() as u32, raw)
    else {
        return Err(GridError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "pixel buffer does not match image dimensions",
            ),
        });
    };
    DynamicImage::ImageRgb8(image)
        .save(path)
        .map_err(|source| GridError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), GridError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| GridError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| GridError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), GridError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| GridError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
