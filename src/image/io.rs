//! I/O helpers for rasters, label images and JSON.
//!
//! - `load_indexed_raster`: read a PNG/JPEG/etc. into an 8-bit gray raster.
//! - `save_label_image`: write a label raster to a grayscale PNG.
//! - `write_json_file` / `read_json_file`: serde JSON round trips on disk.
use super::{ImageView, Raster};
use crate::error::{ChartError, Result};
use crate::labeling::Labeling;
use image::{GrayImage, Luma};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to an 8-bit grayscale raster with a
/// 256-entry palette.
pub fn load_indexed_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)
        .map_err(|source| ChartError::Image {
            path: path.display().to_string(),
            source,
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Raster::from_gray_u8(width, height, img.as_raw())
}

/// Save a label raster as grayscale, spreading label ids over `1..=255`.
///
/// Background (label 0) stays black so foreground regions stand out.
pub fn save_label_image(labeling: &Labeling, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let span = labeling.label_count().saturating_sub(1).max(1) as u64;
    let mut out = GrayImage::new(labeling.width() as u32, labeling.height() as u32);
    for (y, row) in labeling.rows().enumerate() {
        for (x, &label) in row.iter().enumerate() {
            let v = if label == 0 {
                0
            } else {
                1 + (label as u64 - 1) * 254 / span
            };
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path).map_err(|source| ChartError::Image {
        path: path.display().to_string(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| ChartError::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| ChartError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Read and deserialize a JSON document.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ChartError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ChartError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }
    Ok(())
}
