//! I/O helpers for grayscale images, raw volumes and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `load_raw_volume` / `write_raw_volume`: headerless 8-bit volumes, axis 0 fastest.
//! - `coverage_to_gray`: scale per-element region counts into 0..=255.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given packed raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }

    /// Photometric negative (`255 - v`).
    pub fn inverted(&self) -> Self {
        Self {
            data: self.data.iter().map(|&v| 255 - v).collect(),
            ..self.clone()
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width as u32, buffer.height as u32, buffer.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Read a headerless 8-bit volume of `shape` (axis 0 fastest).
pub fn load_raw_volume(path: &Path, shape: [usize; 3]) -> Result<Vec<u8>, String> {
    let data = fs::read(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let expected = shape.iter().product::<usize>();
    if data.len() != expected {
        return Err(format!(
            "{} holds {} bytes, shape {:?} needs {expected}",
            path.display(),
            data.len(),
            shape
        ));
    }
    Ok(data)
}

/// Write a headerless 8-bit volume, creating parent directories.
pub fn write_raw_volume(path: &Path, data: &[u8]) -> Result<(), String> {
    ensure_parent_dir(path)?;
    fs::write(path, data).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

/// Map region counts to gray values; the most covered element becomes 255.
pub fn coverage_to_gray(counts: &[u32]) -> Vec<u8> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0; counts.len()];
    }
    counts
        .iter()
        .map(|&c| ((c as u64 * 255 + max as u64 / 2) / max as u64) as u8)
        .collect()
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_scales_to_full_range() {
        assert_eq!(coverage_to_gray(&[0, 1, 2, 4]), vec![0, 64, 128, 255]);
        assert_eq!(coverage_to_gray(&[0, 0]), vec![0, 0]);
    }

    #[test]
    fn inversion_flips_intensities() {
        let img = GrayImageU8::new(2, 1, vec![0, 200]);
        assert_eq!(img.inverted().data(), &[255, 55]);
    }
}
