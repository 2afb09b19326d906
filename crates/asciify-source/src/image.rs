use std::path::Path;

use anyhow::{Context, Result};
use asciify_core::error::CoreError;
use asciify_core::traits::Rgba16Image;
use image::{DynamicImage, ImageFormat, RgbaImage};

/// Extensions image reconnues en écriture.
const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Charge une image depuis le disque, en RGBA 16 bits.
///
/// 8-bit formats are widened so every channel covers [0, 65535]; 16-bit
/// PNGs keep their full precision.
///
/// # Errors
/// Returns an error if the file is missing or cannot be decoded.
///
/// # Example
/// ```no_run
/// use asciify_source::image::load_image;
/// use std::path::Path;
/// let img = load_image(Path::new("gopher.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<Rgba16Image> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let img = image::open(path)
        .with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba16();
    log::info!(
        "Image chargée : {} ({}×{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}

/// Écrit une image reconstruite ; le format suit l'extension.
///
/// JPEG has no alpha channel, so the image is flattened to RGB first.
///
/// # Errors
/// Returns an error for unknown extensions or if encoding fails.
///
/// # Example
/// ```no_run
/// use asciify_source::image::save_image;
/// use image::RgbaImage;
/// use std::path::Path;
/// save_image(&RgbaImage::new(4, 4), Path::new("out.png")).unwrap();
/// ```
pub fn save_image(img: &RgbaImage, path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !IMAGE_EXTS.contains(&ext.as_str()) {
        return Err(CoreError::UnsupportedFormat { format: ext }.into());
    }
    let format = ImageFormat::from_extension(&ext)
        .ok_or_else(|| CoreError::UnsupportedFormat { format: ext.clone() })?;

    let result = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgba8(img.clone())
            .to_rgb8()
            .save_with_format(path, format)
    } else {
        img.save_with_format(path, format)
    };
    result.with_context(|| format!("Impossible d'écrire {}", path.display()))?;

    log::info!(
        "Image écrite : {} ({}×{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(())
}
