use asciify_core::charset::CharacterPalette;
use asciify_core::error::CoreError;
use asciify_core::grid::AsciiArt;
use image::{Rgba, RgbaImage};

/// Reconstruit une image en niveaux de gris à partir d'une grille.
///
/// Output size is `art.width()` × `art.height()` (first row length by row
/// count). Each cell becomes an opaque gray pixel whose level comes from
/// [`CharacterPalette::color_for`]. Very lossy: only `palette.len()` gray
/// levels can come out.
///
/// Every cell is checked, including cells of rows longer than the first
/// one; those are not drawn. Pixels missing from short rows stay
/// transparent black.
///
/// # Errors
/// Returns [`CoreError::CharacterNotInPalette`] on the first cell whose
/// content the palette does not contain. No partial image is returned.
///
/// # Example
/// ```
/// use asciify_ascii::imagify::imagify;
/// use asciify_core::charset::CharacterPalette;
/// use asciify_core::grid::AsciiArt;
///
/// let palette = CharacterPalette::from_chars("ABC").unwrap();
/// let img = imagify(&AsciiArt::from_text("AB\nCA\n"), &palette).unwrap();
/// assert_eq!(img.dimensions(), (2, 2));
/// assert_eq!(img.get_pixel(1, 0).0, [170, 170, 170, 255]);
/// ```
pub fn imagify(art: &AsciiArt, palette: &CharacterPalette) -> Result<RgbaImage, CoreError> {
    let width = art.width();
    let height = art.height();
    if !art.is_rectangular() {
        log::warn!("Grille irrégulière : largeur prise sur la première ligne ({width})");
    }
    log::debug!("imagify {width}×{height} avec {} caractères", palette.len());

    let mut img = RgbaImage::new(to_u32(width), to_u32(height));

    for (y, row) in art.rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let level = palette.color_for(cell)?;
            if x < width {
                img.put_pixel(to_u32(x), to_u32(y), Rgba([level, level, level, 255]));
            }
        }
    }

    Ok(img)
}

#[inline(always)]
fn to_u32(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
