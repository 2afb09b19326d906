use asciify_core::charset::CharacterPalette;
use asciify_core::grid::AsciiArt;
use asciify_core::traits::PixelSource;

/// Luminance perceptuelle (Rec. 601) prémultipliée par l'alpha, sur [0, 65535].
///
/// `round(0.299 R + 0.587 G + 0.114 B)`, scaled by `A / 65535`, rounded
/// again. A fully transparent pixel is black whatever its color channels.
/// Sources hand over premultiplied channels, so partial alpha darkens twice:
/// once in the channels, once here.
///
/// # Example
/// ```
/// use asciify_ascii::luminance::rgba_luminance;
/// assert_eq!(rgba_luminance([65535, 65535, 65535, 65535]), 65535);
/// assert_eq!(rgba_luminance([65535, 65535, 65535, 0]), 0);
/// assert_eq!(rgba_luminance([65535, 0, 0, 65535]), 19595);
/// ```
#[inline(always)]
#[must_use]
pub fn rgba_luminance([r, g, b, a]: [u16; 4]) -> u16 {
    let raw = (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)).round();
    let lum = (raw * (f64::from(a) / f64::from(u16::MAX))).round();
    lum.clamp(0.0, f64::from(u16::MAX)) as u16
}

/// Convert a pixel source into ASCII art, one cell per pixel.
///
/// Rows are scanned top to bottom, columns left to right; the cell for
/// pixel `(x, y)` lands at row `y - min_y`, column `x - min_x`. The output
/// always has `bounds().height()` rows of `bounds().width()` cells, so a
/// zero-size source gives an empty (or empty-rowed) grid. No resizing is
/// done here.
///
/// # Example
/// ```
/// use asciify_ascii::luminance::asciify;
/// use asciify_core::charset::CharacterPalette;
/// use image::{Rgba, RgbaImage};
///
/// let img = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 255]));
/// let palette = CharacterPalette::from_chars("#. ").unwrap();
/// let art = asciify(&img, &palette);
/// assert_eq!(art.to_text(), "###\n###\n");
/// ```
#[must_use]
pub fn asciify<S: PixelSource + ?Sized>(source: &S, palette: &CharacterPalette) -> AsciiArt {
    let bounds = source.bounds();
    let (width, height) = (bounds.width(), bounds.height());
    log::debug!(
        "asciify {width}×{height} (origine {},{}) avec {} caractères",
        bounds.min_x,
        bounds.min_y,
        palette.len()
    );

    let mut rows = Vec::with_capacity(height);
    for y in bounds.min_y..bounds.max_y {
        let mut row = Vec::with_capacity(width);
        for x in bounds.min_x..bounds.max_x {
            let lum = rgba_luminance(source.rgba16(x, y));
            row.push(palette.pick(lum).to_string());
        }
        rows.push(row);
    }

    AsciiArt::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asciify_core::charset::DEFAULT_PALETTE;
    use asciify_core::traits::{PixelBounds, Rgba16Image, Viewport};
    use image::{Rgba, RgbaImage};

    fn abc() -> CharacterPalette {
        CharacterPalette::from_chars("ABC").unwrap()
    }

    #[test]
    fn luminance_weights() {
        assert_eq!(rgba_luminance([0, 65535, 0, 65535]), 38469);
        assert_eq!(rgba_luminance([0, 0, 65535, 65535]), 7471);
        assert_eq!(rgba_luminance([0, 0, 0, 65535]), 0);
    }

    #[test]
    fn luminance_premultiplies_alpha() {
        // round(65535 * 32768 / 65535) = 32768
        assert_eq!(rgba_luminance([65535, 65535, 65535, 32768]), 32768);
        assert_eq!(rgba_luminance([12345, 54321, 999, 0]), 0);
    }

    #[test]
    fn half_transparent_white_is_scaled_by_alpha_twice() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        // 32896 * 32896 / 65535 = 16512.4
        assert_eq!(rgba_luminance(img.rgba16(0, 0)), 16512);
        // pct = 0.748 → index round(1.496) = 1
        assert_eq!(asciify(&img, &abc()).to_text(), "B\n");
    }

    #[test]
    fn output_matches_bounds() {
        for (w, h) in [(1, 1), (5, 3), (3, 5)] {
            let img = RgbaImage::new(w, h);
            let art = asciify(&img, &abc());
            assert_eq!(art.height(), h as usize);
            assert_eq!(art.width(), w as usize);
            assert!(art.is_rectangular());
        }
    }

    #[test]
    fn zero_size_sources_do_not_panic() {
        let art = asciify(&RgbaImage::new(0, 0), &abc());
        assert!(art.is_empty());

        let art = asciify(&RgbaImage::new(0, 3), &abc());
        assert_eq!(art.height(), 3);
        assert_eq!(art.width(), 0);

        let art = asciify(&RgbaImage::new(4, 0), &abc());
        assert!(art.is_empty());
    }

    #[test]
    fn transparent_renders_as_lightest_ink() {
        // Luminance 0 selects the last entry.
        let img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 0]));
        assert_eq!(asciify(&img, &abc()).to_text(), "CC\n");
    }

    #[test]
    fn pixels_land_at_their_coordinates() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 1, Rgba([128, 128, 128, 255]));
        let art = asciify(&img, &abc());
        assert_eq!(art.to_text(), "CCA\nBCC\n");
    }

    #[test]
    fn viewport_origin_is_shifted_to_zero() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(2, 1, Rgba([255, 255, 255, 255]));
        let view = Viewport::new(&img, PixelBounds::new(2, 1, 4, 3));
        let art = asciify(&view, &abc());
        assert_eq!((art.width(), art.height()), (2, 2));
        assert_eq!(art.get(0, 0), Some("A"));
        assert_eq!(art.to_text(), "AC\nCC\n");
    }

    #[test]
    fn sixteen_bit_source() {
        let img = Rgba16Image::from_pixel(1, 1, Rgba([65535, 65535, 65535, 65535]));
        assert_eq!(asciify(&img, &DEFAULT_PALETTE).to_text(), "$\n");
    }
}
