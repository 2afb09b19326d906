use image::{ImageBuffer, Rgba, RgbaImage};

/// RGBA image with 16-bit channels, the native sampling format of the converter.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Rectangle demi-ouvert `[min_x, max_x) × [min_y, max_y)` en coordonnées source.
///
/// # Example
/// ```
/// use asciify_core::traits::PixelBounds;
/// let b = PixelBounds::new(2, 3, 6, 5);
/// assert_eq!((b.width(), b.height()), (4, 2));
/// assert!(b.contains(2, 3));
/// assert!(!b.contains(6, 3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelBounds {
    /// Première colonne incluse.
    pub min_x: i32,
    /// Première ligne incluse.
    pub min_y: i32,
    /// Première colonne exclue.
    pub max_x: i32,
    /// Première ligne exclue.
    pub max_y: i32,
}

impl PixelBounds {
    /// Build bounds from corners.
    #[must_use]
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds anchored at the origin.
    #[must_use]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }

    /// Width in pixels, 0 for inverted rectangles.
    #[must_use]
    pub fn width(&self) -> usize {
        usize::try_from(i64::from(self.max_x) - i64::from(self.min_x)).unwrap_or(0)
    }

    /// Height in pixels, 0 for inverted rectangles.
    #[must_use]
    pub fn height(&self) -> usize {
        usize::try_from(i64::from(self.max_y) - i64::from(self.min_y)).unwrap_or(0)
    }

    /// `true` if the rectangle covers no pixel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// `true` if `(x, y)` lies inside the half-open rectangle.
    #[inline(always)]
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Overlap of two rectangles. Empty overlaps collapse to a zero-size
    /// rectangle at `self`'s clamped corner.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x).max(min_x);
        let max_y = self.max_y.min(other.max_y).max(min_y);
        Self::new(min_x, min_y, max_x, max_y)
    }
}

/// Source de pixels adressable aléatoirement.
///
/// Implémenté par : `RgbaImage`, [`Rgba16Image`], [`Viewport`].
///
/// # Example
/// ```
/// use asciify_core::traits::{PixelBounds, PixelSource};
///
/// struct White;
/// impl PixelSource for White {
///     fn bounds(&self) -> PixelBounds { PixelBounds::from_size(1, 1) }
///     fn rgba16(&self, _x: i32, _y: i32) -> [u16; 4] { [u16::MAX; 4] }
/// }
/// assert_eq!(White.bounds().width(), 1);
/// ```
pub trait PixelSource {
    /// Rectangle of valid coordinates.
    fn bounds(&self) -> PixelBounds;

    /// Channels `[r, g, b, a]` of pixel `(x, y)`, each in [0, 65535].
    ///
    /// Color channels are alpha-premultiplied (`c * a / 65535`, truncated):
    /// a half-transparent white reads as half-intensity gray with half alpha.
    /// Coordinates outside [`bounds`](Self::bounds) read as transparent black.
    fn rgba16(&self, x: i32, y: i32) -> [u16; 4];
}

impl PixelSource for RgbaImage {
    fn bounds(&self) -> PixelBounds {
        PixelBounds::from_size(self.width(), self.height())
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> [u16; 4] {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return [0; 4];
        };
        // 8 → 16 bits: 0xAB → 0xABAB.
        self.get_pixel_checked(x, y)
            .map_or([0; 4], |p| premultiply(p.0.map(|c| u16::from(c) * 257)))
    }
}

impl PixelSource for Rgba16Image {
    fn bounds(&self) -> PixelBounds {
        PixelBounds::from_size(self.width(), self.height())
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> [u16; 4] {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return [0; 4];
        };
        self.get_pixel_checked(x, y).map_or([0; 4], |p| premultiply(p.0))
    }
}

/// Straight 16-bit RGBA → premultiplied.
#[inline(always)]
fn premultiply([r, g, b, a]: [u16; 4]) -> [u16; 4] {
    let scale = |c: u16| (u32::from(c) * u32::from(a) / u32::from(u16::MAX)) as u16;
    [scale(r), scale(g), scale(b), a]
}

/// Fenêtre rectangulaire en lecture seule sur une autre source.
///
/// Keeps the parent's coordinate system, so its bounds generally do not
/// start at the origin.
///
/// # Example
/// ```
/// use asciify_core::traits::{PixelBounds, PixelSource, Viewport};
/// use image::RgbaImage;
///
/// let img = RgbaImage::new(8, 8);
/// let view = Viewport::new(&img, PixelBounds::new(2, 2, 20, 4));
/// assert_eq!(view.bounds(), PixelBounds::new(2, 2, 8, 4));
/// ```
pub struct Viewport<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    bounds: PixelBounds,
}

impl<'a, S: PixelSource + ?Sized> Viewport<'a, S> {
    /// Window `rect` of `source`, clipped to the source's bounds.
    #[must_use]
    pub fn new(source: &'a S, rect: PixelBounds) -> Self {
        let bounds = source.bounds().intersect(&rect);
        Self { source, bounds }
    }
}

impl<S: PixelSource + ?Sized> PixelSource for Viewport<'_, S> {
    fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    #[inline]
    fn rgba16(&self, x: i32, y: i32) -> [u16; 4] {
        if self.bounds.contains(x, y) {
            self.source.rgba16(x, y)
        } else {
            [0; 4]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba8_widens_to_16_bits() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(1, 0, Rgba([255, 128, 0, 255]));
        assert_eq!(img.rgba16(1, 0), [65535, 32896, 0, 65535]);
        assert_eq!(img.rgba16(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_reads_transparent() {
        let img = Rgba16Image::from_pixel(1, 1, Rgba([9, 9, 9, 65535]));
        assert_eq!(img.rgba16(0, 0), [9, 9, 9, 65535]);
        assert_eq!(img.rgba16(-1, 0), [0; 4]);
        assert_eq!(img.rgba16(1, 0), [0; 4]);
    }

    #[test]
    fn color_channels_are_premultiplied() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        assert_eq!(img.rgba16(0, 0), [32896, 32896, 32896, 32896]);

        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 0]));
        assert_eq!(img.rgba16(0, 0), [0; 4]);

        let img = Rgba16Image::from_pixel(1, 1, Rgba([65535, 40000, 0, 16384]));
        assert_eq!(img.rgba16(0, 0), [16384, 10000, 0, 16384]);
    }

    #[test]
    fn viewport_keeps_parent_coordinates() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let view = Viewport::new(&img, PixelBounds::new(2, 1, 4, 3));
        assert_eq!(view.bounds(), PixelBounds::new(2, 1, 4, 3));
        assert_eq!(view.rgba16(3, 2), [2570, 5140, 7710, 65535]);
        // Outside the window even though inside the parent.
        assert_eq!(view.rgba16(0, 0), [0; 4]);
    }

    #[test]
    fn disjoint_viewport_is_empty() {
        let img = RgbaImage::new(4, 4);
        let view = Viewport::new(&img, PixelBounds::new(10, 10, 12, 12));
        assert!(view.bounds().is_empty());
        assert_eq!(view.bounds().width(), 0);
    }

    #[test]
    fn inverted_bounds_have_zero_size() {
        let b = PixelBounds::new(5, 5, 1, 1);
        assert_eq!((b.width(), b.height()), (0, 0));
    }
}
