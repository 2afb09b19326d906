use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 69 caractères — échelle Paul Bourke / mewbies, du plus dense au plus clair.
pub const CHARSET_STANDARD: &[&str] = &[
    "$", "@", "B", "%", "8", "&", "W", "M", "#", "*", "o", "a", "h", "k", "b", "d", "p", "q", "w",
    "m", "Z", "O", "0", "Q", "L", "C", "J", "U", "Y", "X", "z", "c", "v", "u", "n", "x", "r", "j",
    "f", "t", "/", "|", "(", ")", "1", "{", "}", "[", "]", "?", "-", "_", "+", "~", "<", ">", "i",
    "!", "l", "I", ";", ":", ",", "\"", "^", "`", "'", ".", " ",
];

/// 10 caractères — compact, bon contraste.
pub const CHARSET_COMPACT: &str = "@%#*+=-:. ";

/// Blocs Unicode — pseudo-pixels.
pub const CHARSET_BLOCKS: &str = "█▓▒░ ";

/// Minimal — haut contraste.
pub const CHARSET_MINIMAL: &str = "█▓▒░:. ";

/// Process-wide default palette, built once on first use and never mutated.
///
/// # Example
/// ```
/// use asciify_core::charset::DEFAULT_PALETTE;
/// assert_eq!(DEFAULT_PALETTE.get(0), Some("$"));
/// ```
pub static DEFAULT_PALETTE: LazyLock<CharacterPalette> =
    LazyLock::new(|| CharacterPalette::from_static(CHARSET_STANDARD));

/// Ordered set of characters used as quantization buckets, darkest first.
///
/// The forward mapping ([`pick`](Self::pick)) turns a 16-bit luminance into
/// an entry; the inverse mapping ([`color_for`](Self::color_for)) turns an
/// entry back into an approximate grayscale level.
///
/// Duplicate entries are allowed. The inverse lookup resolves them to the
/// first occurrence.
///
/// # Example
/// ```
/// use asciify_core::charset::CharacterPalette;
/// let palette = CharacterPalette::from_chars("ABC").unwrap();
/// assert_eq!(palette.pick(0), "C");
/// assert_eq!(palette.pick(65535), "A");
/// assert_eq!(palette.color_for("A").unwrap(), 85);
/// ```
#[derive(Clone, Debug)]
pub struct CharacterPalette {
    entries: Vec<String>,
    /// entry → index of its first occurrence.
    lookup: HashMap<String, usize>,
}

impl CharacterPalette {
    /// Build a palette from entries ordered darkest → lightest.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `entries` yields nothing.
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::CharacterPalette;
    /// let palette = CharacterPalette::new(["##", "++", ".."]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert!(CharacterPalette::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        Ok(Self::from_entries(entries))
    }

    /// Build a palette with one entry per `char` of `charset`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if `charset` is empty.
    pub fn from_chars(charset: &str) -> Result<Self, CoreError> {
        Self::new(charset.chars().map(String::from))
    }

    fn from_static(entries: &[&str]) -> Self {
        Self::from_entries(entries.iter().map(|s| (*s).to_string()).collect())
    }

    fn from_entries(entries: Vec<String>) -> Self {
        let mut lookup = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // First occurrence wins.
            lookup.entry(entry.clone()).or_insert(i);
        }
        Self { entries, lookup }
    }

    /// Number of entries. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// All entries, darkest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over entries, darkest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Same entries in the opposite order (lightest first).
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::CharacterPalette;
    /// let palette = CharacterPalette::from_chars("AB").unwrap().reversed();
    /// assert_eq!(palette.get(0), Some("B"));
    /// ```
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::from_entries(self.entries.iter().rev().cloned().collect())
    }

    /// Map a luminance value [0..65535] to an entry.
    ///
    /// Brightness 0 selects the last (lightest) entry and 65535 the first
    /// (darkest) one: the palette describes ink, so a dark pixel gets little
    /// of it. The index is `round((len - 1) * (1 - brightness / 65535))`,
    /// rounding half away from zero.
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::CharacterPalette;
    /// let palette = CharacterPalette::from_chars("ABC").unwrap();
    /// assert_eq!(palette.pick(32767), "B");
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pick(&self, brightness: u16) -> &str {
        let pct = 1.0 - f64::from(brightness) / f64::from(u16::MAX);
        let max = self.entries.len() - 1;
        let idx = (max as f64 * pct).round() as usize;
        &self.entries[idx.min(max)]
    }

    /// Index of the first occurrence of `character`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, character: &str) -> Option<usize> {
        self.lookup.get(character).copied()
    }

    /// Approximate grayscale level [0..255] for `character`.
    ///
    /// For the entry at index `i`, returns `round((i + 1) / len * 255)`.
    /// Lossy: every brightness that fell in the same bucket comes back as
    /// the same level.
    ///
    /// # Errors
    /// Returns [`CoreError::CharacterNotInPalette`] if `character` is absent.
    ///
    /// # Example
    /// ```
    /// use asciify_core::charset::CharacterPalette;
    /// let palette = CharacterPalette::from_chars("ABC").unwrap();
    /// assert_eq!(palette.color_for("B").unwrap(), 170);
    /// assert!(palette.color_for("Z").is_err());
    /// ```
    pub fn color_for(&self, character: &str) -> Result<u8, CoreError> {
        let idx = self
            .index_of(character)
            .ok_or_else(|| CoreError::CharacterNotInPalette {
                character: character.to_string(),
            })?;
        let level = ((idx + 1) as f64 / self.entries.len() as f64 * 255.0).round();
        Ok(level.clamp(0.0, 255.0) as u8)
    }
}

impl Default for CharacterPalette {
    fn default() -> Self {
        DEFAULT_PALETTE.clone()
    }
}

impl PartialEq for CharacterPalette {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CharacterPalette {}

/// Built-in palettes, all ordered darkest → lightest.
///
/// # Example
/// ```
/// use asciify_core::charset::PalettePreset;
/// let palette = PalettePreset::Compact.palette();
/// assert_eq!(palette.len(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum PalettePreset {
    /// The 69-character chart of [`CHARSET_STANDARD`].
    #[default]
    Standard,
    /// [`CHARSET_COMPACT`].
    Compact,
    /// [`CHARSET_BLOCKS`].
    Blocks,
    /// [`CHARSET_MINIMAL`].
    Minimal,
}

impl PalettePreset {
    /// Materialize the preset.
    #[must_use]
    pub fn palette(self) -> CharacterPalette {
        let charset = match self {
            Self::Standard => return DEFAULT_PALETTE.clone(),
            Self::Compact => CHARSET_COMPACT,
            Self::Blocks => CHARSET_BLOCKS,
            Self::Minimal => CHARSET_MINIMAL,
        };
        CharacterPalette::from_entries(charset.chars().map(String::from).collect())
    }
}

impl std::str::FromStr for PalettePreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "default" => Ok(Self::Standard),
            "compact" => Ok(Self::Compact),
            "blocks" => Ok(Self::Blocks),
            "minimal" => Ok(Self::Minimal),
            other => Err(CoreError::Config(format!("preset de palette inconnu '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> CharacterPalette {
        CharacterPalette::from_chars("ABC").unwrap()
    }

    #[test]
    fn pick_maps_extremes_inversely() {
        let p = abc();
        assert_eq!(p.pick(0), "C");
        assert_eq!(p.pick(u16::MAX), "A");
        assert_eq!(p.pick(32767), "B");
    }

    #[test]
    fn default_palette_extremes() {
        let p = &*DEFAULT_PALETTE;
        assert_eq!(p.len(), 69);
        assert_eq!(p.pick(0), " ");
        assert_eq!(p.pick(u16::MAX), "$");
        assert_eq!(p.get(p.len() - 1), Some(" "));
    }

    #[test]
    fn pick_monotonic_and_in_bounds() {
        let p = &*DEFAULT_PALETTE;
        let mut prev_idx = usize::MAX;
        for b in (0..=u16::MAX).step_by(97).chain([u16::MAX]) {
            let idx = p.index_of(p.pick(b)).unwrap();
            assert!(idx < p.len());
            assert!(idx <= prev_idx, "pick non monotone à luminance {b}");
            prev_idx = idx;
        }
    }

    #[test]
    fn single_entry_palette_always_returns_it() {
        let p = CharacterPalette::from_chars("#").unwrap();
        assert_eq!(p.pick(0), "#");
        assert_eq!(p.pick(40000), "#");
        assert_eq!(p.pick(u16::MAX), "#");
        assert_eq!(p.color_for("#").unwrap(), 255);
    }

    #[test]
    fn color_for_levels() {
        let p = abc();
        assert_eq!(p.color_for("A").unwrap(), 85);
        assert_eq!(p.color_for("B").unwrap(), 170);
        assert_eq!(p.color_for("C").unwrap(), 255);
    }

    #[test]
    fn color_for_missing_character() {
        let err = abc().color_for("x").unwrap_err();
        assert_eq!(
            err,
            CoreError::CharacterNotInPalette {
                character: "x".into()
            }
        );
    }

    #[test]
    fn duplicates_resolve_to_first_occurrence() {
        let p = CharacterPalette::from_chars("ABA").unwrap();
        assert_eq!(p.index_of("A"), Some(0));
        assert_eq!(p.color_for("A").unwrap(), 85);
    }

    #[test]
    fn multi_char_entries() {
        let p = CharacterPalette::new(["##", ".."]).unwrap();
        assert_eq!(p.pick(0), "..");
        assert_eq!(p.color_for("##").unwrap(), 128);
        assert!(p.color_for("#").is_err());
    }

    #[test]
    fn empty_palette_rejected() {
        assert_eq!(
            CharacterPalette::from_chars("").unwrap_err(),
            CoreError::EmptyPalette
        );
    }

    #[test]
    fn reversed_rebuilds_lookup() {
        let p = abc().reversed();
        assert_eq!(p.pick(0), "A");
        assert_eq!(p.color_for("C").unwrap(), 85);
    }

    #[test]
    fn presets_parse_and_build() {
        assert_eq!(
            "blocks".parse::<PalettePreset>().unwrap(),
            PalettePreset::Blocks
        );
        assert!("neon".parse::<PalettePreset>().is_err());
        assert_eq!(PalettePreset::Standard.palette(), *DEFAULT_PALETTE);
        assert_eq!(PalettePreset::Blocks.palette().pick(u16::MAX), "█");
        assert_eq!(PalettePreset::Minimal.palette().pick(0), " ");
    }
}
