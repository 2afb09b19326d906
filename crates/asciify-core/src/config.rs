use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::{CharacterPalette, PalettePreset};
use crate::error::CoreError;

/// Configuration de la conversion.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use asciify_core::config::AsciifyConfig;
/// let config = AsciifyConfig::default();
/// assert!(config.trailing_newline);
/// assert_eq!(config.palette().unwrap().len(), 69);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AsciifyConfig {
    // === Palette ===
    /// Palette built-in utilisée quand `charset` est absent.
    pub preset: PalettePreset,
    /// Palette personnalisée, un caractère par entrée, du plus dense au plus clair.
    pub charset: Option<String>,
    /// Inverser l'ordre de la palette (pour fond clair).
    pub invert: bool,

    // === Sortie ===
    /// Keep the `\n` after the last row when writing art text.
    pub trailing_newline: bool,
}

impl Default for AsciifyConfig {
    fn default() -> Self {
        Self {
            preset: PalettePreset::Standard,
            charset: None,
            invert: false,
            trailing_newline: true,
        }
    }
}

impl AsciifyConfig {
    /// Resolve the effective palette: custom charset, else preset, then `invert`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPalette`] if a custom charset is set but empty.
    ///
    /// # Example
    /// ```
    /// use asciify_core::config::AsciifyConfig;
    /// let config = AsciifyConfig { charset: Some("AB".into()), invert: true, ..Default::default() };
    /// assert_eq!(config.palette().unwrap().get(0), Some("B"));
    /// ```
    pub fn palette(&self) -> Result<CharacterPalette, CoreError> {
        let palette = match self.charset.as_deref() {
            Some(charset) => CharacterPalette::from_chars(charset)?,
            None => self.preset.palette(),
        };
        Ok(if self.invert {
            palette.reversed()
        } else {
            palette
        })
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    palette: Option<PaletteSection>,
    output: Option<OutputSection>,
}

/// Palette section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct PaletteSection {
    preset: Option<PalettePreset>,
    charset: Option<String>,
    invert: Option<bool>,
}

/// Output section of the TOML config.
#[derive(Deserialize)]
struct OutputSection {
    trailing_newline: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if it
/// declares an empty charset.
///
/// # Example
/// ```no_run
/// use asciify_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<AsciifyConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Erreur de config dans {}", path.display()))
}

/// Parse TOML text into a config merged over defaults.
///
/// # Errors
/// Returns an error on invalid TOML or an empty `charset`.
///
/// # Example
/// ```
/// use asciify_core::config::parse_config;
/// use asciify_core::charset::PalettePreset;
/// let config = parse_config("[palette]\npreset = \"Blocks\"\n").unwrap();
/// assert_eq!(config.preset, PalettePreset::Blocks);
/// ```
pub fn parse_config(content: &str) -> Result<AsciifyConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = AsciifyConfig::default();

    if let Some(p) = file.palette {
        if p.preset.is_some() && p.charset.is_some() {
            log::warn!("preset et charset définis tous les deux : charset prioritaire");
        }
        if let Some(v) = p.preset {
            config.preset = v;
        }
        if let Some(v) = p.charset {
            if v.is_empty() {
                return Err(CoreError::Config("charset vide".into()).into());
            }
            config.charset = Some(v);
        }
        if let Some(v) = p.invert {
            config.invert = v;
        }
    }
    if let Some(o) = file.output {
        if let Some(v) = o.trailing_newline {
            config.trailing_newline = v;
        }
    }

    Ok(config)
}
