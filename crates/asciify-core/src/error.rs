use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A grid cell holds a character the palette does not contain.
    #[error("Caractère absent de la palette : {character:?}")]
    CharacterNotInPalette {
        /// The offending cell content.
        character: String,
    },

    /// A palette needs at least one entry.
    #[error("Palette vide : au moins un caractère est requis")]
    EmptyPalette,

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Referenced file does not exist.
    #[error("Fichier introuvable : {path}")]
    FileNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Unsupported file or data format.
    #[error("Format non supporté : {format}")]
    UnsupportedFormat {
        /// The format string that is unsupported.
        format: String,
    },
}
