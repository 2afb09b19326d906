use std::path::Path;

use anyhow::{Context, Result};
use asciify_core::grid::AsciiArt;

/// Lit un fichier texte d'art ASCII.
///
/// Windows line endings are normalized to `\n` before parsing.
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn read_art(path: &Path) -> Result<AsciiArt> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let art = if content.contains("\r\n") {
        AsciiArt::from_text(&content.replace("\r\n", "\n"))
    } else {
        AsciiArt::from_text(&content)
    };
    log::info!(
        "Art chargé : {} ({}×{})",
        path.display(),
        art.width(),
        art.height()
    );
    Ok(art)
}

/// Render art as text, optionally without the final `\n`.
///
/// # Example
/// ```
/// use asciify_core::grid::AsciiArt;
/// use asciify_source::text::render_art;
/// let art = AsciiArt::from_text("ab\ncd\n");
/// assert_eq!(render_art(&art, false), "ab\ncd");
/// ```
#[must_use]
pub fn render_art(art: &AsciiArt, trailing_newline: bool) -> String {
    let mut text = art.to_text();
    if !trailing_newline && text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Écrit l'art ASCII dans un fichier.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_art(art: &AsciiArt, path: &Path, trailing_newline: bool) -> Result<()> {
    std::fs::write(path, render_art(art, trailing_newline))
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    log::info!("Art écrit : {}", path.display());
    Ok(())
}
