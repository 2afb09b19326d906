use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use asciify_ascii::{asciify, imagify};
use asciify_core::config::AsciifyConfig;
use asciify_source::image::{load_image, save_image};
use asciify_source::text::{read_art, render_art, write_art};

/// Image → texte. Écrit dans `output`, ou dans `stdout` si absent.
///
/// # Errors
/// Returns an error if the image cannot be loaded, the palette is invalid,
/// or the text cannot be written.
pub fn run_asciify(
    input: &Path,
    output: Option<&Path>,
    config: &AsciifyConfig,
    stdout: &mut dyn Write,
) -> Result<()> {
    let palette = config.palette()?;
    let img = load_image(input)?;
    let art = asciify(&img, &palette);

    match output {
        Some(path) => write_art(&art, path, config.trailing_newline)?,
        None => stdout
            .write_all(render_art(&art, config.trailing_newline).as_bytes())
            .context("Impossible d'écrire sur la sortie standard")?,
    }
    Ok(())
}

/// Texte → image en niveaux de gris.
///
/// # Errors
/// Returns an error if the text cannot be read, a character is missing
/// from the palette, or the image cannot be written.
pub fn run_imagify(input: &Path, output: &Path, config: &AsciifyConfig) -> Result<()> {
    let palette = config.palette()?;
    let art = read_art(input)?;
    let img = imagify(&art, &palette)
        .with_context(|| format!("Reconstruction impossible depuis {}", input.display()))?;
    save_image(&img, output)
}
