use std::path::PathBuf;

use clap::Parser;

/// asciify — image → ASCII art, et retour.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF) à convertir en texte.
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Fichier texte d'art ASCII à reconvertir en image.
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Destination. Texte : stdout si absent. Image : obligatoire, format déduit de l'extension.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Palette built-in : standard, compact, blocks, minimal.
    #[arg(long)]
    pub preset: Option<String>,

    /// Palette personnalisée, du caractère le plus dense au plus clair.
    #[arg(long)]
    pub charset: Option<String>,

    /// Inverser la palette (pour fond clair).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that exactly one input is provided, and an output for images.
    ///
    /// # Errors
    /// Returns an error if zero or both inputs are specified, or if `--text`
    /// is used without `--output`.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        match (&self.image, &self.text) {
            (None, None) => {
                anyhow::bail!("Aucune entrée spécifiée. Utilisez --image ou --text.")
            }
            (Some(_), Some(_)) => {
                anyhow::bail!("Une seule entrée à la fois. Spécifiez --image OU --text.")
            }
            (None, Some(_)) if self.output.is_none() => {
                anyhow::bail!("--text requiert --output (chemin de l'image à écrire).")
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("asciify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn exactly_one_input() {
        assert!(parse(&[]).validate_source().is_err());
        assert!(parse(&["--image", "a.png", "--text", "a.txt"])
            .validate_source()
            .is_err());
        assert!(parse(&["--image", "a.png"]).validate_source().is_ok());
    }

    #[test]
    fn text_needs_output() {
        assert!(parse(&["--text", "a.txt"]).validate_source().is_err());
        assert!(parse(&["--text", "a.txt", "-o", "a.png"])
            .validate_source()
            .is_ok());
    }

    #[test]
    fn defaults() {
        let cli = parse(&["--image", "a.png"]);
        assert_eq!(cli.log_level, "warn");
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert!(!cli.invert);
    }
}
