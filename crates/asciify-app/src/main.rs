use anyhow::Result;
use asciify_core::charset::PalettePreset;
use asciify_core::config::AsciifyConfig;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Valider les entrées
    cli.validate_source()?;

    // 4. Charger la config et appliquer les overrides CLI
    let config = resolve_config(&cli)?;

    // 5. Lancer le pipeline demandé
    if let Some(ref input) = cli.image {
        let mut stdout = std::io::stdout().lock();
        pipeline::run_asciify(input, cli.output.as_deref(), &config, &mut stdout)
    } else if let (Some(input), Some(output)) = (cli.text.as_deref(), cli.output.as_deref()) {
        pipeline::run_imagify(input, output, &config)
    } else {
        anyhow::bail!("Entrées incohérentes après validation.")
    }
}

/// Resolve config: file (or defaults), then CLI overrides.
fn resolve_config(cli: &cli::Cli) -> Result<AsciifyConfig> {
    let mut config = if cli.config.exists() {
        asciify_core::config::load_config(&cli.config)?
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        AsciifyConfig::default()
    };

    if let Some(ref name) = cli.preset {
        config.preset = name.parse::<PalettePreset>()?;
        // An explicit preset wins over a charset coming from the file.
        config.charset = None;
    }
    if let Some(ref charset) = cli.charset {
        config.charset = Some(charset.clone());
    }
    if cli.invert {
        config.invert = true;
    }
    log::debug!("Config effective : {config:?}");
    Ok(config)
}
