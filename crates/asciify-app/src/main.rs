use std::io::BufWriter;

use anyhow::{Context, Result};
use asciify_core::config::ConvertConfig;
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

    // 3. Valider le chemin d'entrée
    cli.validate_path()?;

    // 4. Charger la config puis appliquer les overrides CLI
    let config = cli.apply_overrides(resolve_config(&cli)?);
    config.validate()?;
    log::debug!("Configuration effective : {config:?}");

    // 5. Décoder ou encoder
    if let Some(ref output) = cli.deasciify {
        return pipeline::run_decode(&cli.path, output, &config);
    }

    if let Some(ref output) = cli.output {
        let file = std::fs::File::create(output)
            .with_context(|| format!("Impossible de créer {}", output.display()))?;
        pipeline::run_encode(&cli.path, &config, &mut BufWriter::new(file))
    } else {
        let stdout = std::io::stdout();
        pipeline::run_encode(&cli.path, &config, &mut stdout.lock())
    }
}

/// Resolve config: --config file if given and present, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    match cli.config {
        Some(ref path) if path.exists() => asciify_core::config::load_config(path),
        Some(ref path) => {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                path.display()
            );
            Ok(ConvertConfig::default())
        }
        None => Ok(ConvertConfig::default()),
    }
}
