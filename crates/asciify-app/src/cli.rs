use std::path::PathBuf;

use asciify_core::config::ConvertConfig;
use asciify_core::grid::Resolution;
use clap::Parser;

/// asciify — convertit une image en art ASCII, et inversement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image à convertir, ou fichier texte ASCII avec --deasciify.
    pub path: PathBuf,

    /// Relire l'art ASCII de PATH et écrire l'image reconstruite dans ce fichier.
    #[arg(short, long, value_name = "OUT")]
    pub deasciify: Option<PathBuf>,

    /// Résolution LARGEURxHAUTEUR. Défaut : taille de l'image, ou déduite du texte.
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub resolution: Option<Resolution>,

    /// Ajouter l'espace comme symbole le plus clair.
    #[arg(short, long, default_value_t = false)]
    pub spaces: bool,

    /// Coefficient d'étirement horizontal (les glyphes sont plus hauts que larges).
    #[arg(short, long)]
    pub coefficient: Option<u32>,

    /// Écrire l'art ASCII dans ce fichier au lieu de la sortie standard.
    #[arg(short, long, value_name = "FILE", conflicts_with = "deasciify")]
    pub output: Option<PathBuf>,

    /// Fichier de configuration TOML (section [convert]).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that PATH points at an existing regular file.
    ///
    /// # Errors
    /// Returns an error if the path is missing or is a directory.
    pub fn validate_path(&self) -> anyhow::Result<()> {
        if !self.path.exists() {
            anyhow::bail!("Fichier introuvable : {}", self.path.display());
        }
        if !self.path.is_file() {
            anyhow::bail!("{} est un dossier.", self.path.display());
        }
        Ok(())
    }

    /// Apply command-line overrides on top of `config`.
    #[must_use]
    pub fn apply_overrides(&self, mut config: ConvertConfig) -> ConvertConfig {
        if let Some(c) = self.coefficient {
            config.coefficient = c;
        }
        if self.spaces {
            config.spaces = true;
        }
        if self.resolution.is_some() {
            config.resolution = self.resolution;
        }
        config
    }
}
