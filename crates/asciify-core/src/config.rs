use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::SymbolRamp;
use crate::error::CodecError;
use crate::grid::Resolution;

/// Paramètres de conversion partagés par l'encodage et le décodage.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use asciify_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.coefficient, 1);
/// assert!(!config.spaces);
/// assert!(config.resolution.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConvertConfig {
    /// Étirement horizontal : chaque symbole est répété `coefficient` fois.
    pub coefficient: u32,
    /// Ajouter l'espace comme symbole le plus clair.
    pub spaces: bool,
    /// Résolution explicite. `None` = dimensions natives (encode) ou déduites (decode).
    pub resolution: Option<Resolution>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            coefficient: 1,
            spaces: false,
            resolution: None,
        }
    }
}

impl ConvertConfig {
    /// Reject values the codec cannot run with.
    ///
    /// # Errors
    /// [`CodecError::InvalidCoefficient`] for a zero coefficient,
    /// [`CodecError::InvalidLayout`] for an explicit resolution with a zero side.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.coefficient == 0 {
            return Err(CodecError::InvalidCoefficient(self.coefficient));
        }
        if let Some(res) = self.resolution {
            res.validate()?;
        }
        Ok(())
    }

    /// The canonical ramp matching `spaces`.
    #[must_use]
    pub fn ramp(&self) -> SymbolRamp {
        SymbolRamp::canonical(self.spaces)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    convert: Option<ConvertSection>,
}

/// Convert section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ConvertSection {
    coefficient: Option<u32>,
    spaces: Option<bool>,
    resolution: Option<Resolution>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML or a value has the wrong type.
///
/// # Example
/// ```
/// use asciify_core::config::parse_config;
/// let config = parse_config("[convert]\ncoefficient = 2\nresolution = \"80x40\"\n").unwrap();
/// assert_eq!(config.coefficient, 2);
/// assert_eq!(config.resolution.unwrap().to_string(), "80x40");
/// ```
pub fn parse_config(content: &str) -> Result<ConvertConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = ConvertConfig::default();
    if let Some(c) = file.convert {
        if let Some(v) = c.coefficient {
            config.coefficient = v;
        }
        if let Some(v) = c.spaces {
            config.spaces = v;
        }
        if c.resolution.is_some() {
            config.resolution = c.resolution;
        }
    }
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use asciify_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("asciify.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Configuration chargée depuis {}: {config:?}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), ConvertConfig::default());
    }

    #[test]
    fn partial_section_overrides_only_given_fields() {
        let config = parse_config("[convert]\nspaces = true\n").unwrap();
        assert!(config.spaces);
        assert_eq!(config.coefficient, 1);
        assert_eq!(config.ramp().len(), 70);
    }

    #[test]
    fn bad_resolution_is_rejected() {
        assert!(parse_config("[convert]\nresolution = \"wide\"\n").is_err());
    }

    #[test]
    fn validate_rejects_zero_coefficient() {
        let config = ConvertConfig {
            coefficient: 0,
            ..ConvertConfig::default()
        };
        assert_eq!(config.validate(), Err(CodecError::InvalidCoefficient(0)));
    }

    #[test]
    fn validate_rejects_zero_resolution() {
        let config = ConvertConfig {
            resolution: Some(Resolution::new(10, 0)),
            ..ConvertConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CodecError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn load_config_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[convert]\ncoefficient = 3\nresolution = \"4x2\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.coefficient, 3);
        assert_eq!(config.resolution, Some(Resolution::new(4, 2)));
    }

    #[test]
    fn load_config_missing_file() {
        assert!(load_config(Path::new("/nonexistent/asciify.toml")).is_err());
    }
}
