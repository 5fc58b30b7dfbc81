//! Mapper configuration, persisted as TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::io::Syntax;

/// Settings for a [`Mapper`](crate::mapping::Mapper).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Deepest record nesting serialize and parse will follow.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Syntax used when none is given explicitly.
    #[serde(default)]
    pub format: Syntax,
    /// Write `rdfs:label` and `rdfs:isDefinedBy` for discriminator classes.
    #[serde(default = "default_class_labels")]
    pub class_labels: bool,
}

fn default_max_depth() -> usize {
    8
}

fn default_class_labels() -> bool {
    true
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            format: Syntax::default(),
            class_labels: default_class_labels(),
        }
    }
}

impl MapperConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid {
                message: "max_depth must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = MapperConfig::from_toml_str("").unwrap();
        assert_eq!(config, MapperConfig::default());
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.format, Syntax::RdfXml);
        assert!(config.class_labels);
    }

    #[test]
    fn fields_override_defaults() {
        let config = MapperConfig::from_toml_str(
            "max_depth = 4\nformat = \"turtle\"\nclass_labels = false\n",
        )
        .unwrap();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.format, Syntax::Turtle);
        assert!(!config.class_labels);
    }

    #[test]
    fn zero_depth_is_invalid() {
        let err = MapperConfig::from_toml_str("max_depth = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let err = MapperConfig::from_toml_str("format = \"json-ld\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn toml_round_trip() {
        let config = MapperConfig {
            max_depth: 5,
            format: Syntax::NTriples,
            class_labels: false,
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("n-triples"));
        assert_eq!(MapperConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapper.toml");
        std::fs::write(&path, "max_depth = 3\n").unwrap();
        assert_eq!(MapperConfig::load(&path).unwrap().max_depth, 3);

        let missing = MapperConfig::load(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}
