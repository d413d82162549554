use crate::catalog;
use crate::format::FormatOptions;
use crate::units::{normalize, UnitError, UnitTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown unit table '{0}'")]
    UnknownTable(String),
    #[error("unit table '{name}' is invalid: {source}")]
    Table {
        name: String,
        #[source]
        source: UnitError,
    },
}

/// A unit table given by name or spelled out inline
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TableSpec {
    // Catalog or config table name: "bytes"
    Named(String),
    // Inline: [{ threshold = 1000, suffix = "K" }, ...]
    Inline(UnitTable),
}

/// Partial format options. Unset fields keep the value they are applied over.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatSpec {
    #[serde(default, alias = "unit_table", alias = "table")]
    pub unit_table: Option<TableSpec>,
    #[serde(default, alias = "max_significant_digits")]
    pub max_significant_digits: Option<usize>,
    #[serde(default, alias = "min_significant_digits")]
    pub min_significant_digits: Option<usize>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default, alias = "use_grouping")]
    pub use_grouping: Option<bool>,
    #[serde(default, alias = "unit_separator")]
    pub unit_separator: Option<String>,
    #[serde(default, alias = "empty_value")]
    pub empty_value: Option<String>,
}

impl FormatSpec {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override `base` field by field with whatever this spec sets
    pub fn apply(&self, mut base: FormatOptions, config: &Config) -> Result<FormatOptions, ConfigError> {
        if let Some(spec) = &self.unit_table {
            base.unit_table = config.resolve(spec)?;
        }
        if let Some(digits) = self.max_significant_digits {
            base.max_significant_digits = digits;
        }
        if let Some(digits) = self.min_significant_digits {
            base.min_significant_digits = digits;
        }
        if let Some(locale) = &self.locale {
            base.locale = locale.clone();
        }
        if let Some(use_grouping) = self.use_grouping {
            base.use_grouping = use_grouping;
        }
        if let Some(separator) = &self.unit_separator {
            base.unit_separator = separator.clone();
        }
        if let Some(empty_value) = &self.empty_value {
            base.empty_value = empty_value.clone();
        }
        Ok(base)
    }
}

/// Contents of a `unitfmt.toml` file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Options applied before any per-call overrides
    #[serde(default)]
    pub defaults: FormatSpec,

    // Custom tables, referenced by name like catalog tables
    #[serde(default)]
    pub tables: HashMap<String, UnitTable>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        log::debug!(
            "loaded config from {} ({} custom tables)",
            path.display(),
            config.tables.len()
        );
        Ok(config)
    }

    /// Parse a config and check that every custom table is usable
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        for (name, table) in &config.tables {
            normalize(table).map_err(|source| ConfigError::Table {
                name: name.clone(),
                source,
            })?;
        }
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Find a table by name: custom tables first, then the catalog. Both use
    /// the catalog's name matching.
    pub fn table(&self, name: &str) -> Result<UnitTable, ConfigError> {
        self.tables
            .get(name)
            .or_else(|| {
                self.tables
                    .iter()
                    .find(|(entry, _)| catalog::same_name(entry, name))
                    .map(|(_, table)| table)
            })
            .cloned()
            .or_else(|| catalog::lookup(name))
            .ok_or_else(|| ConfigError::UnknownTable(name.to_string()))
    }

    pub fn resolve(&self, spec: &TableSpec) -> Result<UnitTable, ConfigError> {
        match spec {
            TableSpec::Named(name) => self.table(name),
            TableSpec::Inline(table) => Ok(table.clone()),
        }
    }

    /// Built-in defaults overridden by the `[defaults]` section
    pub fn options(&self) -> Result<FormatOptions, ConfigError> {
        self.defaults.apply(FormatOptions::default(), self)
    }

    /// Custom table names, sorted
    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format;
    use crate::units::Unit;

    const SAMPLE: &str = r#"
[defaults]
unit_table = "widgets"
max_significant_digits = 4
locale = "de-DE"
use_grouping = true
unit_separator = " "
empty_value = "-"

[tables]
widgets = [
    { threshold = 1, suffix = "W" },
    { threshold = 1000, suffix = "kW" },
]
"#;

    #[test]
    fn test_load_sample_config() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        assert_eq!(config.table_names(), vec!["widgets"]);

        let options = config.options().unwrap();
        assert_eq!(options.max_significant_digits, 4);
        assert_eq!(options.locale, "de-DE");
        assert!(options.use_grouping);
        assert_eq!(options.unit_separator, " ");
        assert_eq!(options.empty_value, "-");
        assert_eq!(options.unit_table[1], Unit::new(1000.0, "kW"));

        assert_eq!(format(12_345.0, &options).unwrap(), "12,35 kW");
        assert_eq!(format(None, &options).unwrap(), "-");
    }

    #[test]
    fn test_unset_fields_keep_defaults() {
        let config = Config::load_from_str("[defaults]\nlocale = \"fr-FR\"\n").unwrap();
        let options = config.options().unwrap();
        assert_eq!(options.locale, "fr-FR");
        assert_eq!(options.max_significant_digits, 3);
        assert_eq!(options.unit_table, catalog::NUMBERS.clone());
    }

    #[test]
    fn test_named_catalog_table() {
        let config = Config::load_from_str("[defaults]\ntable = \"bytes\"\n").unwrap();
        let options = config.options().unwrap();
        assert!(options.unit_table.shares_storage(&catalog::BYTES));
    }

    #[test]
    fn test_inline_table() {
        let config = Config::load_from_str(
            "[defaults]\nunit_table = [{ threshold = 60, suffix = \"m\" }, { threshold = 1, suffix = \"s\" }]\n",
        )
        .unwrap();
        let options = config.options().unwrap();
        assert_eq!(format(90.0, &options).unwrap(), "1.5m");
    }

    #[test]
    fn test_custom_table_names_match_like_catalog_names() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        let widgets = config.table("widgets").unwrap();
        assert_eq!(config.table("Widgets").unwrap(), widgets);
        assert_eq!(config.table(" WIDGETS ").unwrap(), widgets);

        let config = Config::load_from_str(
            "[tables]\nsolar_panels = [{ threshold = 1, suffix = \"P\" }]\n",
        )
        .unwrap();
        let options = FormatSpec {
            unit_table: Some(TableSpec::Named("Solar-Panels".to_string())),
            ..FormatSpec::default()
        }
        .apply(FormatOptions::default(), &config)
        .unwrap();
        assert_eq!(format(12.0, &options).unwrap(), "12P");
    }

    #[test]
    fn test_unknown_table() {
        let config = Config::load_from_str("[defaults]\ntable = \"parsecs\"\n").unwrap();
        assert!(matches!(
            config.options(),
            Err(ConfigError::UnknownTable(name)) if name == "parsecs"
        ));
    }

    #[test]
    fn test_invalid_custom_table() {
        let result = Config::load_from_str("[tables]\nbroken = [{ threshold = 0, suffix = \"x\" }]\n");
        assert!(matches!(
            result,
            Err(ConfigError::Table { name, source: UnitError::NonPositiveThreshold { .. } }) if name == "broken"
        ));

        let result = Config::load_from_str("[tables]\nempty = []\n");
        assert!(matches!(
            result,
            Err(ConfigError::Table { source: UnitError::EmptyTable, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from_file("/nonexistent/unitfmt.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_json_spec_uses_camel_case() {
        let spec = FormatSpec::from_json(
            r#"{"unitTable": "seconds", "maxSignificantDigits": 2, "unitSeparator": " "}"#,
        )
        .unwrap();
        assert_eq!(spec.unit_table, Some(TableSpec::Named("seconds".to_string())));

        let options = spec.apply(FormatOptions::default(), &Config::empty()).unwrap();
        assert_eq!(format(0.01234, &options).unwrap(), "12 ms");
    }

    #[test]
    fn test_json_spec_rejects_garbage() {
        assert!(matches!(
            FormatSpec::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
