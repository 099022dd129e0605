//! Shared configuration loader for the tagdump toolchain.
//!
//! `defaults/tagdump.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TagdumpConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tagdump_babel::formats::HtmlMode;
use tagdump_babel::{ConvertOptions, TokenStyle, Traversal};

const DEFAULT_TOML: &str = include_str!("../defaults/tagdump.default.toml");

/// Top-level configuration consumed by tagdump applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TagdumpConfig {
    pub convert: ConvertConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl TagdumpConfig {
    /// Options for one conversion run.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new(
            TokenStyle::from_explicit(self.convert.explicit),
            self.convert.traversal.into(),
        )
    }
}

/// Walk and rendering knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub explicit: bool,
    pub traversal: TraversalConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TraversalConfig {
    #[serde(rename = "recursive")]
    Recursive,
    #[serde(rename = "iterative")]
    Iterative,
}

impl From<TraversalConfig> for Traversal {
    fn from(config: TraversalConfig) -> Self {
        match config {
            TraversalConfig::Recursive => Traversal::Recursive,
            TraversalConfig::Iterative => Traversal::Iterative,
        }
    }
}

/// Format-specific input knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub html: HtmlInputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlInputConfig {
    pub mode: HtmlModeConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum HtmlModeConfig {
    #[serde(rename = "source")]
    Source,
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "fragment")]
    Fragment,
}

impl From<HtmlModeConfig> for HtmlMode {
    fn from(config: HtmlModeConfig) -> Self {
        match config {
            HtmlModeConfig::Source => HtmlMode::Source,
            HtmlModeConfig::Document => HtmlMode::Document,
            HtmlModeConfig::Fragment => HtmlMode::Fragment,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TagdumpConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TagdumpConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert!(!config.convert.explicit);
        assert_eq!(config.convert.traversal, TraversalConfig::Recursive);
        assert_eq!(config.input.html.mode, HtmlModeConfig::Source);
        assert_eq!(config.output.format, "yaml");
    }

    #[test]
    fn default_convert_options() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.convert_options(), ConvertOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("convert.explicit", true)
            .expect("override to apply")
            .set_override("convert.traversal", "iterative")
            .expect("override to apply")
            .set_override("input.html.mode", "fragment")
            .expect("override to apply")
            .build()
            .expect("config to build");

        let options = config.convert_options();
        assert_eq!(options.style, TokenStyle::Explicit);
        assert_eq!(options.traversal, Traversal::Iterative);
        assert_eq!(HtmlMode::from(config.input.html.mode), HtmlMode::Fragment);
    }

    #[test]
    fn rejects_unknown_traversal() {
        let result = Loader::new()
            .set_override("convert.traversal", "breadth-first")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_file_over_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nformat = \"json\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(!config.convert.explicit);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("does/not/exist/tagdump.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "yaml");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("does/not/exist/tagdump.toml")
            .build();
        assert!(result.is_err());
    }
}
