//! Viewer configuration
//!
//! The reveal speed and the palette for each content part. `defaults/answer.default.toml` is
//! compiled in; [`Loader`] stacks a user TOML file and command-line values over it and
//! yields a checked [`AnswerConfig`].

use crate::answer::message::ContentPart;
use crate::answer::tagging::{Palette, PaletteChoice};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/answer.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnswerConfig {
    pub reveal: RevealConfig,
    pub palette: PaletteConfig,
}

impl AnswerConfig {
    /// Palette for a content part
    pub fn palette_for(&self, part: ContentPart) -> Palette {
        Palette::from_choice(match part {
            ContentPart::Thought => self.palette.thought,
            ContentPart::Answer => self.palette.answer,
        })
    }
}

/// Character-reveal speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RevealConfig {
    /// Milliseconds between successive character reveals, smaller is faster
    pub tick_interval_ms: u64,
}

impl RevealConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Message(
                "reveal.tick_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            tick_interval_ms: 15,
        }
    }
}

/// Palette selection per content part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaletteConfig {
    pub thought: PaletteChoice,
    pub answer: PaletteChoice,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        PaletteConfig {
            thought: ContentPart::Thought.default_palette(),
            answer: ContentPart::Answer.default_palette(),
        }
    }
}

/// Builds an [`AnswerConfig`], later sources winning over earlier ones
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the compiled-in defaults
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Stack a TOML file that must exist
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Stack a TOML file if it is there
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `reveal.tick_interval_ms` from `--tick-ms`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the sources; a zero reveal interval is rejected here
    pub fn build(self) -> Result<AnswerConfig, ConfigError> {
        let config: AnswerConfig = self.builder.build()?.try_deserialize()?;
        config.reveal.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in configuration with nothing stacked on top
pub fn load_defaults() -> Result<AnswerConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.reveal, RevealConfig::default());
        assert_eq!(config.reveal.tick_interval(), Duration::from_millis(15));
        assert_eq!(config.palette, PaletteConfig::default());
        assert_eq!(config.palette.thought, PaletteChoice::Thought);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("reveal.tick_interval_ms", 40i64)
            .unwrap()
            .set_override("palette.answer", "thought")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.reveal.tick_interval_ms, 40);
        assert_eq!(config.palette_for(ContentPart::Answer), Palette::thought());
    }

    #[test]
    fn rejects_zero_interval() {
        let err = Loader::new()
            .set_override("reveal.tick_interval_ms", 0i64)
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn layers_user_file() {
        let path = std::env::temp_dir().join(format!(
            "answer-render-config-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[reveal]\ntick_interval_ms = 5").unwrap();

        let config = Loader::new().with_file(&path).build().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.reveal.tick_interval_ms, 5);
        assert_eq!(config.palette.answer, PaletteChoice::Answer);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here.toml")
            .build()
            .unwrap();
        assert_eq!(config.reveal.tick_interval_ms, 15);
    }
}
