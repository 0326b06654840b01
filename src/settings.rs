// std imports
use std::{include_str, path::PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{error::Result, sample::Multiplier};

// ---

static DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default = "default_multiplier")]
    pub multiplier: Multiplier,
    #[serde(default)]
    pub generator: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub generators: Vec<GeneratorSpec>,
}

impl Settings {
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder();

        for source in sources {
            builder = match source {
                Source::Str(value, format) => builder.add_source(File::from_str(value, format)),
                Source::File(file) => {
                    log::debug!("add config source {:?} (required: {})", file.filename, file.required);
                    builder.add_source(File::from(file.filename).required(file.required))
                }
            };
        }

        let config = builder.build()?;
        validate_multipliers(&config)?;

        Ok(config.try_deserialize()?)
    }

    /// Returns the embedded default configuration source.
    pub fn default_source() -> Source {
        Source::Str(DEFAULT_SETTINGS_RAW, FileFormat::Yaml)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load([Self::default_source()]).expect("embedded default settings are valid")
    }
}

impl Default for &'static Settings {
    fn default() -> Self {
        crate::config::default()
    }
}

// Reports out of range multipliers as such rather than as generic deserialization errors.
fn validate_multipliers(config: &Config) -> Result<()> {
    let global = config.get_string("multiplier").ok();
    let generators = config
        .get_array("generators")
        .unwrap_or_default()
        .into_iter()
        .filter_map(|generator| generator.into_table().ok()?.get("multiplier").cloned()?.into_string().ok());

    for value in global.into_iter().chain(generators) {
        value.parse::<Multiplier>()?;
    }

    Ok(())
}

fn default_multiplier() -> Multiplier {
    Multiplier::ONE
}

fn default_count() -> usize {
    1
}

// ---

/// A named generator as it appears in configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneratorSpec {
    pub name: String,
    pub multiplier: Multiplier,
    #[serde(default)]
    pub description: Option<String>,
}

// ---

#[derive(Debug, Clone)]
pub enum Source {
    Str(&'static str, FileFormat),
    File(SourceFile),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

/// Configuration file, the format is detected by extension.
///
/// A file name without extension is looked up with each supported extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new<P: Into<PathBuf>>(filename: P) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

#[cfg(test)]
mod tests;
