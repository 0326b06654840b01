// std imports
use std::{num::NonZeroUsize, path::PathBuf};

// third-party imports
use clap::{Parser, ValueEnum};
use clap_complete::Shell;

// local imports
use crate::{generator::Selector, sample::Multiplier};

// ---

/// Scaled random sample generator.
///
/// Draws a pseudo-random value in range [0, 100), multiplies it by a fixed multiplier and prints both numbers.
#[derive(Parser, Debug)]
#[command(name = "samplegen", version = env!("SAMPLEGEN_VERSION"))]
pub struct Opt {
    /// Configuration file path, may be repeated, an empty value or '-' discards the previous ones and the defaults.
    #[arg(long, value_name = "FILE", env = "SAMPLEGEN_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Multiplier applied to each sample, an integer from 0 to 9.
    #[arg(long, short = 'm', env = "SAMPLEGEN_MULTIPLIER", overrides_with = "multiplier")]
    pub multiplier: Option<Multiplier>,

    /// Named generator from the catalog, overrides --multiplier option.
    #[arg(long, short = 'g', env = "SAMPLEGEN_GENERATOR", overrides_with = "generator")]
    pub generator: Option<String>,

    /// List available generators and exit.
    #[arg(long)]
    pub list_generators: bool,

    /// Seed of the random source, makes the output reproducible.
    #[arg(long, short = 's', env = "SAMPLEGEN_SEED", overrides_with = "seed")]
    pub seed: Option<u64>,

    /// Number of samples to draw.
    #[arg(long, short = 'n', env = "SAMPLEGEN_COUNT", overrides_with = "count")]
    pub count: Option<NonZeroUsize>,

    /// Output file.
    #[arg(long, short = 'o', overrides_with = "output")]
    pub output: Option<PathBuf>,

    /// Color output options.
    #[arg(long, default_value = "auto", env = "SAMPLEGEN_COLOR", overrides_with = "color")]
    #[arg(value_enum)]
    pub color: ColorOption,

    /// Print shell auto-completion script and exit.
    #[arg(long, value_name = "SHELL")]
    pub shell_completions: Option<Shell>,

    /// Print man page and exit.
    #[arg(long)]
    pub man_page: bool,
}

impl Opt {
    /// Returns configuration files to load and whether the default sources are discarded.
    pub fn config_files(&self) -> (&[String], bool) {
        match self.config.iter().rposition(|x| x.is_empty() || x == "-") {
            Some(i) => (&self.config[i + 1..], true),
            None => (&self.config[..], false),
        }
    }

    pub fn selector(&self) -> Selector<'_> {
        Selector {
            name: self.generator.as_deref(),
            multiplier: self.multiplier,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    Auto,
    Always,
    Never,
}

impl From<ColorOption> for anstream::ColorChoice {
    fn from(option: ColorOption) -> Self {
        match option {
            ColorOption::Auto => Self::Auto,
            ColorOption::Always => Self::Always,
            ColorOption::Never => Self::Never,
        }
    }
}
