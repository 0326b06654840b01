// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod rng;
pub mod sample;
pub mod settings;
pub mod xerr;

// private modules
mod appdirs;

// public uses
pub use app::{App, Options};
pub use appdirs::AppDirs;
pub use generator::{Catalog, Generator, Selector};
pub use rng::{RandomSource, SeededRandom, ThreadRandom};
pub use sample::{Draw, Multiplier, Sample, Scaled};
pub use settings::Settings;
