// std imports
use std::path::PathBuf;

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "samplegen";

/// Base name of the user configuration file inside the configuration directory.
pub const CONFIG_NAME: &str = "config";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns a loader for the given custom configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader::new(paths.into_iter().map(Into::into).collect())
}

/// Returns the embedded default settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
    dirs: Option<AppDirs>,
}

impl Loader {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
            dirs: app_dirs(),
        }
    }

    /// Skips the embedded defaults and the user configuration file.
    pub fn no_default(self, val: bool) -> Self {
        Self { no_default: val, ..self }
    }

    pub fn with_dirs(self, dirs: Option<AppDirs>) -> Self {
        Self { dirs, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        if self.no_default {
            Settings::load(self.custom())
        } else {
            Settings::load(self.system().chain(self.custom()))
        }
    }

    fn system(&self) -> impl Iterator<Item = Source> {
        if self.dirs.is_none() {
            log::debug!("no configuration directory detected, skip user configuration");
        }
        let user = self
            .dirs
            .as_ref()
            .map(|dirs| Source::from(SourceFile::new(dirs.config_file(CONFIG_NAME)).required(false)));

        std::iter::once(Settings::default_source()).chain(user)
    }

    fn custom(&self) -> impl Iterator<Item = Source> {
        self.paths
            .clone()
            .into_iter()
            .map(|path| Source::from(SourceFile::new(path)))
    }
}

#[cfg(test)]
mod tests;
