// std imports
use std::path::PathBuf;

/// Per-user directories of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub config_dir: PathBuf,
}

impl AppDirs {
    /// Locates the configuration directory of application `name`, if the platform has one.
    pub fn new(name: &str) -> Option<Self> {
        Some(Self::at(sys::config_dir()?.join(name)))
    }

    pub fn at<P: Into<PathBuf>>(config_dir: P) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// User configuration file with base name `name`, extension is resolved on load.
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_dir.join(name)
    }
}

#[cfg(target_os = "macos")]
mod sys {
    use super::*;

    // XDG_CONFIG_HOME is honored if absolute, ~/.config otherwise.
    pub(crate) fn config_dir() -> Option<PathBuf> {
        std::env::var_os("XDG_CONFIG_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| Some(dirs::home_dir()?.join(".config")))
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    pub(crate) use dirs::config_dir;
}

#[cfg(test)]
mod tests;
