// std imports
use std::{
    borrow::Cow,
    fmt,
    io::{self, Write},
    sync::Arc,
};

// third-party imports
use config::ConfigError;
use owo_colors::OwoColorize;
use thiserror::Error;

// local imports
use crate::{
    config::APP_NAME,
    sample::Multiplier,
    xerr::{Highlight, HighlightQuoted, Suggestions},
};

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    InvalidMultiplier(#[from] InvalidMultiplierError),
    #[error("unknown generator {name}", name = .name.hlq())]
    UnknownGenerator { name: Arc<str>, suggestions: Suggestions },
    #[error("duplicate generator {name} in configuration", name = .name.hlq())]
    DuplicateGenerator { name: Arc<str> },
    #[error("count must be greater than zero")]
    ZeroCount,
}

impl Error {
    pub fn log(&self, app: &impl AppInfoProvider) {
        self.log_to(&mut anstream::stderr(), app).ok();
    }

    pub fn log_to<W: Write>(&self, target: &mut W, app: &impl AppInfoProvider) -> io::Result<()> {
        writeln!(target, "{} {}", "error:".bright_red().bold(), self)?;
        write!(target, "{}", self.tips(app))
    }

    pub fn tips<'a, A: AppInfoProvider>(&'a self, app: &'a A) -> Tips<'a, A> {
        Tips { err: self, app }
    }
}

/// InvalidMultiplierError is an error which may occur when parsing a multiplier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid multiplier {value:?}, use an integer in range {min}..={max}", min = Multiplier::MIN, max = Multiplier::MAX)]
pub struct InvalidMultiplierError {
    pub value: String,
}

impl InvalidMultiplierError {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self { value: value.into() }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ---

/// Provides application specific hints for error tips.
pub trait AppInfoProvider {
    fn app_name(&self) -> Cow<'static, str> {
        APP_NAME.into()
    }

    fn usage_suggestion(&self, _request: UsageRequest) -> Option<UsageResponse> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageRequest {
    ListGenerators,
}

/// Command line arguments and an optional trailing note.
pub type UsageResponse = (Cow<'static, str>, Cow<'static, str>);

// ---

pub struct Tips<'a, A> {
    err: &'a Error,
    app: &'a A,
}

impl<A: AppInfoProvider> fmt::Display for Tips<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.err {
            Error::UnknownGenerator { suggestions, .. } => {
                if !suggestions.is_empty() {
                    write!(f, "{} did you mean ", "  tip:".green().bold())?;
                    let n = suggestions.iter().count();
                    for (i, candidate) in suggestions.iter().enumerate() {
                        if i > 0 {
                            write!(f, "{}", if i == n - 1 { " or " } else { ", " })?;
                        }
                        write!(f, "{}", candidate.hlq())?;
                    }
                    writeln!(f, "?")?;
                } else if let Some((args, note)) = self.app.usage_suggestion(UsageRequest::ListGenerators) {
                    let command = format!("{} {}", self.app.app_name(), args);
                    writeln!(f, "{} run {} to list available generators{}", "  tip:".green().bold(), command.bold(), note)?;
                }
            }
            Error::InvalidMultiplier(_) => {
                writeln!(
                    f,
                    "{} multiplier must be an integer from {} to {}",
                    "  tip:".green().bold(),
                    Multiplier::MIN.hl(),
                    Multiplier::MAX.hl()
                )?;
            }
            _ => {}
        }
        Ok(())
    }
}
