// std imports
use std::{io::Write, num::NonZeroUsize};

// local imports
use crate::{
    cli::Opt,
    error::*,
    generator::{Catalog, Generator, Selector},
    rng::{RandomSource, SeededRandom, ThreadRandom},
    sample::Draw,
    settings::Settings,
};

// ---

#[derive(Debug)]
pub struct Options {
    pub generator: Generator,
    pub count: NonZeroUsize,
    pub seed: Option<u64>,
}

impl Options {
    /// Merges command line options with settings.
    ///
    /// Command line options take precedence, a generator name takes precedence over a multiplier.
    pub fn resolve(opt: &Opt, settings: &Settings, catalog: &Catalog) -> Result<Self> {
        let defaults = Selector {
            name: settings.generator.as_deref(),
            multiplier: None,
        };
        let generator = opt.selector().or(defaults).resolve(catalog, settings.multiplier)?;

        let count = match opt.count {
            Some(count) => count,
            None => NonZeroUsize::new(settings.count).ok_or(Error::ZeroCount)?,
        };

        Ok(Self {
            generator,
            count,
            seed: opt.seed.or(settings.seed),
        })
    }
}

/// App runs a generator and reports each draw.
pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns a random source, seeded if a seed is configured.
    pub fn source(&self) -> Box<dyn RandomSource> {
        match self.options.seed {
            Some(seed) => {
                log::debug!("use seeded random source, seed={seed}");
                Box::new(SeededRandom::new(seed))
            }
            None => Box::new(ThreadRandom::default()),
        }
    }

    /// Lazily draws `count` samples from `source`.
    pub fn draws<'a, R>(&'a self, source: &'a mut R) -> impl Iterator<Item = Draw> + 'a
    where
        R: RandomSource + ?Sized,
    {
        (0..self.options.count.get()).map(move |_| self.options.generator.draw(&mut *source))
    }

    pub fn run<R>(&self, source: &mut R, output: &mut dyn Write) -> Result<()>
    where
        R: RandomSource + ?Sized,
    {
        let generator = &self.options.generator;
        log::debug!(
            "run generator {} with multiplier {} {} time(s)",
            generator.name().unwrap_or("<anonymous>"),
            generator.multiplier(),
            self.options.count,
        );

        for draw in self.draws(source) {
            report(&draw, output)?;
        }
        output.flush()?;

        Ok(())
    }
}

/// Writes the two report lines of a single draw.
pub fn report(draw: &Draw, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(output, "Processing value: {}", draw.sample)?;
    writeln!(output, "Result: {}", draw.result)
}
