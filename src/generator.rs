// std imports
use std::{collections::HashSet, sync::Arc};

// local imports
use crate::{
    error::*,
    rng::RandomSource,
    sample::{Draw, Multiplier, Sample, Scaled},
    settings::GeneratorSpec,
    xerr::Suggestions,
};

// ---

/// Generator draws samples and scales them by a multiplier fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    name: Option<Arc<str>>,
    multiplier: Multiplier,
    description: Option<Arc<str>>,
}

impl Generator {
    pub fn new(multiplier: Multiplier) -> Self {
        Self {
            name: None,
            multiplier,
            description: None,
        }
    }

    pub fn named<S: Into<Arc<str>>>(name: S, multiplier: Multiplier) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(multiplier)
        }
    }

    pub fn with_description<S: Into<Arc<str>>>(self, description: S) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn scale(&self, sample: Sample) -> Scaled {
        sample * self.multiplier
    }

    /// Draws a single sample from `source` and scales it.
    pub fn draw<R>(&self, source: &mut R) -> Draw
    where
        R: RandomSource + ?Sized,
    {
        let sample = Sample::from_unit(source.next_unit());
        Draw {
            sample,
            result: self.scale(sample),
        }
    }
}

impl From<&GeneratorSpec> for Generator {
    fn from(spec: &GeneratorSpec) -> Self {
        let generator = Self::named(spec.name.as_str(), spec.multiplier);
        match &spec.description {
            Some(description) => generator.with_description(description.as_str()),
            None => generator,
        }
    }
}

// ---

/// Catalog is an ordered set of named generators.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    generators: Vec<Generator>,
}

impl Catalog {
    pub fn new<'a, I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a GeneratorSpec>,
    {
        let mut seen = HashSet::new();
        let mut generators = Vec::new();
        for spec in specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::DuplicateGenerator {
                    name: spec.name.as_str().into(),
                });
            }
            generators.push(Generator::from(spec));
        }

        Ok(Self { generators })
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Generator> {
        self.generators.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.generators.iter().filter_map(|g| g.name())
    }

    pub fn find(&self, name: &str) -> Result<&Generator> {
        self.generators
            .iter()
            .find(|g| g.name() == Some(name))
            .ok_or_else(|| Error::UnknownGenerator {
                name: name.into(),
                suggestions: Suggestions::new(name, self.names()),
            })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Generator;
    type IntoIter = std::slice::Iter<'a, Generator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---

/// Selector picks a generator by name or by a bare multiplier, the name wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selector<'a> {
    pub name: Option<&'a str>,
    pub multiplier: Option<Multiplier>,
}

impl<'a> Selector<'a> {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.multiplier.is_none()
    }

    /// Returns `self` unless it is empty, otherwise `other`.
    pub fn or(self, other: Self) -> Self {
        if self.is_empty() { other } else { self }
    }

    pub fn resolve(&self, catalog: &Catalog, fallback: Multiplier) -> Result<Generator> {
        if let Some(name) = self.name {
            return catalog.find(name).cloned();
        }
        Ok(Generator::new(self.multiplier.unwrap_or(fallback)))
    }
}
