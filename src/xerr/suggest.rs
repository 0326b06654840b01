// std imports
use std::{collections::HashSet, sync::Arc};

// Minimum Jaro similarity for a variant to be suggested.
const MIN_RELEVANCE: f64 = 0.75;

/// Suggestions is a list of known names similar to a wanted one, most relevant first.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    candidates: Vec<(f64, Arc<str>)>,
}

impl Suggestions {
    pub fn new<T, I>(wanted: &str, variants: I) -> Self
    where
        T: Into<Arc<str>>,
        I: IntoIterator<Item = T>,
    {
        let mut seen = HashSet::new();
        let mut candidates = variants
            .into_iter()
            .map(Into::into)
            .filter(|variant: &Arc<str>| seen.insert(variant.clone()))
            .map(|variant| (strsim::jaro(wanted, &variant), variant))
            .filter(|(relevance, _)| *relevance > MIN_RELEVANCE)
            .collect::<Vec<_>>();

        // stable, so equally relevant variants keep their original order
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));

        Self { candidates }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> SuggestionsIter<'_> {
        SuggestionsIter {
            iter: self.candidates.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a Suggestions {
    type Item = &'a str;
    type IntoIter = SuggestionsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct SuggestionsIter<'a> {
    iter: std::slice::Iter<'a, (f64, Arc<str>)>,
}

impl<'a> Iterator for SuggestionsIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(_, candidate)| candidate.as_ref())
    }
}
