use std::borrow::Cow;

use crate::Source;

/// Selects entries by their `source` tag.
///
/// A filter includes a set of sources (OR semantics) and may exclude others.
/// Sources named in both lists are excluded. With an empty include list the
/// filter matches everything not excluded; with both lists empty it is
/// inactive and matches everything, including entries without a source.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SourceFilter<'a> {
    include: Vec<Source<'a>>,
    exclude: Vec<Source<'a>>,
}

impl<'a> SourceFilter<'a> {
    /// A filter that matches every entry.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn only<S: Into<Source<'a>>>(source: S) -> Self {
        SourceFilter {
            include: vec![source.into()],
            exclude: Vec::new(),
        }
    }

    pub fn one_of<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Source<'a>>,
    {
        SourceFilter {
            include: sources.into_iter().map(Into::into).collect(),
            exclude: Vec::new(),
        }
    }

    pub fn excluding<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Source<'a>>,
    {
        self.exclude.extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn include(&self) -> &[Source<'a>] {
        &self.include
    }

    pub fn exclude(&self) -> &[Source<'a>] {
        &self.exclude
    }

    /// True when the filter restricts anything at all.
    pub fn is_active(&self) -> bool {
        !self.include.is_empty() || !self.exclude.is_empty()
    }

    fn is_excluded(&self, source: &str) -> bool {
        self.exclude.iter().any(|s| s == source)
    }

    /// Sources that are included and not excluded.
    pub fn effective_include(&self) -> impl Iterator<Item = &Source<'a>> {
        self.include.iter().filter(move |s| !self.is_excluded(s))
    }

    /// Tests a single tag against the filter.
    pub fn accepts(&self, source: &str) -> bool {
        if self.effective_include().next().is_some() {
            self.effective_include().any(|s| s == source)
        } else {
            !self.is_excluded(source)
        }
    }

    /// Tests an entry's optional source. Untagged entries only match an
    /// inactive filter.
    pub fn matches(&self, source: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        source.map_or(false, |s| self.accepts(s))
    }
}

impl<'a> From<&'a str> for SourceFilter<'a> {
    fn from(source: &'a str) -> Self {
        SourceFilter::only(source)
    }
}

impl From<String> for SourceFilter<'_> {
    fn from(source: String) -> Self {
        SourceFilter::only(source)
    }
}

impl<'a> From<Cow<'a, str>> for SourceFilter<'a> {
    fn from(source: Cow<'a, str>) -> Self {
        SourceFilter::only(source)
    }
}

impl<'a> From<Vec<&'a str>> for SourceFilter<'a> {
    fn from(sources: Vec<&'a str>) -> Self {
        SourceFilter::one_of(sources)
    }
}

impl<'a> From<&[&'a str]> for SourceFilter<'a> {
    fn from(sources: &[&'a str]) -> Self {
        SourceFilter::one_of(sources.iter().copied())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for SourceFilter<'a> {
    fn from(sources: [&'a str; N]) -> Self {
        SourceFilter::one_of(sources)
    }
}

impl<'a, T: Into<SourceFilter<'a>>> From<Option<T>> for SourceFilter<'a> {
    fn from(source: Option<T>) -> Self {
        source.map_or_else(SourceFilter::any, Into::into)
    }
}
