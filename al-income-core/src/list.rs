use std::borrow::Cow;
use std::collections::BTreeSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::amount::{FromSource, Periodic, Sourced};
use crate::error::IncomeResult;
use crate::gather::{Gatherer, Populate};
use crate::period::Period;
use crate::source::SourceFilter;

/// An ordered, filterable collection of sourced entries.
///
/// Order is insertion order. It never affects totals but is kept for
/// display. Aggregates take `&mut self` because they first make sure the
/// host has finished populating the list.
#[derive(Clone, Debug, PartialEq)]
pub struct AmountList<T> {
    pub elements: Vec<T>,
    gatherer: Gatherer<Vec<T>>,
    moved: bool,
}

impl<T> Default for AmountList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for AmountList<T> {
    fn from(elements: Vec<T>) -> Self {
        AmountList {
            elements,
            gatherer: Gatherer::new(),
            moved: false,
        }
    }
}

impl<T> FromIterator<T> for AmountList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> AmountList<T> {
    pub fn new() -> Self {
        Vec::new().into()
    }

    /// An empty list that calls `hook` to fill itself before the first
    /// aggregate operation.
    pub fn with_hook<P: Populate<Vec<T>> + 'static>(hook: P) -> Self {
        AmountList {
            elements: Vec::new(),
            gatherer: Gatherer::with_hook(hook),
            moved: false,
        }
    }

    pub fn set_hook<P: Populate<Vec<T>> + 'static>(&mut self, hook: P) {
        self.gatherer.set_hook(hook);
    }

    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn is_gathered(&self) -> bool {
        self.gatherer.is_gathered()
    }

    /// Forces the next aggregate to run the population hook again.
    pub fn reset_gathered(&mut self) {
        self.gatherer.reset();
    }

    /// True once the list was filled from a checklist.
    pub fn is_moved(&self) -> bool {
        self.moved
    }

    /// Completes host population if it has not happened yet.
    pub fn ensure_populated(&mut self) -> IncomeResult<()> {
        self.gatherer.ensure(&mut self.elements)
    }
}

impl<'l, T> IntoIterator for &'l AmountList<T> {
    type Item = &'l T;
    type IntoIter = std::slice::Iter<'l, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// Shared selection rule for list aggregates: the owner is only compared
/// while a source filter is active, and entries without an owner never
/// match an owner filter.
pub(crate) fn selects<T: Sourced>(item: &T, filter: &SourceFilter<'_>, owner: Option<&str>) -> bool {
    if !filter.is_active() {
        return true;
    }
    if !filter.matches(item.source()) {
        return false;
    }
    match owner {
        Some(owner) => item.owner() == Some(owner),
        None => true,
    }
}

impl<T: Sourced> AmountList<T> {
    /// The distinct sources present in the list.
    pub fn sources(&self) -> BTreeSet<&str> {
        self.elements.iter().filter_map(Sourced::source).collect()
    }

    /// The distinct owners of entries matching `filter`.
    pub fn owners<'s, F: Into<SourceFilter<'s>>>(&self, filter: F) -> BTreeSet<&str> {
        let filter = filter.into();
        self.elements
            .iter()
            .filter(|item| filter.matches(item.source()))
            .filter_map(Sourced::owner)
            .collect()
    }

    /// A new list holding copies of the entries matching `filter`, handy for
    /// filling forms that have a fixed slot per source.
    pub fn matches<'s, F: Into<SourceFilter<'s>>>(&self, filter: F) -> AmountList<T>
    where
        T: Clone,
    {
        let filter = filter.into();
        self.elements
            .iter()
            .filter(|item| filter.matches(item.source()))
            .cloned()
            .collect()
    }
}

impl<'a, T: FromSource<'a>> AmountList<T> {
    /// Replaces the contents with one fresh entry per checked source, in
    /// order. The `"other"` choice produces an entry without a source so the
    /// user can name it. Display names come from `terms`, falling back to
    /// the source itself.
    pub fn move_checks_to_list<I>(&mut self, selected: I, terms: &[(&'a str, &'a str)])
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        self.elements.clear();
        for (source, checked) in selected {
            if !checked {
                continue;
            }
            let item = if source == "other" {
                T::from_source(None, None)
            } else {
                let display = terms
                    .iter()
                    .find(|(key, _)| *key == source)
                    .map_or(source, |(_, term)| *term);
                T::from_source(Some(Cow::Borrowed(source)), Some(Cow::Borrowed(display)))
            };
            self.elements.push(item);
        }
        self.moved = true;
    }
}

impl<T: Periodic> AmountList<T> {
    /// Sum of the entries' totals over `target`, optionally filtered by
    /// source and, while a source filter is active, by owner.
    ///
    /// Filters that match nothing, an empty list and a zero target all give
    /// zero.
    pub fn total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
        owner: Option<&str>,
    ) -> IncomeResult<Decimal> {
        self.ensure_populated()?;
        for item in self.elements.iter_mut() {
            Periodic::ensure_populated(item)?;
        }
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let filter = source.into();
        let mut result = Decimal::ZERO;
        for item in self.elements.iter().filter(|item| selects(*item, &filter, owner)) {
            result += item.total(target)?;
        }
        Ok(result)
    }

    /// One record per entry for downstream JSON consumers.
    ///
    /// Frequencies and values become floats here, so exact decimal
    /// precision is lost at this boundary.
    pub fn records(&self) -> Vec<AmountRecord> {
        self.elements
            .iter()
            .map(|item| AmountRecord {
                source: item.source().map(str::to_string),
                frequency: item.period().map(|p| f64::from(p.times_per_year())),
                value: item.value().and_then(|v| v.to_f64()),
            })
            .collect()
    }

    /// The records of [`AmountList::records`] as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records())
    }
}

/// A lossy, float-based view of one periodic entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AmountRecord {
    pub source: Option<String>,
    pub frequency: Option<f64>,
    pub value: Option<f64>,
}
