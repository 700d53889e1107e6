use std::borrow::Cow;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

use crate::amount::Sourced;
use crate::error::{IncomeError, IncomeResult};
use crate::gather::Populate;
use crate::list::AmountList;
use crate::source::SourceFilter;
use crate::Source;

/// Whether a ledger entry adds to or subtracts from the balance.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TransactionType<'a> {
    Expense,
    Income,
    Other(Cow<'a, str>),
}

impl TransactionType<'_> {
    pub fn is_expense(&self) -> bool {
        matches!(self, TransactionType::Expense)
    }
}

impl<'a> From<&'a str> for TransactionType<'a> {
    fn from(s: &'a str) -> Self {
        Cow::from(s).into()
    }
}

impl From<String> for TransactionType<'_> {
    fn from(s: String) -> Self {
        Cow::from(s).into()
    }
}

impl<'a> From<Cow<'a, str>> for TransactionType<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        match &*s {
            "expense" => TransactionType::Expense,
            "income" => TransactionType::Income,
            _ => TransactionType::Other(s),
        }
    }
}

/// A single dated, signed amount.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct LedgerEntry<'a> {
    #[builder(default, setter(into))]
    pub value: Option<Decimal>,

    /// Only `Expense` makes the entry negative.
    #[builder(default, setter(into, strip_option))]
    pub transaction_type: Option<TransactionType<'a>>,

    #[builder(default, setter(into))]
    pub date: Option<NaiveDate>,

    #[builder(default, setter(into, strip_option))]
    pub source: Option<Source<'a>>,

    /// Balance as of this entry, written by [`Ledger::running_total`].
    #[builder(default, setter(skip))]
    pub running_total: Option<Decimal>,
}

impl<'a> LedgerEntry<'a> {
    /// The value, negated for expenses.
    pub fn total(&self) -> IncomeResult<Decimal> {
        let value = self.value.ok_or(IncomeError::MissingAttribute("value"))?;
        match &self.transaction_type {
            Some(ty) if ty.is_expense() => Ok(-value),
            _ => Ok(value),
        }
    }
}

impl Sourced for LedgerEntry<'_> {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// An account ledger: a list of signed values that can carry a running
/// balance. Without dates it doubles as a plain list of simple values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger<'a> {
    pub entries: AmountList<LedgerEntry<'a>>,
}

impl<'a> From<Vec<LedgerEntry<'a>>> for Ledger<'a> {
    fn from(entries: Vec<LedgerEntry<'a>>) -> Self {
        Ledger {
            entries: entries.into(),
        }
    }
}

impl<'a> Ledger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook<P: Populate<Vec<LedgerEntry<'a>>> + 'static>(hook: P) -> Self {
        Ledger {
            entries: AmountList::with_hook(hook),
        }
    }

    pub fn push(&mut self, entry: LedgerEntry<'a>) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LedgerEntry<'a>> {
        self.entries.iter()
    }

    pub fn sources(&self) -> BTreeSet<&str> {
        self.entries.sources()
    }

    /// Signed sum of the matching entries.
    pub fn total<'s, F: Into<SourceFilter<'s>>>(&mut self, source: F) -> IncomeResult<Decimal> {
        self.entries.ensure_populated()?;
        let filter = source.into();
        let mut result = Decimal::ZERO;
        for entry in self.entries.iter().filter(|e| filter.matches(e.source())) {
            result += entry.total()?;
        }
        Ok(result)
    }

    /// Sorts the entries by date (stable, so same-day entries keep their
    /// order) and stores the cumulative balance on each one. Returns the
    /// final balance.
    ///
    /// Every call recomputes from zero. Nothing is reordered or written when
    /// an entry lacks a date or value.
    pub fn running_total(&mut self) -> IncomeResult<Decimal> {
        self.entries.ensure_populated()?;
        for entry in self.entries.iter() {
            entry.date.ok_or(IncomeError::MissingAttribute("date"))?;
            entry.total()?;
        }
        self.entries.elements.sort_by_key(|entry| entry.date);

        debug!(entries = self.entries.len(), "recomputing ledger running totals");
        let mut balance = Decimal::ZERO;
        for entry in self.entries.elements.iter_mut() {
            balance += entry.total()?;
            trace!(date = ?entry.date, %balance, "ledger entry");
            entry.running_total = Some(balance);
        }
        Ok(balance)
    }
}
