use std::borrow::Cow;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use crate::error::{IncomeError, IncomeResult};
use crate::period::{checked_mul, per_period, Period};
use crate::{Owner, Source};

/// Something that can be grouped by a `source` tag and, optionally, by the
/// person who owns it.
pub trait Sourced {
    fn source(&self) -> Option<&str>;

    fn owner(&self) -> Option<&str> {
        None
    }
}

/// A value that recurs some number of times per year and can be expressed
/// over any other period.
///
/// Implementations must return zero for a zero target and satisfy
/// `total(k) == total(YEARLY) / k` for any positive `k`.
pub trait Periodic: Sourced {
    fn total(&self, target: Period) -> IncomeResult<Decimal>;

    /// The native period, if known.
    fn period(&self) -> Option<Period>;

    /// The raw per-period value, if known.
    fn value(&self) -> Option<Decimal>;

    /// Completes any deferred population the entry owns. Lists call this on
    /// every element before summing.
    fn ensure_populated(&mut self) -> IncomeResult<()> {
        Ok(())
    }
}

/// A fresh, mostly empty entry created when a list is filled from a
/// checklist of sources.
pub trait FromSource<'a> {
    fn from_source(source: Option<Source<'a>>, display_name: Option<Cow<'a, str>>) -> Self;
}

/// An amount (income or expense, depending on context) that recurs
/// `period` times per year.
///
/// An hourly amount is a rate: `value` is earned for each of the
/// `hours_per_period` hours worked every period.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct PeriodicAmount<'a> {
    /// Amount accumulated each period (or each hour, for hourly amounts).
    #[builder(default, setter(into))]
    pub value: Option<Decimal>,

    /// Times per year the amount recurs.
    #[builder(default, setter(into))]
    pub period: Option<Period>,

    #[builder(default, setter(into))]
    pub is_hourly: Option<bool>,

    /// Required when `is_hourly` is set.
    #[builder(default, setter(into))]
    pub hours_per_period: Option<Decimal>,

    /// Category of the amount, like "wages" or "rent".
    #[builder(default, setter(into, strip_option))]
    pub source: Option<Source<'a>>,

    #[builder(default, setter(into, strip_option))]
    pub owner: Option<Owner<'a>>,

    /// Translated name to show the user instead of the raw source.
    #[builder(default, setter(into, strip_option))]
    pub display_name: Option<Cow<'a, str>>,
}

impl<'a> PeriodicAmount<'a> {
    pub fn new(value: Decimal, period: Period) -> Self {
        PeriodicAmount::builder().value(value).period(period).build()
    }

    pub fn is_hourly(&self) -> bool {
        self.is_hourly.unwrap_or(false)
    }

    /// The amount over `target`, taking hours per period into account for
    /// hourly amounts. An hourly wage of 10 for 40 hours a week is 20,800
    /// yearly and 400 weekly.
    pub fn total(&self, target: Period) -> IncomeResult<Decimal> {
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let value = self.value.ok_or(IncomeError::MissingAttribute("value"))?;
        let period = self.period.ok_or(IncomeError::MissingAttribute("period"))?;
        let amount = if self.is_hourly() {
            let hours = self
                .hours_per_period
                .ok_or(IncomeError::MissingAttribute("hours_per_period"))?;
            checked_mul(value, hours)?
        } else {
            value
        };
        per_period(amount, period, target)
    }
}

impl Sourced for PeriodicAmount<'_> {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

impl Periodic for PeriodicAmount<'_> {
    fn total(&self, target: Period) -> IncomeResult<Decimal> {
        PeriodicAmount::total(self, target)
    }

    fn period(&self) -> Option<Period> {
        self.period
    }

    fn value(&self) -> Option<Decimal> {
        self.value
    }
}

impl<'a> FromSource<'a> for PeriodicAmount<'a> {
    fn from_source(source: Option<Source<'a>>, display_name: Option<Cow<'a, str>>) -> Self {
        PeriodicAmount {
            source,
            display_name,
            ..PeriodicAmount::builder().build()
        }
    }
}
