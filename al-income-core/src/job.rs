use std::borrow::Cow;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use crate::amount::{FromSource, Periodic, PeriodicAmount, Sourced};
use crate::employer::Employer;
use crate::error::{IncomeError, IncomeResult};
use crate::list::{selects, AmountList};
use crate::period::{per_period, Period};
use crate::source::SourceFilter;
use crate::Source;

/// A single hourly or pay-period based job.
///
/// The gross figure comes from `amount`; `net` is reported separately, as it
/// is on a pay stub, and is never derived from the gross. Keeping the two
/// consistent is up to whoever fills them in.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Job<'a> {
    /// Gross pay per period (or per hour, for hourly jobs).
    pub amount: PeriodicAmount<'a>,

    /// Net pay per period.
    #[builder(default, setter(into))]
    pub net: Option<Decimal>,

    /// Amount deducted each period. Per period even for hourly jobs.
    #[builder(default, setter(into))]
    pub deduction: Option<Decimal>,

    #[builder(default, setter(strip_option))]
    pub employer: Option<Employer<'a>>,
}

impl<'a> Job<'a> {
    fn native_period(&self) -> IncomeResult<Period> {
        self.amount
            .period
            .ok_or(IncomeError::MissingAttribute("period"))
    }

    /// Same as the underlying amount's total.
    pub fn gross_total(&self, target: Period) -> IncomeResult<Decimal> {
        self.amount.total(target)
    }

    /// `net` expressed over `target`.
    pub fn net_total(&self, target: Period) -> IncomeResult<Decimal> {
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let net = self.net.ok_or(IncomeError::MissingAttribute("net"))?;
        per_period(net, self.native_period()?, target)
    }

    /// The deduction expressed over `target`; zero when none was reported.
    pub fn deductions(&self, target: Period) -> IncomeResult<Decimal> {
        match self.deduction {
            Some(deduction) if !target.is_zero() => {
                per_period(deduction, self.native_period()?, target)
            }
            _ => Ok(Decimal::ZERO),
        }
    }

    /// Hours worked over `target`. Ten hours a week is 520 hours a year.
    pub fn normalized_hours(&self, target: Period) -> IncomeResult<Decimal> {
        let hours = self
            .amount
            .hours_per_period
            .ok_or(IncomeError::MissingAttribute("hours_per_period"))?;
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        per_period(hours, self.native_period()?, target)
    }

    pub fn employer_name_address_phone(&self) -> IncomeResult<String> {
        self.employer
            .as_ref()
            .map(Employer::name_address_phone)
            .ok_or(IncomeError::MissingAttribute("employer"))
    }
}

impl Sourced for Job<'_> {
    fn source(&self) -> Option<&str> {
        self.amount.source()
    }

    fn owner(&self) -> Option<&str> {
        self.amount.owner()
    }
}

impl Periodic for Job<'_> {
    fn total(&self, target: Period) -> IncomeResult<Decimal> {
        self.gross_total(target)
    }

    fn period(&self) -> Option<Period> {
        self.amount.period
    }

    fn value(&self) -> Option<Decimal> {
        self.amount.value
    }
}

impl<'a> FromSource<'a> for Job<'a> {
    fn from_source(source: Option<Source<'a>>, display_name: Option<Cow<'a, str>>) -> Self {
        Job::builder()
            .amount(PeriodicAmount::from_source(source, display_name))
            .build()
    }
}

pub type JobList<'a> = AmountList<Job<'a>>;

impl<'a> AmountList<Job<'a>> {
    fn sum_jobs<'s, F, G>(&mut self, target: Period, source: F, per_job: G) -> IncomeResult<Decimal>
    where
        F: Into<SourceFilter<'s>>,
        G: Fn(&Job<'a>, Period) -> IncomeResult<Decimal>,
    {
        self.ensure_populated()?;
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let filter = source.into();
        let mut result = Decimal::ZERO;
        for job in self.elements.iter().filter(|job| selects(*job, &filter, None)) {
            result += per_job(job, target)?;
        }
        Ok(result)
    }

    /// Sum of the jobs' gross pay over `target`.
    pub fn gross_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.sum_jobs(target, source, Job::gross_total)
    }

    /// Sum of the jobs' reported net pay over `target`. For hourly jobs this
    /// may not be comparable to the gross total.
    pub fn net_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.sum_jobs(target, source, Job::net_total)
    }

    pub fn deduction_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.sum_jobs(target, source, Job::deductions)
    }
}
