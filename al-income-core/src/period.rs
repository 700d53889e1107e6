use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{IncomeError, IncomeResult};

/// The number of times per year a recurring amount occurs.
///
/// `Period::new(0)` is a valid *target* period: every total computed for it
/// is zero, which lets callers switch a computation off without branching.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(u32);

impl Period {
    pub const YEARLY: Period = Period(1);
    pub const QUARTERLY: Period = Period(4);
    pub const MONTHLY: Period = Period(12);
    pub const SEMI_MONTHLY: Period = Period(24);
    pub const BIWEEKLY: Period = Period(26);
    pub const WEEKLY: Period = Period(52);

    pub const fn new(times_per_year: u32) -> Self {
        Period(times_per_year)
    }

    pub const fn times_per_year(self) -> u32 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl Default for Period {
    fn default() -> Self {
        Period::YEARLY
    }
}

impl From<u32> for Period {
    fn from(times_per_year: u32) -> Self {
        Period(times_per_year)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scales `amount`, which recurs `period` times a year, to `target`.
///
/// Returns zero for a zero target.
pub fn per_period(amount: Decimal, period: Period, target: Period) -> IncomeResult<Decimal> {
    if target.is_zero() {
        return Ok(Decimal::ZERO);
    }
    let yearly = checked_mul(amount, period.to_decimal())?;
    Ok(yearly / target.to_decimal())
}

/// `lhs * rhs`, failing instead of panicking when the product does not fit.
pub(crate) fn checked_mul(lhs: Decimal, rhs: Decimal) -> IncomeResult<Decimal> {
    lhs.checked_mul(rhs)
        .ok_or_else(|| IncomeError::invalid_amount(lhs, format!("overflows when multiplied by {}", rhs)))
}

/// A single row of a "times per year" choice list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PeriodLabel {
    pub period: Period,
    pub label: String,
}

impl PeriodLabel {
    pub fn new<S: Into<String>>(period: Period, label: S) -> Self {
        PeriodLabel {
            period,
            label: label.into(),
        }
    }
}

/// The list of periods an interview offers, used to describe a period back
/// to the user.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodLabels(pub Vec<PeriodLabel>);

impl Default for PeriodLabels {
    fn default() -> Self {
        PeriodLabels(vec![
            PeriodLabel::new(Period::MONTHLY, "Monthly"),
            PeriodLabel::new(Period::YEARLY, "Yearly"),
            PeriodLabel::new(Period::WEEKLY, "Weekly"),
            PeriodLabel::new(Period::SEMI_MONTHLY, "Twice per month"),
            PeriodLabel::new(Period::BIWEEKLY, "Once every two weeks"),
            PeriodLabel::new(Period::QUARTERLY, "Once every 3 months"),
        ])
    }
}

impl PeriodLabels {
    /// Lower-cased label of `period`, or a literal like "Five times per year"
    /// when the list has no row for it.
    pub fn describe(&self, period: Period) -> String {
        match self.0.iter().find(|row| row.period == period) {
            Some(row) => row.label.to_lowercase(),
            None => format!("{} times per year", nice_number(period.times_per_year())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PeriodLabel> {
        self.0.iter()
    }
}

fn nice_number(n: u32) -> String {
    const WORDS: [&str; 11] = [
        "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    ];
    match WORDS.get(n as usize) {
        Some(word) => (*word).to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_period_scales_and_guards_zero() -> anyhow::Result<()> {
        let weekly: Decimal = "100".parse()?;
        assert_eq!("5200".parse::<Decimal>()?, per_period(weekly, Period::WEEKLY, Period::YEARLY)?);
        assert_eq!(weekly, per_period(weekly, Period::WEEKLY, Period::WEEKLY)?);
        assert_eq!(Decimal::ZERO, per_period(weekly, Period::WEEKLY, Period::new(0))?);
        Ok(())
    }

    #[test]
    fn per_period_reports_overflow() {
        assert!(matches!(
            per_period(Decimal::MAX, Period::WEEKLY, Period::YEARLY),
            Err(IncomeError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn describe_known_and_unknown_periods() {
        let labels = PeriodLabels::default();
        assert_eq!("monthly", labels.describe(Period::MONTHLY));
        assert_eq!("once every two weeks", labels.describe(Period::BIWEEKLY));
        assert_eq!("Five times per year", labels.describe(Period::new(5)));
        assert_eq!("365 times per year", labels.describe(Period::new(365)));
    }
}
