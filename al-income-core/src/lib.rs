use std::borrow::Cow;

pub use amount::{FromSource, Periodic, PeriodicAmount, Sourced};
pub use asset::{Asset, AssetLike, AssetList, Vehicle, VehicleList, VEHICLE_SOURCE};
pub use date::{recent_years, recent_years_from, YearOrder};
pub use employer::Employer;
pub use error::{IncomeError, IncomeResult};
pub use gather::{Gatherer, Populate};
pub use itemized::{ItemSide, ItemizedJob, ItemizedJobList, ItemizedValue, ItemizedValueDict};
pub use job::{Job, JobList};
pub use ledger::{Ledger, LedgerEntry, TransactionType};
pub use list::{AmountList, AmountRecord};
pub use money::{currency_to_decimal, parse_currency};
pub use period::{per_period, Period, PeriodLabel, PeriodLabels};
pub use source::SourceFilter;

pub mod amount;
pub mod asset;
mod date;
pub mod employer;
mod error;
pub mod gather;
pub mod itemized;
pub mod job;
pub mod ledger;
pub mod list;
mod money;
pub mod period;
pub mod source;

/// Free-text category of an amount, like "wages" or "rent".
pub type Source<'a> = Cow<'a, str>;

/// Reference to the person an amount belongs to.
pub type Owner<'a> = Cow<'a, str>;

/// Recurring incomes, like child support or social security.
pub type IncomeList<'a> = AmountList<PeriodicAmount<'a>>;

/// Recurring expenses, like rent or utilities.
pub type ExpenseList<'a> = AmountList<PeriodicAmount<'a>>;
