use std::borrow::Cow;
use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::amount::{Periodic, Sourced};
use crate::employer::Employer;
use crate::error::{IncomeError, IncomeResult};
use crate::gather::{Gatherer, Populate};
use crate::list::AmountList;
use crate::period::{checked_mul, per_period, Period};
use crate::source::SourceFilter;
use crate::{Owner, Source};

/// One line item of an itemized job, like wages, tips or union dues.
///
/// Always a positive number, even when it is later subtracted. Its period
/// and hourly flag only mean something relative to the owning job, so read
/// it through [`ItemizedJob`] rather than directly.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct ItemizedValue<'a> {
    #[builder(default, setter(into))]
    pub value: Option<Decimal>,

    /// Overrides the job's period when set and non-zero.
    #[builder(default, setter(into))]
    pub period: Option<Period>,

    /// Only honored when the job itself is hourly.
    #[builder(default, setter(into))]
    pub is_hourly: Option<bool>,

    /// Completion flag for pre-defined items the user may not have.
    /// `Some(false)` items count as zero and are pruned after gathering.
    #[builder(default, setter(into))]
    pub exists: Option<bool>,

    #[builder(default, setter(into, strip_option))]
    pub display_name: Option<Cow<'a, str>>,
}

impl ItemizedValue<'_> {
    pub fn new(value: Decimal) -> Self {
        ItemizedValue::builder().value(value).build()
    }

    fn is_absent(&self) -> bool {
        self.exists == Some(false)
    }

    /// The raw value; zero when missing or marked as not existing.
    pub fn total(&self) -> Decimal {
        if self.is_absent() {
            return Decimal::ZERO;
        }
        self.value.unwrap_or(Decimal::ZERO)
    }
}

type Entries<'a> = Vec<(Cow<'a, str>, ItemizedValue<'a>)>;

/// Line items of one side of an itemized job, keyed by name and kept in
/// insertion order.
///
/// After every gather the dictionary drops entries explicitly marked as not
/// existing, so it never keeps a "does not exist" answer around.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemizedValueDict<'a> {
    elements: Entries<'a>,
    gatherer: Gatherer<Entries<'a>>,
}

impl<'a> ItemizedValueDict<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hook<P: Populate<Entries<'a>> + 'static>(hook: P) -> Self {
        ItemizedValueDict {
            elements: Vec::new(),
            gatherer: Gatherer::with_hook(hook),
        }
    }

    pub fn set_hook<P: Populate<Entries<'a>> + 'static>(&mut self, hook: P) {
        self.gatherer.set_hook(hook);
    }

    /// Inserts or replaces an item. A replaced item keeps its position.
    pub fn insert<K: Into<Cow<'a, str>>>(&mut self, key: K, value: ItemizedValue<'a>) {
        let key = key.into();
        match self.elements.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.elements.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ItemizedValue<'a>> {
        self.elements.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ItemizedValue<'a>> {
        self.elements
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes an item; removing a missing key does nothing.
    pub fn remove(&mut self, key: &str) -> Option<ItemizedValue<'a>> {
        let index = self.elements.iter().position(|(k, _)| k == key)?;
        Some(self.elements.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|(k, _)| &**k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemizedValue<'a>)> {
        self.elements.iter().map(|(k, v)| (&**k, v))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sum of the raw values of existing items, without period conversion.
    pub fn total(&self) -> Decimal {
        self.elements.iter().map(|(_, v)| v.total()).sum()
    }

    /// Deletes every item whose `exists` flag is explicitly false and
    /// returns the removed keys.
    ///
    /// Items without the flag, or with it set, always stay. Keys are
    /// collected before anything is deleted, so calling this again is a
    /// no-op.
    pub fn prune(&mut self) -> Vec<Cow<'a, str>> {
        let doomed: Vec<Cow<'a, str>> = self
            .elements
            .iter()
            .filter(|(_, v)| v.is_absent())
            .map(|(k, _)| k.clone())
            .collect();
        for key in &doomed {
            self.remove(key);
        }
        if !doomed.is_empty() {
            debug!(removed = ?doomed, "pruned itemized values marked as not existing");
        }
        doomed
    }

    /// Runs the population hook if needed, then prunes.
    pub fn ensure_populated(&mut self) -> IncomeResult<()> {
        self.gatherer.ensure(&mut self.elements)?;
        self.prune();
        Ok(())
    }
}

impl<'a, K: Into<Cow<'a, str>>> FromIterator<(K, ItemizedValue<'a>)> for ItemizedValueDict<'a> {
    fn from_iter<I: IntoIterator<Item = (K, ItemizedValue<'a>)>>(iter: I) -> Self {
        let mut dict = ItemizedValueDict::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

/// A job reported as named line items: money coming in (`in_values`, like
/// wages and tips) and money going out (`out_values`, like taxes and dues).
///
/// Items inherit the job's period unless they carry their own, and are
/// hourly only when both the job and the item say so.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct ItemizedJob<'a> {
    #[builder(default, setter(into))]
    pub period: Option<Period>,

    #[builder(default, setter(into))]
    pub is_hourly: Option<bool>,

    /// Hours worked each period. Required when an hourly item is totaled.
    #[builder(default, setter(into))]
    pub hours_per_period: Option<Decimal>,

    #[builder(default, setter(strip_option))]
    pub employer: Option<Employer<'a>>,

    /// Job title, like "Baby sitter".
    #[builder(default, setter(into, strip_option))]
    pub name: Option<Cow<'a, str>>,

    /// Category of the whole job, like "part time".
    #[builder(default, setter(into, strip_option))]
    pub source: Option<Source<'a>>,

    #[builder(default, setter(into, strip_option))]
    pub owner: Option<Owner<'a>>,

    #[builder(default)]
    pub in_values: ItemizedValueDict<'a>,

    #[builder(default)]
    pub out_values: ItemizedValueDict<'a>,
}

impl<'a> ItemizedJob<'a> {
    /// Populates and prunes both sides.
    pub fn ensure_populated(&mut self) -> IncomeResult<()> {
        self.in_values.ensure_populated()?;
        self.out_values.ensure_populated()
    }

    /// What `item` accumulates over `target`, resolving its period and
    /// hourly flag against this job.
    pub fn item_value_per_period(
        &self,
        item: &ItemizedValue<'_>,
        target: Period,
    ) -> IncomeResult<Decimal> {
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let period = match item.period {
            Some(period) if !period.is_zero() => period,
            _ => self.period.ok_or(IncomeError::MissingAttribute("period"))?,
        };
        let hourly = self.is_hourly == Some(true) && item.is_hourly == Some(true);
        let value = item.total();
        let amount = if hourly {
            let hours = self
                .hours_per_period
                .ok_or(IncomeError::MissingAttribute("hours_per_period"))?;
            checked_mul(value, hours)?
        } else {
            value
        };
        per_period(amount, period, target)
    }

    /// Resolves a source filter to line-item names.
    ///
    /// No filter means every name on either side (incoming first, no
    /// duplicates). Otherwise the included names, minus exclusions.
    pub fn source_to_list<'r>(&'r self, filter: &'r SourceFilter<'_>) -> Vec<&'r str> {
        let included: Vec<&str> = filter.effective_include().map(|s| &**s).collect();
        if !included.is_empty() {
            return included;
        }
        let mut names: Vec<&str> = Vec::new();
        for key in self.in_values.keys().chain(self.out_values.keys()) {
            if filter.accepts(key) && !names.contains(&key) {
                names.push(key);
            }
        }
        names
    }

    fn side_total(
        &self,
        side: &ItemizedValueDict<'_>,
        target: Period,
        filter: &SourceFilter<'_>,
    ) -> IncomeResult<Decimal> {
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        let names = self.source_to_list(filter);
        let mut total = Decimal::ZERO;
        for (_, item) in side.iter().filter(|(key, _)| names.contains(key)) {
            total += self.item_value_per_period(item, target)?;
        }
        Ok(total)
    }

    pub(crate) fn gross_with(&self, target: Period, filter: &SourceFilter<'_>) -> IncomeResult<Decimal> {
        self.side_total(&self.in_values, target, filter)
    }

    pub(crate) fn deduction_with(&self, target: Period, filter: &SourceFilter<'_>) -> IncomeResult<Decimal> {
        self.side_total(&self.out_values, target, filter)
    }

    pub(crate) fn net_with(&self, target: Period, filter: &SourceFilter<'_>) -> IncomeResult<Decimal> {
        Ok(self.gross_with(target, filter)? - self.deduction_with(target, filter)?)
    }

    /// Money coming in over `target`, optionally limited to some line items.
    /// Names that only appear among deductions are ignored.
    pub fn gross_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.ensure_populated()?;
        self.gross_with(target, &source.into())
    }

    /// Money going out over `target`, as a positive number.
    pub fn deduction_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.ensure_populated()?;
        self.deduction_with(target, &source.into())
    }

    /// Gross minus deductions over the same line items. A name present on
    /// both sides counts on both.
    pub fn net_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.ensure_populated()?;
        self.net_with(target, &source.into())
    }

    /// Hours worked over `target`.
    pub fn normalized_hours(&self, target: Period) -> IncomeResult<Decimal> {
        let hours = self
            .hours_per_period
            .ok_or(IncomeError::MissingAttribute("hours_per_period"))?;
        let period = self.period.ok_or(IncomeError::MissingAttribute("period"))?;
        per_period(hours, period, target)
    }

    pub fn employer_name_address_phone(&self) -> IncomeResult<String> {
        self.employer
            .as_ref()
            .map(Employer::name_address_phone)
            .ok_or(IncomeError::MissingAttribute("employer"))
    }
}

impl Sourced for ItemizedJob<'_> {
    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }
}

// Lets itemized jobs sit in an income list: their total is their gross.
// `total` reads the items as they are; lists populate each job first.
impl Periodic for ItemizedJob<'_> {
    fn total(&self, target: Period) -> IncomeResult<Decimal> {
        self.gross_with(target, &SourceFilter::any())
    }

    fn period(&self) -> Option<Period> {
        self.period
    }

    // Only feeds the lossy JSON records, which show a gross that cannot be
    // computed (say, an hourly item without hours) as null.
    fn value(&self) -> Option<Decimal> {
        self.period
            .and_then(|period| self.gross_with(period, &SourceFilter::any()).ok())
    }

    fn ensure_populated(&mut self) -> IncomeResult<()> {
        self.in_values.ensure_populated()?;
        self.out_values.ensure_populated()
    }
}

/// Which side of an itemized job to read line-item names from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ItemSide {
    In,
    Out,
    #[default]
    All,
}

pub type ItemizedJobList<'a> = AmountList<ItemizedJob<'a>>;

impl<'a> AmountList<ItemizedJob<'a>> {
    fn sum_itemized<'s, F, G>(&mut self, target: Period, source: F, per_job: G) -> IncomeResult<Decimal>
    where
        F: Into<SourceFilter<'s>>,
        G: Fn(&ItemizedJob<'a>, Period, &SourceFilter<'_>) -> IncomeResult<Decimal>,
    {
        self.ensure_populated()?;
        for job in self.elements.iter_mut() {
            job.ensure_populated()?;
        }
        if target.is_zero() {
            return Ok(Decimal::ZERO);
        }
        // Each job resolves the filter against its own line items.
        let filter = source.into();
        let mut total = Decimal::ZERO;
        for job in self.elements.iter() {
            total += per_job(job, target, &filter)?;
        }
        Ok(total)
    }

    /// Money coming in across all jobs, e.g. `["tips", "commissions"]`.
    pub fn gross_total<'s, F: Into<SourceFilter<'s>>>(&mut self, target: Period, source: F) -> IncomeResult<Decimal> {
        self.sum_itemized(target, source, ItemizedJob::gross_with)
    }

    pub fn deduction_total<'s, F: Into<SourceFilter<'s>>>(
        &mut self,
        target: Period,
        source: F,
    ) -> IncomeResult<Decimal> {
        self.sum_itemized(target, source, ItemizedJob::deduction_with)
    }

    pub fn net_total<'s, F: Into<SourceFilter<'s>>>(&mut self, target: Period, source: F) -> IncomeResult<Decimal> {
        self.sum_itemized(target, source, ItemizedJob::net_with)
    }

    /// Distinct line-item names across all jobs.
    pub fn item_names(&self, side: ItemSide) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        for job in self.elements.iter() {
            if side != ItemSide::Out {
                names.extend(job.in_values.keys());
            }
            if side != ItemSide::In {
                names.extend(job.out_values.keys());
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn baby_sitter() -> ItemizedJob<'static> {
        let mut job = ItemizedJob::builder()
            .name("Baby sitter")
            .source("job")
            .is_hourly(true)
            .period(Period::WEEKLY)
            .hours_per_period(d("10"))
            .build();
        job.in_values.insert(
            "part time",
            ItemizedValue::builder().is_hourly(true).value(d("10.04")).build(),
        );
        job.in_values.insert(
            "tips",
            ItemizedValue::builder().is_hourly(false).value(d("200.23")).build(),
        );
        job.out_values.insert(
            "snacks",
            ItemizedValue::builder().is_hourly(false).value(d("24.21")).build(),
        );
        job
    }

    #[test]
    fn prune_drops_only_explicit_non_existing_items() {
        let mut dict: ItemizedValueDict = vec![
            ("a", ItemizedValue::builder().value(d("1")).exists(true).build()),
            ("b", ItemizedValue::builder().value(d("2")).exists(false).build()),
            ("c", ItemizedValue::new(d("3"))),
        ]
        .into_iter()
        .collect();
        assert_eq!(d("4"), dict.total());
        assert_eq!(vec![Cow::Borrowed("b")], dict.prune());
        assert_eq!(vec!["a", "c"], dict.keys().collect::<Vec<_>>());
        assert!(dict.prune().is_empty());
        assert_eq!(vec!["a", "c"], dict.keys().collect::<Vec<_>>());
    }

    #[test]
    fn gather_prunes_afterwards() {
        let mut dict = ItemizedValueDict::with_hook(|entries: &mut Entries<'static>| -> IncomeResult<()> {
            entries.push(("wages".into(), ItemizedValue::new(d("100"))));
            entries.push((
                "union dues".into(),
                ItemizedValue::builder().exists(false).build(),
            ));
            Ok(())
        });
        dict.ensure_populated().unwrap();
        assert_eq!(vec!["wages"], dict.keys().collect::<Vec<_>>());
    }

    #[test]
    fn insert_replaces_in_place_and_remove_is_forgiving() {
        let mut dict = ItemizedValueDict::new();
        dict.insert("wages", ItemizedValue::new(d("1")));
        dict.insert("tips", ItemizedValue::new(d("2")));
        dict.insert("wages", ItemizedValue::new(d("5")));
        assert_eq!(vec!["wages", "tips"], dict.keys().collect::<Vec<_>>());
        assert_eq!(Some(d("5")), dict.get("wages").and_then(|v| v.value));
        assert!(dict.remove("overtime").is_none());
        assert_eq!(2, dict.len());
    }

    #[test]
    fn hourly_item_on_hourly_job() {
        let mut job = baby_sitter();
        job.in_values.remove("tips");
        job.out_values.remove("snacks");
        assert_eq!(d("5220.80"), job.gross_total(Period::YEARLY, None::<&str>).unwrap());
    }

    #[test]
    fn itemized_job_totals() {
        let mut job = baby_sitter();
        assert_eq!(d("15632.76"), job.gross_total(Period::YEARLY, None::<&str>).unwrap());
        assert_eq!(d("1258.92"), job.deduction_total(Period::YEARLY, None::<&str>).unwrap());
        assert_eq!(d("104.91"), job.deduction_total(Period::MONTHLY, None::<&str>).unwrap());
        assert_eq!(d("14373.84"), job.net_total(Period::YEARLY, None::<&str>).unwrap());
        assert_eq!(d("10411.96"), job.gross_total(Period::YEARLY, "tips").unwrap());
        assert_eq!(Decimal::ZERO, job.gross_total(Period::YEARLY, "snacks").unwrap());
        assert_eq!(
            d("-1258.92"),
            job.net_total(Period::YEARLY, "snacks").unwrap()
        );
        assert_eq!(Decimal::ZERO, job.net_total(Period::new(0), None::<&str>).unwrap());
    }

    #[test]
    fn source_resolution() {
        let job = baby_sitter();
        let any = SourceFilter::any();
        assert_eq!(vec!["part time", "tips", "snacks"], job.source_to_list(&any));
        let one = SourceFilter::only("tips");
        assert_eq!(vec!["tips"], job.source_to_list(&one));
        let many = SourceFilter::from(["overtime", "tips"]);
        assert_eq!(vec!["overtime", "tips"], job.source_to_list(&many));
        let but = SourceFilter::any().excluding(["tips"]);
        assert_eq!(vec!["part time", "snacks"], job.source_to_list(&but));
    }

    #[test]
    fn shared_name_counts_on_both_sides() {
        let mut job = ItemizedJob::builder().period(Period::MONTHLY).build();
        job.in_values.insert("adjustment", ItemizedValue::new(d("50")));
        job.out_values.insert("adjustment", ItemizedValue::new(d("20")));
        let any = SourceFilter::any();
        assert_eq!(vec!["adjustment"], job.source_to_list(&any));
        assert_eq!(d("360"), job.net_total(Period::YEARLY, "adjustment").unwrap());
    }

    #[test]
    fn item_overrides() {
        let job = ItemizedJob::builder()
            .period(Period::WEEKLY)
            .hours_per_period(d("40"))
            .build();
        let bonus = ItemizedValue::builder()
            .value(d("500"))
            .period(Period::YEARLY)
            .build();
        assert_eq!(d("500"), job.item_value_per_period(&bonus, Period::YEARLY).unwrap());

        // A zero item period falls back to the job's.
        let zero = ItemizedValue::builder()
            .value(d("1"))
            .period(Period::new(0))
            .build();
        assert_eq!(d("52"), job.item_value_per_period(&zero, Period::YEARLY).unwrap());

        // The job is not hourly, so the item's hourly flag is ignored.
        let hourly = ItemizedValue::builder().value(d("10")).is_hourly(true).build();
        assert_eq!(d("520"), job.item_value_per_period(&hourly, Period::YEARLY).unwrap());

        let missing = ItemizedValue::builder().build();
        assert_eq!(Decimal::ZERO, job.item_value_per_period(&missing, Period::YEARLY).unwrap());
        assert_eq!(Decimal::ZERO, job.item_value_per_period(&bonus, Period::new(0)).unwrap());
    }

    #[test]
    fn missing_job_attributes() {
        let job = ItemizedJob::builder().is_hourly(true).build();
        let wage = ItemizedValue::builder().value(d("10")).is_hourly(true).build();
        assert_eq!(
            Err(IncomeError::MissingAttribute("period")),
            job.item_value_per_period(&wage, Period::YEARLY)
        );
        let job = ItemizedJob::builder()
            .is_hourly(true)
            .period(Period::WEEKLY)
            .build();
        assert_eq!(
            Err(IncomeError::MissingAttribute("hours_per_period")),
            job.item_value_per_period(&wage, Period::YEARLY)
        );
    }

    #[test]
    fn hours_and_employer() {
        let mut job = baby_sitter();
        assert_eq!(d("520"), job.normalized_hours(Period::YEARLY).unwrap());
        assert_eq!(
            Err(IncomeError::MissingAttribute("employer")),
            job.employer_name_address_phone()
        );
        job.employer = Some(Employer::builder().name("The Smiths").address("2 Elm St").build());
        assert_eq!("The Smiths: 2 Elm St", job.employer_name_address_phone().unwrap());
    }

    #[test]
    fn itemized_job_list() {
        let mut jobs: ItemizedJobList = vec![baby_sitter()].into();
        assert_eq!(d("15632.76"), jobs.gross_total(Period::YEARLY, None::<&str>).unwrap());
        assert_eq!(d("1258.92"), jobs.deduction_total(Period::YEARLY, None::<&str>).unwrap());
        assert_eq!(d("104.91"), jobs.deduction_total(Period::MONTHLY, None::<&str>).unwrap());
        assert_eq!(d("14373.84"), jobs.net_total(Period::YEARLY, None::<&str>).unwrap());

        let mut second = ItemizedJob::builder().period(Period::MONTHLY).build();
        second.in_values.insert("tips", ItemizedValue::new(d("100")));
        second.out_values.insert("taxes", ItemizedValue::new(d("10")));
        jobs.push(second);
        assert_eq!(d("11611.96"), jobs.gross_total(Period::YEARLY, "tips").unwrap());
        assert_eq!(
            vec!["part time", "snacks", "taxes", "tips"],
            jobs.item_names(ItemSide::All).into_iter().collect::<Vec<_>>()
        );
        assert_eq!(jobs.item_names(ItemSide::All), jobs.item_names(ItemSide::default()));
        assert_eq!(
            vec!["snacks", "taxes"],
            jobs.item_names(ItemSide::Out).into_iter().collect::<Vec<_>>()
        );
        // As an income list, an itemized job totals its gross.
        assert_eq!(d("16832.76"), jobs.total(Period::YEARLY, None::<&str>, None).unwrap());
    }

    fn job_with_hooked_wages() -> ItemizedJob<'static> {
        ItemizedJob::builder()
            .period(Period::MONTHLY)
            .in_values(ItemizedValueDict::with_hook(
                |entries: &mut Entries<'static>| -> IncomeResult<()> {
                    entries.push(("wages".into(), ItemizedValue::new(d("100"))));
                    Ok(())
                },
            ))
            .build()
    }

    #[test]
    fn single_job_gathers_its_items() -> anyhow::Result<()> {
        let mut job = job_with_hooked_wages();
        assert_eq!(d("1200"), job.gross_total(Period::YEARLY, None::<&str>)?);
        assert_eq!(d("1200"), job.net_total(Period::YEARLY, None::<&str>)?);
        assert_eq!(Decimal::ZERO, job.deduction_total(Period::YEARLY, None::<&str>)?);
        Ok(())
    }

    #[test]
    fn list_total_gathers_job_items() -> anyhow::Result<()> {
        let mut jobs: ItemizedJobList = vec![job_with_hooked_wages()].into();
        assert_eq!(d("1200"), jobs.total(Period::YEARLY, None::<&str>, None)?);

        let mut jobs: ItemizedJobList = vec![job_with_hooked_wages()].into();
        assert_eq!(d("1200"), jobs.gross_total(Period::YEARLY, None::<&str>)?);
        assert_eq!(d("1200"), jobs.total(Period::YEARLY, None::<&str>, None)?);
        Ok(())
    }

    #[test]
    fn job_list_prunes_items_before_summing() {
        let mut job = baby_sitter();
        job.in_values.insert(
            "overtime",
            ItemizedValue::builder().value(d("1000")).exists(false).build(),
        );
        let mut jobs: ItemizedJobList = vec![job].into();
        assert_eq!(d("15632.76"), jobs.gross_total(Period::YEARLY, None::<&str>).unwrap());
        assert!(!jobs.elements[0].in_values.contains_key("overtime"));
    }
}
