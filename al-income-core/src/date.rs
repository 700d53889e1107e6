use chrono::{Datelike, Local};

/// Direction of a [`recent_years`] listing.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum YearOrder {
    #[default]
    Descending,
    Ascending,
}

/// Recent years around the current local year, for year pickers where the
/// latest years are the likeliest answers (vehicle years, birth years).
///
/// `Descending` runs from `now + future` down to `now - past + 1`;
/// `Ascending` runs from `now - past` up to `now + future - 1`.
pub fn recent_years(past: u32, order: YearOrder, future: u32) -> Vec<i32> {
    recent_years_from(Local::now().year(), past, order, future)
}

pub fn recent_years_from(now: i32, past: u32, order: YearOrder, future: u32) -> Vec<i32> {
    let past = i32::try_from(past).unwrap_or(i32::MAX);
    let future = i32::try_from(future).unwrap_or(i32::MAX);
    let first = now.saturating_sub(past);
    let last = now.saturating_add(future);
    match order {
        YearOrder::Descending => (first.saturating_add(1)..=last).rev().collect(),
        YearOrder::Ascending => (first..last).collect(),
    }
}
