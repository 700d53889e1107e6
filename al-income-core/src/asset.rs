use std::borrow::Cow;

use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use crate::amount::{FromSource, Periodic, PeriodicAmount, Sourced};
use crate::error::{IncomeError, IncomeResult};
use crate::list::AmountList;
use crate::money::parse_currency;
use crate::period::Period;
use crate::source::SourceFilter;
use crate::Source;

/// Point-in-time quantities of an asset, summed without period conversion.
pub trait AssetLike: Sourced {
    fn market_value(&self) -> Option<Decimal>;
    fn balance(&self) -> Option<Decimal>;
}

/// Something owned, with a market value, an optional balance (for accounts
/// or loans) and an optional income it earns.
///
/// `market_value` and `balance` are independent of the periodic `amount`.
/// Many assets earn nothing, so an asset without a value totals zero.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Asset<'a> {
    /// Income earned by the asset, like interest on a savings account.
    #[builder(default = PeriodicAmount::builder().build())]
    pub amount: PeriodicAmount<'a>,

    #[builder(default, setter(into))]
    pub market_value: Option<Decimal>,

    #[builder(default, setter(into))]
    pub balance: Option<Decimal>,
}

impl<'a> Asset<'a> {
    /// Sets the earned value from user input. An empty string clears it.
    pub fn set_value_str(&mut self, input: &str) -> IncomeResult<()> {
        self.amount.value = parse_currency(input)?;
        Ok(())
    }

    pub fn total(&self, target: Period) -> IncomeResult<Decimal> {
        if self.amount.value.is_none() {
            return Ok(Decimal::ZERO);
        }
        self.amount.total(target)
    }
}

impl Sourced for Asset<'_> {
    fn source(&self) -> Option<&str> {
        self.amount.source()
    }

    fn owner(&self) -> Option<&str> {
        self.amount.owner()
    }
}

impl Periodic for Asset<'_> {
    fn total(&self, target: Period) -> IncomeResult<Decimal> {
        Asset::total(self, target)
    }

    fn period(&self) -> Option<Period> {
        self.amount.period
    }

    fn value(&self) -> Option<Decimal> {
        self.amount.value
    }
}

impl AssetLike for Asset<'_> {
    fn market_value(&self) -> Option<Decimal> {
        self.market_value
    }

    fn balance(&self) -> Option<Decimal> {
        self.balance
    }
}

impl<'a> FromSource<'a> for Asset<'a> {
    fn from_source(source: Option<Source<'a>>, display_name: Option<Cow<'a, str>>) -> Self {
        Asset::builder()
            .amount(PeriodicAmount::from_source(source, display_name))
            .build()
    }
}

pub const VEHICLE_SOURCE: &str = "vehicle";

/// An asset described by year, make and model. Its source is `"vehicle"`
/// unless set otherwise.
#[derive(Clone, Debug, Eq, PartialEq, TypedBuilder)]
pub struct Vehicle<'a> {
    #[builder(default = Asset::builder().build())]
    pub asset: Asset<'a>,

    #[builder(default, setter(into, strip_option))]
    pub year: Option<Cow<'a, str>>,

    #[builder(default, setter(into, strip_option))]
    pub make: Option<Cow<'a, str>>,

    #[builder(default, setter(into, strip_option))]
    pub model: Option<Cow<'a, str>>,
}

impl<'a> Vehicle<'a> {
    /// `"2022 / Honda / Accord"`, the way most financial statements list
    /// vehicles.
    pub fn year_make_model(&self) -> IncomeResult<String> {
        let year = self.year.as_deref().ok_or(IncomeError::MissingAttribute("year"))?;
        let make = self.make.as_deref().ok_or(IncomeError::MissingAttribute("make"))?;
        let model = self.model.as_deref().ok_or(IncomeError::MissingAttribute("model"))?;
        Ok(format!("{} / {} / {}", year, make, model))
    }
}

impl Sourced for Vehicle<'_> {
    fn source(&self) -> Option<&str> {
        self.asset.source().or(Some(VEHICLE_SOURCE))
    }

    fn owner(&self) -> Option<&str> {
        self.asset.owner()
    }
}

impl Periodic for Vehicle<'_> {
    fn total(&self, target: Period) -> IncomeResult<Decimal> {
        self.asset.total(target)
    }

    fn period(&self) -> Option<Period> {
        self.asset.amount.period
    }

    fn value(&self) -> Option<Decimal> {
        self.asset.amount.value
    }
}

impl AssetLike for Vehicle<'_> {
    fn market_value(&self) -> Option<Decimal> {
        self.asset.market_value
    }

    fn balance(&self) -> Option<Decimal> {
        self.asset.balance
    }
}

impl<'a> FromSource<'a> for Vehicle<'a> {
    fn from_source(source: Option<Source<'a>>, display_name: Option<Cow<'a, str>>) -> Self {
        Vehicle::builder()
            .asset(Asset::from_source(source, display_name))
            .build()
    }
}

pub type AssetList<'a> = AmountList<Asset<'a>>;
pub type VehicleList<'a> = AmountList<Vehicle<'a>>;

impl<T: AssetLike> AmountList<T> {
    fn sum_assets<'s, F, G>(&mut self, source: F, field: &'static str, get: G) -> IncomeResult<Decimal>
    where
        F: Into<SourceFilter<'s>>,
        G: Fn(&T) -> Option<Decimal>,
    {
        self.ensure_populated()?;
        let filter = source.into();
        let mut result = Decimal::ZERO;
        for asset in self.elements.iter().filter(|a| filter.matches(a.source())) {
            result += get(asset).ok_or(IncomeError::MissingAttribute(field))?;
        }
        Ok(result)
    }

    /// Total market value of the matching assets.
    pub fn market_value<'s, F: Into<SourceFilter<'s>>>(&mut self, source: F) -> IncomeResult<Decimal> {
        self.sum_assets(source, "market_value", AssetLike::market_value)
    }

    /// Total balance of the matching assets, typically the funds available
    /// in financial accounts.
    pub fn balance<'s, F: Into<SourceFilter<'s>>>(&mut self, source: F) -> IncomeResult<Decimal> {
        self.sum_assets(source, "balance", AssetLike::balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn asset(source: &'static str, balance: &str, value: &str) -> Asset<'static> {
        Asset::builder()
            .amount(
                PeriodicAmount::builder()
                    .source(source)
                    .value(d(value))
                    .period(Period::MONTHLY)
                    .build(),
            )
            .balance(d(balance))
            .build()
    }

    fn home() -> Asset<'static> {
        Asset::builder()
            .amount(PeriodicAmount::builder().source("home").build())
            .market_value(d("1234567.89"))
            .build()
    }

    #[test]
    fn asset_without_value_totals_zero() {
        assert_eq!(Decimal::ZERO, home().total(Period::YEARLY).unwrap());

        let mut reported = home();
        reported.set_value_str("").unwrap();
        assert_eq!(Decimal::ZERO, reported.total(Period::YEARLY).unwrap());
        reported.amount.period = Some(Period::MONTHLY);
        reported.set_value_str("2.50").unwrap();
        assert_eq!(d("30"), reported.total(Period::YEARLY).unwrap());
    }

    #[test]
    fn asset_with_value() {
        let savings = asset("savings account", "12.34", "0.12");
        assert_eq!(d("1.44"), savings.total(Period::YEARLY).unwrap());
        assert_eq!(Decimal::ZERO, savings.total(Period::new(0)).unwrap());
    }

    #[test]
    fn asset_list() {
        let mut assets: AssetList = vec![
            home(),
            asset("savings", "12.34", "0.12"),
            asset("stocks", "23.45", "1.2"),
            asset("checking", "34.56", "0.01"),
        ]
        .into();
        assert_eq!(d("1234567.89"), assets.market_value("home").unwrap());
        assert_eq!(d("35.79"), assets.balance(["savings", "stocks"]).unwrap());
        assert_eq!(
            d("15.84"),
            assets
                .total(Period::YEARLY, SourceFilter::any().excluding(["checking"]), None)
                .unwrap()
        );
        assert_eq!(
            Err(IncomeError::MissingAttribute("market_value")),
            assets.market_value(None::<&str>)
        );
        assert_eq!(Decimal::ZERO, assets.market_value("boat").unwrap());
    }

    #[test]
    fn vehicle_defaults_to_vehicle_source() {
        let car = Vehicle::builder()
            .asset(Asset::builder().market_value(d("8000")).build())
            .year("2022")
            .make("Honda")
            .model("Accord")
            .build();
        assert_eq!(Some("vehicle"), car.source());
        assert_eq!("2022 / Honda / Accord", car.year_make_model().unwrap());
        assert_eq!(Decimal::ZERO, car.total(Period::YEARLY).unwrap());

        let truck = Vehicle::builder()
            .asset(
                Asset::builder()
                    .amount(PeriodicAmount::builder().source("work truck").build())
                    .market_value(d("12000"))
                    .build(),
            )
            .year("2019")
            .build();
        assert_eq!(Some("work truck"), truck.source());
        assert_eq!(
            Err(IncomeError::MissingAttribute("make")),
            truck.year_make_model()
        );

        let mut vehicles: VehicleList = vec![car, truck].into();
        assert_eq!(d("8000"), vehicles.market_value("vehicle").unwrap());
        assert_eq!(d("20000"), vehicles.market_value(None::<&str>).unwrap());
    }
}
