use al_income_core::*;
use rust_decimal::{Decimal, RoundingStrategy};
use std::string::FromUtf8Error;
use std::{io, io::Write};
use thiserror::Error;


/// Renders model values the way they read on a financial statement:
/// money with two decimals, periods as words.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct BasicRenderer {
    labels: PeriodLabels,
}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(labels: PeriodLabels) -> Self {
        BasicRenderer { labels }
    }
}

pub fn render<W: Write, T>(w: &mut W, renderable: T) -> Result<(), RenderError>
where
    BasicRenderer: Renderer<T, W, Error = RenderError>,
{
    BasicRenderer::default().render(renderable, w)
}

pub fn render_to_string<T>(renderable: T) -> Result<String, RenderError>
where
    BasicRenderer: Renderer<T, Vec<u8>, Error = RenderError>,
{
    let mut rendered = Vec::new();
    render(&mut rendered, renderable)?;
    Ok(String::from_utf8(rendered)?)
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
    #[error("could not serialize itemized values")]
    Json(#[from] serde_json::Error),
    #[error("could not compute the rendered value")]
    Income(#[from] IncomeError),
    #[error("rendered output was not utf-8")]
    Utf8(#[from] FromUtf8Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

/// Two decimal places, halves rounded away from zero.
fn currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

fn render_yearly<W: Write>(periodic: &dyn Periodic, write: &mut W) -> Result<(), RenderError> {
    write!(write, "{}", currency(periodic.total(Period::YEARLY)?))?;
    Ok(())
}

impl<'a, W: Write> Renderer<&'a PeriodicAmount<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, amount: &'a PeriodicAmount<'_>, write: &mut W) -> Result<(), Self::Error> {
        render_yearly(amount, write)
    }
}

impl<'a, W: Write> Renderer<&'a Job<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, job: &'a Job<'_>, write: &mut W) -> Result<(), Self::Error> {
        render_yearly(job, write)
    }
}

impl<'a, W: Write> Renderer<&'a Asset<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, asset: &'a Asset<'_>, write: &mut W) -> Result<(), Self::Error> {
        render_yearly(asset, write)
    }
}

impl<'a, W: Write> Renderer<&'a ItemizedJob<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, job: &'a ItemizedJob<'_>, write: &mut W) -> Result<(), Self::Error> {
        render_yearly(job, write)
    }
}

impl<'a, W: Write> Renderer<&'a LedgerEntry<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, entry: &'a LedgerEntry<'_>, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{}", currency(entry.total()?))?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Ledger<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, ledger: &'a Ledger<'_>, write: &mut W) -> Result<(), Self::Error> {
        for entry in ledger.iter() {
            self.render(entry, write)?;
            writeln!(write)?;
        }
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a ItemizedValueDict<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, dict: &'a ItemizedValueDict<'_>, write: &mut W) -> Result<(), Self::Error> {
        let pairs: Vec<(&str, String)> = dict
            .iter()
            .map(|(name, item)| (name, currency(item.total())))
            .collect();
        serde_json::to_writer_pretty(&mut *write, &pairs)?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Employer<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, employer: &'a Employer<'_>, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{}", employer.name_address_phone())?;
        Ok(())
    }
}

impl<'a, W: Write> Renderer<&'a Vehicle<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, vehicle: &'a Vehicle<'_>, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{}", vehicle.year_make_model()?)?;
        Ok(())
    }
}

impl<W: Write> Renderer<Period, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, period: Period, write: &mut W) -> Result<(), Self::Error> {
        write!(write, "{}", self.labels.describe(period))?;
        Ok(())
    }
}
