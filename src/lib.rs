//! Arithmetic for the income, expense, asset and pay-stub sections of legal
//! financial statements.
//!
//! The model lives in [`al_income_core`] and is re-exported here; text
//! forms live in [`render`]. Hosts call [`configure`] once at startup and
//! may install logging with [`init_tracing`].

pub use al_income_core::*;
pub use al_income_render as render;
pub use config::{config, configure, Config, ConfigError};
pub use logging::init_tracing;

mod config;
mod logging;
