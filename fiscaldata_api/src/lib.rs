//! Unofficial Rust client for the U.S. Treasury Fiscal Data API.
//!
//! One [`Client`] vends a service per dataset family; every service method
//! forwards a [`RecordsQuery`] to the shared [`Session`] and returns the
//! response body as untyped JSON.

mod client;
mod errors;
pub mod logging;
mod params;
mod query;
mod services;
mod session;

pub use self::client::Client;
pub use self::errors::{ApiErrorReport, Error};
pub use self::params::{ParamValue, Params};
pub use self::query::RecordsQuery;
pub use self::services::{
    DailyTreasuryStatements, MonthlyTreasuryStatements, OffsetProgram, OtherData,
    OutstandingDebtInstruments, PublicDebtInstruments, RevenueAndPayments,
    TreasuryReportsOnReceivables,
};
pub use self::session::Session;
pub use reqwest::Method;
