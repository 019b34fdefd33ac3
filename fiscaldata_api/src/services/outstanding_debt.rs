//! Outstanding-debt-instrument tables: exchange rates, savings bonds,
//! schedules of federal debt, and SLGS securities.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Data on outstanding debt instruments.
pub struct OutstandingDebtInstruments {
    pub(crate) session: Arc<Session>,
}

impl OutstandingDebtInstruments {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Exchange rates of foreign currencies to the U.S. dollar for reporting.
    pub async fn rates_of_exchange(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/rates_of_exchange",
                query.to_params(),
            )
            .await
    }

    /// Savings bonds that have matured but have not been redeemed.
    pub async fn mature_unredeemed_debt(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/savings_bonds_mud",
                query.to_params(),
            )
            .await
    }

    /// Total number of savings bonds by series issued, redeemed, and
    /// outstanding as of the record date.
    pub async fn piece_information_by_series(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/savings_bonds_pcs",
                query.to_params(),
            )
            .await
    }

    /// Paper savings bond issues, redemptions, and maturities by series.
    pub async fn saving_bonds_report(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/savings_bonds_report",
                query.to_params(),
            )
            .await
    }

    /// Monthly activity for federal debt managed by the Bureau of the Fiscal
    /// Service, split between Held by the Public and Intragovernmental Debt
    /// Holdings.
    pub async fn federal_debt_by_month(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/schedules_fed_debt",
                query.to_params(),
            )
            .await
    }

    /// Fiscal year-to-date activity for federal debt managed by the Bureau of
    /// the Fiscal Service.
    pub async fn federal_debt_fiscal_ytd(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/schedules_fed_debt_fytd",
                query.to_params(),
            )
            .await
    }

    /// Sold, redeemed, outstanding, and interest-rate statistics for
    /// non-marketable savings bonds.
    pub async fn saving_bond_securities(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/slgs_savings_bonds",
                query.to_params(),
            )
            .await
    }

    /// Daily recap of State and Local Government Series (SLGS) transaction
    /// and balance activity: subscriptions, cancellations, issues,
    /// outstanding, and redemptions.
    pub async fn state_and_local_gov_securities(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/accounting/od/slgs_securities",
                query.to_params(),
            )
            .await
    }
}
