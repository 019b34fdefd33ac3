//! Monthly Statement of the Public Debt (MSPD) tables.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Data on the instruments that make up the public debt.
pub struct PublicDebtInstruments {
    pub(crate) session: Arc<Session>,
}

impl PublicDebtInstruments {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Amounts outstanding for all securities issued by the Bureau of the
    /// Fiscal Service that make up the Total Public Debt Outstanding.
    pub async fn treasury_securities_outstanding(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/mspd/mspd_table_1", query.to_params())
            .await
    }

    /// Amounts outstanding adjusted for unamortized discounts, other debt,
    /// and guaranteed agency debt — the Total Public Debt Subject to Limit.
    pub async fn statutory_debt_limit(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/mspd/mspd_table_2", query.to_params())
            .await
    }

    /// Details on marketable and non-marketable Treasury securities
    /// outstanding as of the last business day of the month.
    pub async fn details_of_securities_outstanding(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/mspd/mspd_table_3", query.to_params())
            .await
    }

    /// Detail by CUSIP on unmatured Bills, Notes, Bonds, TIPS, and Floating
    /// Rate Notes: interest rate, issue and maturity dates, interest payment
    /// dates, and amounts outstanding.
    pub async fn details_of_marketable_securities_outstanding(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/debt/mspd/mspd_table_3_market",
                query.to_params(),
            )
            .await
    }

    /// Monthly activity and amounts outstanding for Savings Bonds, Government
    /// Account Series, and SLGS securities.
    pub async fn details_of_nonmarketable_securities_outstanding(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v1/debt/mspd/mspd_table_3_nonmarket",
                query.to_params(),
            )
            .await
    }

    /// Historical breakdown of Debt Held by the Public, Intragovernmental
    /// Holdings, and the Total Public Debt Outstanding.
    pub async fn historical_data(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/mspd/mspd_table_4", query.to_params())
            .await
    }

    /// Holdings of Treasury securities in stripped form, by CUSIP: unstripped,
    /// stripped, and reconstituted amounts. STRIPS are securities broken into
    /// separately tradable principal and interest pieces.
    pub async fn holding_of_securities_stripped_form(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/mspd/mspd_table_5", query.to_params())
            .await
    }
}
