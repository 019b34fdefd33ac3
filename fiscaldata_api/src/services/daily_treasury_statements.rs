//! Daily Treasury Statement (DTS) tables.
//!
//! Cash and debt operations of the U.S. Treasury, published each business
//! day. All figures are rounded to the nearest million.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Daily cash and debt operations of the U.S. Treasury.
pub struct DailyTreasuryStatements {
    pub(crate) session: Arc<Session>,
}

impl DailyTreasuryStatements {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The Treasury General Account balance.
    pub async fn operating_cash_balance(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_1", query.to_params())
            .await
    }

    /// Deposits to and withdrawals from the Treasury General Account.
    pub async fn deposits_and_withdrawals_operating_cash(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_2", query.to_params())
            .await
    }

    /// Issues and redemptions of marketable and non-marketable securities.
    pub async fn public_debt_transactions(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_3a", query.to_params())
            .await
    }

    /// Cash-basis adjustments to the issues and redemptions of Treasury
    /// securities in the Public Debt Transactions table.
    pub async fn adjusted_public_debt_transactions(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_3b", query.to_params())
            .await
    }

    /// Breakdown of total public debt outstanding as it relates to the
    /// statutory debt limit.
    pub async fn debt_subject_limit(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_3c", query.to_params())
            .await
    }

    /// Breakdown of taxes received by the federal government.
    pub async fn federal_tax_deposits(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_4", query.to_params())
            .await
    }

    /// Amounts Treasury holds in short-term cash investments. The program
    /// was suspended indefinitely in 2008.
    pub async fn short_term_cash_investments(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_5", query.to_params())
            .await
    }

    /// Tax refunds by recipient (individual vs business) and type (check vs
    /// electronic funds transfer).
    pub async fn income_tax_refunds_issued(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/dts/dts_table_6", query.to_params())
            .await
    }
}
