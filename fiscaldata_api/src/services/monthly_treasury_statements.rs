//! Monthly Treasury Statement (MTS) tables.
//!
//! Receipts, outlays, and the deficit or surplus of the U.S. Government,
//! published monthly.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Monthly receipts, outlays, and financing of the U.S. Government.
pub struct MonthlyTreasuryStatements {
    pub(crate) session: Arc<Session>,
}

impl MonthlyTreasuryStatements {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Total receipts, outlays, and the budget surplus or deficit by month
    /// for the current and prior fiscal years.
    pub async fn receipts_outlays_and_deficits(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_1", query.to_params())
            .await
    }

    /// On-budget and off-budget receipts and outlays, the surplus or deficit,
    /// and the means of financing it.
    pub async fn budgets_and_financing(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_2", query.to_params())
            .await
    }

    /// Budget receipts and outlays for the current month, fiscal year-to-date,
    /// prior-period year-to-date, and the budgeted estimate for the year.
    pub async fn receipts_and_outlays(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_3", query.to_params())
            .await
    }

    /// Gross receipts, refunds, and net receipts of the federal government.
    pub async fn receipts(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_4", query.to_params())
            .await
    }

    /// Gross outlays, applicable receipts, and net outlays by agency program.
    pub async fn outlays(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_5", query.to_params())
            .await
    }

    /// Means of financing the deficit or disposition of the surplus: net
    /// transactions and account balances.
    pub async fn means_of_financing(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_6", query.to_params())
            .await
    }

    /// Subsidiary of the means-of-financing table: detailed view of the
    /// change in excess of liabilities.
    pub async fn analysis_change_in_liabilities(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_6a", query.to_params())
            .await
    }

    /// Securities issued by federal agencies under special financing
    /// authorities.
    pub async fn securities_issued_special_financing(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_6b", query.to_params())
            .await
    }

    /// Federal agency borrowing financed through the issue of Treasury
    /// securities.
    pub async fn borrowing_financed_treasury_securities(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_6c", query.to_params())
            .await
    }

    /// Federal funds and trust funds invested in Government Account Series
    /// securities.
    pub async fn investments_federal_securities(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_6d", query.to_params())
            .await
    }

    /// Direct and guaranteed loan financing for federal credit programs under
    /// the Credit Reform Act of 1990.
    pub async fn direct_loan_financing(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_6e", query.to_params())
            .await
    }

    /// Receipts and outlays by month for the current fiscal year, through the
    /// current accounting month.
    pub async fn receipts_and_outlays_by_month(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_7", query.to_params())
            .await
    }

    /// Receipts, outlays, and the resulting excess for all federal trust
    /// funds, with investment holdings.
    pub async fn trust_fund_impact(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_8", query.to_params())
            .await
    }

    /// Summary of receipts by source and outlays by function.
    pub async fn receipts_by_source_outlay_by_function(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/accounting/mts/mts_table_9", query.to_params())
            .await
    }
}
