//! Treasury Report on Receivables (TROR) tables.
//!
//! The federal government's primary means for collecting data on the status
//! of non-tax receivables owed to the United States.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Status of non-tax receivables owed to the federal government.
pub struct TreasuryReportsOnReceivables {
    pub(crate) session: Arc<Session>,
}

impl TreasuryReportsOnReceivables {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The full TROR data report.
    pub async fn full_data(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v2/debt/tror", query.to_params())
            .await
    }

    /// Amounts owed to the federal government by entities other than another
    /// federal agency during the reporting period.
    pub async fn collected_and_outstanding_receivables(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/debt/tror/collected_outstanding_recv",
                query.to_params(),
            )
            .await
    }

    /// Amounts of delinquent debt collected during the reporting period,
    /// broken down by collection tool.
    pub async fn collections_delinquent_debt(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/debt/tror/collections_delinquent_debt",
                query.to_params(),
            )
            .await
    }

    /// The 120 Day Delinquent Debt Referral Compliance Report, tracking
    /// compliance with the DATA Act of 2014.
    pub async fn data_act_compliance(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/debt/tror/data_act_compliance",
                query.to_params(),
            )
            .await
    }

    /// Delinquent non-tax debt owed to the federal government during the
    /// reporting period.
    pub async fn delinquent_debt(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/debt/tror/delinquent_debt",
                query.to_params(),
            )
            .await
    }

    /// Amounts of delinquent debt written off during the reporting period.
    pub async fn written_off_delinquent_debt(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/debt/tror/written_off_delinquent_debt",
                query.to_params(),
            )
            .await
    }
}
