//! Judgment Fund reports and revenue collections.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Government revenue collections and Judgment Fund payments.
pub struct RevenueAndPayments {
    pub(crate) session: Arc<Session>,
}

impl RevenueAndPayments {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Payments made through the Judgment Fund: amounts paid out, judgment
    /// type, legal representatives, agencies involved, and associated costs.
    pub async fn judgement_fund_congress(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/payments/jfics/jfics_congress_report",
                query.to_params(),
            )
            .await
    }

    /// Daily overview of federal revenue collections: income tax deposits,
    /// customs duties, fees, fines, and loan repayments.
    pub async fn revenue_collection(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v2/revenue/rcm", query.to_params())
            .await
    }
}
