//! Treasury Offset Program (TOP) collections.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Delinquent debt recovered by the Treasury Offset Program.
pub struct OffsetProgram {
    pub(crate) session: Arc<Session>,
}

impl OffsetProgram {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Delinquent debt collections through federal programs.
    pub async fn federal_collections(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/top/top_federal", query.to_params())
            .await
    }

    /// Delinquent debt recovery through state programs, tracking state
    /// participation.
    pub async fn state_programs(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v1/debt/top/top_state", query.to_params())
            .await
    }
}
