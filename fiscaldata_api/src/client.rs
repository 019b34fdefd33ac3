//! Client facade for the Fiscal Data API.

use std::sync::Arc;

use crate::services::{
    DailyTreasuryStatements, MonthlyTreasuryStatements, OffsetProgram, OtherData,
    OutstandingDebtInstruments, PublicDebtInstruments, RevenueAndPayments,
    TreasuryReportsOnReceivables,
};
use crate::session::Session;

/// Entry point for the Fiscal Data API.
///
/// Owns the [`Session`] shared by every dataset service. Service accessors
/// return independent values that all issue their requests through the same
/// underlying session instance.
pub struct Client {
    session: Arc<Session>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a client pointing at the production Fiscal Data API.
    pub fn new() -> Self {
        Self {
            session: Arc::new(Session::new()),
        }
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            session: Arc::new(Session::with_base_url(base_url)),
        }
    }

    /// Monthly Statement of the Public Debt (MSPD) tables.
    pub fn public_debt_instruments(&self) -> PublicDebtInstruments {
        PublicDebtInstruments::new(Arc::clone(&self.session))
    }

    /// Daily Treasury Statement (DTS) tables.
    pub fn daily_treasury_statements(&self) -> DailyTreasuryStatements {
        DailyTreasuryStatements::new(Arc::clone(&self.session))
    }

    /// Monthly Treasury Statement (MTS) tables.
    pub fn monthly_treasury_statements(&self) -> MonthlyTreasuryStatements {
        MonthlyTreasuryStatements::new(Arc::clone(&self.session))
    }

    /// Outstanding-debt-instrument tables: exchange rates, savings bonds,
    /// schedules of federal debt, and SLGS securities.
    pub fn outstanding_debt_instruments(&self) -> OutstandingDebtInstruments {
        OutstandingDebtInstruments::new(Arc::clone(&self.session))
    }

    /// Treasury Offset Program collections.
    pub fn offset_program(&self) -> OffsetProgram {
        OffsetProgram::new(Arc::clone(&self.session))
    }

    /// The grab bag of additional datasets: interest rates, gold reserves,
    /// debt to the penny, auction records, and more.
    pub fn other_data(&self) -> OtherData {
        OtherData::new(Arc::clone(&self.session))
    }

    /// Judgment Fund reports and revenue collections.
    pub fn revenue_and_payments(&self) -> RevenueAndPayments {
        RevenueAndPayments::new(Arc::clone(&self.session))
    }

    /// Treasury Report on Receivables (TROR) tables.
    pub fn treasury_reports_on_receivables(&self) -> TreasuryReportsOnReceivables {
        TreasuryReportsOnReceivables::new(Arc::clone(&self.session))
    }
}
