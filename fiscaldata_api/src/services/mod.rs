//! One service per dataset family; each method maps to a fixed endpoint.

mod daily_treasury_statements;
pub use self::daily_treasury_statements::DailyTreasuryStatements;

mod monthly_treasury_statements;
pub use self::monthly_treasury_statements::MonthlyTreasuryStatements;

mod offset_program;
pub use self::offset_program::OffsetProgram;

mod other_data;
pub use self::other_data::OtherData;

mod outstanding_debt;
pub use self::outstanding_debt::OutstandingDebtInstruments;

mod public_debt;
pub use self::public_debt::PublicDebtInstruments;

mod revenue_and_payments;
pub use self::revenue_and_payments::RevenueAndPayments;

mod treasury_reports_on_receivables;
pub use self::treasury_reports_on_receivables::TreasuryReportsOnReceivables;
