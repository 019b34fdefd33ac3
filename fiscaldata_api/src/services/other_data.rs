//! Additional Fiscal Data datasets that belong to no other family.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::errors::Error;
use crate::query::RecordsQuery;
use crate::session::Session;

/// Interest rates, gold reserves, debt to the penny, auction records, and
/// the rest of the miscellaneous datasets.
pub struct OtherData {
    pub(crate) session: Arc<Session>,
}

impl OtherData {
    pub(crate) fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Average interest rates for marketable and non-marketable Treasury
    /// securities.
    pub async fn average_interest_rates(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/avg_interest_rates",
                query.to_params(),
            )
            .await
    }

    /// Balance sheets from the Financial Report of the U.S. Government:
    /// assets, liabilities, and net position.
    pub async fn balance_sheets(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/balance_sheets",
                query.to_params(),
            )
            .await
    }

    /// U.S. debt outstanding at the end of each fiscal year.
    pub async fn historical_debt_outstanding(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/debt_outstanding",
                query.to_params(),
            )
            .await
    }

    /// Outstanding U.S. debt on a daily basis.
    pub async fn debt_to_penny(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/debt_to_penny",
                query.to_params(),
            )
            .await
    }

    /// Gifts donated to the United States Government to reduce debt held by
    /// the public.
    pub async fn gift_contributions(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/gift_contributions",
                query.to_params(),
            )
            .await
    }

    /// Gold the U.S. Treasury holds, in both weight and value.
    pub async fn gold_reserve(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/gold_reserve",
                query.to_params(),
            )
            .await
    }

    /// Monthly premiums, discounts, interest collected and paid, and
    /// inflation compensation for accounts invested in Government Account
    /// Series securities.
    pub async fn interest_cost_fund(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/interest_cost_fund",
                query.to_params(),
            )
            .await
    }

    /// Monthly summary of the cost of interest on U.S. debt.
    pub async fn interest_expense(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/interest_expense",
                query.to_params(),
            )
            .await
    }

    /// Quarterly interest balances for Treasury's Credit Reform interest paid
    /// on uninvested funds account.
    pub async fn interest_uninvested(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/interest_uninvested",
                query.to_params(),
            )
            .await
    }

    /// Historical interest rate, term to maturity, and permitted sinking fund
    /// yield for qualified tax credit bonds, reported daily through
    /// January 30, 2018.
    pub async fn qualified_tax(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/qualified_tax",
                query.to_params(),
            )
            .await
    }

    /// Rates, yields, and auction dates of record high and low Treasury
    /// auctions.
    pub async fn record_setting_auction(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/record_setting_auction",
                query.to_params(),
            )
            .await
    }

    /// Monthly redemption value, interest earned, and yield of accrual
    /// savings bonds purchased since 1941.
    pub async fn redemption_tables(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/redemption_tables",
                query.to_params(),
            )
            .await
    }

    /// Redemption values for accrual savings bonds (Series E, EE, I, and
    /// Savings Notes), as consumed by bond pricing programs.
    pub async fn saving_bonds_value(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v2/accounting/od/sb_value", query.to_params())
            .await
    }

    /// Monthly State and Local Government Series (SLGS) securities program
    /// statistics.
    pub async fn state_and_local_gov_statistics(
        &self,
        query: &RecordsQuery,
    ) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/slgs_statistics",
                query.to_params(),
            )
            .await
    }

    /// Statement of Net Cost from the Financial Report of the U.S.
    /// Government.
    pub async fn statement_net_cost(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/statement_net_cost",
                query.to_params(),
            )
            .await
    }

    /// Advances to state unemployment funds under Social Security Act
    /// Title XII: monthly balances for securities and principal outstanding.
    pub async fn title_xii_advances(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(Method::GET, "/v2/accounting/od/title_xii", query.to_params())
            .await
    }

    /// Quarterly yields earned by the Unemployment Trust Fund since 1999.
    pub async fn utf_qtr_yields(&self, query: &RecordsQuery) -> Result<Value, Error> {
        self.session
            .make_request(
                Method::GET,
                "/v2/accounting/od/utf_qtr_yields",
                query.to_params(),
            )
            .await
    }
}
