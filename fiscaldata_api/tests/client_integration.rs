use fiscaldata_api::{Client, Error, Method, ParamValue, Params, RecordsQuery, Session};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn records_body() -> serde_json::Value {
    json!({
        "data": [
            {"record_date": "2022-06-01", "tot_pub_debt_out_amt": "30000000000000.00"},
            {"record_date": "2022-06-02", "tot_pub_debt_out_amt": "30000000000100.00"}
        ],
        "meta": {"count": 2, "total-count": 2, "total-pages": 1},
        "links": {"self": "&page%5Bnumber%5D=1&page%5Bsize%5D=100"}
    })
}

#[tokio::test]
async fn get_returns_decoded_json_body() {
    let server = MockServer::start().await;
    let body = records_body();

    Mock::given(method("GET"))
        .and(path("/v2/accounting/od/debt_to_penny"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let result = client
        .other_data()
        .debt_to_penny(&RecordsQuery::default())
        .await
        .unwrap();

    assert_eq!(result, body);
}

#[tokio::test]
async fn default_query_sends_format_and_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/debt/mspd/mspd_table_1"))
        .and(query_param("format", "json"))
        .and(query_param("page[number]", "1"))
        .and(query_param("page[size]", "100"))
        .and(query_param_is_missing("fields"))
        .and(query_param_is_missing("sort"))
        .and(query_param_is_missing("filters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let result = client
        .public_debt_instruments()
        .treasury_securities_outstanding(&RecordsQuery::default())
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn fields_sort_filters_are_comma_joined() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/accounting/od/avg_interest_rates"))
        .and(query_param("fields", "record_date,avg_interest_rate_amt"))
        .and(query_param("sort", "-record_date,security_desc"))
        .and(query_param("filters", "record_fiscal_year:gte:2007"))
        .and(query_param("page[number]", "3"))
        .and(query_param("page[size]", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let query = RecordsQuery::default()
        .with_fields(&["record_date", "avg_interest_rate_amt"])
        .with_sorts(&["-record_date", "security_desc"])
        .with_filter("record_fiscal_year:gte:2007")
        .with_page_number(3)
        .with_page_size(25);

    let client = Client::with_base_url(&server.uri());
    let result = client.other_data().average_interest_rates(&query).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn error_status_attaches_structured_report() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/debt/top/top_federal"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let result = client
        .offset_program()
        .federal_collections(&RecordsQuery::default())
        .await;

    match result {
        Err(Error::Http(report)) => {
            assert_eq!(report.error_code, 404);
            assert_eq!(report.response_body, json!({"error": "not found"}));
            assert_eq!(report.request_method, "GET");
            assert!(report.response_url.contains("/v1/debt/top/top_federal"));
            assert!(report.response_url.contains("format=json"));
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_success_body_returns_synthetic_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/revenue/rcm"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let result = client
        .revenue_and_payments()
        .revenue_collection(&RecordsQuery::default())
        .await
        .unwrap();

    assert_eq!(result["message"], "response successful");
    assert_eq!(result["status_code"], 200);
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_raw_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/debt/tror"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let result = client
        .treasury_reports_on_receivables()
        .full_data(&RecordsQuery::default())
        .await;

    match result {
        Err(Error::Http(report)) => {
            assert_eq!(report.error_code, 500);
            assert_eq!(
                report.response_body,
                serde_json::Value::String("Internal Server Error".to_string())
            );
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/accounting/dts/dts_table_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri());
    let result = client
        .daily_treasury_statements()
        .operating_cash_balance(&RecordsQuery::default())
        .await;

    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn tag_name_lists_are_semicolon_joined_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/series/search"))
        .and(query_param("tag_names", "monthly;debt"))
        .and(query_param("exclude_tag_names", "discontinued"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let mut params = Params::new();
    params.insert(
        "tag_names",
        vec!["monthly".to_string(), "debt".to_string()],
    );
    params.insert("exclude_tag_names", vec!["discontinued".to_string()]);

    let session = Session::with_base_url(&server.uri());
    let result = session
        .make_request(Method::GET, "/v1/series/search", params)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn datetime_params_are_sent_as_calendar_dates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/series/observations"))
        .and(query_param("realtime_start", "2022-01-01"))
        .and(query_param("realtime_end", "2022-12-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let start = chrono::NaiveDate::from_ymd_opt(2022, 1, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let end = chrono::NaiveDate::from_ymd_opt(2022, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    let mut params = Params::new();
    params.insert("realtime_start", start);
    params.insert("realtime_end", end);

    let session = Session::with_base_url(&server.uri());
    let result = session
        .make_request(Method::GET, "/v1/series/observations", params)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn json_payloads_are_forwarded_for_non_get_verbs() {
    let server = MockServer::start().await;
    let payload = json!({"note": "hello"});

    Mock::given(method("POST"))
        .and(path("/v1/echo"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let session = Session::with_base_url(&server.uri());
    let result = session
        .make_request_full(Method::POST, "/v1/echo", Params::new(), None, Some(&payload))
        .await
        .unwrap();

    assert_eq!(result, json!({"ok": true}));
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // nothing listens on port 1
    let session = Session::with_base_url("http://127.0.0.1:1");
    let result = session
        .make_request(Method::GET, "/v1/debt/top/top_federal", Params::new())
        .await;

    assert!(matches!(result, Err(Error::Transport(_))));
}

#[test]
fn params_support_structured_values() {
    let mut params = Params::new();
    params.insert("format", "json");
    params.insert("page[number]", 2_i64);
    assert_eq!(params.get("format"), Some(&ParamValue::Str("json".into())));
    assert_eq!(params.get("page[number]"), Some(&ParamValue::Int(2)));
    assert!(params.get("missing").is_none());
}

// One routing check per dataset family beyond those already exercised above.

#[tokio::test]
async fn services_route_to_their_endpoints() {
    let server = MockServer::start().await;
    let endpoints = [
        "/v1/debt/mspd/mspd_table_5",
        "/v1/accounting/dts/dts_table_4",
        "/v1/accounting/mts/mts_table_9",
        "/v1/accounting/od/savings_bonds_mud",
        "/v1/debt/top/top_state",
        "/v2/accounting/od/gold_reserve",
        "/v2/payments/jfics/jfics_congress_report",
        "/v2/debt/tror/delinquent_debt",
    ];
    for endpoint in endpoints {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .mount(&server)
            .await;
    }

    let client = Client::with_base_url(&server.uri());
    let query = RecordsQuery::default();

    assert!(client
        .public_debt_instruments()
        .holding_of_securities_stripped_form(&query)
        .await
        .is_ok());
    assert!(client
        .daily_treasury_statements()
        .federal_tax_deposits(&query)
        .await
        .is_ok());
    assert!(client
        .monthly_treasury_statements()
        .receipts_by_source_outlay_by_function(&query)
        .await
        .is_ok());
    assert!(client
        .outstanding_debt_instruments()
        .mature_unredeemed_debt(&query)
        .await
        .is_ok());
    assert!(client.offset_program().state_programs(&query).await.is_ok());
    assert!(client.other_data().gold_reserve(&query).await.is_ok());
    assert!(client
        .revenue_and_payments()
        .judgement_fund_congress(&query)
        .await
        .is_ok());
    assert!(client
        .treasury_reports_on_receivables()
        .delinquent_debt(&query)
        .await
        .is_ok());
}
