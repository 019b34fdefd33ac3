//! Request session for the Fiscal Data API.
//!
//! Single point of contact with the remote API: owns the base resource URL,
//! serializes parameters, sends the request, and classifies the response.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::{json, Value};
use url::Url;

use crate::errors::{ApiErrorReport, Error};
use crate::params::{ParamValue, Params};

/// Base resource URL for the production Fiscal Data API.
const DEFAULT_BASE_URL: &str =
    "https://api.fiscaldata.treasury.gov/services/api/fiscal_service";

/// Request timeout applied to every call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters whose list values the remote API reads as a single
/// semicolon-delimited string rather than a repeated key.
const TAG_LIST_PARAMS: [&str; 2] = ["tag_names", "exclude_tag_names"];

const USER_AGENT: &str = concat!("fiscaldata_api/", env!("CARGO_PKG_VERSION"));

/// Handles every request made by the dataset services.
///
/// Each call builds a fresh `reqwest::Client` that is dropped when the call
/// returns, so no connection state survives across requests and concurrent
/// calls never share per-call resources.
pub struct Session {
    base_url: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session pointing at the production Fiscal Data API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Creates a session with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Builds the full URL for an endpoint path.
    ///
    /// The path segment itself is not validated; callers supply well-formed
    /// paths beginning with a separator.
    pub fn build_url(&self, endpoint: &str) -> Result<Url, Error> {
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint))?)
    }

    /// Sends a request with query parameters only. This is the path every
    /// dataset service goes through.
    pub async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        params: Params,
    ) -> Result<Value, Error> {
        self.make_request_full(method, endpoint, params, None, None)
            .await
    }

    /// Generic variant carrying optional form and JSON payloads for the
    /// non-GET verbs the session supports.
    pub async fn make_request_full(
        &self,
        method: Method,
        endpoint: &str,
        params: Params,
        form: Option<&[(String, String)]>,
        json_payload: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.build_url(endpoint)?;
        let pairs = serialize_params(&params);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let mut builder = client.request(method, url).query(&pairs);
        if let Some(form) = form {
            builder = builder.form(form);
        }
        if let Some(payload) = json_payload {
            builder = builder.json(payload);
        }

        // Build the request up front so the resolved URL and headers are
        // available for the error report.
        let request = builder.build()?;
        let resolved_url = request.url().to_string();
        let request_method = request.method().to_string();
        let request_headers = header_map(request.headers());

        tracing::info!("URL: {}", resolved_url);
        tracing::info!("PARAMS: {:?}", redact(&pairs));

        let response = client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            if body.is_empty() {
                return Ok(json!({
                    "message": "response successful",
                    "status_code": status.as_u16(),
                }));
            }
            return Ok(serde_json::from_str(&body)?);
        }

        // Error bodies are usually JSON but that is not guaranteed; keep the
        // raw text rather than masking the original failure.
        let response_body = match serde_json::from_str::<Value>(&body) {
            Ok(value) => value,
            Err(_) => Value::String(body),
        };

        let report = ApiErrorReport {
            error_code: status.as_u16(),
            response_url: resolved_url,
            response_body,
            request_headers,
            request_method,
        };
        tracing::error!("Request failed with status {}: {}", status, report);
        Err(Error::Http(Box::new(report)))
    }
}

/// Flattens parameters into query pairs.
///
/// Datetimes are reduced to their ISO-8601 calendar date. Lists under a
/// tag-name key are semicolon-joined; any other list becomes a repeated key.
/// Empty values are omitted rather than sent as empty strings.
fn serialize_params(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params.iter() {
        match value {
            ParamValue::Str(s) => {
                if !s.is_empty() {
                    pairs.push((key.clone(), s.clone()));
                }
            }
            ParamValue::Int(n) => pairs.push((key.clone(), n.to_string())),
            ParamValue::List(items) => {
                if items.is_empty() {
                    continue;
                }
                if TAG_LIST_PARAMS.contains(&key.as_str()) {
                    tracing::info!("Joining {}: {:?}", key, items);
                    pairs.push((key.clone(), items.join(";")));
                } else {
                    for item in items {
                        pairs.push((key.clone(), item.clone()));
                    }
                }
            }
            ParamValue::DateTime(dt) => {
                pairs.push((key.clone(), dt.date().to_string()));
            }
        }
    }
    pairs
}

/// Copy of the query pairs with credential values masked, for logging. The
/// unredacted pairs are what is transmitted.
fn redact(pairs: &[(String, String)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| {
            if key == "api_key" {
                (key.clone(), "xxxxxxxx".to_string())
            } else {
                (key.clone(), value.clone())
            }
        })
        .collect()
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<binary>").to_string(),
            )
        })
        .collect()
}
