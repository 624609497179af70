//! HTTP gateway to the HR portal's employee endpoints.
//!
//! The gateway is the only place wire shapes are handled: it unwraps the
//! portal's response envelope, folds legacy field names into their canonical
//! ones and hands typed records to the rest of the app.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{EmployeePayload, EmployeeRecord, UpdateAck};

/// Legacy wire names still emitted by older portal deployments, and the
/// canonical field each one feeds. Earlier entries win when several carry a
/// value; an existing non-blank canonical value always wins over all of them.
const LEGACY_FIELD_ALIASES: &[(&str, &str)] = &[
    ("contactNumber", "mobileNumber"),
    ("contact", "mobileNumber"),
];

/// Remote operations the edit flow needs.
///
/// [`EmployeeApi`] is the production implementation; tests drive the
/// submission path with in-memory mocks.
#[allow(async_fn_in_trait)]
pub trait EmployeeGateway {
    async fn fetch(&self, id: i64) -> Result<EmployeeRecord>;
    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<UpdateAck>;
}

/// HTTP client for the portal's employee API.
///
/// Most portal responses arrive in a `{success, message, data}` envelope,
/// but older deployments return the record bare; both shapes are accepted.
#[derive(Clone)]
pub struct EmployeeApi {
    client: Client,
    base_url: String,
}

impl EmployeeApi {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - Portal URL (e.g., "http://localhost:8080")
    /// * `timeout_secs` - Per-request timeout in seconds
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn employee_url(&self, id: i64) -> String {
        format!("{base}/api/v2/employees/{id}", base = self.base_url)
    }
}

impl EmployeeGateway for EmployeeApi {
    /// Fetch one employee record by id.
    async fn fetch(&self, id: i64) -> Result<EmployeeRecord> {
        let url = self.employee_url(id);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("GET {url} -> {status}: {body}");
            return Err(AppError::server(status.as_u16(), extract_message(&body)));
        }

        let parsed: Value =
            serde_json::from_str(&body).map_err(|e| AppError::invalid_response(e.to_string()))?;
        let mut record = unwrap_envelope(parsed);
        normalize_legacy_fields(&mut record);

        serde_json::from_value(record).map_err(|e| AppError::invalid_response(e.to_string()))
    }

    /// Send an updated record to the portal.
    ///
    /// The update endpoint is sloppy about its response body: some
    /// deployments return the envelope, some nothing at all. Any 2xx with an
    /// undecodable body is treated as a bare acknowledgement.
    async fn update(&self, id: i64, payload: &EmployeePayload) -> Result<UpdateAck> {
        let url = self.employee_url(id);
        debug!("PUT {url} payload: {payload:?}");

        let response = self.client.put(&url).json(payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("PUT {url} -> {status}: {body}");
            return Err(AppError::server(status.as_u16(), extract_message(&body)));
        }

        debug!("PUT {url} -> {status}: {body}");
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}

/// Unwrap the portal's `{success, message, data}` envelope. A non-null
/// `data` key yields that value; anything else is taken as the record
/// itself.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            _ => Value::Object(map),
        },
        other => other,
    }
}

/// Fold legacy field names into their canonical ones, in table order, and
/// strip the legacy keys whether or not they were used.
fn normalize_legacy_fields(record: &mut Value) {
    let Some(map) = record.as_object_mut() else {
        return;
    };
    for (legacy, canonical) in LEGACY_FIELD_ALIASES {
        let fill = map.get(*canonical).map_or(true, wire_blank);
        match map.remove(*legacy) {
            Some(value) if fill && !wire_blank(&value) => {
                map.insert((*canonical).to_string(), value);
            }
            _ => {}
        }
    }
}

/// Blank on the wire: absent, null, or an empty string.
fn wire_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Pull a human-readable message out of an error response body, if the
/// portal sent one.
fn extract_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    let message = parsed.get("message")?.as_str()?.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
