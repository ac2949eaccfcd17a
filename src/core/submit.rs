//! Submission transport and response interpretation
//!
//! Builds the JSON payload from the schema's field values, posts it to the
//! screen's endpoint, and maps the response onto a [`SubmissionOutcome`].
//! Only [`submit`] touches the browser; everything else is pure so the
//! interpretation rules are testable on any target.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::schema::FormSchema;

/// Sign-up endpoint
pub const SIGNUP_ENDPOINT: &str = "/api/signup";

/// Sign-in endpoint
pub const LOGIN_ENDPOINT: &str = "/api/login";

/// Delay before the post-signup redirect to the sign-in screen
pub const LOGIN_REDIRECT_DELAY_MS: u32 = 3_000;

/// Banner message when a failure response carries no usable `error` field
const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Transport-level failure of a submit attempt
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status
    #[error("{0}")]
    Rejected(String),
    /// The request never completed
    #[error("Network error. Please try again.")]
    Network,
}

/// Result of one submit attempt: an optional confirmation message on
/// acceptance, a [`SubmitError`] otherwise
pub type SubmissionOutcome = Result<Option<String>, SubmitError>;

/// Failure response body. Every field is optional so a missing or
/// differently-shaped body can never make interpretation panic.
#[derive(Debug, Deserialize)]
struct FailureBody {
    error: Option<String>,
}

/// Success response body; the server may attach a confirmation message
#[derive(Debug, Deserialize)]
struct SuccessBody {
    message: Option<String>,
}

/// Build the request payload from the schema's fields, exactly as named.
/// Values are taken verbatim: no trimming, no normalization.
pub fn payload(schema: &FormSchema, values: &BTreeMap<String, String>) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = schema
        .field_names()
        .map(|name| {
            (
                name.to_string(),
                serde_json::Value::String(values.get(name).cloned().unwrap_or_default()),
            )
        })
        .collect();
    serde_json::Value::Object(map)
}

/// Map a response (2xx or not, plus raw body text) onto an outcome
pub fn interpret_response(ok: bool, body: &str) -> SubmissionOutcome {
    if ok {
        let message = serde_json::from_str::<SuccessBody>(body)
            .ok()
            .and_then(|b| b.message);
        Ok(message)
    } else {
        let message = serde_json::from_str::<FailureBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());
        Err(SubmitError::Rejected(message))
    }
}

/// Post the form values to `endpoint` and interpret the response.
///
/// One attempt per call: no retries, no timeout beyond the browser's own.
#[cfg(not(feature = "ssr"))]
pub async fn submit(
    endpoint: &str,
    schema: &FormSchema,
    values: &BTreeMap<String, String>,
) -> SubmissionOutcome {
    use gloo_net::http::Request;

    let body = payload(schema, values);

    let request = Request::post(endpoint)
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|_| SubmitError::Network)?;

    let response = request.send().await.map_err(|_| SubmitError::Network)?;
    let text = response.text().await.unwrap_or_default();

    interpret_response(response.ok(), &text)
}

/// Submits only happen in the browser; the server render never sends one
#[cfg(feature = "ssr")]
pub async fn submit(
    _endpoint: &str,
    _schema: &FormSchema,
    _values: &BTreeMap<String, String>,
) -> SubmissionOutcome {
    Err(SubmitError::Network)
}
