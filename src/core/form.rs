//! Form state and submission status
//!
//! [`FormState`] owns the current field values, the per-field errors from the
//! last validation pass, and a [`SubmissionStatus`]. Each screen creates one
//! when it mounts and drops it on unmount; nothing persists across
//! navigation.

use std::collections::BTreeMap;

use super::schema::FormSchema;
use super::submit::SubmissionOutcome;

/// Outcome of the last submit attempt, modelled as an explicit state machine:
///
/// ```text
/// Idle -> Pending -> Success | Failure -> Idle (on next edit)
/// ```
///
/// While `Pending`, further submits are rejected and the submit control is
/// disabled.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    /// No submit attempt in flight or resolved
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The endpoint accepted the submission, with an optional confirmation
    /// message from the response body
    Success(Option<String>),
    /// The endpoint rejected the submission, or the request never completed
    Failure(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }
}

/// Mutable state of one form screen
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    status: SubmissionStatus,
}

impl FormState {
    /// Create state with an empty value for every field in the schema
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .field_names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            errors: BTreeMap::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Record user input for a field.
    ///
    /// Clears that field's error and re-arms a resolved status back to
    /// `Idle` so a stale banner never outlives the input it described.
    /// A `Pending` status is left alone; the in-flight request will resolve
    /// it.
    pub fn set_value(&mut self, field: &str, value: String) {
        self.values.insert(field.to_string(), value);
        self.errors.remove(field);

        if matches!(
            self.status,
            SubmissionStatus::Success(_) | SubmissionStatus::Failure(_)
        ) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate and, when clean, move to `Pending`.
    ///
    /// Returns true when the caller should go ahead and send the request.
    /// Returns false when a request is already in flight (duplicate submits
    /// are rejected) or when validation failed, in which case the per-field
    /// errors are surfaced and the status is untouched.
    pub fn begin_submit(&mut self, schema: &FormSchema) -> bool {
        if self.status.is_pending() {
            return false;
        }

        self.errors = schema.validate(&self.values);
        if !self.errors.is_empty() {
            return false;
        }

        self.status = SubmissionStatus::Pending;
        true
    }

    /// Resolve the in-flight submit with the transport's outcome
    pub fn resolve(&mut self, outcome: SubmissionOutcome) {
        self.status = match outcome {
            Ok(message) => SubmissionStatus::Success(message),
            Err(err) => SubmissionStatus::Failure(err.to_string()),
        };
    }
}
