//! Core form-validation and submission logic, shared by both screens

pub mod form;
pub mod schema;
pub mod submit;
#[cfg(test)]
mod tests;

pub use form::{FormState, SubmissionStatus};
pub use schema::{FieldSpec, FormSchema, Rule, login_schema, signup_schema};
pub use submit::{
    LOGIN_ENDPOINT, LOGIN_REDIRECT_DELAY_MS, SIGNUP_ENDPOINT, SubmissionOutcome, SubmitError,
    submit,
};
