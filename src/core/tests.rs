//! Flow-level tests walking a form through validate, submit, and resolve,
//! the way the screens drive it

use crate::core::submit::interpret_response;
use crate::core::{FormState, SubmissionStatus, SubmitError, login_schema, signup_schema, submit};

#[test]
fn test_signup_flow_happy_path() {
    let schema = signup_schema();
    let mut form = FormState::new(&schema);

    form.set_value("username", "jordan".to_string());
    form.set_value("email", "jordan@example.com".to_string());
    form.set_value("password", "s3cret!!".to_string());
    form.set_value("confirmPassword", "s3cret!!".to_string());

    assert!(form.begin_submit(&schema));
    assert!(form.status().is_pending());

    // Endpoint accepts with a 2xx and an empty body
    form.resolve(interpret_response(true, ""));
    assert_eq!(*form.status(), SubmissionStatus::Success(None));
}

#[test]
fn test_signup_flow_blocked_until_valid() {
    let schema = signup_schema();
    let mut form = FormState::new(&schema);

    form.set_value("username", "jordan".to_string());
    form.set_value("email", "not-an-email".to_string());
    form.set_value("password", "a".to_string());
    form.set_value("confirmPassword", "b".to_string());

    assert!(!form.begin_submit(&schema));
    assert_eq!(*form.status(), SubmissionStatus::Idle);
    assert_eq!(form.error("email"), Some("Invalid email"));
    assert_eq!(form.error("confirmPassword"), Some("Passwords must match"));

    // Fixing the fields clears the errors and unblocks the submit
    form.set_value("email", "jordan@example.com".to_string());
    form.set_value("confirmPassword", "a".to_string());
    assert!(form.begin_submit(&schema));
}

#[test]
fn test_login_flow_rejected_with_server_message() {
    let schema = login_schema();
    let mut form = FormState::new(&schema);
    form.set_value("email", "jordan@example.com".to_string());
    form.set_value("password", "wrong".to_string());

    assert!(form.begin_submit(&schema));
    form.resolve(interpret_response(false, r#"{"error":"Invalid credentials"}"#));

    match form.status() {
        SubmissionStatus::Failure(message) => assert!(message.contains("Invalid credentials")),
        other => panic!("unexpected status: {other:?}"),
    }

    // Editing re-arms the banner, and a second attempt is allowed
    form.set_value("password", "right".to_string());
    assert_eq!(*form.status(), SubmissionStatus::Idle);
    assert!(form.begin_submit(&schema));
}

#[test]
fn test_login_flow_survives_empty_failure_body() {
    let schema = login_schema();
    let mut form = FormState::new(&schema);
    form.set_value("email", "jordan@example.com".to_string());
    form.set_value("password", "pw".to_string());

    assert!(form.begin_submit(&schema));
    form.resolve(interpret_response(false, ""));

    // A bodyless 4xx still lands in Failure with a usable message
    match form.status() {
        SubmissionStatus::Failure(message) => assert!(!message.is_empty()),
        other => panic!("unexpected status: {other:?}"),
    }
}

#[tokio::test]
async fn test_submit_is_stubbed_on_the_server() {
    // The ssr build must never reach the network
    let schema = login_schema();
    let form = FormState::new(&schema);

    let outcome = submit("/api/login", &schema, form.values()).await;
    assert_eq!(outcome, Err(SubmitError::Network));
}
