use super::*;

#[test]
fn rejected_with_detail_shows_detail() {
    let err = LoginError::Rejected { status: 401, detail: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn rejected_without_detail_falls_back() {
    let err = LoginError::Rejected { status: 500, detail: None };
    assert_eq!(err.user_message(), LOGIN_FAILED_MESSAGE);
}

#[test]
fn rejected_with_empty_detail_falls_back() {
    let err = LoginError::Rejected { status: 400, detail: Some(String::new()) };
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn network_and_malformed_show_network_error() {
    assert_eq!(LoginError::Network("offline".to_owned()).user_message(), "Network error");
    let err = LoginError::MalformedResponse("no token".to_owned());
    assert_eq!(err.user_message(), "Network error");
}

#[test]
fn storage_failure_shows_login_failed() {
    let err = LoginError::from(StoreError::Unavailable);
    assert_eq!(err.user_message(), "Login failed");
}

#[test]
fn transport_error_converts_to_network() {
    let err: LoginError = TransportError::Network("connection refused".to_owned()).into();
    assert!(matches!(err, LoginError::Network(ref msg) if msg.contains("connection refused")));
}
