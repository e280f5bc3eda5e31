//! Credentials travel in query strings, so every error and debug rendering
//! must be checked for the password.

use shareonline_core::{ClientConfig, ShareOnlineClient, ShareOnlineError};

const PASSWORD: &str = "s3cr3t-pa55";

fn unreachable_client() -> ShareOnlineClient {
    // Port 9 (discard) is closed on loopback in test environments.
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:9")
        .with_timeouts(2, 5);
    ShareOnlineClient::with_config("bob", PASSWORD, config).expect("client")
}

fn assert_no_password(err: &ShareOnlineError) {
    let display = err.to_string();
    let debug = format!("{err:?}");
    assert!(!display.contains(PASSWORD), "password in Display: {display}");
    assert!(!debug.contains(PASSWORD), "password in Debug: {debug}");
}

#[tokio::test]
async fn test_auth_network_error_hides_password() {
    let err = unreachable_client().auth().await.unwrap_err();
    assert!(err.is_transport(), "Expected transport error, got: {err:?}");
    assert_no_password(&err);
}

#[tokio::test]
async fn test_resolve_download_url_network_error_hides_password() {
    let err = unreachable_client()
        .resolve_download_url("ABC123")
        .await
        .unwrap_err();
    assert!(err.is_transport(), "Expected transport error, got: {err:?}");
    assert_no_password(&err);
}

#[test]
fn test_download_network_error_hides_password() {
    let client = unreachable_client();
    let mut sink = Vec::new();
    let err = tokio_test::block_on(client.download("ABC123", &mut sink)).unwrap_err();
    assert_no_password(&err);
}

#[test]
fn test_client_debug_hides_password() {
    let rendered = format!("{:?}", unreachable_client());
    assert!(!rendered.contains(PASSWORD), "password in Debug: {rendered}");
}
