// Common utilities for integration tests

use mockito::{Mock, ServerGuard};
use salt_client::prelude::*;

/// Login response as returned by rest_cherrypy
pub const LOGIN_BODY: &str = r#"{"return": [{
    "token": "abc123",
    "start": 1700000000.0,
    "expire": 4102444800.0,
    "user": "saltdev",
    "eauth": "pam",
    "perms": [".*", "@wheel", "@runner", "@jobs"]
}]}"#;

/// Creates a client pointed at the mock server
pub fn create_test_client(server: &ServerGuard) -> Client {
    setup_logger();
    Client::new(&server.url(), "saltdev", "saltdev", "pam", false).expect("client")
}

/// Creates a client that already holds the token `abc123`
pub async fn create_authenticated_client(server: &ServerGuard) -> Client {
    let client = create_test_client(server);
    client.set_token("abc123").await;
    client
}

/// Mocks a JSON endpoint that requires the `abc123` token
pub async fn mock_json(server: &mut ServerGuard, method: &str, path: &str, body: &str) -> Mock {
    server
        .mock(method, path)
        .match_header("x-auth-token", "abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
