//! Signup against a local mock server.

mod common;

use common::{refused_base_url, MockServerFixture};
use duckmail::{
    error_codes, DuckMailClient, Error, ErrorKind, SignupError, SignupOptions, SignupOutcome,
    SignupResponse,
};
use mockito::Matcher;
use std::time::Duration;
use tokio::io::AsyncReadExt;

#[tokio::test]
async fn test_successful_signup() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup(200, r#"{"status":"valid","user":"alice123"}"#, 1)
        .await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    let outcome = session
        .signup("alice123", "alice@example.com", SignupOptions::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SignupOutcome::Accepted(SignupResponse {
            status: "valid".to_string(),
            user: "alice123".to_string(),
        })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_domain_rejections_are_outcomes() {
    let cases = [
        ("durov", "a@b.com", error_codes::UNAVAILABLE_USERNAME),
        ("agregu9hqbhqadqwdba", "test@invalid-domain.com", error_codes::FAILED_MX_CHECK),
        ("x", "x@duck.com", error_codes::DUCK_ADDRESS_NOT_ALLOWED),
    ];

    for (user, email, code) in cases {
        let mut fixture = MockServerFixture::new().await;
        let body = serde_json::json!({ "error": code }).to_string();
        let mock = fixture.mock_signup(400, &body, 1).await;

        let mut client = fixture.client();
        let session = client.session().unwrap();
        let outcome = session
            .signup(user, email, SignupOptions::default())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SignupOutcome::Rejected(SignupError {
                error: code.to_string(),
            })
        );
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup(500, r#"{"error":"internal_error"}"#, 1)
        .await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    let err = session
        .signup("x", "x@y.com", SignupOptions::default())
        .await
        .unwrap_err();

    assert!(
        matches!(err, Error::Api { status: Some(500), ref message } if message == "internal_error"),
        "unexpected error: {err}"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unstructured_4xx_is_api_error() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_signup(429, r#"{"message":"slow down"}"#, 1).await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    let err = session
        .signup("x", "x@y.com", SignupOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status_code(), Some(429));
    assert!(err.to_string().contains("Unknown API error"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_success_is_client_error() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_signup(200, "<html>maintenance</html>", 1).await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    let err = session
        .signup("x", "x@y.com", SignupOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Client);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_flags_sent_as_one() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup_matching(
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("user".into(), "agregu9hqbhqadqwdba".into()),
                Matcher::UrlEncoded("email".into(), "goodemail@gmail.com".into()),
                Matcher::UrlEncoded("disable_secure_reply".into(), "1".into()),
                Matcher::UrlEncoded("dry_run".into(), "1".into()),
            ]),
            200,
            r#"{"status":"valid","user":"agregu9hqbhqadqwdba"}"#,
            1,
        )
        .await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    let options = SignupOptions::new().disable_secure_reply(true).dry_run(true);
    let outcome = session
        .signup("agregu9hqbhqadqwdba", "goodemail@gmail.com", options)
        .await
        .unwrap();

    assert!(outcome.is_accepted());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unset_flags_are_omitted() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup_matching(
            Matcher::Exact("user=alice123&email=alice%40example.com".to_string()),
            200,
            r#"{"status":"valid","user":"alice123"}"#,
            1,
        )
        .await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    session
        .signup("alice123", "alice@example.com", SignupOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_validation_errors_never_reach_network() {
    let cases = [("", "x@y.com"), ("test", ""), ("test", "invalid-email")];

    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup(200, r#"{"status":"valid","user":"x"}"#, 0)
        .await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    for (user, email) in cases {
        let err = session
            .signup(user, email, SignupOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "user={user:?} email={email:?}");
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_connection_refused_is_connection_error() {
    let mut client = DuckMailClient::builder()
        .base_url(refused_base_url().await)
        .build()
        .unwrap();
    let session = client.session().unwrap();

    let err = session
        .signup("agregu9hqbhqadqwdba", "goodemail@gmail.com", SignupOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection, "unexpected error: {err}");
}

#[tokio::test]
async fn test_connection_reset_is_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            // dropped without answering
        }
    });

    let mut client = DuckMailClient::builder()
        .base_url(format!("http://{}/api", addr))
        .build()
        .unwrap();
    let session = client.session().unwrap();

    let err = session
        .signup("x", "x@y.com", SignupOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Connection, "unexpected error: {err}");
}

#[tokio::test]
async fn test_timeout_is_connection_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        }
    });

    let mut client = DuckMailClient::builder()
        .base_url(format!("http://{}/api", addr))
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let session = client.session().unwrap();

    let err = session
        .signup("x", "x@y.com", SignupOptions::default())
        .await
        .unwrap_err();

    match &err {
        Error::Connection(transport) => assert!(transport.is_timeout(), "not a timeout: {err}"),
        other => panic!("expected connection error, got {other}"),
    }
}

#[tokio::test]
async fn test_no_retry_on_server_error() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup(503, r#"{"error":"internal_error"}"#, 1)
        .await;

    let mut client = DuckMailClient::builder()
        .base_url(&fixture.base_url)
        .max_retries(5)
        .build()
        .unwrap();
    let session = client.session().unwrap();
    let err = session
        .signup("x", "x@y.com", SignupOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_share_session() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup(200, r#"{"status":"valid","user":"shared"}"#, 2)
        .await;

    let mut client = fixture.client();
    let session = client.session().unwrap();
    let (a, b) = tokio::join!(
        session.signup("shared", "a@example.com", SignupOptions::default()),
        session.signup("shared", "b@example.com", SignupOptions::default()),
    );

    assert!(a.unwrap().is_accepted());
    assert!(b.unwrap().is_accepted());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_signup(200, r#"{"status":"valid","user":"alice123"}"#, 1)
        .await;

    let mut client = DuckMailClient::builder()
        .base_url(format!("{}/", fixture.base_url))
        .build()
        .unwrap();
    let session = client.session().unwrap();
    session
        .signup("alice123", "alice@example.com", SignupOptions::default())
        .await
        .unwrap();

    mock.assert_async().await;
}
