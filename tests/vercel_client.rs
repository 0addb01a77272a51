mod common;

use axum::http::{Method, StatusCode};
use common::{client, MockProvider, TOKEN};
use maildequate::error::Error;
use maildequate::records::{RecordProvider, RecordType};
use serde_json::json;

#[tokio::test]
async fn list_records_is_an_authenticated_get() {
    let mock = MockProvider::with_txt_records(&["forward-email=alice:bob@example.org"]);
    let vercel = mock.serve().await;

    let set = vercel.list_records("example.com").await.unwrap();
    assert_eq!(set.records.len(), 1);
    assert_eq!(set.records[0].record.record_type, RecordType::Txt);
    assert_eq!(
        set.records[0].record.value,
        "forward-email=alice:bob@example.org"
    );

    let seen = mock.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, Method::GET);
    assert_eq!(seen[0].path, "/v4/domains/example.com/records");
    assert_eq!(
        seen[0].authorization.as_deref(),
        Some(format!("Bearer {TOKEN}").as_str())
    );
}

#[tokio::test]
async fn create_txt_record_posts_apex_txt() {
    let mock = MockProvider::with_txt_records(&[]);
    let vercel = mock.serve().await;

    vercel
        .create_txt_record("example.com", "forward-email=alice:bob@example.org")
        .await
        .unwrap();

    let posts = mock.seen_posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].path, "/v4/domains/example.com/records");
    assert_eq!(
        posts[0].authorization.as_deref(),
        Some(format!("Bearer {TOKEN}").as_str())
    );
    assert_eq!(
        posts[0].body,
        Some(json!({
            "name": "",
            "type": "TXT",
            "value": "forward-email=alice:bob@example.org",
        }))
    );
}

#[tokio::test]
async fn error_status_is_a_provider_error() {
    let mock = MockProvider::new(StatusCode::FORBIDDEN, r#"{"error":{"code":"forbidden"}}"#);
    let vercel = mock.serve().await;

    match vercel.list_records("example.com").await {
        Err(Error::Provider(status)) => assert_eq!(status, StatusCode::FORBIDDEN),
        other => panic!("expected provider error, got {other:?}"),
    }
    match vercel.create_txt_record("example.com", "v").await {
        Err(err @ Error::Provider(_)) => {
            assert_eq!(err.to_string(), "DNS provider responded 403 Forbidden");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let mock = MockProvider::new(StatusCode::OK, "<html>maintenance</html>");
    let vercel = mock.serve().await;

    assert!(matches!(
        vercel.list_records("example.com").await,
        Err(Error::Decode(_))
    ));

    let mock = MockProvider::new(StatusCode::OK, r#"{"records": {"name": "x"}}"#);
    let vercel = mock.serve().await;
    assert!(matches!(
        vercel.list_records("example.com").await,
        Err(Error::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_provider_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let vercel = client(&format!("http://{addr}"));
    assert!(matches!(
        vercel.list_records("example.com").await,
        Err(Error::Transport(_))
    ));
    assert!(matches!(
        vercel.create_txt_record("example.com", "v").await,
        Err(Error::Transport(_))
    ));
}
