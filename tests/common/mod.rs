//! A local stand-in for the Vercel DNS API that records every request it receives.
#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use maildequate::VercelClient;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use url::Url;

pub const TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
pub struct MockProvider {
    pub status: StatusCode,
    pub list_body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockProvider {
    pub fn new(status: StatusCode, list_body: impl Into<String>) -> Self {
        MockProvider {
            status,
            list_body: list_body.into(),
            seen: Arc::default(),
        }
    }

    /// A healthy provider holding TXT records with the given values.
    pub fn with_txt_records(values: &[&str]) -> Self {
        let records: Vec<Value> = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                serde_json::json!({
                    "id": format!("rec_{i}"),
                    "slug": "",
                    "name": "",
                    "type": "TXT",
                    "value": v,
                    "creator": "user_1",
                    "created": 1_680_000_000_000_i64,
                })
            })
            .collect();
        Self::new(
            StatusCode::OK,
            serde_json::json!({ "records": records }).to_string(),
        )
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn seen_posts(&self) -> Vec<SeenRequest> {
        self.seen()
            .into_iter()
            .filter(|r| r.method == Method::POST)
            .collect()
    }

    /// Serve on an ephemeral local port, returning a client pointed at it.
    pub async fn serve(&self) -> VercelClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(record).with_state(self.clone());
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        client(&format!("http://{addr}"))
    }
}

pub fn client(base: &str) -> VercelClient {
    VercelClient::new(Url::parse(base).unwrap(), TOKEN.to_string()).unwrap()
}

async fn record(
    State(mock): State<MockProvider>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let seen = SeenRequest {
        method: method.clone(),
        path: uri.path().to_string(),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    mock.seen.lock().unwrap().push(seen);

    let body = if method == Method::GET {
        mock.list_body.clone()
    } else {
        r#"{"uid":"rec_new","updated":1680000000000}"#.to_string()
    };
    (mock.status, [(CONTENT_TYPE, "application/json")], body)
}
