#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

/// Canned reply for one search term
#[derive(Clone)]
pub enum Reply {
    Envelope(Value),
    Status(StatusCode),
    Body(&'static str),
}

/// Stand-in for the OMDb search endpoint
#[derive(Clone, Default)]
pub struct FakeOmdb {
    replies: Arc<HashMap<String, Reply>>,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeOmdb {
    pub fn new(replies: Vec<(&str, Reply)>) -> Self {
        Self {
            replies: Arc::new(
                replies
                    .into_iter()
                    .map(|(query, reply)| (query.to_string(), reply))
                    .collect(),
            ),
            seen: Arc::default(),
        }
    }

    /// Query parameters of every request received so far
    pub fn seen(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().unwrap().clone()
    }

    /// Starts serving on an ephemeral port and returns the base URL
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/", get(search))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn search(
    State(fake): State<FakeOmdb>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("s").cloned().unwrap_or_default();
    fake.seen.lock().unwrap().push(params);

    match fake.replies.get(&query) {
        Some(Reply::Envelope(body)) => Json(body.clone()).into_response(),
        Some(Reply::Status(status)) => (*status, "upstream unavailable").into_response(),
        Some(Reply::Body(body)) => (StatusCode::OK, *body).into_response(),
        None => Json(not_found()).into_response(),
    }
}

/// URL of a local port with nothing listening on it
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn batman_envelope() -> Value {
    json!({
        "Search": [
            {
                "Title": "Batman Begins",
                "Year": "2005",
                "imdbID": "tt0372784",
                "Type": "movie",
                "Poster": "https://m.media-amazon.com/images/M/begins.jpg"
            },
            {
                "Title": "The Batman",
                "Year": "2022",
                "imdbID": "tt1877830",
                "Type": "movie",
                "Poster": "N/A"
            }
        ],
        "totalResults": "2",
        "Response": "True"
    })
}

pub fn not_found() -> Value {
    json!({ "Response": "False", "Error": "Movie not found!" })
}
