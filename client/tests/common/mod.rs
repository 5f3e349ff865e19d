//! In-process stand-in for the summarizing service.

#![allow(dead_code)]

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One multipart part as the service saw it.
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// How the stub answers.
#[derive(Debug, Clone)]
pub enum Reply {
    Summary(String),
    Status(StatusCode, Value),
    Raw(StatusCode, String),
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    received: Arc<Mutex<Vec<ReceivedPart>>>,
}

pub struct Stub {
    pub url: String,
    pub received: Arc<Mutex<Vec<ReceivedPart>>>,
}

impl Stub {
    pub fn parts(&self) -> Vec<ReceivedPart> {
        self.received.lock().unwrap().clone()
    }
}

fn router(reply: Reply, received: Arc<Mutex<Vec<ReceivedPart>>>) -> Router {
    Router::new()
        .route("/api/simplify", post(simplify))
        .with_state(StubState { reply, received })
}

async fn simplify(State(state): State<StubState>, mut multipart: Multipart) -> Response {
    while let Ok(Some(field)) = multipart.next_field().await {
        let part = ReceivedPart {
            field: field.name().unwrap_or("").to_string(),
            file_name: field.file_name().map(str::to_string),
            content_type: field.content_type().map(str::to_string),
            bytes: field.bytes().await.map(|b| b.to_vec()).unwrap_or_default(),
        };
        state.received.lock().unwrap().push(part);
    }

    match state.reply {
        Reply::Summary(summary) => Json(json!({ "summary": summary, "source_type": "pdf" })).into_response(),
        Reply::Status(status, body) => (status, Json(body)).into_response(),
        Reply::Raw(status, body) => (status, body).into_response(),
    }
}

/// Serve the stub on the current runtime.
pub async fn spawn_stub(reply: Reply) -> Stub {
    let received = Arc::new(Mutex::new(Vec::new()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(reply, received.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Stub {
        url: endpoint(addr),
        received,
    }
}

/// Serve the stub on its own runtime thread, for tests that block.
pub fn spawn_stub_thread(reply: Reply) -> Stub {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = router(reply, received.clone());
    let (tx, rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    Stub {
        url: endpoint(rx.recv().unwrap()),
        received,
    }
}

/// An endpoint nothing listens on.
pub async fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    endpoint(addr)
}

fn endpoint(addr: SocketAddr) -> String {
    format!("http://{}/api/simplify", addr)
}
