//! Mock upstream server for integration tests
//!
//! Implements the three `OpenAI` endpoints the gateway talks to and
//! returns canned responses, with optional failure injection.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Mock upstream that records requests and returns predictable replies
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    completion_count: AtomicU32,
    chat_count: AtomicU32,
    image_count: AtomicU32,
    /// Last request body received on any endpoint
    last_request: Mutex<Option<serde_json::Value>>,
    /// Canned completion text
    content: String,
    /// When set, every request fails with this status and body
    failure: Option<(StatusCode, serde_json::Value)>,
}

impl MockUpstream {
    /// Start the mock server with the default canned reply
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(" Hello from mock upstream ".to_owned(), None).await
    }

    /// Start a mock server with a custom completion text
    pub async fn start_with_content(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(content.to_owned(), None).await
    }

    /// Start a mock server that fails every request
    pub async fn start_failing(status: StatusCode, body: serde_json::Value) -> anyhow::Result<Self> {
        Self::start_inner(String::new(), Some((status, body))).await
    }

    async fn start_inner(
        content: String,
        failure: Option<(StatusCode, serde_json::Value)>,
    ) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            completion_count: AtomicU32::new(0),
            chat_count: AtomicU32::new(0),
            image_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
            content,
            failure,
        });

        let app = Router::new()
            .route("/v1/completions", routing::post(handle_completions))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .route("/v1/images/generations", routing::post(handle_images))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the transport
    ///
    /// Includes `/v1` since the gateway appends paths like `/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of legacy completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Number of chat completion requests received
    pub fn chat_count(&self) -> u32 {
        self.state.chat_count.load(Ordering::Relaxed)
    }

    /// Number of image generation requests received
    pub fn image_count(&self) -> u32 {
        self.state.image_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent request, if any
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Wire types matching the OpenAI format --

#[derive(Debug, Serialize)]
struct CompletionResponse {
    id: String,
    object: String,
    created: u64,
    model: String,
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Serialize)]
struct CompletionChoice {
    text: String,
    index: u32,
    finish_reason: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    id: String,
    object: String,
    created: u64,
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Serialize)]
struct ChatChoice {
    index: u32,
    message: ChatMessage,
    finish_reason: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ImageResponse {
    created: u64,
    data: Vec<ImageData>,
}

#[derive(Debug, Serialize)]
struct ImageData {
    b64_json: String,
}

// -- Handlers --

fn record(state: &MockState, body: &serde_json::Value) -> Option<(StatusCode, Json<serde_json::Value>)> {
    *state.last_request.lock().unwrap() = Some(body.clone());

    state
        .failure
        .as_ref()
        .map(|(status, failure_body)| (*status, Json(failure_body.clone())))
}

async fn handle_completions(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    if let Some(failure) = record(&state, &body) {
        return failure.into_response();
    }

    let model = body["model"].as_str().unwrap_or("unknown").to_owned();
    Json(CompletionResponse {
        id: "cmpl-mock".to_owned(),
        object: "text_completion".to_owned(),
        created: 0,
        model,
        choices: vec![CompletionChoice {
            text: state.content.clone(),
            index: 0,
            finish_reason: "stop".to_owned(),
        }],
    })
    .into_response()
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.chat_count.fetch_add(1, Ordering::Relaxed);

    if let Some(failure) = record(&state, &body) {
        return failure.into_response();
    }

    let model = body["model"].as_str().unwrap_or("unknown").to_owned();
    Json(ChatResponse {
        id: "chatcmpl-mock".to_owned(),
        object: "chat.completion".to_owned(),
        created: 0,
        model,
        choices: vec![ChatChoice {
            index: 0,
            message: ChatMessage {
                role: "assistant".to_owned(),
                content: state.content.clone(),
            },
            finish_reason: "stop".to_owned(),
        }],
    })
    .into_response()
}

async fn handle_images(
    State(state): State<Arc<MockState>>,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.image_count.fetch_add(1, Ordering::Relaxed);

    if let Some(failure) = record(&state, &body) {
        return failure.into_response();
    }

    Json(ImageResponse {
        created: 0,
        data: vec![ImageData {
            b64_json: "QUJD".to_owned(),
        }],
    })
    .into_response()
}
