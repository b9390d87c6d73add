#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use scholar_api::config::ServerConfig;
use scholar_api::router::build_app_router;
use scholar_api::state::AppState;
use scholar_core::types::GenerationRequest;
use scholar_genai::{GenAiConfig, GenAiError, TextGenerator};

/// Model name reported by [`StubGenerator`].
pub const STUB_MODEL: &str = "stub-model";

/// Build a test `ServerConfig` with safe defaults.
///
/// The static directory does not exist unless a test passes its own.
pub fn test_config(static_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        static_dir: static_dir.to_string(),
        genai: GenAiConfig::new(Some("test-key".into()), "http://127.0.0.1:9/v1beta"),
    }
}

/// Text generator that answers from a fixed script and records every
/// request it receives.
pub struct StubGenerator {
    reply: Result<String, u16>,
    api_key: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerator {
    fn new(reply: Result<String, u16>) -> Self {
        Self {
            reply,
            api_key: true,
            delay: None,
            calls: Mutex::default(),
        }
    }

    /// Always answer with `text`.
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::new(Ok(text.to_string())))
    }

    /// Always fail as if the API returned `status`.
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self::new(Err(status)))
    }

    /// Report that no API key is configured.
    pub fn without_api_key() -> Arc<Self> {
        Arc::new(Self {
            api_key: false,
            ..Self::new(Err(401))
        })
    }

    /// Answer with `text` after sleeping for `delay`.
    pub fn slow(text: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Self::new(Ok(text.to_string()))
        })
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenAiError> {
        self.calls.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GenAiError::Api {
                status: *status,
                message: "API key not valid. Please pass a valid API key.".into(),
            }),
        }
    }

    fn model(&self) -> &str {
        STUB_MODEL
    }

    fn has_api_key(&self) -> bool {
        self.api_key
    }
}

/// Build the full application router around `generator` with `config`.
pub fn build_test_app_with_config(generator: Arc<StubGenerator>, config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

/// Build the full application router around `generator`, serving static
/// files from `static_dir`.
pub fn build_test_app_with_static(generator: Arc<StubGenerator>, static_dir: &str) -> Router {
    build_test_app_with_config(generator, test_config(static_dir))
}

/// Build the full application router around `generator`.
pub fn build_test_app(generator: Arc<StubGenerator>) -> Router {
    build_test_app_with_static(generator, "does-not-exist")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// GET `uri` carrying an inbound `x-request-id`.
pub async fn get_with_request_id(app: Router, uri: &str, request_id: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("x-request-id", request_id)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
