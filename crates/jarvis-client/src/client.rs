//! Webhook delivery client
//!
//! Serializes command envelopes and POSTs them to the configured webhook,
//! racing each attempt against a deadline and retrying transient failures
//! with a linearly growing delay.

use jarvis_core::{
    validate_command, ApiConfig, CommandEnvelope, JarvisError, Result,
};
use serde_json::{Map, Value};
use std::time::Duration;

/// Client for delivering command envelopes to the webhook
///
/// Cheap to clone; clones share the underlying connection pool. The client
/// does not serialize calls: concurrent invocations issue concurrent
/// requests, and any at-most-one-in-flight guarantee belongs to the caller.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl WebhookClient {
    /// Create a new client for the given endpoint settings
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint settings this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Validate and deliver a command to the webhook
    ///
    /// The command is validated first; an invalid command fails immediately
    /// with [`JarvisError::InvalidCommand`] and never issues a request. On
    /// success the raw response is returned — interpreting the body is the
    /// caller's concern. On exhaustion of the attempt budget the last error
    /// propagates unchanged.
    pub async fn send_command(
        &self,
        agent: &str,
        command: &str,
        context: Map<String, Value>,
    ) -> Result<reqwest::Response> {
        let command = validate_command(command)
            .map_err(|e| JarvisError::InvalidCommand(e.to_string()))?;

        let envelope = CommandEnvelope::new(agent, command, context);
        self.deliver(&envelope).await
    }

    /// Retry loop around single delivery attempts
    ///
    /// Waits `retry_delay_ms * attempt` between attempts, up to
    /// `retry_attempts` total attempts. Timeouts consume attempts like any
    /// other transient failure; every attempt opens a fresh deadline window.
    async fn deliver(&self, envelope: &CommandEnvelope) -> Result<reqwest::Response> {
        let url = self.config.webhook_url();
        let budget = self.config.retry_attempts.max(1);
        let mut attempt: u32 = 1;

        loop {
            tracing::debug!(
                "Delivering command for agent {} to {} (attempt {}/{})",
                envelope.agent,
                url,
                attempt,
                budget
            );

            match self.attempt_once(&url, envelope).await {
                Ok(response) => {
                    tracing::info!(
                        "Command delivered for agent {} (attempt {}, HTTP {})",
                        envelope.agent,
                        attempt,
                        response.status()
                    );
                    return Ok(response);
                }
                Err(err) if attempt >= budget => {
                    tracing::error!(
                        "Delivery failed after {} attempts: {}",
                        attempt,
                        err
                    );
                    return Err(err);
                }
                Err(err) => {
                    let delay =
                        Duration::from_millis(self.config.retry_delay_ms * u64::from(attempt));
                    tracing::warn!(
                        "Delivery attempt {}/{} failed ({}). Retrying in {:?}",
                        attempt,
                        budget,
                        err,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// One POST, racing the request against the configured deadline
    async fn attempt_once(
        &self,
        url: &str,
        envelope: &CommandEnvelope,
    ) -> Result<reqwest::Response> {
        let request = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .json(envelope)
            .send();

        let deadline = Duration::from_millis(self.config.timeout_ms);
        let response = match tokio::time::timeout(deadline, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(JarvisError::Network(e.to_string())),
            // Deadline fired: dropping the request future aborts this
            // attempt's in-flight I/O.
            Err(_) => return Err(JarvisError::Timeout(self.config.timeout_ms)),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(JarvisError::Http(status.as_u16()));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use jarvis_core::ErrorKind;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    const HOOK_PATH: &str = "/webhook/jarvis/command";

    /// Loopback webhook fixture: counts requests, records bodies, fails the
    /// first N requests with HTTP 500, and can delay responses.
    #[derive(Clone)]
    struct Hook {
        hits: Arc<AtomicU32>,
        seen: Arc<Mutex<Vec<Value>>>,
        fail_first: u32,
        latency: Duration,
    }

    async fn webhook(State(hook): State<Hook>, Json(body): Json<Value>) -> (StatusCode, String) {
        let n = hook.hits.fetch_add(1, Ordering::SeqCst) + 1;
        hook.seen.lock().unwrap().push(body);

        if !hook.latency.is_zero() {
            tokio::time::sleep(hook.latency).await;
        }

        if n <= hook.fail_first {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string())
        } else {
            (StatusCode::OK, "ack".to_string())
        }
    }

    async fn spawn_hook(fail_first: u32, latency: Duration) -> (String, Hook) {
        let hook = Hook {
            hits: Arc::new(AtomicU32::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
            fail_first,
            latency,
        };

        let app = Router::new()
            .route(HOOK_PATH, post(webhook))
            .with_state(hook.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (base_url, hook)
    }

    fn test_config(base_url: String) -> ApiConfig {
        ApiConfig {
            base_url,
            webhook_path: HOOK_PATH.to_string(),
            timeout_ms: 2000,
            retry_attempts: 3,
            retry_delay_ms: 20,
        }
    }

    #[tokio::test]
    async fn test_sends_trimmed_envelope() {
        let (base_url, hook) = spawn_hook(0, Duration::ZERO).await;
        let client = WebhookClient::new(test_config(base_url));

        let mut context = Map::new();
        context.insert("source".to_string(), Value::from("test"));

        let response = client
            .send_command("code-writer", "  write a parser  ", context)
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(hook.hits.load(Ordering::SeqCst), 1);

        let seen = hook.seen.lock().unwrap();
        let body = &seen[0];
        assert_eq!(body["agent"], "code-writer");
        assert_eq!(body["command"], "write a parser");
        assert_eq!(body["context"]["source"], "test");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_retries_then_succeeds() {
        let (base_url, hook) = spawn_hook(2, Duration::ZERO).await;
        let client = WebhookClient::new(test_config(base_url));

        let response = client
            .send_command("code-executor", "run tests", Map::new())
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert_eq!(hook.hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_delay_grows_linearly_with_attempt() {
        let (base_url, _hook) = spawn_hook(2, Duration::ZERO).await;
        let mut config = test_config(base_url);
        config.retry_delay_ms = 50;
        let client = WebhookClient::new(config);

        let started = Instant::now();
        client
            .send_command("code-executor", "run tests", Map::new())
            .await
            .unwrap();

        // Two failures: waits of 50ms then 100ms before the third attempt
        assert!(started.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test]
    async fn test_exhausts_attempt_budget() {
        let (base_url, hook) = spawn_hook(u32::MAX, Duration::ZERO).await;
        let client = WebhookClient::new(test_config(base_url));

        let err = client
            .send_command("ticket-maker", "open a ticket", Map::new())
            .await
            .unwrap_err();

        assert_eq!(hook.hits.load(Ordering::SeqCst), 3);
        assert!(matches!(err, JarvisError::Http(500)));
        assert_eq!(err.kind(), ErrorKind::Http);
    }

    #[tokio::test]
    async fn test_slow_webhook_reports_timeout() {
        let (base_url, hook) = spawn_hook(0, Duration::from_secs(5)).await;
        let mut config = test_config(base_url);
        config.timeout_ms = 100;
        config.retry_attempts = 1;
        let client = WebhookClient::new(config);

        let started = Instant::now();
        let err = client
            .send_command("prompt-hub", "find a prompt", Map::new())
            .await
            .unwrap_err();

        assert!(matches!(err, JarvisError::Timeout(100)));
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_eq!(hook.hits.load(Ordering::SeqCst), 1);
        // Aborted near the deadline, well before the webhook responds
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_timeouts_consume_retry_slots() {
        let (base_url, hook) = spawn_hook(0, Duration::from_secs(5)).await;
        let mut config = test_config(base_url);
        config.timeout_ms = 100;
        config.retry_attempts = 2;
        let client = WebhookClient::new(config);

        let err = client
            .send_command("prompt-hub", "find a prompt", Map::new())
            .await
            .unwrap_err();

        assert!(matches!(err, JarvisError::Timeout(_)));
        assert_eq!(hook.hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_network_error() {
        // Bind then drop to get a port with nothing listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let mut config = test_config(base_url);
        config.retry_attempts = 1;
        let client = WebhookClient::new(config);

        let err = client
            .send_command("code-writer", "write code", Map::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_invalid_command_never_issues_a_request() {
        let (base_url, hook) = spawn_hook(0, Duration::ZERO).await;
        let client = WebhookClient::new(test_config(base_url));

        let err = client
            .send_command("code-writer", "   ", Map::new())
            .await
            .unwrap_err();

        assert!(matches!(err, JarvisError::InvalidCommand(_)));
        assert_eq!(hook.hits.load(Ordering::SeqCst), 0);
    }
}
