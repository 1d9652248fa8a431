// ABOUTME: Shared HTTP client with configured timeouts and transient-error retry
// ABOUTME: Singleton reqwest client plus exponential backoff for 429/5xx responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::HttpClientSettings;
use crate::errors::{AppError, ErrorCode};

/// Statuses worth retrying
const TRANSIENT_STATUSES: [u16; 5] = [429, 500, 502, 503, 529];

/// Maximum characters of an error body kept in messages and logs
const MAX_BODY_PREVIEW: usize = 200;

/// Configured timeout values for the shared client
static CLIENT_SETTINGS: OnceLock<HttpClientSettings> = OnceLock::new();

/// Global shared HTTP client with configured timeouts
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Initialize the shared HTTP client settings
///
/// Only the first call has an effect. If never called, defaults are used
/// (30s timeout, 10s connect timeout).
pub fn initialize_shared_client(settings: HttpClientSettings) {
    if CLIENT_SETTINGS.set(settings).is_err() {
        debug!("Shared HTTP client settings already initialized");
    }
}

/// Get the shared HTTP client for collaborator API calls
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let settings = CLIENT_SETTINGS.get().copied().unwrap_or_default();

        ClientBuilder::new()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

fn is_transient(status: StatusCode) -> bool {
    TRANSIENT_STATUSES.contains(&status.as_u16())
}

fn preview(body: &str) -> String {
    body.chars().take(MAX_BODY_PREVIEW).collect()
}

fn status_error(service: &str, status: StatusCode, body: &str) -> AppError {
    let message = format!("HTTP {status}: {}", preview(body));
    if status == StatusCode::TOO_MANY_REQUESTS {
        AppError::new(ErrorCode::ExternalRateLimited, format!("{service}: {message}"))
    } else {
        AppError::external_service(service, message)
    }
}

/// Send a request, retrying transient statuses with exponential backoff (1s, 2s, 4s, ...)
///
/// `build_request` is called fresh on each attempt because `RequestBuilder` is not
/// cloneable. Network failures (DNS, refused connection, timeout) are not retried.
///
/// # Errors
///
/// Returns `ExternalServiceUnavailable` on network failure, `ExternalRateLimited` when
/// the final attempt is throttled and `ExternalServiceError` for any other non-success status
pub async fn send_with_retry(
    build_request: impl Fn() -> RequestBuilder + Send + Sync,
    service: &str,
    max_retries: u32,
) -> Result<Response, AppError> {
    let mut attempt = 0;
    loop {
        let response = build_request()
            .send()
            .await
            .map_err(|e| AppError::external_unavailable(service, e.to_string()).with_source(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "could not read body".into());

        if !is_transient(status) || attempt >= max_retries {
            return Err(status_error(service, status, &body));
        }

        let delay = Duration::from_secs(1_u64 << attempt.min(6));
        warn!(
            service,
            %status,
            attempt = attempt + 1,
            max_attempts = max_retries + 1,
            delay_secs = delay.as_secs(),
            body = %preview(&body),
            "Transient error from external service, retrying"
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
