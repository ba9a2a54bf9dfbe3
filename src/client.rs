//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Ods.
//! The Ods project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Ods HTTP Client Module
//!
//! JSON-returning HTTP transport for the statistics engine. The engine only
//! depends on the [`OdsJsonFetch`] trait, so tests can substitute in-memory
//! endpoints; [`OdsHttpClient`] is the production implementation backed by
//! a blocking reqwest client.
//!
//! Every dispatched request is preceded by a fixed pause ([`OdsRateLimit`],
//! default 500 ms) and increments a per-client request counter that callers
//! can read and reset for per-run diagnostics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use serde_json::Value;

use crate::errors::{OdsError, Result};

/// Default pause applied before every remote request.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(500);

/// Fixed-interval rate-limiting policy applied before each request.
///
/// This is an unconditional throttle, not an adaptive backoff: the same
/// pause runs before every request regardless of prior outcomes.
#[derive(Clone, Debug)]
pub struct OdsRateLimit {
    interval: Duration,
}

impl OdsRateLimit {
    /// Creates a policy with the given inter-request interval.
    pub fn new(interval: Duration) -> Self {
        OdsRateLimit { interval }
    }

    /// Returns the configured inter-request interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks the calling thread for the configured interval.
    pub fn pause(&self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

impl Default for OdsRateLimit {
    fn default() -> Self {
        OdsRateLimit {
            interval: DEFAULT_REQUEST_INTERVAL,
        }
    }
}

/// Narrow transport seam used by every component that talks to the remote
/// dataset.
///
/// Implementations must return the parsed JSON body of a successful GET, or
/// an [`OdsError::Transport`] carrying the HTTP status and requested URL
/// when the response is not successful.
pub trait OdsJsonFetch {
    /// Issues a GET request and parses the response body as JSON.
    fn get_json(&self, url: &str) -> Result<Value>;
}

/// Production JSON client backed by `reqwest::blocking`.
pub struct OdsHttpClient {
    http: reqwest::blocking::Client,
    rate_limit: OdsRateLimit,
    request_count: AtomicU64,
}

impl OdsHttpClient {
    /// Creates a client with the default 500 ms rate limit.
    pub fn new() -> Self {
        Self::with_rate_limit(OdsRateLimit::default())
    }

    /// Creates a client with an explicit rate-limiting policy.
    pub fn with_rate_limit(rate_limit: OdsRateLimit) -> Self {
        OdsHttpClient {
            http: reqwest::blocking::Client::new(),
            rate_limit,
            request_count: AtomicU64::new(0),
        }
    }

    /// Number of requests dispatched by this client since creation or the
    /// last reset.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Resets the request counter; call before a run for a per-run count.
    pub fn reset_request_count(&self) {
        self.request_count.store(0, Ordering::Relaxed);
    }
}

impl Default for OdsHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OdsJsonFetch for OdsHttpClient {
    fn get_json(&self, url: &str) -> Result<Value> {
        self.rate_limit.pause();
        self.request_count.fetch_add(1, Ordering::Relaxed);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| OdsError::Io(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OdsError::transport(status.as_u16(), url));
        }

        response
            .json()
            .map_err(|e| OdsError::Serde(format!("invalid JSON from {}: {}", url, e)))
    }
}
