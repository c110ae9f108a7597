//! Panel sessions and login throttling.
//!
//! A successful login mints a UUID bearer token kept in an in-memory
//! set; logout revokes it. Login attempts share one sliding window: at
//! single-operator scale a per-address limiter buys nothing.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, header};

/// Maximum login attempts per window.
const LOGIN_ATTEMPTS: usize = 5;
/// Sliding-window length for login throttling.
const LOGIN_WINDOW: Duration = Duration::from_secs(60);

/// In-memory set of live bearer tokens.
#[derive(Debug, Default)]
pub struct SessionSet {
    tokens: Mutex<HashSet<String>>,
}

impl SessionSet {
    /// Create an empty session set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint and register a fresh token.
    pub fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.tokens.lock().unwrap().insert(token.clone());
        token
    }

    /// Whether `token` belongs to a live session.
    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains(token)
    }

    /// Revoke a token. Returns whether it existed.
    pub fn revoke(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().remove(token)
    }
}

/// Sliding-window throttle for login attempts.
#[derive(Debug, Default)]
pub struct LoginThrottle {
    attempts: Mutex<VecDeque<Instant>>,
}

impl LoginThrottle {
    /// Create an empty throttle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an attempt. Returns `false` when the window is full and
    /// the attempt must be refused.
    pub fn allow(&self) -> bool {
        let now = Instant::now();
        let mut attempts = self.attempts.lock().unwrap();
        while let Some(&oldest) = attempts.front() {
            if now.duration_since(oldest) >= LOGIN_WINDOW {
                attempts.pop_front();
            } else {
                break;
            }
        }
        if attempts.len() >= LOGIN_ATTEMPTS {
            return false;
        }
        attempts.push_back(now);
        true
    }
}

/// Pull the bearer token out of an `Authorization` header, if present.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
