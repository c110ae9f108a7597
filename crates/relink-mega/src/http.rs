//! HTTP backend abstraction for the Mega control API.
//!
//! A trait-based backend keeps the client logic testable with canned
//! responses. The production implementation uses reqwest with a bounded
//! timeout and no retries: one failed attempt aborts the conversion.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{MegaError, MegaResult};

/// Trait for HTTP backends that can POST JSON and return the reply body.
///
/// This is an implementation detail - external code should use
/// [`MegaClient`](crate::MegaClient) through the core `SourceResolver`
/// port.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// POST a JSON body to a URL and deserialize the JSON reply.
    async fn post_json(&self, url: &Url, body: &serde_json::Value)
    -> MegaResult<serde_json::Value>;
}

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given request timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_json(
        &self,
        url: &Url,
        body: &serde_json::Value,
    ) -> MegaResult<serde_json::Value> {
        let response = self.client.post(url.as_str()).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MegaError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let data = response.json().await?;
        Ok(data)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// A fake HTTP backend that replays canned responses and records the
    /// requests it saw.
    pub struct FakeBackend {
        responses: Mutex<Vec<MegaResult<serde_json::Value>>>,
        pub requests: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl FakeBackend {
        /// Create a fake backend that answers with `response` once.
        pub fn replying(response: MegaResult<serde_json::Value>) -> Self {
            Self {
                responses: Mutex::new(vec![response]),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn post_json(
            &self,
            url: &Url,
            body: &serde_json::Value,
        ) -> MegaResult<serde_json::Value> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), body.clone()));
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| panic!("FakeBackend out of canned responses"))
        }
    }
}
