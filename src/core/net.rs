// src/core/net.rs
//
// Blocking HTTP behind a small trait so the pipelines can run offline.
// No retries anywhere: a transport error ends the operation that hit it.

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub trait Fetch: Send + Sync {
    /// GET the page body. Non-2xx is `Error::Status`.
    fn get_text(&self, url: &Url) -> Result<String>;

    /// Header-only existence check; returns the status code.
    fn probe(&self, url: &Url) -> Result<u16>;
}

#[inline]
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &Url) -> Result<String> {
        let t = std::time::Instant::now();
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        if !is_success(status) {
            return Err(Error::Status { url: url.to_string(), status });
        }
        let body = resp.text()?;
        debug!("GET {url} → {status} ({} bytes) in {:?}", body.len(), t.elapsed());
        Ok(body)
    }

    fn probe(&self, url: &Url) -> Result<u16> {
        let status = self.client.head(url.clone()).send()?.status().as_u16();
        debug!("HEAD {url} → {status}");
        Ok(status)
    }
}

/// Canned pages for tests: anything not registered answers 404.
#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct StaticFetch {
        pages: HashMap<String, String>,
        pub gets: Mutex<Vec<String>>,
    }

    impl StaticFetch {
        pub fn new() -> Self { Self::default() }

        pub fn page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(s!(url), s!(body));
            self
        }

        pub fn get_count(&self) -> usize {
            self.gets.lock().map(|g| g.len()).unwrap_or(0)
        }
    }

    impl Fetch for StaticFetch {
        fn get_text(&self, url: &Url) -> Result<String> {
            if let Ok(mut g) = self.gets.lock() {
                g.push(url.to_string());
            }
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| Error::Status { url: url.to_string(), status: 404 })
        }

        fn probe(&self, url: &Url) -> Result<u16> {
            Ok(if self.pages.contains_key(url.as_str()) { 200 } else { 404 })
        }
    }
}
