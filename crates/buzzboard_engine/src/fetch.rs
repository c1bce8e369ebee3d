use std::time::Duration;

use crate::{FailureKind, FetchError, HeadlinePage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Base of the primary provider, without a trailing slash. Overridable
    /// so tests can point at a local server.
    pub primary_base_url: String,
    pub fallback_base_url: String,
    pub primary_api_key: String,
    pub fallback_api_key: String,
    pub language: String,
    pub country: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            primary_base_url: "https://newsdata.io/api/1".to_string(),
            fallback_base_url: "https://newsapi.org/v2".to_string(),
            primary_api_key: String::new(),
            fallback_api_key: String::new(),
            language: "en".to_string(),
            country: "us".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// A category as the providers spell it. The primary calls the front page
/// "top" while the fallback calls it "general"; carrying both slugs lets
/// either client serve the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuery {
    pub primary: String,
    pub fallback: String,
}

impl CategoryQuery {
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }
}

/// Typed contract of a remote headline source: one page of articles plus an
/// optional continuation cursor, given a category.
#[async_trait::async_trait]
pub trait HeadlineSource: Send + Sync {
    async fn fetch_page(
        &self,
        category: &CategoryQuery,
        page: Option<&str>,
    ) -> Result<HeadlinePage, FetchError>;
}

pub(crate) fn build_client(settings: &FetchSettings) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

pub(crate) fn check_status(response: &reqwest::Response) -> Result<(), FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}
