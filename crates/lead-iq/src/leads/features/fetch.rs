use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use reqwest::Client;

use super::FetchResult;
use crate::config::FetchConfig;

const ACCEPT_HTML: &str = "text/html,*/*;q=0.8";
const MAX_REDIRECTS: usize = 10;

/// Returned when a website URL is blank after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("website_url is required")]
pub struct InvalidUrl;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Trim the input and default to `https://` when no http(s) scheme is present.
pub fn normalize_url(raw: &str) -> Result<String, InvalidUrl> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(InvalidUrl);
    }

    let has_scheme = ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .unwrap_or(false)
    });

    if has_scheme {
        Ok(url.to_string())
    } else {
        Ok(format!("https://{url}"))
    }
}

/// Source of page bodies for the extractor. Implementations must not return errors;
/// failures are reported through [`FetchResult::error`].
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult;
}

/// Single GET per call with the configured user agent and timeout. No retries.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn from_config(config: &FetchConfig) -> Result<Self, ExtractorError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        let response = match self.client.get(url).header(ACCEPT, ACCEPT_HTML).send().await {
            Ok(response) => response,
            Err(err) => return FetchResult::failed(url, err.to_string()),
        };

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();

        match response.text().await {
            Ok(html) => FetchResult {
                url: final_url,
                status_code: Some(status_code),
                html,
                error: None,
            },
            Err(err) => FetchResult {
                url: final_url,
                status_code: Some(status_code),
                html: String::new(),
                error: Some(err.to_string()),
            },
        }
    }
}
