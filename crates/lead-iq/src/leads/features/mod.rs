//! Website feature extraction.
//!
//! A fetch never fails the request: transport errors and non-2xx/3xx responses produce a
//! fully populated [`WebsiteFeatures`] with `status_ok = false` and every presence signal off.

mod detectors;
pub mod fetch;

pub use detectors::{detect_cms, PageSignals};
pub use fetch::{normalize_url, ExtractorError, HttpPageFetcher, InvalidUrl, PageFetcher};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Presence signals derived from one fetch of a business website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteFeatures {
    pub url: String,
    pub status_ok: bool,
    pub has_https: bool,
    pub has_booking: bool,
    pub has_contact_form: bool,
    pub has_live_chat: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_reviews: bool,
    pub has_pricing: bool,
    pub has_careers: bool,
    pub has_locations: bool,
    pub cms_hint: Option<String>,
    /// Reserved; never populated and never scored.
    pub load_seconds_est: Option<f64>,
    pub word_count: usize,
}

impl WebsiteFeatures {
    /// Record for a site that could not be fetched. Only `has_https` is still derived from the URL.
    pub fn unreachable(url: impl Into<String>) -> Self {
        let url = url.into();
        let has_https = is_https(&url);
        Self::from_signals(url, false, has_https, PageSignals::default())
    }

    fn from_signals(url: String, status_ok: bool, has_https: bool, signals: PageSignals) -> Self {
        Self {
            url,
            status_ok,
            has_https,
            has_booking: signals.has_booking,
            has_contact_form: signals.has_contact_form,
            has_live_chat: signals.has_live_chat,
            has_email: signals.has_email,
            has_phone: signals.has_phone,
            has_reviews: signals.has_reviews,
            has_pricing: signals.has_pricing,
            has_careers: signals.has_careers,
            has_locations: signals.has_locations,
            cms_hint: signals.cms_hint.map(str::to_string),
            load_seconds_est: None,
            word_count: signals.word_count,
        }
    }
}

/// Raw outcome of a page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    pub url: String,
    pub status_code: Option<u16>,
    pub html: String,
    pub error: Option<String>,
}

impl FetchResult {
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status_code: None,
            html: String::new(),
            error: Some(error.into()),
        }
    }

    /// 2xx/3xx final status with no transport error.
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && matches!(self.status_code, Some(code) if (200..400).contains(&code))
    }

    pub fn meta(&self) -> FetchMeta {
        FetchMeta {
            final_url: self.url.clone(),
            status_code: self.status_code,
            error: self.error.clone(),
        }
    }
}

/// Fetch diagnostics echoed in debug responses. Scoring never reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchMeta {
    pub final_url: String,
    pub status_code: Option<u16>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMeta {
    pub fetch: FetchMeta,
    pub features_raw: WebsiteFeatures,
}

/// Derive the feature record for an already fetched page.
pub fn features_from_fetch(fetch: &FetchResult) -> WebsiteFeatures {
    if !fetch.is_ok() {
        return WebsiteFeatures::unreachable(fetch.url.clone());
    }

    let signals = PageSignals::from_html(&fetch.html);
    WebsiteFeatures::from_signals(fetch.url.clone(), true, is_https(&fetch.url), signals)
}

fn is_https(url: &str) -> bool {
    url.get(..8)
        .map(|scheme| scheme.eq_ignore_ascii_case("https://"))
        .unwrap_or(false)
}

/// Fetches a website and turns it into a [`WebsiteFeatures`] record.
pub struct FeatureExtractor<F> {
    fetcher: F,
}

impl<F> FeatureExtractor<F>
where
    F: PageFetcher,
{
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fails only when `website_url` is blank.
    pub async fn extract(
        &self,
        website_url: &str,
    ) -> Result<(WebsiteFeatures, ExtractionMeta), InvalidUrl> {
        let url = normalize_url(website_url)?;
        let fetched = self.fetcher.fetch(&url).await;

        if let Some(error) = &fetched.error {
            debug!(%url, %error, "website fetch failed");
        }

        let features = features_from_fetch(&fetched);
        debug!(
            url = %features.url,
            status_ok = features.status_ok,
            word_count = features.word_count,
            "extracted website features"
        );

        let meta = ExtractionMeta {
            fetch: fetched.meta(),
            features_raw: features.clone(),
        };
        Ok((features, meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_page(url: &str, html: &str) -> FetchResult {
        FetchResult {
            url: url.to_string(),
            status_code: Some(200),
            html: html.to_string(),
            error: None,
        }
    }

    #[test]
    fn redirects_count_as_reachable() {
        let mut fetched = ok_page("https://example.com/", "<p>hi</p>");
        fetched.status_code = Some(301);
        assert!(fetched.is_ok());
        fetched.status_code = Some(404);
        assert!(!fetched.is_ok());
    }

    #[test]
    fn http_error_discards_page_content() {
        let mut fetched = ok_page(
            "https://example.com/missing",
            "<p>Book an appointment, call 555-123-4567, read our reviews</p>",
        );
        fetched.status_code = Some(404);

        let features = features_from_fetch(&fetched);

        assert!(!features.status_ok);
        assert!(features.has_https);
        assert!(!features.has_booking);
        assert!(!features.has_phone);
        assert!(!features.has_reviews);
        assert_eq!(features.word_count, 0);
        assert_eq!(features.cms_hint, None);
    }

    #[test]
    fn transport_error_is_unreachable_even_with_status() {
        let fetched = FetchResult {
            url: "http://example.com".to_string(),
            status_code: Some(200),
            html: String::new(),
            error: Some("connection reset".to_string()),
        };

        let features = features_from_fetch(&fetched);

        assert!(!features.status_ok);
        assert!(!features.has_https);
    }

    #[test]
    fn https_detection_is_case_insensitive() {
        let features = features_from_fetch(&ok_page("HTTPS://EXAMPLE.COM", ""));
        assert!(features.has_https);
        assert!(features.status_ok);
        assert_eq!(features.load_seconds_est, None);
    }
}
