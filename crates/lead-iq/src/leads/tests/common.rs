use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::leads::features::{FetchResult, PageFetcher, WebsiteFeatures};
use crate::leads::LeadScoringService;

pub(super) const JOES_PIZZA_HTML: &str = r#"
<html>
  <head><title>Joe's Pizza</title></head>
  <body>
    <h1>Joe's Pizza</h1>
    <p>Book a table or order online for pickup.</p>
    <p>Call (515) 555-0199 or write to orders@joespizza.example</p>
    <form action="/contact"><textarea name="message"></textarea></form>
    <section>Testimonials from our regulars</section>
  </body>
</html>
"#;

/// Serves canned pages by URL; unknown URLs behave like a DNS failure.
#[derive(Default, Clone)]
pub(super) struct StubFetcher {
    pages: HashMap<String, FetchResult>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StubFetcher {
    pub(super) fn with_page(mut self, url: &str, status: u16, html: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchResult {
                url: url.to_string(),
                status_code: Some(status),
                html: html.to_string(),
                error: None,
            },
        );
        self
    }

    pub(super) fn requested(&self) -> Vec<String> {
        self.requested.lock().expect("stub mutex poisoned").clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.requested
            .lock()
            .expect("stub mutex poisoned")
            .push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .unwrap_or_else(|| FetchResult::failed(url, "dns error: no such host"))
    }
}

pub(super) fn joes_pizza_fetcher() -> StubFetcher {
    StubFetcher::default().with_page("https://joespizza.example", 200, JOES_PIZZA_HTML)
}

pub(super) fn build_service(fetcher: StubFetcher) -> Arc<LeadScoringService<StubFetcher>> {
    Arc::new(LeadScoringService::new(fetcher))
}

pub(super) fn reachable_features() -> WebsiteFeatures {
    WebsiteFeatures {
        url: "https://joespizza.example".to_string(),
        status_ok: true,
        has_https: true,
        has_booking: true,
        has_contact_form: true,
        has_live_chat: false,
        has_email: true,
        has_phone: true,
        has_reviews: true,
        has_pricing: false,
        has_careers: false,
        has_locations: false,
        cms_hint: None,
        load_seconds_est: None,
        word_count: 120,
    }
}

pub(super) fn all_signals(status_ok: bool, mask: u16) -> WebsiteFeatures {
    let bit = |n: u16| mask & (1 << n) != 0;
    WebsiteFeatures {
        url: "https://lead.example".to_string(),
        status_ok,
        has_https: bit(0),
        has_booking: bit(1),
        has_contact_form: bit(2),
        has_live_chat: bit(3),
        has_email: bit(4),
        has_phone: bit(5),
        has_reviews: bit(6),
        has_pricing: bit(7),
        has_careers: bit(8),
        has_locations: bit(9),
        cms_hint: None,
        load_seconds_est: None,
        word_count: 0,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
