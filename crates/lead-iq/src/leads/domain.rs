use serde::{Deserialize, Serialize};

use super::features::ExtractionMeta;
use super::scoring::{LeadScore, ScoringDebug};

pub const DEFAULT_CATEGORY: &str = "default";
const MIN_WEBSITE_URL_LEN: usize = 3;

/// Lead submitted for scoring over HTTP or the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub business_name: String,
    pub website_url: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub town: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub debug: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl LeadRequest {
    pub fn new(business_name: impl Into<String>, website_url: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            website_url: website_url.into(),
            category: default_category(),
            town: String::new(),
            notes: String::new(),
            debug: false,
        }
    }

    pub fn validate(&self) -> Result<(), LeadRequestError> {
        if self.business_name.trim().is_empty() {
            return Err(LeadRequestError::MissingBusinessName);
        }

        let url = self.website_url.trim();
        if url.is_empty() {
            return Err(LeadRequestError::MissingWebsiteUrl);
        }
        if url.chars().count() < MIN_WEBSITE_URL_LEN {
            return Err(LeadRequestError::WebsiteUrlTooShort {
                min: MIN_WEBSITE_URL_LEN,
            });
        }

        Ok(())
    }
}

/// Rejected lead input. Fetch failures are never reported here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadRequestError {
    #[error("business_name is required")]
    MissingBusinessName,
    #[error("website_url is required")]
    MissingWebsiteUrl,
    #[error("website_url must be at least {min} characters")]
    WebsiteUrlTooShort { min: usize },
}

/// Payload returned by both the HTTP endpoint and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScoreResponse {
    pub score: u8,
    pub reasons: Vec<String>,
    pub recommended_offer: String,
    pub outreach_opener: String,
    pub next_step: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<ScoringDebug>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ExtractionMeta>,
}

impl LeadScoreResponse {
    /// `meta` is kept only when the score carries a debug payload.
    pub fn new(score: LeadScore, meta: ExtractionMeta) -> Self {
        let LeadScore {
            score,
            reasons,
            recommended_offer,
            outreach_opener,
            next_step,
            confidence,
            debug,
        } = score;
        let meta = debug.as_ref().map(|_| meta);

        Self {
            score,
            reasons,
            recommended_offer,
            outreach_opener,
            next_step,
            confidence,
            debug,
            meta,
        }
    }
}
