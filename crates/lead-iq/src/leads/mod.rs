//! Lead scoring: website feature extraction, the scoring rubric, and the sales copy tables.

pub mod domain;
pub mod features;
pub mod recommendations;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{LeadRequest, LeadRequestError, LeadScoreResponse};
pub use features::{
    ExtractionMeta, FeatureExtractor, FetchMeta, FetchResult, HttpPageFetcher, PageFetcher,
    WebsiteFeatures,
};
pub use recommendations::NextStepBand;
pub use router::lead_router;
pub use scoring::{score_lead, CategoryKey, LeadScore, ScoringDebug};
pub use service::LeadScoringService;
