use tracing::{info, instrument};

use super::domain::{LeadRequest, LeadRequestError, LeadScoreResponse};
use super::features::{FeatureExtractor, InvalidUrl, PageFetcher};
use super::scoring::score_lead;

/// Validates a lead, extracts website features, and scores the result.
pub struct LeadScoringService<F> {
    extractor: FeatureExtractor<F>,
}

impl<F> LeadScoringService<F>
where
    F: PageFetcher + 'static,
{
    pub fn new(fetcher: F) -> Self {
        Self {
            extractor: FeatureExtractor::new(fetcher),
        }
    }

    /// Only input validation can fail; an unreachable website is scored, not reported.
    #[instrument(skip_all, fields(business = %request.business_name, url = %request.website_url))]
    pub async fn score(
        &self,
        request: LeadRequest,
    ) -> Result<LeadScoreResponse, LeadRequestError> {
        request.validate()?;

        let (features, meta) = self.extractor.extract(&request.website_url).await?;
        let scored = score_lead(
            &request.business_name,
            &request.category,
            &request.town,
            &request.notes,
            &features,
            request.debug,
        );

        info!(
            score = scored.score,
            band = scored.band().label(),
            confidence = scored.confidence,
            status_ok = features.status_ok,
            "scored lead"
        );

        Ok(LeadScoreResponse::new(scored, meta))
    }
}

impl From<InvalidUrl> for LeadRequestError {
    fn from(_: InvalidUrl) -> Self {
        Self::MissingWebsiteUrl
    }
}
