mod category;
mod notes;
pub(crate) mod rules;

pub use category::CategoryKey;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::features::WebsiteFeatures;
use super::recommendations::{self, NextStepBand};

const BASE_CONFIDENCE: f64 = 0.55;
const MIN_CONFIDENCE: f64 = 0.20;
const MAX_CONFIDENCE: f64 = 0.95;
const MAX_REASONS: usize = 5;
const FALLBACK_REASON: &str =
    "Looks like a solid fit for a simple lead capture and follow up system.";

/// Scored lead with the sales recommendations derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadScore {
    pub score: u8,
    pub reasons: Vec<String>,
    pub recommended_offer: String,
    pub outreach_opener: String,
    pub next_step: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<ScoringDebug>,
}

impl LeadScore {
    pub fn band(&self) -> NextStepBand {
        NextStepBand::from_score(self.score)
    }
}

/// Echo of the scoring inputs, returned only on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDebug {
    pub biz_name: String,
    pub category: String,
    pub category_key: CategoryKey,
    pub town: String,
    pub notes: String,
    pub features: WebsiteFeatures,
}

/// Score a lead from its website features and sales notes.
///
/// Deterministic and infallible: unknown categories score as [`CategoryKey::Default`] and
/// `town` is only carried into the debug payload.
pub fn score_lead(
    biz_name: &str,
    category: &str,
    town: &str,
    notes: &str,
    features: &WebsiteFeatures,
    include_debug: bool,
) -> LeadScore {
    let mut score: i32 = 0;
    let mut confidence = BASE_CONFIDENCE;
    let mut reasons: Vec<&'static str> = Vec::new();

    for contribution in rules::score_features(features) {
        trace!(
            signal = ?contribution.signal,
            points = contribution.points,
            "applied rubric signal"
        );
        score += contribution.points;
        confidence += contribution.confidence;
        reasons.extend(contribution.reason);
    }

    let category_key = CategoryKey::resolve(category);
    score += category_key.bonus();
    score += notes::notes_bonus(notes);

    let score = score.clamp(0, 100) as u8;
    let confidence = round_to_hundredths(confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE));
    let band = NextStepBand::from_score(score);

    let debug = include_debug.then(|| ScoringDebug {
        biz_name: biz_name.to_string(),
        category: category.to_string(),
        category_key,
        town: town.to_string(),
        notes: notes.to_string(),
        features: features.clone(),
    });

    LeadScore {
        score,
        reasons: top_reasons(reasons),
        recommended_offer: recommendations::offer(category_key).to_string(),
        outreach_opener: recommendations::opener(category_key, biz_name),
        next_step: band.next_step().to_string(),
        confidence,
        debug,
    }
}

/// First occurrence wins; capped at [`MAX_REASONS`]; never empty.
fn top_reasons(reasons: Vec<&'static str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(MAX_REASONS);
    for reason in reasons {
        if unique.len() == MAX_REASONS {
            break;
        }
        if !unique.iter().any(|seen| seen == reason) {
            unique.push(reason.to_string());
        }
    }

    if unique.is_empty() {
        unique.push(FALLBACK_REASON.to_string());
    }
    unique
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
