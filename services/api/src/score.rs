use clap::Args;
use lead_iq::config::AppConfig;
use lead_iq::error::AppError;
use lead_iq::leads::domain::DEFAULT_CATEGORY;
use lead_iq::leads::{LeadRequest, LeadScoreResponse};
use lead_iq::telemetry;

use crate::infra::build_scoring_service;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Business name
    #[arg(long)]
    pub(crate) biz: String,
    /// Website URL
    #[arg(long)]
    pub(crate) url: String,
    /// Category, ex: restaurant, home_services, gym
    #[arg(long, default_value = DEFAULT_CATEGORY)]
    pub(crate) category: String,
    /// Town or area
    #[arg(long, default_value = "")]
    pub(crate) town: String,
    /// Optional notes
    #[arg(long, default_value = "")]
    pub(crate) notes: String,
    /// Include debug info
    #[arg(long)]
    pub(crate) debug: bool,
}

impl From<ScoreArgs> for LeadRequest {
    fn from(args: ScoreArgs) -> Self {
        Self {
            business_name: args.biz,
            website_url: args.url,
            category: args.category,
            town: args.town,
            notes: args.notes,
            debug: args.debug,
        }
    }
}

pub(crate) async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let service = build_scoring_service(&config)?;
    let response = service.score(LeadRequest::from(args)).await?;

    println!("{}", render_response(&response)?);
    Ok(())
}

pub(crate) fn render_response(response: &LeadScoreResponse) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(response)?)
}
