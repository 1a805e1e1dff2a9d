//! Static sales copy keyed by category and score band.

use serde::{Deserialize, Serialize};

use super::scoring::CategoryKey;

const OPENER_PLACEHOLDER: &str = "{biz}";

/// Score bands that pick the suggested outreach action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextStepBand {
    High,
    Medium,
    Low,
}

impl NextStepBand {
    pub const HIGH_THRESHOLD: u8 = 75;
    pub const MEDIUM_THRESHOLD: u8 = 50;

    pub const fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn next_step(self) -> &'static str {
        match self {
            Self::High => {
                "Call or walk-in is best. Offer a 10 minute demo and show the exact before/after."
            }
            Self::Medium => {
                "Email or DM. Share one specific improvement and ask if they want a quick demo."
            }
            Self::Low => {
                "Put them in a later list. Do not spend a lot of time unless they respond."
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

pub const fn offer(category: CategoryKey) -> &'static str {
    match category {
        CategoryKey::Restaurant => {
            "Online ordering plus missed-call text back so you stop losing hungry customers"
        }
        CategoryKey::HomeServices => {
            "Quote capture plus auto follow up so estimates turn into booked jobs"
        }
        CategoryKey::Gym => "Trial signup plus automated nurture so leads convert into memberships",
        CategoryKey::Dentist => "Appointment request plus reminder flow to reduce no shows",
        CategoryKey::Retail => "Local promos plus review funnel to boost foot traffic and trust",
        CategoryKey::Default => {
            "Lead capture plus automated follow up to turn interest into bookings"
        }
    }
}

const fn opener_template(category: CategoryKey) -> &'static str {
    match category {
        CategoryKey::Restaurant => {
            "Quick note, I noticed {biz} could win back more orders with a smoother online flow."
        }
        CategoryKey::HomeServices => {
            "Hey, I was looking at {biz} and saw a few easy wins to turn more site visits into booked estimates."
        }
        CategoryKey::Gym => {
            "I took a look at {biz} and I think you could convert more visitors into trial signups fast."
        }
        CategoryKey::Dentist => {
            "I checked out {biz} and saw a couple quick improvements that can reduce no shows and increase requests."
        }
        CategoryKey::Retail => {
            "I saw {biz} online and there are a few fast upgrades that can boost trust and bring more people in."
        }
        CategoryKey::Default => {
            "I looked at {biz} and found a couple quick ways to capture and follow up with more leads."
        }
    }
}

/// Personalized first line for outreach to `business_name`.
pub fn opener(category: CategoryKey, business_name: &str) -> String {
    opener_template(category).replacen(OPENER_PLACEHOLDER, business_name, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(NextStepBand::from_score(100), NextStepBand::High);
        assert_eq!(NextStepBand::from_score(75), NextStepBand::High);
        assert_eq!(NextStepBand::from_score(74), NextStepBand::Medium);
        assert_eq!(NextStepBand::from_score(50), NextStepBand::Medium);
        assert_eq!(NextStepBand::from_score(49), NextStepBand::Low);
        assert_eq!(NextStepBand::from_score(0), NextStepBand::Low);
    }

    #[test]
    fn every_template_interpolates_the_business_name() {
        for category in CategoryKey::ordered() {
            let line = opener(category, "Acme {Plumbing}");
            assert!(line.contains("Acme {Plumbing}"), "{category:?}: {line}");
            assert!(!line.contains("{biz}"), "{category:?}: {line}");
        }
    }

    #[test]
    fn restaurant_opener_matches_copy() {
        assert_eq!(
            opener(CategoryKey::Restaurant, "Joe's Pizza"),
            "Quick note, I noticed Joe's Pizza could win back more orders with a smoother online flow."
        );
    }

    #[test]
    fn offers_are_distinct_per_category() {
        let mut offers: Vec<&str> = CategoryKey::ordered().into_iter().map(offer).collect();
        offers.sort_unstable();
        offers.dedup();
        assert_eq!(offers.len(), CategoryKey::ordered().len());
    }
}
