use serde::{Deserialize, Serialize};

/// Business verticals with dedicated offers and openers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    HomeServices,
    Restaurant,
    Gym,
    Dentist,
    Retail,
    Default,
}

/// Matched in order after lower-casing and trimming the raw category.
const CATEGORY_ALIASES: &[(CategoryKey, &[&str])] = &[
    (
        CategoryKey::HomeServices,
        &[
            "home services",
            "home_service",
            "home_services",
            "contractor",
            "plumber",
            "electrician",
            "hvac",
        ],
    ),
    (CategoryKey::Restaurant, &["restaurant", "food", "cafe", "deli"]),
    (CategoryKey::Gym, &["gym", "fitness", "studio"]),
    (CategoryKey::Dentist, &["dentist", "dental", "orthodontist"]),
    (CategoryKey::Retail, &["retail", "store", "shop"]),
];

impl CategoryKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Restaurant,
            Self::HomeServices,
            Self::Gym,
            Self::Dentist,
            Self::Retail,
            Self::Default,
        ]
    }

    /// Resolve free-text input; anything unrecognized is [`CategoryKey::Default`].
    pub fn resolve(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        CATEGORY_ALIASES
            .iter()
            .find(|(_, aliases)| aliases.contains(&normalized.as_str()))
            .map(|(key, _)| *key)
            .unwrap_or(Self::Default)
    }

    /// Points the vertical adds to the lead score.
    pub const fn bonus(self) -> i32 {
        match self {
            Self::HomeServices => 8,
            Self::Restaurant | Self::Dentist => 6,
            Self::Gym => 5,
            Self::Retail => 4,
            Self::Default => 0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HomeServices => "home_services",
            Self::Restaurant => "restaurant",
            Self::Gym => "gym",
            Self::Dentist => "dentist",
            Self::Retail => "retail",
            Self::Default => "default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_aliases_resolve_to_home_services() {
        for raw in ["plumber", "HVAC", "  Electrician ", "home services", "home_service"] {
            assert_eq!(CategoryKey::resolve(raw), CategoryKey::HomeServices, "{raw}");
        }
    }

    #[test]
    fn unknown_and_blank_categories_fall_back() {
        assert_eq!(CategoryKey::resolve("unknown_xyz"), CategoryKey::Default);
        assert_eq!(CategoryKey::resolve(""), CategoryKey::Default);
        assert_eq!(CategoryKey::resolve("default"), CategoryKey::Default);
    }

    #[test]
    fn aliases_are_exact_matches() {
        assert_eq!(CategoryKey::resolve("coffee shop"), CategoryKey::Default);
        assert_eq!(CategoryKey::resolve("Shop"), CategoryKey::Retail);
        assert_eq!(CategoryKey::resolve("Cafe"), CategoryKey::Restaurant);
    }

    #[test]
    fn serializes_as_snake_case_key() {
        for key in CategoryKey::ordered() {
            let json = serde_json::to_string(&key).expect("serializes");
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }
}
