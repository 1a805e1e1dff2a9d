use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

const BOOKING_HINTS: &[&str] = &[
    "book",
    "booking",
    "schedule",
    "appointment",
    "reserve",
    "reservation",
    "order online",
    "pickup",
    "delivery",
    "table",
    "get a quote",
    "estimate",
];
const CONTACT_FORM_HINTS: &[&str] = &["contact", "message", "inquiry"];
const CHAT_HINTS: &[&str] = &[
    "intercom",
    "zendesk",
    "tawk",
    "drift",
    "crisp",
    "livechat",
    "chat widget",
];
const REVIEWS_HINTS: &[&str] = &[
    "testimonials",
    "reviews",
    "google reviews",
    "yelp",
    "trustpilot",
    "rating",
];
const PRICING_HINTS: &[&str] = &["pricing", "plans", "package", "packages", "membership", "rates"];
const CAREERS_HINTS: &[&str] = &["careers", "jobs", "join our team", "hiring"];
const LOCATIONS_HINTS: &[&str] = &["locations", "find us", "our locations", "store locator"];

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("email pattern compiles")
});

// US-style numbers only.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?1[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
        .expect("phone pattern compiles")
});

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern compiles"));

// Raw text inside these elements is never rendered.
const NON_RENDERED_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Content signals found in a page body. All false for an empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSignals {
    pub has_booking: bool,
    pub has_contact_form: bool,
    pub has_live_chat: bool,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_reviews: bool,
    pub has_pricing: bool,
    pub has_careers: bool,
    pub has_locations: bool,
    pub cms_hint: Option<&'static str>,
    pub word_count: usize,
}

impl PageSignals {
    pub fn from_html(html: &str) -> Self {
        let text = visible_text(html);
        let lower_text = text.to_lowercase();
        let lower_html = html.to_lowercase();
        let combined = format!("{lower_text} {lower_html}");

        Self {
            has_booking: contains_any(&lower_text, BOOKING_HINTS)
                || contains_any(&lower_html, BOOKING_HINTS),
            has_contact_form: lower_html.contains("<form")
                && contains_any(&combined, CONTACT_FORM_HINTS),
            has_live_chat: contains_any(&lower_html, CHAT_HINTS),
            has_email: EMAIL_PATTERN.is_match(&text) || lower_html.contains("mailto:"),
            has_phone: PHONE_PATTERN.is_match(&text) || lower_html.contains("tel:"),
            has_reviews: contains_any(&combined, REVIEWS_HINTS),
            has_pricing: contains_any(&combined, PRICING_HINTS),
            has_careers: contains_any(&combined, CAREERS_HINTS),
            has_locations: contains_any(&combined, LOCATIONS_HINTS),
            cms_hint: detect_cms(&lower_html),
            word_count: WORD_PATTERN.find_iter(&text).count(),
        }
    }
}

/// Best-effort site builder fingerprint. Expects lower-cased HTML.
pub fn detect_cms(lower_html: &str) -> Option<&'static str> {
    if lower_html.contains("wp-content") || lower_html.contains("wordpress") {
        Some("WordPress")
    } else if lower_html.contains("cdn.shopify.com") || lower_html.contains("shopify") {
        Some("Shopify")
    } else if lower_html.contains("wix") && lower_html.contains("wixsite") {
        Some("Wix")
    } else if lower_html.contains("squarespace") {
        Some("Squarespace")
    } else if lower_html.contains("webflow") {
        Some("Webflow")
    } else {
        None
    }
}

/// Rendered text nodes of the parsed document joined by single spaces.
fn visible_text(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    let document = Html::parse_document(html);
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let rendered = !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| NON_RENDERED_ELEMENTS.contains(&element.name()))
            });
            rendered.then(|| text.trim())
        })
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
