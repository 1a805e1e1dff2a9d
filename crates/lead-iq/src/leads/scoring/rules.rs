use super::super::features::WebsiteFeatures;

pub(crate) const HARD_TO_ACCESS: &str =
    "Site looks hard to access right now, which usually means leads are leaking.";
pub(crate) const NOT_HTTPS: &str = "Site is not on HTTPS, which can hurt trust and conversions.";
pub(crate) const HAS_BOOKING: &str =
    "They already mention booking or appointments, so automation can pay off fast.";
pub(crate) const NO_BOOKING: &str =
    "No obvious booking path, which suggests a simple booking flow could increase conversions.";
pub(crate) const HAS_CONTACT_FORM: &str =
    "Contact form exists, so adding smart follow ups is an easy win.";
pub(crate) const NO_CONTACT_FORM: &str = "No clear contact form, so lead capture can be improved.";
pub(crate) const HAS_REVIEWS: &str =
    "Reviews and testimonials are present, so a review funnel could scale trust.";
pub(crate) const NO_REVIEWS: &str =
    "Not many visible trust signals, so reviews and proof could be improved.";
pub(crate) const HAS_LIVE_CHAT: &str =
    "Live chat hint suggests they care about leads and customer support.";
pub(crate) const HAS_CAREERS: &str =
    "Careers or hiring signals suggest they are growing and may invest in systems.";

/// Website signal a rubric rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeadSignal {
    Reachability,
    TransportSecurity,
    Booking,
    ContactForm,
    Phone,
    Email,
    Reviews,
    LiveChat,
    Pricing,
    Locations,
    Careers,
}

/// One rule's effect on the running score, confidence, and reasons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SignalContribution {
    pub signal: LeadSignal,
    pub points: i32,
    pub confidence: f64,
    pub reason: Option<&'static str>,
}

impl SignalContribution {
    fn new(signal: LeadSignal, points: i32) -> Self {
        Self {
            signal,
            points,
            confidence: 0.0,
            reason: None,
        }
    }

    fn confidence(mut self, delta: f64) -> Self {
        self.confidence = delta;
        self
    }

    fn reason(mut self, reason: &'static str) -> Self {
        self.reason = Some(reason);
        self
    }
}

/// Apply the website rubric in its fixed order. Signals that contribute nothing are skipped.
pub(crate) fn score_features(features: &WebsiteFeatures) -> Vec<SignalContribution> {
    use LeadSignal::*;

    let mut contributions = Vec::with_capacity(11);

    contributions.push(if features.status_ok {
        SignalContribution::new(Reachability, 10).confidence(0.05)
    } else {
        SignalContribution::new(Reachability, -20)
            .confidence(-0.10)
            .reason(HARD_TO_ACCESS)
    });

    contributions.push(if features.has_https {
        SignalContribution::new(TransportSecurity, 3)
    } else {
        SignalContribution::new(TransportSecurity, 0).reason(NOT_HTTPS)
    });

    contributions.push(if features.has_booking {
        SignalContribution::new(Booking, 18)
            .confidence(0.05)
            .reason(HAS_BOOKING)
    } else {
        SignalContribution::new(Booking, 6).reason(NO_BOOKING)
    });

    contributions.push(if features.has_contact_form {
        SignalContribution::new(ContactForm, 12)
            .confidence(0.05)
            .reason(HAS_CONTACT_FORM)
    } else {
        SignalContribution::new(ContactForm, 2).reason(NO_CONTACT_FORM)
    });

    contributions.push(if features.has_phone {
        SignalContribution::new(Phone, 8)
    } else {
        SignalContribution::new(Phone, -3)
    });

    if features.has_email {
        contributions.push(SignalContribution::new(Email, 4));
    }

    contributions.push(if features.has_reviews {
        SignalContribution::new(Reviews, 8).reason(HAS_REVIEWS)
    } else {
        SignalContribution::new(Reviews, 1).reason(NO_REVIEWS)
    });

    if features.has_live_chat {
        contributions.push(SignalContribution::new(LiveChat, 6).reason(HAS_LIVE_CHAT));
    }
    if features.has_pricing {
        contributions.push(SignalContribution::new(Pricing, 4));
    }
    if features.has_locations {
        contributions.push(SignalContribution::new(Locations, 4));
    }
    if features.has_careers {
        contributions.push(SignalContribution::new(Careers, 4).reason(HAS_CAREERS));
    }

    contributions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_site_contributions_follow_rubric_order() {
        let features = WebsiteFeatures::unreachable("http://closed.example");

        let contributions = score_features(&features);
        let signals: Vec<LeadSignal> = contributions.iter().map(|c| c.signal).collect();

        assert_eq!(
            signals,
            vec![
                LeadSignal::Reachability,
                LeadSignal::TransportSecurity,
                LeadSignal::Booking,
                LeadSignal::ContactForm,
                LeadSignal::Phone,
                LeadSignal::Reviews,
            ]
        );
        let points: i32 = contributions.iter().map(|c| c.points).sum();
        assert_eq!(points, -20 + 6 + 2 - 3 + 1);
        assert_eq!(contributions[0].confidence, -0.10);
    }

    #[test]
    fn phone_never_emits_a_reason() {
        let mut features = WebsiteFeatures::unreachable("https://open.example");
        features.has_phone = true;

        let phone = score_features(&features)
            .into_iter()
            .find(|c| c.signal == LeadSignal::Phone)
            .expect("phone rule applies");

        assert_eq!(phone.points, 8);
        assert_eq!(phone.reason, None);
    }
}
