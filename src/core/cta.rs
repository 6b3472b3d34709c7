//! Call-to-action dispatch and the pseudo-modal messages.
//!
//! Buttons declare their intent through a `data-cta` attribute. Pricing card
//! buttons without one fall back to [`CtaAction::from_pricing_label`], which
//! keeps the label-to-action mapping the page has always used.

use derive_more::Display;

/// Attribute carrying a button's declared intent
pub const CTA_ATTRIBUTE: &str = "data-cta";

/// Which signup flow to announce
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum SignupPlan {
    #[display("individual")]
    Individual,
    #[display("premium")]
    Premium,
}

/// Action triggered by a CTA button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaAction {
    Signup(SignupPlan),
    Demo,
}

/// Pricing card button styles used to disambiguate labels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingButtonStyle {
    /// `btn--outline`
    Outline,
    /// `btn--primary`
    Primary,
}

/// Element ids bound to the individual signup flow
pub const SIGNUP_BUTTON_IDS: [&str; 4] =
    ["signup-btn", "hero-signup", "individual-signup", "final-signup"];

/// Element ids bound to the enterprise demo flow
pub const DEMO_BUTTON_IDS: [&str; 4] = ["demo-btn", "hero-demo", "enterprise-demo", "final-demo"];

const INDIVIDUAL_SIGNUP_MESSAGE: &str = "Welcome! You would now be redirected to create your free Envirie account. Start your climate journey today and earn your first GreenCoins!";

const PREMIUM_SIGNUP_MESSAGE: &str = "Upgrading to Premium! You would be redirected to our premium signup flow with advanced AI missions and detailed analytics.";

const DEMO_MESSAGE: &str = "Thank you for your interest in Envirie Enterprise!

Our sales team will contact you within 24 hours to schedule a personalized demo.

We'll show you:
• Employee engagement platform
• BRSR/ESG automated reporting
• Team management tools
• Real-time compliance dashboard
• API integrations

For immediate assistance, call us at +91-80-4000-1234 or email enterprise@envirie.com";

impl CtaAction {
    /// Look up a button by its element id.
    pub fn from_element_id(id: &str) -> Option<Self> {
        if SIGNUP_BUTTON_IDS.contains(&id) {
            Some(CtaAction::Signup(SignupPlan::Individual))
        } else if DEMO_BUTTON_IDS.contains(&id) {
            Some(CtaAction::Demo)
        } else {
            None
        }
    }

    /// Parse a declared `data-cta` value.
    pub fn from_intent(intent: &str) -> Option<Self> {
        match intent.trim() {
            "individual" | "signup" => Some(CtaAction::Signup(SignupPlan::Individual)),
            "premium" => Some(CtaAction::Signup(SignupPlan::Premium)),
            "demo" => Some(CtaAction::Demo),
            _ => None,
        }
    }

    /// Compatibility table for pricing card buttons identified by label.
    pub fn from_pricing_label(style: PricingButtonStyle, label: &str) -> Option<Self> {
        match style {
            PricingButtonStyle::Outline if label.contains("Get Started Free") => {
                Some(CtaAction::Signup(SignupPlan::Individual))
            }
            PricingButtonStyle::Primary if label.contains("Upgrade") => {
                Some(CtaAction::Signup(SignupPlan::Premium))
            }
            PricingButtonStyle::Primary if label.contains("Contact Sales") => Some(CtaAction::Demo),
            _ => None,
        }
    }

    /// The declared intent string written to `data-cta`
    pub fn intent(&self) -> &'static str {
        match self {
            CtaAction::Signup(SignupPlan::Individual) => "individual",
            CtaAction::Signup(SignupPlan::Premium) => "premium",
            CtaAction::Demo => "demo",
        }
    }

    /// The alert text shown for this action
    pub fn message(&self) -> &'static str {
        match self {
            CtaAction::Signup(plan) => signup_message(Some(*plan)),
            CtaAction::Demo => DEMO_MESSAGE,
        }
    }
}

/// Signup message for a plan; no plan means the individual flow.
pub fn signup_message(plan: Option<SignupPlan>) -> &'static str {
    match plan {
        Some(SignupPlan::Premium) => PREMIUM_SIGNUP_MESSAGE,
        Some(SignupPlan::Individual) | None => INDIVIDUAL_SIGNUP_MESSAGE,
    }
}

/// Message for the enterprise demo pseudo-modal
pub fn demo_message() -> &'static str {
    DEMO_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_table() {
        for id in SIGNUP_BUTTON_IDS {
            assert_eq!(
                CtaAction::from_element_id(id),
                Some(CtaAction::Signup(SignupPlan::Individual))
            );
        }
        for id in DEMO_BUTTON_IDS {
            assert_eq!(CtaAction::from_element_id(id), Some(CtaAction::Demo));
        }
        assert_eq!(CtaAction::from_element_id("footer-link"), None);
    }

    #[test]
    fn test_pricing_labels() {
        use PricingButtonStyle::*;

        assert_eq!(
            CtaAction::from_pricing_label(Outline, "Get Started Free"),
            Some(CtaAction::Signup(SignupPlan::Individual))
        );
        assert_eq!(
            CtaAction::from_pricing_label(Primary, "Upgrade to Premium"),
            Some(CtaAction::Signup(SignupPlan::Premium))
        );
        assert_eq!(
            CtaAction::from_pricing_label(Primary, "Contact Sales"),
            Some(CtaAction::Demo)
        );
        // Labels only count on the style they were bound to
        assert_eq!(CtaAction::from_pricing_label(Outline, "Contact Sales"), None);
        assert_eq!(CtaAction::from_pricing_label(Primary, "Get Started Free"), None);
        assert_eq!(CtaAction::from_pricing_label(Primary, "Learn more"), None);
    }

    #[test]
    fn test_intent_round_trips_through_attribute() {
        for action in [
            CtaAction::Signup(SignupPlan::Individual),
            CtaAction::Signup(SignupPlan::Premium),
            CtaAction::Demo,
        ] {
            assert_eq!(CtaAction::from_intent(action.intent()), Some(action));
        }
        assert_eq!(CtaAction::from_intent("pricing"), None);
    }

    #[test]
    fn test_messages() {
        assert!(CtaAction::Demo.message().contains("+91-80-4000-1234"));
        assert!(CtaAction::Demo.message().contains("enterprise@envirie.com"));
        assert!(
            CtaAction::Signup(SignupPlan::Premium)
                .message()
                .starts_with("Upgrading to Premium!")
        );
        assert_eq!(signup_message(None), signup_message(Some(SignupPlan::Individual)));
        assert!(signup_message(None).contains("GreenCoins"));
    }
}
