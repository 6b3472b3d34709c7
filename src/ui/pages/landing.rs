//! Envirie landing page
//!
//! Sections, top to bottom:
//! - Hero with signup/demo buttons and the animated goal card
//! - Features, How It Works
//! - Pricing with the Individual / Enterprise audience switcher
//! - Impact stats and testimonials
//! - Final call to action, contact form, footer with newsletter signup

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::cta::{CtaAction, PricingButtonStyle, SignupPlan};
use crate::core::tabs::{Audience, TabGroup};
use crate::ui::anchors::AnchorScroll;
use crate::ui::cta::{CtaButton, PricingButton};
use crate::ui::external_link::ExternalLink;
use crate::ui::form::{FieldSpec, LeadForm};
use crate::ui::header::Header;
use crate::ui::progress::ProgressBar;
use crate::ui::scroll_animate::ScrollAnimations;
use crate::ui::tabs::{AudiencePanel, AudienceTabs};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="Envirie - Turn Climate Action into a Habit" />
        <Meta
            name="description"
            content="Envirie rewards everyday climate action with GreenCoins and gives enterprises automated BRSR/ESG reporting."
        />

        <Header />

        <main>
            <Hero />
            <Features />
            <HowItWorks />
            <Pricing />
            <Impact />
            <FinalCta />
            <Contact />
        </main>

        <Footer />

        <AnchorScroll />
        <ScrollAnimations />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="home">
            <div class="container hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">"Turn climate action into a daily habit"</h1>
                    <p class="hero-subtitle">
                        "Complete AI-guided missions, track your footprint and earn GreenCoins for every sustainable choice."
                    </p>
                    <div class="hero-actions">
                        <CtaButton id="hero-signup" class="btn btn--primary btn--lg">
                            "Start Free"
                        </CtaButton>
                        <CtaButton id="hero-demo" class="btn btn--outline btn--lg">
                            "Enterprise Demo"
                        </CtaButton>
                    </div>
                    <a href="#how-it-works" class="hero-link">"See how it works"</a>
                </div>

                <div class="hero-card card">
                    <div class="card__body">
                        <h3>"Your impact this month"</h3>
                        <p class="hero-card-stat">"42 kg CO₂ avoided"</p>
                        <ProgressBar label="Monthly goal" />
                        <p class="hero-card-coins">"+320 GreenCoins"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    const FEATURES: [(&str, &str); 4] = [
        ("AI Missions", "Personalised weekly missions that fit your routine and location."),
        ("GreenCoins", "Earn rewards for verified actions and redeem them with partner brands."),
        ("Footprint Tracker", "See the CO₂ you avoid across travel, food and energy."),
        ("Team Challenges", "Rally colleagues around shared goals and friendly leaderboards."),
    ];

    view! {
        <section class="section" id="features">
            <div class="container">
                <h2 class="section-title">"Everything you need to act on climate"</h2>
                <div class="features-grid">
                    {FEATURES.into_iter().map(|(title, body)| view! {
                        <div class="feature-card card">
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    const STEPS: [(&str, &str); 3] = [
        ("Sign up", "Create a free account in under a minute."),
        ("Take on missions", "Pick missions and log your sustainable actions."),
        ("Earn and grow", "Collect GreenCoins and watch your impact add up."),
    ];

    view! {
        <section class="section section--alt" id="how-it-works">
            <div class="container">
                <h2 class="section-title">"How It Works"</h2>
                <div class="steps-grid">
                    {STEPS.into_iter().enumerate().map(|(i, (title, body))| view! {
                        <div class="step-card card">
                            <span class="step-number">{i + 1}</span>
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Pricing() -> impl IntoView {
    let group = RwSignal::new(TabGroup::audiences());

    view! {
        <section class="section" id="pricing">
            <div class="container">
                <h2 class="section-title">"Plans for people and organisations"</h2>
                <AudienceTabs group=group />

                <AudiencePanel audience=Audience::Individual group=group>
                    <div class="pricing-grid">
                        <PricingCard
                            name="Free"
                            price="₹0"
                            features=&["Weekly AI missions", "GreenCoins rewards", "Footprint tracker"]
                            style=PricingButtonStyle::Outline
                            label="Get Started Free"
                        />
                        <PricingCard
                            name="Premium"
                            price="₹149/month"
                            features=&["Advanced AI missions", "Detailed analytics", "Double GreenCoins"]
                            style=PricingButtonStyle::Primary
                            label="Upgrade to Premium"
                        />
                    </div>
                    <CtaButton id="individual-signup" class="btn btn--outline">
                        "Create my free account"
                    </CtaButton>
                </AudiencePanel>

                <AudiencePanel audience=Audience::Enterprise group=group>
                    <div class="pricing-grid">
                        <PricingCard
                            name="Enterprise"
                            price="Custom"
                            features=&[
                                "Employee engagement platform",
                                "BRSR/ESG automated reporting",
                                "Real-time compliance dashboard",
                            ]
                            style=PricingButtonStyle::Primary
                            label="Contact Sales"
                        />
                        <div class="pricing-card card">
                            <h3>"Request a demo"</h3>
                            <LeadForm
                                kind="demo"
                                submit_label="Request Demo"
                                fields=vec![
                                    FieldSpec::text("name", "Full name").required(),
                                    FieldSpec::email("email", "Work email").required(),
                                    FieldSpec::text("company", "Company").required(),
                                    FieldSpec::text("employees", "Team size").placeholder("e.g. 250"),
                                ]
                            />
                        </div>
                    </div>
                    <CtaButton id="enterprise-demo" class="btn btn--outline">
                        "Talk to our team"
                    </CtaButton>
                </AudiencePanel>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    style: PricingButtonStyle,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="pricing-card card">
            <h3>{name}</h3>
            <p class="pricing-price">{price}</p>
            <ul class="pricing-features">
                {features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
            <PricingButton style=style label=label />
        </div>
    }
}

#[component]
fn Impact() -> impl IntoView {
    const STATS: [(&str, &str); 3] = [
        ("1.2M kg", "CO₂ avoided by our community"),
        ("85,000+", "Missions completed"),
        ("120+", "Companies reporting with Envirie"),
    ];
    const TESTIMONIALS: [(&str, &str); 2] = [
        ("Envirie made our BRSR filing painless and got 70% of staff involved.", "Head of Sustainability, Bengaluru"),
        ("The missions are small enough to actually stick. I've cut my commute emissions in half.", "Premium member, Pune"),
    ];

    view! {
        <section class="section section--alt" id="impact">
            <div class="container">
                <h2 class="section-title">"Real impact, measured"</h2>
                <div class="stats-grid">
                    {STATS.into_iter().map(|(value, caption)| view! {
                        <div class="stat-card card">
                            <span class="stat-value">{value}</span>
                            <span class="stat-caption">{caption}</span>
                        </div>
                    }).collect_view()}
                </div>
                <div class="testimonials">
                    {TESTIMONIALS.into_iter().map(|(quote, author)| view! {
                        <blockquote class="testimonial card">
                            <p>{quote}</p>
                            <cite>{author}</cite>
                        </blockquote>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <section class="section cta-section">
            <div class="container">
                <h2 class="section-title">"Ready to start your climate journey?"</h2>
                <div class="hero-actions">
                    <CtaButton id="final-signup" class="btn btn--primary btn--lg">
                        "Join Envirie Free"
                    </CtaButton>
                    <CtaButton id="final-demo" class="btn btn--outline btn--lg">
                        "Book Enterprise Demo"
                    </CtaButton>
                    <CtaButton
                        intent=CtaAction::Signup(SignupPlan::Premium)
                        class="btn btn--secondary btn--lg"
                    >
                        "Go Premium"
                    </CtaButton>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <section class="section" id="contact">
            <div class="container container--narrow">
                <h2 class="section-title">"Get in touch"</h2>
                <LeadForm
                    submit_label="Send Message"
                    fields=vec![
                        FieldSpec::text("name", "Name").required(),
                        FieldSpec::email("email", "Email").required(),
                        FieldSpec::textarea("message", "Message").required(),
                    ]
                />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div>
                    <span class="logo-text">"Envirie"</span>
                    <p>"Climate action, rewarded."</p>
                </div>
                <div>
                    <h4>"Newsletter"</h4>
                    <LeadForm
                        kind="newsletter"
                        class="newsletter-form"
                        submit_label="Subscribe"
                        fields=vec![
                            FieldSpec::email("email", "Email").required().placeholder("you@example.com"),
                        ]
                    />
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul class="footer-links">
                        <li><ExternalLink href="#" label="Privacy Policy" /></li>
                        <li><ExternalLink href="#" label="Terms of Service" /></li>
                        <li><ExternalLink href="https://www.linkedin.com/company/envirie" label="LinkedIn" /></li>
                        <li><ExternalLink href="https://twitter.com/envirie" label="Twitter" /></li>
                    </ul>
                </div>
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::collections::HashMap;

    use leptos::prelude::*;
    use leptos_meta::provide_meta_context;

    use super::LandingPage;
    use crate::core::InteractionConfig;
    use crate::ui::context::provide_menu_context;

    fn render_landing() -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            provide_context(InteractionConfig::default());
            provide_menu_context();
            view! { <LandingPage /> }.to_html()
        })
    }

    fn attribute_counts(html: &str, attribute: &str) -> HashMap<String, usize> {
        let marker = format!(" {}=\"", attribute);
        let mut counts = HashMap::new();
        for chunk in html.split(marker.as_str()).skip(1) {
            if let Some(end) = chunk.find('"') {
                *counts.entry(chunk[..end].to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn test_landing_page_element_ids_are_unique() {
        let html = render_landing();
        let ids = attribute_counts(&html, "id");

        let duplicated: Vec<_> = ids.iter().filter(|(_, n)| **n > 1).collect();
        assert!(duplicated.is_empty(), "duplicate ids: {:?}", duplicated);

        for form in ["demo", "contact", "newsletter"] {
            assert!(
                ids.contains_key(&format!("field-{}-email", form)),
                "missing email field for {} form",
                form
            );
        }
    }

    #[test]
    fn test_labels_point_at_their_own_form_controls() {
        let html = render_landing();
        let ids = attribute_counts(&html, "id");
        let labels = attribute_counts(&html, "for");

        assert!(!labels.is_empty());
        for (target, count) in &labels {
            assert_eq!(*count, 1, "label target {} is shared", target);
            assert!(ids.contains_key(target), "label target {} has no control", target);
        }
    }
}
