//! Plans Page

use finflex_core::content::{ADVANTAGES, FAQS, MARKET_COMPARISON, TRADITIONAL_DRAWBACKS};
use finflex_core::{Icon, Page};
use leptos::prelude::*;

use crate::components::{IconGlyph, SectionHeading};
use crate::pages::PricingSection;

#[component]
pub fn PlansPage() -> impl IntoView {
    view! {
        <div class="plans-page">
            <header class="page-hero">
                <span class="eyebrow">"Membership"</span>
                <h1>"Invest in your"<br /><span class="accent">"Financial Future"</span></h1>
                <p class="tagline">
                    "Choose a plan that scales with your ambition. Whether you're just starting out or managing a global enterprise, we have you covered."
                </p>
            </header>

            <PricingSection />

            <section>
                <SectionHeading title="Why FinFlex?" lead="We focus on what matters most to your wallet." />
                <div class="two-column">
                    <ul class="checklist">
                        {ADVANTAGES.into_iter().map(|item| view! {
                            <li><IconGlyph icon=Icon::Check />{item}</li>
                        }).collect_view()}
                    </ul>
                    <ul class="checklist muted">
                        {TRADITIONAL_DRAWBACKS.into_iter().map(|item| view! {
                            <li><IconGlyph icon=Icon::Cross />{item}</li>
                        }).collect_view()}
                    </ul>
                </div>
            </section>

            <section>
                <SectionHeading title="Market Comparison" lead="See how we stack up against the competition." />
                <table class="comparison">
                    <thead>
                        <tr><th>"Feature"</th><th>"FinFlex"</th><th>"Competitors"</th></tr>
                    </thead>
                    <tbody>
                        {MARKET_COMPARISON.into_iter().map(|row| view! {
                            <tr>
                                <td>{row.label}</td>
                                <td class="included">{row.finflex}</td>
                                <td>{row.others}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="faq">
                {FAQS.into_iter().map(|faq| view! {
                    <details>
                        <summary><IconGlyph icon=Icon::Help />{faq.question}</summary>
                        <p>{faq.answer}</p>
                    </details>
                }).collect_view()}
            </section>

            <section class="callout">
                <h3>"Still have questions?"</h3>
                <p>
                    "Our enterprise team is ready to build a custom solution for your specific needs. From API integrations to white-labeling."
                </p>
                <button class="btn">"Schedule a Call"</button>
            </section>

            <section class="callout">
                <h3>"Ready to start?"</h3>
                <a href=Page::SignIn.path() class="btn btn-primary">"Create Free Account"</a>
            </section>
        </div>
    }
}
