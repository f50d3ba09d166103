//! Features Page

use finflex_core::content::{COMPARISON_TIERS, FEATURES, TIER_COMPARISON};
use finflex_core::{Icon, Page};
use leptos::prelude::*;

use crate::components::{HighlightCard, IconGlyph, SectionHeading};

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let header = COMPARISON_TIERS
        .into_iter()
        .map(|tier| view! { <th>{tier}</th> })
        .collect_view();

    let rows = TIER_COMPARISON
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{row.feature}</td>
                    {row.included.into_iter().map(|included| {
                        let icon = if included { Icon::Check } else { Icon::Cross };
                        view! { <td class:included=included><IconGlyph icon=icon /></td> }
                    }).collect_view()}
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="features-page">
            <header class="page-hero">
                <h1>"Complete Control"<br /><span class="accent">"Over Your Assets"</span></h1>
                <p class="tagline">
                    "Experience the dashboard that powers thousands of global businesses. Real-time analytics, instant transfers, and zero friction."
                </p>
                <div class="cta">
                    <a href=Page::SignIn.path() class="btn btn-primary">"Start Free Trial"</a>
                    <button class="btn">"Watch Demo"</button>
                </div>
            </header>

            <section>
                <span class="eyebrow">"Core Capabilities"</span>
                <SectionHeading title="Everything you need to scale" />
                <div class="card-grid">
                    {FEATURES.into_iter().map(|highlight| view! { <HighlightCard highlight=highlight /> }).collect_view()}
                </div>
            </section>

            <section>
                <SectionHeading title="Compare Plans" lead="Find the perfect fit for your financial needs." />
                <table class="comparison">
                    <thead>
                        <tr><th>"Feature"</th>{header}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </section>
        </div>
    }
}
