//! Services Page

use finflex_core::content::{SERVICES, STATS};
use finflex_core::{Icon, Page};
use leptos::prelude::*;

use crate::components::{HighlightCard, IconGlyph, SectionHeading};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="services-page">
            <header class="page-hero">
                <h1>"Your bank,"<br /><span class="accent">"in your pocket."</span></h1>
                <div class="phone-mock">
                    <p class="balance">"$124,500.00"</p>
                    <p class="delta"><IconGlyph icon=Icon::TrendingUp />"+2.4% today"</p>
                </div>
                <a href=Page::SignIn.path() class="btn btn-primary">
                    <IconGlyph icon=Icon::Smartphone />"Download App"
                </a>
            </header>

            <section>
                <div class="card-grid">
                    {SERVICES.into_iter().map(|highlight| view! { <HighlightCard highlight=highlight /> }).collect_view()}
                </div>
            </section>

            <section class="stats">
                <SectionHeading title="By the numbers" />
                <div class="stat-grid">
                    {STATS.into_iter().map(|stat| view! {
                        <div class="stat">
                            <p class="stat-value">{stat.value}</p>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
