//! "Why is it simple" Page
//!
//! Three steps highlighted in turn as the page scrolls.

use finflex_core::content::{INTEGRATIONS, SIMPLE_COMPARISON, SIMPLE_STEPS, step_name};
use finflex_core::motion::{scroll_progress, story_step};
use finflex_core::{Icon, Page};
use leptos::prelude::*;

use crate::components::{IconGlyph, SectionHeading};
use crate::hooks::use_scroll_y;
use crate::pages::PricingSection;

fn page_progress(scroll_y: f64) -> f64 {
    let scroll_height = document()
        .document_element()
        .map_or(0.0, |root| f64::from(root.scroll_height()));
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    scroll_progress(scroll_y, scroll_height, viewport_height)
}

#[component]
pub fn SimplePage() -> impl IntoView {
    let scroll_y = use_scroll_y();
    let active_step = Memo::new(move |_| story_step(page_progress(scroll_y.get())));

    let steps = SIMPLE_STEPS
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            view! {
                <div class="story-step" class:active=move || active_step.get() == index>
                    <IconGlyph icon=step.icon />
                    <h3>{step.title}</h3>
                    <p>{step.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="simple-page">
            <header class="page-hero">
                <h1>"Simply"<br /><span class="accent">"Better."</span></h1>
            </header>

            <section class="story">
                <div class="story-visual">
                    <IconGlyph icon=Icon::Wallet />
                    <span class="story-label">{move || SIMPLE_STEPS.get(active_step.get()).map_or("", |step| step_name(step.title))}</span>
                </div>
                <div class="story-steps">{steps}</div>
            </section>

            <section>
                <SectionHeading title="Why switch?" lead="The difference is clear." />
                <table class="comparison">
                    <thead>
                        <tr><th>"Feature"</th><th>"Traditional Banks"</th><th>"FinFlex"</th></tr>
                    </thead>
                    <tbody>
                        {SIMPLE_COMPARISON.into_iter().map(|feature| view! {
                            <tr>
                                <td>{feature}</td>
                                <td><IconGlyph icon=Icon::Cross /></td>
                                <td class="included"><IconGlyph icon=Icon::Check /></td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </section>

            <section class="integrations">
                <SectionHeading title="Works with everything you use" />
                <div class="marquee">
                    {INTEGRATIONS.into_iter().chain(INTEGRATIONS).map(|name| view! {
                        <span class="integration">{name}</span>
                    }).collect_view()}
                </div>
            </section>

            <PricingSection />

            <section class="callout">
                <h3>"Stop overcomplicating."</h3>
                <a href=Page::SignIn.path() class="btn btn-primary">"Get Simple"</a>
            </section>
        </div>
    }
}
