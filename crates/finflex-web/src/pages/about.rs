//! About Page

use finflex_core::content::{CIRCULAR_TEXT, MILESTONES, TEAM, VALUES, circular_letter_angles};
use finflex_core::Icon;
use leptos::prelude::*;

use crate::components::{Counter, HighlightCard, IconGlyph, SectionHeading};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <header class="page-hero">
                <CircularText text=CIRCULAR_TEXT />
                <h1>"We are FinFlex"</h1>
                <p class="tagline">"Building the financial operating system for the next billion people."</p>
            </header>

            <section>
                <span class="eyebrow">"Our DNA"</span>
                <SectionHeading title="What drives us forward" />
                <div class="card-grid">
                    {VALUES.into_iter().map(|highlight| view! { <HighlightCard highlight=highlight /> }).collect_view()}
                </div>
            </section>

            <section>
                <SectionHeading title="Meet the Leadership" />
                <div class="team">
                    {TEAM.into_iter().map(|member| view! {
                        <div class="member">
                            <IconGlyph icon=Icon::User />
                            <h4>{member.name}</h4>
                            <p>{member.role}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <section class="stats">
                <div class="stat-grid">
                    <div class="stat"><p class="stat-value"><Counter to=2020.0 /></p><p class="stat-label">"Founded"</p></div>
                    <div class="stat"><p class="stat-value"><Counter to=5.0 /></p><p class="stat-label">"Global Offices"</p></div>
                    <div class="stat"><p class="stat-value"><Counter to=200.0 suffix="+" /></p><p class="stat-label">"Employees"</p></div>
                    <div class="stat"><p class="stat-value"><Counter to=150.0 suffix="K" /></p><p class="stat-label">"Lines of Code"</p></div>
                </div>
            </section>

            <section>
                <SectionHeading title="Our Journey" />
                <ol class="timeline">
                    {MILESTONES.into_iter().map(|milestone| view! {
                        <li>
                            <span class="year">{milestone.year}</span>
                            <h4>{milestone.title}</h4>
                            <p>{milestone.description}</p>
                        </li>
                    }).collect_view()}
                </ol>
            </section>

            <section class="callout">
                <h3>"Join the revolution"</h3>
                <p>"We are always looking for talented individuals to join our team."</p>
                <button class="btn btn-primary">"View Open Positions"</button>
            </section>
        </div>
    }
}

/// Letters laid out around a circle; the ring spins via CSS
#[component]
fn CircularText(text: &'static str) -> impl IntoView {
    let letters = circular_letter_angles(text)
        .into_iter()
        .map(|(letter, angle)| {
            view! {
                <span class="ring-letter" style=format!("transform: rotate({angle}deg)")>
                    {letter.to_string()}
                </span>
            }
        })
        .collect_view();

    view! { <div class="circular-text" aria-label=text>{letters}</div> }
}
