//! Home Page

use finflex_core::content::{HEADLINES, LOGO_STRIP_COPIES, LOGOS, TESTIMONIALS, split_headline};
use finflex_core::{Icon, Page, TimingConfig};
use leptos::logging::warn;
use leptos::prelude::*;

use crate::components::{Counter, IconGlyph};
use crate::hooks::use_rotation;
use crate::pages::PricingSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <LogoCarousel />
            <PricingSection />
            <Testimonials />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let timing = use_context::<TimingConfig>().unwrap_or_default();
    let headline = use_rotation(&HEADLINES, timing.headline_period()).map(|rotation| {
        view! {
            <h1 class="headline">
                {move || {
                    let (lead, rest) = split_headline(rotation.with(|r| *r.current()));
                    view! {
                        <span class="lead-word">{lead}</span>
                        <span class="accent">{rest}</span>
                    }
                }}
            </h1>
        }
    });

    view! {
        <header class="hero">
            <div class="spinning-card" aria-hidden="true"></div>
            <span class="eyebrow">"Next Gen Finance"</span>
            {headline}
            <p class="tagline">
                "Connect unlimited accounts. From PayPal to Stripe, manage your digital wealth in one unified, secure ecosystem."
            </p>
            <div class="cta">
                <a href=Page::SignIn.path() class="btn btn-primary">"Get Started"</a>
                <a href=Page::Features.path() class="btn">"Explore Features"</a>
            </div>
            <div class="hero-stats">
                <div>
                    <p class="stat-value"><Counter to=10.0 suffix="M+" /></p>
                    <p class="stat-label">"Trusted Users"</p>
                </div>
                <div>
                    <p class="stat-value"><Counter to=50.0 prefix="$" suffix="B+" /></p>
                    <p class="stat-label">"Transacted"</p>
                </div>
            </div>
        </header>
    }
}

/// Partner logos, repeated so the CSS marquee can loop seamlessly
#[component]
fn LogoCarousel() -> impl IntoView {
    let strip = std::iter::repeat_n(LOGOS, LOGO_STRIP_COPIES)
        .flatten()
        .map(|logo| view! { <span class="logo">{logo}</span> })
        .collect_view();

    view! {
        <section class="logo-carousel">
            <div class="marquee">{strip}</div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    let timing = use_context::<TimingConfig>().unwrap_or_default();

    use_rotation(&TESTIMONIALS, timing.testimonial_period()).map(|rotation| {
        let indicators = (0..TESTIMONIALS.len())
            .map(|index| {
                view! {
                    <button
                        class="indicator"
                        class:active=move || rotation.with(|r| r.index() == index)
                        aria-label=format!("Show testimonial {}", index + 1)
                        on:click=move |_| {
                            rotation.update(|r| {
                                if let Err(err) = r.jump_to(index) {
                                    warn!("Testimonial jump ignored: {err}");
                                }
                            });
                        }
                    ></button>
                }
            })
            .collect_view();

        view! {
            <section class="testimonials">
                <span class="eyebrow">"Testimonials"</span>
                <h2>"What our users say"</h2>
                <blockquote>
                    <IconGlyph icon=Icon::Quote />
                    <p>{move || rotation.with(|r| r.current().text)}</p>
                    <footer>
                        <strong>{move || rotation.with(|r| r.current().author)}</strong>
                        <span>{move || rotation.with(|r| r.current().role)}</span>
                    </footer>
                </blockquote>
                <div class="indicators">{indicators}</div>
            </section>
        }
    })
}
