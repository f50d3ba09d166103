//! UI Components

use chrono::Datelike;
use finflex_core::content::{
    BRAND, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE, FOOTER_COMPANY, FOOTER_RESOURCES, FOOTER_SOCIALS,
    Highlight,
};
use finflex_core::motion::{CountUp, back_to_top_visible, navbar_condensed};
use finflex_core::{Icon, MobileMenu, Page, Scheduler, TimingConfig};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::hooks::{BrowserScheduler, every_until, use_handoff, use_scroll_y};

#[component]
pub fn IconGlyph(icon: Icon) -> impl IntoView {
    view! { <span class="icon" aria-hidden="true">{icon.glyph()}</span> }
}

/// Title over a short lead paragraph
#[component]
pub fn SectionHeading(title: &'static str, #[prop(optional)] lead: &'static str) -> impl IntoView {
    view! {
        <div class="section-heading">
            <h2>{title}</h2>
            <Show when=move || !lead.is_empty()>
                <p class="lead">{lead}</p>
            </Show>
        </div>
    }
}

/// Icon, title and description card
#[component]
pub fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <div class="card">
            <IconGlyph icon=highlight.icon />
            <h3>{highlight.title}</h3>
            <p>{highlight.description}</p>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let menu = RwSignal::new(MobileMenu::default());
    let scroll_y = use_scroll_y();
    let handoff = use_handoff();

    let link = move |page: Page| {
        let navigate = navigate.clone();
        let pathname = location.pathname;
        view! {
            <a
                href=page.path()
                class="nav-link"
                class:active=move || page.is_active(&pathname.get())
                on:click=move |ev| {
                    ev.prevent_default();
                    let mut target = page.path();
                    menu.update(|m| target = m.navigate(page));
                    handoff.discard();
                    navigate(target, Default::default());
                }
            >
                {page.label()}
            </a>
        }
    };

    let desktop_links = Page::NAV.into_iter().map(link.clone()).collect_view();
    let mobile_links = Page::NAV.into_iter().map(link).collect_view();

    view! {
        <nav class="navbar" class:condensed=move || navbar_condensed(scroll_y.get())>
            <a href="/" class="brand">{BRAND}</a>
            <div class="nav-links">{desktop_links}</div>
            <div class="nav-actions">
                <a href=Page::SignIn.path() class="btn btn-ghost">{Page::SignIn.label()}</a>
                <a href=Page::SignIn.path() class="btn btn-primary">"Get Started"</a>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu.update(MobileMenu::toggle)
                >
                    {move || if menu.with(MobileMenu::is_open) { Icon::Close.glyph() } else { Icon::Menu.glyph() }}
                </button>
            </div>
            <div class="mobile-menu" class:open=move || menu.with(MobileMenu::is_open)>{mobile_links}</div>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <a href="/" class="brand">{BRAND}</a>
                    <p>"The all-in-one platform for your financial life."</p>
                    <div class="socials">
                        {FOOTER_SOCIALS.into_iter().map(|icon| view! {
                            <a href="#"><IconGlyph icon=icon /></a>
                        }).collect_view()}
                    </div>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        {FOOTER_COMPANY.into_iter().map(|item| view! { <li><a href="#">{item}</a></li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Resources"</h4>
                    <ul>
                        {FOOTER_RESOURCES.into_iter().map(|item| view! { <li><a href="#">{item}</a></li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Contact Us"</h4>
                    <ul class="contact">
                        <li><IconGlyph icon=Icon::MapPin />{CONTACT_ADDRESS[0]}<br />{CONTACT_ADDRESS[1]}</li>
                        <li><IconGlyph icon=Icon::Phone />{CONTACT_PHONE}</li>
                        <li><IconGlyph icon=Icon::Mail />{CONTACT_EMAIL}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {year} {BRAND} Inc. All rights reserved.")}</p>
                <div>
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                    <a href="#">"Cookies"</a>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    let scroll_y = use_scroll_y();

    let scroll_to_top = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || back_to_top_visible(scroll_y.get())>
            <button class="back-to-top" aria-label="Back to top" on:click=scroll_to_top>
                <IconGlyph icon=Icon::ArrowUp />
            </button>
        </Show>
    }
}

/// Number that counts up from zero once mounted
#[component]
pub fn Counter(
    to: f64,
    #[prop(optional)] prefix: &'static str,
    #[prop(optional)] suffix: &'static str,
) -> impl IntoView {
    let timing = use_context::<TimingConfig>().unwrap_or_default();
    let counter = CountUp::new(to, timing.count_up()).prefix(prefix).suffix(suffix);
    let frame = timing.count_up_frame();

    let elapsed = RwSignal::new(std::time::Duration::ZERO);
    let scheduler = BrowserScheduler;
    let done = counter.clone();
    let handle = every_until(&scheduler, frame, move || {
        let Some(now) = elapsed.try_update(|elapsed| {
            *elapsed += frame;
            *elapsed
        }) else {
            return false;
        };
        !done.is_complete(now)
    });
    on_cleanup(move || scheduler.cancel(handle));

    view! { <span class="counter">{move || counter.render(counter.value_at(elapsed.get()))}</span> }
}
