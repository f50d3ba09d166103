//! Pricing Section
//!
//! Frequency tabs over the tier cards. Choosing a tier stages its
//! selection in the handoff slot and moves to sign-in.

use finflex_checkout::PlanSelector;
use finflex_core::{BillingFrequency, Catalog, Icon, Page};
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::IconGlyph;
use crate::hooks::use_handoff;

#[component]
pub fn PricingSection() -> impl IntoView {
    let selector = RwSignal::new(PlanSelector::new(Catalog::finflex()));
    let handoff = use_handoff();
    let navigate = use_navigate();

    let choose = move |tier_id: &str| match selector.with_untracked(|s| s.select(tier_id)) {
        Ok(payload) => {
            handoff.offer(payload);
            navigate(Page::SignIn.path(), Default::default());
        }
        Err(err) => warn!("Plan selection failed: {err} ({})", err.user_message()),
    };

    let tabs = BillingFrequency::ALL
        .into_iter()
        .map(|frequency| {
            view! {
                <button
                    class="tab"
                    class:selected=move || selector.with(|s| s.frequency() == frequency)
                    on:click=move |_| selector.update(|s| s.set_frequency(frequency))
                >
                    {frequency.label()}
                    {frequency.discount_badge().map(|badge| view! { <span class="badge">{badge}</span> })}
                </button>
            }
        })
        .collect_view();

    let tiers = selector.with_untracked(|s| s.catalog().tiers().to_vec());
    let cards = tiers
        .into_iter()
        .map(|tier| {
            let choose = choose.clone();
            let id = tier.id.clone();
            let priced = tier.clone();
            let captioned = tier.clone();

            view! {
                <div
                    class="plan"
                    class:popular=tier.flags.popular
                    class:highlighted=tier.flags.highlighted
                >
                    <h3>
                        {tier.name.clone()}
                        {tier.flags.popular.then(|| view! {
                            <span class="badge"><IconGlyph icon=Icon::Fire />"Most Popular"</span>
                        })}
                    </h3>
                    <div class="price">{move || selector.with(|s| s.card_price(&priced))}</div>
                    <Show when=move || selector.with(|s| captioned.price_for(s.frequency()).is_numeric())>
                        <p class="caption">"Per month/user"</p>
                    </Show>
                    <p class="description">{tier.description.clone()}</p>
                    <ul class="plan-features">
                        {tier.features.iter().map(|feature| view! {
                            <li><IconGlyph icon=Icon::Check />{feature.clone()}</li>
                        }).collect_view()}
                    </ul>
                    <button
                        class="btn"
                        class:btn-primary=tier.flags.popular || tier.flags.highlighted
                        on:click=move |_| choose(&id)
                    >
                        {tier.cta.clone()}
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="pricing" id="pricing">
            <div class="section-heading">
                <span class="eyebrow">"Transparent Pricing"</span>
                <h2>"Plans and Pricing"</h2>
                <p class="lead">
                    "Receive unlimited credits when you pay yearly, and save on your plan. No hidden fees."
                </p>
            </div>
            <div class="frequency-tabs">{tabs}</div>
            <div class="plans">{cards}</div>
        </section>
    }
}
