//! Sign-in and Checkout Page
//!
//! Claims the pending plan selection on mount, then walks the checkout
//! flow: sign-in stub, simulated payment, success.

use finflex_checkout::{
    AuthForm, AuthStub, CardField, CheckoutFlow, CheckoutStep, PaymentMethod, PaymentPhase, PaymentStub,
    PaymentSummary,
};
use finflex_core::motion::{SIGN_IN_TILT_DEGREES, Tilt};
use finflex_core::{Icon, Scheduler, TimingConfig};
use leptos::ev;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::IconGlyph;
use crate::hooks::{BrowserScheduler, TimerHandle, use_handoff};

fn viewport() -> (f64, f64) {
    let window = window();
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(1.0);
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(1.0);
    (width, height)
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let timing = use_context::<TimingConfig>().unwrap_or_default();
    let flow = RwSignal::new(CheckoutFlow::new(use_handoff().take(), timing.payment_delay()));
    let step = Memo::new(move |_| flow.with(CheckoutFlow::step));
    let tilt = RwSignal::new(Tilt::default());

    let on_pointer = move |ev: ev::MouseEvent| {
        let (width, height) = viewport();
        tilt.set(Tilt::from_pointer(
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
            width,
            height,
            SIGN_IN_TILT_DEGREES,
        ));
    };

    view! {
        <div class="signin-page" on:mousemove=on_pointer>
            <aside class="signin-visual">
                <div class="tilt-card" style:transform=move || tilt.get().css_transform()>
                    {move || match step.get() {
                        CheckoutStep::Auth => view! { <IconGlyph icon=Icon::Lock /> }.into_any(),
                        CheckoutStep::Payment => view! { <CardPreview flow=flow /> }.into_any(),
                    }}
                </div>
                <h2>
                    {move || match step.get() {
                        CheckoutStep::Auth => "Access Control",
                        CheckoutStep::Payment => "Secure Transaction",
                    }}
                </h2>
                <p>
                    {move || match step.get() {
                        CheckoutStep::Auth => "Join 10M+ users managing their financial life with FinFlex.",
                        CheckoutStep::Payment => "Your payment data is tokenized and never stored on our servers.",
                    }}
                </p>
            </aside>
            <section class="signin-panel">
                {move || match step.get() {
                    CheckoutStep::Auth => view! { <AuthPanel flow=flow /> }.into_any(),
                    CheckoutStep::Payment => view! { <PaymentPanel flow=flow /> }.into_any(),
                }}
            </section>
        </div>
    }
}

/// Card mock mirroring whichever field has focus
#[component]
fn CardPreview(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let focused = Memo::new(move |_| flow.with(|f| f.payment().and_then(PaymentStub::focused)));

    let line = move |field: CardField| {
        view! {
            <div class="card-line" class:focused=move || focused.get() == Some(field)>
                <span class="card-label">{field.label()}</span>
                <span class="card-value">{field.preview()}</span>
            </div>
        }
    };

    view! {
        <div class="card-preview">
            <span class="card-brand">"VISA"</span>
            {line(CardField::Number)}
            <div class="card-row">
                {line(CardField::Name)}
                {line(CardField::Expiry)}
            </div>
        </div>
    }
}

#[component]
fn AuthPanel(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let mode = Memo::new(move |_| flow.with(|f| f.auth().map(AuthStub::mode).unwrap_or_default()));

    let value = move |read: fn(&AuthForm) -> &String| {
        move || flow.with(|f| f.auth().map(|auth| read(auth.form()).clone()).unwrap_or_default())
    };
    let edit = move |write: fn(&mut AuthForm, String)| {
        move |ev: ev::Event| {
            let input = event_target_value(&ev);
            flow.update(|f| match f.auth_form_mut() {
                Ok(form) => write(form, input),
                Err(err) => warn!("Sign-in edit ignored: {err}"),
            });
        }
    };

    let submit = move || {
        if let Some(Err(err)) = flow.try_update(CheckoutFlow::submit_auth) {
            warn!("Sign-in submit ignored: {err}");
        }
    };

    let toggle = move |_| {
        if let Some(Err(err)) = flow.try_update(CheckoutFlow::toggle_auth_mode) {
            warn!("Mode toggle ignored: {err}");
        }
    };

    view! {
        <div class="auth-panel">
            <h1>{move || mode.get().title()}</h1>
            <p class="subtitle">{move || mode.get().subtitle()}</p>

            <form on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }>
                <Show when=move || mode.get().shows_full_name()>
                    <label class="field">
                        <IconGlyph icon=Icon::User />
                        <input
                            type="text"
                            placeholder="Full Name"
                            prop:value=value(|form| &form.full_name)
                            on:input=edit(|form, input| form.full_name = input)
                        />
                    </label>
                </Show>
                <label class="field">
                    <IconGlyph icon=Icon::Mail />
                    <input
                        type="email"
                        placeholder="name@company.com"
                        prop:value=value(|form| &form.email)
                        on:input=edit(|form, input| form.email = input)
                    />
                </label>
                <label class="field">
                    <IconGlyph icon=Icon::Key />
                    <input
                        type="password"
                        placeholder="••••••••"
                        prop:value=value(|form| &form.password)
                        on:input=edit(|form, input| form.password = input)
                    />
                </label>
                <Show when=move || mode.get().shows_forgot_password()>
                    <a href="#" class="forgot">"Forgot password?"</a>
                </Show>
                <button type="submit" class="btn btn-primary">
                    {move || mode.get().submit_label()}
                    <IconGlyph icon=Icon::ArrowRight />
                </button>
            </form>

            <p class="divider">"Or continue with"</p>
            <div class="social-auth">
                <button class="btn" on:click=move |_| submit()><IconGlyph icon=Icon::Google />"Google"</button>
                <button class="btn" on:click=move |_| submit()><IconGlyph icon=Icon::Apple />"Apple"</button>
            </div>

            <p class="switch">
                {move || mode.get().switch_prompt()}
                " "
                <button class="link" on:click=toggle>{move || mode.get().switch_label()}</button>
            </p>
        </div>
    }
}

#[component]
fn PaymentPanel(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let scheduler = BrowserScheduler;
    let pending = StoredValue::new(None::<TimerHandle>);
    on_cleanup(move || scheduler.cancel(pending.get_value()));

    let phase = Memo::new(move |_| flow.with(|f| f.payment().map(PaymentStub::phase).unwrap_or_default()));
    let method = Memo::new(move |_| flow.with(|f| f.payment().map(PaymentStub::method).unwrap_or_default()));
    let summary = flow
        .with_untracked(|f| f.payment().map(|payment| payment.summary().clone()))
        .unwrap_or_else(|| PaymentSummary::from_selection(None));

    let pay = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match flow.try_update(CheckoutFlow::pay) {
            Some(Ok(delay)) => {
                let handle = scheduler.after(
                    delay,
                    Box::new(move || {
                        if let Some(Err(err)) = flow.try_update(CheckoutFlow::settle) {
                            warn!("Payment settle ignored: {err}");
                        }
                    }),
                );
                pending.set_value(handle);
            }
            Some(Err(err)) => warn!("Pay ignored: {err} ({})", err.user_message()),
            None => {}
        }
    };

    let back = move |_| {
        if let Some(Err(err)) = flow.try_update(CheckoutFlow::back) {
            warn!("Back ignored: {err}");
        }
    };

    let methods = PaymentMethod::ALL
        .into_iter()
        .map(|option| {
            view! {
                <button
                    type="button"
                    class="method"
                    class:active=move || method.get() == option
                    disabled=move || phase.get() != PaymentPhase::Idle
                    on:click=move |_| {
                        flow.update(|f| {
                            if let Some(Err(err)) = f.payment_mut().map(|p| p.select_method(option)) {
                                warn!("Method change ignored: {err}");
                            }
                        });
                    }
                >
                    <IconGlyph icon=option.icon() />
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    let card_fields = CardField::ALL
        .into_iter()
        .map(|field| {
            view! {
                <label class="field">
                    <span>{field.label()}</span>
                    <input
                        type="text"
                        placeholder=field.placeholder()
                        on:focus=move |_| flow.update(|f| {
                            if let Some(payment) = f.payment_mut() {
                                payment.focus(field);
                            }
                        })
                        on:blur=move |_| flow.update(|f| {
                            if let Some(payment) = f.payment_mut() {
                                payment.blur();
                            }
                        })
                    />
                </label>
            }
        })
        .collect_view();

    let form = view! {
        <form class="payment-form" on:submit=pay>
            <div class="methods">{methods}</div>
            <div class="card-fields" class:hidden=move || method.get().redirects()>{card_fields}</div>
            <Show when=move || method.get().redirects()>
                <p class="redirect">"Redirecting to secure provider..."</p>
            </Show>
            <button type="submit" class="btn btn-primary" disabled=move || phase.get() != PaymentPhase::Idle>
                <IconGlyph icon=Icon::Lock />
                {move || flow.with(|f| f.payment().map(PaymentStub::pay_label).unwrap_or_default())}
            </button>
        </form>
    };

    view! {
        <div class="payment-panel">
            <Show when=move || phase.get() == PaymentPhase::Idle>
                <button class="link back" on:click=back>
                    <IconGlyph icon=Icon::ArrowLeft />"Back"
                </button>
            </Show>
            <h1>"Secure Payment"</h1>
            <div class="order-summary">
                <IconGlyph icon=Icon::ShoppingCart />
                <div>
                    <p class="plan">{summary.plan_title()}</p>
                    <p class="billing">{summary.billing_line()}</p>
                </div>
                <p class="total">{summary.display_price.clone()}</p>
            </div>
            <div class:hidden=move || phase.get() == PaymentPhase::Success>{form}</div>
            <Show when=move || phase.get() == PaymentPhase::Success>
                <PaymentSuccess flow=flow />
            </Show>
            <p class="secure-note"><IconGlyph icon=Icon::ShieldCheck />"256-bit SSL Encrypted Payment"</p>
        </div>
    }
}

#[component]
fn PaymentSuccess(flow: RwSignal<CheckoutFlow>) -> impl IntoView {
    let navigate = use_navigate();
    let message = flow.with_untracked(|f| f.payment().map(PaymentStub::success_message).unwrap_or_default());

    let finish = move |_| match flow.with_untracked(CheckoutFlow::exit) {
        Ok(page) => navigate(page.path(), Default::default()),
        Err(err) => warn!("Exit ignored: {err}"),
    };

    view! {
        <div class="payment-success">
            <IconGlyph icon=Icon::Check />
            <h2>"Payment Successful!"</h2>
            <p>{message}</p>
            <button class="btn btn-primary" on:click=finish>"Go to Dashboard"</button>
        </div>
    }
}
