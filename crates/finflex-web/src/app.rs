//! Main App Component

use finflex_core::TimingConfig;
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{BackToTop, Footer, Navbar};
use crate::hooks::HandoffSlot;
use crate::pages::{AboutPage, FeaturesPage, HomePage, PlansPage, ServicesPage, SignInPage, SimplePage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let timing = TimingConfig::default();
    if let Err(err) = timing.validate() {
        leptos::logging::warn!("Invalid timing config: {err}");
    }
    provide_context(timing);
    provide_context(HandoffSlot::new());

    view! {
        <Router>
            <div class="app">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/features") view=FeaturesPage />
                        <Route path=path!("/services") view=ServicesPage />
                        <Route path=path!("/plans") view=PlansPage />
                        <Route path=path!("/simple") view=SimplePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/signin") view=SignInPage />
                    </Routes>
                </main>
                <Footer />
                <BackToTop />
            </div>
        </Router>
    }
}
