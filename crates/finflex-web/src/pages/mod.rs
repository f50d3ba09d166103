//! Page Components

mod about;
mod features;
mod home;
mod plans;
mod pricing;
mod services;
mod signin;
mod simple;

pub use about::AboutPage;
pub use features::FeaturesPage;
pub use home::HomePage;
pub use plans::PlansPage;
pub use pricing::PricingSection;
pub use services::ServicesPage;
pub use signin::SignInPage;
pub use simple::SimplePage;
