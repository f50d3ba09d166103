//! Page Content
//!
//! Typed copy for the marketing pages. Icons are a closed set so pages never
//! pass arbitrary components around.

use serde::Serialize;

/// Every icon the site renders
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Globe,
    ShieldCheck,
    Zap,
    BarChart,
    Wallet,
    Smartphone,
    TrendingUp,
    Building,
    CreditCard,
    Code,
    Lock,
    Link,
    Check,
    Cross,
    Quote,
    User,
    Mail,
    Key,
    ShoppingCart,
    ArrowUp,
    ArrowLeft,
    ArrowRight,
    Menu,
    Close,
    Apple,
    Google,
    PayPal,
    Fire,
    Help,
    MapPin,
    Phone,
    Github,
    Instagram,
    Facebook,
    Youtube,
    Eye,
    Heart,
    Award,
}

impl Icon {
    /// Text glyph used in place of an SVG asset
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Globe => "🌐",
            Icon::ShieldCheck => "🛡️",
            Icon::Zap => "⚡",
            Icon::BarChart => "📊",
            Icon::Wallet => "👛",
            Icon::Smartphone => "📱",
            Icon::TrendingUp => "📈",
            Icon::Building => "🏢",
            Icon::CreditCard => "💳",
            Icon::Code => "</>",
            Icon::Lock => "🔒",
            Icon::Link => "🔗",
            Icon::Check => "✓",
            Icon::Cross => "✕",
            Icon::Quote => "❝",
            Icon::User => "👤",
            Icon::Mail => "✉",
            Icon::Key => "🔑",
            Icon::ShoppingCart => "🛒",
            Icon::ArrowUp => "↑",
            Icon::ArrowLeft => "←",
            Icon::ArrowRight => "→",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::Apple => "",
            Icon::Google => "G",
            Icon::PayPal => "P",
            Icon::Fire => "🔥",
            Icon::Help => "?",
            Icon::MapPin => "📍",
            Icon::Phone => "📞",
            Icon::Github => "GH",
            Icon::Instagram => "IG",
            Icon::Facebook => "FB",
            Icon::Youtube => "YT",
            Icon::Eye => "👁",
            Icon::Heart => "♥",
            Icon::Award => "🏆",
        }
    }
}

pub const BRAND: &str = "FinFlex";

/// Rotating hero headlines
pub const HEADLINES: [&str; 5] = [
    "Seamless Transactions",
    "Global Payments",
    "Secure Banking",
    "Digital Assets",
    "Instant Transfers",
];

/// First word and the accented remainder of a headline
pub fn split_headline(headline: &str) -> (&str, &str) {
    match headline.split_once(' ') {
        Some((lead, rest)) => (lead, rest),
        None => (headline, ""),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 10] = [
    Testimonial {
        text: "FinFlex completely revolutionized how I manage my freelance income across Wise and PayPal. The conversion rates are unbeatable.",
        author: "Sarah Jenkins",
        role: "Digital Nomad",
    },
    Testimonial {
        text: "The security features gave me peace of mind. Connecting my Amex and Crypto wallets in one dashboard is a game changer.",
        author: "Michael Chen",
        role: "Tech Entrepreneur",
    },
    Testimonial {
        text: "I was skeptical at first, but the 'Teams' plan saved my small business thousands in international transaction fees.",
        author: "Elena Rodriguez",
        role: "CEO, StartUp Inc",
    },
    Testimonial {
        text: "Finally, a dashboard that actually understands multi-currency cash flow. I can track my investments in real-time.",
        author: "David Kim",
        role: "Investment Analyst",
    },
    Testimonial {
        text: "The API integration is flawless. We connected our internal billing system in less than a day.",
        author: "Jessica T.",
        role: "CTO, FinTech Sol",
    },
    Testimonial {
        text: "Customer support is top-notch. They resolved my verification issue within minutes, not days.",
        author: "Ahmed Hassan",
        role: "E-commerce Seller",
    },
    Testimonial {
        text: "I love the mobile app. Managing expenses on the go has never been smoother or looked better.",
        author: "Maria Garcia",
        role: "Travel Blogger",
    },
    Testimonial {
        text: "The transparency in pricing is refreshing. No hidden fees, just great service.",
        author: "Robert Stone",
        role: "Small Business Owner",
    },
    Testimonial {
        text: "Switching to FinFlex was the best financial decision I made this year. Highly recommended.",
        author: "Emily Clark",
        role: "Freelance Designer",
    },
    Testimonial {
        text: "Secure, fast, and reliable. Exactly what I need for my international transactions.",
        author: "Tom Baker",
        role: "Global Consultant",
    },
];

/// Partner logos in the home carousel
pub const LOGOS: [&str; 10] = [
    "Google",
    "SpaceX",
    "Microsoft",
    "OpenAI",
    "PayPal",
    "Payoneer",
    "Visa",
    "MasterCard",
    "Stripe",
    "Amazon Pay",
];

/// Copies of the logo strip laid end to end so the marquee never shows a gap
pub const LOGO_STRIP_COPIES: usize = 3;

/// Icon + title + blurb card used by several pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Highlight; 6] = [
    Highlight {
        icon: Icon::Globe,
        title: "Global Accounts",
        description: "Open local accounts in 10 currencies. Receive money like a local, no matter where you are.",
    },
    Highlight {
        icon: Icon::ShieldCheck,
        title: "Bank-Grade Security",
        description: "AES-256 encryption and biometric authentication ensure your assets are always protected.",
    },
    Highlight {
        icon: Icon::Zap,
        title: "Instant Transfers",
        description: "Move money between accounts in seconds, not days. Zero fees for internal transfers.",
    },
    Highlight {
        icon: Icon::BarChart,
        title: "Smart Analytics",
        description: "Visualize your spending habits with AI-powered insights and forecasting tools.",
    },
    Highlight {
        icon: Icon::Wallet,
        title: "Multi-Asset Wallet",
        description: "Hold Fiat, Crypto, and Commodities in a single unified dashboard.",
    },
    Highlight {
        icon: Icon::Smartphone,
        title: "Mobile First",
        description: "Manage everything from your phone with our award-winning iOS and Android apps.",
    },
];

/// Column headers of the feature comparison matrix
pub const COMPARISON_TIERS: [&str; 3] = ["Basic", "Pro", "Elite"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TierComparison {
    pub feature: &'static str,
    pub included: [bool; 3],
}

pub const TIER_COMPARISON: [TierComparison; 9] = [
    TierComparison { feature: "International Transfers", included: [true, true, true] },
    TierComparison { feature: "Virtual Cards", included: [true, true, true] },
    TierComparison { feature: "Crypto Trading", included: [false, true, true] },
    TierComparison { feature: "Priority Support", included: [false, true, true] },
    TierComparison { feature: "Metal Card", included: [false, false, true] },
    TierComparison { feature: "Concierge Service", included: [false, false, true] },
    TierComparison { feature: "API Access", included: [false, true, true] },
    TierComparison { feature: "Team Seats", included: [false, true, true] },
    TierComparison { feature: "Custom Limits", included: [false, false, true] },
];

pub const SERVICES: [Highlight; 6] = [
    Highlight {
        icon: Icon::Globe,
        title: "Digital Banking",
        description: "Borderless accounts with IBANs in 30+ countries. Hold, convert, and spend instantly.",
    },
    Highlight {
        icon: Icon::TrendingUp,
        title: "Wealth Management",
        description: "AI-driven portfolio balancing for stocks, crypto, and commodities.",
    },
    Highlight {
        icon: Icon::Building,
        title: "Enterprise Payroll",
        description: "Automate payouts to contractors and employees worldwide in their local currency.",
    },
    Highlight {
        icon: Icon::CreditCard,
        title: "Card Issuance",
        description: "Issue virtual and physical cards for your team with custom spending limits.",
    },
    Highlight {
        icon: Icon::Code,
        title: "API Solutions",
        description: "Integrate our banking infrastructure directly into your product with few lines of code.",
    },
    Highlight {
        icon: Icon::ShieldCheck,
        title: "Escrow Services",
        description: "Secure high-value transactions with conditional release logic.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Transactions", value: "2B+" },
    Stat { label: "Uptime", value: "99.99%" },
    Stat { label: "Countries", value: "140+" },
    Stat { label: "Currencies", value: "30+" },
];

/// Steps of the "why is it simple" story, driven by scroll progress
pub const SIMPLE_STEPS: [Highlight; 3] = [
    Highlight {
        icon: Icon::Link,
        title: "1. Connect",
        description: "Link your existing bank accounts, credit cards, and digital wallets in seconds using our secure Plaid integration.",
    },
    Highlight {
        icon: Icon::Zap,
        title: "2. Automate",
        description: "Set smart rules for savings, investments, and recurring payments. Let our AI handle the math.",
    },
    Highlight {
        icon: Icon::Lock,
        title: "3. Secure",
        description: "Rest easy knowing your data is protected by military-grade AES-256 encryption and biometric locks.",
    },
];

/// Step title without its ordinal ("2. Automate" -> "Automate")
pub fn step_name(title: &str) -> &str {
    title.split_once(". ").map_or(title, |(_, name)| name)
}

/// Features where FinFlex has it and traditional banks don't
pub const SIMPLE_COMPARISON: [&str; 6] = [
    "Account Setup Time",
    "Zero Foreign Fees",
    "24/7 Support",
    "Crypto Integration",
    "Real-time Analytics",
    "API Access",
];

pub const INTEGRATIONS: [&str; 10] = [
    "Quickbooks",
    "Xero",
    "Slack",
    "Zapier",
    "Salesforce",
    "Shopify",
    "Stripe",
    "PayPal",
    "Wise",
    "Revolut",
];

pub const ADVANTAGES: [&str; 5] = [
    "Real-time currency conversion at interbank rates",
    "Instant transfers between FinFlex users globally",
    "Dedicated IBANs in 30+ currencies",
    "Crypto and Stock trading in one app",
    "24/7 Priority human support",
];

pub const TRADITIONAL_DRAWBACKS: [&str; 5] = [
    "Hidden FX fees and markups on exchange rates",
    "3-5 business days for international wires",
    "Limited to single currency accounts",
    "Separate apps for banking and investing",
    "Long wait times and automated phone trees",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MarketComparison {
    pub label: &'static str,
    pub finflex: &'static str,
    pub others: &'static str,
}

pub const MARKET_COMPARISON: [MarketComparison; 5] = [
    MarketComparison { label: "Monthly Fee (Standard)", finflex: "$0", others: "$10+" },
    MarketComparison { label: "International Transfer Fee", finflex: "0.4%", others: "2-5%" },
    MarketComparison { label: "ATM Withdrawals", finflex: "Free up to $1k", others: "$3-5 fee" },
    MarketComparison { label: "Crypto Fees", finflex: "1.5%", others: "2.5%+" },
    MarketComparison { label: "Virtual Cards", finflex: "Unlimited", others: "Limited" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 3] = [
    Faq {
        question: "Can I cancel anytime?",
        answer: "Yes, you can downgrade or cancel your plan at any time with no penalty.",
    },
    Faq {
        question: "Is my money safe?",
        answer: "Your funds are safeguarded in regulated bank accounts and protected by 256-bit encryption.",
    },
    Faq {
        question: "Do you offer business accounts?",
        answer: "Absolutely. Our Teams and Organization plans are designed specifically for businesses.",
    },
];

pub const VALUES: [Highlight; 3] = [
    Highlight {
        icon: Icon::Eye,
        title: "Radical Transparency",
        description: "We believe in open banking, open source, and open communication. No hidden fees, ever.",
    },
    Highlight {
        icon: Icon::Heart,
        title: "User Obsession",
        description: "Every pixel, every line of code is crafted with the end-user in mind. Simplicity is our religion.",
    },
    Highlight {
        icon: Icon::Award,
        title: "Excellence Always",
        description: "We don't cut corners. We build robust, scalable systems that can handle the weight of the world.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: [TeamMember; 3] = [
    TeamMember { name: "Alex Mercer", role: "Founder & CEO" },
    TeamMember { name: "Sarah Lin", role: "Chief Technology Officer" },
    TeamMember { name: "David Okonjo", role: "Head of Product" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: [Milestone; 5] = [
    Milestone {
        year: "2020",
        title: "The Beginning",
        description: "Started in a garage in San Francisco with a vision to simplify cross-border payments.",
    },
    Milestone {
        year: "2021",
        title: "Series A",
        description: "Raised $15M led by top tier VCs. Launched our first mobile app.",
    },
    Milestone {
        year: "2022",
        title: "European Expansion",
        description: "Opened offices in London and Berlin. Reached 100k active users.",
    },
    Milestone {
        year: "2023",
        title: "FinFlex Business",
        description: "Launched B2B suite. Processed over $1B in annual transactions.",
    },
    Milestone {
        year: "2024",
        title: "Global Scale",
        description: "Expanding to Asia and LatAm. The revolution continues.",
    },
];

/// Text wrapped around the About page badge
pub const CIRCULAR_TEXT: &str = "FINFLEX • INNOVATION • TRUST • FUTURE • ";

/// Degrees each letter is rotated when laid out on a circle
pub fn circular_letter_angles(text: &str) -> Vec<(char, f64)> {
    let letters: Vec<char> = text.chars().collect();
    if letters.is_empty() {
        return Vec::new();
    }
    let step = 360.0 / letters.len() as f64;
    letters
        .into_iter()
        .enumerate()
        .map(|(i, c)| (c, step * i as f64))
        .collect()
}

pub const FOOTER_COMPANY: [&str; 5] = ["About Us", "Careers", "Blog", "Press", "Partners"];

pub const FOOTER_RESOURCES: [&str; 5] = [
    "Help Center",
    "Terms of Service",
    "Privacy Policy",
    "Security",
    "Sitemap",
];

pub const FOOTER_SOCIALS: [Icon; 4] = [Icon::Github, Icon::Instagram, Icon::Facebook, Icon::Youtube];

pub const CONTACT_ADDRESS: [&str; 2] = ["123 Finance St, Suite 100", "New York, NY 10001"];
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_EMAIL: &str = "support@finflex.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_headline() {
        assert_eq!(split_headline("Seamless Transactions"), ("Seamless", "Transactions"));
        assert_eq!(split_headline("Banking"), ("Banking", ""));
    }

    #[test]
    fn test_step_name() {
        assert_eq!(step_name(SIMPLE_STEPS[1].title), "Automate");
        assert_eq!(step_name("Plain"), "Plain");
    }

    #[test]
    fn test_circular_angles() {
        let angles = circular_letter_angles("ABCD");
        assert_eq!(angles.len(), 4);
        assert_eq!(angles[1], ('B', 90.0));
        assert_eq!(angles[3], ('D', 270.0));
        assert!(circular_letter_angles("").is_empty());
    }

    #[test]
    fn test_icon_kebab_names() {
        assert_eq!(serde_json::to_string(&Icon::ShieldCheck).unwrap(), "\"shield-check\"");
    }
}
