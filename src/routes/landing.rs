//! Landing page: hero, about, solution grid, and pricing. Static content only.

use crate::app_lib::theme::Theme;
use crate::components::{AppShell, PricingCard, PricingTier};
use crate::routes::paths;
use leptos::{
    callback::UnsyncCallback,
    prelude::*,
};
use leptos_router::{components::A, hooks::use_navigate};

const SOLUTIONS: &[(&str, &str, &str)] = &[
    (
        "summarize",
        "Filing digests",
        "Annual and quarterly reports condensed into the few numbers that matter.",
    ),
    (
        "newspaper",
        "News sentiment",
        "Recent headlines scored so you can see the mood around a company at a glance.",
    ),
    (
        "compare_arrows",
        "Peer comparison",
        "Valuation and growth lined up against the closest competitors.",
    ),
    (
        "lightbulb",
        "Plain-language insight",
        "A short narrative explaining what changed and why it might matter to you.",
    ),
];

const TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "$0",
        cadence: "/month",
        features: &["3 research reports per month", "Filing digests", "Email support"],
        highlighted: false,
    },
    PricingTier {
        name: "Investor",
        price: "$12",
        cadence: "/month",
        features: &[
            "Unlimited research reports",
            "News sentiment",
            "Peer comparison",
            "Watchlist alerts",
        ],
        highlighted: true,
    },
    PricingTier {
        name: "Pro",
        price: "$29",
        cadence: "/month",
        features: &[
            "Everything in Investor",
            "Portfolio-level insight",
            "Export to spreadsheet",
            "Priority support",
        ],
        highlighted: false,
    },
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <AppShell>
            <Hero />
            <AboutSection />
            <SolutionSection />
            <PricingSection />
        </AppShell>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class=Theme::SECTION>
            <div class="max-w-2xl space-y-6">
                <p class=Theme::EYEBROW>"Investment insight"</p>
                <h1 class="text-5xl font-bold tracking-tight text-slate-900 dark:text-white">
                    "Understand a stock before you buy it."
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-300">
                    "PB Insight reads the filings, the headlines, and the competition, then tells you what it found in plain language."
                </p>
                <div class="flex gap-4">
                    <A
                        href=paths::SIGN_UP
                        {..}
                        class="rounded-xl bg-emerald-600 px-6 py-3 text-sm font-medium text-white hover:bg-emerald-700"
                    >
                        "Create free account"
                    </A>
                    <a href="/#pricing" class="rounded-xl px-6 py-3 text-sm font-medium text-slate-700 hover:bg-slate-100">
                        "See pricing"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class=Theme::SECTION>
            <p class=Theme::EYEBROW>"About us"</p>
            <h2 class=Theme::SECTION_TITLE>"Research used to be for professionals."</h2>
            <div class="mt-6 grid gap-6 md:grid-cols-2 text-slate-600 dark:text-slate-300">
                <p>
                    "We started PB because everyday investors were making decisions from social media threads while analysts had entire teams behind them."
                </p>
                <p>
                    "Our goal is simple: make the same depth of research available to anyone, explained without jargon, in the time it takes to drink a coffee."
                </p>
            </div>
        </section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section id="solution" class=Theme::SECTION>
            <p class=Theme::EYEBROW>"Solution"</p>
            <h2 class=Theme::SECTION_TITLE>"Everything you need to form your own view."</h2>
            <div class="mt-8 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {SOLUTIONS
                    .iter()
                    .map(|(icon, title, body)| {
                        view! {
                            <div class=Theme::CARD>
                                <span class="material-symbols-outlined text-3xl text-emerald-600">
                                    {*icon}
                                </span>
                                <h3 class="mt-4 font-semibold text-slate-900 dark:text-white">
                                    {*title}
                                </h3>
                                <p class="mt-2 text-sm text-slate-600 dark:text-slate-300">{*body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PricingSection() -> impl IntoView {
    let navigate = use_navigate();
    let on_sign_in = UnsyncCallback::new(move |()| navigate(paths::SIGN_IN, Default::default()));

    view! {
        <section id="pricing" class=Theme::SECTION>
            <p class=Theme::EYEBROW>"Pricing"</p>
            <h2 class=Theme::SECTION_TITLE>"Start free. Upgrade when it pays for itself."</h2>
            <div class="mt-8 grid gap-6 md:grid-cols-3">
                {TIERS
                    .into_iter()
                    .map(|tier| view! { <PricingCard tier=tier on_sign_in=on_sign_in.clone() /> })
                    .collect_view()}
            </div>
        </section>
    }
}
