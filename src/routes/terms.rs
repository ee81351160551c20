use crate::app_lib::theme::Theme;
use crate::components::AppShell;
use leptos::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    (
        "1. Acceptance",
        "By creating an account or using PB Insight you agree to these terms. If you do not agree, do not use the service.",
    ),
    (
        "2. Not financial advice",
        "Reports are generated for general information. They are not a recommendation to buy, sell, or hold any security. Always do your own research and consider speaking with a licensed advisor.",
    ),
    (
        "3. Accounts",
        "You are responsible for keeping your sign-in details private. Demo accounts created in development builds are stored only in your browser and can be lost at any time.",
    ),
    (
        "4. Acceptable use",
        "Do not scrape, resell, or attempt to disrupt the service, and do not use it to break the law.",
    ),
    (
        "5. Changes",
        "We may update these terms. Continuing to use PB Insight after a change means you accept the updated terms.",
    ),
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <AppShell>
            <article class=Theme::SECTION>
                <p class=Theme::EYEBROW>"Legal"</p>
                <h1 class=Theme::SECTION_TITLE>"Terms of Service"</h1>
                <div class="mt-8 max-w-3xl space-y-6">
                    {SECTIONS
                        .iter()
                        .map(|(heading, body)| {
                            view! {
                                <section>
                                    <h2 class="font-semibold text-slate-900 dark:text-white">
                                        {*heading}
                                    </h2>
                                    <p class="mt-2 text-slate-600 dark:text-slate-300">{*body}</p>
                                </section>
                            }
                        })
                        .collect_view()}
                </div>
            </article>
        </AppShell>
    }
}
