use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Branded two-column frame for the sign-up and sign-in forms.
#[component]
pub fn AuthShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen grid lg:grid-cols-2 bg-white dark:bg-slate-900">
            <aside class="hidden lg:flex flex-col justify-between bg-emerald-700 p-12 text-white">
                <A href=paths::ROOT {..} class="flex items-center space-x-3">
                    <img src="/logo.svg" class="h-8" alt="PB" />
                    <span class="font-semibold">"PB Insight"</span>
                </A>
                <div class="space-y-4">
                    <h2 class="text-3xl font-semibold leading-tight">
                        "Research any company in minutes, not weekends."
                    </h2>
                    <p class="text-emerald-100">
                        "Plain-language summaries of filings, news, and peers, built for everyday investors."
                    </p>
                </div>
                <p class="text-xs text-emerald-200">
                    "Demo accounts are stored only in this browser."
                </p>
            </aside>
            <div class="flex items-center justify-center px-6 py-10">{children()}</div>
        </div>
    }
}
