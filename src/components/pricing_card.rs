use crate::app_lib::theme::Theme;
use leptos::{
    callback::{Callable, UnsyncCallback},
    prelude::*,
};

#[derive(Clone, Copy)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

/// Renders one pricing tier. The call-to-action only asks the host to start
/// the sign-in flow.
#[component]
pub fn PricingCard(tier: PricingTier, on_sign_in: UnsyncCallback<()>) -> impl IntoView {
    view! {
        <div class=Theme::CARD class:ring-2=tier.highlighted class:ring-emerald-500=tier.highlighted>
            <h3 class="text-lg font-semibold text-slate-900 dark:text-white">{tier.name}</h3>
            <p class="mt-4">
                <span class="text-4xl font-bold text-slate-900 dark:text-white">{tier.price}</span>
                <span class="text-sm text-slate-500">{tier.cadence}</span>
            </p>
            <ul class="mt-6 space-y-2 text-sm text-slate-600 dark:text-slate-300">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2">
                                <span class="material-symbols-outlined text-base text-emerald-600">
                                    "check"
                                </span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class="mt-8 w-full rounded-xl border border-emerald-600 px-4 py-2.5 text-sm font-medium text-emerald-700 hover:bg-emerald-50"
                on:click=move |_| on_sign_in.run(())
            >
                "Choose " {tier.name}
            </button>
        </div>
    }
}
