//! Marketing layout with the product header, section anchors, and account
//! links. Navigation stays client-side; the signed-in state shown here is the
//! local demo marker only.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-slate-700 rounded hover:bg-slate-100 md:hover:bg-transparent md:p-0 md:hover:text-emerald-700 dark:text-white";

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let auth = use_auth();
    let (sign_out_failed, set_sign_out_failed) = signal(false);

    let on_sign_out = move |_| {
        set_menu_open.set(false);
        match auth.sign_out() {
            Ok(()) => set_sign_out_failed.set(false),
            Err(err) => {
                tracing::error!(error = %err, "sign out failed");
                set_sign_out_failed.set(true);
            }
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50 dark:bg-slate-900">
            <header class="border-b border-slate-200 bg-white dark:border-slate-700 dark:bg-slate-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::ROOT
                        {..}
                        class="flex items-center space-x-3"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="PB" />
                        <span class="font-semibold whitespace-nowrap text-slate-900 dark:text-white">
                            "PB Insight"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-slate-500 rounded-lg md:hidden hover:bg-slate-100 focus:outline-none focus:ring-2 focus:ring-slate-200"
                        aria-controls="navbar-main"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <span class="material-symbols-outlined">"menu"</span>
                    </button>
                    <nav
                        id="navbar-main"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 md:mt-0 md:flex-row md:items-center md:space-x-8">
                            <li><a href="/#about" class=NAV_LINK>"About"</a></li>
                            <li><a href="/#solution" class=NAV_LINK>"Solution"</a></li>
                            <li><a href="/#pricing" class=NAV_LINK>"Pricing"</a></li>
                            <li>
                                <A href=paths::RESEARCH {..} class=NAV_LINK>
                                    "Research"
                                </A>
                            </li>
                            <Show
                                when=move || auth.is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <li>
                                            <A href=paths::SIGN_IN {..} class=NAV_LINK>
                                                "Sign In"
                                            </A>
                                        </li>
                                        <li>
                                            <A
                                                href=paths::SIGN_UP
                                                {..}
                                                class="block py-2 px-4 rounded-lg bg-emerald-600 text-white hover:bg-emerald-700"
                                            >
                                                "Get started"
                                            </A>
                                        </li>
                                    }
                                }
                            >
                                <li class="py-2 px-3 text-sm text-slate-500 md:p-0">
                                    {move || auth.current_user.get().unwrap_or_default()}
                                </li>
                                <li>
                                    <button type="button" class=NAV_LINK on:click=on_sign_out>
                                        "Sign Out"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </nav>
                </div>
            </header>
            <Show when=move || sign_out_failed.get()>
                <div class="mx-auto max-w-screen-xl px-4 pt-4 text-sm text-red-700">
                    "Sign out failed because browser storage is unavailable."
                </div>
            </Show>
            <main class="flex-1">{children()}</main>
            <footer class="border-t border-slate-200 py-8 text-center text-sm text-slate-500 dark:border-slate-700">
                <span>"© PB Insight. Insights are informational, not financial advice."</span>
                " "
                <A href=paths::TERMS {..} class="font-medium text-emerald-700 hover:underline">
                    "Terms of Service"
                </A>
                " · "
                <A href=paths::HEALTH {..} class="font-medium text-emerald-700 hover:underline">
                    "Status"
                </A>
            </footer>
        </div>
    }
}
