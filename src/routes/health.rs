use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <AppShell>
            <div class="flex justify-center px-4 py-16">
                <div class="block max-w-[38rem] rounded-lg border border-slate-200 bg-white dark:border-slate-600 dark:bg-slate-800">
                    <div class="border-b border-slate-200 px-6 py-3 font-semibold text-slate-600 dark:text-slate-100">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-slate-900 dark:text-slate-50">{commit}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
