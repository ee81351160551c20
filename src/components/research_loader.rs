//! Spinner plus rotating status line for long-running research requests. The
//! cycler's timer is released when the component is torn down.

use crate::{
    components::Spinner,
    features::research::cycler::{self, IntervalScheduler},
};
use leptos::prelude::*;

#[component]
pub fn ResearchLoader(interval_ms: u32, messages: &'static [&'static str]) -> impl IntoView {
    let (index, set_index) = signal(0_usize);
    let handle = cycler::start(
        &IntervalScheduler,
        interval_ms,
        messages.iter().copied(),
        move |next| set_index.set(next),
    );
    let slot = StoredValue::new_local(Some(handle));

    on_cleanup(move || {
        if let Some(Some(handle)) = slot.try_update_value(Option::take) {
            handle.stop();
        }
    });

    let message = move || messages.get(index.get()).copied().unwrap_or_default();

    view! {
        <div class="flex flex-col items-center gap-4 py-10 text-center">
            <Spinner />
            <p class="text-sm text-slate-600 dark:text-slate-300" aria-live="polite">
                {message}
            </p>
        </div>
    }
}
