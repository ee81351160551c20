//! Research request page for signed-in users. While the demo request is
//! pending the `ResearchLoader` rotates status messages next to the spinner.

use crate::{
    app_lib::{config::AppConfig, theme::Theme},
    components::{Alert, AlertKind, AppShell, Button, ResearchLoader},
    features::{
        auth::RequireAuth,
        research::{
            DEMO_PREVIEW_DELAY_MS, cycler::RESEARCH_STATUS_MESSAGES, normalize_ticker,
            preview_notice,
        },
    },
};
use gloo_timers::future::TimeoutFuture;
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn ResearchPage() -> impl IntoView {
    let interval_ms = AppConfig::load().research_status_interval_ms;
    let (ticker, set_ticker) = signal(String::new());

    let request_action = Action::new_local(move |symbol: &String| {
        let symbol = symbol.clone();
        async move {
            TimeoutFuture::new(DEMO_PREVIEW_DELAY_MS).await;
            preview_notice(&symbol)
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let Some(symbol) = normalize_ticker(&ticker.get_untracked()) else {
            return;
        };
        if request_action.pending().get_untracked() {
            return;
        }
        request_action.dispatch(symbol);
    };

    view! {
        <AppShell>
            <RequireAuth>
                <section class=Theme::SECTION>
                    <p class=Theme::EYEBROW>"Research"</p>
                    <h1 class=Theme::SECTION_TITLE>"Request an insight report"</h1>
                    <form class="mt-8 flex max-w-md flex-col gap-4 sm:flex-row" on:submit=on_submit>
                        <input
                            type="text"
                            class=Theme::INPUT
                            placeholder="Ticker, e.g. AAPL"
                            required
                            on:input=move |event| set_ticker.set(event_target_value(&event))
                        />
                        <Button button_type="submit" disabled=request_action.pending()>
                            "Research"
                        </Button>
                    </form>
                    {move || {
                        request_action
                            .pending()
                            .get()
                            .then(|| {
                                view! {
                                    <ResearchLoader
                                        interval_ms=interval_ms
                                        messages=RESEARCH_STATUS_MESSAGES
                                    />
                                }
                            })
                    }}
                    {move || {
                        request_action
                            .value()
                            .get()
                            .filter(|_| !request_action.pending().get())
                            .map(|message| {
                                view! {
                                    <div class="mt-6 max-w-md">
                                        <Alert kind=AlertKind::Info message=message />
                                    </div>
                                }
                            })
                    }}
                </section>
            </RequireAuth>
        </AppShell>
    }
}
