use crate::app_lib::{AppError, config::AppConfig, theme::Theme};
use crate::components::{Alert, AlertKind, AuthShell, Button};
use crate::features::auth::sign_in::{SignInOutcome, sign_in};
use crate::features::auth::state::use_auth;
use crate::features::auth::store::browser_session_store;
use crate::routes::{paths, signup::DemoAuthDisabled};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn SignInPage() -> impl IntoView {
    if let Err(err) = AppConfig::load().require_demo_auth() {
        return view! {
            <AuthShell>
                <DemoAuthDisabled message=err.user_message() />
            </AuthShell>
        }
        .into_any();
    }

    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        let result = browser_session_store()
            .and_then(|store| sign_in(&store, &email_value, &password_value))
            .map_err(AppError::from)
            .and_then(|outcome| match outcome.message() {
                None => Ok(()),
                Some(message) => Err(AppError::Auth(message.to_string())),
            });

        match result {
            Ok(()) => {
                auth.set_session(email_value);
                navigate(paths::ROOT, Default::default());
            }
            Err(err) => {
                if let AppError::Storage(inner) = &err {
                    tracing::error!(error = %inner, "demo sign in failed");
                }
                set_error.set(Some(err.user_message()));
            }
        }
    };

    view! {
        <AuthShell>
            <form class="w-full max-w-md space-y-6" on:submit=on_submit>
                <div class="space-y-2">
                    <p class=Theme::EYEBROW>"Welcome back"</p>
                    <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">"Sign in"</h1>
                </div>
                <div class="space-y-4">
                    <div>
                        <label class=Theme::LABEL for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class=Theme::INPUT
                            autocomplete="email"
                            placeholder="name@example.com"
                            required
                            on:input=move |event| set_email.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit">"Sign in"</Button>
                </div>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                <p class="text-sm text-slate-500">
                    "New to PB Insight? "
                    <A href=paths::SIGN_UP {..} class=Theme::LINK>
                        "Create an account"
                    </A>
                </p>
            </form>
        </AuthShell>
    }
    .into_any()
}
