//! Sign-up route. The form feeds a `RegistrationFlow`, which validates the
//! password pair locally, stores the demo credential in browser storage, and
//! requests navigation home. The inputs are `required`, so the browser only
//! dispatches submit once every field is filled in.

use crate::{
    app_lib::{AppError, config::AppConfig, theme::Theme},
    components::{Alert, AlertKind, AuthShell, Button},
    features::auth::{
        registration::{Destination, Field, RegistrationFlow, SubmitOutcome},
        state::use_auth,
        store::browser_session_store,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

/// Renders the sign-up form, or a notice when demo accounts are disabled.
#[component]
pub fn SignUpPage() -> impl IntoView {
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
    let (destination, set_destination) = signal::<Option<Destination>>(None);
    let (inline_error, set_inline_error) = signal::<Option<String>>(None);
    let (failure, set_failure) = signal::<Option<String>>(None);

    let navigator = move |next: Destination| set_destination.set(Some(next));
    let flow = match browser_session_store() {
        Ok(store) => Some(RegistrationFlow::new(store, navigator)),
        Err(err) => {
            tracing::error!(error = %err, "session store unavailable");
            set_failure.set(Some(AppError::from(err).user_message()));
            None
        }
    };
    let flow = StoredValue::new_local(flow);

    // Navigation runs from an effect so the flow is not borrowed while the
    // router tears this page down.
    Effect::new(move |_| {
        if let Some(next) = destination.get() {
            navigate(next.path(), Default::default());
        }
    });

    let edit = move |field: Field, value: String| {
        flow.update_value(|slot| {
            if let Some(flow) = slot.as_mut() {
                flow.edit(field, value);
            }
        });
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_failure.set(None);

        let submitted = flow
            .try_update_value(|slot| {
                slot.as_mut().map(|flow| {
                    let result = flow.submit();
                    (result, flow.form().email.clone(), flow.form().error_message.clone())
                })
            })
            .flatten();
        let Some((result, email, message)) = submitted else {
            return;
        };

        set_inline_error.set(message);
        match result {
            Ok(SubmitOutcome::Registered) => auth.set_session(email),
            Ok(SubmitOutcome::Rejected(_) | SubmitOutcome::Closed) => {}
            Err(err) => {
                tracing::error!(error = %err, "could not save demo account");
                set_failure.set(Some(AppError::from(err).user_message()));
            }
        }
    };

    let on_sign_in = move |_| {
        let handled = flow
            .try_update_value(|slot| slot.as_mut().map(|flow| flow.go_to_sign_in()))
            .flatten()
            .is_some();
        if !handled {
            set_destination.set(Some(Destination::SignIn));
        }
    };

    view! {
        <AuthShell>
            <form class="w-full max-w-md space-y-6" on:submit=on_submit>
                <div class="space-y-2">
                    <p class=Theme::EYEBROW>"Create account"</p>
                    <h1 class="text-2xl font-semibold text-slate-900 dark:text-white">
                        "Start your free account"
                    </h1>
                    <p class="text-sm text-slate-500">
                        "Use at least 8 characters for your password."
                    </p>
                </div>

                <div class="space-y-4">
                    <div>
                        <label class=Theme::LABEL for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            autofocus
                            class=Theme::INPUT
                            autocomplete="email"
                            inputmode="email"
                            placeholder="name@example.com"
                            required
                            on:input=move |event| edit(Field::Email, event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            required
                            on:input=move |event| edit(Field::Password, event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class=Theme::LABEL for="confirm_password">"Confirm password"</label>
                        <input
                            id="confirm_password"
                            type="password"
                            class=Theme::INPUT
                            autocomplete="new-password"
                            required
                            on:input=move |event| {
                                edit(Field::ConfirmPassword, event_target_value(&event));
                            }
                        />
                    </div>

                    <Button button_type="submit">"Create account"</Button>
                </div>

                {move || {
                    inline_error
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}
                {move || {
                    failure
                        .get()
                        .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                }}

                <p class="text-sm text-slate-500">
                    "Already have an account? "
                    <button type="button" class=Theme::LINK on:click=on_sign_in>
                        "Sign in"
                    </button>
                </p>
            </form>
        </AuthShell>
    }
    .into_any()
}

/// Shown on auth routes when the plaintext demo account flow is switched off.
#[component]
pub fn DemoAuthDisabled(message: String) -> impl IntoView {
    view! {
        <div class="w-full max-w-md">
            <Alert kind=AlertKind::Info message=message />
        </div>
    }
}
