mod health;
mod landing;
mod login;
mod not_found;
pub(crate) mod paths;
mod research;
mod signup;
mod terms;

pub(crate) use health::HealthPage;
pub(crate) use landing::LandingPage;
pub(crate) use login::SignInPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use research::ResearchPage;
pub(crate) use signup::SignUpPage;
pub(crate) use terms::TermsPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/terms") view=TermsPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/login") view=SignInPage />
            <Route path=path!("/research") view=ResearchPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
