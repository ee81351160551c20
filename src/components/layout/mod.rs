//! Layout components shared across routes.

mod app_shell;
mod auth_shell;

pub(crate) use app_shell::AppShell;
pub(crate) use auth_shell::AuthShell;
