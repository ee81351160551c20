//! Shared UI components exported for routes and features.

pub(crate) mod layout;
mod pricing_card;
mod research_loader;
pub(crate) mod ui;

pub(crate) use layout::{AppShell, AuthShell};
pub(crate) use pricing_card::{PricingCard, PricingTier};
pub(crate) use research_loader::ResearchLoader;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
