//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused on markup, while account handling and the
//! research status feedback live in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod research;
