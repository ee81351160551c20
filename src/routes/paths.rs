//! Route paths shared by links, guards, and navigation requests.

use crate::features::auth::registration::Destination;

pub const ROOT: &str = Destination::Root.path();
pub const SIGN_IN: &str = Destination::SignIn.path();
pub const SIGN_UP: &str = "/signup";
pub const TERMS: &str = "/terms";
pub const RESEARCH: &str = "/research";
pub const HEALTH: &str = "/health";

#[cfg(test)]
mod tests {
    use super::{HEALTH, RESEARCH, ROOT, SIGN_IN, SIGN_UP, TERMS};

    #[test]
    fn paths_match_route_table() {
        assert_eq!(
            [ROOT, TERMS, SIGN_UP, SIGN_IN, RESEARCH, HEALTH],
            ["/", "/terms", "/signup", "/login", "/research", "/health"]
        );
    }
}
