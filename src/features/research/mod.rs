//! Research feature: the status message cycler shown while an insight request
//! is in flight, and the preview notice shown once it settles. Reports are not
//! generated in this build, so the request is a fixed demo wait.

pub(crate) mod cycler;

/// How long the demo research request keeps the loader on screen.
pub const DEMO_PREVIEW_DELAY_MS: u32 = 7_500;

/// Uppercases a ticker symbol, or `None` when nothing was entered.
pub fn normalize_ticker(raw: &str) -> Option<String> {
    let symbol = raw.trim();
    if symbol.is_empty() {
        None
    } else {
        Some(symbol.to_uppercase())
    }
}

pub fn preview_notice(symbol: &str) -> String {
    format!("Report previews for {symbol} are not available in this build yet.")
}

#[cfg(test)]
mod tests {
    use super::{normalize_ticker, preview_notice};

    #[test]
    fn normalize_ticker_trims_and_uppercases() {
        assert_eq!(normalize_ticker("  aapl "), Some("AAPL".to_string()));
        assert_eq!(normalize_ticker("Msft"), Some("MSFT".to_string()));
        assert_eq!(normalize_ticker("   "), None);
        assert_eq!(normalize_ticker(""), None);
    }

    #[test]
    fn preview_notice_names_the_ticker_and_promises_no_delivery() {
        let notice = preview_notice("AAPL");
        assert_eq!(
            notice,
            "Report previews for AAPL are not available in this build yet."
        );
        assert!(!notice.contains("queued"));
        assert!(!notice.to_lowercase().contains("email"));
    }
}
