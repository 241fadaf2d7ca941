//! Build-time settings of the frontend bundle.

/// Base URL of the solutions API, taken from `SOLUTIONS_API_URL` when the
/// bundle is built. Empty means the page's own origin, which is how the
/// backend serves the embedded bundle.
pub const API_BASE_URL: &str = match option_env!("SOLUTIONS_API_URL") {
    Some(url) => url,
    None => "",
};

/// Delay before the rating confirmation disappears.
pub const RATING_MESSAGE_MS: u32 = 3000;
