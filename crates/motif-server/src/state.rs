//! Application state passed explicitly to the router.
//!
//! The service is stateless per request (nothing is shared or mutated across
//! requests), so [`AppState`] only carries process-wide constants. It is
//! constructed once in `main` and handed to `build_router` -- no ambient
//! module-level singleton.

/// Shared application state for the HTTP server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Version string reported by the root status route.
    pub version: &'static str,
}

impl AppState {
    /// Creates the state with the crate's own version.
    pub fn new() -> Self {
        AppState {
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}
