use std::sync::Arc;

use toolshed_core::Registry;

/// Shared application state handed to every handler.
///
/// The registry is immutable after startup, so handlers share it without
/// further synchronization.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}
