pub mod search;
pub mod weather;

pub use search::SearchTool;
pub use weather::WeatherTool;

use std::sync::Arc;

use toolshed_core::Tool;

/// The builtin tool set served by default, in advertisement order.
#[must_use]
pub fn builtin() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(WeatherTool) as Arc<dyn Tool>,
        Arc::new(SearchTool::new()),
    ]
}
