use crate::domain::chart::ChartTheme;
use crate::domain::market_data::DEFAULT_WINDOW_CAPACITY;

/// Signal server the client connects to unless told otherwise
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8000/ws";

/// DOM id of the element Plotly draws into
pub const DEFAULT_CHART_ELEMENT: &str = "chart";

/// Everything the client needs to start streaming. There is no env/CLI layer;
/// the defaults are the deployment and the wasm entry point may override them.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamConfig {
    pub endpoint: String,
    pub window_capacity: usize,
    pub chart_element_id: String,
    pub theme: ChartTheme,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            chart_element_id: DEFAULT_CHART_ELEMENT.to_string(),
            theme: ChartTheme::default(),
        }
    }
}

impl StreamConfig {
    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint;
        }
        self
    }

    pub fn with_chart_element(mut self, element_id: Option<String>) -> Self {
        if let Some(element_id) = element_id.filter(|e| !e.trim().is_empty()) {
            self.chart_element_id = element_id;
        }
        self
    }
}
