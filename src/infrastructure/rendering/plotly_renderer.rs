use crate::domain::chart::{ChartRenderer, RenderDescription};
use crate::domain::errors::{AppError, RenderingResult};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `Plotly.newPlot(element, data, layout)` from the page-level Plotly bundle
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(element_id: &str, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;
}

/// Hands render descriptions to Plotly; every call is a full redraw
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    element_id: String,
}

impl PlotlyRenderer {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self { element_id: element_id.into() }
    }

    fn to_js<T: serde::Serialize>(value: &T) -> RenderingResult<JsValue> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::RenderingError(format!("Failed to encode chart: {e}")))?;
        js_sys::JSON::parse(&json)
            .map_err(|e| AppError::RenderingError(format!("Failed to build chart object: {e:?}")))
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render(&self, description: &RenderDescription) -> RenderingResult<()> {
        let data = Self::to_js(&description.traces)?;
        let layout = Self::to_js(&description.layout)?;
        plotly_new_plot(&self.element_id, &data, &layout)
            .map(|_| ())
            .map_err(|e| AppError::RenderingError(format!("Plotly.newPlot failed: {e:?}")))
    }
}
