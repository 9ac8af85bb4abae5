//! Chart rendering backed by the page's Plotly bundle.

pub mod plotly_renderer;

pub use plotly_renderer::PlotlyRenderer;
