use super::value_objects::{ChartTheme, MarkerColor};
use crate::domain::errors::RenderingResult;
use crate::domain::market_data::{Price, Sample, SeriesWindow};
use serde::Serialize;

/// Declarative description of one chart redraw.
///
/// Rebuilt from scratch for every update; the shape mirrors what Plotly's
/// `newPlot(element, data, layout)` expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescription {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<String>,
    /// `None` serializes as `null`, which Plotly draws as a gap
    pub y: Vec<Option<f64>>,
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub line: LineStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: Vec<MarkerColor>,
    pub size: u32,
    pub symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: FontStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontStyle {
    pub color: &'static str,
}

impl RenderDescription {
    /// Project the window into traces: the price line first, then an SMA line
    /// for each average that at least one retained sample carries.
    pub fn from_window(window: &SeriesWindow, theme: &ChartTheme) -> Self {
        let x = window.timestamps();

        let price = Trace {
            name: "Price".to_string(),
            x: x.clone(),
            y: window.prices().into_iter().map(Some).collect(),
            trace_type: "scatter",
            mode: "lines+markers",
            line: LineStyle { color: theme.price_line_color },
            marker: Some(MarkerStyle {
                color: window.signals().into_iter().map(MarkerColor::from).collect(),
                size: theme.marker_size,
                symbol: theme.marker_symbol,
            }),
        };

        let mut traces = vec![price];
        let overlays: [(&str, &'static str, fn(&Sample) -> Option<Price>); 2] = [
            ("SMA fast", theme.sma_fast_color, |s| s.sma_fast),
            ("SMA slow", theme.sma_slow_color, |s| s.sma_slow),
        ];
        for (name, color, pick) in overlays {
            let y: Vec<Option<f64>> =
                window.samples().iter().map(|s| pick(s).map(|p| p.value())).collect();
            if y.iter().any(Option::is_some) {
                traces.push(Trace {
                    name: name.to_string(),
                    x: x.clone(),
                    y,
                    trace_type: "scatter",
                    mode: "lines",
                    line: LineStyle { color },
                    marker: None,
                });
            }
        }

        Self {
            traces,
            layout: Layout {
                title: window.symbol().map(str::to_string),
                paper_bgcolor: theme.background_color,
                plot_bgcolor: theme.background_color,
                font: FontStyle { color: theme.font_color },
            },
        }
    }

    /// The price trace; always present
    pub fn price_trace(&self) -> &Trace {
        &self.traces[0]
    }

    pub fn point_count(&self) -> usize {
        self.price_trace().x.len()
    }
}

/// Interface to whatever draws the chart
pub trait ChartRenderer {
    fn render(&self, description: &RenderDescription) -> RenderingResult<()>;
}
