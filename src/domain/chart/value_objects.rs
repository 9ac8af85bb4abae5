use crate::domain::market_data::Signal;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter};

/// Value Object - per-point marker colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Red,
    Gray,
}

impl From<Signal> for MarkerColor {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Buy => MarkerColor::Green,
            Signal::Sell => MarkerColor::Red,
            Signal::Hold => MarkerColor::Gray,
        }
    }
}

/// Value Object - static styling shared by every redraw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub price_line_color: &'static str,
    pub sma_fast_color: &'static str,
    pub sma_slow_color: &'static str,
    pub marker_size: u32,
    pub marker_symbol: &'static str,
    pub background_color: &'static str,
    pub font_color: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            price_line_color: "cyan",
            sma_fast_color: "orange",
            sma_slow_color: "violet",
            marker_size: 10,
            marker_symbol: "circle",
            background_color: "#0f0f0f",
            font_color: "white",
        }
    }
}
