use crate::domain::errors::AppError;
use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Value Object - price of a single tick
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - trading signal attached to a tick.
///
/// Anything the upstream sends other than exactly `"buy"` or `"sell"` collapses
/// into `Hold`, as does a tick with no signal at all, so mapping a signal to a
/// colour is always total.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    Hold,
}

impl From<&str> for Signal {
    fn from(value: &str) -> Self {
        match value {
            "buy" => Signal::Buy,
            "sell" => Signal::Sell,
            _ => Signal::Hold,
        }
    }
}

impl From<String> for Signal {
    fn from(value: String) -> Self {
        Signal::from(value.as_str())
    }
}

impl From<Signal> for String {
    fn from(signal: Signal) -> Self {
        signal.to_string()
    }
}

/// Value Object - strategy identifier sent upstream. Opaque, but never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{}", _0)]
pub struct Strategy(String);

impl Strategy {
    pub fn new(strategy: impl Into<String>) -> Result<Self, AppError> {
        let strategy = strategy.into();
        if strategy.trim().is_empty() {
            return Err(AppError::ValidationError("Strategy cannot be empty".to_string()));
        }
        Ok(Self(strategy))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Strategies offered as one-click choices in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, IntoStaticStr)]
pub enum StrategyPreset {
    #[strum(serialize = "sma_crossover")]
    SmaCrossover,
    #[strum(serialize = "momentum")]
    Momentum,
    #[strum(serialize = "mean_reversion")]
    MeanReversion,
}

impl StrategyPreset {
    /// Identifier sent upstream
    pub fn wire_name(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SmaCrossover => "SMA Crossover",
            Self::Momentum => "Momentum",
            Self::MeanReversion => "Mean Reversion",
        }
    }
}

impl From<StrategyPreset> for Strategy {
    fn from(preset: StrategyPreset) -> Self {
        Strategy(preset.wire_name().to_string())
    }
}
