use crate::application::messages::StrategyCommand;
use crate::domain::errors::NetworkResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Strategy;
use crate::log_info;

/// Outbound half of the live connection
pub trait StrategyChannel {
    /// Queue a text frame. Fails with `SendFailure` when the connection is not open.
    fn send_text(&self, payload: String) -> NetworkResult<()>;
}

/// Use Case: relay the user's strategy choice upstream.
///
/// Fire-and-forget on the wire: nothing waits for an acknowledgement.
pub struct StrategyService<C: StrategyChannel> {
    channel: C,
}

impl<C: StrategyChannel> StrategyService<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Encode and send; returns the exact payload that was queued
    pub fn send_strategy(&self, strategy: &Strategy) -> NetworkResult<String> {
        let payload = StrategyCommand::new(strategy).to_json()?;
        self.channel.send_text(payload.clone())?;
        log_info!(LogComponent::Application("Strategy"), "🎯 Strategy changed to {strategy}");
        Ok(payload)
    }

    /// Validate a raw selection from the UI and send it
    pub fn select(&self, strategy: &str) -> NetworkResult<String> {
        let strategy = Strategy::new(strategy)?;
        self.send_strategy(&strategy)
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }
}
