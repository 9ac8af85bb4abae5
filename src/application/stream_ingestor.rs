use crate::application::config::StreamConfig;
use crate::application::messages::InboundTick;
use crate::domain::chart::{ChartRenderer, ChartTheme, RenderDescription};
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, TimeProvider};
use crate::domain::market_data::{Sample, SeriesWindow};
use crate::{log_debug, log_error, log_info, log_warn};

/// Use Case: turn raw stream messages into chart redraws.
///
/// Owns the only `SeriesWindow`. Each `receive` runs decode, append, evict and
/// render to completion, so the window is never observed mid-update.
pub struct StreamIngestor<R: ChartRenderer, T: TimeProvider> {
    window: SeriesWindow,
    theme: ChartTheme,
    renderer: R,
    clock: T,
    dropped: u64,
    last_symbol: Option<String>,
}

impl<R: ChartRenderer, T: TimeProvider> StreamIngestor<R, T> {
    pub fn new(config: &StreamConfig, renderer: R, clock: T) -> Self {
        Self {
            window: SeriesWindow::new(config.window_capacity),
            theme: config.theme.clone(),
            renderer,
            clock,
            dropped: 0,
            last_symbol: None,
        }
    }

    /// Handle one inbound message.
    ///
    /// A message that fails to decode is dropped: the window is left untouched
    /// and `MalformedMessage` is returned for the caller to log.
    pub fn receive(&mut self, raw: &str) -> Result<RenderDescription, AppError> {
        let tick = match InboundTick::from_json(raw) {
            Ok(tick) => tick,
            Err(e) => {
                self.dropped += 1;
                log_warn!(LogComponent::Application("Ingestor"), "⚠️ Dropping message: {e}");
                return Err(e);
            }
        };

        let received_at = self.clock.format_timestamp(self.clock.current_timestamp());
        Ok(self.append(tick.into_sample(received_at)))
    }

    /// Append a sample and redraw. Render failures are logged, never raised.
    pub fn append(&mut self, sample: Sample) -> RenderDescription {
        if sample.symbol.is_some() && sample.symbol != self.last_symbol {
            log_info!(
                LogComponent::Application("Ingestor"),
                "📈 Streaming symbol {}",
                sample.symbol.as_deref().unwrap_or_default()
            );
            self.last_symbol = sample.symbol.clone();
        }

        if let Some(evicted) = self.window.append(sample) {
            log_debug!(
                LogComponent::Application("Ingestor"),
                "🗑️ Evicted sample from {} (price {:.2})",
                evicted.timestamp,
                evicted.price.value()
            );
        }

        let description = self.to_render_description();
        if let Err(e) = self.renderer.render(&description) {
            log_error!(LogComponent::Application("Ingestor"), "❌ Chart redraw failed: {e}");
        }
        description
    }

    pub fn to_render_description(&self) -> RenderDescription {
        RenderDescription::from_window(&self.window, &self.theme)
    }

    pub fn window(&self) -> &SeriesWindow {
        &self.window
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Number of messages discarded as malformed
    pub fn dropped_messages(&self) -> u64 {
        self.dropped
    }
}
