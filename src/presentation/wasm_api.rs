use crate::application::{StrategyService, StreamConfig, StreamIngestor};
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::global_state::{
    active_strategy, connection_state, dropped_messages, last_error, last_price, last_signal,
    sample_count,
};
use crate::infrastructure::rendering::PlotlyRenderer;
use crate::infrastructure::services::BrowserTimeProvider;
use crate::infrastructure::websocket::{
    SignalStreamClient, clear_global_strategy_sender, get_global_strategy_sender,
    set_global_strategy_sender, strategy_channel,
};
use crate::{log_error, log_warn};
use leptos::SignalSet;
use wasm_bindgen::prelude::*;

/// Connect to the signal server and keep the chart updated until the
/// connection ends. Both arguments fall back to the built-in defaults.
#[wasm_bindgen(js_name = startSignalChart)]
pub async fn start_signal_chart(
    endpoint: Option<String>,
    chart_element_id: Option<String>,
) -> Result<(), JsValue> {
    let config = StreamConfig::default()
        .with_endpoint(endpoint)
        .with_chart_element(chart_element_id);
    run_signal_chart(config).await.map_err(JsValue::from)
}

/// Send a strategy selection upstream; resolves to the payload that was sent
#[wasm_bindgen(js_name = changeStrategy)]
pub async fn change_strategy(strategy: String) -> Result<String, JsValue> {
    select_strategy(&strategy).await.map_err(JsValue::from)
}

pub async fn run_signal_chart(config: StreamConfig) -> NetworkResult<()> {
    if gloo::utils::document().get_element_by_id(&config.chart_element_id).is_none() {
        log_warn!(
            LogComponent::Presentation("SignalChart"),
            "⚠️ Chart element #{} not found, Plotly will fail to draw",
            config.chart_element_id
        );
    }

    let client = SignalStreamClient::new(config.endpoint.clone())
        .on_state_change(|state| connection_state().set(state));
    let (sender, commands) = strategy_channel(client.shared_state());
    set_global_strategy_sender(sender).await;
    connection_state().set(client.state());

    let renderer = PlotlyRenderer::new(config.chart_element_id.clone());
    let mut ingestor = StreamIngestor::new(&config, renderer, BrowserTimeProvider::new());

    let result = client
        .run(commands, |raw| {
            match ingestor.receive(raw) {
                Ok(_) => {
                    let window = ingestor.window();
                    sample_count().set(window.len());
                    last_price().set(window.latest().map(|s| s.price.value()));
                    last_signal().set(window.latest().map(|s| s.signal));
                }
                Err(_) => dropped_messages().set(ingestor.dropped_messages()),
            }
        })
        .await;

    clear_global_strategy_sender().await;
    if let Err(e) = &result {
        log_error!(LogComponent::Presentation("SignalChart"), "❌ Stream ended: {e}");
        last_error().set(Some(e.to_string()));
    }
    result
}

pub async fn select_strategy(strategy: &str) -> NetworkResult<String> {
    let sender = get_global_strategy_sender()
        .await
        .ok_or_else(|| AppError::SendFailure("no live connection".to_string()))?;

    match StrategyService::new(sender).select(strategy) {
        Ok(payload) => {
            active_strategy().set(Some(strategy.to_string()));
            last_error().set(None);
            Ok(payload)
        }
        Err(e) => {
            log_warn!(LogComponent::Presentation("SignalChart"), "⚠️ Strategy not sent: {e}");
            last_error().set(Some(e.to_string()));
            Err(e)
        }
    }
}
