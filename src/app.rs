use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::{DEFAULT_CHART_ELEMENT, StreamConfig},
    domain::{
        chart::MarkerColor,
        logging::{LogComponent, get_logger},
        market_data::StrategyPreset,
    },
    global_state::{
        active_strategy, connection_state, dropped_messages, last_error, last_price, last_signal,
        sample_count,
    },
    presentation::{run_signal_chart, select_strategy},
};

/// Mount the UI and start streaming from the default server
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountSignalChartApp)]
pub fn mount_signal_chart_app() {
    mount_to_body(|| view! { <SignalChartApp/> });
    spawn_local(async {
        // failures are already logged and mirrored into `last_error`
        let _ = run_signal_chart(StreamConfig::default()).await;
    });
}

#[component]
pub fn SignalChartApp() -> impl IntoView {
    view! {
        <style>
            {r#"
            .signal-chart-app {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                background: #0f0f0f;
                color: white;
                min-height: 100vh;
                padding: 20px;
            }
            .status-bar { display: flex; gap: 32px; justify-content: center; margin-bottom: 16px; }
            .status-label { opacity: 0.6; font-size: 12px; }
            .strategies { display: flex; gap: 8px; justify-content: center; margin-bottom: 16px; }
            .strategy-btn {
                background: #1f1f1f; color: white; border: 1px solid #333;
                border-radius: 6px; padding: 6px 14px; cursor: pointer;
            }
            .strategy-btn.active { border-color: cyan; color: cyan; }
            .error-line { color: #ff6666; text-align: center; }
            "#}
        </style>
        <div class="signal-chart-app">
            <StatusBar/>
            <div class="strategies">
                {StrategyPreset::iter()
                    .map(|preset| view! { <StrategyButton preset=preset/> })
                    .collect_view()}
            </div>
            <div class="error-line">{move || last_error().get().unwrap_or_default()}</div>
            <div id=DEFAULT_CHART_ELEMENT></div>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let signal_color = move || {
        last_signal()
            .get()
            .map(|s| MarkerColor::from(s).to_string())
            .unwrap_or_else(|| "white".to_string())
    };

    view! {
        <div class="status-bar">
            <div>
                <div>{move || connection_state().get().to_string()}</div>
                <div class="status-label">"WebSocket"</div>
            </div>
            <div>
                <div>{move || sample_count().get().to_string()}</div>
                <div class="status-label">"Samples"</div>
            </div>
            <div>
                <div style:color=signal_color>
                    {move || last_price().get().map(|p| format!("{p:.2}")).unwrap_or_else(|| "-".to_string())}
                </div>
                <div class="status-label">"Last price"</div>
            </div>
            <div>
                <div>{move || dropped_messages().get().to_string()}</div>
                <div class="status-label">"Dropped"</div>
            </div>
        </div>
    }
}

#[component]
fn StrategyButton(preset: StrategyPreset) -> impl IntoView {
    let is_active = move || active_strategy().get().as_deref() == Some(preset.wire_name());

    view! {
        <button
            class="strategy-btn"
            class:active=is_active
            on:click=move |_| {
                spawn_local(async move {
                    if select_strategy(preset.wire_name()).await.is_err() {
                        get_logger().debug(
                            LogComponent::Presentation("StrategyButton"),
                            "strategy click ignored",
                        );
                    }
                });
            }
        >
            {preset.label()}
        </button>
    }
}
