use crate::domain::market_data::Signal;
use crate::infrastructure::websocket::ConnectionState;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive state shared by the stream task and the UI
pub struct Globals {
    pub connection_state: RwSignal<ConnectionState>,
    pub sample_count: RwSignal<usize>,
    pub last_price: RwSignal<Option<f64>>,
    pub last_signal: RwSignal<Option<Signal>>,
    pub dropped_messages: RwSignal<u64>,
    pub active_strategy: RwSignal<Option<String>>,
    pub last_error: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        connection_state: create_rw_signal(ConnectionState::Connecting),
        sample_count: create_rw_signal(0),
        last_price: create_rw_signal(None),
        last_signal: create_rw_signal(None),
        dropped_messages: create_rw_signal(0),
        active_strategy: create_rw_signal(None),
        last_error: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub connection_state => connection_state: ConnectionState,
    pub sample_count => sample_count: usize,
    pub last_price => last_price: Option<f64>,
    pub last_signal => last_signal: Option<Signal>,
    pub dropped_messages => dropped_messages: u64,
    pub active_strategy => active_strategy: Option<String>,
    pub last_error => last_error: Option<String>,
}
