use crate::application::StrategyChannel;
use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error, log_info, log_warn};
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{Message, State, futures::WebSocket};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

/// Lifecycle of the single live connection. There is no reconnect: once
/// `Closed`, a new client has to be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Connecting,
            1 => Self::Open,
            _ => Self::Closed,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            Self::Connecting => 0,
            Self::Open => 1,
            Self::Closed => 2,
        }
    }
}

/// Connection state readable from both the stream task and the UI
#[derive(Debug, Clone, Default)]
pub struct SharedConnectionState(Arc<AtomicU8>);

impl SharedConnectionState {
    pub fn get(&self) -> ConnectionState {
        ConnectionState::from_u8(self.0.load(Ordering::SeqCst))
    }

    pub fn set(&self, state: ConnectionState) {
        self.0.store(state.as_u8(), Ordering::SeqCst);
    }
}

/// Outbound handle; frames queued here are written by the stream task
#[derive(Debug, Clone)]
pub struct StrategySender {
    tx: UnboundedSender<String>,
    state: SharedConnectionState,
}

impl StrategySender {
    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }
}

impl StrategyChannel for StrategySender {
    fn send_text(&self, payload: String) -> NetworkResult<()> {
        let state = self.state.get();
        if state != ConnectionState::Open {
            return Err(AppError::SendFailure(format!("connection is {state}")));
        }
        self.tx
            .unbounded_send(payload)
            .map_err(|_| AppError::SendFailure("connection task has stopped".to_string()))
    }
}

/// Create the outbound queue tied to `state`
pub fn strategy_channel(state: SharedConnectionState) -> (StrategySender, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded();
    (StrategySender { tx, state }, rx)
}

/// Shared state plus an optional listener told about every transition
#[derive(Clone, Default)]
struct StateNotifier {
    shared: SharedConnectionState,
    listener: Option<Rc<dyn Fn(ConnectionState)>>,
}

impl StateNotifier {
    fn set(&self, state: ConnectionState) {
        self.shared.set(state);
        if let Some(listener) = &self.listener {
            listener(state);
        }
    }
}

/// WebSocket client for the price/signal stream, based on gloo
pub struct SignalStreamClient {
    endpoint: String,
    state: StateNotifier,
}

impl SignalStreamClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), state: StateNotifier::default() }
    }

    /// Call `listener` on every state change, including the move to `Open`
    /// before any message has arrived
    pub fn on_state_change(mut self, listener: impl Fn(ConnectionState) + 'static) -> Self {
        self.state.listener = Some(Rc::new(listener));
        self
    }

    pub fn state(&self) -> ConnectionState {
        self.state.shared.get()
    }

    pub fn shared_state(&self) -> SharedConnectionState {
        self.state.shared.clone()
    }

    fn connect(&self) -> NetworkResult<WebSocket> {
        log_info!(LogComponent::Infrastructure("SignalWS"), "🔌 Connecting to {}", self.endpoint);
        self.state.set(ConnectionState::Connecting);
        WebSocket::open(&self.endpoint).map_err(|e| {
            self.state.set(ConnectionState::Closed);
            AppError::NetworkError(format!("Failed to open WebSocket: {e:?}"))
        })
    }

    async fn wait_until_open(&self, ws: &WebSocket) -> NetworkResult<()> {
        use gloo_timers::future::sleep;

        loop {
            match ws.state() {
                State::Open => {
                    self.state.set(ConnectionState::Open);
                    log_info!(LogComponent::Infrastructure("SignalWS"), "✅ Connected to {}", self.endpoint);
                    return Ok(());
                }
                State::Connecting => sleep(Duration::from_millis(10)).await,
                State::Closing | State::Closed => {
                    self.state.set(ConnectionState::Closed);
                    return Err(AppError::NetworkError(format!(
                        "Connection to {} was refused",
                        self.endpoint
                    )));
                }
            }
        }
    }

    /// Run the connection until the server closes it or an error occurs.
    ///
    /// `on_message` is called for every text frame and runs to completion before
    /// the next frame is read. Frames from `commands` are written as they arrive.
    pub async fn run<F>(&self, commands: UnboundedReceiver<String>, mut on_message: F) -> NetworkResult<()>
    where
        F: FnMut(&str),
    {
        let ws = self.connect()?;
        self.wait_until_open(&ws).await?;

        let (mut sink, mut stream) = ws.split();
        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let mut commands = commands;
            while let Some(payload) = commands.next().await {
                log_debug!(LogComponent::Infrastructure("SignalWS"), "📤 Sending {payload}");
                if let Err(e) = sink.send(Message::Text(payload)).await {
                    log_error!(LogComponent::Infrastructure("SignalWS"), "❌ Send failed: {e:?}");
                    state.set(ConnectionState::Closed);
                    break;
                }
            }
        });

        let mut result = Ok(());
        while let Some(msg) = stream.next().await {
            match msg {
                Ok(Message::Text(data)) => on_message(&data),
                Ok(Message::Bytes(bytes)) => match String::from_utf8(bytes) {
                    Ok(data) => on_message(&data),
                    Err(_) => {
                        log_warn!(
                            LogComponent::Infrastructure("SignalWS"),
                            "⚠️ Ignoring non-UTF-8 binary frame"
                        );
                    }
                },
                Err(e) => {
                    log_error!(LogComponent::Infrastructure("SignalWS"), "❌ WebSocket error: {e:?}");
                    result = Err(AppError::NetworkError(format!("{e:?}")));
                    break;
                }
            }
        }

        self.state.set(ConnectionState::Closed);
        log_warn!(LogComponent::Infrastructure("SignalWS"), "🔌 Connection to {} closed", self.endpoint);
        result
    }
}
