use signal_chart_wasm::application::{StrategyChannel, StrategyService};
use signal_chart_wasm::domain::errors::{AppError, NetworkResult};
use signal_chart_wasm::domain::market_data::{Strategy, StrategyPreset};
use signal_chart_wasm::infrastructure::websocket::{
    ConnectionState, SharedConnectionState, strategy_channel,
};
use std::cell::RefCell;

#[derive(Default)]
struct RecordingChannel {
    sent: RefCell<Vec<String>>,
}

impl StrategyChannel for RecordingChannel {
    fn send_text(&self, payload: String) -> NetworkResult<()> {
        self.sent.borrow_mut().push(payload);
        Ok(())
    }
}

#[test]
fn momentum_payload_is_exact() {
    let service = StrategyService::new(RecordingChannel::default());

    let payload = service.select("momentum").unwrap();

    insta::assert_snapshot!(payload.as_str(), @r#"{"strategy":"momentum"}"#);
    assert_eq!(service.channel().sent.borrow().as_slice(), [payload]);
}

#[test]
fn strategy_strings_are_escaped() {
    let service = StrategyService::new(RecordingChannel::default());

    let payload = service.send_strategy(&Strategy::new("a \"quoted\" one").unwrap()).unwrap();

    assert_eq!(payload, r#"{"strategy":"a \"quoted\" one"}"#);
}

#[test]
fn empty_selection_is_rejected_before_sending() {
    let service = StrategyService::new(RecordingChannel::default());

    assert!(matches!(service.select(""), Err(AppError::ValidationError(_))));
    assert!(service.channel().sent.borrow().is_empty());
}

#[test]
fn sending_before_the_connection_opens_fails() {
    let state = SharedConnectionState::default();
    let (sender, _commands) = strategy_channel(state.clone());
    let service = StrategyService::new(sender);

    assert_eq!(state.get(), ConnectionState::Connecting);
    assert!(matches!(service.select("momentum"), Err(AppError::SendFailure(_))));
}

#[test]
fn open_connection_queues_the_payload() {
    let state = SharedConnectionState::default();
    let (sender, mut commands) = strategy_channel(state.clone());
    state.set(ConnectionState::Open);

    let payload = StrategyService::new(sender)
        .send_strategy(&StrategyPreset::SmaCrossover.into())
        .unwrap();

    assert_eq!(payload, r#"{"strategy":"sma_crossover"}"#);
    assert_eq!(commands.try_next().unwrap(), Some(payload));
}

#[test]
fn sending_after_the_connection_task_stopped_fails() {
    let state = SharedConnectionState::default();
    let (sender, commands) = strategy_channel(state.clone());
    state.set(ConnectionState::Open);
    drop(commands);

    assert!(matches!(StrategyService::new(sender.clone()).select("momentum"), Err(AppError::SendFailure(_))));

    state.set(ConnectionState::Closed);
    assert_eq!(sender.state(), ConnectionState::Closed);
    assert!(matches!(StrategyService::new(sender).select("momentum"), Err(AppError::SendFailure(_))));
}
