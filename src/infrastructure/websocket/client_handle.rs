use crate::infrastructure::websocket::StrategySender;
use futures::lock::Mutex;
use once_cell::sync::OnceCell;

/// Outbound handle of the currently running stream, if any
static STRATEGY_SENDER: OnceCell<Mutex<Option<StrategySender>>> = OnceCell::new();

fn slot() -> &'static Mutex<Option<StrategySender>> {
    STRATEGY_SENDER.get_or_init(|| Mutex::new(None))
}

pub async fn set_global_strategy_sender(sender: StrategySender) {
    *slot().lock().await = Some(sender);
}

pub async fn clear_global_strategy_sender() {
    slot().lock().await.take();
}

pub async fn get_global_strategy_sender() -> Option<StrategySender> {
    slot().lock().await.clone()
}
