use signal_chart_wasm::application::{StreamConfig, StreamIngestor};
use signal_chart_wasm::domain::chart::{ChartRenderer, MarkerColor, RenderDescription};
use signal_chart_wasm::domain::errors::{AppError, RenderingResult};
use signal_chart_wasm::domain::logging::TimeProvider;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
struct RecordingRenderer {
    frames: RefCell<Vec<RenderDescription>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, description: &RenderDescription) -> RenderingResult<()> {
        self.frames.borrow_mut().push(description.clone());
        Ok(())
    }
}

/// Hands out `t0`, `t1`, ... so every sample gets a distinct receipt time
#[derive(Default)]
struct TickingClock(AtomicU64);

impl TimeProvider for TickingClock {
    fn current_timestamp(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("t{timestamp}")
    }
}

fn ingestor() -> StreamIngestor<RecordingRenderer, TickingClock> {
    StreamIngestor::new(&StreamConfig::default(), RecordingRenderer::default(), TickingClock::default())
}

#[test]
fn first_buy_message_draws_one_green_point() {
    let mut ingestor = ingestor();

    let description = ingestor.receive(r#"{"price":100,"signal":"buy"}"#).unwrap();

    assert_eq!(description.point_count(), 1);
    assert_eq!(description.price_trace().x, vec!["t0".to_string()]);
    assert_eq!(description.price_trace().marker.as_ref().unwrap().color, vec![MarkerColor::Green]);
}

#[test]
fn every_accepted_message_triggers_exactly_one_redraw() {
    let mut ingestor = ingestor();

    for i in 0..60 {
        ingestor.receive(&format!(r#"{{"price":{i},"signal":"sell"}}"#)).unwrap();
    }

    let frames = ingestor.renderer().frames.borrow();
    assert_eq!(frames.len(), 60);
    assert_eq!(frames.last().unwrap().point_count(), 50);
    assert_eq!(frames.last().unwrap(), &ingestor.to_render_description());
}

#[test]
fn receipt_time_is_used_instead_of_upstream_timestamp() {
    let mut ingestor = ingestor();

    ingestor
        .receive(r#"{"price":1.5,"signal":"hold","timestamp":1717000000.25,"symbol":"AAPL"}"#)
        .unwrap();

    let sample = ingestor.window().latest().unwrap();
    assert_eq!(sample.timestamp, "t0");
    assert_eq!(sample.symbol.as_deref(), Some("AAPL"));
}

#[test]
fn malformed_message_leaves_window_and_chart_untouched() {
    let mut ingestor = ingestor();
    ingestor.receive(r#"{"price":10,"signal":"buy"}"#).unwrap();

    for raw in [
        "",
        "{}",
        r#"{"price":"ten","signal":"buy"}"#,
        r#"{"signal":"sell"}"#,
        "[1,2]",
        r#"[100,"buy"]"#,
    ] {
        assert!(matches!(ingestor.receive(raw), Err(AppError::MalformedMessage(_))), "{raw}");
    }

    assert_eq!(ingestor.window().len(), 1);
    assert_eq!(ingestor.renderer().frames.borrow().len(), 1);
    assert_eq!(ingestor.dropped_messages(), 6);

    // the stream keeps working after bad input
    ingestor.receive(r#"{"price":11,"signal":"sell"}"#).unwrap();
    assert_eq!(ingestor.window().prices(), vec![10.0, 11.0]);
}

#[test]
fn sma_backend_tick_without_signal_plots_gray() {
    let mut ingestor = ingestor();

    ingestor.receive(r#"{"price": 150.12, "sma_fast": null, "sma_slow": null}"#).unwrap();
    let description = ingestor.receive(r#"{"price": 150.4, "sma_fast": 150.2, "sma_slow": null}"#).unwrap();

    assert_eq!(ingestor.window().len(), 2);
    assert_eq!(
        description.price_trace().marker.as_ref().unwrap().color,
        vec![MarkerColor::Gray, MarkerColor::Gray]
    );
    assert_eq!(description.traces.len(), 2);
    assert_eq!(description.traces[1].y, vec![None, Some(150.2)]);
}

#[test]
fn capacity_comes_from_config() {
    let config = StreamConfig { window_capacity: 3, ..StreamConfig::default() };
    let mut ingestor =
        StreamIngestor::new(&config, RecordingRenderer::default(), TickingClock::default());

    for price in 1..=5 {
        ingestor.receive(&format!(r#"{{"price":{price},"signal":"buy"}}"#)).unwrap();
    }

    assert_eq!(ingestor.window().prices(), vec![3.0, 4.0, 5.0]);
    assert_eq!(ingestor.window().timestamps(), vec!["t2", "t3", "t4"]);
}
