pub use super::value_objects::{Price, Signal};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of samples kept on the chart
pub const DEFAULT_WINDOW_CAPACITY: usize = 50;

/// Domain entity - one received tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Local time of receipt, not the upstream event time
    pub timestamp: String,
    pub price: Price,
    pub signal: Signal,
    pub sma_fast: Option<Price>,
    pub sma_slow: Option<Price>,
    pub symbol: Option<String>,
}

impl Sample {
    pub fn new(timestamp: impl Into<String>, price: Price, signal: Signal) -> Self {
        Self {
            timestamp: timestamp.into(),
            price,
            signal,
            sma_fast: None,
            sma_slow: None,
            symbol: None,
        }
    }

    pub fn with_averages(mut self, sma_fast: Option<Price>, sma_slow: Option<Price>) -> Self {
        self.sma_fast = sma_fast;
        self.sma_slow = sma_slow;
        self
    }

    pub fn with_symbol(mut self, symbol: Option<String>) -> Self {
        self.symbol = symbol;
        self
    }
}

/// Domain entity - sliding window of the most recent samples.
///
/// Samples are kept in arrival order. After every append `len() <= capacity()`;
/// overflow drops the oldest sample and nothing else.
#[derive(Debug, Clone)]
pub struct SeriesWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl Default for SeriesWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_CAPACITY)
    }
}

impl SeriesWindow {
    /// A zero capacity is bumped to one so the latest sample is always visible
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { samples: VecDeque::with_capacity(capacity + 1), capacity }
    }

    /// Append a sample, returning the evicted one if the window overflowed
    pub fn append(&mut self, sample: Sample) -> Option<Sample> {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            return self.samples.pop_front();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    pub fn samples(&self) -> &VecDeque<Sample> {
        &self.samples
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn timestamps(&self) -> Vec<String> {
        self.samples.iter().map(|s| s.timestamp.clone()).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.price.value()).collect()
    }

    pub fn signals(&self) -> Vec<Signal> {
        self.samples.iter().map(|s| s.signal).collect()
    }

    /// Most recent symbol reported by upstream, if any
    pub fn symbol(&self) -> Option<&str> {
        self.samples.iter().rev().find_map(|s| s.symbol.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(i: usize) -> Sample {
        Sample::new(format!("t{i}"), Price::from(i as f64), Signal::Hold)
    }

    #[test]
    fn append_below_capacity_keeps_everything() {
        let mut window = SeriesWindow::new(3);
        assert!(window.append(sample(1)).is_none());
        assert!(window.append(sample(2)).is_none());
        assert_eq!(window.prices(), vec![1.0, 2.0]);
        assert!(!window.is_full());
    }

    #[test]
    fn overflow_returns_the_oldest_sample() {
        let mut window = SeriesWindow::new(2);
        window.append(sample(1));
        window.append(sample(2));
        let evicted = window.append(sample(3)).unwrap();
        assert_eq!(evicted.timestamp, "t1");
        assert_eq!(window.timestamps(), vec!["t2", "t3"]);
    }

    #[test]
    fn zero_capacity_still_holds_latest() {
        let mut window = SeriesWindow::new(0);
        window.append(sample(1));
        window.append(sample(2));
        assert_eq!(window.len(), 1);
        assert_eq!(window.latest().unwrap().timestamp, "t2");
    }

    #[test]
    fn symbol_comes_from_newest_sample_that_has_one() {
        let mut window = SeriesWindow::default();
        window.append(sample(1).with_symbol(Some("AAPL".to_string())));
        window.append(sample(2));
        assert_eq!(window.symbol(), Some("AAPL"));
        window.append(sample(3).with_symbol(Some("MSFT".to_string())));
        assert_eq!(window.symbol(), Some("MSFT"));
    }
}
