//! WebSocket transport for the price/signal stream.

pub mod client_handle;
pub mod signal_client;

pub use client_handle::*;
pub use signal_client::*;
