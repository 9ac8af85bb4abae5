//! JavaScript-facing entry points. Only wiring lives here.

pub mod wasm_api;

pub use wasm_api::*;
