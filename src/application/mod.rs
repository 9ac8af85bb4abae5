pub mod config;
pub mod messages;
pub mod stream_ingestor;
pub mod strategy;

pub use config::*;
pub use messages::*;
pub use stream_ingestor::*;
pub use strategy::*;
