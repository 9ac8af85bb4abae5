//! Market data aggregate: ticks received from the signal stream and the
//! sliding window that holds them.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
