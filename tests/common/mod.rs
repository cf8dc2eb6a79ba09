#![allow(dead_code)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from layerlens for tests
pub use layerlens::{Layer, LayerError, LayerKind, generate_layers};
