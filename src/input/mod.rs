//! Classified gesture events arriving from the pointer/touch layer.

mod error;
mod gesture;

pub use error::GestureError;
pub use gesture::{GestureEvent, GestureKind, GesturePhase, GestureValues};
