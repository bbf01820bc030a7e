//! Gesture-driven 2D transform with separate logical and display values.
//!
//! Logical values are what game logic reads (for example, hue from rotation).
//! Display values are what gets rendered. They diverge whenever an axis is
//! locked: the logical value keeps following the gesture while the display
//! value stays still.

mod config;
pub mod resolve;
mod transform_area;
mod values;

pub use config::{AreaConfig, AxisLock, PanMode, PerAxis, MIN_SCALE_BOUND};
pub use resolve::Resolution;
pub use transform_area::{ChangeCallback, TransformArea};
pub use values::{AreaChange, ContainerSize, TransformValues};
