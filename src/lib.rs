//! Gesture-to-transform engine for a colour guessing puzzle.
//!
//! Classified gesture events (pans and pinches) are resolved into a 2D
//! transform with separate logical and display values, per-axis clamping and
//! locking. The transformed content can be tiled infinitely, and the colour
//! chooser maps the logical values onto a colour.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod area;
pub mod chooser;
pub mod input;
pub mod math;
pub mod tiling;

pub use area::{
    AreaChange, AreaConfig, AxisLock, ContainerSize, PanMode, TransformArea, TransformValues,
};
pub use chooser::{ColourChooser, Hsb};
pub use input::{GestureError, GestureEvent, GestureKind, GesturePhase, GestureValues};
pub use tiling::{InfiniteArea, TileLayout};
