//! Colour picker driven by an infinite transform area.
//!
//! Rotation picks the hue. Panning picks saturation (horizontally) and
//! brightness (vertically), bouncing back and forth between 0 and 100 as the
//! pan continues so that the infinite plane never runs out of colours.

use crate::area::{AreaChange, AreaConfig, AxisLock, PerAxis};
use crate::input::{GestureError, GestureEvent};
use crate::math::ClampRange;
use crate::tiling::InfiniteArea;

/// Smallest and largest zoom of the chooser.
const SCALE_RANGE: (f64, f64) = (1.0, 10.0);

/// Colour in hue/saturation/brightness.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hsb {
    /// Hue, in degrees from 0 (inclusive) to 360 (exclusive).
    pub h: f64,
    /// Saturation, from 0 to 100.
    pub s: f64,
    /// Brightness, from 0 to 100.
    pub b: f64,
}
impl Default for Hsb {
    fn default() -> Self {
        Self {
            h: 0.0,
            s: 50.0,
            b: 50.0,
        }
    }
}
impl Hsb {
    /// Converts to hue/saturation/lightness, with saturation and lightness
    /// from 0 to 100.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let l = self.b * (1.0 - self.s / 200.0);
        let s = if l <= 0.0 || l >= 100.0 {
            0.0
        } else {
            (self.b - l) / l.min(100.0 - l) * 100.0
        };
        (self.h, s, l)
    }

    /// Returns the colour as a CSS `hsl()` value.
    pub fn css(self) -> String {
        let (h, s, l) = self.to_hsl();
        format!("hsl({}, {}%, {}%)", h, s, l)
    }
}

/// Colour picker state.
#[derive(Debug)]
pub struct ColourChooser {
    area: InfiniteArea,
    colour: Hsb,
}

impl Default for ColourChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl ColourChooser {
    /// Returns the transform area configuration used by the chooser.
    ///
    /// Rotation is locked so that turning changes the hue without spinning
    /// the tiles.
    pub fn area_config() -> AreaConfig {
        AreaConfig {
            clamps: PerAxis {
                scale: Some(ClampRange::new(SCALE_RANGE.0, SCALE_RANGE.1)),
                ..PerAxis::default()
            },
            locks: PerAxis {
                rotation: AxisLock::Locked,
                ..PerAxis::default()
            },
            ..AreaConfig::default()
        }
    }

    /// Returns a new chooser at the starting colour.
    pub fn new() -> Self {
        Self {
            area: InfiniteArea::new(Self::area_config()),
            colour: Hsb::default(),
        }
    }

    /// Returns the selected colour.
    pub fn colour(&self) -> Hsb {
        self.colour
    }
    /// Returns the infinite area the chooser is drawn in.
    pub fn area(&self) -> &InfiniteArea {
        &self.area
    }
    /// Returns the infinite area mutably.
    pub fn area_mut(&mut self) -> &mut InfiniteArea {
        &mut self.area
    }

    /// Applies a gesture event, returning the new colour if it changed.
    pub fn handle_event(&mut self, event: GestureEvent) -> Result<Option<Hsb>, GestureError> {
        Ok(self.area.handle_event(event)?.map(|change| {
            self.colour = colour_for(&change);
            self.colour
        }))
    }
}

/// Returns the colour selected by a set of transform values.
pub fn colour_for(change: &AreaChange) -> Hsb {
    let pct_x = change.values.x / change.container.width().max(1.0);
    let pct_y = change.values.y / change.container.height().max(1.0);
    Hsb {
        h: change.values.rotation.rem_euclid(360.0),
        s: bounce((-pct_x * 100.0 + 50.0).abs() % 200.0),
        b: bounce((pct_y * 100.0 + 50.0).abs() % 200.0),
    }
}

/// Folds `0..200` onto `0..=100..=0`.
fn bounce(value: f64) -> f64 {
    if value > 100.0 {
        200.0 - value
    } else {
        value
    }
}
