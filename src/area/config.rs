use super::TransformValues;
use crate::math::ClampRange;

/// Smallest bound a scale clamp may have. Scale must stay positive.
pub const MIN_SCALE_BOUND: f64 = 1e-6;

/// Whether an axis's display value follows its logical value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AxisLock {
    /// Display value follows the logical value.
    Free,
    /// Display value stays put while the logical value keeps changing.
    Locked,
}
impl Default for AxisLock {
    fn default() -> Self {
        AxisLock::Free
    }
}
impl AxisLock {
    /// Returns whether the display value should follow the logical value.
    pub fn is_free(self) -> bool {
        self == AxisLock::Free
    }
}

/// Per-axis value of some kind.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PerAxis<T> {
    /// Horizontal offset.
    pub x: T,
    /// Vertical offset.
    pub y: T,
    /// Rotation.
    pub rotation: T,
    /// Scale.
    pub scale: T,
}

/// How single-pointer pans are interpreted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanMode {
    /// Pans move the offset.
    Translate,
    /// Horizontal pan drives rotation and vertical pan drives scale.
    ScaleRotate,
}
impl Default for PanMode {
    fn default() -> Self {
        PanMode::Translate
    }
}

/// Configuration of a transform area, fixed when the area is created.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AreaConfig {
    /// Range each logical value is bounded to, if any.
    pub clamps: PerAxis<Option<ClampRange>>,
    /// Which display values are locked.
    pub locks: PerAxis<AxisLock>,
    /// Logical and display values at creation.
    pub initial: TransformValues,
    /// Interpretation of pan gestures.
    pub pan_mode: PanMode,
}

impl AreaConfig {
    /// Returns the configuration with the scale clamp's bounds raised to at
    /// least [`MIN_SCALE_BOUND`].
    pub fn with_positive_scale_clamp(mut self) -> Self {
        if let Some(range) = self.clamps.scale {
            if range.min < MIN_SCALE_BOUND {
                log::warn!(
                    "scale clamp {}..={} raised to stay above {}",
                    range.min,
                    range.max,
                    MIN_SCALE_BOUND,
                );
                self.clamps.scale = Some(ClampRange::new(
                    range.min.max(MIN_SCALE_BOUND),
                    range.max.max(MIN_SCALE_BOUND),
                ));
            }
        }
        self
    }
}
