use super::GestureError;
use crate::area::ContainerSize;

/// Absolute gesture reading at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureValues {
    /// Horizontal pointer position, in pixels.
    pub x: f64,
    /// Vertical pointer position, in pixels.
    pub y: f64,
    /// Rotation of the gesture, in degrees.
    pub rotation: f64,
    /// Pinch ratio, where 1 is neutral.
    pub scale: f64,
}
impl Default for GestureValues {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}
impl GestureValues {
    /// Returns a reading of a pointer position with neutral rotation and
    /// scale.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
    /// Returns a pinch reading with the given rotation and scale.
    pub fn pinch(rotation: f64, scale: f64) -> Self {
        Self {
            rotation,
            scale,
            ..Self::default()
        }
    }

    /// Checks that every field is finite and the scale is positive.
    pub fn validate(self) -> Result<Self, GestureError> {
        let fields = [
            ("x", self.x),
            ("y", self.y),
            ("rotation", self.rotation),
            ("scale", self.scale),
        ];
        if let Some(&(field, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GestureError::NonFinite { field, value });
        }
        if self.scale <= 0.0 {
            return Err(GestureError::NonPositiveScale(self.scale));
        }
        Ok(self)
    }
}

/// Stage of a gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GesturePhase {
    /// First reading of a gesture.
    Start,
    /// Any reading between the first and the last.
    Move,
    /// Gesture released.
    End,
}

/// Classification of a gesture, decided upstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GestureKind {
    /// Single-pointer drag; position matters.
    Pan,
    /// Multi-pointer pinch; rotation and scale matter.
    Pinch,
}

/// One classified gesture event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GestureEvent {
    /// Stage of the gesture.
    pub phase: GesturePhase,
    /// Kind of the gesture.
    pub kind: GestureKind,
    /// Reading at this instant.
    pub values: GestureValues,
    /// Pixel dimensions of the area receiving the gesture.
    pub container: ContainerSize,
}
impl GestureEvent {
    /// Returns a new event.
    pub fn new(
        phase: GesturePhase,
        kind: GestureKind,
        values: GestureValues,
        container: ContainerSize,
    ) -> Self {
        Self {
            phase,
            kind,
            values,
            container,
        }
    }
}
