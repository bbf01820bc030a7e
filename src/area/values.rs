use cgmath::Vector2;

/// Minimum container width & height, to avoid divide-by-zero errors.
const MIN_CONTAINER_SIZE: f64 = 1.0;

/// 2D affine view: offset, rotation and scale.
///
/// Used both for the logical values that drive game logic and for the
/// display values that are actually rendered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformValues {
    /// Horizontal offset, in pixels.
    pub x: f64,
    /// Vertical offset, in pixels.
    pub y: f64,
    /// Rotation, in degrees.
    pub rotation: f64,
    /// Scale factor. Always positive.
    pub scale: f64,
}
impl Default for TransformValues {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}
impl TransformValues {
    /// Returns the offset as a vector.
    pub fn offset(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Replaces the offset.
    #[must_use = "This method returns a new value instead of mutating its input"]
    pub fn with_offset(self, offset: Vector2<f64>) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            ..self
        }
    }

    /// Returns the CSS transform that places content according to these
    /// values.
    pub fn css_transform(self) -> String {
        format!(
            "translateX({}px) translateY({}px) rotate({}deg) scale({}%)",
            self.x,
            self.y,
            self.rotation,
            self.scale * 100.0,
        )
    }
}

/// Pixel dimensions of the element receiving gestures.
///
/// Both dimensions are kept at or above 1 because they are used as divisors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerSize {
    width: f64,
    height: f64,
}
impl Default for ContainerSize {
    fn default() -> Self {
        Self {
            width: MIN_CONTAINER_SIZE,
            height: MIN_CONTAINER_SIZE,
        }
    }
}
impl ContainerSize {
    /// Returns a container size, raising each dimension to the minimum. `NaN`
    /// dimensions also become the minimum.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(MIN_CONTAINER_SIZE),
            height: height.max(MIN_CONTAINER_SIZE),
        }
    }

    /// Returns the width, in pixels.
    pub fn width(self) -> f64 {
        self.width
    }
    /// Returns the height, in pixels.
    pub fn height(self) -> f64 {
        self.height
    }
}

/// Everything reported to the change callback after a resolved gesture step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AreaChange {
    /// Logical values.
    pub values: TransformValues,
    /// Display values.
    pub display: TransformValues,
    /// Container dimensions at the time of the step.
    pub container: ContainerSize,
}
