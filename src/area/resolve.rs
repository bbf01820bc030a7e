//! Converts gesture readings into new logical and display values.
//!
//! Every function here resolves a reading relative to the reading at the
//! start of the gesture and the values the gesture started from. None of them
//! keep state; the caller stores the returned `event_start` for the next step.

use cgmath::{Deg, Rad};

use super::{AreaConfig, ContainerSize, TransformValues};
use crate::input::GestureValues;
use crate::math::{clamp, rotate_about_origin};

/// Clamp corrections smaller than this (in pixels) don't rebase the gesture.
const OFFSET_REBASE_EPSILON: f64 = 0.0001;
/// Clamp corrections smaller than this (in degrees) don't rebase the gesture.
const ROTATION_REBASE_EPSILON: f64 = 0.0001;
/// Clamp corrections smaller than this don't rebase the gesture. Scale is a
/// ratio, so small corrections compound; the threshold is deliberately loose.
const SCALE_REBASE_EPSILON: f64 = 0.1;

/// Degrees of rotation for dragging across the full container width in
/// pan-as-scale/rotate mode.
const DEGREES_PER_CONTAINER_WIDTH: f64 = 360.0;
/// Base-2 logarithm of the scale factor for dragging across the full
/// container height in pan-as-scale/rotate mode.
const LOG2_SCALE_PER_CONTAINER_HEIGHT: f64 = -2.0;

/// Result of resolving one gesture reading.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Resolution {
    /// New logical values.
    pub values: TransformValues,
    /// New display values.
    pub display: TransformValues,
    /// Start-of-gesture reading to use for the next step, rebased on any axis
    /// that hit its clamp.
    pub event_start: GestureValues,
}

/// Resolves a pan reading. Only the offset changes.
pub fn pan(
    event: GestureValues,
    event_start: GestureValues,
    values: TransformValues,
    display: TransformValues,
    config: &AreaConfig,
) -> Resolution {
    let mut event_start = event_start;

    let new_x = values.x + (event.x - event_start.x);
    let new_y = values.y + (event.y - event_start.y);
    let clamped_x = clamp(new_x, config.clamps.x);
    let clamped_y = clamp(new_y, config.clamps.y);

    // Rebase the start so that panning back the other way takes effect
    // immediately.
    if (clamped_x - new_x).abs() > OFFSET_REBASE_EPSILON {
        event_start.x = values.x + event.x - clamped_x;
        log::trace!("x clamped to {}; gesture start rebased to {}", clamped_x, event_start.x);
    }
    if (clamped_y - new_y).abs() > OFFSET_REBASE_EPSILON {
        event_start.y = values.y + event.y - clamped_y;
        log::trace!("y clamped to {}; gesture start rebased to {}", clamped_y, event_start.y);
    }

    let actual_dx = clamped_x - values.x;
    let actual_dy = clamped_y - values.y;

    let mut new_display = display;
    if config.locks.x.is_free() {
        new_display.x += actual_dx;
    }
    if config.locks.y.is_free() {
        new_display.y += actual_dy;
    }

    // Screen-space movement covers less logical distance when zoomed in. When
    // zoomed out it covers more, which could carry the value past the clamp.
    let new_values = TransformValues {
        x: clamp(values.x + actual_dx / display.scale, config.clamps.x),
        y: clamp(values.y + actual_dy / display.scale, config.clamps.y),
        ..values
    };

    Resolution {
        values: new_values,
        display: new_display,
        event_start,
    }
}

/// Resolves a pinch reading. Only rotation and scale change logically, but
/// the display offset moves so the content under the centre of the view stays
/// put.
pub fn scale_rotate(
    event: GestureValues,
    event_start: GestureValues,
    values: TransformValues,
    display: TransformValues,
    config: &AreaConfig,
) -> Resolution {
    let mut event_start = event_start;

    let new_rotation = values.rotation + event.rotation - event_start.rotation;
    let new_scale = values.scale * event.scale / event_start.scale;

    let clamped_rotation = clamp(new_rotation, config.clamps.rotation);
    if (clamped_rotation - new_rotation).abs() > ROTATION_REBASE_EPSILON {
        event_start.rotation = values.rotation + event.rotation - clamped_rotation;
        log::trace!(
            "rotation clamped to {}; gesture start rebased to {}",
            clamped_rotation,
            event_start.rotation,
        );
    }
    let clamped_scale = clamp(new_scale, config.clamps.scale);
    if (clamped_scale - new_scale).abs() > SCALE_REBASE_EPSILON {
        event_start.scale = values.scale * event.scale / clamped_scale;
        log::trace!(
            "scale clamped to {}; gesture start rebased to {}",
            clamped_scale,
            event_start.scale,
        );
    }

    let actual_delta_rotation = clamped_rotation - values.rotation;
    let actual_scale_ratio = clamped_scale / values.scale;

    let mut new_display = display;
    if config.locks.rotation.is_free() {
        new_display.rotation += actual_delta_rotation;
        let delta = Rad::from(Deg(actual_delta_rotation));
        new_display = new_display.with_offset(rotate_about_origin(display.offset(), delta));
    }
    if config.locks.scale.is_free() {
        new_display.scale *= actual_scale_ratio;
        new_display = new_display.with_offset(new_display.offset() * actual_scale_ratio);
    }

    let new_values = TransformValues {
        rotation: clamped_rotation,
        scale: clamped_scale,
        ..values
    };

    Resolution {
        values: new_values,
        display: new_display,
        event_start,
    }
}

/// Resolves a pan reading as a pinch: horizontal movement rotates and
/// vertical movement scales.
///
/// The pinch is synthesized from scratch on every step, so clamp rebasing of
/// the synthetic start is discarded and `event_start` comes back unchanged.
pub fn pan_as_scale_rotate(
    event: GestureValues,
    event_start: GestureValues,
    values: TransformValues,
    display: TransformValues,
    config: &AreaConfig,
    container: ContainerSize,
) -> Resolution {
    let dx = event_start.x - event.x;
    let dy = event_start.y - event.y;
    let synthetic_event = GestureValues::pinch(
        dx / container.width() * DEGREES_PER_CONTAINER_WIDTH,
        (dy / container.height() * LOG2_SCALE_PER_CONTAINER_HEIGHT).exp2(),
    );
    let synthetic_start = GestureValues::default();

    let resolution = scale_rotate(synthetic_event, synthetic_start, values, display, config);
    Resolution {
        event_start,
        ..resolution
    }
}
