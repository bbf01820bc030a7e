use std::fmt;

use super::{resolve, AreaChange, AreaConfig, ContainerSize, PanMode, TransformValues};
use crate::input::{GestureError, GestureEvent, GestureKind, GesturePhase, GestureValues};

/// Callback invoked after every resolved gesture step.
pub type ChangeCallback = Box<dyn FnMut(&AreaChange)>;

/// Gesture in progress.
#[derive(Debug, Copy, Clone, PartialEq)]
struct ActiveGesture {
    kind: GestureKind,
    pan_mode: PanMode,

    /// Reading at the start of the gesture, rebased whenever a clamp bites.
    event_start: GestureValues,
    /// Logical values when the gesture started.
    origin_values: TransformValues,
    /// Display values when the gesture started.
    origin_display: TransformValues,
}

/// Owns the logical and display transform of one gesture-driven element and
/// applies gesture events to it.
///
/// Only one gesture is tracked at a time. Every step is resolved against the
/// values the gesture started from, and whatever was resolved last becomes
/// the starting point of the next gesture.
pub struct TransformArea {
    config: AreaConfig,
    container: ContainerSize,
    pan_mode: PanMode,

    values: TransformValues,
    display: TransformValues,
    gesture: Option<ActiveGesture>,

    on_change: Option<ChangeCallback>,
}

impl fmt::Debug for TransformArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformArea")
            .field("config", &self.config)
            .field("container", &self.container)
            .field("pan_mode", &self.pan_mode)
            .field("values", &self.values)
            .field("display", &self.display)
            .field("gesture", &self.gesture)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl TransformArea {
    /// Returns a new idle area at the configured initial values.
    ///
    /// A scale clamp reaching zero or below is raised to stay positive.
    pub fn new(config: AreaConfig) -> Self {
        let config = config.with_positive_scale_clamp();
        Self {
            config,
            container: ContainerSize::default(),
            pan_mode: config.pan_mode,

            values: config.initial,
            display: config.initial,
            gesture: None,

            on_change: None,
        }
    }

    /// Sets the callback invoked after every resolved gesture step.
    pub fn set_on_change(&mut self, callback: impl FnMut(&AreaChange) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    /// Returns the configuration the area was created with.
    pub fn config(&self) -> &AreaConfig {
        &self.config
    }
    /// Returns the logical values.
    pub fn values(&self) -> TransformValues {
        self.values
    }
    /// Returns the display values.
    pub fn display(&self) -> TransformValues {
        self.display
    }
    /// Returns the most recent container dimensions.
    pub fn container(&self) -> ContainerSize {
        self.container
    }
    /// Sets the container dimensions. Transform values are untouched.
    pub fn set_container(&mut self, width: f64, height: f64) {
        self.container = ContainerSize::new(width, height);
    }
    /// Returns whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Returns how pans will be interpreted by the next gesture.
    pub fn pan_mode(&self) -> PanMode {
        self.pan_mode
    }
    /// Sets how pans are interpreted. A gesture already in progress keeps the
    /// mode it started with.
    pub fn set_pan_mode(&mut self, pan_mode: PanMode) {
        self.pan_mode = pan_mode;
    }

    /// Returns logical and display values to the configured initial values
    /// and abandons any gesture in progress.
    pub fn reset(&mut self) {
        self.values = self.config.initial;
        self.display = self.config.initial;
        self.gesture = None;
    }

    /// Returns everything the change callback would receive right now.
    pub fn snapshot(&self) -> AreaChange {
        AreaChange {
            values: self.values,
            display: self.display,
            container: self.container,
        }
    }

    /// Applies a gesture event.
    ///
    /// Returns the resolved change for a move event that belongs to the
    /// current gesture, or `None` for any other event. Invalid readings are
    /// rejected before any state changes.
    pub fn handle_event(&mut self, event: GestureEvent) -> Result<Option<AreaChange>, GestureError> {
        let reading = event.values.validate()?;
        self.container = event.container;

        match event.phase {
            GesturePhase::Start => {
                self.start_gesture(event.kind, reading);
                Ok(None)
            }
            GesturePhase::Move => Ok(self.update_gesture(event.kind, reading)),
            GesturePhase::End => {
                self.end_gesture();
                Ok(None)
            }
        }
    }

    fn start_gesture(&mut self, kind: GestureKind, reading: GestureValues) {
        if let Some(previous) = self.gesture {
            log::debug!("{:?} gesture replaced before it ended", previous.kind);
        }
        log::debug!("{:?} gesture started at {:?}", kind, reading);
        self.gesture = Some(ActiveGesture {
            kind,
            pan_mode: self.pan_mode,

            event_start: reading,
            origin_values: self.values,
            origin_display: self.display,
        });
    }

    fn update_gesture(&mut self, kind: GestureKind, reading: GestureValues) -> Option<AreaChange> {
        let gesture = match self.gesture {
            Some(g) => g,
            None => {
                log::warn!("ignoring {:?} move outside of a gesture", kind);
                return None;
            }
        };
        if gesture.kind != kind {
            // The recognizer reclassified the gesture; start over from here.
            log::debug!("{:?} gesture reclassified as {:?}", gesture.kind, kind);
            self.start_gesture(kind, reading);
            return None;
        }

        let (event_start, values, display) =
            (gesture.event_start, gesture.origin_values, gesture.origin_display);
        let resolution = match (kind, gesture.pan_mode) {
            (GestureKind::Pinch, _) => {
                resolve::scale_rotate(reading, event_start, values, display, &self.config)
            }
            (GestureKind::Pan, PanMode::Translate) => {
                resolve::pan(reading, event_start, values, display, &self.config)
            }
            (GestureKind::Pan, PanMode::ScaleRotate) => resolve::pan_as_scale_rotate(
                reading,
                event_start,
                values,
                display,
                &self.config,
                self.container,
            ),
        };

        self.gesture = Some(ActiveGesture {
            event_start: resolution.event_start,
            ..gesture
        });
        self.values = resolution.values;
        self.display = resolution.display;

        let change = self.snapshot();
        if let Some(callback) = &mut self.on_change {
            callback(&change);
        }
        Some(change)
    }

    fn end_gesture(&mut self) {
        match self.gesture.take() {
            Some(g) => log::debug!("{:?} gesture ended at {:?}", g.kind, self.values),
            None => log::warn!("ignoring end outside of a gesture"),
        }
    }
}
