//! Replays a scripted gesture session through the colour chooser and logs
//! what a renderer would draw.

#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::collections::VecDeque;
use std::error::Error;

use colour_guesser::{
    ColourChooser, ContainerSize, GestureEvent, GestureKind, GesturePhase, GestureValues, PanMode,
};

const CONTAINER_WIDTH: f64 = 360.0;
const CONTAINER_HEIGHT: f64 = 480.0;

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(LevelFilter::Info).env().init()?;

    let mut chooser = ColourChooser::new();
    log::info!("starting colour {}", chooser.colour().css());

    let container = ContainerSize::new(CONTAINER_WIDTH, CONTAINER_HEIGHT);
    let mut events: VecDeque<GestureEvent> = VecDeque::new();
    queue_drag(&mut events, container, (180.0, 240.0), (40.0, 400.0), 6);
    queue_pinch(&mut events, container, (0.0, 1.0), (75.0, 2.5), 5);
    queue_drag(&mut events, container, (40.0, 400.0), (900.0, -300.0), 8);

    for event in events.drain(..) {
        if let Some(colour) = chooser.handle_event(event)? {
            let layout = chooser.area().layout();
            log::debug!(
                "tiles {:?} x {:?} under {}",
                layout.columns(),
                layout.rows(),
                chooser.area().css_transform(),
            );
            log::info!("colour {} ({} tiles)", colour.css(), layout.len());
        }
    }

    // Same pinch, but driven by a single pointer.
    chooser
        .area_mut()
        .area_mut()
        .set_pan_mode(PanMode::ScaleRotate);
    queue_drag(&mut events, container, (180.0, 240.0), (90.0, 120.0), 4);
    for event in events.drain(..) {
        chooser.handle_event(event)?;
    }
    log::info!(
        "final colour {} with logical values {:?}",
        chooser.colour().css(),
        chooser.area().area().values(),
    );

    Ok(())
}

/// Queues a single-pointer drag from `from` to `to` in `steps` moves.
fn queue_drag(
    events: &mut VecDeque<GestureEvent>,
    container: ContainerSize,
    from: (f64, f64),
    to: (f64, f64),
    steps: u32,
) {
    let at = |t: f64| GestureValues::at(lerp(from.0, to.0, t), lerp(from.1, to.1, t));
    queue_gesture(events, container, GestureKind::Pan, at, steps);
}

/// Queues a pinch from `(rotation, scale)` `from` to `to` in `steps` moves.
fn queue_pinch(
    events: &mut VecDeque<GestureEvent>,
    container: ContainerSize,
    from: (f64, f64),
    to: (f64, f64),
    steps: u32,
) {
    let at = |t: f64| GestureValues::pinch(lerp(from.0, to.0, t), lerp(from.1, to.1, t));
    queue_gesture(events, container, GestureKind::Pinch, at, steps);
}

fn queue_gesture(
    events: &mut VecDeque<GestureEvent>,
    container: ContainerSize,
    kind: GestureKind,
    at: impl Fn(f64) -> GestureValues,
    steps: u32,
) {
    let steps = steps.max(1);
    events.push_back(GestureEvent::new(GesturePhase::Start, kind, at(0.0), container));
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        events.push_back(GestureEvent::new(GesturePhase::Move, kind, at(t), container));
    }
    events.push_back(GestureEvent::new(GesturePhase::End, kind, at(1.0), container));
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
