//! Long randomized gesture sequences against the invariants of the area.

use colour_guesser::area::PerAxis;
use colour_guesser::math::{distance, ClampRange};
use colour_guesser::{
    AreaConfig, AxisLock, ContainerSize, GestureError, GestureEvent, GestureKind, GesturePhase,
    GestureValues, InfiniteArea, PanMode, TransformArea,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CONTAINER: (f64, f64) = (320.0, 240.0);
const EPSILON: f64 = 1e-6;

fn container() -> ContainerSize {
    ContainerSize::new(CONTAINER.0, CONTAINER.1)
}

fn event(phase: GesturePhase, kind: GestureKind, values: GestureValues) -> GestureEvent {
    GestureEvent::new(phase, kind, values, container())
}

/// Plays one random gesture of `kind` with `moves` readings.
fn random_gesture(
    area: &mut TransformArea,
    rng: &mut StdRng,
    kind: GestureKind,
    moves: usize,
) -> Result<(), GestureError> {
    let reading = |rng: &mut StdRng| match kind {
        GestureKind::Pan => GestureValues::at(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)),
        GestureKind::Pinch => GestureValues::pinch(rng.gen_range(-360.0..360.0), rng.gen_range(0.2..5.0)),
    };
    area.handle_event(event(GesturePhase::Start, kind, reading(rng)))?;
    for _ in 0..moves {
        area.handle_event(event(GesturePhase::Move, kind, reading(rng)))?;
    }
    area.handle_event(event(GesturePhase::End, kind, reading(rng)))?;
    Ok(())
}

#[test]
fn scale_stays_positive() -> Result<(), GestureError> {
    let mut rng = StdRng::seed_from_u64(0x5ca1e);
    let mut area = TransformArea::new(AreaConfig::default());
    for _ in 0..200 {
        random_gesture(&mut area, &mut rng, GestureKind::Pinch, 10)?;
        assert!(area.values().scale > 0.0);
        assert!(area.display().scale > 0.0);
        assert!(area.values().scale.is_finite());
    }
    Ok(())
}

#[test]
fn clamps_always_hold() -> Result<(), GestureError> {
    let mut rng = StdRng::seed_from_u64(42);
    let clamps = PerAxis {
        x: Some(ClampRange::new(-100.0, 100.0)),
        y: Some(ClampRange::new(0.0, 50.0)),
        rotation: Some(ClampRange::new(-45.0, 45.0)),
        scale: Some(ClampRange::new(0.5, 4.0)),
    };
    let mut area = TransformArea::new(AreaConfig {
        clamps,
        ..AreaConfig::default()
    });
    for i in 0..300 {
        let kind = if i % 2 == 0 { GestureKind::Pan } else { GestureKind::Pinch };
        random_gesture(&mut area, &mut rng, kind, 5)?;
        let v = area.values();
        assert!(v.x >= -100.0 - EPSILON && v.x <= 100.0 + EPSILON, "x = {}", v.x);
        assert!(v.y >= -EPSILON && v.y <= 50.0 + EPSILON, "y = {}", v.y);
        assert!(v.rotation >= -45.0 && v.rotation <= 45.0, "rotation = {}", v.rotation);
        assert!(v.scale >= 0.5 && v.scale <= 4.0, "scale = {}", v.scale);
    }
    Ok(())
}

#[test]
fn locked_display_never_moves() -> Result<(), GestureError> {
    let mut rng = StdRng::seed_from_u64(7);
    let locks = PerAxis {
        x: AxisLock::Locked,
        y: AxisLock::Locked,
        rotation: AxisLock::Locked,
        scale: AxisLock::Locked,
    };
    let mut area = TransformArea::new(AreaConfig {
        locks,
        ..AreaConfig::default()
    });
    let before = area.display();
    for i in 0..100 {
        let kind = if i % 3 == 0 { GestureKind::Pan } else { GestureKind::Pinch };
        random_gesture(&mut area, &mut rng, kind, 4)?;
    }
    assert_eq!(area.display(), before);
    assert_ne!(area.values(), before);
    Ok(())
}

#[test]
fn pure_rotation_preserves_offset_length() -> Result<(), GestureError> {
    let mut area = TransformArea::new(AreaConfig::default());
    area.handle_event(event(GesturePhase::Start, GestureKind::Pan, GestureValues::at(0.0, 0.0)))?;
    area.handle_event(event(GesturePhase::Move, GestureKind::Pan, GestureValues::at(120.0, -50.0)))?;
    area.handle_event(event(GesturePhase::End, GestureKind::Pan, GestureValues::at(120.0, -50.0)))?;
    let before = area.display();

    area.handle_event(event(GesturePhase::Start, GestureKind::Pinch, GestureValues::pinch(10.0, 1.0)))?;
    area.handle_event(event(GesturePhase::Move, GestureKind::Pinch, GestureValues::pinch(100.0, 1.0)))?;
    let after = area.display();

    assert!((distance(&[after.x, after.y]) - 130.0).abs() < EPSILON);
    // A quarter turn maps (x, y) to (-y, x) in screen coordinates.
    assert!((after.x - -before.y).abs() < EPSILON);
    assert!((after.y - before.x).abs() < EPSILON);
    assert!((after.rotation - 90.0).abs() < EPSILON);
    Ok(())
}

#[test]
fn one_pan_equals_split_pans() -> Result<(), GestureError> {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let (dx1, dy1) = (rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0));
        let (dx2, dy2) = (rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0));

        let mut split = TransformArea::new(AreaConfig::default());
        split.handle_event(event(GesturePhase::Start, GestureKind::Pan, GestureValues::at(0.0, 0.0)))?;
        split.handle_event(event(GesturePhase::Move, GestureKind::Pan, GestureValues::at(dx1, dy1)))?;
        split.handle_event(event(
            GesturePhase::Move,
            GestureKind::Pan,
            GestureValues::at(dx1 + dx2, dy1 + dy2),
        ))?;

        let mut single = TransformArea::new(AreaConfig::default());
        single.handle_event(event(GesturePhase::Start, GestureKind::Pan, GestureValues::at(0.0, 0.0)))?;
        single.handle_event(event(
            GesturePhase::Move,
            GestureKind::Pan,
            GestureValues::at(dx1 + dx2, dy1 + dy2),
        ))?;

        assert!((split.values().x - single.values().x).abs() < EPSILON);
        assert!((split.values().y - single.values().y).abs() < EPSILON);
    }
    Ok(())
}

#[test]
fn infinite_area_always_covers_the_centre_tile() -> Result<(), GestureError> {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut infinite = InfiniteArea::new(AreaConfig {
        clamps: PerAxis {
            scale: Some(ClampRange::new(0.5, 4.0)),
            ..PerAxis::default()
        },
        ..AreaConfig::default()
    });
    for i in 0..100 {
        let kind = if i % 2 == 0 { GestureKind::Pan } else { GestureKind::Pinch };
        random_gesture(infinite.area_mut(), &mut rng, kind, 3)?;

        // The tile under the centre of the view must be in the window.
        let display = infinite.area().display();
        let layout = infinite.layout();
        let turn = (-display.rotation).to_radians();
        let (ux, uy) = (
            display.x * turn.cos() - display.y * turn.sin(),
            display.x * turn.sin() + display.y * turn.cos(),
        );
        let centre_column = -(ux / (CONTAINER.0 * display.scale)).round() as i64;
        let centre_row = -(uy / (CONTAINER.1 * display.scale)).round() as i64;
        assert!(layout.columns().contains(&centre_column));
        assert!(layout.rows().contains(&centre_row));
    }
    Ok(())
}

#[test]
fn pan_as_scale_rotate_mode() -> Result<(), GestureError> {
    let mut area = TransformArea::new(AreaConfig {
        pan_mode: PanMode::ScaleRotate,
        ..AreaConfig::default()
    });
    area.handle_event(event(GesturePhase::Start, GestureKind::Pan, GestureValues::at(160.0, 120.0)))?;
    // Up by half the height halves the scale; right by half the width is
    // half a turn back.
    area.handle_event(event(GesturePhase::Move, GestureKind::Pan, GestureValues::at(320.0, 0.0)))?;
    let v = area.values();
    assert!((v.rotation - -180.0).abs() < EPSILON);
    assert!((v.scale - 0.5).abs() < EPSILON);
    assert_eq!((v.x, v.y), (0.0, 0.0));
    Ok(())
}
