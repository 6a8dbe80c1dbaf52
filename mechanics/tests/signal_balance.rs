use std::sync::Arc;

use mechanics::{
    AxisPositions, ButtonSignal, ButtonState, CraneSpec, MotionController, RemoteButton, SignalKind,
    Vec3f,
};
use parking_lot::Mutex;

#[derive(Default)]
struct Tally {
    pressed: usize,
    released: usize,
    sum: Vec3f,
}

fn tallied(direction: Vec3f) -> (RemoteButton, Arc<Mutex<Tally>>) {
    let tally = Arc::new(Mutex::new(Tally::default()));
    let mut button = RemoteButton::new(direction);
    let sink = tally.clone();
    button.subscribe(move |s: &ButtonSignal| {
        let mut t = sink.lock();
        match s.kind {
            SignalKind::Pressed => t.pressed += 1,
            SignalKind::Released => t.released += 1,
        }
        t.sum += s.direction;
    });
    (button, tally)
}

#[test]
fn balanced_whenever_not_pressed() {
    let (mut button, tally) = tallied(Vec3f::new(0.0, 0.0, 1.0));

    // Deterministic pseudo-random walk over the four operations.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..2_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        match seed % 4 {
            0 => button.hover_enter(),
            1 => {
                button.hover_exit();
            }
            2 => {
                button.press();
            }
            _ => {
                button.release();
            }
        }
        let t = tally.lock();
        if button.state() != ButtonState::Pressed {
            assert_eq!(t.pressed, t.released);
            assert_eq!(t.sum, Vec3f::ZERO);
        } else {
            assert_eq!(t.pressed, t.released + 1);
        }
    }
}

#[test]
fn forced_release_keeps_crane_from_drifting() {
    let mut crane = MotionController::new(&CraneSpec::default(), AxisPositions { beam: 0.0, carriage: 0.0, hook: -2.0 })
        .expect("default spec is valid");
    let mut up = RemoteButton::new(Vec3f::Y);

    up.hover_enter();
    if let Some(s) = up.press() {
        crane.add_movement(s.direction);
    }
    crane.tick(0.5);
    // Pointer dragged off the held control.
    if let Some(s) = up.hover_exit() {
        crane.add_movement(s.direction);
    }
    assert_eq!(crane.input(), Vec3f::ZERO);

    let before = crane.positions();
    for _ in 0..30 {
        crane.tick(1.0 / 30.0);
    }
    assert_eq!(crane.positions(), before);
}

#[test]
fn two_held_buttons_sum_and_unwind() {
    let mut crane = MotionController::new(&CraneSpec::default(), AxisPositions::default())
        .expect("default spec is valid");
    let mut east = RemoteButton::new(Vec3f::X);
    let mut north = RemoteButton::new(Vec3f::Z);
    for s in [east.press(), north.press()].into_iter().flatten() {
        crane.add_movement(s.direction);
    }
    assert_eq!(crane.input(), Vec3f::new(1.0, 0.0, 1.0));
    for s in [north.release(), east.release()].into_iter().flatten() {
        crane.add_movement(s.direction);
    }
    assert_eq!(crane.input(), Vec3f::ZERO);
}
