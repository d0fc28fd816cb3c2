//! Shared setup helpers for rein-grab benchmarks.
//!
//! ## Running
//!
//! Solvers and ECS system (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench manipulation
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench manipulation -- dual

use glam::{Quat, Vec3};
use rein_grab::ecs::components::{Grabbable, Grabbed};
use rein_grab::{ContactId, ManipulationConfig, ManipulationSession, Pose};

pub const LEFT: ContactId = ContactId(1);
pub const RIGHT: ContactId = ContactId(2);

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Session held by one contact half a unit behind the object.
pub fn single_session(config: ManipulationConfig) -> ManipulationSession {
    ManipulationSession::begin(
        config,
        Pose::from_position(Vec3::new(0.0, 1.0, -0.5)),
        LEFT,
        Pose::from_position(Vec3::new(0.0, 1.0, 0.0)),
        None,
    )
    .unwrap()
}

/// Session held by two contacts either side of the object.
pub fn dual_session(config: ManipulationConfig) -> ManipulationSession {
    let mut session = ManipulationSession::begin(
        config,
        Pose::from_position(Vec3::new(0.0, 1.0, 0.0)),
        LEFT,
        Pose::from_position(Vec3::new(-0.25, 1.0, 0.0)),
        None,
    )
    .unwrap();
    session
        .acquire(RIGHT, Pose::from_position(Vec3::new(0.25, 1.0, 0.0)), None)
        .unwrap();
    session
}

// ---------------------------------------------------------------------------
// Gestures
// ---------------------------------------------------------------------------

/// Contact poses for frame `frame` of a stretch-and-twist gesture.
///
/// The hands spread from 0.5 to 1.0 apart, swing the connection line about
/// +Y and roll about it, crossing several reference-axis changes.
pub fn stretch_and_twist(frame: usize) -> (Pose, Pose) {
    let t = (frame % 240) as f32 / 240.0;
    let half_spread = 0.25 + 0.25 * t;
    let swing = Quat::from_rotation_y(t * std::f32::consts::FRAC_PI_2);
    let roll = Quat::from_rotation_x(t * std::f32::consts::TAU);
    let center = Vec3::new(0.0, 1.0, 0.0);

    let left = Pose::from_position_rotation(
        center + swing * Vec3::new(-half_spread, 0.0, 0.0),
        swing * roll,
    );
    let right = Pose::from_position_rotation(
        center + swing * Vec3::new(half_spread, 0.0, 0.0),
        swing * roll.inverse(),
    );
    (left, right)
}

// ---------------------------------------------------------------------------
// ECS scenes
// ---------------------------------------------------------------------------

/// Spawn `n` grabbables in a grid, each already held by two contacts.
pub fn setup_grabbed_world(n: usize) -> hecs::World {
    let mut world = hecs::World::new();
    let cols = (n as f32).sqrt().ceil() as usize;

    for i in 0..n {
        let x = (i % cols) as f32 * 1.5;
        let z = (i / cols) as f32 * 1.5;
        let offset = Vec3::new(x, 0.0, z);

        let mut session = dual_session(ManipulationConfig::default());
        let (left, right) = stretch_and_twist(i);
        session.update(LEFT, left.translated(offset)).unwrap();
        session.update(RIGHT, right.translated(offset)).unwrap();

        world.spawn((
            Pose::from_position(offset + Vec3::Y),
            Grabbable::default(),
            Grabbed(session),
        ));
    }
    world
}
