//! `wp-motion` — moving entities along waypoint paths, one tick at a time.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                     |
//! |-------------------|--------------------------------------------------------------|
//! | [`sink`]          | `PositionSink` — where an entity's position is read/written  |
//! | [`interpolation`] | `Interpolation` (`LinearStep`, `Exponential`)                |
//! | [`config`]        | `FollowerConfig`, `WalkerConfig`                             |
//! | [`follower`]      | `PathFollower` — arrival-driven advancement                  |
//! | [`walker`]        | `TimedPathWalker`, `WalkerRemote` — timed and manual steps   |
//! | [`events`]        | `WaypointStepped`, `StepCause`, `WaypointListener`           |
//! | [`motion`]        | `Motion` trait, `MoverBuilder`                               |
//! | [`error`]         | `MotionError`, `MotionResult<T>`                             |
//!
//! # Movement model
//!
//! Each tick a mover reads its cursor's current waypoint and moves the
//! entity toward it through its [`PositionSink`]:
//!
//! 1. `LinearStep` moves at most `speed * dt` units, landing exactly on the
//!    waypoint instead of overshooting.
//! 2. `Exponential` closes the fraction `1 - e^(-speed * dt)` of the gap.
//!
//! A [`PathFollower`] advances its cursor when the entity comes within
//! `arrival_tolerance` of the waypoint.  A [`TimedPathWalker`] ignores
//! distance and advances every `delay_secs` of accumulated tick time, or on
//! external command.
//!
//! Movers without waypoints report a configuration error once, on
//! activation, and then sit inert: ticking them is a silent no-op.

pub mod config;
pub mod error;
pub mod events;
pub mod follower;
pub mod interpolation;
pub mod motion;
pub mod sink;
pub mod walker;


pub use config::{FollowerConfig, WalkerConfig};
pub use error::{MotionError, MotionResult};
pub use events::{StepCause, WaypointListener, WaypointStepped};
pub use follower::PathFollower;
pub use interpolation::Interpolation;
pub use motion::{Motion, MoverBuilder};
pub use sink::PositionSink;
pub use walker::{TimedPathWalker, WalkerCommand, WalkerRemote};
