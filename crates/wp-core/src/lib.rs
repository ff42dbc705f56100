//! `wp-core` — foundational types for the `waypost` behavior kernel.
//!
//! This crate is a dependency of every other `wp-*` crate.  It intentionally
//! has no `wp-*` dependencies and minimal external ones (only `glam` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `EntityId`                                            |
//! | [`position`]    | `Position`, `move_towards`, `ease_towards`, `within`  |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`, `Timer`              |
//! | [`error`]       | `WpError`, `WpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod position;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WpError, WpResult};
pub use ids::EntityId;
pub use position::{Position, ease_towards, move_towards, within};
pub use time::{SimClock, SimConfig, Tick, Timer};
