//! `wp-path` — waypoint sequences and the path cursor.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`path`]     | `Waypoints` — immutable, cheaply cloned point sequence    |
//! | [`policy`]   | `TraversalPolicy` (`Bounce`, `Loop`), `Direction`         |
//! | [`cursor`]   | `PathCursor`, `Sweep`                                     |
//! | [`loader`]   | `load_paths_csv`, `load_paths_reader`                     |
//! | [`error`]    | `PathError`, `PathResult<T>`                              |
//!
//! # Traversal model (summary)
//!
//! A cursor is plain state (`index + direction + policy` over a fixed
//! `Waypoints`) advanced by discrete calls, one per arrival or timer expiry.
//! For an `n`-point path:
//!
//! ```text
//! Bounce:  0, 1, …, n-1, n-2, …, 1, 0, 1, …   (boundary checked before stepping)
//! Loop:    0, 1, …, n-1, 0, 1, …
//! ```
//!
//! Empty and single-point paths are legal: every mutator is a no-op on them.

pub mod cursor;
pub mod error;
pub mod loader;
pub mod path;
pub mod policy;

#[cfg(test)]
mod tests;

pub use cursor::{PathCursor, Sweep};
pub use error::{PathError, PathResult};
pub use loader::{load_paths_csv, load_paths_reader};
pub use path::Waypoints;
pub use policy::{Direction, TraversalPolicy};
