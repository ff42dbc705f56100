//! `wp-event` — generic listener registry with synchronous dispatch.
//!
//! # Crate layout
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`broadcaster`] | `EventBroadcaster<L>`                                 |
//! | [`event`]       | `Event<L>` — maps an event value onto a listener call |
//!
//! # Design notes
//!
//! A feature declares one capability trait per payload shape (e.g.
//! `BehaviorListener`) and one broadcaster whose listener type is that trait
//! object.  Each event type implements [`Event`] for every listener type that
//! can receive it, so a single broadcaster can carry several event kinds when
//! its listener trait combines several capabilities.
//!
//! Dispatch is synchronous and happens on the caller's thread.  The registry
//! is snapshotted at dispatch start: a listener may add or remove listeners
//! (itself included) while being called, and the change applies from the
//! next dispatch on.
//!
//! The broadcaster holds `Weak` references only.  Owners keep their
//! listeners alive with `Rc`; dropping the last `Rc` silently unsubscribes.

pub mod broadcaster;
pub mod event;


pub use broadcaster::EventBroadcaster;
pub use event::Event;
