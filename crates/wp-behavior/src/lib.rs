//! `wp-behavior` — discrete behavior state and the events it raises.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`state`]   | `BehaviorState` bound, stock `CreatureState` set                |
//! | [`events`]  | `BehaviorChanged`, `ActionFired`, listener capability traits    |
//! | [`machine`] | `BehaviorStateMachine` — set state, broadcast transitions       |
//! | [`effect`]  | `EffectToggle` — switches an effect volume by state membership  |
//! | [`action`]  | `ActionTrigger` — cooldown-driven `ActionFired` source (cannon) |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! The machine is state-kind-agnostic: it records the current state, refuses
//! self-transitions, and broadcasts every real transition exactly once.  It
//! performs no timed or conditional transitions of its own; whatever drives
//! the animation decides the next state and calls `set_state`.
//!
//! Specialised entities do not subclass the machine.  They subscribe
//! listeners (such as [`EffectToggle`]) configured with plain parameter
//! structs and apply their own state → action mapping.

pub mod action;
pub mod effect;
pub mod error;
pub mod events;
pub mod machine;
pub mod state;


pub use action::{ActionConfig, ActionTrigger};
pub use effect::{EffectParams, EffectSink, EffectToggle};
pub use error::{BehaviorError, BehaviorResult};
pub use events::{ActionFired, ActionListener, BehaviorChanged, BehaviorListener, CombatListener};
pub use machine::BehaviorStateMachine;
pub use state::{BehaviorState, CreatureState};
