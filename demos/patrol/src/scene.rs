//! The JSON scene description and the embedded demo scene.

use serde::Deserialize;
use wp_behavior::{ActionConfig, CreatureState};
use wp_core::SimConfig;
use wp_motion::{FollowerConfig, WalkerConfig};

/// One mover: which CSV path it walks and how.
#[derive(Debug, Deserialize)]
pub struct MoverScene<C> {
    pub path:  String,
    pub mover: C,
}

/// A scripted creature: its starting state, the states its music plays in,
/// and `(tick, state)` cues for the animation driver.
#[derive(Debug, Deserialize)]
pub struct CreatureScene {
    pub initial:  CreatureState,
    pub music_in: Vec<CreatureState>,
    pub script:   Vec<(u64, CreatureState)>,
}

#[derive(Debug, Deserialize)]
pub struct Scene {
    pub sim:          SimConfig,
    pub platform:     MoverScene<FollowerConfig>,
    pub blocker:      MoverScene<WalkerConfig>,
    pub cannon:       ActionConfig,
    pub creature:     CreatureScene,
    /// Ticks at which the lever next to the blocker is pulled.
    #[serde(default)]
    pub switch_ticks: Vec<u64>,
}

// 0.1 s ticks for 12 s of game time.  The platform bounces along three
// points; the blocker patrols on a 2 s timer and the lever sends it back
// to its first waypoint; the cannon fires every 1.5 s.
pub const SCENE_JSON: &str = r#"{
  "sim": { "tick_duration_secs": 0.1, "total_ticks": 120 },
  "platform": {
    "path": "platform",
    "mover": { "policy": "bounce", "speed": 2.0, "arrival_tolerance": 0.05 }
  },
  "blocker": {
    "path": "blocker",
    "mover": { "policy": "loop", "speed": 3.0, "delay_secs": 2.0, "interpolation": "exponential" }
  },
  "cannon": {
    "actor": 3,
    "target": 1,
    "impulse": [0.0, 4.0, 12.0],
    "cooldown_secs": 1.5,
    "armed": true
  },
  "creature": {
    "initial": "idle",
    "music_in": ["chase", "attack"],
    "script": [
      [10, "walk"], [30, "detect"], [40, "chase"], [60, "attack"],
      [75, "attack"], [85, "scared"], [95, "run_away"], [110, "hide_recollect"]
    ]
  },
  "switch_ticks": [45, 90]
}"#;

// path_id,x,y,z
pub const PATHS_CSV: &str = "\
path_id,x,y,z\n\
platform,0.0,0.0,0.0\n\
platform,4.0,0.0,0.0\n\
platform,4.0,2.0,0.0\n\
blocker,-2.0,0.0,5.0\n\
blocker,2.0,0.0,5.0\n\
blocker,2.0,0.0,9.0\n\
blocker,-2.0,0.0,9.0\n\
";
