//! patrol — a small scene for the waypost behavior kernel.
//!
//! A platform bounces along a three-point path, a blocker patrols a square
//! on a timer (a lever sends it back to its first waypoint), a cannon fires
//! on a cooldown, and a scripted creature walks through its behavior states
//! while its chase music follows along.  Run with `RUST_LOG=debug` to see every transition
//! and step.

mod scene;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io::Cursor;
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::info;

use wp_behavior::{
    ActionFired, ActionListener, ActionTrigger, BehaviorChanged, BehaviorListener,
    BehaviorStateMachine, CreatureState, EffectParams, EffectToggle,
};
use wp_core::{Position, Tick};
use wp_motion::{MoverBuilder, TimedPathWalker, WaypointListener, WaypointStepped};
use wp_path::{Waypoints, load_paths_reader};
use wp_sim::{SimBuilder, SimObserver};

use scene::{PATHS_CSV, SCENE_JSON, Scene};

type SharedPosition = Rc<Cell<Position>>;

// ── Listeners ─────────────────────────────────────────────────────────────────

/// Logs and counts everything the scene announces.
#[derive(Default)]
struct Narrator {
    transitions: Cell<u32>,
    shots:       Cell<u32>,
    steps:       Cell<u32>,
}

impl BehaviorListener<CreatureState> for Narrator {
    fn on_behavior_changed(&self, change: &BehaviorChanged<CreatureState>) {
        self.transitions.set(self.transitions.get() + 1);
        info!("creature: {} -> {}", change.previous, change.current);
        if change.current.is_hostile() && !change.previous.is_hostile() {
            info!("creature turned hostile");
        }
    }
}

impl ActionListener for Narrator {
    fn on_action_fired(&self, action: &ActionFired) {
        self.shots.set(self.shots.get() + 1);
        info!("{} fires at {:?} with impulse {}", action.actor, action.target, action.impulse);
    }
}

impl WaypointListener for Narrator {
    fn on_waypoint_stepped(&self, step: &WaypointStepped) {
        self.steps.set(self.steps.get() + 1);
        info!("blocker heads for waypoint {} at {} ({:?})", step.index, step.position, step.cause);
    }
}

// ── Animation driver ──────────────────────────────────────────────────────────

/// Plays the creature script and pulls the lever at the configured ticks.
struct AnimationDriver {
    creature:      BehaviorStateMachine<CreatureState>,
    script:        BTreeMap<u64, CreatureState>,
    blocker:       Rc<RefCell<TimedPathWalker<SharedPosition>>>,
    switch_ticks:  Vec<u64>,
    platform:      SharedPosition,
    music_ticks:   u64,
    music:         Rc<Cell<bool>>,
    ticks:         u64,
}

impl SimObserver for AnimationDriver {
    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(&state) = self.script.get(&tick.0) {
            self.creature.set_state(state);
        }
        if self.switch_ticks.contains(&tick.0) {
            info!("{tick}: lever pulled");
            // The square loops, so stepping back is unavailable; jump to the start.
            self.blocker.borrow_mut().reset();
        }
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        self.ticks += 1;
        if self.music.get() {
            self.music_ticks += 1;
        }
        if tick.0.is_multiple_of(20) {
            info!("{tick}: {active} movers active, platform at {}", self.platform.get());
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!("simulation ended at {final_tick}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn path(paths: &BTreeMap<String, Waypoints>, id: &str) -> Result<Waypoints> {
    paths
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow!("scene refers to unknown path {id:?}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== patrol — waypost behavior kernel ===");

    // 1. Scene and paths.
    let scene: Scene = serde_json::from_str(SCENE_JSON).context("parsing scene")?;
    let paths = load_paths_reader(Cursor::new(PATHS_CSV))?;
    println!(
        "Scene: {} ticks of {:.3} s, {} paths",
        scene.sim.total_ticks,
        scene.sim.tick_duration_secs,
        paths.len()
    );

    let narrator = Rc::new(Narrator::default());

    // 2. Movers.
    let platform_pos: SharedPosition = Rc::new(Cell::new(Position::ZERO));
    let platform = MoverBuilder::new()
        .waypoints(path(&paths, &scene.platform.path)?)
        .sink(platform_pos.clone())
        .build_follower(scene.platform.mover)?;

    let blocker_pos: SharedPosition = Rc::new(Cell::new(Position::ZERO));
    let blocker = MoverBuilder::new()
        .waypoints(path(&paths, &scene.blocker.path)?)
        .sink(blocker_pos.clone())
        .build_walker(scene.blocker.mover)?;
    let steps: Rc<dyn WaypointListener> = narrator.clone();
    blocker.events().add_listener(&steps);
    let blocker = Rc::new(RefCell::new(blocker));

    // 3. Cannon.
    let cannon = ActionTrigger::new(scene.cannon)?;
    let shots: Rc<dyn ActionListener> = narrator.clone();
    cannon.events().add_listener(&shots);

    // 4. Creature and its music.
    let creature = BehaviorStateMachine::new(scene.creature.initial);
    let music = Rc::new(Cell::new(false));
    let music_toggle: Rc<dyn BehaviorListener<CreatureState>> = Rc::new(EffectToggle::new(
        EffectParams::new(scene.creature.music_in.iter().copied()),
        music.clone(),
        scene.creature.initial,
    ));
    let transitions: Rc<dyn BehaviorListener<CreatureState>> = narrator.clone();
    creature.events().add_listener(&music_toggle);
    creature.events().add_listener(&transitions);

    // 5. Sim.
    let mut sim = SimBuilder::new(scene.sim.clone())
        .mover(Box::new(platform))
        .mover(Box::new(blocker.clone()))
        .trigger(cannon)
        .build()?;

    let mut driver = AnimationDriver {
        creature,
        script:       scene.creature.script.iter().copied().collect(),
        blocker:      blocker.clone(),
        switch_ticks: scene.switch_ticks.clone(),
        platform:     platform_pos.clone(),
        music_ticks:  0,
        music,
        ticks:        0,
    };

    // 6. Run.
    let t0 = Instant::now();
    sim.run(&mut driver);
    let elapsed = t0.elapsed();

    // 7. Summary.
    println!("Simulation complete in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    println!("  ticks run          : {} (clock {})", driver.ticks, sim.clock);
    println!("  creature state     : {}", driver.creature.current());
    println!("  transitions        : {}", narrator.transitions.get());
    println!("  music ticks        : {}", driver.music_ticks);
    println!("  cannon shots       : {}", narrator.shots.get());
    println!("  blocker steps      : {}", narrator.steps.get());
    println!();

    println!("{:<10} {:<8} {:<24}", "Mover", "Index", "Position");
    println!("{}", "-".repeat(42));
    println!("{:<10} {:<8} {:<24}", "platform", "-", platform_pos.get().to_string());
    println!(
        "{:<10} {:<8} {:<24}",
        "blocker",
        blocker.borrow().cursor().index(),
        blocker_pos.get().to_string()
    );

    Ok(())
}
