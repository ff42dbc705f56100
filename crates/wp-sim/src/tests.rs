//! Tests for the wp-sim tick loop.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wp_behavior::{ActionConfig, ActionFired, ActionListener, ActionTrigger};
use wp_core::{EntityId, Position, SimConfig, Tick};
use wp_motion::{FollowerConfig, Motion, PathFollower, TimedPathWalker, WalkerConfig};
use wp_path::Waypoints;

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(total_ticks: u64) -> SimConfig {
    SimConfig { tick_duration_secs: 0.25, total_ticks }
}

fn p(x: f32) -> Position {
    Position::new(x, 0.0, 0.0)
}

fn follower(points: Vec<Position>, sink: Rc<Cell<Position>>) -> Box<dyn Motion> {
    let config = FollowerConfig { speed: 1.0, arrival_tolerance: 0.01, ..FollowerConfig::default() };
    Box::new(PathFollower::new(points, config, sink).unwrap())
}

/// Records every callback as a string.
#[derive(Default)]
struct Recorder {
    calls: Vec<String>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.calls.push(format!("start {tick}"));
    }

    fn on_tick_end(&mut self, tick: Tick, active: usize) {
        self.calls.push(format!("end {tick} {active}"));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.calls.push(format!("done {final_tick}"));
    }
}

#[derive(Default)]
struct ShotCounter(Cell<u32>);

impl ActionListener for ShotCounter {
    fn on_action_fired(&self, _action: &ActionFired) {
        self.0.set(self.0.get() + 1);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn rejects_non_positive_tick_duration() {
        for bad in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let result = SimBuilder::new(SimConfig { tick_duration_secs: bad, total_ticks: 1 }).build();
            assert!(matches!(result, Err(SimError::Core(_))), "{bad}");
        }
    }

    #[test]
    fn build_activates_movers() {
        let sink = Rc::new(Cell::new(p(-9.0)));
        let sim = SimBuilder::new(config(1))
            .mover(follower(vec![p(3.0), p(4.0)], sink.clone()))
            .build()
            .unwrap();
        assert_eq!(sink.get(), p(3.0));
        assert_eq!(sim.active_movers(), 1);
    }

    #[test]
    fn failed_activation_is_not_fatal() {
        let stuck = Rc::new(Cell::new(p(7.0)));
        let moving = Rc::new(Cell::new(p(0.0)));
        let mut sim = SimBuilder::new(config(5))
            .mover(follower(Vec::new(), stuck.clone()))
            .mover(follower(vec![p(0.0), p(1.0)], moving.clone()))
            .build()
            .unwrap();
        assert_eq!(sim.movers.len(), 2);
        assert_eq!(sim.active_movers(), 1);

        sim.run(&mut NoopObserver);
        assert_eq!(stuck.get(), p(7.0));
        assert_eq!(moving.get(), p(1.0));
    }
}

// ── Sim::run ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn observer_sees_every_tick_in_order() {
        let sink = Rc::new(Cell::new(p(0.0)));
        let mut sim = SimBuilder::new(config(2))
            .mover(follower(Vec::new(), Rc::new(Cell::new(p(0.0)))))
            .mover(follower(vec![p(0.0)], sink))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert_eq!(rec.calls, vec!["start T0", "end T0 1", "start T1", "end T1 1", "done T2"]);
        assert_eq!(sim.current_tick(), Tick(2));
    }

    #[test]
    fn run_stops_at_end_tick_and_is_resumable_with_run_ticks() {
        let mut sim = SimBuilder::new(config(3)).build().unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(3));

        sim.run(&mut NoopObserver);
        assert_eq!(sim.current_tick(), Tick(3));

        let mut rec = Recorder::default();
        sim.run_ticks(2, &mut rec);
        assert_eq!(sim.current_tick(), Tick(5));
        assert_eq!(rec.calls.len(), 4, "run_ticks does not report sim end");
    }

    #[test]
    fn follower_crosses_path_at_fixed_dt() {
        let sink = Rc::new(Cell::new(p(0.0)));
        // Tick 0 arrives at the start; ticks 1..=4 cover one unit at 0.25 s.
        let mut sim = SimBuilder::new(config(5))
            .mover(follower(vec![p(0.0), p(1.0), p(2.0)], sink.clone()))
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sink.get(), p(1.0));
    }

    #[test]
    fn triggers_fire_on_their_cooldown() {
        let counter = Rc::new(ShotCounter::default());
        let trigger = ActionTrigger::new(ActionConfig {
            actor: EntityId(3),
            cooldown_secs: 1.0,
            ..ActionConfig::default()
        })
        .unwrap();
        let as_listener: Rc<dyn ActionListener> = counter.clone();
        trigger.events().add_listener(&as_listener);

        let mut sim = SimBuilder::new(config(10)).trigger(trigger).build().unwrap();
        assert_eq!(sim.trigger_count(), 1);
        sim.run(&mut NoopObserver);
        // 10 ticks of 0.25 s: fires after ticks 3 and 7.
        assert_eq!(counter.0.get(), 2);
    }

    #[test]
    fn observer_can_drive_a_shared_walker() {
        struct Switch {
            walker: Rc<RefCell<TimedPathWalker<Rc<Cell<Position>>>>>,
        }

        impl SimObserver for Switch {
            fn on_tick_start(&mut self, tick: Tick) {
                if tick == Tick(1) {
                    self.walker.borrow_mut().step_forward();
                }
            }
        }

        let sink = Rc::new(Cell::new(p(0.0)));
        let walker = TimedPathWalker::new(
            Waypoints::from(vec![p(0.0), p(10.0)]),
            WalkerConfig { speed: 4.0, delay_secs: 100.0, ..WalkerConfig::default() },
            sink.clone(),
        )
        .unwrap();
        let walker = Rc::new(RefCell::new(walker));

        let mut sim = SimBuilder::new(config(3))
            .mover(Box::new(walker.clone()))
            .build()
            .unwrap();
        sim.run(&mut Switch { walker: walker.clone() });

        assert_eq!(walker.borrow().cursor().index(), 1);
        // Ticks 1 and 2 each move 4 * 0.25 = 1 unit.
        assert_eq!(sink.get(), p(2.0));
    }
}
