//! Unit tests for wp-path.

use wp_core::Position;

use crate::{Direction, PathCursor, PathError, TraversalPolicy, Waypoints};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `n` points spaced 10 units apart along +x.
fn line(n: usize) -> Waypoints {
    (0..n).map(|i| Position::new(i as f32 * 10.0, 0.0, 0.0)).collect()
}

fn bounce(n: usize) -> PathCursor {
    PathCursor::new(line(n), TraversalPolicy::Bounce)
}

fn looping(n: usize) -> PathCursor {
    PathCursor::new(line(n), TraversalPolicy::Loop)
}

/// Call `next` `steps` times and record the index after each call.
fn advance(cursor: &mut PathCursor, steps: usize) -> Vec<usize> {
    (0..steps)
        .map(|_| {
            cursor.next();
            cursor.index()
        })
        .collect()
}

// ── Waypoints ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod waypoints {
    use super::*;

    #[test]
    fn shares_points_between_clones() {
        let a = line(3);
        let b = a.clone();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a.as_slice(), b.as_slice()));
    }

    #[test]
    fn get_and_len() {
        let path = line(2);
        assert_eq!(path.len(), 2);
        assert_eq!(path.get(1), Some(Position::new(10.0, 0.0, 0.0)));
        assert_eq!(path.get(2), None);
        assert!(Waypoints::empty().is_empty());
        assert_eq!(Waypoints::default(), Waypoints::empty());
    }

    #[test]
    fn into_vec() {
        let points: Vec<Position> = line(3).into();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].x, 20.0);
    }
}

// ── Bounce policy ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounce_policy {
    use super::*;

    #[test]
    fn three_point_scenario() {
        let mut cursor = PathCursor::new(
            vec![
                Position::new(0.0, 0.0, 0.0),
                Position::new(10.0, 0.0, 0.0),
                Position::new(20.0, 0.0, 0.0),
            ],
            TraversalPolicy::Bounce,
        );
        assert_eq!(advance(&mut cursor, 6), vec![1, 2, 1, 0, 1, 2]);
        // …and then repeats.
        assert_eq!(advance(&mut cursor, 4), vec![1, 0, 1, 2]);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for n in 2..=8 {
            let mut cursor = bounce(n);
            let seq = advance(&mut cursor, 2 * (n - 1));
            assert_eq!(cursor.index(), 0, "n = {n}");
            assert_eq!(*seq.last().unwrap(), 0);

            // Interior points twice per cycle, endpoints once.
            for i in 0..n {
                let visits = seq.iter().filter(|&&v| v == i).count();
                let expected = if i == 0 || i == n - 1 { 1 } else { 2 };
                assert_eq!(visits, expected, "n = {n}, index {i}");
            }
        }
    }

    #[test]
    fn consecutive_indices_differ_by_one() {
        let mut cursor = bounce(5);
        let mut prev = cursor.index();
        for idx in advance(&mut cursor, 40) {
            assert_eq!(prev.abs_diff(idx), 1);
            prev = idx;
        }
    }

    #[test]
    fn two_points_alternate() {
        let mut cursor = bounce(2);
        assert_eq!(advance(&mut cursor, 5), vec![1, 0, 1, 0, 1]);
    }

    #[test]
    fn direction_reverses_at_endpoints() {
        let mut cursor = bounce(3);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.direction(), Direction::Forward);
        cursor.next();
        assert_eq!(cursor.direction(), Direction::Backward);
    }

    #[test]
    fn set_index_preserves_direction() {
        let mut cursor = bounce(4);
        advance(&mut cursor, 4); // 1, 2, 3, 2 → heading back
        assert_eq!(cursor.direction(), Direction::Backward);
        cursor.set_index(1).unwrap();
        assert_eq!(cursor.direction(), Direction::Backward);
        assert_eq!(advance(&mut cursor, 3), vec![0, 1, 2]);
    }

    #[test]
    fn set_index_out_of_range_is_reported() {
        let mut cursor = bounce(3);
        cursor.next();
        let err = cursor.set_index(3).unwrap_err();
        assert!(matches!(err, PathError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(cursor.index(), 1, "failed jump must not move the cursor");
    }

    #[test]
    fn reset_returns_to_start_forward() {
        let mut cursor = bounce(3);
        advance(&mut cursor, 3);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.direction(), Direction::Forward);
        assert_eq!(cursor.current(), Some(Position::ZERO));
    }
}

// ── previous ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod previous {
    use super::*;

    #[test]
    fn undoes_next_everywhere_in_the_cycle() {
        let mut cursor = bounce(4);
        for _ in 0..12 {
            let before = cursor.index();
            cursor.next();
            cursor.previous().unwrap();
            assert_eq!(cursor.index(), before);
            cursor.next();
        }
    }

    #[test]
    fn from_start_walks_the_sweep_backwards() {
        let mut cursor = bounce(3);
        let mut seen = Vec::new();
        for _ in 0..5 {
            cursor.previous().unwrap();
            seen.push(cursor.index());
        }
        assert_eq!(seen, vec![1, 2, 1, 0, 1]);
    }

    #[test]
    fn stays_in_range() {
        let mut cursor = bounce(2);
        for _ in 0..6 {
            cursor.previous().unwrap();
            assert!(cursor.index() < 2);
        }
    }

    #[test]
    fn unsupported_under_loop() {
        let mut cursor = looping(3);
        cursor.next();
        let err = cursor.previous().unwrap_err();
        assert!(matches!(
            err,
            PathError::Unsupported { operation: "previous", policy: TraversalPolicy::Loop }
        ));
        assert_eq!(cursor.index(), 1);
    }
}

// ── Loop policy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_policy {
    use super::*;

    #[test]
    fn n_steps_return_to_start() {
        for n in 1..=7 {
            for start in 0..n {
                let mut cursor = looping(n);
                cursor.set_index(start).unwrap();
                let mut expected = start;
                for _ in 0..n {
                    cursor.next();
                    if n > 1 {
                        expected = (expected + 1) % n;
                    }
                    assert_eq!(cursor.index(), expected);
                }
                assert_eq!(cursor.index(), start, "n = {n}");
            }
        }
    }

    #[test]
    fn always_forward() {
        let mut cursor = looping(3);
        advance(&mut cursor, 7);
        assert_eq!(cursor.direction(), Direction::Forward);
    }
}

// ── Degenerate paths ──────────────────────────────────────────────────────────

#[cfg(test)]
mod degenerate {
    use super::*;

    #[test]
    fn empty_path_has_no_target() {
        for policy in [TraversalPolicy::Bounce, TraversalPolicy::Loop] {
            let mut cursor = PathCursor::new(Waypoints::empty(), policy);
            assert_eq!(cursor.current(), None);
            cursor.next();
            cursor.reset();
            assert!(cursor.previous().is_ok());
            assert_eq!(cursor.index(), 0);
            assert_eq!(cursor.current(), None);
            assert!(matches!(
                cursor.set_index(0),
                Err(PathError::OutOfRange { index: 0, len: 0 })
            ));
        }
    }

    #[test]
    fn single_point_is_stationary() {
        for policy in [TraversalPolicy::Bounce, TraversalPolicy::Loop] {
            let mut cursor = PathCursor::new(line(1), policy);
            for _ in 0..3 {
                cursor.next();
                cursor.previous().unwrap();
                assert_eq!(cursor.index(), 0);
                assert_eq!(cursor.current(), Some(Position::ZERO));
            }
            assert!(cursor.set_index(0).is_ok());
        }
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep {
    use super::*;

    #[test]
    fn starts_at_current_and_follows_policy() {
        let cursor = bounce(3);
        let idx: Vec<usize> = cursor.sweep().take(7).map(|(i, _)| i).collect();
        assert_eq!(idx, vec![0, 1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn does_not_move_the_cursor_and_restarts() {
        let mut cursor = looping(3);
        cursor.next();
        let first: Vec<usize> = cursor.sweep().take(4).map(|(i, _)| i).collect();
        let again: Vec<usize> = cursor.sweep().take(4).map(|(i, _)| i).collect();
        assert_eq!(first, vec![1, 2, 0, 1]);
        assert_eq!(first, again);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn yields_positions() {
        let cursor = looping(2);
        let pts: Vec<Position> = cursor.sweep().take(3).map(|(_, p)| p).collect();
        assert_eq!(pts[1], Position::new(10.0, 0.0, 0.0));
        assert_eq!(pts[2], Position::ZERO);
    }

    #[test]
    fn empty_path_sweep_is_empty() {
        let cursor = PathCursor::new(Waypoints::empty(), TraversalPolicy::Bounce);
        assert_eq!(cursor.sweep().next(), None);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::load_paths_reader;

    const CSV: &str = "\
path_id,x,y,z\n\
platform,0,0,0\n\
drone,10,2,-3\n\
platform,0,4,0\n\
drone,12,2,-3\n\
drone,12,2,1\n\
";

    #[test]
    fn groups_rows_by_path_in_file_order() {
        let paths = load_paths_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(paths.len(), 2);

        let platform = &paths["platform"];
        assert_eq!(platform.len(), 2);
        assert_eq!(platform.get(1), Some(Position::new(0.0, 4.0, 0.0)));

        let drone = &paths["drone"];
        assert_eq!(drone.len(), 3);
        assert_eq!(drone.get(2), Some(Position::new(12.0, 2.0, 1.0)));
    }

    #[test]
    fn header_only_yields_no_paths() {
        let paths = load_paths_reader(Cursor::new("path_id,x,y,z\n")).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let bad = "path_id,x,y,z\np,1,two,3\n";
        assert!(matches!(
            load_paths_reader(Cursor::new(bad)),
            Err(PathError::Parse(_))
        ));
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let bad = "path_id,x,y,z\np,1,inf,3\n";
        assert!(matches!(
            load_paths_reader(Cursor::new(bad)),
            Err(PathError::Parse(_))
        ));
    }
}
