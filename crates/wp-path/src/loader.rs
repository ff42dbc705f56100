//! CSV waypoint loader.
//!
//! # CSV format
//!
//! One row per waypoint.  Rows sharing a `path_id` form one path, in file
//! order; paths may be interleaved.
//!
//! ```csv
//! path_id,x,y,z
//! platform_a,0,0,0
//! platform_a,0,4,0
//! drone,10,2,-3
//! drone,12,2,-3
//! drone,12,2,1
//! ```
//!
//! Coordinates must be finite; a `NaN` or infinite coordinate rejects the
//! whole file.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use log::debug;

use wp_core::Position;

use crate::{PathError, Waypoints};

/// One CSV row: `path_id,x,y,z`.
type WaypointRecord = (String, f32, f32, f32);

// ── Public API ────────────────────────────────────────────────────────────────

/// Load named waypoint paths from a CSV file.
///
/// Returns the paths keyed by `path_id`.
pub fn load_paths_csv(path: &Path) -> Result<BTreeMap<String, Waypoints>, PathError> {
    let file = std::fs::File::open(path)
        .map_err(PathError::Io)?;
    load_paths_reader(file)
}

/// Like [`load_paths_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for paths embedded in a
/// binary.
pub fn load_paths_reader<R: Read>(reader: R) -> Result<BTreeMap<String, Waypoints>, PathError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_path: BTreeMap<String, Vec<Position>> = BTreeMap::new();

    for (row, result) in csv_reader.deserialize::<WaypointRecord>().enumerate() {
        let (path_id, x, y, z) = result.map_err(|e| PathError::Parse(e.to_string()))?;
        let point = Position::new(x, y, z);
        if !point.is_finite() {
            return Err(PathError::Parse(format!(
                "row {}: non-finite coordinate in path {:?}",
                row + 1,
                path_id
            )));
        }
        by_path.entry(path_id).or_default().push(point);
    }

    debug!("loaded {} waypoint paths", by_path.len());
    Ok(by_path
        .into_iter()
        .map(|(id, points)| (id, Waypoints::new(points)))
        .collect())
}
