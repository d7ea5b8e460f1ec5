//! Bounded planetary surface with danger-beacon state.

use crate::error::{MissionError, Result};
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The rectangular surface explorers move within.
///
/// Coordinates are inclusive on both axes: `(0, 0)` is the lower-left cell
/// and [`Surface::max`] the upper-right. Danger beacons mark cells an
/// explorer has previously fallen from; they accumulate for the lifetime of
/// the run and are never removed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Surface {
    max: IVec2,
    beacons: HashSet<IVec2>,
}

impl Surface {
    /// Creates a surface with the inclusive upper bound `(max_x, max_y)`.
    ///
    /// Fails when either dimension is negative. No upper limit is enforced
    /// here; the input layer applies its own cap before construction.
    pub fn new(max_x: i32, max_y: i32) -> Result<Self> {
        if max_x < 0 || max_y < 0 {
            return Err(MissionError::NegativeDimensions { max_x, max_y });
        }
        Ok(Self {
            max: IVec2::new(max_x, max_y),
            beacons: HashSet::new(),
        })
    }

    /// Inclusive upper-right corner of the surface.
    pub fn max(&self) -> IVec2 {
        self.max
    }

    /// Number of cells on the surface.
    pub fn area(&self) -> i64 {
        (i64::from(self.max.x) + 1) * (i64::from(self.max.y) + 1)
    }

    /// Returns true iff `pos` lies on the surface.
    pub fn is_within_bounds(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x <= self.max.x && pos.y >= 0 && pos.y <= self.max.y
    }

    /// Marks `pos` as a cell an explorer has fallen from. Idempotent.
    pub fn place_beacon(&mut self, pos: IVec2) {
        self.beacons.insert(pos);
    }

    /// Whether a danger beacon has been placed at `pos`.
    pub fn has_beacon(&self, pos: IVec2) -> bool {
        self.beacons.contains(&pos)
    }

    /// Number of distinct beacon cells.
    pub fn beacon_count(&self) -> usize {
        self.beacons.len()
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Surface({}x{}, {} danger beacons)",
            self.max.x,
            self.max.y,
            self.beacons.len()
        )
    }
}
