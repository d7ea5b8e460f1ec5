//! Mission text parsing and input policy.
//!
//! The core accepts any non-negative surface; the dimension cap and format
//! rules here are policy applied to mission text before it reaches the core.

use crate::error::{MissionError, Result};
use crate::explorer::{Command, Orientation, Pose};
use glam::IVec2;

/// Largest surface dimension accepted from mission text.
pub const MAX_DIMENSION: i32 = 50;

/// One explorer's raw pose/command line pair, tagged with the 1-based line
/// number of the pose line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDispatch {
    pub line: usize,
    pub pose: String,
    pub commands: String,
}

/// Parsed mission input: surface bounds plus the raw explorer line pairs.
///
/// Pose and command lines stay unparsed here so a bad pair fails while that
/// explorer is being processed, not before the run starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionPlan {
    pub max_x: i32,
    pub max_y: i32,
    pub dispatches: Vec<RawDispatch>,
}

/// Parses the surface definition line: exactly two integers, each within
/// `0..=MAX_DIMENSION`. Tolerates a UTF-8 BOM and surrounding whitespace.
pub fn parse_surface(line: &str) -> Result<(i32, i32)> {
    let line = line.trim_start_matches('\u{feff}').trim();
    let malformed = || MissionError::MalformedSurface {
        line: line.to_string(),
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[x, y] = fields.as_slice() else {
        return Err(malformed());
    };
    let max_x: i32 = x.parse().map_err(|_| malformed())?;
    let max_y: i32 = y.parse().map_err(|_| malformed())?;

    for value in [max_x, max_y] {
        if !(0..=MAX_DIMENSION).contains(&value) {
            return Err(MissionError::DimensionOutOfRange {
                value,
                max: MAX_DIMENSION,
            });
        }
    }
    Ok((max_x, max_y))
}

/// Parses an explorer pose line: `"X Y O"` with non-negative coordinates
/// and an orientation symbol in `{N, E, S, W}`.
pub fn parse_pose(line: &str) -> Result<Pose> {
    let line = line.trim();
    let malformed = || MissionError::MalformedPose {
        line: line.to_string(),
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[x, y, orientation] = fields.as_slice() else {
        return Err(malformed());
    };
    let x: i32 = x.parse().map_err(|_| malformed())?;
    let y: i32 = y.parse().map_err(|_| malformed())?;
    if x < 0 || y < 0 {
        return Err(MissionError::NegativeCoordinate {
            line: line.to_string(),
        });
    }
    let orientation: Orientation = orientation.parse()?;

    Ok(Pose {
        position: IVec2::new(x, y),
        orientation,
    })
}

/// Parses a command line into the fixed `L`/`R`/`F` instruction set.
///
/// Input is upper-cased first; an empty line is a valid empty sequence.
pub fn parse_commands(line: &str) -> Result<Vec<Command>> {
    line.trim()
        .to_uppercase()
        .chars()
        .map(Command::from_symbol)
        .collect()
}

/// Splits full mission text into a surface definition and explorer pairs.
///
/// Fails fatally on an empty mission, an unpaired trailing pose line, or a
/// malformed surface line. Trailing blank lines are dropped; an interior
/// blank line stays in place (a blank command line is an empty sequence).
pub fn parse_mission(input: &str) -> Result<MissionPlan> {
    let mut lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .collect();
    while lines.last().is_some_and(|(_, line)| line.trim().is_empty()) {
        lines.pop();
    }

    let Some((&(_, surface_line), explorer_lines)) = lines.split_first() else {
        return Err(MissionError::EmptyMission);
    };
    if explorer_lines.is_empty() {
        return Err(MissionError::EmptyMission);
    }
    if explorer_lines.len() % 2 != 0 {
        return Err(MissionError::UnpairedExplorerLines);
    }

    let (max_x, max_y) = parse_surface(surface_line)?;
    let dispatches = explorer_lines
        .chunks_exact(2)
        .map(|pair| RawDispatch {
            line: pair[0].0,
            pose: pair[0].1.to_string(),
            commands: pair[1].1.to_string(),
        })
        .collect();

    Ok(MissionPlan {
        max_x,
        max_y,
        dispatches,
    })
}
