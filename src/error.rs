//! Mission errors

use thiserror::Error;

/// Mission result type
pub type Result<T> = std::result::Result<T, MissionError>;

/// Errors raised while constructing or running a mission.
///
/// Fatal variants (`EmptyMission`, `UnpairedExplorerLines`,
/// `MalformedSurface`, `DimensionOutOfRange`) abort the run before any
/// explorer is dispatched. The rest surface while one explorer is being
/// processed and are recovered by the mission runner.
#[derive(Debug, Error)]
pub enum MissionError {
    #[error("surface dimensions cannot be negative: {max_x} {max_y}")]
    NegativeDimensions { max_x: i32, max_y: i32 },

    #[error("starting position ({x}, {y}) is outside surface bounds (0, 0) to ({max_x}, {max_y})")]
    StartOutOfBounds { x: i32, y: i32, max_x: i32, max_y: i32 },

    #[error("surface definition must contain exactly two integers: {line:?}")]
    MalformedSurface { line: String },

    #[error("surface dimension {value} is outside the permitted range 0..={max}")]
    DimensionOutOfRange { value: i32, max: i32 },

    #[error("explorer pose must contain exactly three fields (x y orientation): {line:?}")]
    MalformedPose { line: String },

    #[error("explorer coordinates must be non-negative: {line:?}")]
    NegativeCoordinate { line: String },

    #[error("invalid orientation {symbol:?}, expected one of N, E, S, W")]
    InvalidOrientation { symbol: String },

    #[error("invalid command {symbol:?}, expected one of L, R, F")]
    InvalidCommand { symbol: char },

    #[error("mission input must contain a surface definition and at least one explorer")]
    EmptyMission,

    #[error("each explorer must have both a pose line and a command line")]
    UnpairedExplorerLines,
}
