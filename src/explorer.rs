//! Explorer state and the commands that drive it.

use crate::error::{MissionError, Result};
use crate::report::MissionReport;
use crate::surface::Surface;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compass orientation of an explorer.
///
/// Rotation is cyclic with the fixed order N → E → S → W → N for right turns
/// and its inverse for left turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    N,
    E,
    S,
    W,
}

impl Orientation {
    /// Orientation after a single left (counter-clockwise) turn.
    pub fn left(self) -> Self {
        match self {
            Self::N => Self::W,
            Self::W => Self::S,
            Self::S => Self::E,
            Self::E => Self::N,
        }
    }

    /// Orientation after a single right (clockwise) turn.
    pub fn right(self) -> Self {
        match self {
            Self::N => Self::E,
            Self::E => Self::S,
            Self::S => Self::W,
            Self::W => Self::N,
        }
    }

    /// Unit displacement of one forward step in this orientation.
    pub fn step(self) -> IVec2 {
        match self {
            Self::N => IVec2::new(0, 1),
            Self::E => IVec2::new(1, 0),
            Self::S => IVec2::new(0, -1),
            Self::W => IVec2::new(-1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::N => "N",
            Self::E => "E",
            Self::S => "S",
            Self::W => "W",
        })
    }
}

impl FromStr for Orientation {
    type Err = MissionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Self::N),
            "E" => Ok(Self::E),
            "S" => Ok(Self::S),
            "W" => Ok(Self::W),
            _ => Err(MissionError::InvalidOrientation {
                symbol: s.to_string(),
            }),
        }
    }
}

/// A single navigation instruction.
///
/// Commands are stateless; their one capability is applying themselves to an
/// explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    TurnLeft,
    TurnRight,
    MoveForward,
}

impl Command {
    /// Resolves a command character through the fixed symbol table
    /// (`L`, `R`, `F`).
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'L' => Ok(Self::TurnLeft),
            'R' => Ok(Self::TurnRight),
            'F' => Ok(Self::MoveForward),
            _ => Err(MissionError::InvalidCommand { symbol }),
        }
    }

    /// Applies this command to `explorer`.
    pub fn apply(self, explorer: &mut Explorer<'_>) {
        match self {
            Self::TurnLeft => explorer.turn_left(),
            Self::TurnRight => explorer.turn_right(),
            Self::MoveForward => explorer.advance_forward(),
        }
    }
}

/// Starting position and orientation for one explorer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    pub position: IVec2,
    pub orientation: Orientation,
}

/// A positioned, oriented explorer bound to the surface it moves on.
///
/// The explorer borrows the run's surface exclusively for its whole
/// lifetime: the mission runner lends the surface to one explorer at a time,
/// so beacon state written by an earlier explorer is visible to every later
/// one and never the other way around.
#[derive(Debug)]
pub struct Explorer<'a> {
    position: IVec2,
    orientation: Orientation,
    lost: bool,
    surface: &'a mut Surface,
}

impl<'a> Explorer<'a> {
    /// Places an explorer on `surface`.
    ///
    /// Fails when `position` is off the surface; a failed construction
    /// leaves the surface untouched.
    pub fn new(
        position: IVec2,
        orientation: Orientation,
        surface: &'a mut Surface,
    ) -> Result<Self> {
        if !surface.is_within_bounds(position) {
            let max = surface.max();
            return Err(MissionError::StartOutOfBounds {
                x: position.x,
                y: position.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self {
            position,
            orientation,
            lost: false,
            surface,
        })
    }

    /// Current position. Always on the surface while the explorer is not
    /// lost; frozen at the last valid cell once it is.
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the explorer has driven off the surface. Terminal: once
    /// lost, every further command is a no-op.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Rotates 90° counter-clockwise. Position is unaffected.
    pub fn turn_left(&mut self) {
        if self.lost {
            return;
        }
        self.orientation = self.orientation.left();
    }

    /// Rotates 90° clockwise. Position is unaffected.
    pub fn turn_right(&mut self) {
        if self.lost {
            return;
        }
        self.orientation = self.orientation.right();
    }

    /// Moves one cell forward in the current orientation.
    ///
    /// A move that would leave the surface is only fatal the first time it
    /// is attempted from a given cell: the falling explorer leaves a danger
    /// beacon on the cell it fell from, and a later explorer attempting an
    /// off-surface move from a beacon cell has the instruction ignored
    /// outright, as if it were never issued.
    pub fn advance_forward(&mut self) {
        if self.lost {
            return;
        }

        let candidate = self.position + self.orientation.step();
        if self.surface.is_within_bounds(candidate) {
            self.position = candidate;
            return;
        }

        if !self.surface.has_beacon(self.position) {
            self.surface.place_beacon(self.position);
            self.lost = true;
        }
        // Position stays at the last valid cell either way.
    }

    /// Executes `commands` in order, stopping the instant the explorer is
    /// lost. An empty sequence is valid and changes nothing.
    pub fn perform_mission(&mut self, commands: &[Command]) {
        for command in commands {
            if self.lost {
                break;
            }
            command.apply(self);
        }
    }

    /// Snapshot of the explorer's final state.
    pub fn report(&self) -> MissionReport {
        MissionReport {
            position: self.position,
            orientation: self.orientation,
            lost: self.lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(5, 5).unwrap()
    }

    #[test]
    fn construction_rejects_off_surface_start() {
        let mut s = surface();
        assert!(Explorer::new(IVec2::new(6, 6), Orientation::N, &mut s).is_err());
        assert!(Explorer::new(IVec2::new(1, 2), Orientation::E, &mut s).is_ok());
    }

    #[test]
    fn turns_cycle_through_all_orientations() {
        let mut s = surface();
        let mut explorer = Explorer::new(IVec2::new(1, 1), Orientation::N, &mut s).unwrap();

        explorer.turn_left();
        assert_eq!(explorer.orientation(), Orientation::W);
        explorer.turn_left();
        assert_eq!(explorer.orientation(), Orientation::S);
        explorer.turn_left();
        assert_eq!(explorer.orientation(), Orientation::E);
        explorer.turn_left();
        assert_eq!(explorer.orientation(), Orientation::N);

        explorer.turn_right();
        assert_eq!(explorer.orientation(), Orientation::E);
        explorer.turn_right();
        assert_eq!(explorer.orientation(), Orientation::S);
        explorer.turn_right();
        assert_eq!(explorer.orientation(), Orientation::W);
        explorer.turn_right();
        assert_eq!(explorer.orientation(), Orientation::N);
    }

    #[test]
    fn forward_moves_one_cell_per_orientation() {
        let cases = [
            (Orientation::N, IVec2::new(1, 2)),
            (Orientation::E, IVec2::new(2, 1)),
            (Orientation::S, IVec2::new(1, 0)),
            (Orientation::W, IVec2::new(0, 1)),
        ];
        for (orientation, expected) in cases {
            let mut s = surface();
            let mut explorer = Explorer::new(IVec2::new(1, 1), orientation, &mut s).unwrap();
            explorer.advance_forward();
            assert_eq!(explorer.position(), expected);
            assert!(!explorer.is_lost());
        }
    }

    #[test]
    fn falling_off_leaves_beacon_and_freezes_position() {
        let mut s = surface();
        let mut explorer = Explorer::new(IVec2::new(5, 5), Orientation::N, &mut s).unwrap();

        explorer.advance_forward();

        assert!(explorer.is_lost());
        assert_eq!(explorer.position(), IVec2::new(5, 5));
        drop(explorer);
        assert!(s.has_beacon(IVec2::new(5, 5)));
    }

    #[test]
    fn beacon_suppresses_repeat_fall() {
        let mut s = surface();
        s.place_beacon(IVec2::new(5, 5));
        let mut explorer = Explorer::new(IVec2::new(5, 5), Orientation::N, &mut s).unwrap();

        explorer.advance_forward();

        assert!(!explorer.is_lost());
        assert_eq!(explorer.position(), IVec2::new(5, 5));
    }

    #[test]
    fn lost_state_is_terminal() {
        let mut s = surface();
        let mut explorer = Explorer::new(IVec2::new(5, 5), Orientation::N, &mut s).unwrap();
        explorer.advance_forward();
        assert!(explorer.is_lost());

        explorer.turn_left();
        explorer.turn_right();
        explorer.advance_forward();

        assert_eq!(explorer.position(), IVec2::new(5, 5));
        assert_eq!(explorer.orientation(), Orientation::N);
    }

    #[test]
    fn mission_stops_at_first_fatal_move() {
        let mut s = Surface::new(1, 1).unwrap();
        let mut explorer = Explorer::new(IVec2::new(1, 1), Orientation::N, &mut s).unwrap();

        explorer.perform_mission(&[
            Command::MoveForward,
            Command::TurnLeft,
            Command::MoveForward,
        ]);

        assert!(explorer.is_lost());
        // The turn after the fall must not have executed.
        assert_eq!(explorer.orientation(), Orientation::N);
    }

    #[test]
    fn empty_mission_changes_nothing() {
        let mut s = surface();
        let mut explorer = Explorer::new(IVec2::new(2, 3), Orientation::E, &mut s).unwrap();
        explorer.perform_mission(&[]);
        assert_eq!(explorer.position(), IVec2::new(2, 3));
        assert_eq!(explorer.orientation(), Orientation::E);
        assert!(!explorer.is_lost());
    }

    #[test]
    fn command_symbol_table() {
        assert_eq!(Command::from_symbol('L').unwrap(), Command::TurnLeft);
        assert_eq!(Command::from_symbol('R').unwrap(), Command::TurnRight);
        assert_eq!(Command::from_symbol('F').unwrap(), Command::MoveForward);
        assert!(Command::from_symbol('X').is_err());
    }

    #[test]
    fn orientation_symbols_round_trip() {
        for symbol in ["N", "E", "S", "W"] {
            let orientation: Orientation = symbol.parse().unwrap();
            assert_eq!(orientation.to_string(), symbol);
        }
        assert!("Q".parse::<Orientation>().is_err());
    }
}
