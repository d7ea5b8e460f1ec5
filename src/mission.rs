//! Sequential mission runner.
//!
//! The runner owns the single [`Surface`] of a run and lends it to each
//! explorer in turn, so beacon state flows forward through the dispatch
//! order and never backward.

use crate::error::Result;
use crate::explorer::{Command, Explorer, Pose};
use crate::parse::{self, MissionPlan, RawDispatch};
use crate::report::{DispatchOutcome, MissionReport};
use crate::surface::Surface;
use tracing::{debug, warn};

/// Runs explorers one after another on a shared surface.
pub struct Mission {
    surface: Surface,
}

impl Mission {
    /// Creates a runner owning `surface` for the whole run.
    pub fn new(surface: Surface) -> Self {
        Self { surface }
    }

    /// The shared surface, with whatever beacons have accumulated so far.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Dispatches one explorer: construct at `pose`, execute `commands`,
    /// report. Fails when the starting pose is off the surface.
    pub fn dispatch(&mut self, pose: Pose, commands: &[Command]) -> Result<MissionReport> {
        let mut explorer = Explorer::new(pose.position, pose.orientation, &mut self.surface)?;
        explorer.perform_mission(commands);
        let report = explorer.report();
        debug!(%report, beacons = self.surface.beacon_count(), "explorer dispatched");
        Ok(report)
    }

    /// Processes a parsed plan strictly in input order.
    ///
    /// A failure while handling one explorer (bad pose line, bad command
    /// character, off-surface start) becomes a [`DispatchOutcome::Failed`]
    /// for that explorer and processing continues with the next pair.
    pub fn run(&mut self, plan: &MissionPlan) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::with_capacity(plan.dispatches.len());
        for raw in &plan.dispatches {
            match self.dispatch_raw(raw) {
                Ok(report) => outcomes.push(DispatchOutcome::Report(report)),
                Err(error) => {
                    warn!(line = raw.line, %error, "explorer dispatch failed");
                    outcomes.push(DispatchOutcome::Failed {
                        line: raw.line,
                        message: error.to_string(),
                    });
                }
            }
        }
        outcomes
    }

    fn dispatch_raw(&mut self, raw: &RawDispatch) -> Result<MissionReport> {
        let pose = parse::parse_pose(&raw.pose)?;
        let commands = parse::parse_commands(&raw.commands)?;
        self.dispatch(pose, &commands)
    }
}

/// Parses and runs a full mission text.
///
/// Errors returned here are the fatal kind (empty input, unpaired explorer
/// lines, malformed surface definition); they produce no explorer outcomes.
pub fn run_mission(input: &str) -> Result<Vec<DispatchOutcome>> {
    let plan = parse::parse_mission(input)?;
    let mut mission = Mission::new(Surface::new(plan.max_x, plan.max_y)?);
    Ok(mission.run(&plan))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::Orientation;
    use glam::IVec2;

    #[test]
    fn dispatch_shares_beacons_between_explorers() {
        let mut mission = Mission::new(Surface::new(2, 2).unwrap());
        let pose = Pose {
            position: IVec2::new(2, 2),
            orientation: Orientation::N,
        };

        let first = mission.dispatch(pose, &[Command::MoveForward]).unwrap();
        assert!(first.lost);

        let second = mission.dispatch(pose, &[Command::MoveForward]).unwrap();
        assert!(!second.lost);
        assert_eq!(second.position, IVec2::new(2, 2));
        assert_eq!(mission.surface().beacon_count(), 1);
    }

    #[test]
    fn dispatch_rejects_off_surface_start() {
        let mut mission = Mission::new(Surface::new(5, 5).unwrap());
        let pose = Pose {
            position: IVec2::new(9, 9),
            orientation: Orientation::N,
        };
        assert!(mission.dispatch(pose, &[]).is_err());
    }
}
