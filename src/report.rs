//! Mission output artifacts.

use crate::explorer::Orientation;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final state of one explorer after its command sequence.
///
/// Renders as `"X Y O"`, with the literal suffix `" LOST"` when the
/// explorer drove off the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionReport {
    pub position: IVec2,
    pub orientation: Orientation,
    pub lost: bool,
}

impl fmt::Display for MissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.position.x, self.position.y, self.orientation
        )?;
        if self.lost {
            f.write_str(" LOST")?;
        }
        Ok(())
    }
}

/// Outcome of dispatching one explorer within a multi-explorer run.
///
/// A failure here is the recovered kind: the runner reports it in place of
/// the explorer's report line and moves on to the next explorer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchOutcome {
    Report(MissionReport),
    Failed {
        /// 1-based line number of the explorer's pose line.
        line: usize,
        message: String,
    },
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Report(report) => report.fmt(f),
            Self::Failed { line, message } => {
                write!(f, "Error processing explorer at line {line}: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_renders_position_and_orientation() {
        let report = MissionReport {
            position: IVec2::new(2, 3),
            orientation: Orientation::E,
            lost: false,
        };
        assert_eq!(report.to_string(), "2 3 E");
    }

    #[test]
    fn lost_report_carries_suffix() {
        let report = MissionReport {
            position: IVec2::new(3, 3),
            orientation: Orientation::N,
            lost: true,
        };
        assert_eq!(report.to_string(), "3 3 N LOST");
    }

    #[test]
    fn failed_outcome_names_the_pose_line() {
        let outcome = DispatchOutcome::Failed {
            line: 4,
            message: "boom".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Error processing explorer at line 4: boom"
        );
    }

    #[test]
    fn outcomes_serialize_tagged() {
        let outcome = DispatchOutcome::Report(MissionReport {
            position: IVec2::new(1, 1),
            orientation: Orientation::E,
            lost: false,
        });
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "kind": "report",
                "position": [1, 1],
                "orientation": "E",
                "lost": false,
            })
        );
    }
}
