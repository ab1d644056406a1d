//! The autonomous routine.
//!
//! A fixed list of paired drive moves. Each step starts the left side, then the
//! right side, and waits for the right side to arrive before the next step
//! begins. The sides of one step run together, so uneven speeds trace a curve.
//!
//! Moves are in the motors' native direction, independent of the driver's
//! chosen [`Orientation`](crate::drivetrain::Orientation).

use log::{debug, info};

use crate::actuator::{Actuator, Settle, SpinDirection};

/// One side's share of a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideMove {
    pub revolutions: f64,
    pub percent:     f64,
}

impl SideMove {
    pub const fn new(revolutions: f64, percent: f64) -> Self {
        Self {
            revolutions,
            percent,
        }
    }

    pub fn degrees(&self) -> f64 { self.revolutions * 360.0 }
}

/// Both sides of the drive moving together in one direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutonStep {
    pub direction: SpinDirection,
    pub left:      SideMove,
    pub right:     SideMove,
}

impl AutonStep {
    /// Both sides move the same distance at the same speed.
    pub const fn straight(direction: SpinDirection, revolutions: f64, percent: f64) -> Self {
        Self {
            direction,
            left: SideMove::new(revolutions, percent),
            right: SideMove::new(revolutions, percent),
        }
    }
}

const SHUFFLE_PCT: f64 = 50.0;

/// The match routine: a slight curve out, then shuffle back and forth and
/// finish on a forward move.
pub const ROUTINE: [AutonStep; 6] = [
    AutonStep {
        direction: SpinDirection::Reverse,
        left:      SideMove::new(4.0, 100.0),
        right:     SideMove::new(4.0, 70.0),
    },
    AutonStep::straight(SpinDirection::Forward, 0.75, SHUFFLE_PCT),
    AutonStep::straight(SpinDirection::Reverse, 1.25, SHUFFLE_PCT),
    AutonStep::straight(SpinDirection::Forward, 0.75, SHUFFLE_PCT),
    AutonStep::straight(SpinDirection::Reverse, 1.25, SHUFFLE_PCT),
    AutonStep::straight(SpinDirection::Forward, 0.75, SHUFFLE_PCT),
];

/// Runs `steps` in order, waiting on each step's right side through `settle`.
pub async fn run<S: Settle>(
    steps: &[AutonStep],
    left: &mut dyn Actuator,
    right: &mut dyn Actuator,
    settle: &mut S,
) {
    info!("Autonomous routine started ({} steps)", steps.len());
    for (i, step) in steps.iter().enumerate() {
        debug!("Autonomous step {}: {:?}", i, step);
        left.spin_for(step.direction, step.left.degrees(), step.left.percent);
        let motion = right.spin_for(step.direction, step.right.degrees(), step.right.percent);
        settle.settle(right, motion).await;
    }
    info!("Autonomous routine finished");
}
