//! The two-motor lift.
//!
//! Driven directly while a button is held, and able to seek two positions
//! measured from where the lift sat when the program started.

use log::{debug, info, warn};

use crate::actuator::{Actuator, Motion, SpinDirection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LiftState {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

/// Absolute seek positions, in degrees, fixed once at calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftTargets {
    pub punch: f64,
    pub touch: f64,
}

impl LiftTargets {
    pub fn from_baseline(baseline: f64, punch_offset: f64, touch_offset: f64) -> Self {
        Self {
            punch: baseline + punch_offset,
            touch: baseline + touch_offset,
        }
    }
}

pub struct Lift {
    motors:       Box<dyn Actuator>,
    state:        LiftState,
    targets:      Option<LiftTargets>,
    percent:      f64,
    punch_offset: f64,
    touch_offset: f64,
}

impl Lift {
    pub fn new(motors: Box<dyn Actuator>, percent: f64, punch_offset: f64, touch_offset: f64) -> Self {
        Self {
            motors,
            state: LiftState::Idle,
            targets: None,
            percent,
            punch_offset,
            touch_offset,
        }
    }

    pub fn state(&self) -> LiftState { self.state }

    /// The seek positions, once [`Lift::calibrate`] has run.
    pub fn targets(&self) -> Option<LiftTargets> { self.targets }

    /// Reads the lift's rest position and derives the seek targets from it.
    ///
    /// Must be called with the lift resting at the bottom. Only the first call
    /// has any effect.
    pub fn calibrate(&mut self) -> LiftTargets {
        if let Some(targets) = self.targets {
            return targets;
        }
        let baseline = self.motors.position();
        let targets = LiftTargets::from_baseline(baseline, self.punch_offset, self.touch_offset);
        info!(
            "Lift calibrated at {} deg (punch {}, touch {})",
            baseline, targets.punch, targets.touch
        );
        self.targets = Some(targets);
        targets
    }

    pub fn press_up(&mut self) {
        self.motors.spin(SpinDirection::Forward, self.percent);
        self.state = LiftState::MovingUp;
    }

    pub fn press_down(&mut self) {
        self.motors.spin(SpinDirection::Reverse, self.percent);
        self.state = LiftState::MovingDown;
    }

    /// Stops the lift. Either button's release lands here.
    pub fn release(&mut self) {
        self.motors.stop();
        self.state = LiftState::Idle;
    }

    pub fn seek_punch(&mut self) -> Option<Motion> { self.seek(|targets| targets.punch) }

    pub fn seek_touch(&mut self) -> Option<Motion> { self.seek(|targets| targets.touch) }

    fn seek(&mut self, pick: impl FnOnce(LiftTargets) -> f64) -> Option<Motion> {
        let Some(targets) = self.targets else {
            warn!("Lift seek requested before calibration");
            return None;
        };
        let target = pick(targets);
        debug!("Lift seeking {} deg", target);
        self.state = LiftState::Idle;
        Some(self.motors.spin_to_position(target, self.percent))
    }
}
