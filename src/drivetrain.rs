//! Tank drive control with a swappable front and a slow mode.
//!
//! The left stick drives one side of the robot and the right stick drives the
//! other. Which physical end counts as the front is the robot's
//! [`Orientation`]; flipping it swaps the sticks between the sides and
//! reverses the spin direction, so the driver can push "forward" toward
//! either end. [`SpeedMode`] scales both sides at once.
//!
//! # Example
//!
//! ```
//! use punchbot::{
//!     actuator::SpinDirection,
//!     drivetrain::{Orientation, SpeedMode, compute_drive_command},
//! };
//!
//! let command = compute_drive_command(80.0, -40.0, Orientation::Aft, SpeedMode::Slow);
//! assert_eq!(command.left_pct, -20.0);
//! assert_eq!(command.right_pct, 40.0);
//! assert_eq!(command.direction, SpinDirection::Forward);
//! ```

use log::debug;

use crate::actuator::{Actuator, SpinDirection};

/// Scale applied to stick input in [`SpeedMode::Full`].
pub const FULL_SPEED: f64 = 1.0;
/// Scale applied to stick input in [`SpeedMode::Slow`].
pub const SLOW_SPEED: f64 = 0.5;

/// Which end of the robot the driver treats as the front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Forward,
    Aft,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Aft,
            Orientation::Aft => Orientation::Forward,
        }
    }

    /// Hardware spin direction for this orientation.
    ///
    /// The robot's physical front is wired as the motors' reverse.
    pub fn direction(self) -> SpinDirection {
        match self {
            Orientation::Forward => SpinDirection::Reverse,
            Orientation::Aft => SpinDirection::Forward,
        }
    }
}

/// Drive speed scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpeedMode {
    #[default]
    Full,
    Slow,
}

impl SpeedMode {
    pub fn toggled(self) -> Self {
        match self {
            SpeedMode::Full => SpeedMode::Slow,
            SpeedMode::Slow => SpeedMode::Full,
        }
    }

    pub fn scalar(self) -> f64 {
        match self {
            SpeedMode::Full => FULL_SPEED,
            SpeedMode::Slow => SLOW_SPEED,
        }
    }
}

/// Output of one drive tick: a percentage per side and a shared direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveCommand {
    pub left_pct:  f64,
    pub right_pct: f64,
    pub direction: SpinDirection,
}

/// Maps raw stick positions to a [`DriveCommand`].
///
/// `axis_a` is the left stick and `axis_b` the right stick, both in the raw
/// controller domain of `[-100, 100]`. Values outside that range pass through
/// unclamped.
pub fn compute_drive_command(
    axis_a: f64,
    axis_b: f64,
    orientation: Orientation,
    speed_mode: SpeedMode,
) -> DriveCommand {
    let scalar = speed_mode.scalar();
    let (left_raw, right_raw) = match orientation {
        Orientation::Forward => (axis_a, axis_b),
        Orientation::Aft => (axis_b, axis_a),
    };

    DriveCommand {
        left_pct:  scalar * left_raw,
        right_pct: scalar * right_raw,
        direction: orientation.direction(),
    }
}

/// Holds the driver's orientation and speed choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveModeController {
    orientation: Orientation,
    speed_mode:  SpeedMode,
}

impl DriveModeController {
    pub fn new(orientation: Orientation, speed_mode: SpeedMode) -> Self {
        Self {
            orientation,
            speed_mode,
        }
    }

    pub fn orientation(&self) -> Orientation { self.orientation }

    pub fn speed_mode(&self) -> SpeedMode { self.speed_mode }

    /// Swaps the front of the robot and returns the new orientation.
    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        debug!("Drive orientation: {:?}", self.orientation);
        self.orientation
    }

    /// Swaps between full and slow speed and returns the new mode.
    pub fn toggle_speed_mode(&mut self) -> SpeedMode {
        self.speed_mode = self.speed_mode.toggled();
        debug!("Drive speed mode: {:?}", self.speed_mode);
        self.speed_mode
    }

    pub fn command(&self, axis_a: f64, axis_b: f64) -> DriveCommand {
        compute_drive_command(axis_a, axis_b, self.orientation, self.speed_mode)
    }
}

/// A tank drive train: two motor groups and the mode controller steering them.
pub struct TankDrive {
    pub mode: DriveModeController,
    left:     Box<dyn Actuator>,
    right:    Box<dyn Actuator>,
}

impl TankDrive {
    /// Creates a drive train in [`Orientation::Forward`] at full speed.
    pub fn new(left: Box<dyn Actuator>, right: Box<dyn Actuator>) -> Self {
        Self {
            mode: DriveModeController::default(),
            left,
            right,
        }
    }

    /// Maps the sticks through the current mode and spins both sides.
    ///
    /// Called once per control-loop poll.
    pub fn tick(&mut self, axis_a: f64, axis_b: f64) -> DriveCommand {
        let command = self.mode.command(axis_a, axis_b);
        self.left.spin(command.direction, command.left_pct);
        self.right.spin(command.direction, command.right_pct);
        command
    }

    pub fn stop(&mut self) {
        self.left.stop();
        self.right.stop();
    }

    /// Both sides, for callers that sequence drive moves themselves.
    pub fn sides(&mut self) -> (&mut dyn Actuator, &mut dyn Actuator) {
        (self.left.as_mut(), self.right.as_mut())
    }
}
