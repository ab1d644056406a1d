//! Tuning constants for the robot.
//!
//! Everything that used to be a loose number in the control code lives in
//! [`RobotConfig`]. Device ports are not here; they belong to whoever builds
//! the peripherals (see the `compbot` demo).

use std::time::Duration;

use log::LevelFilter;

/// Tuning values shared by every mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotConfig {
    /// Delay between driver control polls.
    pub poll_interval:     Duration,
    /// Lift speed while a lift button is held, in percent.
    pub lift_percent:      f64,
    /// Punch seek position relative to the calibrated rest position, in degrees.
    pub lift_punch_offset: f64,
    /// Touch seek position relative to the calibrated rest position, in degrees.
    pub lift_touch_offset: f64,
    /// Puncher speed, in percent.
    pub puncher_percent:   f64,
    /// One full puncher cycle, in degrees.
    pub puncher_cycle:     f64,
    /// How close a position move must get before it counts as done, in degrees.
    pub settle_tolerance:  f64,
    /// How often a settling move is polled.
    pub settle_interval:   Duration,
    /// Minimum level written by the logger.
    pub log_level:         LevelFilter,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            poll_interval:     Duration::from_millis(20),
            lift_percent:      60.0,
            lift_punch_offset: 500.0,
            lift_touch_offset: 1500.0,
            puncher_percent:   60.0,
            puncher_cycle:     750.0,
            settle_tolerance:  5.0,
            settle_interval:   Duration::from_millis(10),
            log_level:         LevelFilter::Info,
        }
    }
}
