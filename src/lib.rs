//! # Punchbot
//!
//! Control code for a VEX V5 robot with a tank drive, a two-motor lift, a
//! puncher and two pneumatic cylinders, built on [vexide](https://vexide.dev).
//!
//! - **Drivetrain**: tank drive with a swappable front and a half-speed mode.
//! - **Lift**: hold-to-move, with two seek positions calibrated at startup.
//! - **Puncher**: continuous toggle or a single fixed-angle cycle.
//! - **Pneumatics**: press-to-toggle lock and wing.
//! - **Operator control**: a button layout producing typed events, applied by
//!   a single dispatcher.
//! - **Autonomous**: a fixed sequence of paired drive moves.
//! - **Logging**: a console and SD card logger.
//!
//! Mechanisms only see the traits in [`actuator`], so everything except the
//! `hardware` bindings runs on the host in unit tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use punchbot::{config::RobotConfig, robot::Robot};
//!
//! let config = RobotConfig::default();
//! let mut robot = Robot::new(&config, devices);
//! robot.initialize();
//!
//! loop {
//!     for event in bindings.events(&edges) {
//!         robot.dispatch(event);
//!     }
//!     robot.drive_tick(left_y, right_y);
//!     sleep(config.poll_interval).await;
//! }
//! ```

/// Actuator traits and motion handles.
pub mod actuator;

/// The autonomous routine.
pub mod autonomous;

/// Tuning constants.
pub mod config;

/// Tank drive with orientation and speed modes.
///
/// - **Forward**: left stick drives the left side, motors spin in reverse.
/// - **Aft**: sticks swap sides, motors spin forward.
/// - **Slow**: every output is halved.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains the logger that copies log output to the V5 Brain's SD card.
pub mod fs;

/// The lift.
pub mod lift;

/// Operator control: button layout and driver events.
pub mod opcontrol;

/// The puncher.
pub mod puncher;

/// The assembled robot and its event dispatcher.
pub mod robot;

/// Latches and pneumatic toggles.
pub mod toggle;

/// vexide implementations of the actuator traits.
///
/// Only built for the V5 Brain.
#[cfg(target_os = "vexos")]
pub mod hardware;

#[cfg(test)]
mod mock;
