//! vexide bindings for the actuator traits.
//!
//! - [`MotorGroup`](motor::MotorGroup) implements
//!   [`Actuator`](crate::actuator::Actuator) for one or more V5 motors.
//! - [`AdiDigitalOut`] implements
//!   [`BinaryActuator`](crate::actuator::BinaryActuator) for solenoids.
//! - [`controller`] reads button edges and sticks from a V5 controller.
//! - [`PollSettle`](settle::PollSettle) waits for position moves on the
//!   vexide executor.
//!
//! Device errors are logged and otherwise ignored.

use log::warn;
use vexide::prelude::AdiDigitalOut;

use crate::actuator::BinaryActuator;

/// Reading the V5 controller.
pub mod controller;
/// Motor groups.
pub mod motor;
/// Waiting on position moves.
pub mod settle;

impl BinaryActuator for AdiDigitalOut {
    fn set(&mut self, on: bool) {
        let result = if on { self.set_high() } else { self.set_low() };
        result.unwrap_or_else(|e| {
            warn!("ADI Set Error: {}", e);
        });
    }
}
