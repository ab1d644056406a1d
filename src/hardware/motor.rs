//! Motor groups as [`Actuator`]s.

use std::{cell::RefCell, rc::Rc};

use log::warn;
use vexide::{
    math::Angle,
    prelude::Motor,
    smart::motor::BrakeMode,
};

use crate::actuator::{Actuator, Motion, SpinDirection, percent_to_rpm};

/// Motors that always receive the same command.
///
/// Speeds given as percentages are scaled against `max_rpm`, which should
/// match the cartridge fitted to the motors (100, 200 or 600).
///
/// # Example
///
/// ```ignore
/// let lift = MotorGroup::new(
///     [
///         Motor::new(peripherals.port_6, Gearset::Green, Direction::Reverse),
///         Motor::new(peripherals.port_7, Gearset::Green, Direction::Forward),
///     ],
///     200.0,
///     5.0,
/// );
/// ```
#[derive(Clone)]
pub struct MotorGroup {
    motors:    Rc<RefCell<dyn AsMut<[Motor]>>>,
    max_rpm:   f64,
    tolerance: f64,
    stop_mode: BrakeMode,
}

impl MotorGroup {
    /// Creates a group that coasts when stopped.
    ///
    /// `tolerance` is the settle band, in degrees, attached to every
    /// [`Motion`] the group hands out.
    pub fn new<M: AsMut<[Motor]> + 'static>(motors: M, max_rpm: f64, tolerance: f64) -> Self {
        Self::from_shared(Rc::new(RefCell::new(motors)), max_rpm, tolerance)
    }

    /// Creates a group over motors that are also owned elsewhere.
    pub fn from_shared<M: AsMut<[Motor]> + 'static>(
        motors: Rc<RefCell<M>>,
        max_rpm: f64,
        tolerance: f64,
    ) -> Self {
        Self {
            motors,
            max_rpm,
            tolerance,
            stop_mode: BrakeMode::Coast,
        }
    }

    /// Sets how the motors behave on [`Actuator::stop`].
    pub fn with_stop_mode(mut self, stop_mode: BrakeMode) -> Self {
        self.stop_mode = stop_mode;
        self
    }

    fn rpm(&self, percent: f64) -> i32 { percent_to_rpm(percent, self.max_rpm) }

    fn each(&self, mut f: impl FnMut(&mut Motor)) {
        match self.motors.try_borrow_mut() {
            Ok(mut motors) => {
                for motor in motors.as_mut() {
                    f(motor);
                }
            }
            Err(e) => warn!("Error Borrowing Motors: {}", e),
        }
    }
}

impl Actuator for MotorGroup {
    fn spin(&mut self, direction: SpinDirection, percent: f64) {
        let rpm = self.rpm(direction.sign() * percent);
        self.each(|motor| {
            motor.set_velocity(rpm).unwrap_or_else(|e| {
                warn!("Motor Set Velocity Error: {}", e);
            });
        });
    }

    fn spin_for(&mut self, direction: SpinDirection, degrees: f64, percent: f64) -> Motion {
        let target = direction.relative_target(self.position(), degrees);
        self.spin_to_position(target, percent)
    }

    fn spin_to_position(&mut self, target: f64, percent: f64) -> Motion {
        let rpm = self.rpm(percent.abs());
        self.each(|motor| {
            motor
                .set_position_target(Angle::from_degrees(target), rpm)
                .unwrap_or_else(|e| {
                    warn!("Motor Set Position Target Error: {}", e);
                });
        });
        Motion::new(target, self.tolerance)
    }

    fn stop(&mut self) {
        let mode = self.stop_mode;
        self.each(|motor| {
            motor.brake(mode).unwrap_or_else(|e| {
                warn!("Motor Brake Error: {}", e);
            });
        });
    }

    /// Average encoder position of the motors that answered.
    fn position(&self) -> f64 {
        let mut sum = 0.0;
        let mut count = 0.0;
        self.each(|motor| match motor.position() {
            Ok(angle) => {
                sum += angle.as_degrees();
                count += 1.0;
            }
            Err(e) => warn!("Error Getting Motor Encoder Position: {}", e),
        });
        if count == 0.0 { 0.0 } else { sum / count }
    }
}
