//! The puncher: a single motor run either continuously or one cycle at a time.

use log::debug;

use crate::{
    actuator::{Actuator, Motion, SpinDirection},
    toggle::Latch,
};

pub struct Puncher {
    motor:   Box<dyn Actuator>,
    running: Latch,
    percent: f64,
    cycle:   f64,
}

impl Puncher {
    /// Creates a stopped puncher.
    ///
    /// `percent` is the speed for both modes and `cycle` the number of degrees
    /// in one full punch.
    pub fn new(motor: Box<dyn Actuator>, percent: f64, cycle: f64) -> Self {
        Self {
            motor,
            running: Latch::default(),
            percent,
            cycle,
        }
    }

    /// Whether the puncher is in continuous mode.
    pub fn is_running(&self) -> bool { self.running.is_on() }

    /// Starts or stops continuous punching and returns the new state.
    pub fn toggle(&mut self) -> bool {
        let running = self.running.flip();
        if running {
            self.motor.spin(SpinDirection::Forward, self.percent);
        } else {
            self.motor.stop();
        }
        debug!("Puncher running: {}", running);
        running
    }

    /// Turns the puncher through one full cycle.
    ///
    /// Leaves continuous mode without issuing a stop, since the move replaces
    /// the spin. Nothing prevents a second call while the first cycle is still
    /// turning; the later move simply supersedes it.
    pub fn rotate_one_cycle(&mut self) -> Motion {
        if self.running.clear() {
            debug!("Puncher leaving continuous mode for a single cycle");
        }
        self.motor.spin_for(SpinDirection::Forward, self.cycle, self.percent)
    }
}
