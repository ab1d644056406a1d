//! Press-to-toggle latches.
//!
//! A [`Latch`] is a persistent on/off flag that flips once per trigger.
//! [`PneumaticToggle`] pairs a latch with a solenoid so that each button press
//! extends or retracts the cylinder.

use log::debug;

use crate::actuator::BinaryActuator;

/// A persistent boolean flipped by discrete trigger events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latch(bool);

impl Latch {
    pub const fn new(on: bool) -> Self { Self(on) }

    pub fn is_on(self) -> bool { self.0 }

    /// Flips the latch and returns the new state.
    pub fn flip(&mut self) -> bool {
        self.0 = !self.0;
        self.0
    }

    /// Turns the latch off and returns whether it was on.
    pub fn clear(&mut self) -> bool { std::mem::replace(&mut self.0, false) }
}

/// A solenoid driven by a [`Latch`].
pub struct PneumaticToggle {
    name:   &'static str,
    latch:  Latch,
    output: Box<dyn BinaryActuator>,
}

impl PneumaticToggle {
    /// Creates a toggle with the solenoid assumed retracted.
    ///
    /// `name` only appears in log output.
    pub fn new(name: &'static str, output: Box<dyn BinaryActuator>) -> Self {
        Self {
            name,
            latch: Latch::default(),
            output,
        }
    }

    pub fn is_on(&self) -> bool { self.latch.is_on() }

    /// Flips the latch, drives the solenoid to match and returns the new state.
    pub fn toggle(&mut self) -> bool {
        let on = self.latch.flip();
        self.output.set(on);
        debug!("{} {}", self.name, if on { "extended" } else { "retracted" });
        on
    }
}
