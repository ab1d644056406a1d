//! Recording actuators for unit tests.

use std::{cell::RefCell, rc::Rc};

use crate::actuator::{Actuator, BinaryActuator, Motion, Settle, SpinDirection};

pub const TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Spin(SpinDirection, f64),
    SpinFor(SpinDirection, f64, f64),
    SpinTo(f64, f64),
    Stop,
    Set(bool),
}

#[derive(Default)]
struct Inner {
    commands: Vec<Command>,
    position: f64,
}

/// An actuator that records every command it receives.
///
/// Clones share the same log, so a test can keep one handle and box the
/// other into the code under test.
#[derive(Clone, Default)]
pub struct Recorder {
    inner: Rc<RefCell<Inner>>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn at(position: f64) -> Self {
        let recorder = Self::new();
        recorder.set_position(position);
        recorder
    }

    pub fn boxed(&self) -> Box<Self> { Box::new(self.clone()) }

    pub fn set_position(&self, position: f64) { self.inner.borrow_mut().position = position; }

    pub fn commands(&self) -> Vec<Command> { self.inner.borrow().commands.clone() }

    pub fn clear(&self) { self.inner.borrow_mut().commands.clear(); }

    fn record(&self, command: Command) { self.inner.borrow_mut().commands.push(command); }
}

impl Actuator for Recorder {
    fn spin(&mut self, direction: SpinDirection, percent: f64) {
        self.record(Command::Spin(direction, percent));
    }

    fn spin_for(&mut self, direction: SpinDirection, degrees: f64, percent: f64) -> Motion {
        self.record(Command::SpinFor(direction, degrees, percent));
        Motion::new(direction.relative_target(self.position(), degrees), TOLERANCE)
    }

    fn spin_to_position(&mut self, target: f64, percent: f64) -> Motion {
        self.record(Command::SpinTo(target, percent));
        Motion::new(target, TOLERANCE)
    }

    fn stop(&mut self) { self.record(Command::Stop); }

    fn position(&self) -> f64 { self.inner.borrow().position }
}

impl BinaryActuator for Recorder {
    fn set(&mut self, on: bool) { self.record(Command::Set(on)); }
}

/// A [`Settle`] that returns immediately and remembers what it waited on.
#[derive(Default)]
pub struct InstantSettle {
    pub waited: Vec<Motion>,
}

impl Settle for InstantSettle {
    async fn settle(&mut self, _actuator: &dyn Actuator, motion: Motion) {
        self.waited.push(motion);
    }
}

/// A [`Settle`] that yields to the executor once before finishing, like a
/// move that is still turning on the first poll.
#[derive(Default)]
pub struct YieldingSettle {
    pub waited: Vec<Motion>,
}

impl Settle for YieldingSettle {
    async fn settle(&mut self, _actuator: &dyn Actuator, motion: Motion) {
        embassy_futures::yield_now().await;
        self.waited.push(motion);
    }
}
