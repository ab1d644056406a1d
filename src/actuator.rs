//! Actuator interfaces the robot logic drives.
//!
//! Every mechanism in this crate talks to hardware through the two traits in
//! this module. The [`hardware`](crate::hardware) module implements them for
//! vexide motor groups and ADI digital outputs; tests implement them with
//! recording fakes.
//!
//! All commands are fire-and-forget. Position moves hand back a [`Motion`]
//! which the caller may drop, or pass to a [`Settle`] implementation to wait
//! until the actuator arrives.

/// Native spin direction of a motor or motor group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    Forward,
    Reverse,
}

impl SpinDirection {
    /// Returns `1.0` for [`SpinDirection::Forward`] and `-1.0` for
    /// [`SpinDirection::Reverse`].
    pub fn sign(self) -> f64 {
        match self {
            SpinDirection::Forward => 1.0,
            SpinDirection::Reverse => -1.0,
        }
    }

    /// Absolute position `degrees` away from `position` in this direction.
    pub fn relative_target(self, position: f64, degrees: f64) -> f64 {
        position + self.sign() * degrees
    }
}

/// Converts a signed speed percentage to whole rpm for a motor whose free
/// speed is `max_rpm`, rounding to the nearest rpm.
pub fn percent_to_rpm(percent: f64, max_rpm: f64) -> i32 {
    (percent / 100.0 * max_rpm).round() as i32
}

/// Handle to a position move that has been issued to an actuator.
///
/// Dropping the handle leaves the move running; the actuator finishes it on
/// its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Absolute target in degrees.
    pub target:    f64,
    /// Distance from the target, in degrees, that counts as arrived.
    pub tolerance: f64,
}

impl Motion {
    pub fn new(target: f64, tolerance: f64) -> Self { Self { target, tolerance } }

    /// Whether an actuator at `position` has finished this move.
    pub fn is_settled(&self, position: f64) -> bool {
        (self.target - position).abs() <= self.tolerance
    }
}

/// A motor or group of motors that move together.
///
/// Speeds are percentages of the actuator's maximum speed. Positions are in
/// degrees of the actuator's own encoder.
pub trait Actuator {
    /// Starts a continuous spin. The spin runs until superseded or stopped.
    fn spin(&mut self, direction: SpinDirection, percent: f64);

    /// Starts a move of `degrees` relative to the current position.
    fn spin_for(&mut self, direction: SpinDirection, degrees: f64, percent: f64) -> Motion;

    /// Starts a move to an absolute position.
    fn spin_to_position(&mut self, target: f64, percent: f64) -> Motion;

    /// Stops any commanded motion.
    fn stop(&mut self);

    /// Current position in degrees.
    fn position(&self) -> f64;
}

/// A two-state output such as a pneumatic solenoid.
pub trait BinaryActuator {
    fn set(&mut self, on: bool);
}

/// Waits for an issued [`Motion`] to finish.
///
/// This is the "optionally await" half of a fire-and-forget command.
#[allow(async_fn_in_trait)]
pub trait Settle {
    async fn settle(&mut self, actuator: &dyn Actuator, motion: Motion);
}

/// Checks `actuator` against `motion`, awaiting `pause` between checks, until
/// the move has settled. There is no time limit.
pub async fn poll_until_settled<F, P>(actuator: &dyn Actuator, motion: Motion, mut pause: P)
where
    P: FnMut() -> F,
    F: Future<Output = ()>,
{
    while !motion.is_settled(actuator.position()) {
        pause().await;
    }
}
