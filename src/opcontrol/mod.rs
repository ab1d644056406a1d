//! Operator control: turning controller input into robot actions.
//!
//! Button presses and releases are translated into [`ControlEvent`]s by a
//! [`ButtonMap`](controller::ButtonMap). The robot consumes those events one at
//! a time in [`Robot::dispatch`](crate::robot::Robot::dispatch), so all state
//! changes happen in one place instead of inside scattered callbacks.
//!
//! # Example
//!
//! ```
//! use punchbot::opcontrol::{
//!     ControlEvent,
//!     controller::{ButtonEdge, ButtonMap, ControllerButton},
//! };
//!
//! let map = ButtonMap::default_layout();
//! let events = map.events(&[(ControllerButton::ButtonR1, ButtonEdge::Released)]);
//! assert_eq!(events.as_slice(), &[ControlEvent::LiftRelease]);
//! ```

/// Button layout and edge-to-event mapping.
pub mod controller;

/// A discrete driver request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Swap which end of the robot is the front.
    ToggleOrientation,
    /// Swap between full and slow drive speed.
    ToggleSpeedMode,
    ToggleLock,
    ToggleWing,
    /// Start or stop continuous punching.
    TogglePuncher,
    /// Turn the puncher through one cycle.
    RotatePuncher,
    LiftUp,
    LiftDown,
    LiftRelease,
    LiftToPunch,
    LiftToTouch,
}
