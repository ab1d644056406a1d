//! Controller button layout.
//!
//! A [`ButtonMap`] holds, for each [`ControllerButton`], the event to raise
//! when the button goes down and the event to raise when it comes back up.
//! Each poll of the controller yields a list of button edges; the map turns
//! them into [`ControlEvent`]s in a fixed order.
//!
//! The default layout:
//!
//! | Button | Press | Release |
//! |--------|-------|---------|
//! | A      | swap front | |
//! | X      | swap speed mode | |
//! | Up     | toggle lock | |
//! | Down   | toggle wing | |
//! | L1     | toggle puncher | |
//! | L2     | one puncher cycle | |
//! | R1     | raise lift | stop lift |
//! | R2     | lower lift | stop lift |

use heapless::Vec;
use log::warn;

use super::ControlEvent;

/// Upper bound on events a single poll can produce: one per edge of every
/// button.
pub const MAX_EVENTS: usize = 2 * ControllerButton::ALL.len();

/// A list of Controller Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerButton {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    ButtonL1,
    ButtonL2,
    ButtonR1,
    ButtonR2,
}

impl ControllerButton {
    /// Every button, in the order events are raised.
    pub const ALL: [ControllerButton; 12] = [
        ControllerButton::ButtonA,
        ControllerButton::ButtonB,
        ControllerButton::ButtonX,
        ControllerButton::ButtonY,
        ControllerButton::ButtonUp,
        ControllerButton::ButtonDown,
        ControllerButton::ButtonLeft,
        ControllerButton::ButtonRight,
        ControllerButton::ButtonL1,
        ControllerButton::ButtonL2,
        ControllerButton::ButtonR1,
        ControllerButton::ButtonR2,
    ];

    fn index(self) -> usize { self as usize }
}

/// A change in a button's state since the previous poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Binding {
    press:   Option<ControlEvent>,
    release: Option<ControlEvent>,
}

impl Binding {
    fn on(&self, edge: ButtonEdge) -> Option<ControlEvent> {
        match edge {
            ButtonEdge::Pressed => self.press,
            ButtonEdge::Released => self.release,
        }
    }
}

/// Maps button edges to [`ControlEvent`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonMap {
    bindings: [Binding; 12],
}

impl ButtonMap {
    /// A map with nothing bound.
    pub fn empty() -> Self { Self::default() }

    /// The competition layout.
    pub fn default_layout() -> Self {
        use ButtonEdge::*;
        use ControlEvent::*;
        use ControllerButton::*;

        Self::empty()
            .bind(ButtonA, Pressed, ToggleOrientation)
            .bind(ButtonX, Pressed, ToggleSpeedMode)
            .bind(ButtonUp, Pressed, ToggleLock)
            .bind(ButtonDown, Pressed, ToggleWing)
            .bind(ButtonL1, Pressed, TogglePuncher)
            .bind(ButtonL2, Pressed, RotatePuncher)
            .bind(ButtonR1, Pressed, LiftUp)
            .bind(ButtonR1, Released, LiftRelease)
            .bind(ButtonR2, Pressed, LiftDown)
            .bind(ButtonR2, Released, LiftRelease)
    }

    /// Binds `event` to one edge of `button`, replacing any earlier binding.
    pub fn bind(mut self, button: ControllerButton, edge: ButtonEdge, event: ControlEvent) -> Self {
        let binding = &mut self.bindings[button.index()];
        match edge {
            ButtonEdge::Pressed => binding.press = Some(event),
            ButtonEdge::Released => binding.release = Some(event),
        }
        self
    }

    pub fn event_for(&self, button: ControllerButton, edge: ButtonEdge) -> Option<ControlEvent> {
        self.bindings[button.index()].on(edge)
    }

    /// Translates one poll's worth of edges, skipping unbound ones.
    pub fn events(&self, edges: &[(ControllerButton, ButtonEdge)]) -> Vec<ControlEvent, MAX_EVENTS> {
        let mut events = Vec::new();
        for &(button, edge) in edges {
            if let Some(event) = self.event_for(button, edge) {
                if events.push(event).is_err() {
                    warn!("Dropped {:?}: too many button events in one poll", event);
                }
            }
        }
        events
    }
}

/// Converts a stick reading in `[-1, 1]` to the raw `[-100, 100]` percent
/// domain the drive mapping expects.
pub fn stick_to_percent(value: f64) -> f64 { value * 100.0 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_presses() {
        let map = ButtonMap::default_layout();
        let cases = [
            (ControllerButton::ButtonA, ControlEvent::ToggleOrientation),
            (ControllerButton::ButtonX, ControlEvent::ToggleSpeedMode),
            (ControllerButton::ButtonUp, ControlEvent::ToggleLock),
            (ControllerButton::ButtonDown, ControlEvent::ToggleWing),
            (ControllerButton::ButtonL1, ControlEvent::TogglePuncher),
            (ControllerButton::ButtonL2, ControlEvent::RotatePuncher),
            (ControllerButton::ButtonR1, ControlEvent::LiftUp),
            (ControllerButton::ButtonR2, ControlEvent::LiftDown),
        ];
        for (button, event) in cases {
            assert_eq!(map.event_for(button, ButtonEdge::Pressed), Some(event));
        }
    }

    #[test]
    fn only_lift_buttons_act_on_release() {
        let map = ButtonMap::default_layout();
        for button in ControllerButton::ALL {
            let expected = match button {
                ControllerButton::ButtonR1 | ControllerButton::ButtonR2 => {
                    Some(ControlEvent::LiftRelease)
                }
                _ => None,
            };
            assert_eq!(map.event_for(button, ButtonEdge::Released), expected);
        }
    }

    #[test]
    fn unbound_buttons_are_silent() {
        let map = ButtonMap::default_layout();
        let edges = [
            (ControllerButton::ButtonB, ButtonEdge::Pressed),
            (ControllerButton::ButtonY, ButtonEdge::Pressed),
            (ControllerButton::ButtonLeft, ButtonEdge::Pressed),
            (ControllerButton::ButtonRight, ButtonEdge::Released),
        ];
        assert!(map.events(&edges).is_empty());
    }

    #[test]
    fn events_keep_edge_order() {
        let map = ButtonMap::default_layout();
        let edges = [
            (ControllerButton::ButtonR1, ButtonEdge::Released),
            (ControllerButton::ButtonB, ButtonEdge::Pressed),
            (ControllerButton::ButtonL2, ButtonEdge::Pressed),
        ];
        assert_eq!(map.events(&edges).as_slice(), &[
            ControlEvent::LiftRelease,
            ControlEvent::RotatePuncher
        ]);
    }

    #[test]
    fn rebinding_replaces() {
        let map = ButtonMap::default_layout().bind(
            ControllerButton::ButtonRight,
            ButtonEdge::Pressed,
            ControlEvent::LiftToPunch,
        );
        assert_eq!(
            map.event_for(ControllerButton::ButtonRight, ButtonEdge::Pressed),
            Some(ControlEvent::LiftToPunch)
        );
    }

    #[test]
    fn stick_scaling() {
        assert_eq!(stick_to_percent(1.0), 100.0);
        assert_eq!(stick_to_percent(-0.5), -50.0);
    }
}
