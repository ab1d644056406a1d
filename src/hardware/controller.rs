//! Reading the V5 controller into crate button and stick types.

use heapless::Vec;
use log::warn;
use vexide::{
    controller::{ButtonState, ControllerState},
    prelude::Controller,
};

use crate::opcontrol::controller::{ButtonEdge, ControllerButton, stick_to_percent};

/// Reads the controller, falling back to a neutral state on error.
pub fn read(controller: &Controller) -> ControllerState {
    controller.state().unwrap_or_else(|e| {
        warn!("Controller State Error: {}", e);
        ControllerState::default()
    })
}

/// Buttons that went down or came up since the previous read.
pub fn edges(state: &ControllerState) -> Vec<(ControllerButton, ButtonEdge), 12> {
    let mut edges = Vec::new();
    for button in ControllerButton::ALL {
        let button_state = get_button_state(state, button);
        let edge = if button_state.is_now_pressed() {
            Some(ButtonEdge::Pressed)
        } else if button_state.is_now_released() {
            Some(ButtonEdge::Released)
        } else {
            None
        };
        if let Some(edge) = edge {
            let _ = edges.push((button, edge));
        }
    }
    edges
}

/// Left and right stick Y positions as raw percentages.
pub fn tank_axes(state: &ControllerState) -> (f64, f64) {
    (
        stick_to_percent(state.left_stick.y()),
        stick_to_percent(state.right_stick.y()),
    )
}

fn get_button_state(state: &ControllerState, button: ControllerButton) -> ButtonState {
    match button {
        ControllerButton::ButtonA => state.button_a,
        ControllerButton::ButtonB => state.button_b,
        ControllerButton::ButtonX => state.button_x,
        ControllerButton::ButtonY => state.button_y,
        ControllerButton::ButtonUp => state.button_up,
        ControllerButton::ButtonDown => state.button_down,
        ControllerButton::ButtonLeft => state.button_left,
        ControllerButton::ButtonRight => state.button_right,
        ControllerButton::ButtonL1 => state.button_l1,
        ControllerButton::ButtonL2 => state.button_l2,
        ControllerButton::ButtonR1 => state.button_r1,
        ControllerButton::ButtonR2 => state.button_r2,
    }
}
