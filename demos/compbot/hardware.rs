use punchbot::{
    config::RobotConfig,
    hardware::motor::MotorGroup,
    opcontrol::controller::ButtonMap,
    robot::{Devices, Robot},
};
use vexide::prelude::*;

/// Free speed of the green cartridge.
const GREEN_RPM: f64 = 200.0;

pub struct Bot {
    pub robot:      Robot,
    pub controller: Controller,
    pub bindings:   ButtonMap,
    pub config:     RobotConfig,
}

impl Bot {
    /// Port layout of the competition robot.
    ///
    /// Left side motors spin natively, right side and the left lift motor are
    /// mounted mirrored.
    pub fn default_config(peripherals: Peripherals) -> Self {
        let config = RobotConfig::default();
        let tolerance = config.settle_tolerance;

        let left_drive = MotorGroup::new(
            [
                Motor::new(peripherals.port_12, Gearset::Green, Direction::Forward),
                Motor::new(peripherals.port_10, Gearset::Green, Direction::Forward),
            ],
            GREEN_RPM,
            tolerance,
        );
        let right_drive = MotorGroup::new(
            [
                Motor::new(peripherals.port_2, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_1, Gearset::Green, Direction::Reverse),
            ],
            GREEN_RPM,
            tolerance,
        );
        let lift = MotorGroup::new(
            [
                Motor::new(peripherals.port_6, Gearset::Green, Direction::Reverse),
                Motor::new(peripherals.port_7, Gearset::Green, Direction::Forward),
            ],
            GREEN_RPM,
            tolerance,
        );
        let puncher = MotorGroup::new(
            [Motor::new(peripherals.port_8, Gearset::Green, Direction::Forward)],
            GREEN_RPM,
            tolerance,
        );

        let robot = Robot::new(&config, Devices {
            left_drive:  Box::new(left_drive),
            right_drive: Box::new(right_drive),
            lift:        Box::new(lift),
            puncher:     Box::new(puncher),
            lock:        Box::new(AdiDigitalOut::new(peripherals.adi_a)),
            wing:        Box::new(AdiDigitalOut::new(peripherals.adi_b)),
        });

        Self {
            robot,
            controller: peripherals.primary_controller,
            bindings: ButtonMap::default_layout(),
            config,
        }
    }
}
