//! The whole robot: every mechanism plus the event dispatcher.

use log::{debug, info};

use crate::{
    actuator::{Actuator, BinaryActuator, Settle},
    autonomous,
    config::RobotConfig,
    drivetrain::{DriveCommand, TankDrive},
    lift::Lift,
    opcontrol::ControlEvent,
    puncher::Puncher,
    toggle::PneumaticToggle,
};

/// The devices a [`Robot`] is assembled from.
pub struct Devices {
    pub left_drive:  Box<dyn Actuator>,
    pub right_drive: Box<dyn Actuator>,
    pub lift:        Box<dyn Actuator>,
    pub puncher:     Box<dyn Actuator>,
    pub lock:        Box<dyn BinaryActuator>,
    pub wing:        Box<dyn BinaryActuator>,
}

pub struct Robot {
    pub drive:   TankDrive,
    pub lock:    PneumaticToggle,
    pub wing:    PneumaticToggle,
    pub puncher: Puncher,
    pub lift:    Lift,
}

impl Robot {
    pub fn new(config: &RobotConfig, devices: Devices) -> Self {
        Self {
            drive:   TankDrive::new(devices.left_drive, devices.right_drive),
            lock:    PneumaticToggle::new("Lock", devices.lock),
            wing:    PneumaticToggle::new("Wing", devices.wing),
            puncher: Puncher::new(devices.puncher, config.puncher_percent, config.puncher_cycle),
            lift:    Lift::new(
                devices.lift,
                config.lift_percent,
                config.lift_punch_offset,
                config.lift_touch_offset,
            ),
        }
    }

    /// One-time setup before the match. The lift must be at rest.
    pub fn initialize(&mut self) {
        self.lift.calibrate();
        info!("Robot initialized");
    }

    /// Applies one driver request.
    pub fn dispatch(&mut self, event: ControlEvent) {
        debug!("Dispatching {:?}", event);
        match event {
            ControlEvent::ToggleOrientation => {
                self.drive.mode.toggle_orientation();
            }
            ControlEvent::ToggleSpeedMode => {
                self.drive.mode.toggle_speed_mode();
            }
            ControlEvent::ToggleLock => {
                self.lock.toggle();
            }
            ControlEvent::ToggleWing => {
                self.wing.toggle();
            }
            ControlEvent::TogglePuncher => {
                self.puncher.toggle();
            }
            ControlEvent::RotatePuncher => {
                self.puncher.rotate_one_cycle();
            }
            ControlEvent::LiftUp => self.lift.press_up(),
            ControlEvent::LiftDown => self.lift.press_down(),
            ControlEvent::LiftRelease => self.lift.release(),
            ControlEvent::LiftToPunch => {
                self.lift.seek_punch();
            }
            ControlEvent::LiftToTouch => {
                self.lift.seek_touch();
            }
        }
    }

    /// Runs one drive poll from raw stick percentages.
    pub fn drive_tick(&mut self, axis_a: f64, axis_b: f64) -> DriveCommand {
        self.drive.tick(axis_a, axis_b)
    }

    /// Runs the autonomous routine to completion.
    pub async fn autonomous<S: Settle>(&mut self, settle: &mut S) {
        let (left, right) = self.drive.sides();
        autonomous::run(&autonomous::ROUTINE, left, right, settle).await;
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::{
        actuator::SpinDirection,
        drivetrain::{Orientation, SpeedMode},
        lift::LiftState,
        mock::{Command, InstantSettle, Recorder, YieldingSettle},
    };

    struct Rig {
        left:    Recorder,
        right:   Recorder,
        lift:    Recorder,
        puncher: Recorder,
        lock:    Recorder,
        wing:    Recorder,
        robot:   Robot,
    }

    fn rig() -> Rig {
        let left = Recorder::new();
        let right = Recorder::new();
        let lift = Recorder::at(20.0);
        let puncher = Recorder::new();
        let lock = Recorder::new();
        let wing = Recorder::new();
        let robot = Robot::new(&RobotConfig::default(), Devices {
            left_drive:  left.boxed(),
            right_drive: right.boxed(),
            lift:        lift.boxed(),
            puncher:     puncher.boxed(),
            lock:        lock.boxed(),
            wing:        wing.boxed(),
        });
        Rig {
            left,
            right,
            lift,
            puncher,
            lock,
            wing,
            robot,
        }
    }

    #[test]
    fn initialize_calibrates_lift() {
        let mut rig = rig();
        rig.robot.initialize();
        let targets = rig.robot.lift.targets().map(|t| (t.punch, t.touch));
        assert_eq!(targets, Some((520.0, 1520.0)));
    }

    #[test]
    fn mode_events_change_drive_mapping() {
        let mut rig = rig();
        rig.robot.dispatch(ControlEvent::ToggleOrientation);
        rig.robot.dispatch(ControlEvent::ToggleSpeedMode);

        assert_eq!(rig.robot.drive.mode.orientation(), Orientation::Aft);
        assert_eq!(rig.robot.drive.mode.speed_mode(), SpeedMode::Slow);

        let command = rig.robot.drive_tick(80.0, -40.0);
        assert_eq!((command.left_pct, command.right_pct), (-20.0, 40.0));
        assert_eq!(rig.left.commands(), vec![Command::Spin(SpinDirection::Forward, -20.0)]);
        assert_eq!(rig.right.commands(), vec![Command::Spin(SpinDirection::Forward, 40.0)]);
    }

    #[test]
    fn pneumatic_events_reach_their_solenoid() {
        let mut rig = rig();
        rig.robot.dispatch(ControlEvent::ToggleLock);
        rig.robot.dispatch(ControlEvent::ToggleWing);
        rig.robot.dispatch(ControlEvent::ToggleWing);

        assert_eq!(rig.lock.commands(), vec![Command::Set(true)]);
        assert_eq!(rig.wing.commands(), vec![Command::Set(true), Command::Set(false)]);
    }

    #[test]
    fn puncher_events() {
        let mut rig = rig();
        rig.robot.dispatch(ControlEvent::TogglePuncher);
        rig.robot.dispatch(ControlEvent::RotatePuncher);

        assert!(!rig.robot.puncher.is_running());
        assert_eq!(rig.puncher.commands(), vec![
            Command::Spin(SpinDirection::Forward, 60.0),
            Command::SpinFor(SpinDirection::Forward, 750.0, 60.0),
        ]);
    }

    #[test]
    fn lift_events() {
        let mut rig = rig();
        rig.robot.dispatch(ControlEvent::LiftDown);
        assert_eq!(rig.robot.lift.state(), LiftState::MovingDown);
        rig.robot.dispatch(ControlEvent::LiftRelease);

        assert_eq!(rig.lift.commands(), vec![
            Command::Spin(SpinDirection::Reverse, 60.0),
            Command::Stop,
        ]);
    }

    #[test]
    fn lift_seek_events_need_calibration() {
        let mut rig = rig();
        rig.robot.dispatch(ControlEvent::LiftToPunch);
        assert!(rig.lift.commands().is_empty());

        rig.robot.initialize();
        rig.robot.dispatch(ControlEvent::LiftToTouch);
        assert_eq!(rig.lift.commands(), vec![Command::SpinTo(1520.0, 60.0)]);
    }

    #[test]
    fn autonomous_drives_both_sides() {
        let mut rig = rig();
        let mut settle = InstantSettle::default();

        block_on(rig.robot.autonomous(&mut settle));

        assert_eq!(settle.waited.len(), autonomous::ROUTINE.len());
        assert_eq!(rig.left.commands().len(), autonomous::ROUTINE.len());
        assert_eq!(rig.right.commands().len(), autonomous::ROUTINE.len());
    }

    #[test]
    fn autonomous_runs_through_yielding_waits() {
        let mut rig = rig();
        let mut settle = YieldingSettle::default();

        block_on(rig.robot.autonomous(&mut settle));

        assert_eq!(settle.waited.len(), autonomous::ROUTINE.len());
        assert_eq!(rig.right.commands().len(), autonomous::ROUTINE.len());
    }
}
