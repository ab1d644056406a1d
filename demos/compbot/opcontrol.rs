use punchbot::hardware::controller;
use vexide::time::sleep;

use crate::hardware::Bot;

pub async fn opcontrol(bot: &mut Bot) {
    loop {
        let state = controller::read(&bot.controller);

        for event in bot.bindings.events(&controller::edges(&state)) {
            bot.robot.dispatch(event);
        }

        let (axis_a, axis_b) = controller::tank_axes(&state);
        bot.robot.drive_tick(axis_a, axis_b);

        sleep(bot.config.poll_interval).await;
    }
}
