use punchbot::hardware::settle::PollSettle;

use crate::hardware::Bot;

pub async fn main_auton(bot: &mut Bot) {
    let mut settle = PollSettle::from_config(&bot.config);
    bot.robot.autonomous(&mut settle).await;
    bot.robot.drive.stop();
}
