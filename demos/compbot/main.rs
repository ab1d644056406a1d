use log::{info, warn};
use punchbot::fs::logger;
use vexide::prelude::*;

pub mod auton;
pub mod hardware;
pub mod opcontrol;

impl Compete for hardware::Bot {
    async fn autonomous(&mut self) { auton::main_auton(self).await; }

    async fn driver(&mut self) { opcontrol::opcontrol(self).await; }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    let mut bot = hardware::Bot::default_config(peripherals);

    if let Err(e) = logger::init(bot.config.log_level) {
        warn!("Logger already installed: {}", e);
    }

    bot.robot.initialize();
    info!("Waiting for competition control");

    bot.compete().await;
}
