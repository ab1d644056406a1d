//! Waiting on motor moves by polling their encoders.

use std::time::Duration;

use vexide::time::sleep;

use crate::{
    actuator::{Actuator, Motion, Settle, poll_until_settled},
    config::RobotConfig,
};

/// Polls the actuator's position every `interval` until the move arrives.
pub struct PollSettle {
    pub interval: Duration,
}

impl PollSettle {
    pub fn from_config(config: &RobotConfig) -> Self {
        Self {
            interval: config.settle_interval,
        }
    }
}

impl Settle for PollSettle {
    async fn settle(&mut self, actuator: &dyn Actuator, motion: Motion) {
        let interval = self.interval;
        poll_until_settled(actuator, motion, || sleep(interval)).await;
    }
}
