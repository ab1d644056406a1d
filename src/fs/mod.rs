//! Filesystem utilities for the V5 Brain.
//!
//! The only user of the SD card is the logger, which mirrors every log line
//! to a file so that problems seen during a match can be read back afterwards.
//!
//! # Example
//!
//! ```ignore
//! use log::{LevelFilter, info};
//! use punchbot::fs::logger;
//!
//! logger::init(LevelFilter::Debug).expect("Failed to initialize logger");
//! info!("Robot initialized");
//! ```

/// Console and SD card logging.
pub mod logger;
