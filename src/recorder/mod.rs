//! Recording session module
//!
//! This module implements the session control surface:
//! - RecordingEngine trait for platform-native recording backends
//! - RecordScreenController to drive the session lifecycle
//! - Configuration assembly and tagged outcome types

pub mod config;
pub mod controller;
pub mod engine;
pub mod outcome;

pub use config::{RecordScreenConfig, RecordingConfig, DEFAULT_BITRATE, DEFAULT_FRAME_RATE};
pub use controller::RecordScreenController;
pub use engine::{RecordingEngine, RecordingError, RecordingResult};
pub use outcome::{StartOutcome, StopOutcome};
