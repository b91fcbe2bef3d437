//! Recording engine trait and errors
//!
//! The engine is the platform-native component that performs the actual
//! capture and encoding. This crate only drives it; everything behind this
//! trait (permission prompts, codec selection, file output) is the engine's
//! concern.

use async_trait::async_trait;
use thiserror::Error;

use super::config::RecordingConfig;
use super::outcome::{StartOutcome, StopOutcome};

/// Errors surfaced by a recording engine
#[derive(Error, Debug)]
pub enum RecordingError {
    /// The engine rejected the configuration handed to `setup`
    #[error("Engine rejected configuration: {0}")]
    Setup(String),

    /// The engine failed outside the tagged outcome contract
    /// (e.g. a native crash surfaced through the async channel)
    #[error("Engine failure: {0}")]
    Engine(String),
}

/// Result type alias using RecordingError
pub type RecordingResult<T> = Result<T, RecordingError>;

/// Platform-native recording backend
///
/// Note the outcome contract: permission denial and stop failure are
/// routine results carried in [`StartOutcome`]/[`StopOutcome`] tags, not
/// errors. `Err` is reserved for setup rejections and failures outside that
/// contract. Call sequencing (rejecting a stop while idle, a second start
/// while recording) is also the engine's responsibility.
#[async_trait]
pub trait RecordingEngine: Send + Sync {
    /// Accept the effective configuration for the next session.
    ///
    /// The engine is the validation boundary: out-of-range values reach it
    /// unchanged and it may reject them here.
    fn setup(&self, config: RecordingConfig) -> RecordingResult<()>;

    /// Start recording with the configuration from the last `setup` call.
    async fn start_recording(&self) -> RecordingResult<StartOutcome>;

    /// Start recording the entire screen, with no single-app option.
    ///
    /// Only called when [`supports_entire_screen_capture`] holds for the
    /// current platform.
    ///
    /// [`supports_entire_screen_capture`]: crate::platform::supports_entire_screen_capture
    async fn start_recording_entire_screen(&self) -> RecordingResult<StartOutcome>;

    /// Stop the current recording.
    async fn stop_recording(&self) -> RecordingResult<StopOutcome>;

    /// Release temporary recording artifacts.
    ///
    /// Resolves to an engine-defined status string.
    async fn clean(&self) -> RecordingResult<String>;
}
