//! Recording session controller
//!
//! Drives one recording session at a time: assembles the effective
//! configuration, picks the start strategy the platform supports, and relays
//! the engine's tagged outcomes to the caller unmodified.

use std::sync::Arc;

use crate::platform::{supports_entire_screen_capture, DisplayMetrics, PlatformIdentity};

use super::config::{RecordScreenConfig, RecordingConfig};
use super::engine::{RecordingEngine, RecordingResult};
use super::outcome::{StartOutcome, StopOutcome};

/// Controls a single recording session against an injected engine
///
/// The controller is a stateless relay: it keeps nothing between calls, and
/// the `Idle -> Recording -> Idle` lifecycle is enforced by the engine, not
/// here. Constructing it with fakes for the three collaborators is the
/// intended way to test anything built on top of it.
pub struct RecordScreenController {
    engine: Arc<dyn RecordingEngine>,
    metrics: Arc<dyn DisplayMetrics>,
    platform: Arc<dyn PlatformIdentity>,
}

impl RecordScreenController {
    /// Create a controller over the given collaborators
    pub fn new(
        engine: Arc<dyn RecordingEngine>,
        metrics: Arc<dyn DisplayMetrics>,
        platform: Arc<dyn PlatformIdentity>,
    ) -> Self {
        Self {
            engine,
            metrics,
            platform,
        }
    }

    /// Assemble the effective configuration and hand it to the engine.
    ///
    /// Width/height are read from the display metrics at this moment; a
    /// setup rejection from the engine propagates unmodified.
    fn setup(&self, overrides: &RecordScreenConfig) -> RecordingResult<()> {
        let display = self.metrics.display_size();
        let config = RecordingConfig::assemble(overrides, display);
        tracing::debug!(?config, "Configuring recording session");
        self.engine.setup(config)
    }

    /// Start recording
    pub async fn start_recording(
        &self,
        overrides: RecordScreenConfig,
    ) -> RecordingResult<StartOutcome> {
        self.setup(&overrides)?;
        tracing::info!("Starting recording");
        self.engine.start_recording().await
    }

    /// Start recording the entire screen, blocking the "Single app" option
    /// where the platform supports it (Android 14+ / API level 34+).
    ///
    /// Below that API level, and on every other platform, this falls back to
    /// the same code path as [`start_recording`](Self::start_recording): the
    /// recording still covers the whole screen, the OS may just offer a
    /// single-app choice in its capture prompt.
    pub async fn start_recording_entire_screen(
        &self,
        overrides: RecordScreenConfig,
    ) -> RecordingResult<StartOutcome> {
        self.setup(&overrides)?;

        let os = self.platform.os();
        let version = self.platform.version();
        if supports_entire_screen_capture(os, version) {
            tracing::info!(?os, version, "Starting entire-screen recording");
            self.engine.start_recording_entire_screen().await
        } else {
            tracing::info!(?os, version, "Entire-screen capture unavailable, using general start");
            self.engine.start_recording().await
        }
    }

    /// Stop recording
    ///
    /// The engine's tagged response is passed through uninterpreted.
    pub async fn stop_recording(&self) -> RecordingResult<StopOutcome> {
        tracing::info!("Stopping recording");
        self.engine.stop_recording().await
    }

    /// Release temporary recording artifacts
    pub async fn clean(&self) -> RecordingResult<String> {
        tracing::info!("Cleaning recording artifacts");
        self.engine.clean().await
    }
}
