//! record-screen - single-session screen recording control.
//!
//! This crate is the control surface for screen recording, not the recorder
//! itself: capture, encoding, and file output live behind the
//! [`RecordingEngine`] trait, implemented per platform by the embedding
//! application. What this crate owns is the session logic: it assembles an
//! effective configuration from defaults, live display metrics, and caller
//! overrides, then picks the start strategy the platform supports and
//! relays the engine's tagged outcomes to the caller unchanged.
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use record_screen::{RecordScreenConfig, RecordScreenController};
//! # async fn demo(
//! #     engine: Arc<dyn record_screen::RecordingEngine>,
//! #     metrics: Arc<dyn record_screen::DisplayMetrics>,
//! #     platform: Arc<dyn record_screen::PlatformIdentity>,
//! # ) -> record_screen::RecordingResult<()> {
//! let controller = RecordScreenController::new(engine, metrics, platform);
//!
//! let started = controller
//!     .start_recording(RecordScreenConfig {
//!         frame_rate: Some(30),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let stopped = controller.stop_recording().await?;
//! # Ok(())
//! # }
//! ```

pub mod platform;
pub mod recorder;

pub use platform::{
    supports_entire_screen_capture, DisplayMetrics, DisplaySize, Platform, PlatformIdentity,
    ENTIRE_SCREEN_MIN_API,
};
pub use recorder::{
    RecordScreenConfig, RecordScreenController, RecordingConfig, RecordingEngine, RecordingError,
    RecordingResult, StartOutcome, StopOutcome, DEFAULT_BITRATE, DEFAULT_FRAME_RATE,
};
