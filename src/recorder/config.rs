//! Recording configuration
//!
//! Defines the caller-facing override set and the effective configuration
//! assembled from defaults, display metrics, and overrides.

use serde::{Deserialize, Serialize};

use crate::platform::DisplaySize;

/// Default frames per second
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Default bitrate, sized for 1080p at 144 bits per pixel per second
pub const DEFAULT_BITRATE: u32 = 1920 * 1080 * 144;

/// Caller-supplied recording overrides
///
/// Every field is optional; anything left `None` takes the documented
/// default. Width and height are deliberately absent: they are measured from
/// the display at start time and cannot be overridden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScreenConfig {
    /// Frames per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rate: Option<u32>,

    /// Video bitrate in bits per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,

    /// Whether to capture the microphone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microphone_enabled: Option<bool>,
}

/// Effective settings handed to the recording engine for one session
///
/// Built fresh on every start call and discarded after `setup`; never
/// persisted. No range validation happens here, the engine is the
/// validation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingConfig {
    /// Whether to capture the microphone
    pub microphone_enabled: bool,

    /// Frames per second
    pub frame_rate: u32,

    /// Video bitrate in bits per second
    pub bitrate: u32,

    /// Display width in pixels, measured at start time
    pub width: u32,

    /// Display height in pixels, measured at start time
    pub height: u32,
}

impl RecordingConfig {
    /// Assemble the effective configuration for one session.
    ///
    /// Precedence: caller overrides beat defaults, but `display` is
    /// authoritative for width/height regardless of anything else.
    pub fn assemble(overrides: &RecordScreenConfig, display: DisplaySize) -> Self {
        Self {
            microphone_enabled: overrides.microphone_enabled.unwrap_or(true),
            frame_rate: overrides.frame_rate.unwrap_or(DEFAULT_FRAME_RATE),
            bitrate: overrides.bitrate.unwrap_or(DEFAULT_BITRATE),
            width: display.width,
            height: display.height,
        }
    }
}
