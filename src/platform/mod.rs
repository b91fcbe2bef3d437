//! Platform identity and display metrics
//!
//! Platform-agnostic seams for the two ambient facts the recorder needs:
//! which OS it is running on (with its numeric version) and how big the
//! current display is. Both are injected so the session controller stays a
//! pure function of its inputs.

use serde::{Deserialize, Serialize};

/// Minimum Android API level with `MediaProjectionConfig`, which is what
/// allows blocking the "Single app" recording option.
pub const ENTIRE_SCREEN_MIN_API: u32 = 34;

/// Operating system identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Macos,
    Windows,
    Web,
}

/// Current display size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySize {
    pub width: u32,
    pub height: u32,
}

/// Read access to the platform the process is running on
pub trait PlatformIdentity: Send + Sync {
    /// Operating system identifier
    fn os(&self) -> Platform;

    /// Numeric platform version (API level on Android, major version elsewhere)
    fn version(&self) -> u32;
}

/// Read access to the current display metrics
pub trait DisplayMetrics: Send + Sync {
    /// Current display size, queried at call time
    fn display_size(&self) -> DisplaySize;
}

/// Whether the restricted entire-screen start strategy is available.
///
/// Only Android exposes a "Single app" recording option to block; the API to
/// block it shipped with API level 34. Everywhere else the general start
/// strategy already records the entire screen.
pub fn supports_entire_screen_capture(os: Platform, version: u32) -> bool {
    os == Platform::Android && version >= ENTIRE_SCREEN_MIN_API
}
