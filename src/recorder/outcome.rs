//! Tagged recording outcomes
//!
//! Start and stop results carry an explicit discriminator so callers branch
//! on the tag rather than on error semantics. Permission denial and stop
//! failure are routine outcomes here, not errors.

use serde::{Deserialize, Serialize};

/// Result of starting a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartOutcome {
    /// The session began
    Started,
    /// The caller lacks the OS permission required to record
    PermissionError,
}

/// Result of stopping a recording
///
/// Serializes as `{"status": ..., "result": ...}`, the shape the native
/// engines report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum StopOutcome {
    /// The session terminated and produced an artifact
    Success {
        /// Location of the recorded artifact
        #[serde(rename = "outputURL")]
        output_url: String,
    },
    /// The session terminated with a failure; the engine's detail is opaque
    /// and passed through uninterpreted
    Error(serde_json::Value),
}

impl StopOutcome {
    /// Whether this outcome carries an artifact
    pub fn is_success(&self) -> bool {
        matches!(self, StopOutcome::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_start_outcome_wire_values() {
        assert_eq!(
            serde_json::to_string(&StartOutcome::Started).unwrap(),
            "\"started\""
        );
        assert_eq!(
            serde_json::to_string(&StartOutcome::PermissionError).unwrap(),
            "\"permission_error\""
        );
    }

    #[test]
    fn test_stop_success_wire_shape() {
        let outcome = StopOutcome::Success {
            output_url: "/tmp/a.mp4".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "success", "result": {"outputURL": "/tmp/a.mp4"}})
        );
    }

    #[test]
    fn test_stop_error_detail_is_opaque() {
        let outcome = StopOutcome::Error(json!("denied"));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "error", "result": "denied"})
        );

        // Structured detail passes through untouched too
        let outcome = StopOutcome::Error(json!({"code": 13, "reason": "io"}));
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "error", "result": {"code": 13, "reason": "io"}})
        );
    }

    #[test]
    fn test_stop_outcome_round_trips_from_engine_json() {
        let parsed: StopOutcome =
            serde_json::from_str(r#"{"status":"success","result":{"outputURL":"/tmp/a.mp4"}}"#)
                .unwrap();

        assert!(parsed.is_success());
        assert_eq!(
            parsed,
            StopOutcome::Success {
                output_url: "/tmp/a.mp4".to_string()
            }
        );
    }
}
