//! Cassette data structures for recording and replaying git interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name, currently always `"git"`.
    pub port: String,
    /// Method name invoked on the port (e.g. `"stage"`).
    pub method: String,
    /// Arguments passed to the method.
    pub input: serde_json::Value,
    /// Result returned, as `{"ok": value}` or `{"err": message}`.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Version of `gh-image` that produced the recording.
    pub version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a YAML cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error string if the file cannot be read or parsed.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_cassette() {
        let yaml = r#"
name: upload-fixture
recorded_at: 2025-03-15T14:30:00Z
version: 0.1.0
interactions:
  - seq: 0
    port: git
    method: resolve_root
    input: null
    output:
      ok: /work/repo
  - seq: 1
    port: git
    method: stage
    input:
      root: /work/repo
      path: images/shot.png
    output:
      err: "Command failed: git add -- images/shot.png"
"#;
        let cassette: Cassette = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(cassette.name, "upload-fixture");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].output, json!({"ok": "/work/repo"}));
        assert_eq!(cassette.interactions[1].input["path"], json!("images/shot.png"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
