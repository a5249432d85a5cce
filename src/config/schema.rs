use serde::{Deserialize, Serialize};

/// Top-level configuration file.
///
/// Example YAML:
/// ```yaml
/// output:
///   score_column: "Topsis Score"
///   rank_column: "Rank"
/// server:
///   bind: "0.0.0.0:5000"
///   upload_dir: "/var/lib/topsis/uploads"
///   result_dir: "/var/lib/topsis/results"
///   max_upload_bytes: 10485760
///   request_timeout: "30s"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Names of the two columns appended to the result table.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub score_column: String,
    pub rank_column: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            score_column: "Topsis Score".to_string(),
            rank_column: "Rank".to_string(),
        }
    }
}

/// Settings for `topsis-server`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,

    /// Directory where uploaded tables are stored
    pub upload_dir: String,

    /// Directory where result tables are written
    pub result_dir: String,

    /// Maximum accepted request body size
    pub max_upload_bytes: usize,

    /// Per-request timeout, humantime format (e.g. "30s", "2m")
    pub request_timeout: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            upload_dir: "uploads".to_string(),
            result_dir: "results".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
            request_timeout: "30s".to_string(),
        }
    }
}
