//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::registry::ReplaceIdPolicy;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3333;

/// Default location of the seed dataset
pub const DEFAULT_SEED_PATH: &str = "data/students.json";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// JSON file holding the initial student records
    pub seed_path: PathBuf,
    /// How `id` is treated when a replacement body carries a different one
    pub replace_id_policy: ReplaceIdPolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3333)
    /// - `STUDENTS_SEED_PATH` - Seed file (default: data/students.json)
    /// - `REPLACE_ID_POLICY` - `body` or `path` (default: body)
    ///
    /// Values that fail to parse fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            seed_path: env::var("STUDENTS_SEED_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH)),
            replace_id_policy: env::var("REPLACE_ID_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            seed_path: PathBuf::from(DEFAULT_SEED_PATH),
            replace_id_policy: ReplaceIdPolicy::KeepBodyId,
        }
    }
}
