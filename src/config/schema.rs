//! Configuration schema definitions.
//!
//! This module defines the project file structure (`deployctx.toml`).
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Name given to networks activated from a bare RPC URL.
pub const CUSTOM_NETWORK_NAME: &str = "custom";

/// Root configuration for a project.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Network activated when no selector is given on the command line.
    pub default_network: Option<String>,

    /// Keystore storage settings.
    pub keystores: KeystoreConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Named network definitions.
    pub networks: BTreeMap<String, NetworkConfig>,
}

/// A named network and the defaults it contributes to resolution.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub url: Option<String>,

    /// Expected chain ID, informational only.
    pub chain_id: Option<u64>,

    /// Run against a local fork of this network instead of broadcasting.
    pub fork: bool,

    /// Keystore name or path used when no account is given.
    pub default_account_name: Option<String>,

    /// Plain-text password file for the default account.
    pub unsafe_password_file: Option<PathBuf>,

    /// Ask before broadcasting live transactions. Unset means yes.
    pub prompt_live: Option<bool>,
}

/// Keystore directory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeystoreConfig {
    /// Directory holding named keystore files.
    pub path: PathBuf,
}

impl Default for KeystoreConfig {
    fn default() -> Self {
        let base = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(".deployctx").join("keystores"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Expand a leading `~/` to the user's home directory.
///
/// Paths without the prefix, or when no home directory is known, are
/// returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
