//! Network types and error definitions.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::schema::NetworkConfig;

/// The selected network and the defaults it supplies to resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveNetwork {
    /// Configured name, or `custom` for a bare URL.
    pub name: String,

    /// JSON-RPC endpoint URL.
    pub url: Option<String>,

    /// Expected chain ID.
    pub chain_id: Option<u64>,

    /// Whether this network runs as a local fork.
    pub is_fork: bool,

    /// Password file for the default account.
    pub unsafe_password_file: Option<PathBuf>,

    /// Keystore name or path used when no account is given.
    pub default_account_name: Option<String>,

    /// Ask before broadcasting live transactions.
    pub prompt_live: Option<bool>,
}

impl ActiveNetwork {
    /// Build an active network from its configured definition.
    pub fn from_config(name: &str, config: &NetworkConfig) -> Self {
        Self {
            name: name.to_string(),
            url: config.url.clone(),
            chain_id: config.chain_id,
            is_fork: config.fork,
            unsafe_password_file: config.unsafe_password_file.clone(),
            default_account_name: config.default_account_name.clone(),
            prompt_live: config.prompt_live,
        }
    }

    /// An ad-hoc network reached by URL with no configured defaults.
    pub fn custom(url: &str) -> Self {
        Self {
            name: crate::config::schema::CUSTOM_NETWORK_NAME.to_string(),
            url: Some(url.to_string()),
            chain_id: None,
            is_fork: false,
            unsafe_password_file: None,
            default_account_name: None,
            prompt_live: None,
        }
    }
}

/// Errors raised while selecting a network.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Selector is neither a configured name nor a URL.
    #[error("unknown network '{0}': not a configured network name or an RPC URL")]
    UnknownNetwork(String),
}

/// Result type for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
