//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (default network must exist)
//! - Validate RPC URLs
//! - Reject networks that cannot be forked
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProjectConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{ProjectConfig, CUSTOM_NETWORK_NAME};

/// A single semantic problem in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("default network '{0}' is not defined")]
    UnknownDefaultNetwork(String),

    #[error("network '{network}' has invalid url '{url}'")]
    InvalidUrl { network: String, url: String },

    #[error("network '{0}' is marked as a fork but has no url")]
    ForkWithoutUrl(String),

    #[error("network name '{0}' is reserved or empty")]
    ReservedName(String),
}

/// Validate a parsed project file.
pub fn validate_config(config: &ProjectConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(default) = &config.default_network {
        if !config.networks.contains_key(default) {
            errors.push(ValidationError::UnknownDefaultNetwork(default.clone()));
        }
    }

    for (name, network) in &config.networks {
        if name.trim().is_empty() || name == CUSTOM_NETWORK_NAME {
            errors.push(ValidationError::ReservedName(name.clone()));
        }

        match &network.url {
            Some(url) if url::Url::parse(url).is_err() => {
                errors.push(ValidationError::InvalidUrl {
                    network: name.clone(),
                    url: url.clone(),
                });
            }
            None if network.fork => errors.push(ValidationError::ForkWithoutUrl(name.clone())),
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
