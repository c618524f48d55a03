//! Network registry: which network is active and how selectors map to networks.
//!
//! # Responsibilities
//! - Resolve a selector (name or RPC URL) to a network definition
//! - Apply the fork hint from the command line
//! - Track the single active network for this process

use std::collections::BTreeMap;

use crate::config::schema::{NetworkConfig, ProjectConfig};
use crate::network::types::{ActiveNetwork, NetworkError, NetworkResult};

/// Read/activate access to the configured networks.
pub trait NetworkRegistry {
    /// The currently active network, if any.
    fn active_network(&self) -> Option<&ActiveNetwork>;

    /// Activate the network named by `selector` (a name or an RPC URL).
    ///
    /// `is_fork`, when set, overrides the network's configured fork flag.
    fn set_active_network(&mut self, selector: &str, is_fork: Option<bool>) -> NetworkResult<()>;
}

/// Registry backed by the project file.
#[derive(Debug, Clone, Default)]
pub struct Networks {
    definitions: BTreeMap<String, NetworkConfig>,
    active: Option<ActiveNetwork>,
}

impl Networks {
    /// Build a registry from a project file, activating its default network.
    pub fn from_config(config: &ProjectConfig) -> Self {
        let active = config.default_network.as_ref().and_then(|name| {
            config
                .networks
                .get(name)
                .map(|network| ActiveNetwork::from_config(name, network))
        });

        Self {
            definitions: config.networks.clone(),
            active,
        }
    }

    /// All configured networks, sorted by name.
    pub fn list(&self) -> Vec<ActiveNetwork> {
        self.definitions
            .iter()
            .map(|(name, network)| ActiveNetwork::from_config(name, network))
            .collect()
    }

    fn lookup(&self, selector: &str) -> NetworkResult<ActiveNetwork> {
        if let Some(network) = self.definitions.get(selector) {
            return Ok(ActiveNetwork::from_config(selector, network));
        }

        if url::Url::parse(selector).is_err() {
            return Err(NetworkError::UnknownNetwork(selector.to_string()));
        }

        let by_url = self
            .definitions
            .iter()
            .find(|(_, network)| network.url.as_deref() == Some(selector));

        Ok(match by_url {
            Some((name, network)) => ActiveNetwork::from_config(name, network),
            None => ActiveNetwork::custom(selector),
        })
    }
}

impl NetworkRegistry for Networks {
    fn active_network(&self) -> Option<&ActiveNetwork> {
        self.active.as_ref()
    }

    fn set_active_network(&mut self, selector: &str, is_fork: Option<bool>) -> NetworkResult<()> {
        let mut network = self.lookup(selector)?;
        if let Some(fork) = is_fork {
            network.is_fork = fork;
        }

        tracing::info!(
            network = %network.name,
            fork = network.is_fork,
            "Network activated"
        );

        self.active = Some(network);
        Ok(())
    }
}
