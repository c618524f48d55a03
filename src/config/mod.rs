//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! deployctx.toml (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProjectConfig (validated, immutable)
//!     → network::Networks (active network + per-network defaults)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the active network lives in the registry
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{KeystoreConfig, NetworkConfig, ObservabilityConfig, ProjectConfig};
