//! Network selection subsystem.
//!
//! # Data Flow
//! ```text
//! ProjectConfig.networks + default_network
//!     → registry.rs (Networks: selector lookup, fork hint)
//!     → types.rs (ActiveNetwork: per-network fallback defaults)
//!     → context binder reads the active network after activation
//! ```
//!
//! # Design Decisions
//! - Registry is a trait so the binder can be driven by test doubles
//! - A bare URL that matches no configured network becomes `custom`
//! - Activation replaces the active network; definitions never change

pub mod registry;
pub mod types;

pub use registry::{NetworkRegistry, Networks};
pub use types::{ActiveNetwork, NetworkError, NetworkResult};
