//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (network, address, mode)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, filtered by RUST_LOG or config level)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr so command output on stdout stays machine-readable
//! - Addresses and keystore paths may be logged; keys and passwords never are

pub mod logging;

pub use logging::init_logging;
