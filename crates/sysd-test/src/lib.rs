//! Integration test infrastructure for the ops-sysd CLI helpers
//!
//! Provides:
//! - Switch database builders with linked Subsystem components
//! - Platform fixtures for common hardware layouts
//! - `show system` report inspection helpers

pub mod fixtures;
mod verification;

pub use fixtures::*;
pub use verification::*;
