//! # bb-protocol
//!
//! Shared data models for build-blocks.
//!
//! This crate defines the plain data structures exchanged between the core
//! and its hosts:
//! - Build plan files (YAML list of blocks)
//! - Runner and logging settings from `bb.toml`
//! - Completion status reported by build processes
//! - Block events emitted to progress log sinks
//!
//! ## Modules
//!
//! - [`config_models`]: Settings from `bb.toml`
//! - [`plan_models`]: Build plan definitions
//! - [`process_models`]: Completion status and lifecycle state
//! - [`ipc`]: Block events sent to log consumers
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and chrono
//! - Independent compilation: No dependencies on other build-blocks crates

pub mod config_models;
pub mod ipc;
pub mod plan_models;
pub mod process_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use ipc::*;
pub use plan_models::*;
pub use process_models::*;
