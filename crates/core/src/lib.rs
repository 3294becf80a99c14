//! # bb-core
//!
//! Composite build processes with block-scoped progress logging.
//!
//! This crate provides:
//! - The `start / poll / finish` build process abstraction
//! - A builder assembling processes into one sequential composite, each
//!   entry wrapped in its own log block
//! - Progress loggers (tracing and channel backed)
//! - A polling runner, configuration loading and build plan support for
//!   hosts
//!
//! ## Modules
//!
//! - [`process`]: Build process trait and basic process kinds
//! - [`composite`]: Composite process, its builder and log blocks
//! - [`logger`]: Progress logger trait and implementations
//! - [`runner`]: Polling driver for build processes
//! - [`config`]: `bb.toml` and build plan loading
//! - [`plan`]: Build plan to composite process conversion
//! - [`logging`]: Tracing subscriber setup

pub mod composite;
pub mod config;
pub mod logger;
pub mod logging;
pub mod plan;
pub mod process;
pub mod runner;
