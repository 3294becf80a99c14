//! Common test utilities shared by the integration tests.
//!
//! This module provides:
//! - A journal recording logger and process calls in one ordered list
//! - Scripted processes with a fixed number of polls and final status
//! - Ordering assertions over the journal
//! - Temporary project fixtures with plan and config files

pub mod assertions;
pub mod fixtures;
pub mod journal;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use journal::*;
