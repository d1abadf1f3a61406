//! # bx_app
//!
//! Shared utilities for applications built on the public API client

pub mod config_loader;
pub mod tracing_setup;
