//! # Octopus CLI Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components every command
//! builds on.
//!
//! ## Architecture
//!
//! - `config`: global flags, environment variables and the config file, merged
//!   into `Settings`
//! - `error`: the `OctoError` type and the crate-wide `Result` alias
//! - `factory`: `ClientFactory`, which turns settings into authenticated API
//!   handles and resolves the active space
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config::Settings;
//! use crate::core::error::{OctoError, Result};
//! use crate::core::factory::ClientFactory;
//! ```
//!
pub mod config;
pub mod error;
pub mod factory;
