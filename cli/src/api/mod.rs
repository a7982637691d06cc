//! # Octopus REST API Layer
//!
//! File: cli/src/api/mod.rs
//!
//! ## Overview
//!
//! A thin, typed wrapper over the parts of the Octopus REST API the CLI uses.
//! It owns the wire format (PascalCase JSON, sensitive values, error
//! documents) so command handlers only deal with Rust types.
//!
//! - **`client`**: `ApiClient`, the authenticated handle (system- or space-scoped).
//! - **`spaces`**: server-wide space listing.
//! - **`environments`**: listing and deleting environments in a space.
//! - **`accounts`**: listing accounts and creating SSH key-pair accounts.
//!

pub mod accounts;
pub mod client;
pub mod environments;
pub mod spaces;

pub use client::ApiClient;
pub use spaces::Space;
