//! # Octopus CLI UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction for the CLI.
//!
//! - **`prompts`**: the `Asker` trait and its `dialoguer`-backed implementation,
//!   used for input, selection, confirmation and password prompts.
//!
//! Tabular output lives in `common::output`.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::ui::prompts::{Asker, InputQuestion};
//!
//! # fn run_example(asker: &dyn Asker) -> crate::core::error::Result<()> {
//! let name = asker.input(&InputQuestion::new("Name", "A unique name.").required())?;
//! if asker.confirm(&format!("Delete {name}?"), false)? {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```
//!

pub mod prompts;
