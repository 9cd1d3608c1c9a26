//! Argbind CLI Library
//!
//! This crate provides the `argbind` binary: it loads a command's parameter
//! definitions from YAML, registers them (seeding values from the
//! environment), applies explicit `name=value` assignments and prints the
//! resolved parameters.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`arguments`]: Applying `name=value` assignments to a registered command
//! - [`listing`]: Rendering the resolved parameters
//!
//! # Examples
//!
//! ```bash
//! # Show every parameter with its value from the environment or default
//! argbind -c ./params.yml
//!
//! # Override values explicitly
//! argbind -c ./params.yml -p force=true -p tag=a -p tag=b
//!
//! # Trace where values come from
//! RUST_LOG=debug argbind -c ./params.yml
//! ```

pub mod arguments;
pub mod cli_args;
pub mod listing;
