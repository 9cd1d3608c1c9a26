//! Argbind Core Library
//!
//! This crate binds typed command-line parameters to caller-owned storage.
//! A program declares options (`-f`/`--force`) and positional arguments with
//! a concrete type, receives a [`Slot`](slot::Slot) for each, and the slot is
//! populated from, in priority order, explicit command-line text, environment
//! variables, and the declared default.
//!
//! # Key Features
//!
//! - **Typed Parameters**: boolean, string, integer, repeated string and
//!   repeated integer kinds, plus caller-defined [`Value`](value::Value) types
//! - **Environment Fallback**: parameters are seeded from the first usable
//!   variable of a space-separated list
//! - **Flag Derivation**: `"f force"` becomes `-f` and `--force`
//! - **Definition Files**: declare a command's parameters in YAML
//!
//! # Examples
//!
//! ```
//! use argbind_core::command::Command;
//!
//! let mut cmd = Command::new("deploy");
//! let force = cmd.bool_opt("f force", false, "Skip confirmation");
//! let targets = cmd.strings_arg("TARGETS", vec![], "Hosts to deploy to");
//!
//! // A parser walking argv feeds tokens to the registered parameters.
//! cmd.set_option("--force", "true")?;
//! cmd.set_argument("TARGETS", "web-01")?;
//!
//! assert!(force.get());
//! assert_eq!(targets.get(), vec!["web-01"]);
//! # Ok::<(), argbind_core::error::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod declaration;
pub mod definitions;
pub mod env;
pub mod error;
pub mod file_handling;
pub mod names;
pub mod param;
pub mod slot;
pub mod value;
