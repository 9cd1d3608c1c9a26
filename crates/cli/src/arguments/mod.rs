//! Explicit parameter values given to the argbind CLI.
//!
//! Values arrive as `-p name=value` and are applied to a registered command
//! after environment fallback, so they take precedence over it.

pub mod processing;

// Re-exports for convenience
pub use processing::apply_assignments;
pub use processing::parse_assignment;
