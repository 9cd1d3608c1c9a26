//! Caller-defined parameter types.
//!
//! Implement [`Value`] for a type to register it with
//! [`Command::var_opt`](crate::command::Command::var_opt) or
//! [`Command::var_arg`](crate::command::Command::var_arg).

use std::fmt::Display;

use crate::error::Result;
use crate::slot::Slot;

/// The minimal contract for a user-extensible parameter.
///
/// Only [`set`](Value::set) and [`Display`] are required. Types that behave
/// like a boolean toggle or accept a whole batch of values override the
/// matching capability methods.
///
/// # Examples
///
/// ```
/// use std::fmt;
/// use argbind_core::error::{Error, Result};
/// use argbind_core::value::Value;
///
/// struct Level(u8);
///
/// impl fmt::Display for Level {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Value for Level {
///     fn set(&mut self, raw: &str) -> Result<()> {
///         self.0 = raw.parse().map_err(Error::custom)?;
///         Ok(())
///     }
/// }
/// ```
pub trait Value: Display {
    /// Interprets one token, leaving `self` untouched on error.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a valid representation of the type.
    fn set(&mut self, raw: &str) -> Result<()>;

    /// Whether the value is a zero-argument toggle.
    fn is_toggle(&self) -> bool {
        false
    }

    /// Whether the value accepts a batch through [`set_multi`](Value::set_multi).
    fn is_batch(&self) -> bool {
        false
    }

    /// Replaces the value with a batch of tokens.
    ///
    /// Only called when [`is_batch`](Value::is_batch) returns `true`.
    ///
    /// # Errors
    ///
    /// Returns an error when any token is invalid.
    ///
    /// # Panics
    ///
    /// The provided implementation always panics: a caller reaching it has
    /// misclassified the parameter.
    fn set_multi(&mut self, _raws: &[&str]) -> Result<()> {
        panic!("set_multi called on a value that does not accept batches");
    }
}

impl<V: Value> Value for Slot<V> {
    fn set(&mut self, raw: &str) -> Result<()> {
        self.borrow_mut().set(raw)
    }

    fn is_toggle(&self) -> bool {
        self.borrow().is_toggle()
    }

    fn is_batch(&self) -> bool {
        self.borrow().is_batch()
    }

    fn set_multi(&mut self, raws: &[&str]) -> Result<()> {
        self.borrow_mut().set_multi(raws)
    }
}

impl<V: Value> Display for Slot<V> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&*self.borrow(), formatter)
    }
}
