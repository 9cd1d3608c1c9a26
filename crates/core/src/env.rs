//! Seeding parameters from environment variables.

use std::collections::HashMap;
use std::hash::BuildHasher;

use log::debug;

use crate::param::Param;

/// A read-only source of environment variables.
pub trait EnvSource {
    /// Returns the value of `name`, or `None` when it is unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// Variables whose value is not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Seeds `param` from the process environment.
///
/// See [`apply_env_from`].
pub fn apply_env<'a>(param: &mut Param, env_vars: &'a str) -> Option<&'a str> {
    apply_env_from(param, env_vars, &ProcessEnv)
}

/// Seeds `param` from the first usable variable named in `env_vars`.
///
/// `env_vars` is a space-separated list of variable names, tried left to
/// right. Unset and empty variables are skipped. Batch-capable parameters
/// receive the value split on commas through [`Param::set_multi`], others
/// receive it whole through [`Param::set`]. The first variable that applies
/// without error wins and the rest are ignored.
///
/// Failures are never reported: when nothing applies, the parameter keeps
/// whatever it held before. Returns the name of the variable that was applied.
pub fn apply_env_from<'a, E: EnvSource + ?Sized>(
    param: &mut Param,
    env_vars: &'a str,
    source: &E,
) -> Option<&'a str> {
    let is_batch = param.is_batch();

    for name in env_vars.split_whitespace() {
        let Some(value) = source.var(name) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let result = if is_batch {
            let values: Vec<&str> = value.split(',').collect();
            param.set_multi(&values)
        } else {
            param.set(&value)
        };

        match result {
            Ok(()) => {
                debug!("Applied environment variable `{name}` to {} parameter", param.kind());
                return Some(name);
            }
            Err(e) => debug!("Ignoring environment variable `{name}`: {e}"),
        }
    }

    None
}
