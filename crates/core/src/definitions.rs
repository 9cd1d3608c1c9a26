use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::declaration::{Arg, Opt};
use crate::env::{EnvSource, ProcessEnv};
use crate::error::{Error, Result};
use crate::param::Bindable;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Bool,
    String,
    Int,
    Strings,
    Ints,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ParameterDefinition {
    /// For options, space-separated names without dashes.
    pub name: String,
    pub kind: ParameterKind,
    pub description: Option<String>,
    /// Space-separated environment variable names.
    pub env: Option<String>,
    pub default: Option<serde_yaml::Value>,
    #[serde(default)]
    pub hide_value: bool,
}

impl ParameterDefinition {
    /// Converts the declared default to `T`, or `T::default()` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefault`] when the default does not match `T`.
    pub fn default_value<T: DeserializeOwned + Default>(&self) -> Result<T> {
        let Some(default) = &self.default else {
            return Ok(T::default());
        };

        serde_yaml::from_value(default.clone()).map_err(|original| Error::InvalidDefault {
            name: self.name.clone(),
            original,
        })
    }

    /// Checks that the declared default matches the declared kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefault`] on mismatch.
    pub fn check_default(&self) -> Result<()> {
        match self.kind {
            ParameterKind::Bool => self.default_value::<bool>().map(drop),
            ParameterKind::String => self.default_value::<String>().map(drop),
            ParameterKind::Int => self.default_value::<i64>().map(drop),
            ParameterKind::Strings => self.default_value::<Vec<String>>().map(drop),
            ParameterKind::Ints => self.default_value::<Vec<i64>>().map(drop),
        }
    }

    fn declare(&self, command: &mut Command, positional: bool) -> Result<()> {
        match self.kind {
            ParameterKind::Bool => self.declare_as::<bool>(command, positional),
            ParameterKind::String => self.declare_as::<String>(command, positional),
            ParameterKind::Int => self.declare_as::<i64>(command, positional),
            ParameterKind::Strings => self.declare_as::<Vec<String>>(command, positional),
            ParameterKind::Ints => self.declare_as::<Vec<i64>>(command, positional),
        }
    }

    fn declare_as<T: Bindable + DeserializeOwned + Default>(
        &self,
        command: &mut Command,
        positional: bool,
    ) -> Result<()> {
        let value = self.default_value::<T>()?;
        let desc = self.description.clone().unwrap_or_default();
        let env_var = self.env.clone().unwrap_or_default();

        // The returned slots are dropped; values stay reachable through the command.
        if positional {
            command.arg(Arg {
                name: self.name.clone(),
                desc,
                env_var,
                value,
                hide_value: self.hide_value,
            });
        } else {
            command.opt(Opt {
                name: self.name.clone(),
                desc,
                env_var,
                value,
                hide_value: self.hide_value,
            });
        }

        Ok(())
    }
}

impl Display for ParameterDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.name)?;

        if let Some(desc) = &self.description {
            write!(formatter, " ({desc})")?;
        }

        Ok(())
    }
}

/// The parameters of one command, as read from a definitions file.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default)]
    pub options: Vec<ParameterDefinition>,
    #[serde(default)]
    pub arguments: Vec<ParameterDefinition>,
}

impl CommandDefinition {
    /// Builds a [`Command`] seeded from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefault`] when a default does not match its kind.
    pub fn register(&self) -> Result<Command> {
        self.register_with_env(ProcessEnv)
    }

    /// Builds a [`Command`] seeded from `env`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDefault`] when a default does not match its kind.
    pub fn register_with_env(&self, env: impl EnvSource + 'static) -> Result<Command> {
        let mut command = Command::with_env(&self.name, env);

        for option in &self.options {
            option.declare(&mut command, false)?;
        }
        for argument in &self.arguments {
            argument.declare(&mut command, true)?;
        }

        Ok(command)
    }
}

impl Display for CommandDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}
