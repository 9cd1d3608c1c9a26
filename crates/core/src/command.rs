//! The registry that owns a command's options and arguments.
//!
//! Registration derives flag spellings, seeds the parameter from the
//! environment and stores the record. A parser walking `argv` then looks
//! records up by flag or name and feeds them raw tokens; whatever it sets
//! overrides the environment because it runs later.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;
use log::{debug, warn};

use crate::declaration::{Arg, Opt};
use crate::env::{apply_env_from, EnvSource, ProcessEnv};
use crate::error::{Error, Result};
use crate::names::option_flags;
use crate::param::{Bindable, Param};
use crate::slot::Slot;
use crate::value::Value;

/// A registered option.
#[derive(Debug)]
pub struct OptionEntry {
    names: Vec<String>,
    desc: String,
    env_var: String,
    hide_value: bool,
    param: Param,
}

impl OptionEntry {
    /// The flag spellings, e.g. `["-f", "--force"]`.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    #[must_use]
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    #[must_use]
    pub fn hide_value(&self) -> bool {
        self.hide_value
    }

    #[must_use]
    pub fn param(&self) -> &Param {
        &self.param
    }

    pub fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }
}

/// A registered positional argument.
#[derive(Debug)]
pub struct ArgumentEntry {
    name: String,
    desc: String,
    env_var: String,
    hide_value: bool,
    param: Param,
}

impl ArgumentEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    #[must_use]
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    #[must_use]
    pub fn hide_value(&self) -> bool {
        self.hide_value
    }

    #[must_use]
    pub fn param(&self) -> &Param {
        &self.param
    }

    pub fn param_mut(&mut self) -> &mut Param {
        &mut self.param
    }
}

/// A command and the parameters declared on it.
pub struct Command {
    name: String,
    env: Box<dyn EnvSource>,
    options: Vec<OptionEntry>,
    options_idx: HashMap<String, usize>,
    arguments: IndexMap<String, ArgumentEntry>,
}

impl Command {
    /// Creates a command that seeds parameters from the process environment.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_env(name, ProcessEnv)
    }

    /// Creates a command that seeds parameters from `env` instead of the
    /// process environment.
    pub fn with_env(name: &str, env: impl EnvSource + 'static) -> Self {
        Self {
            name: name.to_string(),
            env: Box::new(env),
            options: Vec::new(),
            options_idx: HashMap::new(),
            arguments: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers an option and returns the handle to its storage.
    pub fn opt<T: Bindable>(&mut self, decl: Opt<T>) -> Slot<T> {
        let slot = Slot::new(decl.value);
        let param = T::bind(slot.clone());
        self.register_option(decl.name, decl.desc, decl.env_var, decl.hide_value, param);
        slot
    }

    /// Registers an argument and returns the handle to its storage.
    pub fn arg<T: Bindable>(&mut self, decl: Arg<T>) -> Slot<T> {
        let slot = Slot::new(decl.value);
        let param = T::bind(slot.clone());
        self.register_argument(decl.name, decl.desc, decl.env_var, decl.hide_value, param);
        slot
    }

    /// Registers an option backed by a caller-defined [`Value`].
    pub fn var_opt_with<V: Value + 'static>(&mut self, decl: Opt<V>) -> Slot<V> {
        let slot = Slot::new(decl.value);
        let param = Param::Var(Box::new(slot.clone()));
        self.register_option(decl.name, decl.desc, decl.env_var, decl.hide_value, param);
        slot
    }

    /// Registers an argument backed by a caller-defined [`Value`].
    pub fn var_arg_with<V: Value + 'static>(&mut self, decl: Arg<V>) -> Slot<V> {
        let slot = Slot::new(decl.value);
        let param = Param::Var(Box::new(slot.clone()));
        self.register_argument(decl.name, decl.desc, decl.env_var, decl.hide_value, param);
        slot
    }

    /// Defines a boolean option named `name` (e.g. `"f force"`).
    pub fn bool_opt(&mut self, name: &str, value: bool, desc: &str) -> Slot<bool> {
        self.opt(Opt::new(name, value, desc))
    }

    pub fn string_opt(&mut self, name: &str, value: &str, desc: &str) -> Slot<String> {
        self.opt(Opt::new(name, value.to_string(), desc))
    }

    pub fn int_opt(&mut self, name: &str, value: i64, desc: &str) -> Slot<i64> {
        self.opt(Opt::new(name, value, desc))
    }

    pub fn strings_opt(&mut self, name: &str, value: Vec<String>, desc: &str) -> Slot<Vec<String>> {
        self.opt(Opt::new(name, value, desc))
    }

    pub fn ints_opt(&mut self, name: &str, value: Vec<i64>, desc: &str) -> Slot<Vec<i64>> {
        self.opt(Opt::new(name, value, desc))
    }

    pub fn var_opt<V: Value + 'static>(&mut self, name: &str, value: V, desc: &str) -> Slot<V> {
        self.var_opt_with(Opt::new(name, value, desc))
    }

    pub fn bool_arg(&mut self, name: &str, value: bool, desc: &str) -> Slot<bool> {
        self.arg(Arg::new(name, value, desc))
    }

    pub fn string_arg(&mut self, name: &str, value: &str, desc: &str) -> Slot<String> {
        self.arg(Arg::new(name, value.to_string(), desc))
    }

    pub fn int_arg(&mut self, name: &str, value: i64, desc: &str) -> Slot<i64> {
        self.arg(Arg::new(name, value, desc))
    }

    pub fn strings_arg(&mut self, name: &str, value: Vec<String>, desc: &str) -> Slot<Vec<String>> {
        self.arg(Arg::new(name, value, desc))
    }

    pub fn ints_arg(&mut self, name: &str, value: Vec<i64>, desc: &str) -> Slot<Vec<i64>> {
        self.arg(Arg::new(name, value, desc))
    }

    pub fn var_arg<V: Value + 'static>(&mut self, name: &str, value: V, desc: &str) -> Slot<V> {
        self.var_arg_with(Arg::new(name, value, desc))
    }

    fn register_option(
        &mut self,
        name: String,
        desc: String,
        env_var: String,
        hide_value: bool,
        mut param: Param,
    ) {
        apply_env_from(&mut param, &env_var, self.env.as_ref());

        let names = option_flags(&name);
        let index = self.options.len();
        for flag in &names {
            if self.options_idx.insert(flag.clone(), index).is_some() {
                warn!("Option `{flag}` on command `{}` was declared twice", self.name);
            }
        }
        debug!("Registered option {names:?} on command `{}`", self.name);

        self.options.push(OptionEntry {
            names,
            desc,
            env_var,
            hide_value,
            param,
        });
    }

    fn register_argument(
        &mut self,
        name: String,
        desc: String,
        env_var: String,
        hide_value: bool,
        mut param: Param,
    ) {
        apply_env_from(&mut param, &env_var, self.env.as_ref());

        debug!("Registered argument `{name}` on command `{}`", self.name);
        let entry = ArgumentEntry {
            name: name.clone(),
            desc,
            env_var,
            hide_value,
            param,
        };
        if self.arguments.insert(name.clone(), entry).is_some() {
            warn!("Argument `{name}` on command `{}` was declared twice", self.name);
        }
    }

    /// Options in declaration order.
    ///
    /// An option whose every spelling was taken over by a later declaration
    /// is still listed here but can no longer be looked up.
    #[must_use]
    pub fn options(&self) -> &[OptionEntry] {
        &self.options
    }

    /// Arguments in declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &ArgumentEntry> {
        self.arguments.values()
    }

    /// Looks an option up by any of its spellings, e.g. `-f` or `--force`.
    #[must_use]
    pub fn option(&self, flag: &str) -> Option<&OptionEntry> {
        self.options_idx.get(flag).map(|&index| &self.options[index])
    }

    pub fn option_mut(&mut self, flag: &str) -> Option<&mut OptionEntry> {
        let index = *self.options_idx.get(flag)?;
        self.options.get_mut(index)
    }

    #[must_use]
    pub fn argument(&self, name: &str) -> Option<&ArgumentEntry> {
        self.arguments.get(name)
    }

    pub fn argument_mut(&mut self, name: &str) -> Option<&mut ArgumentEntry> {
        self.arguments.get_mut(name)
    }

    /// Feeds one token to the option spelled `flag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] when no option has that spelling, or
    /// [`Error::InvalidValue`] naming the flag when the token does not parse.
    pub fn set_option(&mut self, flag: &str, raw: &str) -> Result<()> {
        let entry = self
            .option_mut(flag)
            .ok_or_else(|| Error::UnknownOption(flag.to_string()))?;
        entry
            .param
            .set(raw)
            .map_err(|e| Error::invalid_value(flag, e))
    }

    /// Feeds a batch of tokens to the option spelled `flag`.
    ///
    /// # Errors
    ///
    /// Same as [`set_option`](Command::set_option).
    ///
    /// # Panics
    ///
    /// Panics when the option is not batch-capable.
    pub fn set_option_multi(&mut self, flag: &str, raws: &[&str]) -> Result<()> {
        let entry = self
            .option_mut(flag)
            .ok_or_else(|| Error::UnknownOption(flag.to_string()))?;
        entry
            .param
            .set_multi(raws)
            .map_err(|e| Error::invalid_value(flag, e))
    }

    /// Feeds one token to the argument called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] or [`Error::InvalidValue`].
    pub fn set_argument(&mut self, name: &str, raw: &str) -> Result<()> {
        let entry = self
            .argument_mut(name)
            .ok_or_else(|| Error::UnknownArgument(name.to_string()))?;
        entry
            .param
            .set(raw)
            .map_err(|e| Error::invalid_value(name, e))
    }

    /// Feeds a batch of tokens to the argument called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownArgument`] or [`Error::InvalidValue`].
    ///
    /// # Panics
    ///
    /// Panics when the argument is not batch-capable.
    pub fn set_argument_multi(&mut self, name: &str, raws: &[&str]) -> Result<()> {
        let entry = self
            .argument_mut(name)
            .ok_or_else(|| Error::UnknownArgument(name.to_string()))?;
        entry
            .param
            .set_multi(raws)
            .map_err(|e| Error::invalid_value(name, e))
    }

    /// Feeds one token to a parameter given by its bare name.
    ///
    /// `name` is tried as an option name first (`force` matches `--force`,
    /// `f` matches `-f`), then as an argument name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] when nothing matches, or
    /// [`Error::InvalidValue`] when the token does not parse.
    pub fn set_named(&mut self, name: &str, raw: &str) -> Result<()> {
        if let [flag] = option_flags(name).as_slice() {
            if self.options_idx.contains_key(flag) {
                return self.set_option(flag, raw);
            }
        }

        if self.arguments.contains_key(name) {
            return self.set_argument(name, raw);
        }

        Err(Error::UnknownParameter(name.to_string()))
    }
}

impl Debug for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Command")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
