//! Declaration records for options and arguments.
//!
//! Fill one in and hand it to [`Command::opt`](crate::command::Command::opt)
//! or [`Command::arg`](crate::command::Command::arg). The `value` field is the
//! default; it is what the caller observes unless an environment variable or
//! the command line overrides it.

/// Describes an option.
///
/// # Examples
///
/// ```
/// use argbind_core::command::Command;
/// use argbind_core::declaration::Opt;
///
/// let mut cmd = Command::new("app");
/// let force = cmd.opt(Opt {
///     name: "f force".to_string(),
///     desc: "Force the operation".to_string(),
///     env_var: "APP_FORCE".to_string(),
///     value: false,
///     ..Default::default()
/// });
/// assert!(cmd.option("--force").is_some());
/// # let _ = force;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Opt<T> {
    /// Space-separated option names *without* dashes, e.g. `f force`.
    ///
    /// One-letter names are spelled with a single dash, the others with two.
    pub name: String,
    /// Shown in help messages.
    pub desc: String,
    /// Space-separated environment variable names used to initialize the option.
    ///
    /// For repeated kinds the variable holds a comma-separated list.
    pub env_var: String,
    /// The initial value.
    pub value: T,
    /// Do not display the current value in help messages.
    pub hide_value: bool,
}

/// Describes a positional argument.
#[derive(Debug, Clone, Default)]
pub struct Arg<T> {
    /// The argument name as shown in help messages.
    pub name: String,
    pub desc: String,
    /// Space-separated environment variable names used to initialize the argument.
    pub env_var: String,
    pub value: T,
    pub hide_value: bool,
}

pub type BoolOpt = Opt<bool>;
pub type StringOpt = Opt<String>;
pub type IntOpt = Opt<i64>;
pub type StringsOpt = Opt<Vec<String>>;
pub type IntsOpt = Opt<Vec<i64>>;

pub type BoolArg = Arg<bool>;
pub type StringArg = Arg<String>;
pub type IntArg = Arg<i64>;
pub type StringsArg = Arg<Vec<String>>;
pub type IntsArg = Arg<Vec<i64>>;

impl<T> Opt<T> {
    /// A record with only the name, default and description filled in.
    pub fn new(name: &str, value: T, desc: &str) -> Self {
        Self {
            name: name.to_string(),
            desc: desc.to_string(),
            env_var: String::new(),
            value,
            hide_value: false,
        }
    }
}

impl<T> Arg<T> {
    /// A record with only the name, default and description filled in.
    pub fn new(name: &str, value: T, desc: &str) -> Self {
        Self {
            name: name.to_string(),
            desc: desc.to_string(),
            env_var: String::new(),
            value,
            hide_value: false,
        }
    }
}
