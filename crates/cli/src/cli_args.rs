//! Command-line argument parsing for the `argbind` binary.

use clap::Parser;

/// Command-line arguments for the argbind CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use argbind_cli::cli_args::Args;
///
/// let args = Args::parse_from(["argbind", "-c", "params.yml", "-p", "force=true"]);
/// assert_eq!(args.parameters, vec!["force=true"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the parameter definitions YAML.
    ///
    /// If not provided, defaults to `~/.argbind/params.yml`.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Explicit parameter values in the format name=value.
    ///
    /// The name is an option name without dashes or an argument name.
    /// Repeated parameters accept the flag several times and append each value.
    ///
    /// # Examples
    /// ```bash
    /// argbind -p force=true -p tag=a -p tag=b
    /// ```
    #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
    pub parameters: Vec<String>,

    /// Print the values of parameters declared with `hide_value`.
    #[arg(long, action)]
    pub show_hidden: bool,
}
