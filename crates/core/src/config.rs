//! Configuration path utilities for argbind.

/// Default path for the parameter definitions file
const DEFAULT_DEFINITIONS_PATH: &str = "~/.argbind/params.yml";

/// Resolves the parameter definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use argbind_core::config::get_definitions_path;
///
/// let custom_path = get_definitions_path(Some("/path/to/params.yml"));
/// assert_eq!(custom_path, "/path/to/params.yml");
/// ```
#[must_use]
pub fn get_definitions_path(definitions_path_arg: Option<&str>) -> String {
    let definitions_path = definitions_path_arg.unwrap_or(DEFAULT_DEFINITIONS_PATH);

    shellexpand::tilde(definitions_path).to_string()
}
