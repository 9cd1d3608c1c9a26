//! Reading and validating parameter definition files.

use std::collections::HashSet;
use std::fs::File;

use log::debug;

use crate::definitions::{CommandDefinition, ParameterDefinition};
use crate::error::Error::{DuplicateName, EmptyName};
use crate::error::{Error, Result};
use crate::names::option_flags;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EmptyName);
    }

    Ok(())
}

fn validate_options(options: &[ParameterDefinition]) -> Result<()> {
    let mut flags = HashSet::new();

    for option in options {
        validate_name(&option.name)?;
        option.check_default()?;

        for flag in option_flags(&option.name) {
            if !flags.insert(flag.clone()) {
                return Err(DuplicateName(flag));
            }
        }
    }

    Ok(())
}

fn validate_arguments(arguments: &[ParameterDefinition]) -> Result<()> {
    let mut names = HashSet::new();

    for argument in arguments {
        validate_name(&argument.name)?;
        argument.check_default()?;

        if !names.insert(argument.name.as_str()) {
            return Err(DuplicateName(argument.name.clone()));
        }
    }

    Ok(())
}

/// Checks names and defaults of a command definition.
///
/// # Errors
///
/// Returns an error if:
/// - A name is empty
/// - Two options share a flag spelling, or two arguments share a name
/// - A default does not match its declared kind
pub fn validate_command_definition(definition: &CommandDefinition) -> Result<()> {
    validate_options(&definition.options)?;
    validate_arguments(&definition.arguments)
}

/// Loads and validates parameter definitions from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the YAML definitions file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or doesn't match the expected structure
/// - Validation fails (see [`validate_command_definition`])
pub fn get_parameter_definitions(path: &str) -> Result<CommandDefinition> {
    debug!("Reading parameter definitions from `{path}`");
    let reader = get_reader("parameter definitions", path)?;

    let definition: CommandDefinition = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "parameter definitions".to_string(),
            path.to_string(),
            e,
        )
    })?;

    validate_command_definition(&definition)?;

    Ok(definition)
}
