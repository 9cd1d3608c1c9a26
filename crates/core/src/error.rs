use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid boolean value: \"{}\"", _0)]
    InvalidBool(String),

    #[error("Invalid integer value \"{}\": {}", .raw, .source)]
    InvalidInt { raw: String, source: ParseIntError },

    #[error("Invalid element \"{}\" in list: {}", .raw, .source)]
    InvalidBatch { raw: String, source: Box<Error> },

    #[error("{}", _0)]
    Custom(String),

    #[error("Unknown option: `{}`", _0)]
    UnknownOption(String),

    #[error("Unknown argument: `{}`", _0)]
    UnknownArgument(String),

    #[error("No option or argument named `{}`", _0)]
    UnknownParameter(String),

    #[error("Invalid value for `{}`: {}", .name, .source)]
    InvalidValue { name: String, source: Box<Error> },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Invalid name: parameter names may not be empty")]
    EmptyName,

    #[error("Found a non-unique parameter name: `{}`", _0)]
    DuplicateName(String),

    #[error("Invalid default for `{}`: {}", .name, .original)]
    InvalidDefault {
        name: String,
        original: serde_yaml::Error,
    },

    #[error("Invalid parameter format `{}`, expected name=value", _0)]
    ParameterFormat(String),
}

impl Error {
    /// Builds an error for user supplied [`Value`](crate::value::Value) types.
    pub fn custom(val: impl std::fmt::Display) -> Self {
        Self::Custom(val.to_string())
    }

    pub fn invalid_value(name: &str, source: Error) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            source: Box::new(source),
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
