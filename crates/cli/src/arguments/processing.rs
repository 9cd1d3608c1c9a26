use argbind_core::command::Command;
use argbind_core::error::Error::ParameterFormat;
use argbind_core::error::Result;
use log::debug;

/// Splits a `name=value` assignment.
///
/// Only the first `=` separates, so values may contain `=` themselves.
///
/// # Errors
///
/// Returns [`ParameterFormat`] when there is no `=` or the name is empty.
pub fn parse_assignment(param_str: &str) -> Result<(&str, &str)> {
    match param_str.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(ParameterFormat(param_str.to_string())),
    }
}

/// Applies `name=value` assignments to a registered command, in order.
///
/// Applied after registration, so they override environment variables and
/// defaults. Repeated parameters append one element per assignment.
///
/// # Errors
///
/// Returns an error if:
/// - An assignment is not in `name=value` format
/// - No option or argument has the given name
/// - The value does not parse for the parameter's kind
pub fn apply_assignments(command: &mut Command, assignments: &[String]) -> Result<()> {
    for param_str in assignments {
        let (name, value) = parse_assignment(param_str)?;
        debug!("Setting `{name}` from the command line");
        command.set_named(name, value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argbind_core::error::Error;
    use std::collections::HashMap;

    fn command() -> Command {
        Command::with_env("app", HashMap::<String, String>::new())
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("a=1").unwrap(), ("a", "1"));
        assert_eq!(parse_assignment("a=").unwrap(), ("a", ""));
        assert_eq!(parse_assignment("url=x?y=z").unwrap(), ("url", "x?y=z"));
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(matches!(parse_assignment("novalue"), Err(ParameterFormat(_))));
        assert!(matches!(parse_assignment("=1"), Err(ParameterFormat(_))));
    }

    #[test]
    fn test_apply_assignments() {
        let mut cmd = command();
        let force = cmd.bool_opt("f force", false, "Force");
        let tags = cmd.strings_opt("tag", vec![], "Tags");

        let assignments = vec![
            "force=true".to_string(),
            "tag=a".to_string(),
            "tag=b".to_string(),
        ];
        apply_assignments(&mut cmd, &assignments).unwrap();

        assert!(force.get());
        assert_eq!(tags.get(), vec!["a", "b"]);
    }

    #[test]
    fn test_apply_assignments_stops_at_first_error() {
        let mut cmd = command();
        let count = cmd.int_opt("count", 0, "Count");

        let assignments = vec!["count=x".to_string(), "count=2".to_string()];
        let result = apply_assignments(&mut cmd, &assignments);

        assert!(matches!(result, Err(Error::InvalidValue { .. })));
        assert_eq!(count.get(), 0);
    }
}
