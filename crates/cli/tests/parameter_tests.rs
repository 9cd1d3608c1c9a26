#[cfg(test)]
mod tests {
    use argbind_cli::arguments::apply_assignments;
    use argbind_cli::listing::render;
    use argbind_core::error::Error;
    use argbind_core::file_handling::get_parameter_definitions;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const DEFINITIONS: &str = r#"
name: backup
options:
  - name: n dry-run
    kind: bool
    description: Only print what would be copied
  - name: j jobs
    kind: int
    default: 2
    env: BACKUP_JOBS
  - name: x exclude
    kind: strings
    env: BACKUP_EXCLUDE
arguments:
  - name: SRC
    kind: string
  - name: PASSWORD
    kind: string
    env: BACKUP_PASSWORD
    hide_value: true
"#;

    fn definitions_file() -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{DEFINITIONS}").unwrap();
        temp_file
    }

    #[test]
    fn test_environment_then_assignments() {
        let temp_file = definitions_file();
        let definition = get_parameter_definitions(temp_file.path().to_str().unwrap()).unwrap();

        let env: HashMap<String, String> = [
            ("BACKUP_JOBS", "8"),
            ("BACKUP_EXCLUDE", "*.tmp, .cache"),
            ("BACKUP_PASSWORD", "hunter2"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
        let mut command = definition.register_with_env(env).unwrap();

        let assignments = vec![
            "dry-run=true".to_string(),
            "x=node_modules".to_string(),
            "SRC=/home".to_string(),
        ];
        apply_assignments(&mut command, &assignments).unwrap();

        assert_eq!(
            render(&command, false),
            vec![
                "-n, --dry-run <bool> [toggle] = true  # Only print what would be copied",
                "-j, --jobs <int> = 8",
                r#"-x, --exclude <strings> [batch] = ["*.tmp", ".cache", "node_modules"]"#,
                r#"SRC <string> = "/home""#,
                "PASSWORD <string> = <hidden>",
            ]
        );
        assert_eq!(
            render(&command, true)[4],
            r#"PASSWORD <string> = "hunter2""#
        );
    }

    #[test]
    fn test_defaults_without_environment() {
        let temp_file = definitions_file();
        let definition = get_parameter_definitions(temp_file.path().to_str().unwrap()).unwrap();
        let command = definition
            .register_with_env(HashMap::<String, String>::new())
            .unwrap();

        let lines = render(&command, true);
        assert_eq!(lines[1], "-j, --jobs <int> = 2");
        assert_eq!(lines[2], "-x, --exclude <strings> [batch] = []");
    }

    #[test]
    fn test_bad_assignment_names_parameter() {
        let temp_file = definitions_file();
        let definition = get_parameter_definitions(temp_file.path().to_str().unwrap()).unwrap();
        let mut command = definition
            .register_with_env(HashMap::<String, String>::new())
            .unwrap();

        let result = apply_assignments(&mut command, &["jobs=many".to_string()]);
        let err = result.unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert!(err.to_string().contains("--jobs"));

        let result = apply_assignments(&mut command, &["threads=4".to_string()]);
        assert!(matches!(result, Err(Error::UnknownParameter(_))));
    }
}
