//! Rendering of a command's resolved parameters.

use argbind_core::command::Command;
use argbind_core::param::Param;
use itertools::Itertools;

/// Placeholder printed instead of values declared with `hide_value`.
pub const HIDDEN_VALUE: &str = "<hidden>";

fn describe(spelling: &str, param: &Param, desc: &str, hidden: bool) -> String {
    let mut line = format!("{spelling} <{}>", param.kind());

    if param.is_toggle() {
        line.push_str(" [toggle]");
    }
    if param.is_batch() {
        line.push_str(" [batch]");
    }

    if hidden {
        line.push_str(&format!(" = {HIDDEN_VALUE}"));
    } else {
        line.push_str(&format!(" = {param}"));
    }

    if !desc.is_empty() {
        line.push_str(&format!("  # {desc}"));
    }

    line
}

/// One line per option, then one per argument, in declaration order.
///
/// Each line shows the spellings, kind, capabilities and current value, e.g.
/// `-f, --force <bool> [toggle] = true  # Skip confirmation`.
#[must_use]
pub fn render(command: &Command, show_hidden: bool) -> Vec<String> {
    let options = command.options().iter().map(|option| {
        describe(
            &option.names().iter().join(", "),
            option.param(),
            option.desc(),
            option.hide_value() && !show_hidden,
        )
    });

    let arguments = command.arguments().map(|argument| {
        describe(
            argument.name(),
            argument.param(),
            argument.desc(),
            argument.hide_value() && !show_hidden,
        )
    });

    options.chain(arguments).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use argbind_core::declaration::StringOpt;
    use std::collections::HashMap;

    fn command() -> Command {
        let mut cmd = Command::with_env("app", HashMap::<String, String>::new());
        cmd.bool_opt("f force", true, "Skip confirmation");
        cmd.opt(StringOpt {
            name: "token".to_string(),
            value: "s3cret".to_string(),
            hide_value: true,
            ..Default::default()
        });
        cmd.ints_arg("PORTS", vec![80, 443], "");
        cmd
    }

    #[test]
    fn test_render() {
        let lines = render(&command(), false);

        assert_eq!(
            lines,
            vec![
                "-f, --force <bool> [toggle] = true  # Skip confirmation",
                "--token <string> = <hidden>",
                "PORTS <ints> [batch] = [80, 443]",
            ]
        );
    }

    #[test]
    fn test_render_show_hidden() {
        let lines = render(&command(), true);

        assert_eq!(lines[1], "--token <string> = \"s3cret\"");
    }
}
