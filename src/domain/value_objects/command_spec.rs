//! Command spec value object - one external program invocation

use serde::{Deserialize, Serialize};

use crate::error::{TaskError, TaskResult};

/// A program and its argument vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Shell-like rendering for logs and `list` output
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,~".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}

/// A command line as written in config
///
/// Supports both the array form:
///   command = ["pdm", "run", "src/builder/build.py"]
///
/// And a whitespace-split string:
///   command = "pdm run src/builder/build.py"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommandLine(Vec<String>);

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum CommandLineDe {
    Text(String),
    Argv(Vec<String>),
}

impl<'de> Deserialize<'de> for CommandLine {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match CommandLineDe::deserialize(deserializer)? {
            CommandLineDe::Text(text) => Ok(Self::parse(&text)),
            CommandLineDe::Argv(argv) => Ok(Self(argv)),
        }
    }
}

impl CommandLine {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(argv.into_iter().map(Into::into).collect())
    }

    /// Split on whitespace; no quoting rules
    pub fn parse(text: &str) -> Self {
        Self(text.split_whitespace().map(str::to_string).collect())
    }

    pub fn argv(&self) -> &[String] {
        &self.0
    }

    /// Resolve to a spec; `section` names the config table for the error
    pub fn to_spec(&self, section: &str) -> TaskResult<CommandSpec> {
        let (program, args) = self
            .0
            .split_first()
            .filter(|(program, _)| !program.trim().is_empty())
            .ok_or_else(|| TaskError::EmptyCommand {
                section: section.to_string(),
            })?;
        Ok(CommandSpec::new(program.as_str()).args(args.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        command: CommandLine,
    }

    #[test]
    fn deserializes_array_form() {
        let h: Holder = toml::from_str(r#"command = ["pdm", "run", "build.py"]"#).unwrap();
        assert_eq!(h.command.argv(), ["pdm", "run", "build.py"]);
    }

    #[test]
    fn deserializes_string_form() {
        let h: Holder = toml::from_str(r#"command = "pdm  run build.py""#).unwrap();
        assert_eq!(h.command.argv(), ["pdm", "run", "build.py"]);
    }

    #[test]
    fn empty_command_is_an_error() {
        let err = CommandLine::parse("   ").to_spec("server").unwrap_err();
        assert!(matches!(err, TaskError::EmptyCommand { ref section } if section == "server"));
    }

    #[test]
    fn to_spec_splits_program_and_args() {
        let spec = CommandLine::parse("python3 build.py -f").to_spec("builder").unwrap();
        assert_eq!(spec.program, "python3");
        assert_eq!(spec.args, vec!["build.py", "-f"]);
    }

    #[test]
    fn display_quotes_only_when_needed() {
        let spec = CommandSpec::new("rsync")
            .arg("-avz")
            .arg("-e")
            .arg("ssh -p 2222")
            .arg("dist/")
            .arg("me@host:/srv/www");
        insta::assert_snapshot!(spec.display(), @"rsync -avz -e 'ssh -p 2222' dist/ me@host:/srv/www");
    }

    #[test]
    fn display_escapes_single_quotes() {
        let spec = CommandSpec::new("echo").arg("it's");
        assert_eq!(spec.display(), r#"echo 'it'\''s'"#);
    }
}
