//! Operation value object - the named tasks the dispatcher exposes

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// A named operation in the command table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Run the builder in normal mode
    Build,
    /// Run the builder with its force flag
    Rebuild,
    /// Remove the output directory
    Clean,
    /// Clean, build, then sync the output to the remote
    Deploy,
    /// Run the preview server
    Serve,
    /// Run the file watcher
    Watch,
    /// What runs when no operation is named
    Default,
}

impl Operation {
    /// Every operation, in table order
    pub const ALL: [Operation; 7] = [
        Operation::Build,
        Operation::Rebuild,
        Operation::Clean,
        Operation::Deploy,
        Operation::Serve,
        Operation::Watch,
        Operation::Default,
    ];

    /// Name used on the command line and in events
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Build => "build",
            Operation::Rebuild => "rebuild",
            Operation::Clean => "clean",
            Operation::Deploy => "deploy",
            Operation::Serve => "serve",
            Operation::Watch => "watch",
            Operation::Default => "default",
        }
    }

    /// One-line description for `list` and help output
    pub fn description(&self) -> &'static str {
        match self {
            Operation::Build => "Run the site builder",
            Operation::Rebuild => "Run the site builder with its force flag (no cache)",
            Operation::Clean => "Delete the output directory",
            Operation::Deploy => "Clean, build, then sync the output directory to the remote",
            Operation::Serve => "Run the local preview server (blocks until interrupted)",
            Operation::Watch => "Run the file watcher (blocks until interrupted)",
            Operation::Default => "Alias for build",
        }
    }

    /// Serve and watch run until something outside stops them
    pub fn is_long_running(&self) -> bool {
        matches!(self, Operation::Serve | Operation::Watch)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == wanted)
            .ok_or_else(|| TaskError::UnknownOperation {
                name: s.to_string(),
                expected: Operation::ALL
                    .iter()
                    .map(Operation::name)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Deploy".parse::<Operation>().unwrap(), Operation::Deploy);
        assert_eq!(" build ".parse::<Operation>().unwrap(), Operation::Build);
    }

    #[test]
    fn parse_unknown_lists_expected_names() {
        let err = "publish".parse::<Operation>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("publish"));
        assert!(msg.contains("build, rebuild, clean, deploy, serve, watch, default"));
    }

    #[test]
    fn names_round_trip_through_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn only_serve_and_watch_are_long_running() {
        let long: Vec<_> = Operation::ALL
            .iter()
            .filter(|op| op.is_long_running())
            .collect();
        assert_eq!(long, vec![&Operation::Serve, &Operation::Watch]);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Operation::Rebuild).unwrap();
        assert_eq!(json, "\"rebuild\"");
    }
}
