//! Step value objects - the entries of the command table

use serde::Serialize;

use super::Operation;

/// A leaf action: the only things the dispatcher actually does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Delete the output directory tree
    RemoveOutput,
    /// Run the site builder, with or without its force flag
    Build { force: bool },
    /// Run the preview server
    Serve,
    /// Run the file watcher
    Watch,
    /// Mirror the output directory to the remote
    Sync,
}

impl Action {
    /// Short machine-friendly name used in events
    pub fn name(&self) -> &'static str {
        match self {
            Action::RemoveOutput => "remove_output",
            Action::Build { force: false } => "build",
            Action::Build { force: true } => "force_build",
            Action::Serve => "serve",
            Action::Watch => "watch",
            Action::Sync => "sync",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Action::RemoveOutput => "remove output",
            Action::Build { force: false } => "build",
            Action::Build { force: true } => "build (force)",
            Action::Serve => "serve",
            Action::Watch => "watch",
            Action::Sync => "sync",
        };
        f.write_str(label)
    }
}

/// One entry in an operation's step list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Run another operation's steps in place
    Run(Operation),
    /// Perform a leaf action
    Action(Action),
}

impl From<Action> for Step {
    fn from(action: Action) -> Self {
        Step::Action(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_build_has_distinct_name() {
        assert_ne!(
            Action::Build { force: true }.name(),
            Action::Build { force: false }.name()
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Action::Build { force: true }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "build", "force": true}));
    }
}
