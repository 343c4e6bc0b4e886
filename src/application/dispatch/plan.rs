//! Resolved plans

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{Action, CommandSpec, Operation};

/// What a planned step will actually do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Invocation {
    /// Delete this directory tree in-process
    RemoveTree(PathBuf),
    /// Spawn this command
    Command(CommandSpec),
}

impl Invocation {
    pub fn command(&self) -> Option<&CommandSpec> {
        match self {
            Invocation::Command(command) => Some(command),
            Invocation::RemoveTree(_) => None,
        }
    }

    /// Shell-like rendering for logs and `list`
    pub fn describe(&self) -> String {
        match self {
            Invocation::RemoveTree(path) => format!("rm -rf {}", path.display()),
            Invocation::Command(command) => command.display(),
        }
    }
}

/// A leaf action with everything needed to run it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    /// Operation whose table entry contributed this step
    pub operation: Operation,
    pub action: Action,
    pub invocation: Invocation,
}

impl PlannedStep {
    pub fn new(operation: Operation, action: Action, invocation: Invocation) -> Self {
        Self {
            operation,
            action,
            invocation,
        }
    }

    pub fn command(&self) -> Option<&CommandSpec> {
        self.invocation.command()
    }
}

/// Every step of one operation, resolved up front
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub operation: Operation,
    pub steps: Vec<PlannedStep>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
