//! Command table service
//!
//! The table maps each operation to an ordered list of steps. Expansion
//! flattens `Run` steps depth-first into leaf actions, so the dispatcher
//! never branches on operation names.

use std::collections::BTreeMap;

use crate::domain::value_objects::{Action, Operation, Step};
use crate::error::{TaskError, TaskResult};

/// Operation -> steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    entries: BTreeMap<Operation, Vec<Step>>,
}

impl CommandTable {
    /// The table every sitetask project uses
    pub fn standard() -> Self {
        Self::from_entries([
            (Operation::Build, vec![Action::Build { force: false }.into()]),
            (Operation::Rebuild, vec![Action::Build { force: true }.into()]),
            (Operation::Clean, vec![Action::RemoveOutput.into()]),
            (
                Operation::Deploy,
                vec![
                    Step::Run(Operation::Clean),
                    Step::Run(Operation::Build),
                    Action::Sync.into(),
                ],
            ),
            (Operation::Serve, vec![Action::Serve.into()]),
            (Operation::Watch, vec![Action::Watch.into()]),
            (Operation::Default, vec![Step::Run(Operation::Build)]),
        ])
    }

    /// Build a table from explicit entries; later entries replace earlier ones
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Operation, Vec<Step>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Raw steps for an operation
    pub fn steps(&self, operation: Operation) -> Option<&[Step]> {
        self.entries.get(&operation).map(Vec::as_slice)
    }

    /// Operations with an entry, in table order
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.entries.keys().copied()
    }

    /// Flatten an operation into leaf actions
    ///
    /// Each action is tagged with the operation whose entry contributed it.
    pub fn expand(&self, operation: Operation) -> TaskResult<Vec<(Operation, Action)>> {
        let mut stack = Vec::new();
        let mut out = Vec::new();
        self.expand_into(operation, &mut stack, &mut out)?;
        Ok(out)
    }

    fn expand_into(
        &self,
        operation: Operation,
        stack: &mut Vec<Operation>,
        out: &mut Vec<(Operation, Action)>,
    ) -> TaskResult<()> {
        if stack.contains(&operation) {
            let chain = stack
                .iter()
                .chain(std::iter::once(&operation))
                .map(Operation::name)
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(TaskError::CyclicOperation { chain });
        }

        let steps = self
            .entries
            .get(&operation)
            .ok_or_else(|| TaskError::UndefinedOperation {
                operation: operation.name().to_string(),
            })?;

        stack.push(operation);
        for step in steps {
            match *step {
                Step::Run(inner) => self.expand_into(inner, stack, out)?,
                Step::Action(action) => out.push((operation, action)),
            }
        }
        stack.pop();

        Ok(())
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(table: &CommandTable, op: Operation) -> Vec<Action> {
        table
            .expand(op)
            .unwrap()
            .into_iter()
            .map(|(_, a)| a)
            .collect()
    }

    #[test]
    fn build_never_forces_and_rebuild_always_does() {
        let table = CommandTable::standard();
        assert_eq!(
            actions(&table, Operation::Build),
            vec![Action::Build { force: false }]
        );
        assert_eq!(
            actions(&table, Operation::Rebuild),
            vec![Action::Build { force: true }]
        );
    }

    #[test]
    fn deploy_expands_to_clean_build_sync() {
        let table = CommandTable::standard();
        let expanded = table.expand(Operation::Deploy).unwrap();
        assert_eq!(
            expanded,
            vec![
                (Operation::Clean, Action::RemoveOutput),
                (Operation::Build, Action::Build { force: false }),
                (Operation::Deploy, Action::Sync),
            ]
        );
    }

    #[test]
    fn default_is_build() {
        let table = CommandTable::standard();
        assert_eq!(
            table.expand(Operation::Default).unwrap(),
            table.expand(Operation::Build).unwrap()
        );
    }

    #[test]
    fn every_standard_operation_expands() {
        let table = CommandTable::standard();
        for op in Operation::ALL {
            assert!(!table.expand(op).unwrap().is_empty(), "{op} is empty");
        }
    }

    #[test]
    fn cycles_are_rejected() {
        let table = CommandTable::from_entries([
            (Operation::Build, vec![Step::Run(Operation::Deploy)]),
            (Operation::Deploy, vec![Step::Run(Operation::Build)]),
        ]);
        let err = table.expand(Operation::Build).unwrap_err();
        assert_eq!(
            err.to_string(),
            "command table cycle: build -> deploy -> build"
        );
    }

    #[test]
    fn self_reference_is_a_cycle() {
        let table = CommandTable::from_entries([(Operation::Clean, vec![Step::Run(Operation::Clean)])]);
        assert!(matches!(
            table.expand(Operation::Clean),
            Err(TaskError::CyclicOperation { .. })
        ));
    }

    #[test]
    fn missing_entry_is_rejected() {
        let table = CommandTable::from_entries([(Operation::Default, vec![Step::Run(Operation::Build)])]);
        assert!(matches!(
            table.expand(Operation::Default),
            Err(TaskError::UndefinedOperation { ref operation }) if operation == "build"
        ));
    }

    #[test]
    fn repeated_runs_are_not_cycles() {
        let table = CommandTable::from_entries([
            (Operation::Clean, vec![Action::RemoveOutput.into()]),
            (
                Operation::Deploy,
                vec![Step::Run(Operation::Clean), Step::Run(Operation::Clean)],
            ),
        ]);
        assert_eq!(actions(&table, Operation::Deploy).len(), 2);
    }
}
