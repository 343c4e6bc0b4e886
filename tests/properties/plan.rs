//! Property tests for command table expansion.

use proptest::prelude::*;

use sitetask::{Action, CommandTable, Operation};

fn operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Expanding the standard table is deterministic and never empty.
    #[test]
    fn property_expansion_is_deterministic(op in operation()) {
        let table = CommandTable::standard();
        let first = table.expand(op).unwrap();
        let second = table.expand(op).unwrap();
        prop_assert!(!first.is_empty());
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Sync only ever appears last, and only after a build.
    #[test]
    fn property_sync_follows_build(op in operation()) {
        let actions: Vec<Action> = CommandTable::standard()
            .expand(op)
            .unwrap()
            .into_iter()
            .map(|(_, action)| action)
            .collect();

        let build = Action::Build { force: false };
        if let Some(pos) = actions.iter().position(|a| *a == Action::Sync) {
            prop_assert_eq!(pos, actions.len() - 1);
            prop_assert!(actions[..pos].contains(&build));
        }
    }

    /// PROPERTY: `default` and `build` expand to the same actions.
    #[test]
    fn property_default_matches_build(_seed in any::<u8>()) {
        let table = CommandTable::standard();
        let default: Vec<Action> = table.expand(Operation::Default).unwrap().into_iter().map(|(_, a)| a).collect();
        let build: Vec<Action> = table.expand(Operation::Build).unwrap().into_iter().map(|(_, a)| a).collect();
        prop_assert_eq!(default, build);
    }
}
