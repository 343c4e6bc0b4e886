//! Property tests for the sync source argument.

use std::path::Path;

use proptest::prelude::*;

use sitetask::domain::ports::contents_of;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The source always ends in exactly one '/'.
    #[test]
    fn property_contents_of_has_one_trailing_slash(
        base in "/?[a-z]{1,8}(/[a-z]{1,8}){0,3}",
        slashes in 0usize..4,
    ) {
        let path = format!("{}{}", base, "/".repeat(slashes));
        let arg = contents_of(Path::new(&path));
        prop_assert!(arg.ends_with('/'));
        prop_assert!(!arg.ends_with("//"));
    }
}
