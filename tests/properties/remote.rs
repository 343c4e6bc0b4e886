//! Property tests for remote target parsing.

use proptest::prelude::*;

use sitetask::RemoteTarget;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary input never panics.
    #[test]
    fn property_remote_parse_never_panics(s in "(?s).{0,128}") {
        let _ = s.parse::<RemoteTarget>();
    }

    /// PROPERTY: A well-formed `user@host:path` keeps host and path verbatim.
    #[test]
    fn property_remote_destination_round_trips(
        user in "[a-z][a-z0-9_]{0,8}",
        host in "[a-z][a-z0-9.-]{0,16}",
        path in "/[A-Za-z0-9/._-]{0,32}",
    ) {
        let text = format!("{user}@{host}:{path}");
        let remote: RemoteTarget = text.parse().unwrap();
        prop_assert_eq!(remote.destination(), text);
        prop_assert_eq!(remote.path(), path.as_str());
    }

    /// PROPERTY: Path-like input is never mistaken for a remote host.
    #[test]
    fn property_path_like_remote_is_rejected(
        lead in "(/|\\./|[a-z]{1,8}/)",
        rest in "[A-Za-z0-9/._-]{0,32}",
        suffix in "(:[a-z/]{0,8})?",
    ) {
        let text = format!("{lead}{rest}{suffix}");
        prop_assert!(text.parse::<RemoteTarget>().is_err(), "accepted {}", text);
    }

    /// PROPERTY: Hosts that look like options are always rejected.
    #[test]
    fn property_option_like_host_is_rejected(rest in "[A-Za-z0-9=]{0,16}", path in "[a-z/]{0,8}") {
        let text = format!("-{rest}:{path}");
        prop_assert!(text.parse::<RemoteTarget>().is_err());
    }
}
