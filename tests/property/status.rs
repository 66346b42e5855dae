use proptest::prelude::*;
use shellrunner::exec::RawOutput;
use shellrunner::script::Marker;
use shellrunner::shell::Dialect;
use shellrunner::status::parse_status;

fn marker() -> Marker {
    Marker::from_token("0f1e2d3c4b5a6978")
}

// Output a command could plausibly print: printable text and newlines, no
// marker.
fn output_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9 _:./\\-\n]{0,200}").unwrap()
}

proptest! {
    #[test]
    fn status_line_round_trips(
        output in output_strategy(),
        stages in proptest::collection::vec(0..256i32, 1..6),
        exit_code in 0..256i32,
    ) {
        let payload = stages
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let text = format!("{output}\n{}:{payload}\n", marker().token());
        let parsed = parse_status(&RawOutput { text, exit_code }, &marker(), Dialect::Pipestatus);

        prop_assert!(parsed.marker_found);
        prop_assert_eq!(&parsed.pipestatus, &stages);
        prop_assert_eq!(parsed.out.as_str(), output.trim_end());
        prop_assert!(!parsed.out.contains(&marker().token()));

        let rightmost_failure = stages.iter().rev().copied().find(|s| *s != 0).unwrap_or(0);
        prop_assert_eq!(parsed.status, rightmost_failure);
        if stages.last() != Some(&0) || stages.iter().all(|s| *s == 0) {
            prop_assert_eq!(Some(&parsed.status), stages.last());
        }
    }

    #[test]
    fn pipestatus_is_never_empty(
        text in output_strategy(),
        exit_code in -1..256i32,
        dialect in prop_oneof![Just(Dialect::Pipestatus), Just(Dialect::PosixMinimal)],
    ) {
        let parsed = parse_status(&RawOutput { text: text.clone(), exit_code }, &marker(), dialect);

        prop_assert!(!parsed.pipestatus.is_empty());
        prop_assert!(!parsed.marker_found);
        prop_assert_eq!(parsed.status, exit_code);
        prop_assert_eq!(parsed.out.as_str(), text.trim_end());
    }
}
