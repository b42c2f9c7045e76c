//! Property-based tests for the value parsers and the loader.

use std::collections::BTreeSet;

use proptest::prelude::*;
use symcc_config::{
    load_config, parse_flag, parse_gc_threshold, parse_offset_list, vars, Config, ConfigError,
    MapEnv, ParseError,
};

fn flag_token_strategy() -> impl Strategy<Value = (&'static str, bool)> {
    prop_oneof![
        Just(("1", true)),
        Just(("on", true)),
        Just(("yes", true)),
        Just(("", false)),
        Just(("0", false)),
        Just(("off", false)),
        Just(("no", false)),
    ]
}

/// Randomly upper-case characters of `token`.
fn recase(token: &str, mask: &[bool]) -> String {
    token
        .chars()
        .zip(mask.iter().chain(std::iter::repeat(&false)))
        .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    // ── Flags ───────────────────────────────────────────────────────

    #[test]
    fn flag_tokens_are_case_insensitive(
        (token, expected) in flag_token_strategy(),
        mask in prop::collection::vec(any::<bool>(), 3),
    ) {
        let input = recase(token, &mask);
        prop_assert_eq!(parse_flag(&input), Ok(expected));
    }

    #[test]
    fn unknown_flag_tokens_are_rejected(value in "[a-zA-Z2-9 ]{1,8}") {
        let lower = value.to_ascii_lowercase();
        prop_assume!(!["on", "yes", "off", "no"].contains(&lower.as_str()));
        prop_assert_eq!(parse_flag(&value), Err(ParseError::InvalidFlag(lower)));
    }

    // ── Offset lists ────────────────────────────────────────────────

    #[test]
    fn joined_offsets_parse_to_their_set(offsets in prop::collection::vec(0usize..1_000_000, 1..32)) {
        let raw = offsets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let expected: BTreeSet<usize> = offsets.into_iter().collect();
        prop_assert_eq!(parse_offset_list(&raw), expected);
    }

    #[test]
    fn trailing_garbage_keeps_prefix(
        offsets in prop::collection::vec(0usize..10_000, 1..8),
        garbage in "[a-z;:/-][a-z0-9,;]{0,8}",
    ) {
        let mut raw = offsets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join(",");
        raw.push(',');
        raw.push_str(&garbage);
        let expected: BTreeSet<usize> = offsets.into_iter().collect();
        prop_assert_eq!(parse_offset_list(&raw), expected);
    }

    // ── GC threshold ────────────────────────────────────────────────

    #[test]
    fn any_u64_parses(value in any::<u64>()) {
        prop_assert_eq!(parse_gc_threshold(&value.to_string()), Ok(value));
    }

    #[test]
    fn values_past_u64_are_out_of_range(excess in 1u128..=u128::from(u64::MAX)) {
        let raw = (u128::from(u64::MAX) + excess).to_string();
        let is_out_of_range = matches!(
            parse_gc_threshold(&raw),
            Err(ParseError::OutOfRange { .. })
        );
        prop_assert!(is_out_of_range);
    }

    // ── Loader ──────────────────────────────────────────────────────

    /// Fields whose variable is absent keep their default.
    #[test]
    fn absent_variables_keep_defaults(present in prop::collection::vec(any::<bool>(), 8)) {
        let values = ["1", "5", "/out", "/in", "/log", "1", "/map", "77"];
        let env: MapEnv = vars::ALL
            .iter()
            .zip(values)
            .zip(&present)
            .filter(|(_, set)| **set)
            .map(|((name, value), _)| (*name, value))
            .collect();

        let config = load_config(&env).unwrap();
        let defaults = Config::default();

        if !present[0] { prop_assert_eq!(config.fully_concrete, defaults.fully_concrete); }
        if !present[1] {
            prop_assert_eq!(config.selective_symbolization_enabled, false);
            prop_assert!(config.offsets_to_symbolize.is_empty());
        }
        if !present[2] { prop_assert!(config.output_dir.is_none()); }
        if !present[3] { prop_assert!(config.input_file.is_none()); }
        if !present[4] { prop_assert!(config.log_file.is_none()); }
        if !present[5] { prop_assert_eq!(config.pruning, defaults.pruning); }
        if !present[6] { prop_assert!(config.afl_coverage_map.is_none()); }
        if !present[7] {
            prop_assert_eq!(config.garbage_collection_threshold, defaults.garbage_collection_threshold);
        }
    }

    #[test]
    fn loading_is_deterministic(offsets in "[0-9,]{0,12}", threshold in "[0-9]{0,21}") {
        let env = MapEnv::new()
            .with("SYMCC_SELECTIVE_INPUT", offsets)
            .with("SYMCC_GC_THRESHOLD", threshold);
        let first = load_config(&env);
        let second = load_config(&env);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selective_mode_implies_offsets(raw in "[0-9a-z, ]{0,16}") {
        let env = MapEnv::new().with("SYMCC_SELECTIVE_INPUT", raw.clone());
        match load_config(&env) {
            Ok(config) => {
                prop_assert!(config.selective_symbolization_enabled);
                prop_assert!(!config.offsets_to_symbolize.is_empty());
            }
            Err(ConfigError::NoValidOffsets { raw: reported }) => prop_assert_eq!(reported, raw),
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }
}
