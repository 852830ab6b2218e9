//! Property-based tests for rule parsing and evaluation.

use proptest::prelude::*;
use ruleval_validator::record::{Field, Record};
use ruleval_validator::rule::{RuleCache, parse_rules};
use ruleval_validator::Validator;

fn check(value: impl Into<ruleval_validator::value::Value>, rules: &str) -> bool {
    let mut builder = Record::builder();
    builder.field(Field::new("field", value).rules(rules).label("Field"));
    Validator::default().check(&builder.build()).is_valid()
}

// ============================================================================
// PARSING
// ============================================================================

proptest! {
    #[test]
    fn parse_is_pure(raw in ".{0,40}") {
        prop_assert_eq!(parse_rules(&raw), parse_rules(&raw));
    }

    #[test]
    fn parsed_rules_have_names(raw in "[a-z:;,]{0,40}") {
        for rule in parse_rules(&raw) {
            prop_assert!(!rule.checker.is_empty());
            prop_assert!(!rule.checker.contains(';'));
        }
    }

    #[test]
    fn cache_matches_direct_parse(raw in "[a-z0-9:;,]{0,30}") {
        let cache = RuleCache::new();
        let cached = cache.get_or_parse(&raw);
        let direct = parse_rules(&raw);
        prop_assert_eq!(&*cached, direct.as_slice());
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

proptest! {
    #[test]
    fn bounds_are_inclusive(n in -1000i64..1000) {
        let rules = format!("min:{n};max:{n}");
        prop_assert!(check(n, &rules));
    }

    #[test]
    fn min_matches_comparison(n in any::<i64>(), limit in any::<i64>()) {
        prop_assert_eq!(check(n, &format!("min:{limit}")), n >= limit);
    }

    #[test]
    fn maxlen_counts_chars(s in "\\PC{0,20}") {
        let len = s.chars().count();
        let rules = format!("maxlen:{len}");
        prop_assert!(check(s.as_str(), &rules));
        if len > 0 {
            let rules = format!("maxlen:{}", len - 1);
            prop_assert!(!check(s.as_str(), &rules));
        }
    }

    #[test]
    fn empty_text_passes_every_format(rule in prop::sample::select(vec![
        "alpha", "alphanumeric", "alphadash", "username", "email", "ipv4",
        "mobile", "tel", "phone", "idcard", "minlen:3", "maxlen:1", "list:a,b",
    ])) {
        prop_assert!(check("", rule));
    }

    #[test]
    fn phone_is_tel_or_mobile(s in "[0-9+-]{0,14}") {
        let phone = check(s.as_str(), "phone");
        let either = check(s.as_str(), "tel") || check(s.as_str(), "mobile");
        prop_assert_eq!(phone, either);
    }

    #[test]
    fn evaluation_is_idempotent(s in ".{0,20}", rules in "[a-z:;0-9]{0,20}") {
        let mut builder = Record::builder();
        builder.field(Field::new("field", s.as_str()).rules(rules));
        let record = builder.build();
        let validator = Validator::default();
        prop_assert_eq!(validator.check(&record), validator.check(&record));
    }
}
