//! Properties of the greedy constraint parser and the range semantics it feeds.

use proptest::prelude::*;
use strictname_tests::prelude::*;

fn described(tokens: &[String]) -> Vec<String> {
    parse_constraints(tokens)
        .iter()
        .map(|c| c.describe())
        .collect()
}

fn range_holder(low: i64, high: i64) -> Constrained {
    Constrained::from_name(format!("scalar_with_integers_between_{}_and_{}", low, high)).unwrap()
}

#[test]
fn test_empty_token_sequence_yields_no_constraints() {
    let parsed = Parser::new(Registry::standard())
        .parse::<String>(&[])
        .unwrap();

    assert!(parsed.constraints.is_empty());
    assert!(parsed.dropped.is_empty());
    assert!(parsed.discarded.is_empty());
}

#[test]
fn test_only_filler_yields_no_constraints() {
    let parsed = Parser::new(Registry::standard())
        .parse(&["and", "or", "the", "of"])
        .unwrap();

    assert!(parsed.constraints.is_empty());
    assert_eq!(parsed.discarded.len(), 4);
}

#[test]
fn test_keyword_synonyms_are_interchangeable() {
    for keyword in ["between", "betwixt", "surrounded"] {
        let constraints = parse_constraints(&[keyword, "1", "and", "3"]);
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].name(), "between");
        assert_eq!(constraints[0].keyword(), keyword);
    }
    for keyword in ["contains", "containing", "with"] {
        let constraints = parse_constraints(&[keyword, "strings"]);
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].name(), "contains");
    }
}

#[test]
fn test_non_numeric_token_does_not_fill_between() {
    let parsed = Parser::new(Registry::standard())
        .parse(&["between", "ten", "and", "20"])
        .unwrap();

    assert!(parsed.constraints.is_empty());
    assert_eq!(parsed.dropped[0].args, vec![Argument::Integer(20)]);
}

proptest! {
    #[test]
    fn bound_order_does_not_matter(a in -10_000i64..10_000, b in -10_000i64..10_000, v in -20_000i64..20_000) {
        let forward = range_holder(a, b);
        let backward = range_holder(b, a);

        prop_assert_eq!(forward.accepts(&Value::Int(v)), backward.accepts(&Value::Int(v)));
    }

    #[test]
    fn bounds_are_inclusive(a in -10_000i64..10_000, b in -10_000i64..10_000) {
        let holder = range_holder(a, b);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(holder.accepts(&Value::Int(low)));
        prop_assert!(holder.accepts(&Value::Int(high)));
        prop_assert!(!holder.accepts(&Value::Int(low - 1)));
        prop_assert!(!holder.accepts(&Value::Int(high + 1)));
    }

    #[test]
    fn conjunctions_are_filler(a in 0u32..1000, b in 0u32..1000, extra in 0usize..4) {
        let plain: Vec<String> = vec!["with".into(), "integers".into(), "between".into(), a.to_string(), b.to_string()];
        let mut padded: Vec<String> = vec!["with".into(), "integers".into()];
        for _ in 0..extra {
            padded.push("and".into());
        }
        padded.push("between".into());
        padded.push(a.to_string());
        for _ in 0..extra {
            padded.push("and".into());
        }
        padded.push(b.to_string());

        prop_assert_eq!(described(&plain), described(&padded));
    }

    #[test]
    fn trailing_single_bound_is_dropped(a in -1000i64..1000) {
        let tokens: Vec<String> = vec!["with".into(), "floats".into(), "between".into(), a.to_string()];
        let parsed = Parser::new(Registry::standard()).parse(&tokens).unwrap();

        prop_assert_eq!(described(&tokens), vec!["contains floats".to_string()]);
        prop_assert_eq!(parsed.dropped.len(), 1);
    }

    #[test]
    fn every_constraint_is_satisfied(words in proptest::collection::vec(
        prop_oneof![
            Just("with"), Just("contains"), Just("between"), Just("and"), Just("or"),
            Just("integers"), Just("strings"), Just("hashrefs"), Just("1"), Just("2.5"), Just("x"),
        ],
        0..12,
    )) {
        for constraint in parse_constraints(&words) {
            prop_assert!(constraint.is_satisfied());
        }
    }
}
