//! Holder scenarios: build a holder from its name and replay writes.

use strictname_tests::prelude::*;

mod integer_range {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("integer_range")
            .holder("scalar_with_integers_between_10_and_5000")
            .constraints(["contains integers", "between 10 and 5000"])
            .write("in_range", 4000i64, |a| a.accepted().stored(4000i64))
            .write("above_range", 9001i64, |a| {
                a.rejected_by(1)
                    .constraint("between 10 and 5000")
                    .message("out of range")
                    .stored(4000i64)
            })
            .write("float_in_range", 4000.5, |a| {
                a.rejected_by(0)
                    .constraint("contains integers")
                    .message("not permitted")
                    .stored(4000i64)
            })
            .write("lower_bound", 10i64, |a| a.accepted().stored(10i64))
            .write("upper_bound", 5000i64, |a| a.accepted().stored(5000i64))
            .write("below_range", 9i64, |a| a.rejected_by(1).stored(5000i64))
    }

    #[test]
    fn test_integer_range() {
        scenario().run().unwrap();
    }
}

mod no_constraints {
    use super::*;

    pub fn scenario() -> Scenario {
        // "with" never receives a type tag, so nothing survives parsing.
        Scenario::new("no_constraints")
            .holder("scalar_with_anything_at_all")
            .constraints(Vec::<String>::new())
            .write("string", "hello", |a| a.accepted().stored("hello"))
            .write("list", vec![1i64, 2], |a| a.accepted())
            .write("map", map! { "k" => 1i64 }, |a| a.accepted())
            .write("bool", true, |a| a.accepted().stored(true))
    }

    #[test]
    fn test_no_constraints_accepts_everything() {
        scenario().run().unwrap();
    }
}

mod any_of_several_types {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("any_of_several_types")
            .holder("scalar_which_contains_integers_or_strings")
            .constraints(["contains integers or strings"])
            .write("integer", 7i64, |a| a.accepted())
            .write("string", "seven", |a| a.accepted().stored("seven"))
            .write("float", 7.5, |a| {
                a.rejected_by(0)
                    .message("expected integers or strings")
                    .stored("seven")
            })
            .write("list", vec!["seven"], |a| a.rejected().stored("seven"))
    }

    #[test]
    fn test_contains_accepts_any_listed_type() {
        scenario().run().unwrap();
    }
}

mod integers_and_floats {
    use super::*;

    #[test]
    fn test_numbers_of_either_kind() {
        Scenario::new("integers_and_floats")
            .holder("scalar_which_contains_integers_and_floats")
            .constraints(["contains integers or floats"])
            .write("integer", 558i64, |a| a.accepted())
            .write("float", 3.25, |a| a.accepted().stored(3.25))
            .write("string", "558", |a| a.rejected_by(0).stored(3.25))
            .run()
            .unwrap();
    }
}

mod collections {
    use super::*;

    #[test]
    fn test_arrayref_holder() {
        Scenario::new("arrayref_holder")
            .holder("arrayref_with_arrayrefs")
            .constraints(["contains arrayrefs"])
            .write("list", vec![1i64, 2, 3], |a| a.accepted())
            .write("map", map! { "a" => 1i64 }, |a| a.rejected_by(0))
            .run()
            .unwrap();
    }

    #[test]
    fn test_hashref_holder() {
        Scenario::new("hashref_holder")
            .holder("hashref_which_contains_hashrefs")
            .write("map", map! { "a" => 1i64, "b" => "two" }, |a| a.accepted())
            .write("empty_map", map! {}, |a| a.accepted().stored(map! {}))
            .write("list", vec![1i64], |a| a.rejected().stored(map! {}))
            .run()
            .unwrap();
    }
}

mod bounds_only {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("bounds_only")
            .holder("scalar_with_values_between_2000_and_50")
            .constraints(["between 50 and 2000"])
            .write("integer", 50i64, |a| a.accepted())
            .write("float", 1999.5, |a| a.accepted().stored(1999.5))
            .write("numeric_string", "100", |a| {
                a.rejected_by(0).message("not numeric").stored(1999.5)
            })
            .write("negative", -1i64, |a| a.rejected_by(0))
    }

    #[test]
    fn test_reversed_bounds_and_fail_closed() {
        scenario().run().unwrap();
    }
}

mod decimal_bounds {
    use super::*;

    #[test]
    fn test_fractional_and_signed_bounds() {
        Scenario::new("decimal_bounds")
            .holder("scalar_with_floats_between_-1.5_and_.5")
            .constraints(["contains floats", "between -1.5 and 0.5"])
            .write("inside", -0.25, |a| a.accepted())
            .write("edge", 0.5, |a| a.accepted().stored(0.5))
            .write("outside", 0.75, |a| a.rejected_by(1).stored(0.5))
            .write("integer_zero", 0i64, |a| a.rejected_by(0))
            .run()
            .unwrap();
    }
}

mod non_finite_floats {
    use super::*;

    #[test]
    fn test_nan_and_infinities_never_stored() {
        Scenario::new("non_finite_floats")
            .holder("scalar_with_floats_between_1_and_2")
            .write("inside", 1.5, |a| a.accepted())
            .write("nan", f64::NAN, |a| a.rejected_by(1).message("out of range").stored(1.5))
            .write("infinity", f64::INFINITY, |a| a.rejected_by(1).stored(1.5))
            .write("negative_infinity", f64::NEG_INFINITY, |a| a.rejected_by(1).stored(1.5))
            .run()
            .unwrap();
    }
}

mod large_integers {
    use super::*;

    #[test]
    fn test_bounds_exact_beyond_float_precision() {
        Scenario::new("large_integers")
            .holder("scalar_with_integers_between_0_and_9007199254740992")
            .constraints(["contains integers", "between 0 and 9007199254740992"])
            .write("at_bound", 9_007_199_254_740_992i64, |a| a.accepted())
            .write("past_bound", 9_007_199_254_740_993i64, |a| {
                a.rejected_by(1).stored(9_007_199_254_740_992i64)
            })
            .run()
            .unwrap();
    }
}

mod trailing_incomplete {
    use super::*;

    #[test]
    fn test_trailing_between_is_dropped() {
        Scenario::new("trailing_incomplete")
            .holder("scalar_with_integers_between_50")
            .constraints(["contains integers"])
            .write("far_out_of_range", 1_000_000i64, |a| a.accepted())
            .write("float", 1.5, |a| a.rejected_by(0))
            .run()
            .unwrap();
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_wrong_expectation_reports_step() {
        let error = Scenario::new("wrong_expectation")
            .holder("scalar_with_integers")
            .write("bad_step", 1i64, |a| a.rejected())
            .run()
            .unwrap_err();

        assert!(matches!(
            error,
            ScenarioError::Assertion { ref step, .. } if step == "bad_step"
        ));
    }

    #[test]
    fn test_bad_name_reports_construction() {
        let error = Scenario::new("bad_name")
            .holder("number_with_integers")
            .run()
            .unwrap_err();

        assert!(matches!(error, ScenarioError::Construct { .. }));
    }

    #[test]
    fn test_missing_holder() {
        let error = Scenario::new("nothing").run().unwrap_err();

        assert!(matches!(error, ScenarioError::MissingHolder { .. }));
    }
}
