//! Properties of the language that hold for every input.
//!
//! Literals are generated as source text and run through the whole
//! interpreter, so lexing, parsing and evaluation are covered together.

use std::rc::Rc;

use proptest::prelude::*;
use stacko::{
    ast::Location,
    error::{Error, RuntimeError},
    interpreter::value::{core::Value, literal::parse_scalar},
    run_source,
};

fn run(src: &str) -> (Result<i32, Error>, String) {
    let mut output = Vec::new();
    let result = run_source(src, &mut output, &mut "".as_bytes());
    (result, String::from_utf8(output).expect("program output is UTF-8"))
}

// ============================================================================
// Strategies
// ============================================================================

fn arb_integer() -> impl Strategy<Value = String> {
    any::<i64>().prop_map(|n| n.to_string())
}

fn arb_real() -> impl Strategy<Value = String> {
    (any::<i32>(), 0u32..10_000).prop_map(|(whole, fraction)| format!("{whole}.{fraction}"))
}

fn arb_literal() -> impl Strategy<Value = String> {
    prop_oneof![arb_integer(),
                arb_real(),
                "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
                Just("Yes".to_string()),
                Just("No".to_string()),
                prop::collection::vec(arb_integer(), 0..4).prop_map(|items| {
                                                               format!("[ {} ]", items.join(" "))
                                                           }),]
}

fn arb_arithmetic_op() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("+"), Just("-"), Just("*"), Just("/"), Just("%")]
}

fn arb_false_guard() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("No"), Just("Yes not"), Just("1 2 ="), Just("2.0 1.0 <")]
}

/// Statements that would print, fail or exit if they ever ran.
fn arb_loop_body() -> impl Strategy<Value = String> {
    let statement = prop_oneof![arb_literal(),
                                Just("printLine".to_string()),
                                Just("undefinedWord".to_string()),
                                Just("1 0 /".to_string()),
                                Just("No assert".to_string()),
                                Just("7 exit".to_string()),];
    prop::collection::vec(statement, 0..8).prop_map(|body| body.join(" "))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn integer_literals_round_trip(n in any::<i64>()) {
        let location = Location::new(&Rc::from("prop.stko"), 1);
        prop_assert_eq!(parse_scalar(&n.to_string(), &location), Some(Ok(Value::Integer(n))));

        let (result, output) = run(&format!("{n} printLine"));
        prop_assert!(matches!(result, Ok(0)));
        prop_assert_eq!(output, format!("{n}\n"));
    }

    #[test]
    fn integers_and_reals_never_mix(integer in arb_integer(),
                                    real in arb_real(),
                                    op in arb_arithmetic_op(),
                                    integer_first in any::<bool>()) {
        let src = if integer_first {
            format!("{integer} {real} {op}")
        } else {
            format!("{real} {integer} {op}")
        };

        let (result, _) = run(&src);
        prop_assert!(matches!(result, Err(Error::Runtime(RuntimeError::TypeMismatch { .. }))),
                     "{} gave {:?}", src, result);
    }

    #[test]
    fn false_while_guard_never_runs_the_body(guard in arb_false_guard(), body in arb_loop_body()) {
        let (result, output) = run(&format!("{guard} while {{ {body} }} \"done\" printLine"));

        prop_assert!(matches!(result, Ok(0)));
        prop_assert_eq!(output, "done\n");
    }

    #[test]
    fn dup_then_pop_leaves_the_stack_unchanged(values in prop::collection::vec(arb_literal(), 1..6)) {
        let pushes = values.join(" ");
        let prints = " printLine".repeat(values.len());

        let (plain, plain_output) = run(&format!("{pushes}{prints}"));
        let (duped, duped_output) = run(&format!("{pushes} dup pop{prints}"));

        prop_assert!(matches!(plain, Ok(0)));
        prop_assert!(matches!(duped, Ok(0)));
        prop_assert_eq!(plain_output, duped_output);
    }
}
