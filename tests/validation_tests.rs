// Integration tests for the validation pipeline

use codebug::{validate, ValidationResult};
use rstest::rstest;

// =============================================================================
// Canonical programs
// =============================================================================

#[rstest]
#[case::function("fc Suma ( param1, param2 ) int {\n\treturn 20\n}")]
#[case::variable("variable:20")]
#[case::for_loop("for 0; i<10; 1++ {\n\treturn 20\n}")]
#[case::if_statement("if ( x>10 ) {\n\treturn 20\n}")]
fn canonical_examples_are_valid(#[case] source: &str) {
    let result = validate(source);
    assert!(result.valid, "expected valid, got {:?}", result.message);
    assert_eq!(result.message, None);
}

#[test]
fn empty_program_is_valid() {
    assert!(validate("").valid);
    assert!(validate("\n\n   \t\n").valid);
}

// =============================================================================
// Accept / reject pairs
// =============================================================================

#[rstest]
#[case::leading_digit("1x:5", false)]
#[case::underscore("_x:5", true)]
#[case::empty_value("x:", false)]
#[case::bool_return_type("fc f(a) bool {\n\treturn 1\n}", false)]
#[case::int_return_type("fc f(a) int {\n\treturn 1\n}", true)]
#[case::float_return_type("fc f(a) float {\n\treturn 1.5\n}", true)]
#[case::string_return_type("fc f(a) string {\n\treturn s\n}", true)]
#[case::no_params("fc f() int {\n\treturn 1\n}", false)]
#[case::blank_return("fc Suma ( param1, param2 ) int {\n\treturn\n}", false)]
#[case::missing_return("fc f ( a ) int {\n\tx:1\n}", false)]
#[case::identifier_increment("for i; i<10; i++ {\n\treturn 1\n}", false)]
#[case::numeric_increment("for 0; i<10; 1++ {\n\treturn 1\n}", true)]
#[case::bare_for_condition("for i; j; 1++ {\n\treturn 20\n}", true)]
#[case::if_without_operator("if ( x ) {\n\treturn 1\n}", false)]
#[case::if_with_operator("if ( x>10 ) {\n\treturn 1\n}", true)]
#[case::if_spaced_operator("if ( x >= 10 ) {\n\treturn 1\n}", true)]
#[case::empty_if_body("if ( x>10 ) {\n}", false)]
#[case::free_code_line("print hello world", true)]
fn grammar_rules(#[case] source: &str, #[case] expected: bool) {
    let result = validate(source);
    assert_eq!(
        result.valid, expected,
        "source {:?} gave {:?}",
        source, result.message
    );
}

// =============================================================================
// Structural checks
// =============================================================================

#[rstest]
#[case::extra_brace("variable:20\n}")]
#[case::missing_brace("if ( x>10 ) {\n\treturn 20")]
#[case::extra_paren("x:(1))")]
#[case::closer_first("}\nx:1\n{")]
#[case::two_clause_for("for 0; i<10 {\n\treturn 1\n}")]
#[case::brace_not_on_own_line("if ( x>10 ) {\n\treturn 20 }")]
fn structural_errors(#[case] source: &str) {
    let result = validate(source);
    assert!(!result.valid);
    let message = result.message.unwrap_or_default();
    assert!(
        message.starts_with("Structural error"),
        "unexpected message: {}",
        message
    );
}

// =============================================================================
// Nesting
// =============================================================================

#[test]
fn nested_function_loop_if_return() {
    let source = r#"
fc Tally ( limit ) int {
    for 0; i<limit; 1++ {
        if ( i == limit ) {
            return i
        }
    }
    return 0
}
"#;

    let result = validate(source);
    assert!(result.valid, "unexpected failure: {:?}", result.message);
}

#[test]
fn violation_in_function_body_is_found() {
    let source = r#"
fc Tally ( limit ) int {
    if ( limit ) {
        return limit
    }
    return 0
}
"#;

    let result = validate(source);
    assert!(!result.valid);
    assert_eq!(
        result.message.as_deref(),
        Some("Syntax error: if condition must compare two operands with ==, !=, <=, >=, < or >")
    );
}

#[test]
fn loop_body_inside_function_is_not_walked() {
    let source = r#"
fc Tally ( limit ) int {
    for 0; i<limit; 1++ {
        if ( i ) {
            return i
        }
    }
    return 0
}
"#;

    assert!(validate(source).valid);
}

#[rstest]
#[case::if_body("if ( x>10 ) {\n\t1x:5\n}")]
#[case::for_body("for 0; i<10; 1++ {\n\tx:\n}")]
#[case::if_inside_if("if ( x>10 ) {\n\tif ( y ) {\n\t\treturn 1\n\t}\n}")]
fn block_bodies_outside_functions_are_not_checked(#[case] source: &str) {
    assert_eq!(validate(source), ValidationResult::valid());
}

#[test]
fn sibling_blocks_are_independent() {
    let source = r#"
fc First ( a ) int {
    if ( a > 1 ) {
        return a
    }
    return 1
}
fc Second ( b ) float {
    return 2.5
}
total:3
"#;

    assert!(validate(source).valid);
}

#[test]
fn later_sibling_failure_is_reported() {
    let source = "fc First ( a ) int {\n return a\n}\nfc Second ( b ) bool {\n return b\n}";

    let result = validate(source);
    assert!(!result.valid);
    assert_eq!(
        result.message.as_deref(),
        Some("Syntax error: function return type must be int, float or string")
    );
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_calls_agree() {
    let sources = [
        "",
        "variable:20",
        "1x:5",
        "variable:20\n}",
        "fc f(a) int {\n\treturn 1\n}",
    ];

    for source in sources {
        assert_eq!(validate(source), validate(source));
    }
}

#[test]
fn concurrent_calls_agree() {
    let source = "fc f ( a ) int {\n for 0; i<3; 1++ {\n  return 1\n }\n return 0\n}";
    let expected = validate(source);

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || validate(source)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
