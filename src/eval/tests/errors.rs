//! Runtime error production and propagation tests.

use super::*;

#[test]
fn test_error_messages() {
    let cases = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true;", "unknown operator: -BOOLEAN"),
        ("-\"abc\";", "unknown operator: -STRING"),
        ("false + true; 5;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("\"hello\" - \"world\"; 5;", "unknown operator: STRING - STRING"),
        ("a;", "identifier not found: a"),
        ("[1] + [2];", "unknown operator: LIST + LIST"),
        ("true + false + true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
    ];
    for (input, expected) in cases {
        check_error(&eval_input(input), expected);
    }
}

#[test]
fn test_division_by_zero() {
    check_error(&eval_input("5 / 0"), "division by zero");
    check_error(&eval_input("let x = 0; 10 / x"), "division by zero");
}

#[test]
fn test_first_error_wins() {
    // Later statements never run once a statement errors
    check_error(
        &eval_input("missing; 1 + 1; 2 + 2;"),
        "identifier not found: missing",
    );
}

#[test]
fn test_errors_propagate_out_of_subexpressions() {
    let cases = [
        ("1 + missing", "identifier not found: missing"),
        ("missing + 1", "identifier not found: missing"),
        ("!missing", "identifier not found: missing"),
        ("[1, 2][missing]", "identifier not found: missing"),
        ("missing[0]", "identifier not found: missing"),
        ("missing(1)", "identifier not found: missing"),
        ("len(missing)", "identifier not found: missing"),
    ];
    for (input, expected) in cases {
        check_error(&eval_input(input), expected);
    }
}

#[test]
fn test_argument_error_preempts_the_call() {
    check_error(
        &eval_input("let f = func(x) { 1 }; f(missing);"),
        "identifier not found: missing",
    );
}

#[test]
fn test_errors_are_not_wrapped_in_return() {
    // An error inside a function surfaces as the error itself
    check_error(
        &eval_input("let f = func() { return missing; }; f(); 5;"),
        "identifier not found: missing",
    );
}

#[test]
fn test_error_escapes_nested_blocks() {
    let input = "
    if (true) {
        if (true) {
            5 + true;
        }
        9;
    }
    ";
    check_error(&eval_input(input), "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn test_error_in_for_loop_body() {
    check_error(
        &eval_input("for (i = 0; i < 5; let i = i + 1) { a; }"),
        "identifier not found: a",
    );
}

#[test]
fn test_error_in_for_loop_condition() {
    check_error(
        &eval_input("for (i = 0; a; let i = i + 1) { a; }"),
        "identifier not found: a",
    );
}

#[test]
fn test_error_display_form() {
    let evaluated = eval_input("5 + true");
    assert_eq!(evaluated.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}
