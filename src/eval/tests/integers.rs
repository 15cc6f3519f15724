//! Integer expression evaluation tests.

use super::*;

#[test]
fn test_integer_literals() {
    let cases = [("10", 10), ("5", 5), ("-10", -10), ("-5", -5), ("0", 0)];
    for (input, expected) in cases {
        check_integer(&eval_input(input), expected);
    }
}

#[test]
fn test_integer_arithmetic() {
    let cases = [
        ("5 + 5 + 5 + 5 * 2", 25),
        ("-5 + 5 / 5 + 5 * 2", 6),
        ("-5 + 5 / (5 + 5) * 2", -5),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("50 / 2 * 2 + 10", 60),
        ("20 + 2 * -10", 0),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];
    for (input, expected) in cases {
        check_integer(&eval_input(input), expected);
    }
}

#[test]
fn test_division_truncates_toward_zero() {
    let cases = [("7 / 2", 3), ("-7 / 2", -3), ("7 / -2", -3), ("1 / 2", 0)];
    for (input, expected) in cases {
        check_integer(&eval_input(input), expected);
    }
}

#[test]
fn test_arithmetic_wraps_at_i64_boundaries() {
    check_integer(
        &eval_input("9223372036854775807 + 1"),
        i64::MIN,
    );
    check_integer(
        &eval_input("0 - 9223372036854775807 - 2"),
        i64::MAX,
    );
}

#[test]
fn test_double_negation() {
    check_integer(&eval_input("--5"), 5);
}
