//! Operator precedence tests via the canonical pretty-printer.
//!
//! The printer parenthesizes every prefix, infix, and index node, so the
//! printed form makes the parsed precedence explicit.

use super::*;

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a + b - c", "((a + b) - c);"),
        ("a * b * c", "((a * b) * c);"),
        ("a * b / c", "((a * b) / c);"),
        ("a + b / c", "(a + (b / c));"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("3 + 4; -5 * 5", "(3 + 4); ((-5) * 5);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("5 <= 4 != 3 >= 4", "((5 <= 4) != (3 >= 4));"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));",
        ),
        ("true", "true;"),
        ("3 > 5 == false", "((3 > 5) == false);"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2", "((5 + 5) * 2);"),
        ("2 / (5 + 5)", "(2 / (5 + 5));"),
        ("-(5 + 5)", "(-(5 + 5));"),
        ("!(true == true)", "(!(true == true));"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d);"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g));",
        ),
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d);",
        ),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])));",
        ),
        ("-5 + 5 / (5 + 5) * 2", "((-5) + ((5 / (5 + 5)) * 2));"),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "input {:?}", input);
    }
}

#[test]
fn test_comparison_operators_are_left_associative() {
    assert_eq!(parse("a < b < c").to_string(), "((a < b) < c);");
    assert_eq!(parse("a == b == c").to_string(), "((a == b) == c);");
}

#[test]
fn test_prefix_binds_tighter_than_product() {
    assert_eq!(parse("-a * -b").to_string(), "((-a) * (-b));");
}

#[test]
fn test_call_binds_tighter_than_prefix() {
    assert_eq!(parse("-f(x)").to_string(), "(-f(x));");
}

#[test]
fn test_index_binds_tighter_than_call_argument() {
    assert_eq!(parse("f(a[0])").to_string(), "f((a[0]));");
}

/// Parsing the canonical printed form yields the identical canonical
/// form: the printer round-trips through the parser.
#[test]
fn test_pretty_print_round_trip() {
    let inputs = [
        "-5 + 5 / (5 + 5) * 2",
        "let x = 1 + 2 * 3;",
        "if (x < y) { x } else { y }",
        "let add = func(x, y) { x + y; }; add(5 + 5, add(5, 5));",
        "for (i = 0; i < 3; let i = i + 1) { puts(i); }",
        "let a = [1, 2, 3]; a[1 + 1];",
        "return 2 * x;",
        "f(1)(2); a[1][2];",
        "!(true == true)",
    ];

    for input in inputs {
        let printed = parse(input).to_string();
        let reprinted = parse(&printed).to_string();
        assert_eq!(printed, reprinted, "round trip for {:?}", input);
    }
}
