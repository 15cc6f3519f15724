//! List literal, indexing, and aliasing tests.

use super::*;

#[test]
fn test_list_literal() {
    let evaluated = eval_input("[1, 2 * 2, 3 + 3]");
    assert_eq!(evaluated.to_string(), "[1, 4, 6]");
}

#[test]
fn test_empty_list() {
    assert_eq!(eval_input("[]").to_string(), "[]");
}

#[test]
fn test_heterogeneous_list() {
    assert_eq!(
        eval_input("[1, \"two\", true]").to_string(),
        "[1, two, true]"
    );
}

#[test]
fn test_index_expressions() {
    let cases = [
        ("[1, 2, 3][0]", 1),
        ("[1, 2, 3][1]", 2),
        ("[1, 2, 3][2]", 3),
        ("let A = [1, 2, 3]; A[1]", 2),
        ("let i = 0; [1][i]", 1),
        ("[1, 2, 3][1 + 1]", 3),
        ("let a = [1, 2, 3]; a[0] + a[1] + a[2]", 6),
    ];
    for (input, expected) in cases {
        check_integer(&eval_input(input), expected);
    }
}

#[test]
fn test_nested_list_indexing() {
    check_integer(&eval_input("[1, [2, 3]][1][0]"), 2);
}

#[test]
fn test_index_out_of_bounds() {
    check_error(
        &eval_input("let a = [1, 2, 3]; a[3]"),
        "Index 3 out of bounds for collection of len 3",
    );
    check_error(
        &eval_input("[1, 2, 3][-1]"),
        "Index -1 out of bounds for collection of len 3",
    );
    check_error(&eval_input("[][0]"), "Index 0 out of bounds for collection of len 0");
}

#[test]
fn test_indexing_a_non_collection() {
    check_error(
        &eval_input("let a = 2; a[3]"),
        "Exprected collection for indexing, got ObjectType.INTEGER",
    );
    check_error(
        &eval_input("\"abc\"[0]"),
        "Exprected collection for indexing, got ObjectType.STRING",
    );
}

#[test]
fn test_indexing_with_a_non_integer() {
    check_error(
        &eval_input("[1, 2][true]"),
        "Exprected collection for indexing, got ObjectType.LIST",
    );
}

#[test]
fn test_lists_alias_on_bind() {
    let evaluated = eval_input("let a = [1]; let b = a; push(2, b); a");
    assert_eq!(evaluated.to_string(), "[1, 2]");
}

#[test]
fn test_list_in_closure_is_shared() {
    let input = "
    let items = [];
    let add = func(x) { push(x, items) };
    add(1); add(2);
    items;
    ";
    assert_eq!(eval_input(input).to_string(), "[1, 2]");
}

#[test]
fn test_element_error_propagates() {
    check_error(&eval_input("[1, missing, 3]"), "identifier not found: missing");
}
