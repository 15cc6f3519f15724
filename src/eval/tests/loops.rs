//! For statement evaluation tests.

use super::*;

#[test]
fn test_for_loop_product() {
    let input = "
    let prod = 1;
    for (i = 1; i <= 5; let i = i + 1) {
        let prod = prod * i;
    }
    prod;
    ";
    check_integer(&eval_input(input), 120);
}

#[test]
fn test_for_loop_sum() {
    let input = "
    let sum = 0;
    for (i = 0; i < 10; let i = i + 1) {
        let sum = sum + i;
    }
    sum;
    ";
    check_integer(&eval_input(input), 45);
}

#[test]
fn test_for_statement_yields_null() {
    check_null(&eval_input("for (i = 0; i < 1; let i = i + 1) {}"));
}

#[test]
fn test_counter_is_bound_in_the_enclosing_frame() {
    check_integer(&eval_input("for (i = 0; i < 3; let i = i + 1) {} i;"), 3);
}

#[test]
fn test_body_bindings_persist_after_the_loop() {
    check_integer(
        &eval_input("for (i = 0; i < 3; let i = i + 1) { let last = i; } last;"),
        2,
    );
}

#[test]
fn test_initial_value_evaluated_once() {
    // The counter update is observable: a re-evaluated initializer would
    // reset the list length every iteration
    let input = "
    let log = [];
    for (i = len(push(0, log)) - 1; i < 3; let i = i + 1) {}
    len(log);
    ";
    check_integer(&eval_input(input), 1);
}

#[test]
fn test_loop_body_never_runs_when_condition_starts_false() {
    check_integer(
        &eval_input("let x = 1; for (i = 0; false; let i = i + 1) { let x = 99; } x;"),
        1,
    );
}

#[test]
fn test_condition_error_propagates() {
    check_error(
        &eval_input("for (i = 0; missing; let i = i + 1) {}"),
        "identifier not found: missing",
    );
}

#[test]
fn test_body_error_propagates() {
    check_error(
        &eval_input("for (i = 0; i < 5; let i = i + 1) { missing; }"),
        "identifier not found: missing",
    );
}

#[test]
fn test_initializer_error_propagates() {
    check_error(
        &eval_input("for (i = missing; i < 5; let i = i + 1) {}"),
        "identifier not found: missing",
    );
}

#[test]
fn test_update_rule_error_propagates() {
    check_error(
        &eval_input("for (i = 0; i < 5; let i = i + missing) {}"),
        "identifier not found: missing",
    );
}

#[test]
fn test_nested_loops() {
    let input = "
    let total = 0;
    for (i = 0; i < 3; let i = i + 1) {
        for (j = 0; j < 3; let j = j + 1) {
            let total = total + 1;
        }
    }
    total;
    ";
    check_integer(&eval_input(input), 9);
}
