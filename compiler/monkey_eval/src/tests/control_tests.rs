use super::{error_message, inspect, parse_program, run};
use crate::{eval, new_environment, InterpreterBuilder, Value};
use monkey_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn let_statements() {
    let cases = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).unwrap(), Value::int(expected), "{source}");
    }
}

#[test]
fn let_evaluates_to_null() {
    assert_eq!(run("let a = 5;").unwrap(), Value::Null);
}

#[test]
fn return_statements() {
    let cases = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("let x = 5; return x; x + 1;", 5),
        ("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10),
        (
            "let f = fn(x) { return x; x + 10; }; f(10);",
            10,
        ),
        (
            "let f = fn(x) { let result = x + 10; return result; return 10; }; f(10);",
            20,
        ),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).unwrap(), Value::int(expected), "{source}");
    }
}

#[test]
fn bare_return_is_null() {
    assert_eq!(run("return; 5").unwrap(), Value::Null);
    assert_eq!(run("let f = fn() { return; 1 }; f()").unwrap(), Value::Null);
}

#[test]
fn function_application() {
    let cases = [
        ("let identity = fn(x) { x; }; identity(5);", 5),
        ("let identity = fn(x) { return x; }; identity(5);", 5),
        ("let double = fn(x) { x * 2; }; double(5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fn(x) { x; }(5)", 5),
    ];
    for (source, expected) in cases {
        assert_eq!(run(source).unwrap(), Value::int(expected), "{source}");
    }
}

#[test]
fn closures_capture_defining_scope() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y }; };
        let addTwo = newAdder(2);
        addTwo(3);
    ";
    assert_eq!(run(source).unwrap(), Value::int(5));
}

#[test]
fn independent_closures_do_not_interfere() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y }; };
        let addTwo = newAdder(2);
        let addTen = newAdder(10);
        [addTwo(1), addTen(1), addTwo(1)];
    ";
    assert_eq!(inspect(source), "[3, 11, 3]");
}

#[test]
fn parameters_shadow_outer_bindings() {
    let source = "let x = 1; let f = fn(x) { x * 10 }; [f(5), x]";
    assert_eq!(inspect(source), "[50, 1]");
}

#[test]
fn let_inside_function_stays_local() {
    let source = "let x = 1; let f = fn() { let x = 2; x }; [f(), x]";
    assert_eq!(inspect(source), "[2, 1]");
}

#[test]
fn recursion_through_let_binding() {
    let source = "
        let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } };
        fib(15);
    ";
    assert_eq!(run(source).unwrap(), Value::int(610));
}

#[test]
fn higher_order_functions() {
    let source = "
        let map = fn(arr, f) {
            let iter = fn(arr, acc) {
                if (len(arr) == 0) { acc } else { iter(rest(arr), push(acc, f(first(arr)))) }
            };
            iter(arr, []);
        };
        map([1, 2, 3], fn(x) { x * x });
    ";
    assert_eq!(inspect(source), "[1, 4, 9]");
}

#[test]
fn deep_recursion_without_limit() {
    let source = "
        let count = fn(n) { if (n == 0) { 0 } else { 1 + count(n - 1) } };
        count(5000);
    ";
    assert_eq!(run(source).unwrap(), Value::int(5000));
}

#[test]
fn call_depth_limit() {
    let interner = StringInterner::new();
    let program = parse_program(
        "let loop = fn(n) { loop(n + 1) }; loop(0);",
        &interner,
    );
    let error = InterpreterBuilder::new(&interner, program.arena.clone())
        .max_call_depth(Some(50))
        .build()
        .eval_program(&program)
        .unwrap_err();
    assert_eq!(error.to_string(), "maximum recursion depth exceeded (50)");
}

#[test]
fn call_depth_limit_allows_shallow_calls() {
    let interner = StringInterner::new();
    let program = parse_program(
        "let down = fn(n) { if (n == 0) { 0 } else { down(n - 1) } }; down(9);",
        &interner,
    );
    let result = InterpreterBuilder::new(&interner, program.arena.clone())
        .max_call_depth(Some(10))
        .build()
        .eval_program(&program);
    assert_eq!(result.unwrap(), Value::int(0));
}

#[test]
fn session_environment_persists_across_programs() {
    let interner = StringInterner::new();
    let env = new_environment();
    let first = parse_program("let add = fn(a, b) { a + b }; let x = 40;", &interner);
    eval(&first, &env, &interner).unwrap();
    // The defining program is gone; the closure keeps its arena alive.
    drop(first);
    let second = parse_program("add(x, 2)", &interner);
    assert_eq!(eval(&second, &env, &interner).unwrap(), Value::int(42));
}

#[test]
fn calling_non_function() {
    assert_eq!(error_message("let x = 5; x(1)"), "not a function: INTEGER");
    assert_eq!(error_message("\"f\"()"), "not a function: STRING");
}
