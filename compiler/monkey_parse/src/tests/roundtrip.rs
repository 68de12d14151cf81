//! Canonical rendering is a fixed point: render, reparse, render again.

use super::{parse_source, render};
use monkey_ir::TokenKind;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn assert_fixed_point(source: &str) {
    let once = render(source);
    let twice = render(&once);
    assert_eq!(twice, once, "source: {source}");
}

#[test]
fn test_fixture_renderings_are_fixed_points() {
    let sources = [
        "-a * b",
        "a * [1, 2, 3, 4][b * c] * d",
        "add(a * b[2], b[1], 2 * [1, 2][1])",
        "3 + 4; -5 * 5",
        "let f = fn(x, y) { let z = x * y; return z + 1; }; f(1, 2)",
        "if (a > b) { a } else { if (b) { } else { !b } }",
        r#"{"one": 1, true: [fn() { return; }], 3: {}}"#,
        r#"let s = "hello " + "world"; len(s)"#,
        "fn(x) { x }(1)[0]",
    ];
    for source in sources {
        assert_fixed_point(source);
    }
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}".prop_filter("keywords are not identifiers", |s| {
        TokenKind::keyword(s).is_none()
    })
}

fn expr_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        ident(),
        (0i64..10_000).prop_map(|n| n.to_string()),
        any::<bool>().prop_map(|b| b.to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("\"{s}\"")),
    ];

    leaf.prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["-", "!"]), inner.clone())
                .prop_map(|(op, e)| format!("{op}{e}")),
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "==", "!="]),
                inner.clone()
            )
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|items| format!("[{}]", items.join(", "))),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| format!("{callee}({})", args.join(", "))),
            (inner.clone(), inner.clone()).prop_map(|(c, i)| format!("{c}[{i}]")),
            (inner.clone(), inner.clone(), proptest::option::of(inner.clone())).prop_map(
                |(cond, then, otherwise)| match otherwise {
                    Some(e) => format!("if ({cond}) {{ {then} }} else {{ {e} }}"),
                    None => format!("if ({cond}) {{ {then} }}"),
                }
            ),
            (prop::collection::vec(ident(), 0..3), inner.clone())
                .prop_map(|(params, body)| format!("fn({}) {{ {body} }}", params.join(", "))),
            prop::collection::vec((inner.clone(), inner.clone()), 0..3).prop_map(|entries| {
                let entries: Vec<String> =
                    entries.iter().map(|(k, v)| format!("{k}: {v}")).collect();
                format!("{{{}}}", entries.join(", "))
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_render_is_fixed_point(source in expr_source()) {
        let (output, interner) = parse_source(&source);
        prop_assume!(!output.has_errors());

        let once = output.program.display(&interner).to_string();
        let (reparsed, interner) = parse_source(&once);
        prop_assert!(
            !reparsed.has_errors(),
            "rendering {:?} failed to parse: {:?}",
            once,
            reparsed.error_messages()
        );
        let twice = reparsed.program.display(&interner).to_string();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_parser_terminates_on_arbitrary_tokens(source in "[a-z0-9 ;:,(){}\\[\\]+*/<>=!-]{0,40}") {
        let (output, _) = parse_source(&source);
        // Every error comes from a real token position.
        for error in &output.errors {
            prop_assert!(error.span.end as usize <= source.len());
        }
    }
}
