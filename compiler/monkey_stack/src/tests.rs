use super::ensure_sufficient_stack;

fn nested_sum(depth: u64) -> u64 {
    ensure_sufficient_stack(|| if depth == 0 { 0 } else { nested_sum(depth - 1) + 1 })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(nested_sum(16), 16);
}

#[test]
fn test_deep_nesting_grows_stack() {
    // Far deeper than a default main-thread stack allows without growth.
    assert_eq!(nested_sum(200_000), 200_000);
}

#[test]
fn test_passes_result_through() {
    let result: Result<i64, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}
