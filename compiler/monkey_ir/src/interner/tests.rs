use super::*;

#[test]
fn test_intern_deduplicates() {
    let interner = StringInterner::new();
    let a = interner.intern("adder");
    let b = interner.intern("adder");
    let c = interner.intern("other");
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_lookup_round_trip() {
    let interner = StringInterner::new();
    let name = interner.intern("newAdder");
    assert_eq!(interner.lookup(name), "newAdder");
}

#[test]
fn test_empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_keywords_are_pre_interned() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("let");
    interner.intern("return");
    assert_eq!(interner.len(), before);
}

#[test]
fn test_fresh_interner_is_empty_until_something_is_added() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    interner.intern("let");
    assert!(interner.is_empty());
    interner.intern("counter");
    assert!(!interner.is_empty());
}
