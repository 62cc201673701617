use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_same_string_same_name() {
    let interner = StringInterner::new();
    let a = interner.intern("increment");
    let b = interner.intern("increment");
    assert_eq!(a, b);
}

#[test]
fn test_intern_different_strings() {
    let interner = StringInterner::new();
    let a = interner.intern("x");
    let b = interner.intern("y");
    assert_ne!(a, b);
    assert_eq!(interner.lookup(a), "x");
    assert_eq!(interner.lookup(b), "y");
}

#[test]
fn test_empty_string_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_base_type_names_preinterned() {
    let interner = StringInterner::new();
    assert!(interner.get("String").is_some());
    assert!(interner.get("Int").is_some());
    assert!(interner.get("Bool").is_some());
    assert!(interner.get("Float").is_some());
    assert!(interner.get("appending").is_none());
}

#[test]
fn test_len_grows_once_per_string() {
    let interner = StringInterner::new();
    let before = interner.len();
    interner.intern("count");
    interner.intern("count");
    assert_eq!(interner.len(), before + 1);
    assert!(!interner.is_empty());
}

#[test]
fn test_lookup_unknown_name_is_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(u32::MAX)), "");
}

#[test]
fn test_concurrent_interning_agrees() {
    let interner = StringInterner::new();
    let names: Vec<Name> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4).map(|_| s.spawn(|| interner.intern("shared"))).collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or(Name::EMPTY))
            .collect()
    });
    assert!(names.iter().all(|&n| n == names[0]));
    assert_eq!(interner.lookup(names[0]), "shared");
}
