use super::*;
use pretty_assertions::assert_eq;
use spl_ir::{IdKind, SourceLocation};

fn attrs(kind: IdKind) -> IdAttrs {
    IdAttrs::new(SourceLocation::new("scope.spl", 1, 1), kind, 0)
}

#[test]
fn test_new_scope_is_empty() {
    let scope = Scope::new(4);
    assert_eq!(scope.size(), 0);
    assert_eq!(scope.loc_count(), 0);
    assert_eq!(scope.capacity(), 4);
    assert!(!scope.is_full());
    assert_eq!(scope.iter().count(), 0);
}

#[test]
fn test_offsets_follow_insertion_order() {
    let mut scope = Scope::new(16);
    for (rank, name) in ["a", "b", "c", "d"].into_iter().enumerate() {
        let stored = scope.insert(name, attrs(IdKind::Variable)).unwrap();
        assert_eq!(stored.offset() as usize, rank);
    }
    assert_eq!(scope.size(), 4);
    assert_eq!(scope.loc_count(), 4);

    let names: Vec<&str> = scope.iter().map(Association::name).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_insert_ignores_incoming_offset() {
    let mut scope = Scope::new(4);
    let incoming = attrs(IdKind::Constant).with_offset(99);
    let stored = scope.insert("n", incoming).unwrap();
    assert_eq!(stored.offset(), 0);
    assert_eq!(stored.kind(), IdKind::Constant);
}

#[test]
fn test_lookup_and_declared() {
    let mut scope = Scope::new(4);
    scope.insert("x", attrs(IdKind::Variable)).unwrap();
    scope.insert("p", attrs(IdKind::Procedure)).unwrap();

    assert_eq!(scope.lookup("p").unwrap().map(IdAttrs::offset), Some(1));
    assert_eq!(scope.lookup("missing").unwrap(), None);
    assert!(scope.declared("x").unwrap());
    assert!(!scope.declared("y").unwrap());
}

#[test]
fn test_duplicate_insert_leaves_scope_unchanged() {
    let mut scope = Scope::new(4);
    scope.insert("x", attrs(IdKind::Variable)).unwrap();
    scope.insert("y", attrs(IdKind::Variable)).unwrap();

    let err = scope.insert("x", attrs(IdKind::Constant)).unwrap_err();
    assert_eq!(
        err,
        ScopeError::InvariantViolation(Invariant::DuplicateInsert {
            name: "x".to_string()
        })
    );
    assert_eq!(scope.size(), 2);
    assert_eq!(scope.loc_count(), 2);
    assert_eq!(scope.lookup("x").unwrap().map(IdAttrs::kind), Some(IdKind::Variable));
    assert_eq!(scope.lookup("y").unwrap().map(IdAttrs::offset), Some(1));
}

#[test]
fn test_full_scope_rejects_insert() {
    let mut scope = Scope::new(2);
    scope.insert("a", attrs(IdKind::Variable)).unwrap();
    scope.insert("b", attrs(IdKind::Variable)).unwrap();
    assert!(scope.is_full());

    let err = scope.insert("c", attrs(IdKind::Variable)).unwrap_err();
    assert_eq!(
        err,
        ScopeError::CapacityExceeded {
            resource: Resource::ScopeEntries,
            limit: 2,
        }
    );
    assert_eq!(scope.size(), 2);
}

#[test]
fn test_zero_capacity_scope_is_full() {
    let scope = Scope::new(0);
    assert!(scope.is_full());
}

#[test]
fn test_empty_name_is_invariant_violation() {
    let mut scope = Scope::new(4);
    assert_eq!(
        scope.lookup(""),
        Err(ScopeError::InvariantViolation(Invariant::EmptyName))
    );
    assert_eq!(
        scope.insert("", attrs(IdKind::Variable)).unwrap_err(),
        ScopeError::InvariantViolation(Invariant::EmptyName)
    );
    assert_eq!(scope.size(), 0);
}

#[test]
fn test_spills_past_inline_capacity() {
    let mut scope = Scope::new(64);
    let names: Vec<String> = (0..20).map(|i| format!("v{i}")).collect();
    for name in &names {
        scope.insert(name, attrs(IdKind::Variable)).unwrap();
    }
    assert_eq!(scope.lookup("v19").unwrap().map(IdAttrs::offset), Some(19));
    assert_eq!(scope.lookup("v0").unwrap().map(IdAttrs::offset), Some(0));
}

#[test]
fn test_destroy_reports_released_count() {
    let mut scope = Scope::new(4);
    scope.insert("a", attrs(IdKind::Variable)).unwrap();
    scope.insert("b", attrs(IdKind::Constant)).unwrap();
    assert_eq!(scope.destroy(), 2);
    assert_eq!(Scope::new(4).destroy(), 0);
}
