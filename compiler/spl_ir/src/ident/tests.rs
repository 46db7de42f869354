use super::*;
use pretty_assertions::assert_eq;

fn loc(line: u32) -> SourceLocation {
    SourceLocation::new("test.spl", line, 1)
}

#[test]
fn test_kind_display() {
    assert_eq!(IdKind::Variable.to_string(), "variable");
    assert_eq!(IdKind::Constant.to_string(), "constant");
    assert_eq!(IdKind::Procedure.to_string(), "procedure");
}

#[test]
fn test_with_offset_keeps_location_and_kind() {
    let attrs = IdAttrs::new(loc(4), IdKind::Constant, 0).with_offset(3);
    assert_eq!(attrs.offset(), 3);
    assert_eq!(attrs.kind(), IdKind::Constant);
    assert_eq!(attrs.location(), &loc(4));
}

#[test]
fn test_id_use_accessors() {
    let id_use = IdUse::new(IdAttrs::new(loc(1), IdKind::Variable, 2), 3);
    assert_eq!(id_use.levels_out(), 3);
    assert_eq!(id_use.offset(), 2);
    assert_eq!(id_use.kind(), IdKind::Variable);
    assert!(!id_use.is_local());
    assert!(IdUse::new(id_use.attrs().clone(), 0).is_local());
}

#[test]
fn test_ident_starts_unresolved() {
    let ident = Ident::new("x", loc(1));
    assert_eq!(ident.name, "x");
    assert_eq!(ident.resolution, None);
    assert_eq!(ident.kind(), None);
}

#[test]
fn test_ident_kind_after_resolution() {
    let mut ident = Ident::new("p", loc(1));
    ident.resolution = Some(IdUse::new(IdAttrs::new(loc(1), IdKind::Procedure, 0), 1));
    assert_eq!(ident.kind(), Some(IdKind::Procedure));
}
