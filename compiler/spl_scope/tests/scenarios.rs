//! End-to-end checks of whole programs through `check_program`.
//!
//! Each test builds the tree a parser would produce for a small SPL program
//! and inspects either the annotated tree or the reported errors.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use spl_diagnostic::{DiagnosticQueue, ErrorCode};
use spl_ir::{BinaryOp, Block, Expr, IdKind, Ident, SourceLocation, Stmt, TreeBuilder};
use spl_scope::{check_program, init_tracing, CheckConfig, CheckError, ProgramError};

fn resolved(ident: &Ident) -> (IdKind, u32, u32) {
    let resolution = ident
        .resolution
        .as_ref()
        .unwrap_or_else(|| panic!("{} is unresolved", ident.name));
    (resolution.kind(), resolution.levels_out(), resolution.offset())
}

fn program_errors(err: CheckError) -> Vec<ProgramError> {
    match err {
        CheckError::Program(errors) => errors,
        CheckError::Internal(err) => panic!("unexpected internal error: {err}"),
    }
}

/// ```text
/// var x, y;
/// procedure q;
///   var x;
///   begin x := x + 1 end;
/// begin x := 2; call q end.
/// ```
#[test]
fn test_shadowing_program_checks_cleanly() {
    init_tracing();
    let b = TreeBuilder::new("shadow.spl");
    let outer_vars = b.var_decl(&["x", "y"]);
    b.newline();
    let q_vars = b.newline().var_decl(&["x"]);
    let q_body = b.newline().assign(
        "x",
        b.binary(BinaryOp::Add, b.var("x"), b.number(1)),
    );
    let q = Block::default()
        .with_vars(vec![q_vars])
        .with_stmts(vec![q_body]);
    let program = b.program(
        Block::default()
            .with_vars(vec![outer_vars])
            .with_procs(vec![b.proc_decl("q", q)])
            .with_stmts(vec![
                b.newline().assign("x", b.number(2)),
                b.call("q"),
            ]),
    );

    let checked = check_program(program, &CheckConfig::default()).unwrap();
    assert_eq!(checked.stats.declarations, 4);
    assert_eq!(checked.stats.resolutions, 4);

    let main = &checked.program.block;
    assert_eq!(main.frame_size, Some(3));

    let q = &main.proc_decls[0].block;
    assert_eq!(q.frame_size, Some(1));
    let Stmt::Assign { target, expr } = &q.stmts.list[0] else {
        panic!("expected assignment in q");
    };
    assert_eq!(resolved(target), (IdKind::Variable, 0, 0));
    assert_eq!(target.resolution.as_ref().map(|r| r.attrs().location().line()), Some(3));
    let Expr::Binary { lhs, .. } = &**expr else {
        panic!("expected x + 1");
    };
    let Expr::Ident(inner_x) = &**lhs else {
        panic!("expected x");
    };
    assert_eq!(resolved(inner_x), (IdKind::Variable, 0, 0));

    let Stmt::Assign { target, .. } = &main.stmts.list[0] else {
        panic!("expected x := 2");
    };
    assert_eq!(resolved(target), (IdKind::Variable, 0, 0));
    assert_eq!(target.resolution.as_ref().map(|r| r.attrs().location().line()), Some(1));

    let Stmt::Call { callee } = &main.stmts.list[1] else {
        panic!("expected call q");
    };
    assert_eq!(resolved(callee), (IdKind::Procedure, 0, 2));
}

/// `var x, x;`
#[test]
fn test_duplicate_variable_reports_once() {
    let b = TreeBuilder::new("dup.spl");
    let program = b.program(Block::default().with_vars(vec![b.var_decl(&["x", "x"])]));

    let errors = program_errors(check_program(program, &CheckConfig::default()).unwrap_err());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "variable \"x\" is already declared as a variable"
    );
    assert_eq!(errors[0].location(), &SourceLocation::new("dup.spl", 1, 7));
}

/// `begin y := 1 end.`
#[test]
fn test_undeclared_assignment_target() {
    let b = TreeBuilder::new("undeclared.spl");
    let y = b.ident("y");
    let use_site = y.location.clone();
    let assign = Stmt::Assign {
        target: y,
        expr: Box::new(b.number(1)),
    };
    let program = b.program(Block::default().with_stmts(vec![assign]));

    let errors = program_errors(check_program(program, &CheckConfig::default()).unwrap_err());
    assert_eq!(use_site, SourceLocation::new("undeclared.spl", 1, 1));
    assert_eq!(
        errors,
        vec![ProgramError::UndeclaredIdentifier {
            name: "y".to_string(),
            location: use_site,
        }]
    );
}

#[test]
fn test_recursive_procedure_resolves() {
    let b = TreeBuilder::new("rec.spl");
    let body = Block::default().with_stmts(vec![b.call("p")]);
    let program = b.program(
        Block::default()
            .with_procs(vec![b.proc_decl("p", body)])
            .with_stmts(vec![b.call("p")]),
    );

    let checked = check_program(program, &CheckConfig::default()).unwrap();
    let body = &checked.program.block.proc_decls[0].block;
    let Stmt::Call { callee } = &body.stmts.list[0] else {
        panic!("expected call p");
    };
    // One boundary out: p lives in the block that declares it.
    assert_eq!(resolved(callee), (IdKind::Procedure, 1, 0));
}

#[test]
fn test_every_undeclared_use_is_reported() {
    let b = TreeBuilder::new("many.spl");
    let program = b.program(Block::default().with_vars(vec![b.var_decl(&["n"])]).with_stmts(vec![
        b.read("a"),
        b.newline().print(b.var("n")),
        b.newline().assign("n", b.binary(BinaryOp::Mul, b.var("b"), b.var("a"))),
    ]));

    let errors = program_errors(check_program(program, &CheckConfig::default()).unwrap_err());
    let sites: Vec<(&str, u32)> = errors
        .iter()
        .map(|err| (err.name(), err.location().line()))
        .collect();
    assert_eq!(sites, vec![("a", 1), ("b", 3), ("a", 3)]);
}

#[test]
fn test_fail_fast_returns_first_error_only() {
    let b = TreeBuilder::new("ff.spl");
    let program = b.program(
        Block::default()
            .with_vars(vec![b.var_decl(&["x", "x"])])
            .with_stmts(vec![b.read("missing")]),
    );

    let errors = program_errors(check_program(program, &CheckConfig::fail_fast()).unwrap_err());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].name(), "x");
}

#[test]
fn test_errors_render_through_diagnostic_queue() {
    let b = TreeBuilder::new("diag.spl");
    let program = b.program(
        Block::default()
            .with_consts(vec![b.const_decl(&[("k", 1)])])
            .with_procs(vec![b.newline().proc_decl("k", Block::default())])
            .with_stmts(vec![b.newline().read("z")]),
    );

    let err = check_program(program, &CheckConfig::default()).unwrap_err();
    let mut queue = DiagnosticQueue::new();
    queue.extend(err.into_diagnostics());
    assert_eq!(queue.error_count(), 2);

    let diags = queue.flush();
    let codes: Vec<ErrorCode> = diags.iter().map(|diag| diag.code).collect();
    assert_eq!(codes, vec![ErrorCode::E2002, ErrorCode::E2001]);
    assert_eq!(
        diags[0].message,
        "procedure \"k\" is already declared as a constant"
    );
    assert_eq!(diags[0].labels.len(), 2);
    assert_eq!(diags[1].message, "identifier \"z\" is not declared");
}
