//! Validation diagnostics: assignment/update/delete targets, type-syntax
//! conflicts, and the two recovery modes.

mod common;

use self::common::*;
use ast::*;
use ir::{Config, StrictPolicy};
use pretty_assertions::assert_eq;

fn assign_stmt(src: &str, text: &str, target: Expr, value: Expr) -> Stmt {
    expr_stmt(
        src,
        text,
        assign(AssignOp::Assign, PatOrExpr::Expr(Box::new(target)), value),
    )
}

#[test]
fn references_assign_without_diagnostics() {
    let src = "x = 1;";
    let stmt = assign_stmt(src, src, name(src, "x"), num(src, "1"));
    parse_clean(src, &script(src, vec![stmt]));

    let src = "x.y = 1;";
    let stmt = assign_stmt(src, src, member(name(src, "x"), ident(src, "y")), num(src, "1"));
    parse_clean(src, &script(src, vec![stmt]));

    // A property of a call result is a reference even though the call
    // itself is not.
    let src = "f().y = 1;";
    let target = member(
        call(src, "f()", name(src, "f"), vec![]),
        ident(src, "y"),
    );
    let stmt = assign_stmt(src, src, target, num(src, "1"));
    parse_clean(src, &script(src, vec![stmt]));
}

#[test]
fn non_references_cannot_be_assigned() {
    let src = "(x||y) = 1;";
    let target = paren(
        src,
        "(x||y)",
        bin(src, "x||y", BinaryOp::LogicalOr, name(src, "x"), name(src, "y")),
    );
    let (_, diagnostics) = parse(src, &script(src, vec![assign_stmt(src, src, target, num(src, "1"))]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "invalid assignment target");
    assert_eq!(diagnostics[0].span, testing::span_of(src, "(x||y)"));

    let src = "(x?y:z) = 1;";
    let target = paren(
        src,
        "(x?y:z)",
        Expr::Cond(CondExpr {
            span: testing::span_of(src, "x?y:z"),
            test: Box::new(name(src, "x")),
            cons: Box::new(name(src, "y")),
            alt: Box::new(name(src, "z")),
        }),
    );
    let (_, diagnostics) = parse(src, &script(src, vec![assign_stmt(src, src, target, num(src, "1"))]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "invalid assignment target");

    let src = "f() = 1;";
    let target = call(src, "f()", name(src, "f"), vec![]);
    let (_, diagnostics) = parse(src, &script(src, vec![assign_stmt(src, src, target, num(src, "1"))]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "invalid assignment target");
}

#[test]
fn call_updates_use_target_wording() {
    let cases = [
        ("f()++;", "f()++", UpdateOp::PlusPlus, false, "invalid increment target"),
        ("f()--;", "f()--", UpdateOp::MinusMinus, false, "invalid decrement target"),
        ("++f();", "++f()", UpdateOp::PlusPlus, true, "invalid increment target"),
        ("--f();", "--f()", UpdateOp::MinusMinus, true, "invalid decrement target"),
    ];
    for (src, text, op, prefix, expected) in cases {
        let update = Expr::Update(UpdateExpr {
            span: testing::span_of(src, text),
            op,
            prefix,
            arg: Box::new(call(src, "f()", name(src, "f"), vec![])),
        });
        let (_, diagnostics) = parse(src, &script(src, vec![expr_stmt(src, src, update)]));
        assert_eq!(diagnostics.len(), 1, "for {src}");
        assert_eq!(diagnostics[0].message, expected, "for {src}");
    }
}

#[test]
fn other_non_references_use_operand_wording() {
    let src = "(x||y)++;";
    let update = Expr::Update(UpdateExpr {
        span: testing::span_of(src, "(x||y)++"),
        op: UpdateOp::PlusPlus,
        prefix: false,
        arg: Box::new(paren(
            src,
            "(x||y)",
            bin(src, "x||y", BinaryOp::LogicalOr, name(src, "x"), name(src, "y")),
        )),
    });
    let (_, diagnostics) = parse(src, &script(src, vec![expr_stmt(src, src, update)]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Invalid increment operand");

    let src = "--(x?y:z);";
    let update = Expr::Update(UpdateExpr {
        span: testing::span_of(src, "--(x?y:z)"),
        op: UpdateOp::MinusMinus,
        prefix: true,
        arg: Box::new(paren(
            src,
            "(x?y:z)",
            Expr::Cond(CondExpr {
                span: testing::span_of(src, "x?y:z"),
                test: Box::new(name(src, "x")),
                cons: Box::new(name(src, "y")),
                alt: Box::new(name(src, "z")),
            }),
        )),
    });
    let (_, diagnostics) = parse(src, &script(src, vec![expr_stmt(src, src, update)]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Invalid decrement operand");
}

fn delete_stmt(src: &str, text: &str, arg: Expr) -> Stmt {
    expr_stmt(
        src,
        text,
        Expr::Unary(UnaryExpr {
            span: testing::span_of(src, text.trim_end_matches(';')),
            op: UnaryOp::Delete,
            arg: Box::new(arg),
        }),
    )
}

#[test]
fn delete_is_validated_against_strictness() {
    // Sloppy mode: properties and bare names are both deletable.
    let src = "delete x.y;";
    let stmt = delete_stmt(src, "delete x.y;", member(name(src, "x"), ident(src, "y")));
    parse_clean(src, &script(src, vec![stmt]));

    let src = "delete x;";
    let stmt = delete_stmt(src, "delete x;", name(src, "x"));
    parse_clean(src, &script(src, vec![stmt]));

    // Strict configuration rejects deleting a variable.
    let stmt = delete_stmt(src, "delete x;", name(src, "x"));
    let config = Config {
        strict: StrictPolicy::Strict,
        ..Default::default()
    };
    let (_, diagnostics) = parse_with(src, &script(src, vec![stmt]), &[], config);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Invalid delete operand. Cannot delete a variable in strict mode."
    );

    // A directive has the same effect as the configuration.
    let src = "'use strict'; delete x;";
    let stmts = vec![
        expr_stmt(src, "'use strict';", str_lit(src, "'use strict'")),
        delete_stmt(src, "delete x;", name(src, "x")),
    ];
    let (_, diagnostics) = parse(src, &script(src, stmts));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Invalid delete operand. Cannot delete a variable in strict mode."
    );

    // Non-references are never deletable, in either mode.
    let src = "delete 'x';";
    let stmt = delete_stmt(src, "delete 'x';", str_lit(src, "'x'"));
    let (_, diagnostics) = parse(src, &script(src, vec![stmt]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Invalid delete operand. Only properties can be deleted."
    );
}

#[test]
fn jsdoc_and_inline_types_are_mutually_exclusive() {
    let src = "var /** string */ foo: string = 'hello';";
    let comment = doc_comment(src, "/** string */");
    let foo = Pat::Ident(BindingIdent {
        id: ident(src, "foo"),
        type_ann: Some(named_type_ann(src, ": string", "string", 1)),
    });
    let stmt = var_stmt(src, src, vec![declarator(foo, Some(str_lit(src, "'hello'")))]);
    let (_, diagnostics) = parse_with(src, &script(src, vec![stmt]), &[comment], Config::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Bad type syntax - can only have JSDoc or inline type annotations, not both"
    );
    assert_eq!(diagnostics[0].span, testing::span_of(src, ": string"));
}

#[test]
fn annotated_destructuring_parameters_are_unsupported() {
    // An annotation on the pattern itself fails where a `,` was expected.
    let src = "function f([x]: string) { }";
    let pat = Pat::Array(ArrayPat {
        span: testing::span_of(src, "[x]"),
        elems: vec![Some(binding(src, "x"))],
        type_ann: Some(named_type_ann(src, ": string", "string", 0)),
    });
    let stmt = fn_decl(
        src,
        src,
        ident_nth(src, "f", 1),
        vec![param(pat)],
        block(src, "{ }", vec![]),
        None,
    );
    let (_, diagnostics) = parse(src, &script(src, vec![stmt]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "',' expected");

    // An annotation on an element fails where a `]` was expected.
    let src = "function f([x: string]) { }";
    let pat = Pat::Array(ArrayPat {
        span: testing::span_of(src, "[x: string]"),
        elems: vec![Some(Pat::Ident(BindingIdent {
            id: ident(src, "x"),
            type_ann: Some(named_type_ann(src, ": string", "string", 0)),
        }))],
        type_ann: None,
    });
    let stmt = fn_decl(
        src,
        src,
        ident_nth(src, "f", 1),
        vec![param(pat)],
        block(src, "{ }", vec![]),
        None,
    );
    let (_, diagnostics) = parse(src, &script(src, vec![stmt]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "']' expected");

    let src = "function f({x}: string) { }";
    let pat = Pat::Object(ObjectPat {
        span: testing::span_of(src, "{x}"),
        props: vec![ObjectPatProp::Assign(AssignPatProp {
            span: testing::span_of(src, "x"),
            key: ident(src, "x"),
            value: None,
        })],
        type_ann: Some(named_type_ann(src, ": string", "string", 0)),
    });
    let stmt = fn_decl(
        src,
        src,
        ident_nth(src, "f", 1),
        vec![param(pat)],
        block(src, "{ }", vec![]),
        None,
    );
    let (_, diagnostics) = parse(src, &script(src, vec![stmt]));
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "',' expected");
}

#[test]
fn fail_fast_unwinds_without_a_tree() {
    let src = "f() = 1;";
    let target = call(src, "f()", name(src, "f"), vec![]);
    let program = script(src, vec![assign_stmt(src, src, target, num(src, "1"))]);

    testing::init();
    let sf = testing::source_file(src);
    let handler = ::common::Handler::with_fail_fast();
    let result = ir::build(&program, &sf, &[], &Config::default(), &handler);

    assert_eq!(result, Err(::common::ErrorReported));
    // The diagnostic is recorded even though the build unwound.
    assert_eq!(handler.error_count(), 1);
}

#[test]
fn recovery_accumulates_and_keeps_the_tree() {
    let src = "f() = 1; g()++;";
    let assign = assign_stmt(
        src,
        "f() = 1;",
        call(src, "f()", name(src, "f"), vec![]),
        num(src, "1"),
    );
    let update = expr_stmt(
        src,
        "g()++;",
        Expr::Update(UpdateExpr {
            span: testing::span_of(src, "g()++"),
            op: UpdateOp::PlusPlus,
            prefix: false,
            arg: Box::new(call(src, "g()", name(src, "g"), vec![])),
        }),
    );
    let program = script(src, vec![assign, update]);

    testing::init();
    let sf = testing::source_file(src);
    let handler = ::common::Handler::with_recovery();
    let root = ir::build(&program, &sf, &[], &Config::default(), &handler).unwrap();

    // Best effort: both statements are still in the tree.
    assert_eq!(root.children.len(), 2);
    assert_eq!(handler.count(), 2);
    assert!(handler.contains_all(&["invalid assignment target", "invalid increment target"]));
}
