#![allow(dead_code)]

//! Concrete-tree fixtures. Spans are specified by quoting the source text
//! they cover, so a test reads like the program it builds.

use ast::*;
use common::{BytePos, Comment, CommentKind, Diagnostic, Handler, Span, Spanned};
use ir::{Config, Node, NodePos};
use testing::{span_of, span_of_nth};

pub fn pos(line: u32, column: u32, length: u32) -> NodePos {
    NodePos::new(line, column, length)
}

pub fn script(src: &str, body: Vec<Stmt>) -> Script {
    Script {
        span: Span::new(BytePos(0), BytePos(src.len() as u32)),
        body,
    }
}

pub fn ident(src: &str, sym: &str) -> Ident {
    ident_nth(src, sym, 0)
}

pub fn ident_nth(src: &str, sym: &str, nth: usize) -> Ident {
    Ident::new(sym.into(), span_of_nth(src, sym, nth))
}

pub fn binding(src: &str, sym: &str) -> Pat {
    binding_nth(src, sym, 0)
}

pub fn binding_nth(src: &str, sym: &str, nth: usize) -> Pat {
    Pat::Ident(BindingIdent::from(ident_nth(src, sym, nth)))
}

pub fn name(src: &str, sym: &str) -> Expr {
    name_nth(src, sym, 0)
}

pub fn name_nth(src: &str, sym: &str, nth: usize) -> Expr {
    Expr::Ident(ident_nth(src, sym, nth))
}

pub fn num(src: &str, text: &str) -> Expr {
    Expr::Lit(Lit::Num(Number {
        span: span_of(src, text),
        value: text.parse().unwrap(),
    }))
}

/// `quoted` includes the quotes; the value is the interior.
pub fn str_lit(src: &str, quoted: &str) -> Expr {
    Expr::Lit(Lit::Str(Str {
        span: span_of(src, quoted),
        value: quoted[1..quoted.len() - 1].into(),
        has_escape: false,
    }))
}

pub fn eos(expr: Expr) -> ExprOrSpread {
    ExprOrSpread {
        spread: None,
        expr: Box::new(expr),
    }
}

pub fn kv(key: PropName, value: Expr) -> PropOrSpread {
    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
        key,
        value: Box::new(value),
    })))
}

pub fn bin(src: &str, text: &str, op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Bin(BinExpr {
        span: span_of(src, text),
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn assign(op: AssignOp, target: PatOrExpr, value: Expr) -> Expr {
    Expr::Assign(AssignExpr {
        span: target.span().to(value.span()),
        op,
        left: target,
        right: Box::new(value),
    })
}

pub fn call(src: &str, text: &str, callee: Expr, args: Vec<ExprOrSpread>) -> Expr {
    Expr::Call(CallExpr {
        span: span_of(src, text),
        callee: Box::new(callee),
        args,
    })
}

pub fn paren(src: &str, text: &str, inner: Expr) -> Expr {
    Expr::Paren(ParenExpr {
        span: span_of(src, text),
        expr: Box::new(inner),
    })
}

pub fn member(obj: Expr, prop: Ident) -> Expr {
    Expr::Member(MemberExpr {
        span: obj.span().to(prop.span),
        obj: Box::new(obj),
        prop: Box::new(Expr::Ident(prop)),
        computed: false,
    })
}

pub fn expr_stmt(src: &str, text: &str, expr: Expr) -> Stmt {
    Stmt::Expr(ExprStmt {
        span: span_of(src, text),
        expr: Box::new(expr),
    })
}

pub fn block(src: &str, text: &str, stmts: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        span: span_of(src, text),
        stmts,
    }
}

pub fn var_stmt(src: &str, text: &str, decls: Vec<VarDeclarator>) -> Stmt {
    Stmt::Decl(Decl::Var(VarDecl {
        span: span_of(src, text),
        kind: VarDeclKind::Var,
        decls,
    }))
}

pub fn declarator(name: Pat, init: Option<Expr>) -> VarDeclarator {
    let span = match &init {
        Some(e) => name.span().to(e.span()),
        None => name.span(),
    };
    VarDeclarator {
        span,
        name,
        init: init.map(Box::new),
    }
}

pub fn param(pat: Pat) -> Param {
    Param {
        span: pat.span(),
        pat,
    }
}

pub fn fn_decl(
    src: &str,
    text: &str,
    ident: Ident,
    params: Vec<Param>,
    body: BlockStmt,
    return_type: Option<TypeAnn>,
) -> Stmt {
    Stmt::Decl(Decl::Fn(FnDecl {
        ident,
        function: Function {
            span: span_of(src, text),
            params,
            body,
            return_type,
        },
    }))
}

/// A `: Name` annotation; `nth` picks the occurrence of the type name.
pub fn named_type_ann(src: &str, ann_text: &str, ty_name: &str, nth: usize) -> TypeAnn {
    let name_span = span_of_nth(src, ty_name, nth);
    TypeAnn {
        span: span_of(src, ann_text),
        ty: Box::new(Type::Name(TypeName {
            span: name_span,
            parts: vec![Ident::new(ty_name.into(), name_span)],
        })),
    }
}

/// `text` is the whole comment including delimiters.
pub fn doc_comment(src: &str, text: &str) -> Comment {
    Comment {
        span: span_of(src, text),
        kind: CommentKind::Block,
        text: text
            .strip_prefix("/*")
            .unwrap()
            .strip_suffix("*/")
            .unwrap()
            .to_string(),
    }
}

pub fn parse(src: &str, script: &Script) -> (Node, Vec<Diagnostic>) {
    parse_with(src, script, &[], Config::default())
}

pub fn parse_with(
    src: &str,
    script: &Script,
    comments: &[Comment],
    config: Config,
) -> (Node, Vec<Diagnostic>) {
    testing::init();
    let sf = testing::source_file(src);
    let handler = Handler::with_recovery();
    let root = ir::build(script, &sf, comments, &config, &handler).unwrap();
    (root, handler.take())
}

pub fn parse_clean(src: &str, script: &Script) -> Node {
    let (root, diagnostics) = parse(src, script);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {src:?}: {diagnostics:#?}"
    );
    root
}
