use crate::decl::{Decl, VarDecl};
use crate::expr::Expr;
use crate::ident::Ident;
use crate::macros::span_field;
use crate::pat::Pat;
use common::{Span, Spanned};

/// The root production of the external grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub span: Span,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(BlockStmt),

    Empty(EmptyStmt),

    Debugger(DebuggerStmt),

    With(WithStmt),

    Return(ReturnStmt),

    Labeled(LabeledStmt),

    Break(BreakStmt),

    Continue(ContinueStmt),

    If(IfStmt),

    Switch(SwitchStmt),

    Throw(ThrowStmt),

    /// If `handler` is absent then `finalizer` must be present.
    Try(TryStmt),

    While(WhileStmt),

    DoWhile(DoWhileStmt),

    For(ForStmt),

    ForIn(ForInStmt),

    ForOf(ForOfStmt),

    Decl(Decl),

    Expr(ExprStmt),
}

impl Spanned for Stmt {
    fn span(&self) -> Span {
        match self {
            Stmt::Block(s) => s.span,
            Stmt::Empty(s) => s.span,
            Stmt::Debugger(s) => s.span,
            Stmt::With(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Labeled(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::Switch(s) => s.span,
            Stmt::Throw(s) => s.span,
            Stmt::Try(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::DoWhile(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::ForIn(s) => s.span,
            Stmt::ForOf(s) => s.span,
            Stmt::Decl(s) => s.span(),
            Stmt::Expr(s) => s.span,
        }
    }
}

/// Use when only block statements are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// Span including the braces.
    pub span: Span,
    pub stmts: Vec<Stmt>,
}

/// Includes the trailing semicolon.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub span: Span,
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyStmt {
    /// Span of `;`.
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebuggerStmt {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithStmt {
    pub span: Span,
    pub obj: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub span: Span,
    pub arg: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStmt {
    pub span: Span,
    pub label: Ident,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStmt {
    pub span: Span,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStmt {
    pub span: Span,
    pub label: Option<Ident>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub span: Span,
    pub test: Box<Expr>,
    pub cons: Box<Stmt>,
    pub alt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub span: Span,
    pub discriminant: Box<Expr>,
    pub cases: Vec<SwitchCase>,
}

/// One `case test:` or `default:` clause. The span covers the keyword
/// through the last statement of the clause.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub span: Span,
    /// `None` for `default:`.
    pub test: Option<Box<Expr>>,
    pub cons: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStmt {
    pub span: Span,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub span: Span,
    pub block: BlockStmt,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<BlockStmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    /// Span of `catch (param) { .. }`.
    pub span: Span,
    /// `None` for `catch {}`.
    pub param: Option<Pat>,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub span: Span,
    pub test: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStmt {
    pub span: Span,
    pub test: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub span: Span,
    pub init: Option<VarDeclOrExpr>,
    pub test: Option<Box<Expr>>,
    pub update: Option<Box<Expr>>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForInStmt {
    pub span: Span,
    pub left: VarDeclOrPat,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStmt {
    pub span: Span,
    pub left: VarDeclOrPat,
    pub right: Box<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VarDeclOrPat {
    VarDecl(VarDecl),
    Pat(Box<Pat>),
}

impl Spanned for VarDeclOrPat {
    fn span(&self) -> Span {
        match self {
            VarDeclOrPat::VarDecl(d) => d.span,
            VarDeclOrPat::Pat(p) => p.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VarDeclOrExpr {
    VarDecl(VarDecl),
    Expr(Box<Expr>),
}

impl Spanned for VarDeclOrExpr {
    fn span(&self) -> Span {
        match self {
            VarDeclOrExpr::VarDecl(d) => d.span,
            VarDeclOrExpr::Expr(e) => e.span(),
        }
    }
}

span_field!(
    Script,
    BlockStmt,
    ExprStmt,
    EmptyStmt,
    DebuggerStmt,
    WithStmt,
    ReturnStmt,
    LabeledStmt,
    BreakStmt,
    ContinueStmt,
    IfStmt,
    SwitchStmt,
    SwitchCase,
    ThrowStmt,
    TryStmt,
    CatchClause,
    WhileStmt,
    DoWhileStmt,
    ForStmt,
    ForInStmt,
    ForOfStmt,
);
