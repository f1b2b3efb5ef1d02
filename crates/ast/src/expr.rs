use crate::function::Function;
use crate::ident::Ident;
use crate::lit::Lit;
use crate::macros::span_field;
use crate::operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp};
use crate::pat::Pat;
use crate::prop::PropOrSpread;
use crate::stmt::BlockStmt;
use crate::types::TypeAnn;
use crate::Invalid;
use common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    This(ThisExpr),

    Array(ArrayLit),

    Object(ObjectLit),

    Fn(FnExpr),

    Unary(UnaryExpr),

    /// `++v`, `--v`, `v++`, `v--`
    Update(UpdateExpr),

    Bin(BinExpr),

    Assign(AssignExpr),

    /// A member expression. If computed is true, the node corresponds to a
    /// computed (`a[b]`) member expression and `prop` is an arbitrary
    /// expression; otherwise it corresponds to a static (`a.b`) member
    /// expression.
    Member(MemberExpr),

    /// `test ? cons : alt`
    Cond(CondExpr),

    Call(CallExpr),

    /// `new Cat()`
    New(NewExpr),

    Seq(SeqExpr),

    Ident(Ident),

    Lit(Lit),

    Arrow(ArrowExpr),

    Paren(ParenExpr),

    Invalid(Invalid),
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::This(e) => e.span,
            Expr::Array(e) => e.span,
            Expr::Object(e) => e.span,
            Expr::Fn(e) => e.span(),
            Expr::Unary(e) => e.span,
            Expr::Update(e) => e.span,
            Expr::Bin(e) => e.span,
            Expr::Assign(e) => e.span,
            Expr::Member(e) => e.span,
            Expr::Cond(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::New(e) => e.span,
            Expr::Seq(e) => e.span,
            Expr::Ident(e) => e.span,
            Expr::Lit(e) => e.span(),
            Expr::Arrow(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Invalid(e) => e.span,
        }
    }
}

impl Expr {
    /// Strips grouping parens.
    pub fn unwrap_parens(&self) -> &Expr {
        let mut cur = self;
        while let Expr::Paren(p) = cur {
            cur = &p.expr;
        }
        cur
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThisExpr {
    pub span: Span,
}

/// Array literal. A `None` element is an elision.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLit {
    pub span: Span,
    pub elems: Vec<Option<ExprOrSpread>>,
}

/// Object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectLit {
    pub span: Span,
    pub props: Vec<PropOrSpread>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadElement {
    pub dot3_token: Span,
    pub expr: Box<Expr>,
}

impl Spanned for SpreadElement {
    fn span(&self) -> Span {
        self.dot3_token.to(self.expr.span())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOrSpread {
    /// Span of the `...` token, if any.
    pub spread: Option<Span>,
    pub expr: Box<Expr>,
}

impl Spanned for ExprOrSpread {
    fn span(&self) -> Span {
        match self.spread {
            Some(dot3) => dot3.to(self.expr.span()),
            None => self.expr.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub span: Span,
    pub op: UnaryOp,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    pub span: Span,
    pub op: UpdateOp,
    pub prefix: bool,
    pub arg: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinExpr {
    pub span: Span,
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub span: Span,
    pub op: AssignOp,
    pub left: PatOrExpr,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PatOrExpr {
    Expr(Box<Expr>),
    Pat(Box<Pat>),
}

impl Spanned for PatOrExpr {
    fn span(&self) -> Span {
        match self {
            PatOrExpr::Expr(e) => e.span(),
            PatOrExpr::Pat(p) => p.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpr {
    pub span: Span,
    pub obj: Box<Expr>,
    pub prop: Box<Expr>,
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondExpr {
    pub span: Span,
    pub test: Box<Expr>,
    pub cons: Box<Expr>,
    pub alt: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub span: Span,
    pub callee: Box<Expr>,
    pub args: Vec<ExprOrSpread>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub span: Span,
    pub callee: Box<Expr>,
    /// `None` for `new X` without an argument list.
    pub args: Option<Vec<ExprOrSpread>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeqExpr {
    pub span: Span,
    pub exprs: Vec<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub ident: Option<Ident>,
    pub function: Function,
}

impl Spanned for FnExpr {
    fn span(&self) -> Span {
        self.function.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowExpr {
    pub span: Span,
    pub params: Vec<Pat>,
    pub body: BlockStmtOrExpr,
    pub return_type: Option<TypeAnn>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockStmtOrExpr {
    BlockStmt(BlockStmt),
    Expr(Box<Expr>),
}

impl Spanned for BlockStmtOrExpr {
    fn span(&self) -> Span {
        match self {
            BlockStmtOrExpr::BlockStmt(b) => b.span,
            BlockStmtOrExpr::Expr(e) => e.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenExpr {
    /// Includes the parens.
    pub span: Span,
    pub expr: Box<Expr>,
}

span_field!(
    ThisExpr,
    ArrayLit,
    ObjectLit,
    UnaryExpr,
    UpdateExpr,
    BinExpr,
    AssignExpr,
    MemberExpr,
    CondExpr,
    CallExpr,
    NewExpr,
    SeqExpr,
    ArrowExpr,
    ParenExpr,
);
