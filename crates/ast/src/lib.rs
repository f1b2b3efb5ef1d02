//! Concrete syntax tree produced by the external tokenizer/grammar parser.
//!
//! These types are the input contract of the canonical-tree builder: every
//! struct carries the byte span the parser recorded for it, and alternatives
//! are closed enums. The builder trusts these spans except where a position
//! must be re-derived from source text (array holes, folded literals).

#![deny(unreachable_patterns)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unreachable_pub)]

pub use self::{
    decl::{Decl, FnDecl, VarDecl, VarDeclKind, VarDeclarator},
    expr::{
        ArrayLit, ArrowExpr, AssignExpr, BinExpr, BlockStmtOrExpr, CallExpr, CondExpr, Expr,
        ExprOrSpread, FnExpr, MemberExpr, NewExpr, ObjectLit, ParenExpr, PatOrExpr, SeqExpr,
        SpreadElement, ThisExpr, UnaryExpr, UpdateExpr,
    },
    function::{Function, Param},
    ident::{BindingIdent, Ident},
    lit::{BigInt, Bool, Lit, Null, Number, Regex, Str},
    operators::{AssignOp, BinaryOp, UnaryOp, UpdateOp},
    pat::{ArrayPat, AssignPat, AssignPatProp, KeyValuePatProp, ObjectPat, ObjectPatProp, Pat,
        RestPat},
    prop::{ComputedPropName, GetterProp, KeyValueProp, Prop, PropName, PropOrSpread, SetterProp},
    stmt::{
        BlockStmt, BreakStmt, CatchClause, ContinueStmt, DebuggerStmt, DoWhileStmt, EmptyStmt,
        ExprStmt, ForInStmt, ForOfStmt, ForStmt, IfStmt, LabeledStmt, ReturnStmt, Script, Stmt,
        SwitchCase, SwitchStmt, ThrowStmt, TryStmt, VarDeclOrExpr, VarDeclOrPat, WhileStmt,
        WithStmt,
    },
    types::{
        ArrayType, NonNullableType, NullableType, ParenType, Type, TypeAnn, TypeApp, TypeName,
        UnionType, WildcardType,
    },
};

use common::{Span, Spanned};
use serde::{Deserialize, Serialize};

mod decl;
mod expr;
mod function;
mod ident;
mod lit;
mod macros;
mod operators;
mod pat;
mod prop;
mod stmt;
mod types;

/// ECMAScript dialect accepted by the external grammar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum EsVersion {
    Es3,
    #[default]
    Es5,
    Es2015,
    /// ES2015 plus inline type annotations.
    Es2015Typed,
    EsNext,
}

impl EsVersion {
    pub fn typed(self) -> bool {
        matches!(self, EsVersion::Es2015Typed)
    }
}

/// Error-recovery placeholder emitted by the external parser where it could
/// not produce a real node.
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid {
    pub span: Span,
}

impl Spanned for Invalid {
    fn span(&self) -> Span {
        self.span
    }
}
