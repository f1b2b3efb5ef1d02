use crate::expr::Expr;
use crate::function::Function;
use crate::ident::Ident;
use crate::macros::span_field;
use crate::pat::Pat;
use common::{Span, Spanned};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Fn(FnDecl),
    Var(VarDecl),
}

impl Spanned for Decl {
    fn span(&self) -> Span {
        match self {
            Decl::Fn(d) => d.function.span,
            Decl::Var(d) => d.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub ident: Ident,
    pub function: Function,
}

impl Spanned for FnDecl {
    fn span(&self) -> Span {
        self.function.span
    }
}

/// Includes any trailing semicolon the grammar consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub span: Span,
    pub kind: VarDeclKind,
    pub decls: Vec<VarDeclarator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarDeclKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclarator {
    pub span: Span,
    pub name: Pat,
    pub init: Option<Box<Expr>>,
}

span_field!(VarDecl, VarDeclarator);
