//! Destructuring binding patterns.

use crate::expr::Expr;
use crate::ident::{BindingIdent, Ident};
use crate::macros::span_field;
use crate::prop::PropName;
use crate::types::TypeAnn;
use crate::Invalid;
use common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum Pat {
    Ident(BindingIdent),

    Array(ArrayPat),

    Object(ObjectPat),

    /// A default value: `x = expr`.
    Assign(AssignPat),

    Rest(RestPat),

    Invalid(Invalid),
}

impl Spanned for Pat {
    fn span(&self) -> Span {
        match self {
            Pat::Ident(p) => p.span(),
            Pat::Array(p) => p.span(),
            Pat::Object(p) => p.span(),
            Pat::Assign(p) => p.span,
            Pat::Rest(p) => p.span,
            Pat::Invalid(p) => p.span,
        }
    }
}

/// `[a, , b]`. A `None` element is an elision; the concrete tree carries no
/// token for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPat {
    /// Includes the brackets, excludes any type annotation.
    pub span: Span,
    pub elems: Vec<Option<Pat>>,
    pub type_ann: Option<TypeAnn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPat {
    pub span: Span,
    pub props: Vec<ObjectPatProp>,
    pub type_ann: Option<TypeAnn>,
}

impl Spanned for ArrayPat {
    fn span(&self) -> Span {
        match &self.type_ann {
            Some(ann) => self.span.to(ann.span),
            None => self.span,
        }
    }
}

impl Spanned for ObjectPat {
    fn span(&self) -> Span {
        match &self.type_ann {
            Some(ann) => self.span.to(ann.span),
            None => self.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignPat {
    pub span: Span,
    pub left: Box<Pat>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RestPat {
    pub span: Span,
    pub dot3_token: Span,
    pub arg: Box<Pat>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectPatProp {
    KeyValue(KeyValuePatProp),

    /// `{ key }` or `{ key = value }`.
    Assign(AssignPatProp),

    Rest(RestPat),
}

impl Spanned for ObjectPatProp {
    fn span(&self) -> Span {
        match self {
            ObjectPatProp::KeyValue(p) => p.span(),
            ObjectPatProp::Assign(p) => p.span,
            ObjectPatProp::Rest(p) => p.span,
        }
    }
}

/// `{ key: target }`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValuePatProp {
    pub key: PropName,
    pub value: Box<Pat>,
}

impl Spanned for KeyValuePatProp {
    fn span(&self) -> Span {
        self.key.span().to(self.value.span())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignPatProp {
    pub span: Span,
    pub key: Ident,
    pub value: Option<Box<Expr>>,
}

span_field!(AssignPat, RestPat, AssignPatProp);
