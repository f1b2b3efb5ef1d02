//! Inline type-annotation syntax, as produced by the external grammar when
//! the dialect enables it.

use crate::ident::Ident;
use crate::macros::span_field;
use common::{Span, Spanned};

/// `: Type`. The span starts at the colon.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAnn {
    pub span: Span,
    pub ty: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Name(TypeName),

    App(TypeApp),

    Union(UnionType),

    /// `?T`
    Nullable(NullableType),

    /// `!T`
    NonNullable(NonNullableType),

    /// `T[]`
    Array(ArrayType),

    Paren(ParenType),

    /// `*`
    Wildcard(WildcardType),
}

impl Spanned for Type {
    fn span(&self) -> Span {
        match self {
            Type::Name(n) => n.span,
            Type::App(n) => n.span,
            Type::Union(n) => n.span,
            Type::Nullable(n) => n.span,
            Type::NonNullable(n) => n.span,
            Type::Array(n) => n.span,
            Type::Paren(n) => n.span,
            Type::Wildcard(n) => n.span,
        }
    }
}

/// Possibly qualified: `foo.bar.Baz`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeName {
    pub span: Span,
    pub parts: Vec<Ident>,
}

/// Generic application: `Name<T, U>`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeApp {
    pub span: Span,
    pub name: TypeName,
    pub type_args: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub span: Span,
    pub types: Vec<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullableType {
    pub span: Span,
    pub ty: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NonNullableType {
    pub span: Span,
    pub ty: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub span: Span,
    pub elem: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParenType {
    pub span: Span,
    pub ty: Box<Type>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WildcardType {
    pub span: Span,
}

span_field!(
    TypeAnn,
    TypeName,
    TypeApp,
    UnionType,
    NullableType,
    NonNullableType,
    ArrayType,
    ParenType,
    WildcardType,
);
