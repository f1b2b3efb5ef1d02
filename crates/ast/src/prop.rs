use crate::expr::{Expr, SpreadElement};
use crate::ident::Ident;
use crate::lit::{Number, Str};
use crate::macros::span_field;
use crate::pat::Pat;
use crate::stmt::BlockStmt;
use common::{Span, Spanned};

#[derive(Debug, Clone, PartialEq)]
pub enum PropOrSpread {
    /// Spread properties, e.g. `{a: 1, ...obj, b: 2}`.
    Spread(SpreadElement),

    Prop(Box<Prop>),
}

impl Spanned for PropOrSpread {
    fn span(&self) -> Span {
        match self {
            PropOrSpread::Spread(s) => s.span(),
            PropOrSpread::Prop(p) => p.span(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prop {
    /// `{ a }`
    Shorthand(Ident),

    /// `{ key: value }`
    KeyValue(KeyValueProp),

    Getter(GetterProp),

    Setter(SetterProp),
}

impl Spanned for Prop {
    fn span(&self) -> Span {
        match self {
            Prop::Shorthand(i) => i.span,
            Prop::KeyValue(p) => p.span(),
            Prop::Getter(p) => p.span,
            Prop::Setter(p) => p.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyValueProp {
    pub key: PropName,
    pub value: Box<Expr>,
}

impl Spanned for KeyValueProp {
    fn span(&self) -> Span {
        self.key.span().to(self.value.span())
    }
}

/// Spans from the `get` keyword through the closing brace.
#[derive(Debug, Clone, PartialEq)]
pub struct GetterProp {
    pub span: Span,
    pub key: PropName,
    pub body: BlockStmt,
}

/// Spans from the `set` keyword through the closing brace.
#[derive(Debug, Clone, PartialEq)]
pub struct SetterProp {
    pub span: Span,
    pub key: PropName,
    pub param: Pat,
    pub body: BlockStmt,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropName {
    Ident(Ident),

    /// `{'key': value}`
    Str(Str),

    /// `{1: value}`
    Num(Number),

    Computed(ComputedPropName),
}

impl Spanned for PropName {
    fn span(&self) -> Span {
        match self {
            PropName::Ident(n) => n.span,
            PropName::Str(n) => n.span,
            PropName::Num(n) => n.span,
            PropName::Computed(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedPropName {
    /// Includes the brackets.
    pub span: Span,
    pub expr: Box<Expr>,
}

span_field!(GetterProp, SetterProp, ComputedPropName);
