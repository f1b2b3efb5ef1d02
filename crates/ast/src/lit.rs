use crate::macros::span_field;
use atoms::JsWord;
use common::{Span, Spanned};
use num_bigint::BigInt as BigIntValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Lit {
    Str(Str),

    Bool(Bool),

    Null(Null),

    Num(Number),

    BigInt(BigInt),

    Regex(Regex),
}

impl Spanned for Lit {
    fn span(&self) -> Span {
        match self {
            Lit::Str(n) => n.span,
            Lit::Bool(n) => n.span,
            Lit::Null(n) => n.span,
            Lit::Num(n) => n.span,
            Lit::BigInt(n) => n.span,
            Lit::Regex(n) => n.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Str {
    /// Includes the quotes.
    pub span: Span,

    pub value: JsWord,

    /// This includes line escape. `'use\x20strict'` is **not** a directive
    /// even though its value equals one.
    pub has_escape: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bool {
    pub span: Span,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Null {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    pub span: Span,
    /// **Note**: This should not be `NaN`; `NaN` is an identifier.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BigInt {
    /// Includes the `n` suffix.
    pub span: Span,
    pub value: BigIntValue,
}

/// Pattern and flags are kept exactly as written; the span covers the
/// delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct Regex {
    pub span: Span,

    pub exp: JsWord,

    pub flags: JsWord,
}

span_field!(Str, Bool, Null, Number, BigInt, Regex);
