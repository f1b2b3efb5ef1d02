use crate::macros::span_field;
use crate::pat::Pat;
use crate::stmt::BlockStmt;
use crate::types::TypeAnn;
use common::Span;

/// Common parts of function declarations, function expressions and
/// accessors. The span runs from the `function` keyword (or the key, for
/// accessors) through the closing brace of the body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub span: Span,
    pub params: Vec<Param>,
    pub body: BlockStmt,
    pub return_type: Option<TypeAnn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Covers the pattern, any type annotation, and any default value.
    pub span: Span,
    pub pat: Pat,
}

span_field!(Function, Param);
