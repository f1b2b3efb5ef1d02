use crate::types::TypeAnn;
use atoms::JsWord;
use common::{Span, Spanned};

/// Ident with span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ident {
    pub span: Span,
    pub sym: JsWord,
}

impl Ident {
    pub const fn new(sym: JsWord, span: Span) -> Self {
        Ident { span, sym }
    }
}

impl AsRef<str> for Ident {
    fn as_ref(&self) -> &str {
        &self.sym
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        self.span
    }
}

/// Identifier used as a pattern, with an optional inline type annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingIdent {
    pub id: Ident,
    pub type_ann: Option<TypeAnn>,
}

impl From<Ident> for BindingIdent {
    fn from(id: Ident) -> Self {
        Self { id, type_ann: None }
    }
}

impl Spanned for BindingIdent {
    fn span(&self) -> Span {
        match &self.type_ann {
            Some(ann) => self.id.span.to(ann.span),
            None => self.id.span,
        }
    }
}
