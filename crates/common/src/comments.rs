use crate::pos::Span;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CommentKind {
    Line,
    Block,
}

/// A comment recorded by the external tokenizer.
///
/// `span` covers the delimiters; `text` is the interior only (without `//`,
/// `/*` or `*/`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub span: Span,
    pub kind: CommentKind,
    pub text: String,
}

impl Comment {
    /// A documentation comment is a block comment whose text begins with a
    /// second `*`, i.e. source that opened with `/**`.
    pub fn is_doc(&self) -> bool {
        self.kind == CommentKind::Block && self.text.starts_with('*')
    }
}
