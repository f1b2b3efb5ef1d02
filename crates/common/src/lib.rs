#![deny(unused)]

pub use self::{
    comments::{Comment, CommentKind},
    errors::{DResult, Diagnostic, ErrorReported, Handler, HandlerMode, Severity},
    input::{Input, StringInput},
    pos::{BytePos, Pos, Span, Spanned, DUMMY_SP},
    source_file::{FileName, LineCol, SourceFile, SourceId},
};

pub mod comments;
pub mod errors;
pub mod input;
pub mod pos;
pub mod source_file;
