//! Documentation-comment parsing: annotation markers and the embedded
//! type-expression grammar.

use crate::node::NodePos;
use crate::types::{RecordField, TypeExpr};
use atoms::JsWord;
use common::{BytePos, Comment, SourceFile, Span};

mod lexer;

pub use lexer::{JsDocLexer, JsDocToken};

/// One `@`-tag occurrence inside a documentation comment, with the position
/// of its `@` sign. Independent of the annotated node's own position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub name: JsWord,
    /// 1-based.
    pub line: u32,
    /// 0-based character offset.
    pub column: u32,
}

/// Documentation info attached to a node: the comment's markers in source
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocInfo {
    pub markers: Vec<Marker>,
}

/// Everything the builder extracts from one documentation comment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedDoc {
    pub markers: Vec<Marker>,
    /// For a comment that is a bare type expression (`/** string */`), the
    /// parsed declared type.
    pub ty: Option<TypeExpr>,
    /// The comment has text but neither markers nor a type.
    pub free_flowing: bool,
}

/// Parses one documentation comment. Never fails: malformed type syntax
/// degrades to free-flowing text, and tokenization ambiguities are accepted
/// as documented behavior.
pub fn parse_doc(sf: &SourceFile, comment: &Comment) -> ParsedDoc {
    let body_span = Span::new(comment.span.lo + BytePos(2), comment.span.hi);
    let body = sf.snippet(body_span);

    let mut lexer = JsDocLexer::new(body, body_span.lo);
    let mut markers = Vec::new();
    let mut saw_text = false;
    loop {
        let (token, span) = lexer.next_token();
        match token {
            JsDocToken::Annotation(name) => {
                let lc = sf.line_col(span.lo);
                markers.push(Marker {
                    name,
                    line: lc.line,
                    column: lc.col,
                });
            }
            JsDocToken::EndComment | JsDocToken::Eof => break,
            JsDocToken::Eol => {}
            _ => saw_text = true,
        }
    }

    // A comment with no annotations but some content may be a bare inline
    // type. The token stream is single-pass, so re-scan with a fresh one.
    let ty = if markers.is_empty() && saw_text {
        tracing::trace!("doc comment has no annotations; trying inline type parse");
        parse_inline_type(sf, body, body_span.lo)
    } else {
        None
    };

    let free_flowing = markers.is_empty() && ty.is_none() && saw_text;
    ParsedDoc {
        markers,
        ty,
        free_flowing,
    }
}

/// Parses a comment body that consists of exactly one type expression.
fn parse_inline_type(sf: &SourceFile, body: &str, start: BytePos) -> Option<TypeExpr> {
    let mut parser = TypeParser::new(sf, body, start);
    let ty = parser.parse_type()?;
    match parser.cur {
        JsDocToken::EndComment | JsDocToken::Eof => Some(ty),
        _ => None,
    }
}

/// Recursive-descent parser over the token stream for the documentation
/// type grammar.
struct TypeParser<'a> {
    lexer: JsDocLexer<'a>,
    sf: &'a SourceFile,
    cur: JsDocToken,
    cur_span: Span,
    prev_span: Span,
}

impl<'a> TypeParser<'a> {
    fn new(sf: &'a SourceFile, body: &'a str, start: BytePos) -> Self {
        let mut parser = TypeParser {
            lexer: JsDocLexer::new(body, start),
            sf,
            cur: JsDocToken::Eof,
            cur_span: Span::new(start, start),
            prev_span: Span::new(start, start),
        };
        parser.bump();
        parser
    }

    /// Line endings are insignificant inside a type expression.
    fn bump(&mut self) {
        self.prev_span = self.cur_span;
        loop {
            let (token, span) = self.lexer.next_token();
            if token != JsDocToken::Eol {
                self.cur = token;
                self.cur_span = span;
                break;
            }
        }
    }

    fn eat(&mut self, token: JsDocToken) -> bool {
        if self.cur == token {
            self.bump();
            true
        } else {
            false
        }
    }

    fn pos(&self, span: Span) -> NodePos {
        let lc = self.sf.line_col(span.lo);
        NodePos::new(lc.line, lc.col, self.sf.char_len(span))
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.to(self.prev_span)
    }

    fn parse_type(&mut self) -> Option<TypeExpr> {
        let start = self.cur_span;
        let ty = match self.cur.clone() {
            JsDocToken::Star => {
                self.bump();
                TypeExpr::All {
                    pos: self.pos(start),
                }
            }
            JsDocToken::Question => {
                self.bump();
                if starts_type(&self.cur) {
                    let inner = self.parse_type()?;
                    TypeExpr::Nullable {
                        pos: self.pos(self.span_from(start)),
                        ty: Box::new(inner),
                    }
                } else {
                    TypeExpr::Unknown {
                        pos: self.pos(start),
                    }
                }
            }
            JsDocToken::Bang => {
                self.bump();
                let inner = self.parse_type()?;
                TypeExpr::NonNullable {
                    pos: self.pos(self.span_from(start)),
                    ty: Box::new(inner),
                }
            }
            JsDocToken::Ellipsis => {
                self.bump();
                let inner = if starts_type(&self.cur) {
                    Some(Box::new(self.parse_type()?))
                } else {
                    None
                };
                TypeExpr::Rest {
                    pos: self.pos(self.span_from(start)),
                    ty: inner,
                }
            }
            JsDocToken::LParen => {
                self.bump();
                let mut alts = vec![self.parse_type()?];
                while self.eat(JsDocToken::Pipe) {
                    alts.push(self.parse_type()?);
                }
                if !self.eat(JsDocToken::RParen) {
                    return None;
                }
                if alts.len() == 1 {
                    alts.pop().unwrap()
                } else {
                    TypeExpr::Union {
                        pos: self.pos(self.span_from(start)),
                        alts,
                    }
                }
            }
            JsDocToken::LBrace => {
                self.bump();
                let mut fields = Vec::new();
                while self.cur != JsDocToken::RBrace {
                    let field_span = self.cur_span;
                    let name = match self.cur.clone() {
                        JsDocToken::String(name) => name,
                        _ => return None,
                    };
                    self.bump();
                    let field_ty = if self.eat(JsDocToken::Colon) {
                        Some(self.parse_type()?)
                    } else {
                        None
                    };
                    fields.push(RecordField {
                        pos: self.pos(self.span_from(field_span)),
                        name,
                        ty: field_ty,
                    });
                    if !self.eat(JsDocToken::Comma) {
                        break;
                    }
                }
                if !self.eat(JsDocToken::RBrace) {
                    return None;
                }
                TypeExpr::Record {
                    pos: self.pos(self.span_from(start)),
                    fields,
                }
            }
            JsDocToken::String(name) => {
                self.bump();
                if self.eat(JsDocToken::LAngle) {
                    let mut args = vec![self.parse_type()?];
                    while self.eat(JsDocToken::Comma) {
                        args.push(self.parse_type()?);
                    }
                    if !self.eat(JsDocToken::RAngle) {
                        return None;
                    }
                    TypeExpr::App {
                        pos: self.pos(self.span_from(start)),
                        name,
                        args,
                    }
                } else {
                    TypeExpr::Name {
                        pos: self.pos(start),
                        name,
                    }
                }
            }
            _ => return None,
        };

        // `T=` marks an optional parameter type.
        if self.cur == JsDocToken::Eq {
            self.bump();
            return Some(TypeExpr::Optional {
                pos: self.pos(self.span_from(start)),
                ty: Box::new(ty),
            });
        }
        Some(ty)
    }
}

fn starts_type(token: &JsDocToken) -> bool {
    matches!(
        token,
        JsDocToken::String(_)
            | JsDocToken::Star
            | JsDocToken::Question
            | JsDocToken::Bang
            | JsDocToken::LParen
            | JsDocToken::LBrace
            | JsDocToken::Ellipsis
    )
}
