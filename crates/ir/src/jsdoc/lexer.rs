//! Token stream over documentation-comment bodies.
//!
//! A single-pass cursor: each call to [JsDocLexer::next_token] advances and
//! returns one token. The stream is not restartable; construct a new one to
//! re-scan.

use atoms::JsWord;
use common::{BytePos, Input, Span, StringInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsDocToken {
    /// `@name`. The value excludes the `@`.
    Annotation(JsWord),
    LBrace,
    RBrace,
    LAngle,
    RAngle,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Pipe,
    Bang,
    Question,
    Eq,
    Colon,
    Comma,
    /// Exactly three dots. Longer dot runs fold the leftovers into the
    /// neighboring string atom.
    Ellipsis,
    Star,
    /// Maximal run of characters with no other meaning to the grammar.
    /// Dots are ordinary atom characters (`foo.Bar`), which is also why a
    /// trailing ellipsis is absorbed into a preceding atom.
    String(JsWord),
    /// Distinct from [JsDocToken::EndComment] so that callers can tell a
    /// line ending from the comment ending.
    Eol,
    /// `*/`
    EndComment,
    /// The input ran out without `*/`.
    Eof,
}

pub struct JsDocLexer<'a> {
    input: StringInput<'a>,
    at_line_start: bool,
}

impl<'a> JsDocLexer<'a> {
    /// `text` is the comment source just past the opening `/*`, including
    /// the closing `*/` when the comment was terminated. `start` is the
    /// absolute position of the first byte of `text`.
    pub fn new(text: &'a str, start: BytePos) -> Self {
        JsDocLexer {
            input: StringInput::new(text, start),
            // The `*` of `/**` is skipped like a continuation star.
            at_line_start: true,
        }
    }

    pub fn next_token(&mut self) -> (JsDocToken, Span) {
        loop {
            self.input
                .uncons_while(|c| c.is_whitespace() && !is_line_break(c));
            if self.at_line_start {
                self.at_line_start = false;
                // Decoration stars on continuation lines.
                let mut skipped = false;
                while self.input.is_char('*') && self.input.peek() != Some('/') {
                    self.input.bump();
                    skipped = true;
                }
                if skipped {
                    continue;
                }
            }
            break;
        }

        let start = self.input.cur_pos();
        let c = match self.input.cur() {
            Some(c) => c,
            None => return (JsDocToken::Eof, Span::new(start, start)),
        };

        let token = match c {
            c if is_line_break(c) => {
                self.input.bump();
                if c == '\r' {
                    self.input.eat_char('\n');
                }
                self.at_line_start = true;
                JsDocToken::Eol
            }
            '{' => self.punct(JsDocToken::LBrace),
            '}' => self.punct(JsDocToken::RBrace),
            '<' => self.punct(JsDocToken::LAngle),
            '>' => self.punct(JsDocToken::RAngle),
            '(' => self.punct(JsDocToken::LParen),
            ')' => self.punct(JsDocToken::RParen),
            '[' => self.punct(JsDocToken::LBracket),
            ']' => self.punct(JsDocToken::RBracket),
            '|' => self.punct(JsDocToken::Pipe),
            '!' => self.punct(JsDocToken::Bang),
            '?' => self.punct(JsDocToken::Question),
            '=' => self.punct(JsDocToken::Eq),
            ':' => self.punct(JsDocToken::Colon),
            ',' => self.punct(JsDocToken::Comma),
            '*' => {
                self.input.bump();
                if self.input.eat_char('/') {
                    JsDocToken::EndComment
                } else {
                    JsDocToken::Star
                }
            }
            '.' if self.input.peek() == Some('.') && self.input.peek_ahead() == Some('.') => {
                self.input.bump();
                self.input.bump();
                self.input.bump();
                JsDocToken::Ellipsis
            }
            '@' => {
                self.input.bump();
                let name = self
                    .input
                    .uncons_while(|c| c.is_alphanumeric() || c == '_');
                JsDocToken::Annotation(name.into())
            }
            _ => {
                let text = self.input.uncons_while(is_atom_char);
                JsDocToken::String(text.into())
            }
        };

        (token, Span::new(start, self.input.cur_pos()))
    }

    fn punct(&mut self, token: JsDocToken) -> JsDocToken {
        self.input.bump();
        token
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace()
        && !matches!(
            c,
            '@' | '{'
                | '}'
                | '<'
                | '>'
                | '('
                | ')'
                | '['
                | ']'
                | '|'
                | '!'
                | '?'
                | '='
                | ':'
                | ','
                | '*'
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::BytePos;
    use pretty_assertions::assert_eq;

    fn tokens(text: &str) -> Vec<JsDocToken> {
        let mut lexer = JsDocLexer::new(text, BytePos(0));
        let mut out = Vec::new();
        loop {
            let (tok, _) = lexer.next_token();
            let done = matches!(tok, JsDocToken::Eof | JsDocToken::EndComment);
            out.push(tok);
            if done {
                break;
            }
        }
        out
    }

    fn atom(s: &str) -> JsDocToken {
        JsDocToken::String(s.into())
    }

    fn annotation(s: &str) -> JsDocToken {
        JsDocToken::Annotation(s.into())
    }

    #[test]
    fn annotation_and_braced_type() {
        assert_eq!(
            tokens("* @param {string} name */"),
            vec![
                annotation("param"),
                JsDocToken::LBrace,
                atom("string"),
                JsDocToken::RBrace,
                atom("name"),
                JsDocToken::EndComment,
            ]
        );
    }

    #[test]
    fn whitespace_and_continuation_stars_are_invisible() {
        let padded = [
            "* @param {string} name */",
            "*   @param   { string }   name   */",
            "*\n * @param\n * {string} name\n */",
            "*\n *** @param\n *\t{string}\tname\n **/",
        ];
        let logical: Vec<Vec<JsDocToken>> = padded
            .iter()
            .map(|t| {
                tokens(t)
                    .into_iter()
                    .filter(|t| !matches!(t, JsDocToken::Eol))
                    .collect()
            })
            .collect();
        assert_eq!(logical[0], logical[1]);
        assert_eq!(logical[0], logical[2]);
        assert_eq!(logical[0], logical[3]);
    }

    #[test]
    fn eol_is_distinct_from_end_of_comment() {
        assert_eq!(
            tokens("* @see\nfoo */"),
            vec![
                annotation("see"),
                JsDocToken::Eol,
                atom("foo"),
                JsDocToken::EndComment,
            ]
        );
        // Unterminated comment: the stream ends with Eof, not EndComment.
        assert_eq!(tokens("* @see foo"), vec![annotation("see"), atom("foo"), JsDocToken::Eof]);
    }

    #[test]
    fn dots_inside_atoms_stay_in_the_atom() {
        assert_eq!(tokens("* foo.Bar */"), vec![atom("foo.Bar"), JsDocToken::EndComment]);
    }

    #[test]
    fn ellipsis_at_token_start() {
        assert_eq!(
            tokens("* {...string} */"),
            vec![
                JsDocToken::LBrace,
                JsDocToken::Ellipsis,
                atom("string"),
                JsDocToken::RBrace,
                JsDocToken::EndComment,
            ]
        );
    }

    #[test]
    fn long_dot_runs_fold_leftovers_into_atoms() {
        // Four dots: one ellipsis, the leftover dot opens the next atom.
        assert_eq!(
            tokens("* ....x, */"),
            vec![
                JsDocToken::Ellipsis,
                atom(".x"),
                JsDocToken::Comma,
                JsDocToken::EndComment,
            ]
        );
        // Six dots: two ellipses.
        assert_eq!(
            tokens("* ......, */"),
            vec![
                JsDocToken::Ellipsis,
                JsDocToken::Ellipsis,
                JsDocToken::Comma,
                JsDocToken::EndComment,
            ]
        );
    }

    #[test]
    fn trailing_ellipsis_is_absorbed_into_a_preceding_atom() {
        // Documented approximation: `foo...` is one atom, not atom+ellipsis.
        assert_eq!(tokens("* foo... */"), vec![atom("foo..."), JsDocToken::EndComment]);
    }

    #[test]
    fn structural_punctuation() {
        assert_eq!(
            tokens("* (a|b)<c>[d]?!=:, */"),
            vec![
                JsDocToken::LParen,
                atom("a"),
                JsDocToken::Pipe,
                atom("b"),
                JsDocToken::RParen,
                JsDocToken::LAngle,
                atom("c"),
                JsDocToken::RAngle,
                JsDocToken::LBracket,
                atom("d"),
                JsDocToken::RBracket,
                JsDocToken::Question,
                JsDocToken::Bang,
                JsDocToken::Eq,
                JsDocToken::Colon,
                JsDocToken::Comma,
                JsDocToken::EndComment,
            ]
        );
    }

    #[test]
    fn spans_point_into_the_original_text() {
        let text = "* @type x */";
        let mut lexer = JsDocLexer::new(text, BytePos(10));
        let (tok, span) = lexer.next_token();
        assert_eq!(tok, annotation("type"));
        // '@' is at offset 2 of the body, shifted by the start position.
        assert_eq!(span.lo, BytePos(12));
        assert_eq!(span.hi, BytePos(17));
    }
}
