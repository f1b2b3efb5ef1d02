use crate::pos::{BytePos, Pos, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileName {
    Real(PathBuf),
    Custom(String),
    Anon,
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileName::Real(p) => write!(f, "{}", p.display()),
            FileName::Custom(s) => f.write_str(s),
            FileName::Anon => f.write_str("<anon>"),
        }
    }
}

/// Identity of a source file, carried on every tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(pub u32);

/// A 1-based line paired with a 0-based column.
///
/// The column counts *characters* from the start of the line, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// A single piece of source text plus the line table needed to turn byte
/// offsets into line/column pairs.
pub struct SourceFile {
    pub id: SourceId,
    pub name: FileName,
    pub src: String,
    /// Byte offset of the start of each line. `lines[0]` is always 0.
    lines: Vec<BytePos>,
}

impl SourceFile {
    pub fn new(id: SourceId, name: FileName, src: String) -> Self {
        let lines = analyze_lines(&src);
        SourceFile {
            id,
            name,
            src,
            lines,
        }
    }

    pub fn end_pos(&self) -> BytePos {
        BytePos::from_usize(self.src.len())
    }

    /// Index of the line containing `pos` (0-based).
    pub fn lookup_line(&self, pos: BytePos) -> usize {
        self.lines.partition_point(|&start| start <= pos) - 1
    }

    /// Line/column of `pos`. Line is 1-based, column is a 0-based character
    /// offset from the start of the line.
    pub fn line_col(&self, pos: BytePos) -> LineCol {
        let line_idx = self.lookup_line(pos);
        let line_start = self.lines[line_idx].to_usize();
        let col = self.src[line_start..pos.to_usize()].chars().count() as u32;
        LineCol {
            line: line_idx as u32 + 1,
            col,
        }
    }

    /// Number of characters covered by `span`.
    pub fn char_len(&self, span: Span) -> u32 {
        self.snippet(span).chars().count() as u32
    }

    pub fn snippet(&self, span: Span) -> &str {
        &self.src[span.lo.to_usize()..span.hi.to_usize()]
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceFile({})", self.name)
    }
}

/// ECMAScript line terminators: LF, CR (not part of CRLF), LS, PS.
fn analyze_lines(src: &str) -> Vec<BytePos> {
    let mut lines = vec![BytePos(0)];
    let mut iter = src.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        let next_start = match c {
            '\n' => Some(i + 1),
            '\r' => {
                if let Some(&(_, '\n')) = iter.peek() {
                    None
                } else {
                    Some(i + 1)
                }
            }
            '\u{2028}' | '\u{2029}' => Some(i + c.len_utf8()),
            _ => None,
        };
        if let Some(start) = next_start {
            lines.push(BytePos::from_usize(start));
        }
    }

    lines
}
