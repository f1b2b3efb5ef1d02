//! Shared test support: tracing setup and span fixtures.

use common::{BytePos, FileName, SourceFile, SourceId, Span};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .init();
});

/// Installs the test tracing subscriber once per process. Filter with
/// `RUST_LOG` as usual.
pub fn init() {
    Lazy::force(&TRACING);
}

pub fn source_file(src: &str) -> SourceFile {
    SourceFile::new(SourceId(1), FileName::Anon, src.to_string())
}

/// Span of the first occurrence of `needle` in `src`.
///
/// Tests specify positions by quoting the source they mean instead of
/// counting offsets by hand.
pub fn span_of(src: &str, needle: &str) -> Span {
    span_of_nth(src, needle, 0)
}

/// Span of the `nth` (0-based) occurrence of `needle` in `src`.
pub fn span_of_nth(src: &str, needle: &str, nth: usize) -> Span {
    let mut search = 0;
    let mut at = None;
    for _ in 0..=nth {
        match src[search..].find(needle) {
            Some(i) => {
                let found = search + i;
                at = Some(found);
                search = found + needle.len();
            }
            None => panic!("occurrence {nth} of {needle:?} not found in {src:?}"),
        }
    }
    let lo = at.unwrap();
    Span::new(BytePos(lo as u32), BytePos((lo + needle.len()) as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needle_spans() {
        let src = "a + a;";
        assert_eq!(span_of(src, "a"), Span::new(BytePos(0), BytePos(1)));
        assert_eq!(span_of_nth(src, "a", 1), Span::new(BytePos(4), BytePos(5)));
        assert_eq!(span_of(src, "a + a;"), Span::new(BytePos(0), BytePos(6)));
    }

    #[test]
    #[should_panic(expected = "not found")]
    fn missing_needle_panics() {
        span_of("abc", "xyz");
    }
}
