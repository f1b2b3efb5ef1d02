use crate::pos::Span;
use serde::Serialize;
use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

/// Marker for "a diagnostic has been emitted and the enclosing build is
/// unwinding". Carries no payload; the diagnostic itself lives in the
/// [Handler].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorReported;

pub type DResult<T> = Result<T, ErrorReported>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerMode {
    /// The first error-severity diagnostic aborts the enclosing build.
    FailFast,
    /// Diagnostics accumulate and the build keeps going.
    Recover,
}

/// Collects diagnostics for one build.
///
/// Shared by reference through every operation that can fail; interior
/// mutability keeps the sharing immutable. Append-only for the duration of
/// a build.
pub struct Handler {
    mode: HandlerMode,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new(mode: HandlerMode) -> Self {
        Handler {
            mode,
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn with_recovery() -> Self {
        Self::new(HandlerMode::Recover)
    }

    pub fn with_fail_fast() -> Self {
        Self::new(HandlerMode::FailFast)
    }

    pub fn mode(&self) -> HandlerMode {
        self.mode
    }

    /// Records an error. In fail-fast mode the returned `Err` unwinds the
    /// caller; in recovery mode this always succeeds.
    pub fn error(&self, span: Span, message: impl Into<String>) -> DResult<()> {
        self.diagnostics.borrow_mut().push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            span,
        });
        match self.mode {
            HandlerMode::FailFast => Err(ErrorReported),
            HandlerMode::Recover => Ok(()),
        }
    }

    /// Warnings never abort, in either mode.
    pub fn warn(&self, span: Span, message: impl Into<String>) {
        self.diagnostics.borrow_mut().push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            span,
        });
    }

    pub fn count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// True if every message in `expected` was recorded at least once.
    /// Verification helper; the builder itself never calls this.
    pub fn contains_all(&self, expected: &[&str]) -> bool {
        let diagnostics = self.diagnostics.borrow();
        expected
            .iter()
            .all(|m| diagnostics.iter().any(|d| d.message == *m))
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::DUMMY_SP;

    #[test]
    fn recover_mode_accumulates() {
        let handler = Handler::with_recovery();
        handler.error(DUMMY_SP, "first").unwrap();
        handler.error(DUMMY_SP, "second").unwrap();
        handler.warn(DUMMY_SP, "third");
        assert_eq!(handler.count(), 3);
        assert_eq!(handler.error_count(), 2);
        assert!(handler.contains_all(&["first", "second"]));
        assert!(!handler.contains_all(&["first", "missing"]));
    }

    #[test]
    fn fail_fast_mode_aborts_on_first_error() {
        let handler = Handler::with_fail_fast();
        assert_eq!(handler.error(DUMMY_SP, "boom"), Err(ErrorReported));
        // The diagnostic is still recorded.
        assert_eq!(handler.error_count(), 1);
        // Warnings do not abort.
        handler.warn(DUMMY_SP, "minor");
        assert_eq!(handler.count(), 2);
    }
}
