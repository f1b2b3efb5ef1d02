//! Assignment, update, and delete target validation.
//!
//! Operates on the concrete tree: parenthesization is still visible there,
//! and a rejected target must still be buildable so the diagnostic has a
//! position to point at.

use ast::Expr;

pub const INVALID_ASSIGNMENT_TARGET: &str = "invalid assignment target";
pub const INVALID_INCREMENT_TARGET: &str = "invalid increment target";
pub const INVALID_DECREMENT_TARGET: &str = "invalid decrement target";
pub const INVALID_INCREMENT_OPERAND: &str = "Invalid increment operand";
pub const INVALID_DECREMENT_OPERAND: &str = "Invalid decrement operand";
pub const INVALID_DELETE_OPERAND: &str =
    "Invalid delete operand. Only properties can be deleted.";
pub const DELETE_VARIABLE_IN_STRICT: &str =
    "Invalid delete operand. Cannot delete a variable in strict mode.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetUse {
    Assign,
    CompoundAssign,
    Increment,
    Decrement,
}

/// Checks whether `expr` may be written to for `usage`. Returns the exact
/// diagnostic message to raise, or `None` when the target is valid.
///
/// A simple name or property access (dotted or bracketed) is always a valid
/// target. Grouping parens are transparent: `(x) = 1` is fine, but the
/// parenthesized expression itself must still be a reference, so
/// `(a || b) = 1` and `(c ? x : y) = 1` are rejected like any other
/// non-reference.
pub fn target_error(expr: &Expr, usage: TargetUse) -> Option<&'static str> {
    match expr.unwrap_parens() {
        Expr::Ident(_) | Expr::Member(_) => None,
        Expr::Call(_) => Some(match usage {
            TargetUse::Assign | TargetUse::CompoundAssign => INVALID_ASSIGNMENT_TARGET,
            TargetUse::Increment => INVALID_INCREMENT_TARGET,
            TargetUse::Decrement => INVALID_DECREMENT_TARGET,
        }),
        _ => Some(match usage {
            TargetUse::Assign | TargetUse::CompoundAssign => INVALID_ASSIGNMENT_TARGET,
            TargetUse::Increment => INVALID_INCREMENT_OPERAND,
            TargetUse::Decrement => INVALID_DECREMENT_OPERAND,
        }),
    }
}

/// Checks a `delete` operand. Deleting a bare name is allowed only outside
/// strict-mode context; anything that is not a property access is never
/// deletable.
pub fn delete_error(arg: &Expr, strict: bool) -> Option<&'static str> {
    match arg.unwrap_parens() {
        Expr::Member(_) => None,
        Expr::Ident(_) => {
            if strict {
                Some(DELETE_VARIABLE_IN_STRICT)
            } else {
                None
            }
        }
        _ => Some(INVALID_DELETE_OPERAND),
    }
}
