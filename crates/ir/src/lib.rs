//! Canonical tree construction.
//!
//! The entry point is [build]: it walks a concrete syntax tree produced by
//! the external grammar parser and emits the compiler's canonical,
//! position-annotated tree, parsing documentation-comment type annotations
//! and inline type syntax along the way and validating assignment/update
//! targets. Everything downstream (resolution, checking, printing) consumes
//! the [Node] tree this crate produces.

use ast::EsVersion;
use common::{Comment, DResult, Handler, SourceFile};
use serde::{Deserialize, Serialize};

pub use crate::jsdoc::{DocInfo, Marker};
pub use crate::node::{Node, NodeFlags, NodeKind, NodePos};
pub use crate::types::{RecordField, TypeExpr};

mod builder;
pub mod convert;
pub mod jsdoc;
pub mod names;
mod node;
mod types;
pub mod verifier;

/// Strict-mode policy for a build, before any `"use strict"` directives are
/// seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrictPolicy {
    #[default]
    Sloppy,
    Strict,
    /// Not strict at the source level, but validated as if it were.
    ImplicitStrict,
}

impl StrictPolicy {
    pub fn is_strict(self) -> bool {
        !matches!(self, StrictPolicy::Sloppy)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub dialect: EsVersion,

    #[serde(default)]
    pub strict: StrictPolicy,

    /// When false, comments are ignored entirely: no doc info and no
    /// documentation-comment types.
    #[serde(default = "default_true")]
    pub record_comments: bool,

    /// When false, annotation markers are not retained on nodes.
    /// Documentation-comment *types* are still parsed.
    #[serde(default = "default_true")]
    pub record_documentation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dialect: EsVersion::default(),
            strict: StrictPolicy::default(),
            record_comments: true,
            record_documentation: true,
        }
    }
}

/// Builds the canonical tree for one script.
///
/// `comments` must be the comment list recorded by the external tokenizer,
/// sorted by position. Diagnostics accumulate in `handler`; with a fail-fast
/// handler the first error unwinds and no partial tree escapes.
pub fn build(
    script: &ast::Script,
    source: &SourceFile,
    comments: &[Comment],
    config: &Config,
    handler: &Handler,
) -> DResult<Node> {
    tracing::debug!(file = %source.name, "building canonical tree");
    let result = builder::Builder::new(source, comments, config, handler).build_script(script);
    if result.is_err() {
        tracing::debug!(file = %source.name, "build aborted by fail-fast diagnostic");
    }
    result
}
