//! The canonical-tree builder.
//!
//! Walks the concrete syntax tree top-down and emits [Node]s. Construction
//! is two-phase: a node's structural children are built first, then its
//! position is final and doc/type metadata is attached, and only then is the
//! node handed to its parent. Positions come from the spans the external
//! parser recorded; the only places the source text is re-scanned are the
//! constructs that have no token of their own (array holes, empty parameter
//! lists) and folded negative literals.

use crate::convert::ecma_number_to_string;
use crate::jsdoc::{self, DocInfo, ParsedDoc};
use crate::names;
use crate::node::{Node, NodeFlags, NodeKind, NodePos};
use crate::verifier::{self, TargetUse};
use crate::Config;
use ast::*;
use atoms::{js_word, JsWord};
use common::{BytePos, Comment, DResult, Handler, SourceFile, Span, Spanned};
use rustc_hash::FxHashSet;

pub(crate) const BAD_TYPE_SYNTAX: &str =
    "Bad type syntax - can only have JSDoc or inline type annotations, not both";
/// Inline annotations on destructuring parameters are not supported; the
/// grammar reports the expectation it failed on instead.
pub(crate) const EXPECTED_COMMA: &str = "',' expected";
pub(crate) const EXPECTED_RBRACKET: &str = "']' expected";

/// Where a binding pattern is being built; decides which grammar expectation
/// an unsupported inline annotation trips.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PatCtx {
    Top,
    ArrayElem,
}

enum FnBody<'a> {
    Block(&'a BlockStmt),
    Expr(&'a Expr),
}

impl FnBody<'_> {
    fn lo(&self) -> BytePos {
        match self {
            FnBody::Block(b) => b.span.lo,
            FnBody::Expr(e) => e.span().lo,
        }
    }
}

pub(crate) struct Builder<'a> {
    sf: &'a SourceFile,
    comments: &'a [Comment],
    config: &'a Config,
    handler: &'a Handler,
    /// Effective strictness at the current point of the walk: the config
    /// policy, or an enclosing `"use strict"` directive.
    strict: bool,
    /// Doc comments already attached to a node, keyed by their start
    /// offset. A comment attaches at most once.
    consumed_docs: FxHashSet<BytePos>,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(
        sf: &'a SourceFile,
        comments: &'a [Comment],
        config: &'a Config,
        handler: &'a Handler,
    ) -> Self {
        Builder {
            sf,
            comments,
            config,
            handler,
            strict: config.strict.is_strict(),
            consumed_docs: FxHashSet::default(),
        }
    }

    pub(crate) fn build_script(&mut self, script: &Script) -> DResult<Node> {
        let mut node = self.node(NodeKind::Script, script.span);
        node.directives = self.directive_set(&script.body).map(Box::new);

        let saved = self.strict;
        self.strict |= node.has_directive(&js_word!("use strict"));
        for stmt in &script.body {
            let child = self.build_stmt(stmt)?;
            node.children.push(child);
        }
        self.strict = saved;
        Ok(node)
    }

    // Position plumbing.

    fn pos(&self, span: Span) -> NodePos {
        let lc = self.sf.line_col(span.lo);
        NodePos::new(lc.line, lc.col, self.sf.char_len(span))
    }

    fn node(&self, kind: NodeKind, span: Span) -> Node {
        Node::new(kind, self.pos(span), self.sf.id)
    }

    fn synthetic(&self, kind: NodeKind) -> Node {
        Node::new(kind, NodePos::SYNTHETIC, self.sf.id)
    }

    /// A statement's visible span excludes the trailing semicolon the
    /// grammar consumed into it.
    fn trim_semi(&self, span: Span) -> Span {
        let end = span.hi.to_usize();
        if end > 0 && self.sf.src.as_bytes().get(end - 1) == Some(&b';') {
            span.with_hi(span.hi - BytePos(1))
        } else {
            span
        }
    }

    /// Byte offset of the next significant character at or after `from`,
    /// skipping whitespace and comments. `None` when only trivia remains
    /// before `limit`.
    fn next_significant(&self, from: BytePos, limit: BytePos) -> Option<BytePos> {
        let text = &self.sf.src[from.to_usize()..limit.to_usize()];
        let bytes = text.as_bytes();
        let mut i = 0;
        while i < text.len() {
            let c = text[i..].chars().next()?;
            if c.is_whitespace() {
                i += c.len_utf8();
            } else if c == '/' && bytes.get(i + 1) == Some(&b'*') {
                i += 2 + text[i + 2..].find("*/")? + 2;
            } else if c == '/' && bytes.get(i + 1) == Some(&b'/') {
                i += text[i..].find(['\n', '\r', '\u{2028}', '\u{2029}'])?;
            } else {
                return Some(from + BytePos(i as u32));
            }
        }
        None
    }

    /// An elided slot owns the single character that terminates it (the
    /// next comma, or the closing bracket). The concrete tree has no token
    /// for the hole, so the position is re-derived from the text.
    fn elision_span(&self, cursor: BytePos, limit: BytePos) -> Span {
        let p = self.next_significant(cursor, limit).unwrap_or(cursor);
        Span::new(p, p + BytePos(1))
    }

    /// Finds the `(` opening a parameter list, stepping over the keyword
    /// and name tokens before it. `None` for arrow shorthand (`x => ..`).
    fn find_open_paren(&self, from: BytePos, limit: BytePos) -> Option<BytePos> {
        let mut cursor = from;
        loop {
            let p = self.next_significant(cursor, limit)?;
            let rest = &self.sf.src[p.to_usize()..limit.to_usize()];
            let c = rest.chars().next()?;
            if c == '(' {
                return Some(p);
            }
            if c.is_alphanumeric() || c == '_' || c == '$' {
                let word: u32 = rest
                    .chars()
                    .take_while(|&c| c.is_alphanumeric() || c == '_' || c == '$')
                    .map(|c| c.len_utf8() as u32)
                    .sum();
                cursor = p + BytePos(word);
            } else {
                return None;
            }
        }
    }

    // Documentation comments and declared types.

    /// The doc comment whose end is separated from `lo` by whitespace only,
    /// if any. Consumes it, so a comment attaches to the first construct
    /// that asks.
    fn take_doc_before(&mut self, lo: BytePos) -> Option<ParsedDoc> {
        let idx = self.comments.partition_point(|c| c.span.hi <= lo);
        let comment = self.comments[..idx].last()?;
        if !comment.is_doc() || self.consumed_docs.contains(&comment.span.lo) {
            return None;
        }
        let between = &self.sf.src[comment.span.hi.to_usize()..lo.to_usize()];
        if !between.chars().all(char::is_whitespace) {
            return None;
        }
        self.consumed_docs.insert(comment.span.lo);
        Some(jsdoc::parse_doc(self.sf, comment))
    }

    /// Attaches doc info and the declared type once `node`'s structural
    /// children are final. `ann` is the inline annotation for this slot, if
    /// the grammar produced one; a doc-comment type for the same slot is a
    /// parse error.
    fn annotate(&mut self, node: &mut Node, start: BytePos, ann: Option<&TypeAnn>) -> DResult<()> {
        if self.config.record_comments {
            if let Some(doc) = self.take_doc_before(start) {
                tracing::trace!(
                    markers = doc.markers.len(),
                    has_type = doc.ty.is_some(),
                    "attaching documentation comment"
                );
                if doc.free_flowing {
                    node.flags |= NodeFlags::FREE_FLOWING_DOC;
                }
                if self.config.record_documentation {
                    node.doc_info = Some(Box::new(DocInfo {
                        markers: doc.markers,
                    }));
                }
                if let Some(ty) = doc.ty {
                    node.declared_type = Some(Box::new(ty));
                }
            }
        }
        if let Some(ann) = ann {
            if node.declared_type.is_some() {
                self.handler.error(ann.span, BAD_TYPE_SYNTAX)?;
            } else {
                node.declared_type = Some(Box::new(self.build_type(&ann.ty)));
            }
        }
        Ok(())
    }

    fn build_type(&self, ty: &Type) -> crate::TypeExpr {
        use crate::TypeExpr;
        match ty {
            Type::Name(n) => TypeExpr::Name {
                pos: self.pos(n.span),
                name: type_name_word(&n.parts),
            },
            Type::App(a) => TypeExpr::App {
                pos: self.pos(a.span),
                name: type_name_word(&a.name.parts),
                args: a.type_args.iter().map(|t| self.build_type(t)).collect(),
            },
            Type::Union(u) => TypeExpr::Union {
                pos: self.pos(u.span),
                alts: u.types.iter().map(|t| self.build_type(t)).collect(),
            },
            Type::Nullable(n) => TypeExpr::Nullable {
                pos: self.pos(n.span),
                ty: Box::new(self.build_type(&n.ty)),
            },
            Type::NonNullable(n) => TypeExpr::NonNullable {
                pos: self.pos(n.span),
                ty: Box::new(self.build_type(&n.ty)),
            },
            // `T[]` is the application `Array<T>`, like the doc grammar's
            // `Array.<T>`.
            Type::Array(a) => TypeExpr::App {
                pos: self.pos(a.span),
                name: js_word!("Array"),
                args: vec![self.build_type(&a.elem)],
            },
            Type::Paren(p) => self.build_type(&p.ty),
            Type::Wildcard(w) => TypeExpr::All {
                pos: self.pos(w.span),
            },
        }
    }

    // Directive prologues.

    /// Distinct directive strings at the start of a body. `None` when there
    /// are no directive statements at all; a string with escapes is not a
    /// directive.
    fn directive_set(&self, stmts: &[Stmt]) -> Option<FxHashSet<JsWord>> {
        let mut set: Option<FxHashSet<JsWord>> = None;
        for stmt in stmts {
            let Stmt::Expr(e) = stmt else { break };
            let Expr::Lit(Lit::Str(s)) = &*e.expr else {
                break;
            };
            if !s.has_escape {
                set.get_or_insert_with(FxHashSet::default)
                    .insert(s.value.clone());
            }
        }
        set
    }

    // Statements.

    fn build_stmt(&mut self, stmt: &Stmt) -> DResult<Node> {
        let ret_ann = match stmt {
            Stmt::Decl(Decl::Fn(d)) => d.function.return_type.as_ref(),
            _ => None,
        };
        let mut node = match stmt {
            Stmt::Block(b) => self.build_block(b)?,
            Stmt::Empty(e) => self.node(NodeKind::Empty, e.span),
            Stmt::Debugger(d) => self.node(NodeKind::Debugger, self.trim_semi(d.span)),
            Stmt::With(w) => {
                let obj = self.build_expr(&w.obj)?;
                let body = self.build_stmt(&w.body)?;
                Node::with_children(NodeKind::With, self.pos(w.span), self.sf.id, vec![obj, body])
            }
            Stmt::Return(r) => {
                let mut node = self.node(NodeKind::Return, self.trim_semi(r.span));
                if let Some(arg) = &r.arg {
                    node.children.push(self.build_expr(arg)?);
                }
                node
            }
            Stmt::Labeled(l) => {
                let name = self.node(NodeKind::LabelName(l.label.sym.clone()), l.label.span);
                let body = self.build_stmt(&l.body)?;
                Node::with_children(
                    NodeKind::Label,
                    self.pos(l.span),
                    self.sf.id,
                    vec![name, body],
                )
            }
            Stmt::Break(b) => {
                let mut node = self.node(NodeKind::Break, self.trim_semi(b.span));
                if let Some(label) = &b.label {
                    node.children
                        .push(self.node(NodeKind::LabelName(label.sym.clone()), label.span));
                }
                node
            }
            Stmt::Continue(c) => {
                let mut node = self.node(NodeKind::Continue, self.trim_semi(c.span));
                if let Some(label) = &c.label {
                    node.children
                        .push(self.node(NodeKind::LabelName(label.sym.clone()), label.span));
                }
                node
            }
            Stmt::If(i) => {
                let test = self.build_expr(&i.test)?;
                let cons = self.build_stmt(&i.cons)?;
                let mut node = Node::with_children(
                    NodeKind::If,
                    self.pos(i.span),
                    self.sf.id,
                    vec![test, cons],
                );
                if let Some(alt) = &i.alt {
                    node.children.push(self.build_stmt(alt)?);
                }
                node
            }
            Stmt::Switch(s) => self.build_switch(s)?,
            Stmt::Throw(t) => {
                let arg = self.build_expr(&t.arg)?;
                Node::with_children(
                    NodeKind::Throw,
                    self.pos(self.trim_semi(t.span)),
                    self.sf.id,
                    vec![arg],
                )
            }
            Stmt::Try(t) => self.build_try(t)?,
            Stmt::While(w) => {
                let test = self.build_expr(&w.test)?;
                let body = self.build_stmt(&w.body)?;
                Node::with_children(
                    NodeKind::While,
                    self.pos(w.span),
                    self.sf.id,
                    vec![test, body],
                )
            }
            Stmt::DoWhile(d) => {
                let body = self.build_stmt(&d.body)?;
                let test = self.build_expr(&d.test)?;
                Node::with_children(
                    NodeKind::DoWhile,
                    self.pos(self.trim_semi(d.span)),
                    self.sf.id,
                    vec![body, test],
                )
            }
            Stmt::For(f) => {
                let init = match &f.init {
                    Some(VarDeclOrExpr::VarDecl(v)) => self.build_var_decl(v)?,
                    Some(VarDeclOrExpr::Expr(e)) => self.build_expr(e)?,
                    None => self.synthetic(NodeKind::Empty),
                };
                let test = match &f.test {
                    Some(e) => self.build_expr(e)?,
                    None => self.synthetic(NodeKind::Empty),
                };
                let update = match &f.update {
                    Some(e) => self.build_expr(e)?,
                    None => self.synthetic(NodeKind::Empty),
                };
                let body = self.build_stmt(&f.body)?;
                Node::with_children(
                    NodeKind::For,
                    self.pos(f.span),
                    self.sf.id,
                    vec![init, test, update, body],
                )
            }
            Stmt::ForIn(f) => {
                let children = self.for_head(&f.left, &f.right, &f.body)?;
                Node::with_children(NodeKind::ForIn, self.pos(f.span), self.sf.id, children)
            }
            Stmt::ForOf(f) => {
                let children = self.for_head(&f.left, &f.right, &f.body)?;
                Node::with_children(NodeKind::ForOf, self.pos(f.span), self.sf.id, children)
            }
            Stmt::Decl(Decl::Var(v)) => self.build_var_decl(v)?,
            Stmt::Decl(Decl::Fn(d)) => {
                self.build_function(Some(&d.ident), &d.function, NodeFlags::empty())?
            }
            Stmt::Expr(e) => {
                let expr = self.build_expr(&e.expr)?;
                Node::with_children(
                    NodeKind::ExprResult,
                    self.pos(self.trim_semi(e.span)),
                    self.sf.id,
                    vec![expr],
                )
            }
        };
        self.annotate(&mut node, stmt.span().lo, ret_ann)?;
        Ok(node)
    }

    fn build_block(&mut self, block: &BlockStmt) -> DResult<Node> {
        let mut node = self.node(NodeKind::Block, block.span);
        for stmt in &block.stmts {
            let child = self.build_stmt(stmt)?;
            node.children.push(child);
        }
        Ok(node)
    }

    fn for_head(
        &mut self,
        left: &VarDeclOrPat,
        right: &Expr,
        body: &Stmt,
    ) -> DResult<Vec<Node>> {
        let target = match left {
            VarDeclOrPat::VarDecl(v) => self.build_var_decl(v)?,
            VarDeclOrPat::Pat(p) => self.build_pat(p, PatCtx::Top)?,
        };
        let object = self.build_expr(right)?;
        let body = self.build_stmt(body)?;
        Ok(vec![target, object, body])
    }

    fn build_switch(&mut self, s: &SwitchStmt) -> DResult<Node> {
        let mut node = self.node(NodeKind::Switch, s.span);
        node.children.push(self.build_expr(&s.discriminant)?);
        for case in &s.cases {
            // The clause's statements live in a synthesized block that is a
            // sibling of the test, not a descendant of it.
            let block_span = match (case.cons.first(), case.cons.last()) {
                (Some(first), Some(last)) => Span::new(first.span().lo, last.span().hi),
                _ => case.span.shrink_to_hi(),
            };
            let mut block = self.node(NodeKind::Block, block_span);
            for stmt in &case.cons {
                let child = self.build_stmt(stmt)?;
                block.children.push(child);
            }

            let clause = match &case.test {
                Some(test) => {
                    // The clause spans its keyword through the end of the
                    // test expression, excluding the statement list.
                    let span = Span::new(case.span.lo, test.span().hi);
                    let test = self.build_expr(test)?;
                    Node::with_children(
                        NodeKind::Case,
                        self.pos(span),
                        self.sf.id,
                        vec![test, block],
                    )
                }
                None => {
                    let span = Span::new(case.span.lo, case.span.lo + BytePos(7));
                    Node::with_children(NodeKind::Default, self.pos(span), self.sf.id, vec![block])
                }
            };
            node.children.push(clause);
        }
        Ok(node)
    }

    fn build_try(&mut self, t: &TryStmt) -> DResult<Node> {
        let block = self.build_block(&t.block)?;

        // All three parts are always present as children; an absent part is
        // an empty placeholder immediately after the preceding block.
        let (catch, catch_hi) = match &t.handler {
            Some(c) => {
                let param = match &c.param {
                    Some(p) => self.build_pat(p, PatCtx::Top)?,
                    None => self.node(NodeKind::Empty, c.body.span.lo.span()),
                };
                let body = self.build_block(&c.body)?;
                let node = Node::with_children(
                    NodeKind::Catch,
                    self.pos(c.span),
                    self.sf.id,
                    vec![param, body],
                );
                (node, c.body.span.hi)
            }
            None => {
                let span = t.block.span.shrink_to_hi();
                (self.node(NodeKind::Empty, span), t.block.span.hi)
            }
        };

        let finally = match &t.finalizer {
            Some(f) => self.build_block(f)?,
            None => self.node(NodeKind::Empty, catch_hi.span()),
        };

        Ok(Node::with_children(
            NodeKind::Try,
            self.pos(t.span),
            self.sf.id,
            vec![block, catch, finally],
        ))
    }

    fn build_var_decl(&mut self, v: &VarDecl) -> DResult<Node> {
        let kind = match v.kind {
            VarDeclKind::Var => NodeKind::Var,
            VarDeclKind::Let => NodeKind::Let,
            VarDeclKind::Const => NodeKind::Const,
        };
        let mut node = self.node(kind, self.trim_semi(v.span));
        for decl in &v.decls {
            let child = self.build_declarator(decl)?;
            node.children.push(child);
        }
        Ok(node)
    }

    fn build_declarator(&mut self, d: &VarDeclarator) -> DResult<Node> {
        match &d.name {
            Pat::Ident(bi) => {
                let mut node = self.node(NodeKind::Name(bi.id.sym.clone()), bi.id.span);
                if let Some(init) = &d.init {
                    node.children.push(self.build_expr(init)?);
                }
                self.annotate(&mut node, bi.id.span.lo, bi.type_ann.as_ref())?;
                Ok(node)
            }
            pat => {
                let target = self.build_pat(pat, PatCtx::Top)?;
                let mut node = self.node(NodeKind::DestructuringLhs, d.span);
                node.children.push(target);
                if let Some(init) = &d.init {
                    node.children.push(self.build_expr(init)?);
                }
                Ok(node)
            }
        }
    }

    // Binding patterns.

    fn build_pat(&mut self, pat: &Pat, ctx: PatCtx) -> DResult<Node> {
        match pat {
            Pat::Ident(bi) => {
                let mut node = self.node(NodeKind::Name(bi.id.sym.clone()), bi.id.span);
                if let Some(ann) = &bi.type_ann {
                    match ctx {
                        PatCtx::Top => self.annotate(&mut node, bi.id.span.lo, Some(ann))?,
                        PatCtx::ArrayElem => self.handler.error(ann.span, EXPECTED_RBRACKET)?,
                    }
                }
                Ok(node)
            }
            Pat::Array(a) => {
                if let Some(ann) = &a.type_ann {
                    let msg = match ctx {
                        PatCtx::Top => EXPECTED_COMMA,
                        PatCtx::ArrayElem => EXPECTED_RBRACKET,
                    };
                    self.handler.error(ann.span, msg)?;
                }
                let mut node = self.node(NodeKind::ArrayPattern, a.span);
                let limit = a.span.hi;
                let mut cursor = a.span.lo + BytePos(1);
                for elem in &a.elems {
                    match elem {
                        Some(p) => {
                            node.children.push(self.build_pat(p, PatCtx::ArrayElem)?);
                            cursor = p.span().hi;
                            if let Some(sep) = self.next_significant(cursor, limit) {
                                cursor = sep + BytePos(1);
                            }
                        }
                        None => {
                            let hole = self.elision_span(cursor, limit);
                            node.children.push(self.node(NodeKind::Empty, hole));
                            cursor = hole.hi;
                        }
                    }
                }
                Ok(node)
            }
            Pat::Object(o) => {
                if let Some(ann) = &o.type_ann {
                    let msg = match ctx {
                        PatCtx::Top => EXPECTED_COMMA,
                        PatCtx::ArrayElem => EXPECTED_RBRACKET,
                    };
                    self.handler.error(ann.span, msg)?;
                }
                let mut node = self.node(NodeKind::ObjectPattern, o.span);
                for prop in &o.props {
                    let child = self.build_object_pat_prop(prop)?;
                    node.children.push(child);
                }
                Ok(node)
            }
            Pat::Assign(a) => {
                let target = self.build_pat(&a.left, ctx)?;
                let value = self.build_expr(&a.right)?;
                Ok(Node::with_children(
                    NodeKind::DefaultValue,
                    self.pos(a.span),
                    self.sf.id,
                    vec![target, value],
                ))
            }
            Pat::Rest(r) => {
                let target = self.build_pat(&r.arg, ctx)?;
                Ok(Node::with_children(
                    NodeKind::Rest,
                    self.pos(r.span),
                    self.sf.id,
                    vec![target],
                ))
            }
            Pat::Invalid(i) => Ok(self.node(NodeKind::Empty, i.span)),
        }
    }

    fn build_object_pat_prop(&mut self, prop: &ObjectPatProp) -> DResult<Node> {
        match prop {
            ObjectPatProp::KeyValue(kv) => match &kv.key {
                PropName::Computed(c) => {
                    let key = self.build_expr(&c.expr)?;
                    let value = self.build_pat(&kv.value, PatCtx::Top)?;
                    Ok(Node::with_children(
                        NodeKind::ComputedProp,
                        self.pos(c.span.to(kv.value.span())),
                        self.sf.id,
                        vec![key, value],
                    ))
                }
                key => {
                    let (word, flags, span) = plain_key(key);
                    let mut node = self.node(NodeKind::StringKey(word), span);
                    node.flags |= flags;
                    node.children.push(self.build_pat(&kv.value, PatCtx::Top)?);
                    Ok(node)
                }
            },
            ObjectPatProp::Assign(a) => {
                let mut name = self.node(NodeKind::Name(a.key.sym.clone()), a.key.span);
                if let Some(value) = &a.value {
                    name.children.push(self.build_expr(value)?);
                }
                let mut node = self.node(NodeKind::StringKey(a.key.sym.clone()), a.key.span);
                node.flags |= NodeFlags::SHORTHAND;
                node.children.push(name);
                Ok(node)
            }
            ObjectPatProp::Rest(r) => {
                let target = self.build_pat(&r.arg, PatCtx::Top)?;
                Ok(Node::with_children(
                    NodeKind::Rest,
                    self.pos(r.span),
                    self.sf.id,
                    vec![target],
                ))
            }
        }
    }

    // Functions.

    fn build_function(
        &mut self,
        name: Option<&Ident>,
        function: &Function,
        flags: NodeFlags,
    ) -> DResult<Node> {
        let pats: Vec<&Pat> = function.params.iter().map(|p| &p.pat).collect();
        let search_from = name.map_or(function.span.lo, |id| id.span.hi);
        self.function_node(
            name,
            function.span,
            &pats,
            FnBody::Block(&function.body),
            flags,
            search_from,
        )
    }

    /// The shared shape of functions, arrows, and accessors: children are
    /// always `[name, param-list, body]`. `paren_search_from` is where the
    /// scan for an empty parameter list's `(` begins.
    fn function_node(
        &mut self,
        name: Option<&Ident>,
        span: Span,
        pats: &[&Pat],
        body: FnBody<'_>,
        flags: NodeFlags,
        paren_search_from: BytePos,
    ) -> DResult<Node> {
        let directives = match &body {
            FnBody::Block(b) => self.directive_set(&b.stmts),
            FnBody::Expr(_) => None,
        };
        let saved = self.strict;
        self.strict |= directives
            .as_ref()
            .is_some_and(|d| d.contains(&js_word!("use strict")));

        let name_node = match name {
            Some(id) => self.node(NodeKind::Name(id.sym.clone()), id.span),
            None => self.synthetic(NodeKind::Name(js_word!(""))),
        };

        let pl_pos = match (pats.first(), pats.last()) {
            (Some(first), Some(last)) => self.pos(Span::new(first.span().lo, last.span().hi)),
            _ => match self.find_open_paren(paren_search_from, body.lo()) {
                Some(p) => self.pos(Span::new(p, p + BytePos(1))),
                None => NodePos::SYNTHETIC,
            },
        };
        let mut param_list = Node::new(NodeKind::ParamList, pl_pos, self.sf.id);
        for pat in pats {
            let child = self.build_param(pat)?;
            param_list.children.push(child);
        }

        if tracing::enabled!(tracing::Level::TRACE) {
            let mut bound = Vec::new();
            for pat in pats {
                names::for_each_bound_name(pat, &mut |id| bound.push(id.sym.clone()));
            }
            tracing::trace!(?bound, "built parameter list");
        }

        let body_node = match body {
            FnBody::Block(b) => self.build_block(b)?,
            FnBody::Expr(e) => self.build_expr(e)?,
        };
        self.strict = saved;

        let mut node = Node::with_children(
            NodeKind::Function,
            self.pos(span),
            self.sf.id,
            vec![name_node, param_list, body_node],
        );
        node.flags |= flags;
        node.directives = directives.map(Box::new);
        Ok(node)
    }

    fn build_param(&mut self, pat: &Pat) -> DResult<Node> {
        match pat {
            Pat::Ident(bi) => {
                let mut node = self.node(NodeKind::Name(bi.id.sym.clone()), bi.id.span);
                self.annotate(&mut node, bi.id.span.lo, bi.type_ann.as_ref())?;
                Ok(node)
            }
            // A defaulted simple parameter stays a name node; the default
            // expression is its child, like a declarator's init.
            Pat::Assign(a) => match &*a.left {
                Pat::Ident(bi) => {
                    let mut node = self.node(NodeKind::Name(bi.id.sym.clone()), bi.id.span);
                    node.children.push(self.build_expr(&a.right)?);
                    self.annotate(&mut node, a.span.lo, bi.type_ann.as_ref())?;
                    Ok(node)
                }
                left => {
                    let target = self.build_pat(left, PatCtx::Top)?;
                    let value = self.build_expr(&a.right)?;
                    Ok(Node::with_children(
                        NodeKind::DefaultValue,
                        self.pos(a.span),
                        self.sf.id,
                        vec![target, value],
                    ))
                }
            },
            Pat::Rest(r) => {
                let target = self.build_pat(&r.arg, PatCtx::Top)?;
                Ok(Node::with_children(
                    NodeKind::Rest,
                    self.pos(r.span),
                    self.sf.id,
                    vec![target],
                ))
            }
            pat => self.build_pat(pat, PatCtx::Top),
        }
    }

    // Expressions.

    fn build_expr(&mut self, expr: &Expr) -> DResult<Node> {
        match expr {
            Expr::This(t) => Ok(self.node(NodeKind::This, t.span)),
            Expr::Array(a) => self.build_array_lit(a),
            Expr::Object(o) => self.build_object_lit(o),
            Expr::Fn(f) => {
                let mut node =
                    self.build_function(f.ident.as_ref(), &f.function, NodeFlags::empty())?;
                self.annotate(
                    &mut node,
                    f.function.span.lo,
                    f.function.return_type.as_ref(),
                )?;
                Ok(node)
            }
            Expr::Arrow(a) => {
                let pats: Vec<&Pat> = a.params.iter().collect();
                let body = match &a.body {
                    BlockStmtOrExpr::BlockStmt(b) => FnBody::Block(b),
                    BlockStmtOrExpr::Expr(e) => FnBody::Expr(e),
                };
                let mut node = self.function_node(
                    None,
                    a.span,
                    &pats,
                    body,
                    NodeFlags::ARROW_FN,
                    a.span.lo,
                )?;
                self.annotate(&mut node, a.span.lo, a.return_type.as_ref())?;
                Ok(node)
            }
            Expr::Unary(u) => self.build_unary(u),
            Expr::Update(u) => {
                let usage = match u.op {
                    UpdateOp::PlusPlus => TargetUse::Increment,
                    UpdateOp::MinusMinus => TargetUse::Decrement,
                };
                if let Some(msg) = verifier::target_error(&u.arg, usage) {
                    self.handler.error(u.arg.span(), msg)?;
                }
                let kind = match u.op {
                    UpdateOp::PlusPlus => NodeKind::Inc,
                    UpdateOp::MinusMinus => NodeKind::Dec,
                };
                let arg = self.build_expr(&u.arg)?;
                let mut node =
                    Node::with_children(kind, self.pos(u.span), self.sf.id, vec![arg]);
                if !u.prefix {
                    node.flags |= NodeFlags::POSTFIX;
                }
                Ok(node)
            }
            Expr::Bin(b) => {
                // The chain's positions are derived from the operands, so
                // interior whitespace and comments never widen a child.
                let span = Span::new(b.left.span().lo, b.right.span().hi);
                let left = self.build_expr(&b.left)?;
                let right = self.build_expr(&b.right)?;
                Ok(Node::with_children(
                    binary_kind(b.op),
                    self.pos(span),
                    self.sf.id,
                    vec![left, right],
                ))
            }
            Expr::Assign(a) => {
                let usage = if a.op.is_compound() {
                    TargetUse::CompoundAssign
                } else {
                    TargetUse::Assign
                };
                if let PatOrExpr::Expr(target) = &a.left {
                    if let Some(msg) = verifier::target_error(target, usage) {
                        self.handler.error(target.span(), msg)?;
                    }
                }
                let target = match &a.left {
                    PatOrExpr::Expr(e) => self.build_expr(e)?,
                    PatOrExpr::Pat(p) => self.build_pat(p, PatCtx::Top)?,
                };
                let value = self.build_expr(&a.right)?;
                let span = Span::new(a.left.span().lo, a.right.span().hi);
                Ok(Node::with_children(
                    assign_kind(a.op),
                    self.pos(span),
                    self.sf.id,
                    vec![target, value],
                ))
            }
            Expr::Member(m) => {
                let obj = self.build_expr(&m.obj)?;
                if m.computed {
                    let index = self.build_expr(&m.prop)?;
                    Ok(Node::with_children(
                        NodeKind::GetElem,
                        self.pos(m.span),
                        self.sf.id,
                        vec![obj, index],
                    ))
                } else {
                    let prop = match &*m.prop {
                        Expr::Ident(id) => self.node(NodeKind::String(id.sym.clone()), id.span),
                        other => self.build_expr(other)?,
                    };
                    Ok(Node::with_children(
                        NodeKind::GetProp,
                        self.pos(m.span),
                        self.sf.id,
                        vec![obj, prop],
                    ))
                }
            }
            Expr::Cond(c) => {
                let test = self.build_expr(&c.test)?;
                let cons = self.build_expr(&c.cons)?;
                let alt = self.build_expr(&c.alt)?;
                Ok(Node::with_children(
                    NodeKind::Hook,
                    self.pos(c.span),
                    self.sf.id,
                    vec![test, cons, alt],
                ))
            }
            Expr::Call(c) => {
                let mut node = self.node(NodeKind::Call, c.span);
                node.children.push(self.build_expr(&c.callee)?);
                for arg in &c.args {
                    let child = self.build_expr_or_spread(arg)?;
                    node.children.push(child);
                }
                Ok(node)
            }
            Expr::New(n) => {
                let mut node = self.node(NodeKind::New, n.span);
                node.children.push(self.build_expr(&n.callee)?);
                for arg in n.args.iter().flatten() {
                    let child = self.build_expr_or_spread(arg)?;
                    node.children.push(child);
                }
                Ok(node)
            }
            // A comma sequence is a left-associative chain of binary comma
            // nodes, each spanning the leftmost leaf through its right
            // operand.
            Expr::Seq(s) => {
                let Some((first, rest)) = s.exprs.split_first() else {
                    return Ok(self.node(NodeKind::Empty, s.span));
                };
                let lo = first.span().lo;
                let mut acc = self.build_expr(first)?;
                for e in rest {
                    let right = self.build_expr(e)?;
                    acc = Node::with_children(
                        NodeKind::Comma,
                        self.pos(Span::new(lo, e.span().hi)),
                        self.sf.id,
                        vec![acc, right],
                    );
                }
                Ok(acc)
            }
            Expr::Ident(id) => Ok(self.node(NodeKind::Name(id.sym.clone()), id.span)),
            Expr::Lit(lit) => Ok(self.build_lit(lit)),
            // Grouping parens produce no node of their own.
            Expr::Paren(p) => {
                let mut inner = self.build_expr(&p.expr)?;
                inner.flags |= NodeFlags::PARENTHESIZED;
                Ok(inner)
            }
            Expr::Invalid(i) => Ok(self.node(NodeKind::Empty, i.span)),
        }
    }

    fn build_unary(&mut self, u: &UnaryExpr) -> DResult<Node> {
        // A negation applied directly to a numeric literal folds into one
        // literal node spanning the minus sign through the digits.
        if u.op == UnaryOp::Minus {
            if let Expr::Lit(Lit::Num(n)) = &*u.arg {
                let span = Span::new(u.span.lo, n.span.hi);
                return Ok(self.node(NodeKind::Number(-n.value), span));
            }
        }
        if u.op == UnaryOp::Delete {
            if let Some(msg) = verifier::delete_error(&u.arg, self.strict) {
                self.handler.error(u.arg.span(), msg)?;
            }
        }
        let kind = match u.op {
            UnaryOp::Minus => NodeKind::Neg,
            UnaryOp::Plus => NodeKind::Pos,
            UnaryOp::Bang => NodeKind::Not,
            UnaryOp::Tilde => NodeKind::BitNot,
            UnaryOp::TypeOf => NodeKind::TypeOf,
            UnaryOp::Void => NodeKind::Void,
            UnaryOp::Delete => NodeKind::Delete,
        };
        let arg = self.build_expr(&u.arg)?;
        Ok(Node::with_children(
            kind,
            self.pos(u.span),
            self.sf.id,
            vec![arg],
        ))
    }

    fn build_lit(&self, lit: &Lit) -> Node {
        match lit {
            Lit::Str(s) => self.node(NodeKind::String(s.value.clone()), s.span),
            Lit::Bool(b) => self.node(
                if b.value {
                    NodeKind::True
                } else {
                    NodeKind::False
                },
                b.span,
            ),
            Lit::Null(n) => self.node(NodeKind::Null, n.span),
            Lit::Num(n) => self.node(NodeKind::Number(n.value), n.span),
            Lit::BigInt(b) => self.node(NodeKind::BigInt(Box::new(b.value.clone())), b.span),
            Lit::Regex(r) => self.node(
                NodeKind::Regex {
                    exp: r.exp.clone(),
                    flags: r.flags.clone(),
                },
                r.span,
            ),
        }
    }

    fn build_expr_or_spread(&mut self, e: &ExprOrSpread) -> DResult<Node> {
        match e.spread {
            Some(dot3) => {
                let arg = self.build_expr(&e.expr)?;
                Ok(Node::with_children(
                    NodeKind::Spread,
                    self.pos(dot3.to(e.expr.span())),
                    self.sf.id,
                    vec![arg],
                ))
            }
            None => self.build_expr(&e.expr),
        }
    }

    fn build_array_lit(&mut self, a: &ArrayLit) -> DResult<Node> {
        let mut node = self.node(NodeKind::ArrayLit, a.span);
        let limit = a.span.hi;
        let mut cursor = a.span.lo + BytePos(1);
        for elem in &a.elems {
            match elem {
                Some(e) => {
                    node.children.push(self.build_expr_or_spread(e)?);
                    cursor = e.span().hi;
                    if let Some(sep) = self.next_significant(cursor, limit) {
                        cursor = sep + BytePos(1);
                    }
                }
                None => {
                    let hole = self.elision_span(cursor, limit);
                    node.children.push(self.node(NodeKind::Empty, hole));
                    cursor = hole.hi;
                }
            }
        }
        Ok(node)
    }

    fn build_object_lit(&mut self, o: &ObjectLit) -> DResult<Node> {
        let mut node = self.node(NodeKind::ObjectLit, o.span);
        for prop in &o.props {
            let start = prop.span().lo;
            let mut child = match prop {
                PropOrSpread::Spread(s) => {
                    let arg = self.build_expr(&s.expr)?;
                    Node::with_children(
                        NodeKind::Spread,
                        self.pos(s.dot3_token.to(s.expr.span())),
                        self.sf.id,
                        vec![arg],
                    )
                }
                PropOrSpread::Prop(p) => self.build_prop(p)?,
            };
            self.annotate(&mut child, start, None)?;
            node.children.push(child);
        }
        Ok(node)
    }

    fn build_prop(&mut self, prop: &Prop) -> DResult<Node> {
        match prop {
            Prop::Shorthand(id) => {
                let name = self.node(NodeKind::Name(id.sym.clone()), id.span);
                let mut node = self.node(NodeKind::StringKey(id.sym.clone()), id.span);
                node.flags |= NodeFlags::SHORTHAND;
                node.children.push(name);
                Ok(node)
            }
            Prop::KeyValue(kv) => match &kv.key {
                PropName::Computed(c) => {
                    let key = self.build_expr(&c.expr)?;
                    let value = self.build_expr(&kv.value)?;
                    Ok(Node::with_children(
                        NodeKind::ComputedProp,
                        self.pos(c.span.to(kv.value.span())),
                        self.sf.id,
                        vec![key, value],
                    ))
                }
                key => {
                    let (word, flags, span) = plain_key(key);
                    let mut node = self.node(NodeKind::StringKey(word), span);
                    node.flags |= flags;
                    node.children.push(self.build_expr(&kv.value)?);
                    Ok(node)
                }
            },
            Prop::Getter(g) => self.build_accessor(&g.key, &[], &g.body, true),
            Prop::Setter(s) => self.build_accessor(&s.key, &[&s.param], &s.body, false),
        }
    }

    /// A getter or setter definition wraps an anonymous function whose
    /// parameter list is empty (getter) or single-entry (setter). The
    /// definition spans the key through the function body; a quoted key's
    /// flag carries over to the definition.
    fn build_accessor(
        &mut self,
        key: &PropName,
        pats: &[&Pat],
        body: &BlockStmt,
        getter: bool,
    ) -> DResult<Node> {
        let span = key.span().to(body.span);
        match key {
            PropName::Computed(c) => {
                let key_expr = self.build_expr(&c.expr)?;
                let function = self.function_node(
                    None,
                    span,
                    pats,
                    FnBody::Block(body),
                    NodeFlags::empty(),
                    c.span.hi,
                )?;
                let mut node = Node::with_children(
                    NodeKind::ComputedProp,
                    self.pos(span),
                    self.sf.id,
                    vec![key_expr, function],
                );
                node.flags |= if getter {
                    NodeFlags::COMPUTED_GETTER
                } else {
                    NodeFlags::COMPUTED_SETTER
                };
                Ok(node)
            }
            key => {
                let (word, flags, key_span) = plain_key(key);
                let function = self.function_node(
                    None,
                    span,
                    pats,
                    FnBody::Block(body),
                    NodeFlags::empty(),
                    key_span.hi,
                )?;
                let kind = if getter {
                    NodeKind::GetterDef(word)
                } else {
                    NodeKind::SetterDef(word)
                };
                let mut node =
                    Node::with_children(kind, self.pos(span), self.sf.id, vec![function]);
                node.flags |= flags;
                Ok(node)
            }
        }
    }
}

/// Normalizes a non-computed member key to its string-key word. Numeric
/// keys render with ECMAScript number-to-string semantics, so `{1e1: x}`
/// and `{'10': x}` collide on the same word and differ only in the quoted
/// flag.
/// Qualification stays in the word: `foo.bar.Baz` is one name.
fn type_name_word(parts: &[Ident]) -> JsWord {
    match parts {
        [only] => only.sym.clone(),
        _ => parts
            .iter()
            .map(|p| &*p.sym)
            .collect::<Vec<_>>()
            .join(".")
            .into(),
    }
}

fn plain_key(key: &PropName) -> (JsWord, NodeFlags, Span) {
    match key {
        PropName::Ident(i) => (i.sym.clone(), NodeFlags::empty(), i.span),
        PropName::Str(s) => (s.value.clone(), NodeFlags::QUOTED_KEY, s.span),
        PropName::Num(n) => (
            ecma_number_to_string(n.value).into(),
            NodeFlags::empty(),
            n.span,
        ),
        PropName::Computed(_) => unreachable!("computed keys are handled by the caller"),
    }
}

fn binary_kind(op: BinaryOp) -> NodeKind {
    match op {
        BinaryOp::EqEq => NodeKind::Eq,
        BinaryOp::NotEq => NodeKind::Ne,
        BinaryOp::EqEqEq => NodeKind::StrictEq,
        BinaryOp::NotEqEq => NodeKind::StrictNe,
        BinaryOp::Lt => NodeKind::Lt,
        BinaryOp::LtEq => NodeKind::Le,
        BinaryOp::Gt => NodeKind::Gt,
        BinaryOp::GtEq => NodeKind::Ge,
        BinaryOp::LShift => NodeKind::Lsh,
        BinaryOp::RShift => NodeKind::Rsh,
        BinaryOp::ZeroFillRShift => NodeKind::Ursh,
        BinaryOp::Add => NodeKind::Add,
        BinaryOp::Sub => NodeKind::Sub,
        BinaryOp::Mul => NodeKind::Mul,
        BinaryOp::Div => NodeKind::Div,
        BinaryOp::Mod => NodeKind::Mod,
        BinaryOp::Exp => NodeKind::Exp,
        BinaryOp::BitOr => NodeKind::BitOr,
        BinaryOp::BitXor => NodeKind::BitXor,
        BinaryOp::BitAnd => NodeKind::BitAnd,
        BinaryOp::In => NodeKind::In,
        BinaryOp::InstanceOf => NodeKind::InstanceOf,
        BinaryOp::LogicalOr => NodeKind::Or,
        BinaryOp::LogicalAnd => NodeKind::And,
    }
}

fn assign_kind(op: AssignOp) -> NodeKind {
    match op {
        AssignOp::Assign => NodeKind::Assign,
        AssignOp::AddAssign => NodeKind::AssignAdd,
        AssignOp::SubAssign => NodeKind::AssignSub,
        AssignOp::MulAssign => NodeKind::AssignMul,
        AssignOp::DivAssign => NodeKind::AssignDiv,
        AssignOp::ModAssign => NodeKind::AssignMod,
        AssignOp::ExpAssign => NodeKind::AssignExp,
        AssignOp::LShiftAssign => NodeKind::AssignLsh,
        AssignOp::RShiftAssign => NodeKind::AssignRsh,
        AssignOp::ZeroFillRShiftAssign => NodeKind::AssignUrsh,
        AssignOp::BitOrAssign => NodeKind::AssignBitOr,
        AssignOp::BitXorAssign => NodeKind::AssignBitXor,
        AssignOp::BitAndAssign => NodeKind::AssignBitAnd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{FileName, SourceId};
    use pretty_assertions::assert_eq;

    fn builder_over(src: &str) -> (SourceFile, Config, Handler) {
        (
            SourceFile::new(SourceId(1), FileName::Anon, src.to_string()),
            Config::default(),
            Handler::with_recovery(),
        )
    }

    #[test]
    fn trivia_scan_skips_comments() {
        let (sf, config, handler) = builder_over("[a, /* hole */ , b]");
        let b = Builder::new(&sf, &[], &config, &handler);
        let end = sf.end_pos();
        // After `a` (offset 2) the next significant char is the comma.
        assert_eq!(b.next_significant(BytePos(2), end), Some(BytePos(2)));
        // After that comma, the block comment is skipped entirely.
        assert_eq!(b.next_significant(BytePos(3), end), Some(BytePos(15)));
    }

    #[test]
    fn trivia_scan_skips_line_comments() {
        let (sf, config, handler) = builder_over("x // tail\n  y");
        let b = Builder::new(&sf, &[], &config, &handler);
        assert_eq!(b.next_significant(BytePos(1), sf.end_pos()), Some(BytePos(12)));
    }

    #[test]
    fn semicolon_trimming() {
        let (sf, config, handler) = builder_over("x = 1;");
        let b = Builder::new(&sf, &[], &config, &handler);
        let all = Span::new(BytePos(0), sf.end_pos());
        assert_eq!(b.trim_semi(all), Span::new(BytePos(0), BytePos(5)));
        // Already-trimmed spans are untouched.
        let bare = Span::new(BytePos(0), BytePos(5));
        assert_eq!(b.trim_semi(bare), bare);
    }

    #[test]
    fn open_paren_scan_steps_over_names() {
        let (sf, config, handler) = builder_over("function foo () { }");
        let b = Builder::new(&sf, &[], &config, &handler);
        assert_eq!(b.find_open_paren(BytePos(0), sf.end_pos()), Some(BytePos(13)));
    }

    #[test]
    fn directive_prologue_stops_at_first_non_string() {
        let (sf, config, handler) = builder_over("'use strict'; x; 'late';");
        let b = Builder::new(&sf, &[], &config, &handler);

        let directive = |text: &str, at: u32| {
            let lo = BytePos(at);
            Stmt::Expr(ExprStmt {
                span: Span::new(lo, lo + BytePos(text.len() as u32 + 2)),
                expr: Box::new(Expr::Lit(Lit::Str(Str {
                    span: Span::new(lo, lo + BytePos(text.len() as u32 + 2)),
                    value: text.into(),
                    has_escape: false,
                }))),
            })
        };
        let other = Stmt::Empty(EmptyStmt {
            span: Span::new(BytePos(14), BytePos(15)),
        });

        let set = b
            .directive_set(&[directive("use strict", 0), other.clone(), directive("late", 17)])
            .unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&js_word!("use strict")));

        assert!(b.directive_set(&[other]).is_none());
        assert!(b.directive_set(&[]).is_none());
    }
}
