use crate::jsdoc::DocInfo;
use crate::types::TypeExpr;
use atoms::JsWord;
use bitflags::bitflags;
use common::SourceId;
use num_bigint::BigInt as BigIntValue;
use rustc_hash::FxHashSet;

/// Exact extent of a node in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodePos {
    /// 1-based line.
    pub line: u32,
    /// 0-based character offset from the start of the line.
    pub column: u32,
    /// Character count of the node's concrete syntax.
    pub length: u32,
}

impl NodePos {
    /// Position of synthesized nodes that have no textual extent of their
    /// own, e.g. the name of an anonymous function.
    pub const SYNTHETIC: NodePos = NodePos {
        line: 0,
        column: 0,
        length: 0,
    };

    pub const fn new(line: u32, column: u32, length: u32) -> Self {
        NodePos {
            line,
            column,
            length,
        }
    }

    pub fn is_synthetic(self) -> bool {
        self.line == 0
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// Source wrapped this expression in grouping parens.
        const PARENTHESIZED = 1 << 0;
        /// The member key was written as a quoted string.
        const QUOTED_KEY = 1 << 1;
        /// The update operator was written after its operand.
        const POSTFIX = 1 << 2;
        /// The function was written in arrow syntax.
        const ARROW_FN = 1 << 3;
        /// Shorthand object member.
        const SHORTHAND = 1 << 4;
        /// The attached documentation comment has no annotations and is
        /// parsed as free-flowing text.
        const FREE_FLOWING_DOC = 1 << 5;
        /// Computed member is a getter definition.
        const COMPUTED_GETTER = 1 << 6;
        /// Computed member is a setter definition.
        const COMPUTED_SETTER = 1 << 7;
    }
}

/// What a [Node] represents. One variant per construct; variants carry only
/// the data meaningful for that construct, everything structural lives in
/// `Node::children`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    // Statements and structure. Children are noted where the shape is not
    // obvious.
    Script,
    /// An expression statement; one child.
    ExprResult,
    Block,
    /// Placeholder: array holes, absent catch/finally parts, the empty
    /// statement.
    Empty,
    /// Children are one node per declarator: a name (with an optional value
    /// child) or a destructuring-lhs wrapper.
    Var,
    Let,
    Const,
    /// `[pattern, value?]`.
    DestructuringLhs,
    If,
    /// `[init, cond, incr, body]`, absent parts are `Empty`.
    For,
    ForIn,
    ForOf,
    While,
    DoWhile,
    /// `[discriminant, case.., default..]` in source order.
    Switch,
    /// `[test, block]`; the block is synthesized around the clause's
    /// statement list.
    Case,
    /// `[block]`.
    Default,
    /// `[label-name, statement]`.
    Label,
    LabelName(JsWord),
    Break,
    Continue,
    Return,
    Throw,
    /// Always `[block, catch-or-empty, finally-or-empty]`.
    Try,
    /// `[param-or-empty, block]`.
    Catch,
    With,
    Debugger,

    /// `[name, param-list, body]`. The name of an anonymous function is an
    /// empty word with a synthetic position.
    Function,
    ParamList,

    Name(JsWord),
    /// Normalized object-literal key; numeric keys are rendered with
    /// ECMAScript number-to-string semantics.
    StringKey(JsWord),
    /// `[function]`.
    GetterDef(JsWord),
    /// `[function]`.
    SetterDef(JsWord),

    ObjectLit,
    ArrayLit,
    ObjectPattern,
    ArrayPattern,
    /// `[target, default-expression]`.
    DefaultValue,
    /// `[target]`.
    Rest,
    /// `[expression]`.
    Spread,
    /// `[key-expression, value]`.
    ComputedProp,

    /// `[object, string]`.
    GetProp,
    /// `[object, index-expression]`.
    GetElem,
    /// `[callee, args..]`.
    Call,
    /// `[callee, args..]`.
    New,
    /// `[test, cons, alt]`.
    Hook,

    String(JsWord),
    /// **Note**: This should not be `NaN`; `NaN` reaches the tree as a name.
    Number(f64),
    BigInt(Box<BigIntValue>),
    /// Pattern and flag source text, unmodified.
    Regex { exp: JsWord, flags: JsWord },
    True,
    False,
    Null,
    This,

    // Unary operators; one operand child.
    Neg,
    Pos,
    Not,
    BitNot,
    TypeOf,
    Void,
    Delete,
    Inc,
    Dec,

    // Binary operators; exactly two operand children.
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    Lsh,
    Rsh,
    Ursh,
    BitAnd,
    BitOr,
    BitXor,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
    StrictEq,
    StrictNe,
    InstanceOf,
    In,
    And,
    Or,
    Comma,

    // Assignment operators; exactly two operand children.
    Assign,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,
    AssignExp,
    AssignLsh,
    AssignRsh,
    AssignUrsh,
    AssignBitAnd,
    AssignBitOr,
    AssignBitXor,
}

/// One canonical tree node.
///
/// Children are exclusively owned; the tree is a tree, not a graph. A node
/// is mutated only while its subtree is under construction; once positioned
/// and annotated it is handed off by value and never touched again.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub pos: NodePos,
    pub source: SourceId,
    /// From either the documentation-comment grammar or the inline type
    /// grammar, never both.
    pub declared_type: Option<Box<TypeExpr>>,
    pub doc_info: Option<Box<DocInfo>>,
    pub flags: NodeFlags,
    /// Directive-prologue strings of a script or function body. `None` when
    /// no directive statements were present at all.
    pub directives: Option<Box<FxHashSet<JsWord>>>,
}

impl Node {
    pub fn new(kind: NodeKind, pos: NodePos, source: SourceId) -> Node {
        Node {
            kind,
            children: Vec::new(),
            pos,
            source,
            declared_type: None,
            doc_info: None,
            flags: NodeFlags::default(),
            directives: None,
        }
    }

    pub fn with_children(
        kind: NodeKind,
        pos: NodePos,
        source: SourceId,
        children: Vec<Node>,
    ) -> Node {
        Node {
            children,
            ..Node::new(kind, pos, source)
        }
    }

    pub fn has_flag(&self, flag: NodeFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Whether the attached directive set contains `directive`. False when
    /// there is no set at all.
    pub fn has_directive(&self, directive: &JsWord) -> bool {
        self.directives
            .as_ref()
            .is_some_and(|set| set.contains(directive))
    }
}
