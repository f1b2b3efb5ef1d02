use crate::node::NodePos;
use atoms::JsWord;

/// A declared-type expression, sourced from either the documentation-comment
/// type grammar or the inline type grammar. Consumed by the type registry;
/// this crate only builds it.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// `string`, `foo.Bar` (qualification is kept in the word).
    Name { pos: NodePos, name: JsWord },

    /// `Array<string>`.
    App {
        pos: NodePos,
        name: JsWord,
        args: Vec<TypeExpr>,
    },

    /// `(A|B)` in the documentation grammar, `A | B` inline.
    Union { pos: NodePos, alts: Vec<TypeExpr> },

    /// `?T`
    Nullable { pos: NodePos, ty: Box<TypeExpr> },

    /// `!T`
    NonNullable { pos: NodePos, ty: Box<TypeExpr> },

    /// `T=`, an optional parameter type.
    Optional { pos: NodePos, ty: Box<TypeExpr> },

    /// `...T`, or a bare `...`.
    Rest {
        pos: NodePos,
        ty: Option<Box<TypeExpr>>,
    },

    /// `{a: T, b}`.
    Record {
        pos: NodePos,
        fields: Vec<RecordField>,
    },

    /// `*`
    All { pos: NodePos },

    /// A standalone `?`.
    Unknown { pos: NodePos },
}

impl TypeExpr {
    pub fn pos(&self) -> NodePos {
        match *self {
            TypeExpr::Name { pos, .. }
            | TypeExpr::App { pos, .. }
            | TypeExpr::Union { pos, .. }
            | TypeExpr::Nullable { pos, .. }
            | TypeExpr::NonNullable { pos, .. }
            | TypeExpr::Optional { pos, .. }
            | TypeExpr::Rest { pos, .. }
            | TypeExpr::Record { pos, .. }
            | TypeExpr::All { pos }
            | TypeExpr::Unknown { pos } => pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub pos: NodePos,
    pub name: JsWord,
    /// `None` for a bare field name.
    pub ty: Option<TypeExpr>,
}
