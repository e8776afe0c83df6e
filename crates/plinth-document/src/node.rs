// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document tree nodes.
//!
//! The upstream parser hands consumers a [`Node`] tree. Two container
//! variants exist because the distinction matters to consumers: an
//! [`Node::ObjectList`] is a block *body* (the root "plugins" section is
//! one), while [`Node::ObjectType`] is a braced block *value* sitting to the
//! right of some keys. Both keep entries in document order.

use crate::key::KeyToken;

/// A scalar literal in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// One item of an object list: 1-2 key tokens (more are representable, and
/// rejected by consumers that care) and a value node.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedEntry {
    pub keys: Vec<KeyToken>,
    pub value: Node,
}

impl KeyedEntry {
    pub fn new(keys: Vec<KeyToken>, value: Node) -> Self {
        Self { keys, value }
    }
}

/// An ordered sequence of keyed entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectList {
    pub items: Vec<KeyedEntry>,
}

impl ObjectList {
    pub fn new(items: Vec<KeyedEntry>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A node of the parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A block body: ordered keyed entries.
    ObjectList(ObjectList),
    /// A braced block value whose body is an ordered entry sequence.
    ObjectType(ObjectList),
    /// A scalar literal.
    Scalar(Scalar),
    /// An ordered sequence literal, e.g. `["--a", "--b"]`.
    List(Vec<Node>),
}

impl Node {
    /// A scalar node from anything convertible to [`Scalar`].
    pub fn scalar(value: impl Into<Scalar>) -> Self {
        Node::Scalar(value.into())
    }

    /// A string scalar node.
    pub fn string(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar::String(value.into()))
    }

    /// A list node.
    pub fn list(items: Vec<Node>) -> Self {
        Node::List(items)
    }

    /// A list node of string scalars.
    pub fn string_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::List(items.into_iter().map(Node::string).collect())
    }

    /// A block body node.
    pub fn body(items: Vec<KeyedEntry>) -> Self {
        Node::ObjectList(ObjectList::new(items))
    }

    /// A braced block value node.
    pub fn block(items: Vec<KeyedEntry>) -> Self {
        Node::ObjectType(ObjectList::new(items))
    }

    /// Short human-readable name of the variant, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::ObjectList(_) => "object list",
            Node::ObjectType(_) => "object block",
            Node::Scalar(_) => "scalar",
            Node::List(_) => "list",
        }
    }

    /// The entry sequence of an [`Node::ObjectType`] block, if this is one.
    pub fn as_block_body(&self) -> Option<&ObjectList> {
        match self {
            Node::ObjectType(list) => Some(list),
            _ => None,
        }
    }
}
