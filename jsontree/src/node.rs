// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use alloc::vec::Vec;

use crate::int_parser::Int;

/// The syntactic category of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// A parsed JSON number.
///
/// Both representations are always populated. The integer is the literal's
/// leading integer part in the configured width (wrapping on overflow), the
/// double is the literal's closest `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    int: Int,
    float: f64,
    is_float: bool,
}

impl Number {
    pub(crate) const fn new(int: Int, float: f64, is_float: bool) -> Self {
        Self {
            int,
            float,
            is_float,
        }
    }

    pub const fn as_int(&self) -> Int {
        self.int
    }

    pub const fn as_f64(&self) -> f64 {
        self.float
    }

    /// True if the literal had a fraction or exponent part. Informational
    /// only: both values are usable either way.
    pub const fn is_float(&self) -> bool {
        self.is_float
    }

    pub const fn is_integer(&self) -> bool {
        !self.is_float
    }
}

/// The payload of a [`Node`], one variant per [`Kind`].
///
/// Array and object children keep the order they appeared in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(Vec<Node>),
}

impl Value {
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

/// One element of a parsed tree.
///
/// A node carries a key exactly when it is a member of an object; array
/// elements and the root have none. A node owns all of its children, and the
/// whole tree is released when the root is dropped or passed to
/// [`free`](crate::free).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    key: Option<String>,
    value: Value,
}

impl Node {
    pub(crate) const fn new(value: Value) -> Self {
        Self { key: None, value }
    }

    /// Attaches the member key; only the object parser calls this.
    pub(crate) fn with_key(mut self, key: String) -> Self {
        self.key = Some(key);
        self
    }

    /// Detaches the children of an array or object, leaving it empty.
    pub(crate) fn take_children(&mut self) -> Option<Vec<Node>> {
        match &mut self.value {
            Value::Array(children) | Value::Object(children) => {
                Some(core::mem::take(children))
            }
            _ => None,
        }
    }

    pub const fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// The member key, present only for object members.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub const fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }

    /// Number of children of an array or object; 0 for scalars.
    pub fn count(&self) -> usize {
        self.child_slice().len()
    }

    /// Children of an array or object in input order; empty for scalars.
    pub fn children(&self) -> core::slice::Iter<'_, Node> {
        self.child_slice().iter()
    }

    fn child_slice(&self) -> &[Node] {
        match &self.value {
            Value::Array(children) | Value::Object(children) => children,
            _ => &[],
        }
    }

    /// Looks up an object member by exact key.
    ///
    /// Scans members in order and returns the first match, so with
    /// duplicate keys the earliest one wins. Returns `None` for missing
    /// keys and for nodes that are not objects.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match &self.value {
            Value::Object(members) => members.iter().find(|member| member.key() == Some(key)),
            _ => None,
        }
    }

    /// Looks up an array element by 0-based position.
    ///
    /// Returns `None` when out of range and for nodes that are not arrays.
    pub fn at(&self, index: usize) -> Option<&Node> {
        match &self.value {
            Value::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self.value, Value::Null)
    }

    // Typed extraction: the default stands in for any other kind. Match on
    // `value()` to tell "wrong kind" apart from a real default.

    /// The string payload, or `""` if this is not a string.
    pub fn as_str(&self) -> &str {
        match &self.value {
            Value::String(text) => text,
            _ => "",
        }
    }

    /// The double payload, or `0.0` if this is not a number.
    pub const fn as_f64(&self) -> f64 {
        match &self.value {
            Value::Number(number) => number.as_f64(),
            _ => 0.0,
        }
    }

    /// The integer payload, or `0` if this is not a number.
    pub const fn as_int(&self) -> Int {
        match &self.value {
            Value::Number(number) => number.as_int(),
            _ => 0,
        }
    }

    /// The boolean payload, or `false` if this is not a boolean.
    pub const fn as_bool(&self) -> bool {
        match &self.value {
            Value::Bool(value) => *value,
            _ => false,
        }
    }

    /// The number payload, if this is a number.
    pub const fn as_number(&self) -> Option<&Number> {
        match &self.value {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }
}
