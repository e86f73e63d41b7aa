//! Path expressions addressing descendants of a tree, e.g. `basic.dns[1]`.
//!
//! ```text
//! root   ::= member | index
//! member ::= <name> child
//! index  ::= '[' <number> ']' child
//! child  ::= '.' member | index | ε
//! ```
//!
//! The parser and the evaluator are one pass: each recursion level consumes a
//! single segment, and which segment is acceptable depends on the node reached
//! so far (objects take `.name`, arrays take `[n]`, leaves take end of input).
//! The empty path names the root itself.
//!
//! - Query: [`get`], [`get_mut`], and typed reads [`number_at`], [`bool_at`], [`str_at`].
//! - Replace: [`set`] swaps an existing node.
//! - Upsert: [`upsert`] / [`set_literal`] may also create the final segment.
//!
//! Every mutating call takes its value by move; when the call fails the value
//! is dropped with it.
use crate::array::Array;
use crate::error::{Error, Result};
use crate::object::is_key_byte;
use crate::value::{self, Kind, Value};

/// Node at `path`, or `None` when a segment does not resolve. Only the
/// resolved prefix is syntax-checked: text after a missing member or
/// out-of-range index is not examined.
pub fn get<'v>(root: &'v Value, path: &str) -> Result<Option<&'v Value>> {
    Walker::new(path, false).root(root)
}

pub fn get_mut<'v>(root: &'v mut Value, path: &str) -> Result<Option<&'v mut Value>> {
    Walker::new(path, false).root(root)
}

/// Replaces the node at `path` with `value`; the displaced subtree is dropped.
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<()> {
    match get_mut(root, path)? {
        Some(slot) => {
            log::trace!("replacing {:?} node at {path:?}", slot.kind());
            *slot = value;
            Ok(())
        }
        None => Err(Error::PathNotFound(path.to_string())),
    }
}

/// Like [`set`], but a missing final member is created in its parent object and
/// a final index equal to the array length appends. Missing parents and gaps
/// in arrays are still `PathNotFound`.
pub fn upsert<'v>(root: &'v mut Value, path: &str, value: Value) -> Result<&'v mut Value> {
    match Walker::new(path, true).root(root)? {
        Some(slot) => {
            *slot = value;
            Ok(slot)
        }
        None => Err(Error::PathNotFound(path.to_string())),
    }
}

/// Upserts a literal such as `"200.200.0.1"`, `8080`, `true`, `[]` or `{}`.
pub fn set_literal<'v>(root: &'v mut Value, path: &str, literal: &str) -> Result<&'v mut Value> {
    let value = crate::literal::parse(literal)?;
    upsert(root, path, value)
}

pub fn number_at(root: &Value, path: &str, default: f64) -> f64 {
    value::number_or(get(root, path).ok().flatten(), default)
}

pub fn bool_at(root: &Value, path: &str, default: bool) -> bool {
    value::bool_or(get(root, path).ok().flatten(), default)
}

pub fn str_at<'a>(root: &'a Value, path: &str, default: &'a str) -> &'a str {
    value::str_or(get(root, path).ok().flatten(), default)
}

// Shared traversal over `&Value` and `&mut Value`.
trait Node: Sized {
    fn value(&self) -> &Value;
    fn into_member(self, key: &str) -> Option<Self>;
    fn into_element(self, index: usize) -> Option<Self>;

    fn vacant_member(self, _key: &str) -> Result<Option<Self>> {
        Ok(None)
    }

    fn vacant_element(self) -> Result<Option<Self>> {
        Ok(None)
    }
}

impl<'v> Node for &'v Value {
    fn value(&self) -> &Value {
        self
    }

    fn into_member(self, key: &str) -> Option<Self> {
        self.as_object()?.get(key)
    }

    fn into_element(self, index: usize) -> Option<Self> {
        self.as_array()?.get(index)
    }
}

impl<'v> Node for &'v mut Value {
    fn value(&self) -> &Value {
        self
    }

    fn into_member(self, key: &str) -> Option<Self> {
        self.as_object_mut()?.get_mut(key)
    }

    fn into_element(self, index: usize) -> Option<Self> {
        self.as_array_mut()?.get_mut(index)
    }

    fn vacant_member(self, key: &str) -> Result<Option<Self>> {
        self.object_mut()?.insert(key, Value::None).map(Some)
    }

    fn vacant_element(self) -> Result<Option<Self>> {
        self.array_mut()?.push(Value::None).map(Some)
    }
}

struct Walker<'p> {
    path: &'p str,
    pos: usize,
    create: bool,
}

impl<'p> Walker<'p> {
    fn new(path: &'p str, create: bool) -> Self {
        Self {
            path,
            pos: 0,
            create,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.path.as_bytes().get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.path.len()
    }

    fn syntax_error(&self, reason: &'static str) -> Error {
        log::warn!(
            "{reason}\npath: {}\n{:>width$}",
            self.path,
            "^",
            width = self.pos + 7
        );
        Error::PathSyntax {
            path: self.path.to_string(),
            offset: self.pos,
            reason,
        }
    }

    fn root<N: Node>(&mut self, node: N) -> Result<Option<N>> {
        if self.at_end() {
            return Ok(Some(node));
        }
        match node.value().kind() {
            Kind::Object => self.member(node),
            _ => self.child(node),
        }
    }

    fn child<N: Node>(&mut self, node: N) -> Result<Option<N>> {
        log::trace!(
            "path {:?}: {:?} node at offset {}",
            self.path,
            node.value().kind(),
            self.pos
        );
        match node.value().kind() {
            Kind::Object => self.dot_member(node),
            Kind::Array => self.index(node),
            Kind::None | Kind::Number | Kind::Bool | Kind::String => self.eof(node),
        }
    }

    fn eof<N: Node>(&mut self, node: N) -> Result<Option<N>> {
        if self.at_end() {
            Ok(Some(node))
        } else {
            Err(self.syntax_error("unexpected character"))
        }
    }

    fn dot_member<N: Node>(&mut self, node: N) -> Result<Option<N>> {
        if self.peek() != Some(b'.') {
            return self.eof(node);
        }
        self.pos += 1;
        if self.at_end() {
            return Err(self.syntax_error("unexpected end"));
        }
        self.member(node)
    }

    fn member<N: Node>(&mut self, node: N) -> Result<Option<N>> {
        let name = self.name()?;
        let exists = node
            .value()
            .as_object()
            .is_some_and(|o| o.contains_key(name));
        if !exists {
            if self.create && self.at_end() {
                log::trace!("creating member {name} for {:?}", self.path);
                return node.vacant_member(name);
            }
            return Ok(None);
        }
        match node.into_member(name) {
            Some(next) => self.child(next),
            None => Ok(None),
        }
    }

    fn index<N: Node>(&mut self, node: N) -> Result<Option<N>> {
        match self.peek() {
            None => return self.eof(node),
            Some(b'[') => self.pos += 1,
            Some(_) => return Err(self.syntax_error("expected '['")),
        }
        let index = self.number()?;
        if self.peek() != Some(b']') {
            return Err(self.syntax_error("expected ']'"));
        }
        self.pos += 1;

        let len = node.value().as_array().map_or(0, Array::len);
        if index < len {
            return match node.into_element(index) {
                Some(next) => self.child(next),
                None => Ok(None),
            };
        }
        if self.create && index == len && self.at_end() {
            log::trace!("appending element {index} for {:?}", self.path);
            return node.vacant_element();
        }
        Ok(None)
    }

    fn name(&mut self) -> Result<&'p str> {
        let path = self.path;
        let start = self.pos;
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.pos += 1,
            _ => return Err(self.syntax_error("expected member name")),
        }
        while self.peek().is_some_and(is_key_byte) {
            self.pos += 1;
        }
        Ok(&path[start..self.pos])
    }

    // Indices too large for usize saturate and resolve as out of range.
    fn number(&mut self) -> Result<usize> {
        let start = self.pos;
        let mut n: usize = 0;
        while let Some(b) = self.peek().filter(u8::is_ascii_digit) {
            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add(usize::from(b - b'0')))
                .unwrap_or(usize::MAX);
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.syntax_error("expected index"));
        }
        Ok(n)
    }
}
