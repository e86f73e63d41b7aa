use std::path::Path;

use crate::array::Array;
use crate::error::{Error, Result};
use crate::object::Object;

/// Variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    None,
    Number,
    Bool,
    String,
    Array,
    Object,
}

/// One node of the tree. Every child is owned by exactly one container slot.
///
/// `Value` is deliberately not `Clone`: handing a value to a container or to
/// the path engine moves it, and the returned `&mut Value` is the only way to
/// reach it afterwards.
#[derive(Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    None,
    Number(f64),
    Bool(bool),
    String(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Default-valued node of the given kind: `0`, `false`, `""`, `[]`, `{}`.
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::None => Value::None,
            Kind::Number => Value::Number(0.0),
            Kind::Bool => Value::Bool(false),
            Kind::String => Value::String(String::new()),
            Kind::Array => Value::Array(Array::new()),
            Kind::Object => Value::Object(Object::new()),
        }
    }

    /// String node whose buffer allocation failure is reported instead of aborting.
    pub fn try_string(s: &str) -> Result<Self> {
        let mut buf = String::new();
        buf.try_reserve_exact(s.len())?;
        buf.push_str(s);
        Ok(Value::String(buf))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::None => Kind::None,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Bool,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    // Container access on the wrong variant is an error return, never a panic.

    pub fn object(&self) -> Result<&Object> {
        let found = self.kind();
        self.as_object().ok_or(Error::WrongKind {
            expected: Kind::Object,
            found,
        })
    }

    pub fn object_mut(&mut self) -> Result<&mut Object> {
        let found = self.kind();
        self.as_object_mut().ok_or(Error::WrongKind {
            expected: Kind::Object,
            found,
        })
    }

    pub fn array(&self) -> Result<&Array> {
        let found = self.kind();
        self.as_array().ok_or(Error::WrongKind {
            expected: Kind::Array,
            found,
        })
    }

    pub fn array_mut(&mut self) -> Result<&mut Array> {
        let found = self.kind();
        self.as_array_mut().ok_or(Error::WrongKind {
            expected: Kind::Array,
            found,
        })
    }

    pub fn get_member(&self, key: &str) -> Result<Option<&Value>> {
        Ok(self.object()?.get(key))
    }

    /// Moves `value` into this object under `key`. On any error `value` is dropped.
    pub fn add_member(&mut self, key: &str, value: Value) -> Result<&mut Value> {
        self.object_mut()?.insert(key, value)
    }

    pub fn get_element(&self, index: usize) -> Result<Option<&Value>> {
        Ok(self.array()?.get(index))
    }

    /// Appends `value` to this array. On any error `value` is dropped.
    pub fn add_element(&mut self, value: Value) -> Result<&mut Value> {
        self.array_mut()?.push(value)
    }

    /// Node at `path`, see [`crate::path::get`].
    pub fn pointer(&self, path: &str) -> Result<Option<&Value>> {
        crate::path::get(self, path)
    }

    pub fn pointer_mut(&mut self, path: &str) -> Result<Option<&mut Value>> {
        crate::path::get_mut(self, path)
    }

    /// Replaces the node at `path` with `value`, see [`crate::path::set`].
    pub fn replace(&mut self, path: &str, value: Value) -> Result<()> {
        crate::path::set(self, path, value)
    }

    /// Writes this tree as YAML to `dest`.
    pub fn save(&self, dest: impl AsRef<Path>) -> Result<()> {
        crate::yaml::save(Some(self), dest)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

// Typed reads over a possibly absent node: a missing node or another variant
// yields the caller's default.

pub fn number_or(value: Option<&Value>, default: f64) -> f64 {
    value.and_then(Value::as_number).unwrap_or(default)
}

pub fn bool_or(value: Option<&Value>, default: bool) -> bool {
    value.and_then(Value::as_bool).unwrap_or(default)
}

pub fn str_or<'a>(value: Option<&'a Value>, default: &'a str) -> &'a str {
    value.and_then(Value::as_str).unwrap_or(default)
}
