use crate::error::{Error, Result};
use crate::value::Value;

/// Ordered, unique-keyed members. Lookup is a linear scan; insertion order is
/// what iteration and serialization see.
#[derive(Debug, Default, PartialEq)]
pub struct Object {
    members: Vec<(String, Value)>,
}

/// Keys (and path member names) match `[A-Za-z_][A-Za-z0-9_-]*`.
pub fn is_valid_key(key: &str) -> bool {
    let mut bytes = key.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(is_key_byte)
}

pub(crate) fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.members.iter().position(|(k, _)| k == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.members
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Moves `value` in under `key` and returns the stored value.
    ///
    /// A malformed or duplicate key is rejected: the existing member stays as
    /// it was and `value` is dropped.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<&mut Value> {
        if !is_valid_key(key) {
            log::debug!("rejecting member with invalid key {key:?}");
            return Err(Error::InvalidKey(key.to_string()));
        }
        if self.contains_key(key) {
            log::debug!("rejecting duplicate member {key}");
            return Err(Error::DuplicateKey(key.to_string()));
        }
        self.members.try_reserve(1)?;
        let idx = self.members.len();
        self.members.push((key.to_string(), value));
        Ok(&mut self.members[idx].1)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let idx = self.position(key)?;
        Some(self.members.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|(k, _)| k.as_str())
    }

    pub fn number_or(&self, key: &str, default: f64) -> f64 {
        crate::value::number_or(self.get(key), default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        crate::value::bool_or(self.get(key), default)
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        crate::value::str_or(self.get(key), default)
    }

    pub fn set_number(&mut self, key: &str, n: f64) -> Result<()> {
        self.set_scalar(key, Value::Number(n))
    }

    pub fn set_bool(&mut self, key: &str, b: bool) -> Result<()> {
        self.set_scalar(key, Value::Bool(b))
    }

    pub fn set_str(&mut self, key: &str, s: &str) -> Result<()> {
        self.set_scalar(key, Value::try_string(s)?)
    }

    // Overwrite in place when the kinds agree, create when absent. A member of
    // another kind is a conflict, not a coercion.
    fn set_scalar(&mut self, key: &str, value: Value) -> Result<()> {
        match self.get_mut(key) {
            Some(slot) if slot.kind() == value.kind() => {
                *slot = value;
                Ok(())
            }
            Some(slot) => Err(Error::TypeConflict {
                key: key.to_string(),
                expected: value.kind(),
                found: slot.kind(),
            }),
            None => self.insert(key, value).map(|_| ()),
        }
    }
}
