use crate::error::Result;
use crate::value::Value;

/// Ordered elements, addressed by position.
#[derive(Debug, Default, PartialEq)]
pub struct Array {
    elems: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elems.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.elems.get_mut(index)
    }

    /// Appends `value` and returns the stored element. If growing the backing
    /// storage fails, `value` is dropped and `Error::Alloc` is returned.
    pub fn push(&mut self, value: Value) -> Result<&mut Value> {
        self.elems.try_reserve(1)?;
        let idx = self.elems.len();
        self.elems.push(value);
        Ok(&mut self.elems[idx])
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.elems.len() {
            return None;
        }
        Some(self.elems.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elems.iter()
    }

    pub fn number_or(&self, index: usize, default: f64) -> f64 {
        crate::value::number_or(self.get(index), default)
    }

    pub fn bool_or(&self, index: usize, default: bool) -> bool {
        crate::value::bool_or(self.get(index), default)
    }

    pub fn str_or<'a>(&'a self, index: usize, default: &'a str) -> &'a str {
        crate::value::str_or(self.get(index), default)
    }

    pub fn push_number(&mut self, n: f64) -> Result<()> {
        self.push(Value::Number(n)).map(|_| ())
    }

    pub fn push_bool(&mut self, b: bool) -> Result<()> {
        self.push(Value::Bool(b)).map(|_| ())
    }

    pub fn push_str(&mut self, s: &str) -> Result<()> {
        self.push(Value::try_string(s)?).map(|_| ())
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}
