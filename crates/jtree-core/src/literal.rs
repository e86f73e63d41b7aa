// Scalar literals for "set from text": a quoted string, a number, true/false,
// null, or an empty [] / {}. Full documents are not accepted here.
use crate::array::Array;
use crate::error::{Error, Result};
use crate::object::Object;
use crate::value::Value;

pub fn parse(text: &str) -> Result<Value> {
    let invalid = || Error::InvalidLiteral(text.to_string());
    let parsed: serde_json::Value = serde_json::from_str(text).map_err(|_| invalid())?;
    match parsed {
        serde_json::Value::Null => Ok(Value::None),
        serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number).ok_or_else(invalid),
        serde_json::Value::String(s) => Ok(Value::String(s)),
        serde_json::Value::Array(a) if a.is_empty() => Ok(Value::Array(Array::new())),
        serde_json::Value::Object(m) if m.is_empty() => Ok(Value::Object(Object::new())),
        _ => Err(invalid()),
    }
}
