use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write as _};
use std::path::Path;

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Clone, Copy, Debug)]
pub struct YamlOpts {
    /// Spaces added per nesting level.
    pub indent: usize,
}

impl Default for YamlOpts {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

pub fn to_string(value: &Value) -> String {
    to_string_with(value, YamlOpts::default())
}

pub fn to_string_with(value: &Value, opts: YamlOpts) -> String {
    let mut out = String::new();
    if is_block(value) {
        write_entries(value, 0, &opts, &mut out).ok();
    } else {
        write_inline(value, &mut out).ok();
    }
    // A root mapping starts on the first line; a root sequence keeps its
    // leading blank line.
    if matches!(value, Value::Object(_)) && out.starts_with('\n') {
        out.remove(0);
    }
    out
}

pub fn write<W: io::Write>(value: &Value, mut w: W) -> io::Result<()> {
    w.write_all(to_string(value).as_bytes())?;
    w.flush()
}

/// Renders `root` and writes it to `dest`, replacing any existing file.
pub fn save(root: Option<&Value>, dest: impl AsRef<Path>) -> Result<()> {
    save_with(root, dest, YamlOpts::default())
}

pub fn save_with(root: Option<&Value>, dest: impl AsRef<Path>, opts: YamlOpts) -> Result<()> {
    let path = dest.as_ref();
    let root = root.ok_or(Error::NoRoot)?;
    let text = to_string_with(root, opts);
    let mut file = fs::File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
    log::trace!("saved {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Reading YAML back into a tree is not implemented; only the shape of the
/// call exists.
pub fn load(source: impl AsRef<Path>) -> Result<Value> {
    let path = source.as_ref();
    fs::metadata(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Err(Error::Unsupported("loading YAML text"))
}

fn is_block(v: &Value) -> bool {
    match v {
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        _ => false,
    }
}

// Each entry of a non-empty container goes on its own line, prefixed by a
// line break and `indent` spaces.
fn write_entries(v: &Value, indent: usize, opts: &YamlOpts, out: &mut String) -> fmt::Result {
    let pad = " ".repeat(indent);
    match v {
        Value::Array(items) => {
            for item in items {
                write!(out, "\n{pad}-")?;
                write_entry_value(item, indent, opts, out)?;
            }
        }
        Value::Object(obj) => {
            for (key, item) in obj.iter() {
                write!(out, "\n{pad}{key}:")?;
                write_entry_value(item, indent, opts, out)?;
            }
        }
        _ => write_inline(v, out)?,
    }
    Ok(())
}

fn write_entry_value(v: &Value, indent: usize, opts: &YamlOpts, out: &mut String) -> fmt::Result {
    if is_block(v) {
        write_entries(v, indent + opts.indent, opts, out)
    } else {
        out.push(' ');
        write_inline(v, out)
    }
}

fn write_inline(v: &Value, out: &mut String) -> fmt::Result {
    match v {
        Value::None => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, out)?,
        Value::String(s) => escape_scalar(s, out),
        Value::Array(_) => out.push_str("[]"),
        Value::Object(_) => out.push_str("{}"),
    }
    Ok(())
}

fn write_number(n: f64, out: &mut String) -> fmt::Result {
    if n.is_nan() {
        out.push_str(".nan");
    } else if n.is_infinite() {
        out.push_str(if n > 0.0 { ".inf" } else { "-.inf" });
    } else {
        // Whichever of positional and exponent form is shorter, so `1e300`
        // does not expand to 301 digits.
        let plain = n.to_string();
        let exp = format!("{n:e}");
        out.push_str(if exp.len() < plain.len() { &exp } else { &plain });
    }
    Ok(())
}

// Scalars stay on one line: a newline becomes the two characters `\n`. The
// empty string is quoted, a bare empty scalar reads back as null.
fn escape_scalar(s: &str, out: &mut String) {
    if s.is_empty() {
        out.push_str("''");
        return;
    }
    for ch in s.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
}
