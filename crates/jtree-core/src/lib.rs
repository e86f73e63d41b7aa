//! jtree-core: an owned JSON-like value tree, path expressions, and a YAML-subset writer
//!
//! This crate focuses on a small surface:
//! - `Value` tagged union with ordered `Object` / `Array` containers
//! - Typed readers that fall back to a caller default instead of failing
//! - Path expressions (`basic.dns[1]`) for query, replace and upsert
//! - YAML-subset serialization to a string or a file
//!
pub mod array;
pub mod error;
pub mod literal;
pub mod object;
pub mod path;
pub mod value;
pub mod yaml;

pub use array::Array;
pub use error::{Error, Result};
pub use object::{Object, is_valid_key};
pub use value::{Kind, Value, bool_or, number_or, str_or};
pub use yaml::{YamlOpts, load, save};
