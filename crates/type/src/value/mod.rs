// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use serde::{Deserialize, Serialize};

mod r#type;

pub use r#type::Type;

/// A single value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Value {
    /// Value is not defined (think null in common programming languages)
    Undefined,
    /// A boolean: true or false.
    Bool(bool),
    /// An 8-byte floating point
    Float8(f64),
    /// A 2-byte signed integer
    Int2(i16),
    /// A 4-byte signed integer
    Int4(i32),
    /// An 8-byte signed integer
    Int8(i64),
    /// A UTF-8 encoded text.
    Utf8(String),
}
