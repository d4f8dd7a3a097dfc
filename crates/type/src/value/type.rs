// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::Value;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// All data types a column can carry.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
    /// A boolean: true or false.
    Bool,
    /// An 8-byte floating point
    Float8,
    /// A 2-byte signed integer
    Int2,
    /// A 4-byte signed integer
    Int4,
    /// An 8-byte signed integer
    Int8,
    /// A UTF-8 encoded text.
    Utf8,
    /// Value is not defined (think null in common programming languages)
    Undefined,
}

impl Type {
    /// The canonical name of this type. Two columns are structurally
    /// compatible exactly when their canonical names are equal.
    pub fn name(&self) -> &'static str {
        match self {
            Type::Bool => "Bool",
            Type::Float8 => "Float8",
            Type::Int2 => "Int2",
            Type::Int4 => "Int4",
            Type::Int8 => "Int8",
            Type::Utf8 => "Utf8",
            Type::Undefined => "Undefined",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&Value> for Type {
    fn from(value: &Value) -> Self {
        match value {
            Value::Undefined => Type::Undefined,
            Value::Bool(_) => Type::Bool,
            Value::Float8(_) => Type::Float8,
            Value::Int2(_) => Type::Int2,
            Value::Int4(_) => Type::Int4,
            Value::Int8(_) => Type::Int8,
            Value::Utf8(_) => Type::Utf8,
        }
    }
}
