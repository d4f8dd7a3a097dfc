// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use basalt_type::{Type, Value};
use serde::{Deserialize, Serialize};
use std::mem::size_of;

/// Typed value storage for one column.
///
/// Each typed variant carries the values and a validity mask of the same
/// length; a slot whose mask bit is false reads back as
/// [`Value::Undefined`]. `Undefined` is the special case of a column where
/// every slot is undefined and only the length is tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    // values, validity
    Bool(Vec<bool>, Vec<bool>),
    Float8(Vec<f64>, Vec<bool>),
    Int2(Vec<i16>, Vec<bool>),
    Int4(Vec<i32>, Vec<bool>),
    Int8(Vec<i64>, Vec<bool>),
    Utf8(Vec<String>, Vec<bool>),
    Undefined(usize),
}

impl ColumnData {
    pub fn bool(values: impl IntoIterator<Item = bool>) -> Self {
        let values: Vec<bool> = values.into_iter().collect();
        let validity = vec![true; values.len()];
        ColumnData::Bool(values, validity)
    }

    pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        let validity = vec![true; values.len()];
        ColumnData::Float8(values, validity)
    }

    pub fn int2(values: impl IntoIterator<Item = i16>) -> Self {
        let values: Vec<i16> = values.into_iter().collect();
        let validity = vec![true; values.len()];
        ColumnData::Int2(values, validity)
    }

    pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
        let values: Vec<i32> = values.into_iter().collect();
        let validity = vec![true; values.len()];
        ColumnData::Int4(values, validity)
    }

    pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
        let values: Vec<i64> = values.into_iter().collect();
        let validity = vec![true; values.len()];
        ColumnData::Int8(values, validity)
    }

    pub fn utf8<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        let validity = vec![true; values.len()];
        ColumnData::Utf8(values, validity)
    }

    pub fn undefined(len: usize) -> Self {
        ColumnData::Undefined(len)
    }

    pub fn with_capacity(ty: Type, capacity: usize) -> Self {
        match ty {
            Type::Bool => ColumnData::Bool(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
            Type::Float8 => {
                ColumnData::Float8(Vec::with_capacity(capacity), Vec::with_capacity(capacity))
            }
            Type::Int2 => ColumnData::Int2(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
            Type::Int4 => ColumnData::Int4(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
            Type::Int8 => ColumnData::Int8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
            Type::Utf8 => ColumnData::Utf8(Vec::with_capacity(capacity), Vec::with_capacity(capacity)),
            Type::Undefined => ColumnData::Undefined(0),
        }
    }

    pub fn get_type(&self) -> Type {
        match self {
            ColumnData::Bool(_, _) => Type::Bool,
            ColumnData::Float8(_, _) => Type::Float8,
            ColumnData::Int2(_, _) => Type::Int2,
            ColumnData::Int4(_, _) => Type::Int4,
            ColumnData::Int8(_, _) => Type::Int8,
            ColumnData::Utf8(_, _) => Type::Utf8,
            ColumnData::Undefined(_) => Type::Undefined,
        }
    }

    /// Number of values stored, defined or not.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Bool(values, _) => values.len(),
            ColumnData::Float8(values, _) => values.len(),
            ColumnData::Int2(values, _) => values.len(),
            ColumnData::Int4(values, _) => values.len(),
            ColumnData::Int8(values, _) => values.len(),
            ColumnData::Utf8(values, _) => values.len(),
            ColumnData::Undefined(len) => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Heap footprint of the stored values plus the validity mask.
    pub fn byte_size(&self) -> usize {
        match self {
            ColumnData::Bool(values, validity) => values.len() + validity.len(),
            ColumnData::Float8(values, validity) => {
                values.len() * size_of::<f64>() + validity.len()
            }
            ColumnData::Int2(values, validity) => values.len() * size_of::<i16>() + validity.len(),
            ColumnData::Int4(values, validity) => values.len() * size_of::<i32>() + validity.len(),
            ColumnData::Int8(values, validity) => values.len() * size_of::<i64>() + validity.len(),
            ColumnData::Utf8(values, validity) => {
                values.iter().map(|v| v.len()).sum::<usize>() + validity.len()
            }
            ColumnData::Undefined(_) => 0,
        }
    }

    /// A zero-length column of the same type.
    pub fn clone_empty(&self) -> Self {
        Self::with_capacity(self.get_type(), 0)
    }

    /// Reads one slot back as a [`Value`], honoring the validity mask.
    pub fn get_value(&self, index: usize) -> Value {
        match self {
            ColumnData::Bool(values, validity) => {
                if validity[index] {
                    Value::Bool(values[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnData::Float8(values, validity) => {
                if validity[index] {
                    Value::Float8(values[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnData::Int2(values, validity) => {
                if validity[index] {
                    Value::Int2(values[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnData::Int4(values, validity) => {
                if validity[index] {
                    Value::Int4(values[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnData::Int8(values, validity) => {
                if validity[index] {
                    Value::Int8(values[index])
                } else {
                    Value::Undefined
                }
            }
            ColumnData::Utf8(values, validity) => {
                if validity[index] {
                    Value::Utf8(values[index].clone())
                } else {
                    Value::Undefined
                }
            }
            ColumnData::Undefined(_) => Value::Undefined,
        }
    }
}
