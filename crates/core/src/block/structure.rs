// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use super::Block;
use crate::{Column, NameAndType};
use basalt_type::diagnostic::block::column_sizes_mismatch;
use basalt_type::{Result, return_error};

impl Block {
    /// The row count shared by every populated column.
    ///
    /// The first populated column's count becomes the reference; any later
    /// populated column disagreeing with it fails the call. Unpopulated
    /// columns do not participate. An empty block has 0 rows.
    pub fn rows(&self) -> Result<usize> {
        let mut reference: Option<(&str, usize)> = None;

        for column in &self.data {
            let Some(data) = &column.data else { continue };
            let rows = data.len();

            match reference {
                None => reference = Some((column.name.as_str(), rows)),
                Some((first, first_rows)) => {
                    if rows != first_rows {
                        return_error!(column_sizes_mismatch(
                            first,
                            first_rows,
                            &column.name,
                            rows
                        ));
                    }
                }
            }
        }

        Ok(reference.map_or(0, |(_, rows)| rows))
    }

    /// The first column's row count, without cross-checking the rest.
    /// Cheaper but weaker than [`Block::rows`].
    pub fn rows_in_first_column(&self) -> usize {
        self.data
            .first()
            .and_then(|column| column.data.as_ref())
            .map_or(0, |data| data.len())
    }

    pub fn columns(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Byte footprint of all populated columns.
    pub fn bytes(&self) -> usize {
        self.data
            .iter()
            .filter_map(|column| column.data.as_deref())
            .map(|data| data.byte_size())
            .sum()
    }

    /// Comma-separated column names in block order, for diagnostics.
    pub fn dump_names(&self) -> String {
        self.data.iter().map(|column| column.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    /// A block with the same (name, type) sequence and every column
    /// replaced by a zero-length container of its type.
    pub fn clone_empty(&self) -> Block {
        let mut result = Block::new();
        for column in &self.data {
            result.insert(column.clone_empty());
        }
        result
    }

    /// The column entries in block order. Entry records are copied; the
    /// payloads stay shared.
    pub fn get_columns(&self) -> Vec<Column> {
        self.data.clone()
    }

    /// The (name, type) pairs in block order.
    pub fn get_columns_list(&self) -> Vec<NameAndType> {
        self.data
            .iter()
            .map(|column| NameAndType { name: column.name.clone(), ty: column.ty })
            .collect()
    }
}

/// Whether two blocks can be concatenated or merged: same column count and
/// the same canonical type name at every position. Column names and data
/// are not compared.
pub fn blocks_have_equal_structure(lhs: &Block, rhs: &Block) -> bool {
    if lhs.columns() != rhs.columns() {
        return false;
    }

    lhs.iter().zip(rhs.iter()).all(|(l, r)| l.ty.name() == r.ty.name())
}
