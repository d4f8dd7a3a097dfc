// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::Column;
use basalt_type::diagnostic::block::{column_not_found, position_out_of_bound};
use basalt_type::{Result, err, return_error};
use std::collections::HashMap;
use std::ops::Deref;

mod structure;

pub use structure::blocks_have_equal_structure;

/// An ordered collection of named, typed columns: one fragment of a table
/// travelling through the query pipeline.
///
/// Columns are addressable by ordinal position and by name. The vector
/// order is the column order; the name index maps each name to the ordinal
/// of a column carrying it and is kept in step with every structural
/// mutation.
///
/// Duplicate names are permitted: the name index always addresses the most
/// recently inserted column with a given name, so an older duplicate stays
/// in the block but is only reachable by position. [`Block::insert_unique`]
/// is the one path that refuses duplicates, and only at insertion time.
///
/// Cloning a block copies the column entries and the name index; the column
/// payloads behind the entries are shared, not duplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    data: Vec<Column>,
    index_by_name: HashMap<String, usize>,
}

impl Deref for Block {
    type Target = [Column];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Vec<Column>) -> Self {
        let mut block = Self::new();
        for column in columns {
            block.insert(column);
        }
        block
    }

    /// Appends a column. The name index is pointed at the new column,
    /// superseding any previous column with the same name.
    pub fn insert(&mut self, column: Column) {
        self.index_by_name.insert(column.name.clone(), self.data.len());
        self.data.push(column);
    }

    /// Splices a column in before `position`, shifting later columns up;
    /// `position == columns()` appends.
    pub fn insert_at(&mut self, position: usize, column: Column) -> Result<()> {
        if position > self.data.len() {
            return_error!(position_out_of_bound(
                position,
                Some(self.data.len()),
                &self.dump_names()
            ));
        }

        if position == self.data.len() {
            self.insert(column);
            return Ok(());
        }

        for ordinal in self.index_by_name.values_mut() {
            if *ordinal >= position {
                *ordinal += 1;
            }
        }
        self.index_by_name.insert(column.name.clone(), position);
        self.data.insert(position, column);
        Ok(())
    }

    /// Appends only if the name index has no column with this name;
    /// otherwise a no-op. Does not deduplicate retroactively.
    pub fn insert_unique(&mut self, column: Column) {
        if !self.index_by_name.contains_key(&column.name) {
            self.insert(column);
        }
    }

    /// Removes the column at `position`, shifting later columns down.
    ///
    /// The name mapping is dropped only if it addresses exactly this
    /// column; under duplicate names it may address a more recent one,
    /// which survives untouched.
    pub fn erase(&mut self, position: usize) -> Result<()> {
        if position >= self.data.len() {
            return_error!(position_out_of_bound(
                position,
                self.data.len().checked_sub(1),
                &self.dump_names()
            ));
        }

        let column = self.data.remove(position);
        if self.index_by_name.get(&column.name).copied() == Some(position) {
            self.index_by_name.remove(&column.name);
        }
        for ordinal in self.index_by_name.values_mut() {
            if *ordinal > position {
                *ordinal -= 1;
            }
        }
        Ok(())
    }

    /// Removes the column the name index addresses for `name`.
    pub fn erase_by_name(&mut self, name: &str) -> Result<()> {
        let Some(position) = self.index_by_name.remove(name) else {
            return_error!(column_not_found(name, &self.dump_names()));
        };

        self.data.remove(position);
        for ordinal in self.index_by_name.values_mut() {
            if *ordinal > position {
                *ordinal -= 1;
            }
        }
        Ok(())
    }

    pub fn get_by_position(&self, position: usize) -> Result<&Column> {
        if position >= self.data.len() {
            return_error!(position_out_of_bound(
                position,
                self.data.len().checked_sub(1),
                &self.dump_names()
            ));
        }
        Ok(&self.data[position])
    }

    pub fn get_by_position_mut(&mut self, position: usize) -> Result<&mut Column> {
        if position >= self.data.len() {
            return_error!(position_out_of_bound(
                position,
                self.data.len().checked_sub(1),
                &self.dump_names()
            ));
        }
        Ok(&mut self.data[position])
    }

    pub fn get_by_name(&self, name: &str) -> Result<&Column> {
        match self.index_by_name.get(name) {
            Some(&position) => Ok(&self.data[position]),
            None => err!(column_not_found(name, &self.dump_names())),
        }
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> Result<&mut Column> {
        match self.index_by_name.get(name).copied() {
            Some(position) => Ok(&mut self.data[position]),
            None => err!(column_not_found(name, &self.dump_names())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    /// The ordinal of the column the name index addresses for `name`.
    pub fn get_position_by_name(&self, name: &str) -> Result<usize> {
        match self.index_by_name.get(name) {
            Some(&position) => Ok(position),
            None => err!(column_not_found(name, &self.dump_names())),
        }
    }
}
