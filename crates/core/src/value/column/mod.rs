// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use basalt_type::Type;
use std::sync::Arc;

mod data;

pub use data::ColumnData;

/// One named column slot of a block.
///
/// The payload is shared: cloning an entry clones the handle, never the
/// data. `data` is `None` for a column whose values have not been produced
/// yet; the type is known up front either way.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: Option<Arc<ColumnData>>,
    pub ty: Type,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        let ty = data.get_type();
        Self { name: name.into(), data: Some(Arc::new(data)), ty }
    }

    /// A column slot with a known type and no values yet.
    pub fn unpopulated(name: impl Into<String>, ty: Type) -> Self {
        Self { name: name.into(), data: None, ty }
    }

    /// Same name and type, zero rows.
    pub fn clone_empty(&self) -> Self {
        let data = match &self.data {
            Some(data) => data.clone_empty(),
            None => ColumnData::with_capacity(self.ty, 0),
        };
        Self { name: self.name.clone(), data: Some(Arc::new(data)), ty: self.ty }
    }
}

/// The (name, type) projection of a column, used by structural views.
#[derive(Debug, Clone, PartialEq)]
pub struct NameAndType {
    pub name: String,
    pub ty: Type,
}
