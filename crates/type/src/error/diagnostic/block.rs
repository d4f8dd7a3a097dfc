// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::Diagnostic;

/// A positional access or mutation went past the valid range.
/// `max` is the largest position the failing operation would have accepted,
/// `None` when the block has no addressable position at all.
pub fn position_out_of_bound(position: usize, max: Option<usize>, names: &str) -> Diagnostic {
    let message = match max {
        Some(max) => {
            format!("position {} is out of bound in block, max position = {}", position, max)
        }
        None => format!("position {} is out of bound in empty block", position),
    };

    Diagnostic {
        code: "BLOCK_001".to_string(),
        statement: None,
        message,
        column: None,
        label: Some("no column at this position".to_string()),
        help: Some("check the block's column count before positional access".to_string()),
        notes: column_list_notes(names),
    }
}

/// A name-based access or erase addressed a name the block does not know.
pub fn column_not_found(name: &str, names: &str) -> Diagnostic {
    Diagnostic {
        code: "BLOCK_002".to_string(),
        statement: None,
        message: format!("column `{}` not found in block", name),
        column: None,
        label: Some("no column with this name exists in the block".to_string()),
        help: Some("check for typos or ensure the column was inserted".to_string()),
        notes: column_list_notes(names),
    }
}

/// Two populated columns of the same block disagree on their row count.
pub fn column_sizes_mismatch(
    first: &str,
    first_rows: usize,
    column: &str,
    rows: usize,
) -> Diagnostic {
    Diagnostic {
        code: "BLOCK_003".to_string(),
        statement: None,
        message: format!(
            "sizes of columns in block do not match: `{}` has {} rows, `{}` has {} rows",
            first, first_rows, column, rows
        ),
        column: None,
        label: Some("every populated column of a block must have the same row count".to_string()),
        help: Some("fill all columns to the same length before handing the block on".to_string()),
        notes: vec![],
    }
}

fn column_list_notes(names: &str) -> Vec<String> {
    if names.is_empty() {
        vec![]
    } else {
        vec![format!("there are columns: {}", names)]
    }
}
