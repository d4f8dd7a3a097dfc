// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::Type;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub mod block;
mod render;

pub use render::DefaultRenderer;

/// A structured description of a failure, carried by every [`crate::Error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub statement: Option<String>,
    pub message: String,
    pub column: Option<DiagnosticColumn>,

    pub label: Option<String>,
    pub help: Option<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
    pub name: String,
    pub ty: Type,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_code() {
        let diagnostic = block::column_not_found("id", "");
        assert_eq!(diagnostic.to_string(), "BLOCK_002");
    }

    #[test]
    fn test_serde_round_trip() {
        let diagnostic = block::column_sizes_mismatch("id", 5, "name", 3);
        let json = serde_json::to_string(&diagnostic).unwrap();
        assert_eq!(serde_json::from_str::<Diagnostic>(&json).unwrap(), diagnostic);
    }
}
