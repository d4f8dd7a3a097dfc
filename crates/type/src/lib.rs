// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{DefaultRenderer, Diagnostic, DiagnosticColumn, Error, Result, diagnostic};
pub use value::{Type, Value};

mod error;
mod value;
