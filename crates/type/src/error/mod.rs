// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

pub use diagnostic::{DefaultRenderer, Diagnostic, DiagnosticColumn};

pub mod diagnostic;

/// An error carrying a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let out = DefaultRenderer::render_string(&self.0);
        f.write_str(out.as_str())
    }
}

impl Error {
    pub fn diagnostic(self) -> Diagnostic {
        self.0
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! err {
    ($diagnostic:expr) => {
        Err($crate::Error($diagnostic))
    };
}

#[macro_export]
macro_rules! return_error {
    ($diagnostic:expr) => {
        return Err($crate::Error($diagnostic))
    };
}
