// Copyright (c) basaltdb.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::Diagnostic;
use std::fmt::Write;

pub struct DefaultRenderer;

impl DefaultRenderer {
    pub fn render_string(d: &Diagnostic) -> String {
        let mut output = String::new();

        let _ = writeln!(&mut output, "error[{}]: {}", d.code, d.message);

        if let Some(label) = &d.label {
            let _ = writeln!(&mut output, "  = {}", label);
        }

        if let Some(col) = &d.column {
            let _ = writeln!(&mut output, "\nnote: column `{}` is of type `{}`", col.name, col.ty);
        }

        if let Some(help) = &d.help {
            let _ = writeln!(&mut output, "\nhelp: {}", help);
        }

        for note in &d.notes {
            let _ = writeln!(&mut output, "\nnote: {}", note);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;
    use crate::diagnostic::DiagnosticColumn;

    #[test]
    fn test_render_all_sections() {
        let diagnostic = Diagnostic {
            code: "BLOCK_999".to_string(),
            statement: None,
            message: "something went sideways".to_string(),
            column: Some(DiagnosticColumn { name: "id".to_string(), ty: Type::Int8 }),
            label: Some("right here".to_string()),
            help: Some("try the other thing".to_string()),
            notes: vec!["first note".to_string()],
        };

        let out = DefaultRenderer::render_string(&diagnostic);
        assert!(out.contains("error[BLOCK_999]: something went sideways"));
        assert!(out.contains("= right here"));
        assert!(out.contains("note: column `id` is of type `Int8`"));
        assert!(out.contains("help: try the other thing"));
        assert!(out.contains("note: first note"));
    }

    #[test]
    fn test_render_minimal() {
        let diagnostic = Diagnostic {
            code: "BLOCK_000".to_string(),
            statement: None,
            message: "plain".to_string(),
            column: None,
            label: None,
            help: None,
            notes: vec![],
        };

        assert_eq!(DefaultRenderer::render_string(&diagnostic), "error[BLOCK_000]: plain\n");
    }
}
