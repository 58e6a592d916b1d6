//! Formatter catalog

use super::{Category, ComponentSpec};

/// Registered formatters
pub static FORMATTERS: &[ComponentSpec] = &[
    ComponentSpec {
        category: Category::Formatters,
        namespace: "formatters.other",
        ident: "NullFormatter",
        name: "Text only",
        aliases: &["text", "null"],
        filenames: &["*.txt"],
        mimetypes: &["text/plain"],
    },
    ComponentSpec {
        category: Category::Formatters,
        namespace: "formatters.latex",
        ident: "LatexFormatter",
        name: "LaTeX",
        aliases: &["latex", "tex"],
        filenames: &["*.tex"],
        mimetypes: &["application/x-latex"],
    },
    ComponentSpec {
        category: Category::Formatters,
        namespace: "formatters.html",
        ident: "HtmlFormatter",
        name: "HTML",
        aliases: &["html"],
        filenames: &["*.html", "*.htm"],
        mimetypes: &["text/html"],
    },
    ComponentSpec {
        category: Category::Formatters,
        namespace: "formatters.terminal",
        ident: "TerminalFormatter",
        name: "Terminal",
        aliases: &["terminal", "console"],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Formatters,
        namespace: "formatters.svg",
        ident: "SvgFormatter",
        name: "SVG",
        aliases: &["svg"],
        filenames: &["*.svg"],
        mimetypes: &["image/svg+xml"],
    },
    ComponentSpec {
        category: Category::Formatters,
        namespace: "formatters.rtf",
        ident: "RtfFormatter",
        name: "RTF",
        aliases: &["rtf"],
        filenames: &["*.rtf"],
        mimetypes: &["application/rtf"],
    },
];
