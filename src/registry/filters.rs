//! Filter catalog
//!
//! All filters share one namespace; like styles they are name-keyed.

use super::{Category, ComponentSpec};

/// Registered filters
pub static FILTERS: &[ComponentSpec] = &[
    ComponentSpec {
        category: Category::Filters,
        namespace: "filters",
        ident: "GobbleFilter",
        name: "gobble",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Filters,
        namespace: "filters",
        ident: "NameHighlightFilter",
        name: "highlight",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Filters,
        namespace: "filters",
        ident: "KeywordCaseFilter",
        name: "keywordcase",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Filters,
        namespace: "filters",
        ident: "CodeTagFilter",
        name: "codetagify",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Filters,
        namespace: "filters",
        ident: "WhitespaceFilter",
        name: "whitespace",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Filters,
        namespace: "filters",
        ident: "TokenMergeFilter",
        name: "tokenmerge",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
];
