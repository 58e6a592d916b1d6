//! Lexer catalog, grouped by owning namespace

use super::{Category, ComponentSpec};

/// Registered lexers
pub static LEXERS: &[ComponentSpec] = &[
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.scripting",
        ident: "PythonLexer",
        name: "Python",
        aliases: &["python", "py"],
        filenames: &["*.py", "*.pyw", "SConstruct", "SConscript"],
        mimetypes: &["text/x-python", "application/x-python"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.scripting",
        ident: "BashLexer",
        name: "Bash",
        aliases: &["bash", "sh", "shell"],
        filenames: &["*.sh", "*.bash", ".bashrc", ".zshrc", "PKGBUILD"],
        mimetypes: &["application/x-sh", "text/x-shellscript"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.scripting",
        ident: "JavascriptLexer",
        name: "JavaScript",
        aliases: &["javascript", "js"],
        filenames: &["*.js", "*.mjs", "*.cjs"],
        mimetypes: &["application/javascript", "text/javascript"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.data",
        ident: "YamlLexer",
        name: "YAML",
        aliases: &["yaml"],
        filenames: &["*.yaml", "*.yml"],
        mimetypes: &["text/x-yaml"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.data",
        ident: "JsonLexer",
        name: "JSON",
        aliases: &["json"],
        filenames: &["*.json", "Pipfile.lock"],
        mimetypes: &["application/json"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.data",
        ident: "TomlLexer",
        name: "TOML",
        aliases: &["toml"],
        filenames: &["*.toml", "Cargo.lock", "Pipfile"],
        mimetypes: &["application/toml"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.data",
        ident: "IniLexer",
        name: "INI",
        aliases: &["ini", "cfg"],
        filenames: &["*.ini", "*.cfg", ".editorconfig"],
        mimetypes: &["text/x-ini"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.make",
        ident: "CMakeLexer",
        name: "CMake",
        aliases: &["cmake"],
        filenames: &["*.cmake", "CMakeLists.txt"],
        mimetypes: &["text/x-cmake"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.make",
        ident: "MakefileLexer",
        name: "Makefile",
        aliases: &["make", "makefile", "mf"],
        // Makefile.* has no literal key; only the slow path can match it.
        filenames: &["Makefile", "makefile", "GNUmakefile", "*.mak", "Makefile.*"],
        mimetypes: &["text/x-makefile"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.systems",
        ident: "CLexer",
        name: "C",
        aliases: &["c"],
        filenames: &["*.c", "*.h"],
        mimetypes: &["text/x-c"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.systems",
        ident: "RustLexer",
        name: "Rust",
        aliases: &["rust", "rs"],
        filenames: &["*.rs", "*.rs.in"],
        mimetypes: &["text/rust", "text/x-rust"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.systems",
        ident: "GoLexer",
        name: "Go",
        aliases: &["go", "golang"],
        filenames: &["*.go"],
        mimetypes: &["text/x-gosrc"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.markup",
        ident: "HtmlLexer",
        name: "HTML",
        aliases: &["html"],
        filenames: &["*.html", "*.htm", "*.xhtml"],
        mimetypes: &["text/html", "application/xhtml+xml"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.markup",
        ident: "MarkdownLexer",
        name: "Markdown",
        aliases: &["markdown", "md"],
        filenames: &["*.md", "*.markdown"],
        mimetypes: &["text/x-markdown"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.text",
        ident: "DiffLexer",
        name: "Diff",
        aliases: &["diff", "udiff"],
        filenames: &["*.diff", "*.patch"],
        mimetypes: &["text/x-diff", "text/x-patch"],
    },
    ComponentSpec {
        category: Category::Lexers,
        namespace: "lexers.database",
        ident: "SqlLexer",
        name: "SQL",
        aliases: &["sql"],
        filenames: &["*.sql"],
        mimetypes: &["text/x-sql"],
    },
];
