//! Style catalog
//!
//! Styles carry no filename patterns; they are looked up by name only.

use super::{Category, ComponentSpec};

/// Registered styles
pub static STYLES: &[ComponentSpec] = &[
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.default",
        ident: "DefaultStyle",
        name: "default",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.murphy",
        ident: "MurphyStyle",
        name: "murphy",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.monokai",
        ident: "MonokaiStyle",
        name: "monokai",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.emacs",
        ident: "EmacsStyle",
        name: "emacs",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.vim",
        ident: "VimStyle",
        name: "vim",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.friendly",
        ident: "FriendlyStyle",
        name: "friendly",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.native",
        ident: "NativeStyle",
        name: "native",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.solarized",
        ident: "SolarizedDarkStyle",
        name: "solarized-dark",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
    ComponentSpec {
        category: Category::Styles,
        namespace: "styles.solarized",
        ident: "SolarizedLightStyle",
        name: "solarized-light",
        aliases: &[],
        filenames: &[],
        mimetypes: &[],
    },
];
