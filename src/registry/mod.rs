//! Component catalog - the pluggable components fronted by the cache
//!
//! The catalog is the source of truth for which components exist. Discovery
//! enumerates it once per process; the slow path scans it again on a cache
//! miss. A `Registry` carries a factory index from (namespace, ident) to the
//! owning spec, built once at startup, so a persisted locator resolves
//! without another enumeration.

pub mod filters;
pub mod formatters;
pub mod lexers;
pub mod styles;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::cache::model::Locator;
use crate::core::paths::basename;

/// Component categories sharing a lookup protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Lexers,
    Formatters,
    Styles,
    Filters,
}

impl Category {
    /// All categories, in discovery order
    pub const ALL: [Category; 4] = [
        Category::Lexers,
        Category::Formatters,
        Category::Styles,
        Category::Filters,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Lexers => "lexers",
            Category::Formatters => "formatters",
            Category::Styles => "styles",
            Category::Filters => "filters",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexers" | "lexer" => Ok(Category::Lexers),
            "formatters" | "formatter" => Ok(Category::Formatters),
            "styles" | "style" => Ok(Category::Styles),
            "filters" | "filter" => Ok(Category::Filters),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// A registered component: identity plus the keys it claims
#[derive(Debug)]
pub struct ComponentSpec {
    /// Category the spec belongs to
    pub category: Category,

    /// Owning namespace within the catalog
    pub namespace: &'static str,

    /// Identifier within the namespace
    pub ident: &'static str,

    /// Declared long name, unique within the category
    pub name: &'static str,

    /// Short names accepted for by-name lookup
    pub aliases: &'static [&'static str],

    /// Filename patterns, possibly containing wildcards
    pub filenames: &'static [&'static str],

    /// Associated MIME types
    pub mimetypes: &'static [&'static str],
}

/// Enumeration view of a spec: what a component declares, minus its identity
#[derive(Debug, Clone, Copy)]
pub struct ComponentInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

impl ComponentInfo {
    fn of(spec: &'static ComponentSpec) -> Self {
        Self {
            name: spec.name,
            aliases: spec.aliases,
            filenames: spec.filenames,
            mimetypes: spec.mimetypes,
        }
    }
}

/// Constructor arguments forwarded to a component
pub type Options = BTreeMap<String, serde_json::Value>;

/// A freshly constructed component instance
#[derive(Debug, Clone)]
pub struct Component {
    spec: &'static ComponentSpec,
    options: Options,
}

impl Component {
    pub fn category(&self) -> Category {
        self.spec.category
    }

    pub fn namespace(&self) -> &'static str {
        self.spec.namespace
    }

    pub fn ident(&self) -> &'static str {
        self.spec.ident
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Locator recording where this component came from
    pub fn locator(&self) -> Locator {
        Locator::new(self.spec.namespace, self.spec.ident)
    }
}

/// Errors raised by catalog resolution
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No spec claims the requested key.
    #[error("no {category} component matches {key:?}")]
    NoMatch { category: Category, key: String },

    /// A locator points at a namespace and ident the catalog does not carry.
    #[error("no component registered as [{namespace}, {ident}]")]
    NoSuchComponent { namespace: String, ident: String },
}

/// Static spec table backing a category
fn catalog(category: Category) -> &'static [ComponentSpec] {
    match category {
        Category::Lexers => lexers::LEXERS,
        Category::Formatters => formatters::FORMATTERS,
        Category::Styles => styles::STYLES,
        Category::Filters => filters::FILTERS,
    }
}

/// Compiled wildcard patterns across every catalog, built on first use
static WILDCARDS: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for category in Category::ALL {
        for spec in catalog(category) {
            for pattern in spec.filenames {
                if pattern.contains(['*', '?']) {
                    map.insert(*pattern, glob_regex(pattern));
                }
            }
        }
    }
    map
});

/// Translate a wildcard filename pattern into an anchored regex
fn glob_regex(pattern: &str) -> Regex {
    let mut source = String::from("^");
    for ch in pattern.chars() {
        match ch {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(&ch.to_string())),
        }
    }
    source.push('$');
    Regex::new(&source).expect("Invalid wildcard pattern regex")
}

/// Match a filename against a single catalog pattern
fn pattern_matches(pattern: &str, filename: &str) -> bool {
    match WILDCARDS.get(pattern) {
        Some(re) => re.is_match(filename),
        None => pattern == filename,
    }
}

/// Catalog facade with a startup-built factory index
///
/// The index replaces resolve-by-name-at-lookup-time: every (namespace,
/// ident) pair a locator can legally hold maps to its spec before the first
/// lookup happens.
#[derive(Debug)]
pub struct Registry {
    index: HashMap<&'static str, HashMap<&'static str, &'static ComponentSpec>>,
    enumerations: AtomicUsize,
}

impl Registry {
    /// Build a registry, indexing every spec by namespace and ident
    pub fn new() -> Self {
        let mut index: HashMap<&'static str, HashMap<&'static str, &'static ComponentSpec>> =
            HashMap::new();
        for category in Category::ALL {
            for spec in catalog(category) {
                index
                    .entry(spec.namespace)
                    .or_default()
                    .insert(spec.ident, spec);
            }
        }
        Self {
            index,
            enumerations: AtomicUsize::new(0),
        }
    }

    /// Enumerate every component registered in a category
    ///
    /// This is the expensive full pass that discovery amortizes; the call
    /// count is observable for exactly that reason.
    pub fn enumerate(&self, category: Category) -> Vec<ComponentInfo> {
        self.enumerations.fetch_add(1, Ordering::Relaxed);
        catalog(category).iter().map(ComponentInfo::of).collect()
    }

    /// Number of enumeration passes performed so far
    pub fn enumeration_count(&self) -> usize {
        self.enumerations.load(Ordering::Relaxed)
    }

    /// Resolve a declared name to its spec
    pub fn find_by_name(
        &self,
        category: Category,
        name: &str,
    ) -> Result<&'static ComponentSpec, RegistryError> {
        catalog(category)
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| RegistryError::NoMatch {
                category,
                key: name.to_string(),
            })
    }

    /// Slow path: match a filename against every pattern in the category
    ///
    /// The sample content is accepted for parity with content-sniffing
    /// resolvers; the built-in catalog decides on filename patterns alone.
    /// The first matching spec in catalog order wins.
    pub fn guess_for_filename(
        &self,
        category: Category,
        filename: &str,
        _sample: &str,
    ) -> Result<&'static ComponentSpec, RegistryError> {
        let name = basename(filename);
        catalog(category)
            .iter()
            .find(|spec| {
                spec.filenames
                    .iter()
                    .any(|pattern| pattern_matches(pattern, name))
            })
            .ok_or_else(|| RegistryError::NoMatch {
                category,
                key: filename.to_string(),
            })
    }

    /// Slow path: match a short name against declared names and aliases
    pub fn find_by_alias(
        &self,
        category: Category,
        name: &str,
    ) -> Result<&'static ComponentSpec, RegistryError> {
        catalog(category)
            .iter()
            .find(|spec| spec.name == name || spec.aliases.contains(&name))
            .ok_or_else(|| RegistryError::NoMatch {
                category,
                key: name.to_string(),
            })
    }

    /// Resolve a persisted locator through the factory index
    pub fn resolve(&self, locator: &Locator) -> Result<&'static ComponentSpec, RegistryError> {
        self.index
            .get(locator.namespace())
            .and_then(|specs| specs.get(locator.ident()))
            .copied()
            .ok_or_else(|| RegistryError::NoSuchComponent {
                namespace: locator.namespace().to_string(),
                ident: locator.ident().to_string(),
            })
    }

    /// Construct a component from its spec with the supplied options
    ///
    /// Components are constructed fresh on every lookup; nothing is pooled.
    pub fn instantiate(&self, spec: &'static ComponentSpec, options: Options) -> Component {
        Component { spec, options }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
