//! Cache construction - one enumeration pass per category
//!
//! Discovery walks the catalog's enumeration, resolves each declared name
//! back to its spec, and records a locator under every literal key the
//! component claims. Filename-keyed categories get an `exts` table,
//! name-keyed categories a `names` table; formatters get both.

use crate::cache::model::{Cache, CategoryCache, Locator, LookupMapping, EXTS, NAMES};
use crate::error::Error;
use crate::registry::{Category, Registry};
use crate::Result;

/// Build the full cache by discovering every category
pub fn build_cache(registry: &Registry) -> Result<Cache> {
    let mut cache = Cache::new();
    for category in Category::ALL {
        cache.insert_category(category, discover(registry, category)?);
    }
    Ok(cache)
}

/// Enumerate one category into its lookup tables
pub fn discover(registry: &Registry, category: Category) -> Result<CategoryCache> {
    let with_exts = matches!(category, Category::Lexers | Category::Formatters);
    let with_names = !matches!(category, Category::Lexers);

    let mut exts = LookupMapping::new();
    let mut names = LookupMapping::new();
    for info in registry.enumerate(category) {
        let spec = registry
            .find_by_name(category, info.name)
            .map_err(|_| Error::Discovery {
                category,
                name: info.name.to_string(),
            })?;
        let locator = Locator::new(spec.namespace, spec.ident);
        if with_exts {
            add_filename_keys(&mut exts, &locator, info.filenames);
        }
        if with_names {
            add_name_keys(&mut names, &locator, info.name, info.aliases);
        }
    }

    let mut tables = CategoryCache::new();
    if with_exts {
        tables.insert(EXTS.to_string(), exts);
    }
    if with_names {
        tables.insert(NAMES.to_string(), names);
    }
    Ok(tables)
}

/// Record every literal filename key a spec claims
///
/// Later entries overwrite earlier ones on collision; enumeration order
/// decides the winner.
fn add_filename_keys(table: &mut LookupMapping, locator: &Locator, patterns: &[&str]) {
    for pattern in patterns {
        if let Some(key) = literal_key(pattern) {
            table.insert(key, locator.clone());
        }
    }
}

/// Reduce a filename pattern to a literal lookup key, if it has one
///
/// `*.ext` reduces to `.ext`; any other embedded wildcard leaves no literal
/// key and the pattern is only reachable through the slow path.
fn literal_key(pattern: &str) -> Option<String> {
    let literal = match pattern.strip_prefix("*.") {
        Some(ext) => format!(".{}", ext),
        None => pattern.to_string(),
    };
    if literal.contains(['*', '?']) {
        None
    } else {
        Some(literal)
    }
}

/// Record the declared name and every alias as short-name keys
fn add_name_keys(table: &mut LookupMapping, locator: &Locator, name: &str, aliases: &[&str]) {
    table.insert(name.to_string(), locator.clone());
    for alias in aliases {
        table.insert((*alias).to_string(), locator.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_key_strips_extension_wildcard() {
        assert_eq!(literal_key("*.py"), Some(".py".to_string()));
        assert_eq!(literal_key("*.rs.in"), Some(".rs.in".to_string()));
    }

    #[test]
    fn test_literal_key_keeps_exact_filenames() {
        assert_eq!(literal_key("CMakeLists.txt"), Some("CMakeLists.txt".to_string()));
        assert_eq!(literal_key("Makefile"), Some("Makefile".to_string()));
    }

    #[test]
    fn test_literal_key_rejects_embedded_wildcards() {
        assert_eq!(literal_key("Makefile.*"), None);
        assert_eq!(literal_key("*.cmake*"), None);
        assert_eq!(literal_key("config?.ini"), None);
    }

    #[test]
    fn test_add_filename_keys_last_write_wins() {
        let mut table = LookupMapping::new();
        let first = Locator::new("lexers.one", "FirstLexer");
        let second = Locator::new("lexers.two", "SecondLexer");

        add_filename_keys(&mut table, &first, &["*.x", "exact.x"]);
        add_filename_keys(&mut table, &second, &["*.x"]);

        assert_eq!(table.get(".x"), Some(&second));
        assert_eq!(table.get("exact.x"), Some(&first));
    }

    #[test]
    fn test_add_name_keys_covers_aliases() {
        let mut table = LookupMapping::new();
        let locator = Locator::new("formatters.latex", "LatexFormatter");

        add_name_keys(&mut table, &locator, "LaTeX", &["latex", "tex"]);

        assert_eq!(table.get("LaTeX"), Some(&locator));
        assert_eq!(table.get("latex"), Some(&locator));
        assert_eq!(table.get("tex"), Some(&locator));
    }

    #[test]
    fn test_discover_lexers_concrete_keys() {
        let registry = Registry::new();
        let tables = discover(&registry, Category::Lexers).unwrap();
        let exts = tables.get(EXTS).unwrap();

        assert_eq!(
            exts.get(".yaml"),
            Some(&Locator::new("lexers.data", "YamlLexer"))
        );
        assert_eq!(
            exts.get("CMakeLists.txt"),
            Some(&Locator::new("lexers.make", "CMakeLexer"))
        );
        assert_eq!(
            exts.get(".py"),
            Some(&Locator::new("lexers.scripting", "PythonLexer"))
        );
        // Embedded wildcards never become keys.
        assert!(!exts.keys().any(|key| key.contains('*')));
        // Lexers are keyed by filename only.
        assert!(tables.get(NAMES).is_none());
    }

    #[test]
    fn test_discover_formatters_has_both_tables() {
        let registry = Registry::new();
        let tables = discover(&registry, Category::Formatters).unwrap();

        let exts = tables.get(EXTS).unwrap();
        assert_eq!(
            exts.get(".txt"),
            Some(&Locator::new("formatters.other", "NullFormatter"))
        );
        assert_eq!(
            exts.get(".tex"),
            Some(&Locator::new("formatters.latex", "LatexFormatter"))
        );

        let names = tables.get(NAMES).unwrap();
        assert_eq!(
            names.get("text"),
            Some(&Locator::new("formatters.other", "NullFormatter"))
        );
        assert_eq!(names.get("tex"), names.get("latex"));
    }

    #[test]
    fn test_discover_styles_and_filters_by_name() {
        let registry = Registry::new();

        let styles = discover(&registry, Category::Styles).unwrap();
        let names = styles.get(NAMES).unwrap();
        assert_eq!(
            names.get("murphy"),
            Some(&Locator::new("styles.murphy", "MurphyStyle"))
        );
        assert_eq!(
            names.get("monokai"),
            Some(&Locator::new("styles.monokai", "MonokaiStyle"))
        );
        assert!(styles.get(EXTS).is_none());

        let filters = discover(&registry, Category::Filters).unwrap();
        let names = filters.get(NAMES).unwrap();
        assert_eq!(
            names.get("gobble"),
            Some(&Locator::new("filters", "GobbleFilter"))
        );
        assert_eq!(
            names.get("highlight"),
            Some(&Locator::new("filters", "NameHighlightFilter"))
        );
    }

    #[test]
    fn test_build_cache_covers_every_category() {
        let registry = Registry::new();
        let cache = build_cache(&registry).unwrap();

        assert_eq!(cache.len(), Category::ALL.len());
        assert_eq!(registry.enumeration_count(), Category::ALL.len());
        assert!(cache.key_count() > 0);
    }
}
