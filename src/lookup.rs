//! Lookup - load-or-build plus per-category resolution
//!
//! `LookupCache` is created once at program start and passed wherever
//! lookups happen. A hit resolves through the registry's factory index and
//! never enumerates the catalog. A miss falls back to the catalog scan,
//! repairs the in-memory table with the concrete resolved component, and
//! re-persists the whole cache so future processes benefit.

use std::path::{Path, PathBuf};

use crate::cache::build::build_cache;
use crate::cache::model::{Cache, Locator, EXTS, NAMES};
use crate::cache::store;
use crate::core::paths::{basename, cache_file, extension_of};
use crate::registry::{Category, Component, Options, Registry};
use crate::Result;

/// In-memory cache handle bound to its registry and on-disk location
#[derive(Debug)]
pub struct LookupCache {
    registry: Registry,
    cache: Cache,
    path: PathBuf,
}

impl LookupCache {
    /// Load the persisted cache, or build and persist it on first run
    ///
    /// A present-but-unreadable file is a hard error: corruption surfaces
    /// instead of being silently rebuilt over.
    pub fn load_or_build(registry: Registry) -> Result<Self> {
        Self::load_or_build_at(registry, cache_file())
    }

    /// Same as [`LookupCache::load_or_build`], against an explicit cache file
    pub fn load_or_build_at(registry: Registry, path: PathBuf) -> Result<Self> {
        let cache = if path.exists() {
            store::read_cache(&path)?
        } else {
            eprintln!("hicache: building lookup cache at {}", path.display());
            let cache = build_cache(&registry)?;
            store::write_cache(&cache, &path)?;
            cache
        };
        Ok(Self {
            registry,
            cache,
            path,
        })
    }

    /// Discover everything again and overwrite the cache file
    pub fn rebuild(&mut self) -> Result<()> {
        self.cache = build_cache(&self.registry)?;
        store::write_cache(&self.cache, &self.path)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lexer for a filename, by exact basename first and extension second
    pub fn lexer_for_filename(
        &mut self,
        filename: &str,
        sample: &str,
        options: Options,
    ) -> Result<Component> {
        self.for_filename(Category::Lexers, filename, sample, options)
    }

    /// Formatter for a filename
    pub fn formatter_for_filename(&mut self, filename: &str, options: Options) -> Result<Component> {
        self.for_filename(Category::Formatters, filename, "", options)
    }

    /// Formatter by short name
    pub fn formatter_by_name(&mut self, name: &str, options: Options) -> Result<Component> {
        self.by_name(Category::Formatters, name, options)
    }

    /// Style by short name
    pub fn style_by_name(&mut self, name: &str) -> Result<Component> {
        self.by_name(Category::Styles, name, Options::new())
    }

    /// Every registered style name
    ///
    /// Enumeration proxies straight to the catalog; there is no per-key
    /// benefit to caching a full listing.
    pub fn style_names(&self) -> Vec<String> {
        self.registry
            .enumerate(Category::Styles)
            .iter()
            .map(|info| info.name.to_string())
            .collect()
    }

    /// Filter by short name
    pub fn filter_by_name(&mut self, name: &str, options: Options) -> Result<Component> {
        self.by_name(Category::Filters, name, options)
    }

    /// Whether a filename key would hit the fast path right now
    pub fn contains_filename(&self, category: Category, filename: &str) -> bool {
        let name = basename(filename);
        self.cache
            .table(category, EXTS)
            .map(|table| {
                table.contains_key(name)
                    || extension_of(name).is_some_and(|ext| table.contains_key(ext))
            })
            .unwrap_or(false)
    }

    /// Whether a short name would hit the fast path right now
    pub fn contains_name(&self, category: Category, name: &str) -> bool {
        self.cache
            .table(category, NAMES)
            .map(|table| table.contains_key(name))
            .unwrap_or(false)
    }

    fn for_filename(
        &mut self,
        category: Category,
        filename: &str,
        sample: &str,
        options: Options,
    ) -> Result<Component> {
        let name = basename(filename).to_string();
        let hit = self.cache.table(category, EXTS).and_then(|table| {
            table
                .get(name.as_str())
                .or_else(|| extension_of(&name).and_then(|ext| table.get(ext)))
                .cloned()
        });
        match hit {
            Some(locator) => {
                let spec = self.registry.resolve(&locator)?;
                Ok(self.registry.instantiate(spec, options))
            }
            None => {
                let spec = self.registry.guess_for_filename(category, filename, sample)?;
                let component = self.registry.instantiate(spec, options);
                self.remember(category, EXTS, name, component.locator())?;
                Ok(component)
            }
        }
    }

    fn by_name(&mut self, category: Category, name: &str, options: Options) -> Result<Component> {
        let hit = self
            .cache
            .table(category, NAMES)
            .and_then(|table| table.get(name).cloned());
        match hit {
            Some(locator) => {
                let spec = self.registry.resolve(&locator)?;
                Ok(self.registry.instantiate(spec, options))
            }
            None => {
                let spec = self.registry.find_by_alias(category, name)?;
                let component = self.registry.instantiate(spec, options);
                self.remember(category, NAMES, name.to_string(), component.locator())?;
                Ok(component)
            }
        }
    }

    /// Record a slow-path result and re-persist the whole cache
    fn remember(
        &mut self,
        category: Category,
        table: &str,
        key: String,
        locator: Locator,
    ) -> Result<()> {
        self.cache.table_mut(category, table).insert(key, locator);
        store::write_cache(&self.cache, &self.path)
    }
}
