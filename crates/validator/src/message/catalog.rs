//! Per-locale template tables with fallback.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::builtin;
use super::keys;
use super::locale::Locale;
use super::template::Template;
use crate::error::CatalogError;
use crate::value::Value;

const UNKNOWN_FALLBACK: &str = "unknown error";

#[derive(Debug, Clone)]
struct LocaleTable {
    separator: String,
    templates: HashMap<String, Template>,
}

impl LocaleTable {
    fn new(separator: impl Into<String>) -> Self {
        let mut templates = HashMap::new();
        templates.insert(keys::UNKNOWN.to_owned(), Template::new(UNKNOWN_FALLBACK));
        Self {
            separator: separator.into(),
            templates,
        }
    }

    fn from_entries(separator: &str, entries: &[(&str, &str)]) -> Self {
        let mut table = Self::new(separator);
        for (key, raw) in entries {
            table
                .templates
                .insert((*key).to_owned(), Template::parse_marked(raw));
        }
        table
    }

    fn lookup(&self, key: &str) -> &Template {
        self.templates
            .get(key)
            .or_else(|| self.templates.get(keys::UNKNOWN))
            .unwrap_or(&UNKNOWN_TEMPLATE)
    }
}

static UNKNOWN_TEMPLATE: std::sync::LazyLock<Template> =
    std::sync::LazyLock::new(|| Template::new(UNKNOWN_FALLBACK));

// ============================================================================
// MESSAGE CATALOG
// ============================================================================

/// Maps `(locale, template key)` to message templates.
///
/// Lookups resolve the requested locale's table, or the default locale's
/// table when the requested locale has none. A key missing from the resolved
/// table falls through to that table's `_unknown` entry; it never borrows the
/// same key from another locale.
///
/// Tables sit behind a read-write lock: rendering takes shared access and
/// every mutation takes exclusive access, so a merge never interleaves with
/// a concurrent render.
///
/// # Examples
///
/// ```
/// use ruleval_validator::message::{Locale, MessageCatalog};
/// use ruleval_validator::value::Value;
///
/// let catalog = MessageCatalog::builtin();
/// assert_eq!(
///     catalog.render("min", &Locale::EN, "Score", Some(&Value::Int(0))),
///     "Score should be greater than 0",
/// );
/// assert_eq!(catalog.render("min", &Locale::ZH, "评分", Some(&Value::Int(0))), "评分应大于0");
/// ```
#[derive(Debug)]
pub struct MessageCatalog {
    default_locale: Locale,
    tables: RwLock<HashMap<Locale, LocaleTable>>,
}

impl MessageCatalog {
    /// Creates a catalog whose only table is an empty `default_locale` table
    /// (holding just `_unknown`). Words are joined with a single space.
    pub fn new(default_locale: impl Into<Locale>) -> Self {
        let default_locale = default_locale.into();
        let mut tables = HashMap::new();
        tables.insert(default_locale.clone(), LocaleTable::new(" "));
        Self {
            default_locale,
            tables: RwLock::new(tables),
        }
    }

    /// Creates a catalog with the built-in `en` (default) and `zh` tables.
    #[must_use]
    pub fn builtin() -> Self {
        let mut tables = HashMap::new();
        tables.insert(Locale::EN, LocaleTable::from_entries(" ", builtin::EN));
        tables.insert(Locale::ZH, LocaleTable::from_entries("", builtin::ZH));
        Self {
            default_locale: Locale::EN,
            tables: RwLock::new(tables),
        }
    }

    /// Replaces the default locale, creating an empty table for it if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_default_locale(mut self, locale: impl Into<Locale>) -> Self {
        let locale = locale.into();
        self.tables
            .get_mut()
            .entry(locale.clone())
            .or_insert_with(|| LocaleTable::new(" "));
        self.default_locale = locale;
        self
    }

    /// The locale used when a call does not pick one or picks an unknown one.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Whether a table exists for `locale`.
    #[must_use]
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.tables.read().contains_key(locale)
    }

    /// All locales with a table, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.tables.read().keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Returns the template for `key` in `locale`, applying the fallback rules.
    #[must_use]
    pub fn lookup(&self, key: &str, locale: &Locale) -> Template {
        let tables = self.tables.read();
        self.resolve(&tables, locale)
            .map_or_else(|| UNKNOWN_TEMPLATE.clone(), |table| table.lookup(key).clone())
    }

    /// Renders the message for `key` with the given label and limit.
    #[must_use]
    pub fn render(&self, key: &str, locale: &Locale, label: &str, limit: Option<&Value>) -> String {
        let limit = limit.map(Value::to_text);
        let tables = self.tables.read();
        match self.resolve(&tables, locale) {
            Some(table) => table
                .lookup(key)
                .render(label, limit.as_deref(), &table.separator),
            None => UNKNOWN_TEMPLATE.render(label, limit.as_deref(), " "),
        }
    }

    /// Sets one template, creating the locale's table if needed.
    pub fn set_template(&self, locale: impl Into<Locale>, key: impl Into<String>, template: impl Into<Template>) {
        let locale = locale.into();
        let key = key.into();
        tracing::debug!(%locale, key = %key, "set message template");
        self.tables
            .write()
            .entry(locale)
            .or_insert_with(|| LocaleTable::new(" "))
            .templates
            .insert(key, template.into());
    }

    /// Merges many templates into a locale: new keys are added, existing keys
    /// replaced. Returns the number of entries applied.
    pub fn merge<I, K, T>(&self, locale: impl Into<Locale>, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Template>,
    {
        let locale = locale.into();
        let mut tables = self.tables.write();
        let table = tables
            .entry(locale.clone())
            .or_insert_with(|| LocaleTable::new(" "));

        let mut applied = 0;
        for (key, template) in entries {
            table.templates.insert(key.into(), template.into());
            applied += 1;
        }
        tracing::info!(%locale, applied, "merged message templates");
        applied
    }

    /// Sets the text placed between label, phrase and limit for a locale.
    pub fn set_separator(&self, locale: impl Into<Locale>, separator: impl Into<String>) {
        self.tables
            .write()
            .entry(locale.into())
            .or_insert_with(|| LocaleTable::new(" "))
            .separator = separator.into();
    }

    /// The separator of the table `locale` resolves to.
    #[must_use]
    pub fn separator(&self, locale: &Locale) -> String {
        let tables = self.tables.read();
        self.resolve(&tables, locale)
            .map_or_else(|| " ".to_owned(), |table| table.separator.clone())
    }

    /// Merges a JSON object of `key -> template` strings into a locale.
    /// Template strings use the `{{` / `}}` marker notation.
    pub fn load_json(&self, locale: impl Into<Locale>, source: &str) -> Result<usize, CatalogError> {
        let bundle: HashMap<String, Template> = serde_json::from_str(source)?;
        Ok(self.merge(locale, bundle))
    }

    /// Merges a TOML table of `key = "template"` strings into a locale.
    #[cfg(feature = "toml")]
    pub fn load_toml(&self, locale: impl Into<Locale>, source: &str) -> Result<usize, CatalogError> {
        let bundle: HashMap<String, Template> = toml::from_str(source)?;
        Ok(self.merge(locale, bundle))
    }

    fn resolve<'t>(
        &self,
        tables: &'t HashMap<Locale, LocaleTable>,
        locale: &Locale,
    ) -> Option<&'t LocaleTable> {
        tables
            .get(locale)
            .or_else(|| tables.get(&self.default_locale))
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Clone for MessageCatalog {
    fn clone(&self) -> Self {
        Self {
            default_locale: self.default_locale.clone(),
            tables: RwLock::new(self.tables.read().clone()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
