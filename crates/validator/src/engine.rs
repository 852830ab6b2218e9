//! Validation service
//!
//! [`Validator`] owns the catalog, the checker registry, the rule cache and
//! the configuration. It walks every field of a [`Record`] and every rule of
//! each field, in order, and collects the failures into a [`Report`].

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::ValidatorConfig;
use crate::context::{CheckContext, FieldError};
use crate::message::{Locale, MessageCatalog, Template, keys};
use crate::record::{Record, Validate};
use crate::registry::{Checker, CheckerRegistry};
use crate::rule::RuleCache;
use crate::value::Value;

// ============================================================================
// VALIDATOR
// ============================================================================

#[derive(Debug)]
struct Inner {
    catalog: MessageCatalog,
    registry: CheckerRegistry,
    rules: RuleCache,
    config: ValidatorConfig,
}

/// Evaluates records against their rules.
///
/// Cheap to clone: clones share the catalog, registry and rule cache.
/// Registering a checker or template through any clone is visible to all.
///
/// # Examples
///
/// ```
/// use ruleval_validator::engine::Validator;
/// use ruleval_validator::record::{Field, Record};
///
/// let validator = Validator::default();
///
/// let mut record = Record::builder();
/// record
///     .field(Field::new("name", "").rules("required").label("Name"))
///     .field(Field::new("score", -5).rules("min:0").label("Score"));
/// let report = validator.check(&record.build());
///
/// assert!(!report.is_valid());
/// assert_eq!(report.messages(), vec!["Name must not be empty", "Score should be greater than 0"]);
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    inner: Arc<Inner>,
}

impl Validator {
    /// Creates a validator with the built-in checkers and templates.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Starts building a validator with custom parts.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    /// Validates a record in the configured default locale.
    #[must_use]
    pub fn check(&self, record: &Record) -> Report {
        self.check_in(record, self.inner.config.default_locale.clone())
    }

    /// Validates a record, rendering messages in `locale`.
    #[must_use]
    pub fn check_in(&self, record: &Record, locale: impl Into<Locale>) -> Report {
        let locale = locale.into();
        let Inner {
            catalog,
            registry,
            rules,
            config,
        } = &*self.inner;

        if !catalog.has_locale(&locale) {
            tracing::warn!(%locale, fallback = %catalog.default_locale(), "no table for locale");
        }

        let mut errors = Vec::new();
        for field in record.fields() {
            let Some(scope) = record.scope_of(field) else {
                continue;
            };

            let parsed = rules.get_or_parse(field.rules());
            for rule in parsed.iter() {
                let ctx = CheckContext::new(field, scope, &locale, rule, catalog, config);
                tracing::debug!(field = field.path(), rule = %rule, "dispatching rule");

                let Some(mut error) = registry.dispatch(&rule.checker, &ctx) else {
                    continue;
                };
                if let Some(message) = field.override_message() {
                    error.message = message.to_owned();
                    errors.push(error);
                    break;
                }
                errors.push(error);
            }
        }

        for failure in record.failures() {
            let limit = Value::Str(failure.message.clone());
            errors.push(FieldError {
                field: failure.path.clone(),
                label: String::new(),
                value: Value::Nil,
                message: catalog.render(keys::RECORD, &locale, "", Some(&limit)),
                limit: Some(limit),
                template: keys::RECORD.to_owned(),
            });
        }

        Report { errors }
    }

    /// Describes and validates a value in the default locale.
    #[must_use]
    pub fn check_record<T: Validate + ?Sized>(&self, value: &T) -> Report {
        self.check(&Record::of(value))
    }

    /// Describes and validates a value, rendering messages in `locale`.
    #[must_use]
    pub fn check_record_in<T: Validate + ?Sized>(&self, value: &T, locale: impl Into<Locale>) -> Report {
        self.check_in(&Record::of(value), locale)
    }

    /// Shorthand for `check_record(value).into_result()`.
    pub fn validate<T: Validate + ?Sized>(&self, value: &T) -> Result<(), ValidationErrors> {
        self.check_record(value).into_result()
    }

    /// Registers or replaces a checker.
    pub fn register_checker(&self, name: impl Into<String>, checker: impl Checker + 'static) {
        self.inner.registry.register(name, checker);
    }

    /// Sets one message template.
    pub fn set_template(&self, locale: impl Into<Locale>, key: impl Into<String>, template: impl Into<Template>) {
        self.inner.catalog.set_template(locale, key, template);
    }

    /// Merges message templates into a locale. Returns the number applied.
    pub fn merge_templates<I, K, T>(&self, locale: impl Into<Locale>, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Template>,
    {
        self.inner.catalog.merge(locale, entries)
    }

    /// The message catalog.
    #[must_use]
    pub fn catalog(&self) -> &MessageCatalog {
        &self.inner.catalog
    }

    /// The checker registry.
    #[must_use]
    pub fn registry(&self) -> &CheckerRegistry {
        &self.inner.registry
    }

    /// The parsed-rule cache.
    #[must_use]
    pub fn rule_cache(&self) -> &RuleCache {
        &self.inner.rules
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.inner.config
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Validator`].
///
/// ```
/// use ruleval_validator::config::ValidatorConfig;
/// use ruleval_validator::engine::Validator;
/// use ruleval_validator::message::Locale;
///
/// let validator = Validator::builder()
///     .config(ValidatorConfig::default().with_default_locale(Locale::ZH))
///     .checker("even", |ctx: &ruleval_validator::context::CheckContext<'_>| {
///         matches!(ctx.value(), ruleval_validator::value::Value::Int(n) if n % 2 != 0)
///             .then(|| ctx.violation().finish())
///     })
///     .build();
/// assert!(validator.registry().contains("even"));
/// ```
#[derive(Debug, Default)]
#[must_use = "builder methods must be chained or built"]
pub struct ValidatorBuilder {
    catalog: Option<MessageCatalog>,
    registry: Option<CheckerRegistry>,
    config: ValidatorConfig,
    extra: Vec<(String, Arc<dyn Checker>)>,
}

impl ValidatorBuilder {
    /// Uses `catalog` instead of the built-in one.
    pub fn catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Uses `registry` instead of the built-in one.
    pub fn registry(mut self, registry: CheckerRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Adds a checker on top of the registry.
    pub fn checker(mut self, name: impl Into<String>, checker: impl Checker + 'static) -> Self {
        self.extra.push((name.into(), Arc::new(checker)));
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        let Self {
            catalog,
            registry,
            config,
            extra,
        } = self;

        let catalog = catalog.unwrap_or_else(|| {
            MessageCatalog::builtin().with_default_locale(config.default_locale.clone())
        });
        let registry = registry.unwrap_or_else(CheckerRegistry::with_builtins);
        for (name, checker) in extra {
            registry.register_arc(name, checker);
        }
        let rules = match config.rule_cache_capacity {
            Some(capacity) => RuleCache::with_capacity(capacity),
            None => RuleCache::new(),
        };

        tracing::info!(
            locale = %config.default_locale,
            checkers = registry.len(),
            "validator ready"
        );
        Validator {
            inner: Arc::new(Inner {
                catalog,
                registry,
                rules,
                config,
            }),
        }
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Outcome of one validation call: the failures in field-then-rule order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    errors: Vec<FieldError>,
}

impl Report {
    /// True when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failures, in order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Rendered messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Failures of one field path.
    pub fn for_field<'r>(&'r self, path: &'r str) -> impl Iterator<Item = &'r FieldError> + 'r {
        self.errors.iter().filter(move |e| e.field == path)
    }

    /// Iterates over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when valid, otherwise every failure.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

impl IntoIterator for Report {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'r> IntoIterator for &'r Report {
    type Item = &'r FieldError;
    type IntoIter = std::slice::Iter<'r, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// The failures of an invalid record, as an error value.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(transparent)]
#[error("{}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// The failures, in order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Takes the failures.
    #[must_use]
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// TESTS
// ============================================================================
