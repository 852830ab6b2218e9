//! Record description
//!
//! The engine never inspects host types. A record is described once per
//! validation call as an ordered list of [`FieldDescriptor`]s, built either
//! by hand through [`RecordBuilder`] or by `#[derive(Validate)]`.
//!
//! Nested records and sequences of nested records are flattened depth-first
//! in declaration order. Every described record gets its own [`Scope`] of
//! sibling values, so a cross-field rule on a nested field only sees the
//! fields of that nested record.

use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::message::Locale;
use crate::value::{IntoValue, Value, ValueKind};

/// Sibling values of one described record, in declaration order.
///
/// Holds every field of the record, including fields without rules.
pub type Scope = IndexMap<String, Value>;

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// One field to validate: its value, rule text and presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    name: String,
    path: String,
    label: Option<String>,
    labels: SmallVec<[(Locale, String); 2]>,
    value: Value,
    kind: ValueKind,
    rules: String,
    message: Option<String>,
    scope: usize,
}

impl FieldDescriptor {
    /// Field name as declared on the record. Used for sibling lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dotted path from the root record, e.g. `address.city` or `items[1].qty`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The base label, if one was given.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label for a locale: the locale-specific label, else the base label,
    /// else the field name.
    #[must_use]
    pub fn label_for(&self, locale: &Locale) -> &str {
        self.labels
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, label)| label.as_str())
            .or(self.label.as_deref())
            .unwrap_or(&self.name)
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Declared kind. For optional fields this is the kind of the inner type.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Raw rule text.
    #[must_use]
    pub fn rules(&self) -> &str {
        &self.rules
    }

    /// Message that replaces the first failure of this field.
    #[must_use]
    pub fn override_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Index of the record scope this field belongs to.
    #[must_use]
    pub fn scope(&self) -> usize {
        self.scope
    }
}

// ============================================================================
// FIELD
// ============================================================================

/// Builder for one field, handed to [`RecordBuilder::field`].
///
/// # Examples
///
/// ```
/// use ruleval_validator::message::Locale;
/// use ruleval_validator::record::Field;
///
/// let score = Field::new("score", -5)
///     .rules("min:0")
///     .label("Score")
///     .label_in(Locale::ZH, "评分");
/// ```
#[derive(Debug, Clone)]
#[must_use = "a field does nothing until added to a RecordBuilder"]
pub struct Field {
    name: String,
    label: Option<String>,
    labels: SmallVec<[(Locale, String); 2]>,
    value: Value,
    kind: ValueKind,
    rules: String,
    message: Option<String>,
}

impl Field {
    /// Creates a field whose kind is taken from the value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        let kind = value.kind();
        Self::with_kind(name, value, kind)
    }

    /// Creates a field from a borrowed host value, keeping the declared kind
    /// of `T` even when the value is absent.
    pub fn of<T: IntoValue>(name: impl Into<String>, value: &T) -> Self {
        Self::with_kind(name, value.to_value(), T::kind())
    }

    /// Creates a field with an explicit declared kind.
    pub fn with_kind(name: impl Into<String>, value: Value, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            labels: SmallVec::new(),
            value,
            kind,
            rules: String::new(),
            message: None,
        }
    }

    /// Sets the rule text.
    pub fn rules(mut self, rules: impl Into<String>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Sets the base label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the label for one locale.
    pub fn label_in(mut self, locale: impl Into<Locale>, label: impl Into<String>) -> Self {
        let locale = locale.into();
        let label = label.into();
        match self.labels.iter_mut().find(|(l, _)| *l == locale) {
            Some((_, existing)) => *existing = label,
            None => self.labels.push((locale, label)),
        }
        self
    }

    /// Sets the override message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// Outcome of a record-level check, kept for rendering at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// Path of the record that produced it; empty for the root.
    pub path: String,
    /// Error text, reported verbatim.
    pub message: String,
}

/// A fully described record, ready for evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<FieldDescriptor>,
    scopes: Vec<Scope>,
    failures: Vec<RecordFailure>,
}

impl Record {
    /// Starts describing a record.
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder::new()
    }

    /// Describes a value that implements [`Validate`].
    #[must_use]
    pub fn of<T: Validate + ?Sized>(value: &T) -> Self {
        let mut builder = RecordBuilder::new();
        value.describe(&mut builder);
        builder.build()
    }

    /// Fields that carry rules, flattened in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Sibling scope of a field.
    #[must_use]
    pub fn scope_of(&self, field: &FieldDescriptor) -> Option<&Scope> {
        self.scopes.get(field.scope)
    }

    /// All scopes; index 0 is the root record.
    #[must_use]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Record-level check failures, in description order.
    #[must_use]
    pub fn failures(&self) -> &[RecordFailure] {
        &self.failures
    }
}

// ============================================================================
// RECORD BUILDER
// ============================================================================

/// Incrementally describes a record.
///
/// # Examples
///
/// ```
/// use ruleval_validator::record::{Field, Record};
///
/// let mut builder = Record::builder();
/// builder
///     .field(Field::new("password", "secret").rules("required"))
///     .field(Field::new("repeat", "secret").rules("equal:password"))
///     .nested("address", |address| {
///         address.field(Field::new("city", "").rules("required"));
///     });
/// let record = builder.build();
///
/// assert_eq!(record.fields().len(), 3);
/// assert_eq!(record.fields()[2].path(), "address.city");
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    fields: Vec<FieldDescriptor>,
    scopes: Vec<Scope>,
    failures: Vec<RecordFailure>,
    current: usize,
    prefix: String,
}

impl RecordBuilder {
    /// Creates a builder positioned on the root record.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            scopes: vec![Scope::new()],
            failures: Vec::new(),
            current: 0,
            prefix: String::new(),
        }
    }

    /// Adds a field to the current record.
    ///
    /// The value always joins the current scope; the field is evaluated only
    /// when it has rule text.
    pub fn field(&mut self, field: Field) -> &mut Self {
        let Field {
            name,
            label,
            labels,
            value,
            kind,
            rules,
            message,
        } = field;

        if let Some(scope) = self.scopes.get_mut(self.current) {
            scope.insert(name.clone(), value.clone());
        }
        if rules.is_empty() {
            return self;
        }

        let path = format!("{}{name}", self.prefix);
        self.fields.push(FieldDescriptor {
            name,
            path,
            label,
            labels,
            value,
            kind,
            rules,
            message,
            scope: self.current,
        });
        self
    }

    /// Describes a nested record under `name` with its own scope.
    pub fn nested(&mut self, name: &str, describe: impl FnOnce(&mut Self)) -> &mut Self {
        let segment = format!("{}{name}", self.prefix);
        self.enter(segment, describe)
    }

    /// Describes a nested record from a value implementing [`Validate`].
    pub fn nested_record<T: Validate + ?Sized>(&mut self, name: &str, value: &T) -> &mut Self {
        self.nested(name, |builder| value.describe(builder))
    }

    /// Describes every element of a sequence of nested records, each with
    /// its own scope and an indexed path (`items[0]`, `items[1]`, ...).
    pub fn each<'v, T, I>(&mut self, name: &str, items: I) -> &mut Self
    where
        T: Validate + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        for (index, item) in items.into_iter().enumerate() {
            let segment = format!("{}{name}[{index}]", self.prefix);
            self.enter(segment, |builder| item.describe(builder));
        }
        self
    }

    /// Runs a record-level check against the current record's scope.
    ///
    /// An `Err` is reported after the field errors, verbatim.
    pub fn check<F, E>(&mut self, check: F) -> &mut Self
    where
        F: FnOnce(&Scope) -> Result<(), E>,
        E: fmt::Display,
    {
        let outcome = match self.scopes.get(self.current) {
            Some(scope) => check(scope),
            None => check(&Scope::new()),
        };
        if let Err(error) = outcome {
            self.failures.push(RecordFailure {
                path: self.prefix.trim_end_matches('.').to_owned(),
                message: error.to_string(),
            });
        }
        self
    }

    /// Finishes the description.
    #[must_use]
    pub fn build(&mut self) -> Record {
        Record {
            fields: std::mem::take(&mut self.fields),
            scopes: std::mem::replace(&mut self.scopes, vec![Scope::new()]),
            failures: std::mem::take(&mut self.failures),
        }
    }

    fn enter(&mut self, path: String, describe: impl FnOnce(&mut Self)) -> &mut Self {
        self.scopes.push(Scope::new());
        let outer_scope = std::mem::replace(&mut self.current, self.scopes.len() - 1);
        let outer_prefix = std::mem::replace(&mut self.prefix, format!("{path}."));

        describe(self);

        self.current = outer_scope;
        self.prefix = outer_prefix;
        self
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// VALIDATE
// ============================================================================

/// A host type that can describe itself as a record.
///
/// Usually derived with `#[derive(Validate)]`; implement it by hand when the
/// description needs logic the attributes cannot express.
///
/// ```
/// use ruleval_validator::record::{Field, RecordBuilder, Validate};
///
/// struct Login {
///     user: String,
/// }
///
/// impl Validate for Login {
///     fn describe(&self, record: &mut RecordBuilder) {
///         record.field(Field::of("user", &self.user).rules("required;username"));
///     }
/// }
/// ```
pub trait Validate {
    /// Adds this value's fields to `record`.
    fn describe(&self, record: &mut RecordBuilder);
}

impl<T: Validate + ?Sized> Validate for &T {
    fn describe(&self, record: &mut RecordBuilder) {
        (**self).describe(record);
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn describe(&self, record: &mut RecordBuilder) {
        (**self).describe(record);
    }
}

impl<T: Validate> Validate for Option<T> {
    fn describe(&self, record: &mut RecordBuilder) {
        if let Some(inner) = self {
            inner.describe(record);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
