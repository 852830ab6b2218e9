//! Evaluation context and error construction
//!
//! A [`CheckContext`] is everything one checker invocation may look at: the
//! field, its resolved label, the current value, the sibling scope and the
//! rule being applied. Checkers report failures through [`Violation`], which
//! renders the message as soon as it is created and again after every
//! change, so the text is always observable.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ValidatorConfig;
use crate::message::{Locale, MessageCatalog, keys};
use crate::record::{FieldDescriptor, Scope};
use crate::rule::Rule;
use crate::value::Value;

// ============================================================================
// FIELD ERROR
// ============================================================================

/// One failed rule on one field.
///
/// `Display` prints the rendered message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the field, e.g. `address.city`.
    pub field: String,
    /// Label the message was rendered with.
    pub label: String,
    /// Value that failed.
    pub value: Value,
    /// Bound or reference relevant to the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
    /// Template key the message came from.
    pub template: String,
    /// Rendered message.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

// ============================================================================
// CHECK CONTEXT
// ============================================================================

/// Read-only view handed to a checker.
#[derive(Debug, Clone)]
pub struct CheckContext<'a> {
    field: &'a FieldDescriptor,
    label: &'a str,
    value: Cow<'a, Value>,
    scope: &'a Scope,
    locale: &'a Locale,
    rule: &'a Rule,
    catalog: &'a MessageCatalog,
    config: &'a ValidatorConfig,
}

impl<'a> CheckContext<'a> {
    pub(crate) fn new(
        field: &'a FieldDescriptor,
        scope: &'a Scope,
        locale: &'a Locale,
        rule: &'a Rule,
        catalog: &'a MessageCatalog,
        config: &'a ValidatorConfig,
    ) -> Self {
        Self {
            field,
            label: field.label_for(locale),
            value: Cow::Borrowed(field.value()),
            scope,
            locale,
            rule,
            catalog,
            config,
        }
    }

    /// Returns a context identical to this one but holding `value`.
    ///
    /// Composite checkers use this to run a sub-check on a derived value
    /// (the first character, say) without touching the field.
    #[must_use]
    pub fn with_value(&self, value: impl Into<Value>) -> Self {
        Self {
            value: Cow::Owned(value.into()),
            ..self.clone()
        }
    }

    /// The field being checked.
    #[must_use]
    pub fn field(&self) -> &'a FieldDescriptor {
        self.field
    }

    /// Label resolved for the active locale.
    #[must_use]
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Current value; the field value unless substituted.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Sibling values of the field's own record.
    #[must_use]
    pub fn scope(&self) -> &'a Scope {
        self.scope
    }

    /// Looks up a sibling by field name.
    #[must_use]
    pub fn sibling(&self, name: &str) -> Option<&'a Value> {
        self.scope.get(name)
    }

    /// Active locale.
    #[must_use]
    pub fn locale(&self) -> &'a Locale {
        self.locale
    }

    /// Rule being applied.
    #[must_use]
    pub fn rule(&self) -> &'a Rule {
        self.rule
    }

    /// Parameters of the rule being applied.
    #[must_use]
    pub fn params(&self) -> &'a [String] {
        &self.rule.params
    }

    /// Catalog used for rendering.
    #[must_use]
    pub fn catalog(&self) -> &'a MessageCatalog {
        self.catalog
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &'a ValidatorConfig {
        self.config
    }

    /// Starts a failure for the current rule: template = checker name,
    /// value = current value, no limit.
    #[must_use]
    pub fn violation(&self) -> Violation<'a> {
        Violation::new(self, &self.rule.checker)
    }

    /// The rule's parameters are missing or malformed.
    #[must_use]
    pub fn param_error(&self) -> FieldError {
        self.violation()
            .with_template(keys::PARAM_ERROR)
            .with_limit(self.rule.to_string())
            .finish()
    }

    /// The checker cannot handle the current value's type.
    #[must_use]
    pub fn type_error(&self) -> FieldError {
        self.violation()
            .with_template(keys::VALUE_TYPE_ERROR)
            .finish()
    }

    /// A referenced sibling does not exist in the field's scope.
    #[must_use]
    pub fn field_not_found(&self, name: &str) -> FieldError {
        self.violation()
            .with_template(keys::FIELD_NOT_FOUND)
            .with_limit(name)
            .finish()
    }
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A failure under construction.
///
/// The message is rendered on creation and after every `with_*` call.
///
/// ```ignore
/// ctx.violation().with_limit(bound).finish()
/// ```
#[derive(Debug)]
#[must_use = "a violation is only reported once finished"]
pub struct Violation<'a> {
    catalog: &'a MessageCatalog,
    locale: &'a Locale,
    error: FieldError,
}

impl<'a> Violation<'a> {
    fn new(ctx: &CheckContext<'a>, template: &str) -> Self {
        let mut violation = Self {
            catalog: ctx.catalog,
            locale: ctx.locale,
            error: FieldError {
                field: ctx.field.path().to_owned(),
                label: ctx.label.to_owned(),
                value: ctx.value().clone(),
                limit: None,
                template: template.to_owned(),
                message: String::new(),
            },
        };
        violation.render();
        violation
    }

    /// Attaches a limit and re-renders.
    pub fn with_limit(mut self, limit: impl Into<Value>) -> Self {
        self.error.limit = Some(limit.into());
        self.render();
        self
    }

    /// Switches the template key and re-renders.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.error.template = template.into();
        self.render();
        self
    }

    /// Current rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Current template key.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.error.template
    }

    /// Completes the failure.
    #[must_use]
    pub fn finish(self) -> FieldError {
        self.error
    }

    fn render(&mut self) {
        self.error.message = self.catalog.render(
            &self.error.template,
            self.locale,
            &self.error.label,
            self.error.limit.as_ref(),
        );
    }
}

impl From<Violation<'_>> for FieldError {
    fn from(violation: Violation<'_>) -> Self {
        violation.finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
