//! Checker registry for looking up checkers by rule name.

use std::sync::Arc;

use dashmap::DashMap;

use crate::checkers;
use crate::context::{CheckContext, FieldError};
use crate::message::keys;

/// A named validation capability.
///
/// Returns `None` when the current value satisfies the rule, or the error
/// entry describing the failure. Closures with the same signature implement
/// this trait, so ad-hoc checkers need no type of their own.
///
/// # Examples
///
/// ```
/// use ruleval_validator::context::{CheckContext, FieldError};
/// use ruleval_validator::registry::{Checker, CheckerRegistry};
///
/// struct Even;
///
/// impl Checker for Even {
///     fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
///         match ctx.value() {
///             ruleval_validator::value::Value::Int(n) if n % 2 != 0 => Some(ctx.violation().finish()),
///             _ => None,
///         }
///     }
/// }
///
/// let registry = CheckerRegistry::with_builtins();
/// registry.register("even", Even);
/// assert!(registry.contains("even"));
/// ```
pub trait Checker: Send + Sync {
    /// Checks the context's current value.
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError>;
}

impl<F> Checker for F
where
    F: Fn(&CheckContext<'_>) -> Option<FieldError> + Send + Sync,
{
    fn check(&self, ctx: &CheckContext<'_>) -> Option<FieldError> {
        self(ctx)
    }
}

impl std::fmt::Debug for dyn Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<checker>")
    }
}

/// Thread-safe registry of checkers keyed by rule name.
///
/// Uses `DashMap` for concurrent access. Checkers are `Arc`-cloned out of
/// the map before they run, so no shard lock is held during a check and a
/// checker may itself register or dispatch.
pub struct CheckerRegistry {
    checkers: DashMap<String, Arc<dyn Checker>>,
}

impl CheckerRegistry {
    /// Creates a registry with no checkers.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            checkers: DashMap::new(),
        }
    }

    /// Creates a registry holding every built-in checker.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::empty();
        checkers::register_builtins(&registry);
        registry
    }

    /// Binds `checker` to the rule name `name`. A rule name maps to one
    /// checker; binding it again swaps the old checker out for later checks.
    pub fn register(&self, name: impl Into<String>, checker: impl Checker + 'static) {
        self.register_arc(name, Arc::new(checker));
    }

    /// Binds an already shared checker to the rule name `name`.
    pub fn register_arc(&self, name: impl Into<String>, checker: Arc<dyn Checker>) {
        let name = name.into();
        tracing::debug!(checker = %name, "registered checker");
        self.checkers.insert(name, checker);
    }

    /// The checker a rule named `name` dispatches to.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Checker>> {
        self.checkers.get(name).map(|entry| Arc::clone(entry.value()))
    }

    /// Whether rules named `name` resolve to a checker.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.checkers.contains_key(name)
    }

    /// Unbinds `name`, handing back its checker. Rules naming it report
    /// `_checkerNotFound` afterwards.
    pub fn remove(&self, name: &str) -> Option<Arc<dyn Checker>> {
        self.checkers.remove(name).map(|(_, v)| v)
    }

    /// Number of registered checkers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checkers.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Runs the checker registered under `name` against `ctx`.
    ///
    /// An unknown name never panics: it yields a `_checkerNotFound` entry
    /// with the name as limit.
    pub fn dispatch(&self, name: &str, ctx: &CheckContext<'_>) -> Option<FieldError> {
        let Some(checker) = self.get(name) else {
            tracing::warn!(checker = name, field = ctx.field().path(), "unknown checker");
            return Some(
                ctx.violation()
                    .with_template(keys::CHECKER_NOT_FOUND)
                    .with_limit(name)
                    .finish(),
            );
        };
        checker.check(ctx)
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for CheckerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckerRegistry")
            .field("checkers", &self.names())
            .finish()
    }
}
