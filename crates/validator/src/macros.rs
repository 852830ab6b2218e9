//! Macros for declaring checkers with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`checker!`]: declare a text checker (unit struct + predicate + `Checker` impl)
//!
//! # Examples
//!
//! ```rust,ignore
//! use ruleval_validator::checker;
//!
//! checker! {
//!     /// Lowercase ASCII only.
//!     pub Lowercase => "lowercase";
//!     rule(text) { text.bytes().all(|b| b.is_ascii_lowercase()) }
//! }
//! ```

// ============================================================================
// CHECKER MACRO
// ============================================================================

/// Declares a checker over text values.
///
/// Generates a unit struct with a `NAME` constant and a `matches` predicate,
/// plus a [`Checker`](crate::registry::Checker) impl with the shared text
/// conventions: nil and empty strings pass, non-text values fail with
/// `_valueTypeError`, and a text value failing the predicate yields the
/// default violation (template = `NAME`).
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied.
///
/// # Variants
///
/// **Predicate block**:
/// ```rust,ignore
/// checker! {
///     pub Alpha => "alpha";
///     rule(text) { text.bytes().all(|b| b.is_ascii_alphabetic()) }
/// }
/// ```
///
/// **Regex static**:
/// ```rust,ignore
/// checker! {
///     pub Tel => "tel";
///     pattern(TEL_REGEX);
/// }
/// ```
#[macro_export]
macro_rules! checker {
    // ── Variant 1: Predicate block ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $key:literal;
        rule($inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// Registry name and template key.
            pub const NAME: &'static str = $key;

            /// Whether `text` satisfies this checker.
            #[must_use]
            pub fn matches($inp: &str) -> bool $rule
        }

        impl $crate::registry::Checker for $name {
            fn check(
                &self,
                ctx: &$crate::context::CheckContext<'_>,
            ) -> Option<$crate::context::FieldError> {
                $crate::checkers::check_text(ctx, Self::matches)
            }
        }
    };

    // ── Variant 2: Regex static ──────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $key:literal;
        pattern($regex:ident);
    ) => {
        $crate::checker! {
            $(#[$meta])*
            $vis $name => $key;
            rule(text) { $regex.is_match(text) }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
