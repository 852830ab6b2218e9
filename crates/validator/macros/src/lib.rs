//! # Ruleval Validator Macros
//!
//! `#[derive(Validate)]` for `ruleval-validator`.
//!
//! The derive turns a struct into a record description: every field marked
//! with `#[validate(...)]` becomes a field descriptor carrying its value,
//! rule text, labels and override message. Unmarked fields are not described
//! and are therefore invisible to cross-field rules.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod support;
mod validate;

/// Derive macro for the `Validate` trait.
///
/// # Attributes
///
/// ## Container attributes (`#[validate(...)]` on the struct)
///
/// - `check = path` - Record-level check, `fn(&Self) -> Result<(), E>` with
///   `E: Display`. Repeatable; failures are reported after the field errors.
///
/// ## Field attributes
///
/// - `#[validate]` - Describes the field without rules, so sibling rules such
///   as `equal:<field>` can see it
/// - `rules = "..."` - Rule text, e.g. `"required;minlen:3"`
/// - `label = "..."` - Base label used in messages
/// - `labels(zh = "...", ...)` - Per-locale labels
/// - `message = "..."` - Replaces the first failure message of the field
/// - `nested` - Describes a nested record under this field's name
/// - `each` - Describes every element of a sequence of nested records
/// - `skip` - Ignores the field
///
/// Fields without `#[validate]` are not described at all. A rule such as
/// `equal:password` therefore needs `password` marked with at least a bare
/// `#[validate]`; otherwise it reports `_fieldNotFound`.
///
/// # Example
///
/// ```ignore
/// #[derive(Validate)]
/// #[validate(check = totals_match)]
/// pub struct Order {
///     #[validate(rules = "required;minlen:3", label = "Order number")]
///     number: String,
///
///     #[validate(nested)]
///     address: Address,
///
///     #[validate(each, rules = "required")]
///     lines: Vec<Line>,
/// }
/// ```
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    validate::derive(input)
}
