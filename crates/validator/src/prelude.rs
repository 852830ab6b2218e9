//! Prelude module for convenient imports.
//!
//! Provides a single `use ruleval_validator::prelude::*;` import that brings
//! in the validator, the record description types and the checker trait.

// ============================================================================
// ENGINE: Validator, results, configuration
// ============================================================================

pub use crate::config::ValidatorConfig;
pub use crate::engine::{Report, ValidationErrors, Validator};

// ============================================================================
// RECORDS: Description builder and trait
// ============================================================================

pub use crate::record::{Field, Record, RecordBuilder, Validate};
pub use crate::value::{IntoValue, Value, ValueKind};

// ============================================================================
// EXTENSION: Custom checkers and messages
// ============================================================================

pub use crate::context::{CheckContext, FieldError};
pub use crate::message::{Locale, MessageCatalog, Template};
pub use crate::registry::{Checker, CheckerRegistry};

// ============================================================================
// DERIVE-GATED: #[derive(Validate)]
// ============================================================================

#[cfg(feature = "derive")]
pub use ruleval_validator_macros::Validate;
