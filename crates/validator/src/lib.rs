//! # ruleval-validator
//!
//! A declarative, rule-string driven validation engine with localizable
//! messages.
//!
//! ## Quick Start
//!
//! ```
//! use ruleval_validator::prelude::*;
//!
//! #[derive(Validate)]
//! struct SignUp {
//!     #[validate(rules = "required;username", label = "User name")]
//!     user: String,
//!     #[validate(rules = "min:0", label = "Score", labels(zh = "评分"))]
//!     score: i32,
//! }
//!
//! let validator = Validator::default();
//! let report = validator.check_record(&SignUp { user: "ann".into(), score: -5 });
//! assert_eq!(report.messages(), vec!["Score should be greater than 0"]);
//!
//! let report = validator.check_record_in(&SignUp { user: "ann".into(), score: -5 }, Locale::ZH);
//! assert_eq!(report.messages(), vec!["评分应大于0"]);
//! ```
//!
//! ## Rule Strings
//!
//! Directives are separated by `;`; parameters follow the first `:` and are
//! separated by `,`: `required;minlen:3;list:red,green`.
//!
//! ## Built-in Checkers
//!
//! - **Presence**: `required`
//! - **Bounds**: `min`, `max`, `minlen`, `maxlen`
//! - **Character classes**: `alpha`, `alphanumeric`, `alphadash`, `username`
//! - **Formats**: `email`, `ipv4`, `mobile`, `tel`, `phone`, `idcard`
//! - **Relations**: `equal`, `list`
//!
//! Custom checkers implement [`Checker`](registry::Checker) (closures do) and
//! are registered by name; see [`checker!`] for text predicates.

pub mod checkers;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
mod macros;
pub mod message;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rule;
pub mod value;

pub use config::ValidatorConfig;
pub use context::{CheckContext, FieldError};
pub use engine::{Report, ValidationErrors, Validator};
pub use error::{CatalogError, ConfigError};
pub use record::Validate;
#[cfg(feature = "derive")]
pub use ruleval_validator_macros::Validate;
