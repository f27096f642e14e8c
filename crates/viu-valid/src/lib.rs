//! # viu-valid — Declarative Runtime Validation
//!
//! A small schema system: describe the expected shape of a JSON value
//! with composable field descriptors, then hand any untrusted
//! `serde_json::Value` to a single generic interpreter. The result is
//! either a normalized value (transforms applied, defaults filled,
//! unknown keys stripped) or a structured list of every violation
//! found, each addressed by a dot-notation path.
//!
//! ## Contract
//!
//! - Validation is a pure function of (schema, input). The only
//!   suspension point is awaiting a caller-supplied async refinement.
//! - Failures aggregate across the whole object; within one field,
//!   checks short-circuit (a field that fails its type check is not
//!   also bounds-checked).
//! - The error list is never empty on failure.
//! - Strict entry points ([`Schema::validate`],
//!   [`Schema::validate_async`]) return `Result` for `?` propagation;
//!   safe entry points ([`Schema::safe_validate`],
//!   [`Schema::safe_validate_async`]) return a discriminated
//!   [`ValidationOutcome`] and never need error handling.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use viu_valid::{object, string};
//!
//! let schema = object()
//!     .field("name", string().min_len(2, "name too short").trim())
//!     .field("email", string().lowercase())
//!     .build();
//!
//! let value = schema.validate(&json!({"name": " Ana ", "email": "ANA@VIU.COM"})).unwrap();
//! assert_eq!(value, json!({"name": "Ana", "email": "ana@viu.com"}));
//! ```

mod eval;
mod issue;
mod schema;

pub use issue::{
    extract_errors, format_errors_for_display, Issue, ValidationError, ValidationOutcome,
};
pub use schema::{
    array, boolean, datetime, enumeration, float, integer, object, string, ArraySchema,
    AsyncRefinement, BoolSchema, DateTimeSchema, EnumSchema, FieldSpec, FloatSchema,
    IntegerSchema, ObjectSchema, Refinement, Schema, StringSchema,
};
