//! # viu-schema — API Payload Schemas
//!
//! The declarative validation layer of the VIU platform: every API
//! payload has a schema built from `viu-valid` descriptors, with
//! constraint bounds taken from `viu-core::limits` and enum value sets
//! from the `viu-core` enumerations. Violation messages are the
//! Portuguese strings shown to end users.
//!
//! Modules:
//!
//! - [`base`] — reusable field primitives (email, phone, tags, money,
//!   pagination, report period, search).
//! - [`auth`] — login, registration, token refresh, and password flows.
//! - [`entities`] — create/update payloads for the platform entities.
//! - [`password`] — the password strength meter complementing the
//!   password schema.
//!
//! ## Crate Policy
//!
//! - Schemas are built on demand and are cheap to construct; services
//!   that validate in a hot path should build once and reuse, since
//!   `viu_valid::Schema` is `Clone + Send + Sync`.
//! - No new third-party dependencies: everything composes `viu-valid`.

pub mod auth;
pub mod base;
pub mod entities;
pub mod password;

pub use password::{password_strength, PasswordStrength};
