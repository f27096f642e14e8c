//! # viu-core — Foundational Types for the VIU Platform
//!
//! This crate is the bedrock of the VIU shared library. It defines the
//! type-system primitives every other crate in the workspace builds on;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `UserId`, `ProjectId`,
//!    `ArtworkId`, `Cpf`, `Cnpj` — all newtypes with validated constructors
//!    where a constructor can fail. No bare strings for identifiers.
//!
//! 2. **Single definition per enumeration.** `ProjectStatus`, `Priority`,
//!    `ReviewStatus` and friends each exist exactly once, with exhaustive
//!    `match` everywhere. Adding a variant forces every consumer to handle
//!    it at compile time.
//!
//! 3. **Wire-stable encodings.** Serde representations match the platform's
//!    PostgreSQL enum values and camelCase API fields byte-for-byte, so
//!    Rust services interoperate with the existing TypeScript backend.
//!
//! 4. **Total document validators.** `is_valid_cpf` / `is_valid_cnpj`
//!    reduce every malformed input to `false` — no panics, no errors.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `viu-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod document;
pub mod dto;
pub mod entity;
pub mod error;
pub mod identity;
pub mod limits;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use document::{is_valid_cep, is_valid_cnpj, is_valid_cpf};
pub use error::ViuError;
pub use identity::{
    ApprovalId, ArtworkId, Cep, Cnpj, Cpf, FeedbackId, NotificationId, ProjectId, TaskId, UserId,
    VersionId,
};
pub use status::{
    ApprovalKind, CommunicationPreference, FeedbackKind, FileKind, NotificationChannel,
    NotificationKind, Priority, ProjectStatus, ReportKind, ReviewStatus, SubscriptionPlan,
    TaskStatus, UserRole,
};
