//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all domain identifiers in the VIU platform.
//! These prevent accidental identifier confusion — you cannot pass a
//! `UserId` where a `ProjectId` is expected.
//!
//! Brazilian document numbers get validated newtypes: `Cpf`, `Cnpj`,
//! and `Cep` can only be constructed from input that passes the
//! structural checks in [`crate::document`], so holding one of these
//! values is proof the number is well-formed.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::document::{is_valid_cep, is_valid_cnpj, is_valid_cpf};
use crate::error::ViuError;

macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl FromStr for $name {
            type Err = ViuError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}:{}", $prefix, self.0)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a platform user (designer, client, or admin).
    UserId,
    "user"
);
uuid_id!(
    /// Unique identifier for a design project.
    ProjectId,
    "project"
);
uuid_id!(
    /// Unique identifier for an artwork within a project.
    ArtworkId,
    "artwork"
);
uuid_id!(
    /// Unique identifier for a single version of an artwork.
    VersionId,
    "version"
);
uuid_id!(
    /// Unique identifier for a feedback entry on an artwork.
    FeedbackId,
    "feedback"
);
uuid_id!(
    /// Unique identifier for an approval decision.
    ApprovalId,
    "approval"
);
uuid_id!(
    /// Unique identifier for a project task.
    TaskId,
    "task"
);
uuid_id!(
    /// Unique identifier for a notification.
    NotificationId,
    "notification"
);

/// Brazilian natural-person registry number (CPF), stored as 11 bare digits.
///
/// Construction validates the check digits; see [`crate::document::is_valid_cpf`].
/// Deserialization goes through [`Cpf::parse`], so a deserialized value
/// carries the same guarantee as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cpf(String);

impl Cpf {
    /// Validate and normalize a CPF, stripping punctuation.
    ///
    /// # Errors
    ///
    /// Returns [`ViuError::InvalidDocument`] if the input does not pass
    /// the CPF check-digit algorithm.
    pub fn parse(input: &str) -> Result<Self, ViuError> {
        if is_valid_cpf(input) {
            Ok(Self(input.chars().filter(|c| c.is_ascii_digit()).collect()))
        } else {
            Err(ViuError::InvalidDocument {
                kind: "CPF",
                digit_count: input.chars().filter(|c| c.is_ascii_digit()).count(),
            })
        }
    }

    /// The normalized 11-digit form.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

/// Brazilian legal-entity registry number (CNPJ), stored as 14 bare digits.
/// Deserialization goes through [`Cnpj::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cnpj(String);

impl Cnpj {
    /// Validate and normalize a CNPJ, stripping punctuation.
    ///
    /// # Errors
    ///
    /// Returns [`ViuError::InvalidDocument`] if the input does not pass
    /// the CNPJ check-digit algorithm.
    pub fn parse(input: &str) -> Result<Self, ViuError> {
        if is_valid_cnpj(input) {
            Ok(Self(input.chars().filter(|c| c.is_ascii_digit()).collect()))
        } else {
            Err(ViuError::InvalidDocument {
                kind: "CNPJ",
                digit_count: input.chars().filter(|c| c.is_ascii_digit()).count(),
            })
        }
    }

    /// The normalized 14-digit form.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

/// Brazilian postal code (CEP), stored as 8 bare digits.
/// Deserialization goes through [`Cep::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Validate and normalize a CEP, stripping punctuation.
    ///
    /// # Errors
    ///
    /// Returns [`ViuError::InvalidDocument`] if the input does not
    /// contain exactly 8 digits.
    pub fn parse(input: &str) -> Result<Self, ViuError> {
        if is_valid_cep(input) {
            Ok(Self(input.chars().filter(|c| c.is_ascii_digit()).collect()))
        } else {
            Err(ViuError::InvalidDocument {
                kind: "CEP",
                digit_count: input.chars().filter(|c| c.is_ascii_digit()).count(),
            })
        }
    }

    /// The normalized 8-digit form.
    pub fn as_digits(&self) -> &str {
        &self.0
    }
}

// Deserialization must not bypass validation: reject any encoded
// document number that Self::parse would reject.
macro_rules! document_deserialize {
    ($name:ident) => {
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

document_deserialize!(Cpf);
document_deserialize!(Cnpj);
document_deserialize!(Cep);

impl std::fmt::Display for Cpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Cnpj {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        // Compile-time check: a function taking UserId will not accept ProjectId.
        fn takes_user(_: UserId) {}
        takes_user(UserId::new());
    }

    #[test]
    fn id_display_carries_namespace() {
        let id = ProjectId::new();
        assert!(id.to_string().starts_with("project:"));
    }

    #[test]
    fn id_roundtrips_through_from_str() {
        let id = UserId::new();
        let parsed: UserId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn cpf_parse_normalizes_punctuation() {
        let cpf = Cpf::parse("529.982.247-25").unwrap();
        assert_eq!(cpf.as_digits(), "52998224725");
    }

    #[test]
    fn cpf_parse_rejects_bad_check_digit() {
        let err = Cpf::parse("529.982.247-26").unwrap_err();
        assert!(matches!(
            err,
            ViuError::InvalidDocument { kind: "CPF", digit_count: 11 }
        ));
    }

    #[test]
    fn cnpj_parse_normalizes_punctuation() {
        let cnpj = Cnpj::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.as_digits(), "11222333000181");
    }

    #[test]
    fn cep_parse_requires_eight_digits() {
        assert!(Cep::parse("01310-100").is_ok());
        assert!(Cep::parse("0131").is_err());
    }

    #[test]
    fn document_serde_is_transparent() {
        let cpf = Cpf::parse("52998224725").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"52998224725\"");
    }

    #[test]
    fn document_deserialization_validates() {
        let cpf: Cpf = serde_json::from_str("\"529.982.247-25\"").unwrap();
        assert_eq!(cpf.as_digits(), "52998224725");

        // Invalid numbers cannot enter through serde either.
        assert!(serde_json::from_str::<Cpf>("\"123\"").is_err());
        assert!(serde_json::from_str::<Cpf>("\"529.982.247-26\"").is_err());
        assert!(serde_json::from_str::<Cnpj>("\"11.222.333/0001-80\"").is_err());
        assert!(serde_json::from_str::<Cep>("\"0131\"").is_err());
    }
}
