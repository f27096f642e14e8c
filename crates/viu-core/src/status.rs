//! # Platform Enumerations — Single Source of Truth
//!
//! Every enumeration used across the VIU platform, each defined exactly
//! once. The serde wire values match the PostgreSQL enum values of the
//! platform database character-for-character (they are Portuguese
//! SCREAMING_SNAKE identifiers), so Rust services interoperate with the
//! existing backend without a translation layer.
//!
//! Each enumeration provides:
//!
//! - `all()` — every variant in canonical order, for iteration and for
//!   building validation value sets.
//! - `as_str()` — the wire value, guaranteed identical to the serde
//!   serialization.
//! - `label()` — the Portuguese UI label.
//! - `FromStr` — parses the wire value, rejecting anything else.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ViuError;

macro_rules! platform_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $enum_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, $label:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Returns all variants in canonical order.
            pub fn all() -> &'static [$name] {
                &[ $( Self::$variant, )+ ]
            }

            /// Returns the wire value stored in the platform database.
            ///
            /// This must match the serde serialization format.
            pub fn as_str(&self) -> &'static str {
                match self { $( Self::$variant => $wire, )+ }
            }

            /// Returns the Portuguese UI label for this variant.
            pub fn label(&self) -> &'static str {
                match self { $( Self::$variant => $label, )+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ViuError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(ViuError::UnknownEnumValue {
                        enum_name: $enum_name,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

platform_enum! {
    /// Role of a platform account.
    ///
    /// Designers own projects and upload artwork; clients review and
    /// approve; admins administer the workspace.
    UserRole as "UserRole" {
        Designer => "DESIGNER", "Designer";
        Client => "CLIENTE", "Cliente";
        Admin => "ADMIN", "Administrador";
    }
}

platform_enum! {
    /// Subscription plan of a designer account.
    SubscriptionPlan as "SubscriptionPlan" {
        Free => "GRATUITO", "Gratuito";
        Professional => "PROFISSIONAL", "Profissional";
        Premium => "PREMIUM", "Premium";
    }
}

platform_enum! {
    /// Preferred channel for transactional communication.
    CommunicationPreference as "CommunicationPreference" {
        Email => "EMAIL", "E-mail";
        Sms => "SMS", "SMS";
        Push => "PUSH", "Push";
    }
}

platform_enum! {
    /// Lifecycle status of a project.
    ProjectStatus as "ProjectStatus" {
        InProgress => "EM_ANDAMENTO", "Em Andamento";
        Paused => "PAUSADO", "Pausado";
        Completed => "CONCLUIDO", "Concluído";
        Cancelled => "CANCELADO", "Cancelado";
    }
}

platform_enum! {
    /// Priority of a project or task.
    Priority as "Priority" {
        Low => "BAIXA", "Baixa";
        Medium => "MEDIA", "Média";
        High => "ALTA", "Alta";
        Urgent => "URGENTE", "Urgente";
    }
}

platform_enum! {
    /// Kind of file an artwork holds.
    FileKind as "FileKind" {
        Image => "IMAGEM", "Imagem";
        Video => "VIDEO", "Vídeo";
        Document => "DOCUMENTO", "Documento";
        Vector => "VETOR", "Vetor";
    }
}

platform_enum! {
    /// Review status of an artwork.
    ReviewStatus as "ReviewStatus" {
        Pending => "PENDENTE", "Pendente";
        Approved => "APROVADA", "Aprovada";
        Rejected => "REJEITADA", "Rejeitada";
    }
}

platform_enum! {
    /// Kind of feedback left on an artwork.
    FeedbackKind as "FeedbackKind" {
        Text => "TEXTO", "Texto";
        Audio => "AUDIO", "Áudio";
    }
}

platform_enum! {
    /// Kind of approval decision.
    ApprovalKind as "ApprovalKind" {
        Full => "APROVACAO_TOTAL", "Aprovação Total";
        Conditional => "APROVACAO_CONDICIONAL", "Aprovação Condicional";
    }
}

platform_enum! {
    /// Lifecycle status of a task.
    TaskStatus as "TaskStatus" {
        Pending => "PENDENTE", "Pendente";
        InProgress => "EM_ANDAMENTO", "Em Andamento";
        Completed => "CONCLUIDA", "Concluída";
        Cancelled => "CANCELADA", "Cancelada";
    }
}

platform_enum! {
    /// Event category of a notification.
    NotificationKind as "NotificationKind" {
        Feedback => "FEEDBACK", "Feedback";
        Approval => "APROVACAO", "Aprovação";
        Deadline => "PRAZO", "Prazo";
        System => "SISTEMA", "Sistema";
    }
}

platform_enum! {
    /// Delivery channel of a notification.
    NotificationChannel as "NotificationChannel" {
        Email => "EMAIL", "E-mail";
        Sms => "SMS", "SMS";
        Push => "PUSH", "Push";
        InApp => "SISTEMA", "Sistema";
    }
}

platform_enum! {
    /// Category of a generated report.
    ReportKind as "ReportKind" {
        Productivity => "PRODUTIVIDADE", "Produtividade";
        Client => "CLIENTE", "Cliente";
        Financial => "FINANCEIRO", "Financeiro";
        Time => "TEMPO", "Tempo";
    }
}

impl ProjectStatus {
    /// Tailwind badge classes used by the platform dashboards.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::InProgress => "bg-blue-100 text-blue-800",
            Self::Paused => "bg-yellow-100 text-yellow-800",
            Self::Completed => "bg-green-100 text-green-800",
            Self::Cancelled => "bg-red-100 text-red-800",
        }
    }
}

impl Priority {
    /// Tailwind badge classes used by the platform dashboards.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "bg-gray-100 text-gray-800",
            Self::Medium => "bg-blue-100 text-blue-800",
            Self::High => "bg-orange-100 text-orange-800",
            Self::Urgent => "bg-red-100 text-red-800",
        }
    }
}

impl ReviewStatus {
    /// Tailwind badge classes used by the platform dashboards.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Approved => "bg-green-100 text-green-800",
            Self::Rejected => "bg-red-100 text-red-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Round-trip and serde-format checks for one enumeration.
    macro_rules! check_enum {
        ($name:ident, $count:expr) => {
            assert_eq!($name::all().len(), $count);
            for v in $name::all() {
                let parsed: $name = v.as_str().parse().unwrap();
                assert_eq!(*v, parsed);
                let json = serde_json::to_string(v).unwrap();
                assert_eq!(json, format!("\"{}\"", v.as_str()));
                assert_eq!(v.to_string(), v.as_str());
                assert!(!v.label().is_empty());
            }
        };
    }

    #[test]
    fn all_enums_roundtrip() {
        check_enum!(UserRole, 3);
        check_enum!(SubscriptionPlan, 3);
        check_enum!(CommunicationPreference, 3);
        check_enum!(ProjectStatus, 4);
        check_enum!(Priority, 4);
        check_enum!(FileKind, 4);
        check_enum!(ReviewStatus, 3);
        check_enum!(FeedbackKind, 2);
        check_enum!(ApprovalKind, 2);
        check_enum!(TaskStatus, 4);
        check_enum!(NotificationKind, 4);
        check_enum!(NotificationChannel, 4);
        check_enum!(ReportKind, 4);
    }

    #[test]
    fn wire_values_are_portuguese_database_values() {
        assert_eq!(ProjectStatus::InProgress.as_str(), "EM_ANDAMENTO");
        assert_eq!(UserRole::Client.as_str(), "CLIENTE");
        assert_eq!(ApprovalKind::Conditional.as_str(), "APROVACAO_CONDICIONAL");
        assert_eq!(NotificationChannel::InApp.as_str(), "SISTEMA");
    }

    #[test]
    fn from_str_is_strict() {
        assert!("em_andamento".parse::<ProjectStatus>().is_err()); // case-sensitive
        assert!("".parse::<ProjectStatus>().is_err());
        assert!("DESCONHECIDO".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn task_and_project_status_share_wire_values_but_not_types() {
        // Both encode "EM_ANDAMENTO"; the types keep them apart.
        assert_eq!(
            TaskStatus::InProgress.as_str(),
            ProjectStatus::InProgress.as_str()
        );
    }
}
