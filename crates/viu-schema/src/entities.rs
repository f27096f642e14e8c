//! # Entity Payloads
//!
//! Create/update schemas for the platform entities. Field bounds come
//! from [`viu_core::limits`] and enum memberships from
//! [`viu_core::status`], so a variant or limit added there is picked up
//! here without touching message strings.

use serde_json::{json, Value};
use viu_core::limits::{field, mime, upload};
use viu_core::{
    is_valid_cnpj, is_valid_cpf, ApprovalKind, CommunicationPreference, FeedbackKind,
    NotificationChannel, NotificationKind, Priority, ProjectStatus, SubscriptionPlan, TaskStatus,
    UserRole,
};
use viu_valid::{enumeration, integer, string, EnumSchema, Schema};

use crate::base::{
    coordinate, email, hex_color, iso_datetime, money_cents, password, person_name, phone, tags,
    tags_with_max, url, uuid,
};

fn role() -> EnumSchema {
    enumeration(
        UserRole::all().iter().map(|v| v.as_str()),
        "Tipo de usuário inválido",
    )
}

fn plan() -> EnumSchema {
    enumeration(
        SubscriptionPlan::all().iter().map(|v| v.as_str()),
        "Plano inválido",
    )
}

fn communication_preference() -> EnumSchema {
    enumeration(
        CommunicationPreference::all().iter().map(|v| v.as_str()),
        "Preferência de comunicação inválida",
    )
}

fn priority() -> EnumSchema {
    enumeration(
        Priority::all().iter().map(|v| v.as_str()),
        "Prioridade inválida",
    )
}

/// Optional CPF or CNPJ, checked by the checksum validators.
fn document_ok(value: &Value) -> bool {
    match value["document"].as_str() {
        Some(doc) => is_valid_cpf(doc) || is_valid_cnpj(doc),
        None => true,
    }
}

/// New user payload. Plan defaults to the free tier and the
/// communication preference to e-mail.
pub fn create_user_request() -> Schema {
    viu_valid::object()
        .field("name", person_name())
        .field("email", email())
        .field("password", password())
        .field("role", role())
        .optional_field("phone", phone())
        .optional_field("document", string().trim())
        .field_with_default("plan", plan(), json!("GRATUITO"))
        .field_with_default(
            "communicationPreference",
            communication_preference(),
            json!("EMAIL"),
        )
        .refine("document", "CPF ou CNPJ inválido", document_ok)
        .build()
}

/// Partial user update: every field optional, same rules when present.
pub fn update_user_request() -> Schema {
    viu_valid::object()
        .optional_field("name", person_name())
        .optional_field("phone", phone())
        .optional_field("document", string().trim())
        .optional_field("plan", plan())
        .optional_field("communicationPreference", communication_preference())
        .refine("document", "CPF ou CNPJ inválido", document_ok)
        .build()
}

pub fn create_project_request() -> Schema {
    viu_valid::object()
        .field(
            "name",
            string()
                .trim()
                .min_len(1, "Nome do projeto é obrigatório")
                .max_len(field::PROJECT_NAME_MAX_LEN, "Nome do projeto muito longo"),
        )
        .optional_field(
            "description",
            string().max_len(field::PROJECT_DESCRIPTION_MAX_LEN, "Descrição muito longa"),
        )
        .field("clientId", uuid())
        .field_with_default("priority", priority(), json!("MEDIA"))
        .optional_field("budgetCents", money_cents())
        .optional_field("deadline", iso_datetime())
        .field_with_default("tags", tags(), json!([]))
        .optional_field("color", hex_color())
        .build()
}

pub fn update_project_request() -> Schema {
    viu_valid::object()
        .optional_field(
            "name",
            string()
                .trim()
                .min_len(1, "Nome do projeto é obrigatório")
                .max_len(field::PROJECT_NAME_MAX_LEN, "Nome do projeto muito longo"),
        )
        .optional_field(
            "description",
            string().max_len(field::PROJECT_DESCRIPTION_MAX_LEN, "Descrição muito longa"),
        )
        .optional_field(
            "status",
            enumeration(
                ProjectStatus::all().iter().map(|v| v.as_str()),
                "Status de projeto inválido",
            ),
        )
        .optional_field("priority", priority())
        .optional_field("budgetCents", money_cents())
        .optional_field("deadline", iso_datetime())
        .optional_field("tags", tags())
        .optional_field("color", hex_color())
        .build()
}

/// New artwork upload metadata. The MIME type must belong to one of
/// the supported upload categories.
pub fn create_artwork_request() -> Schema {
    viu_valid::object()
        .field("projectId", uuid())
        .field(
            "title",
            string()
                .trim()
                .min_len(1, "Título é obrigatório")
                .max_len(field::ARTWORK_TITLE_MAX_LEN, "Título muito longo"),
        )
        .optional_field(
            "description",
            string().max_len(field::ARTWORK_DESCRIPTION_MAX_LEN, "Descrição muito longa"),
        )
        .field("fileUrl", url())
        .field("mimeType", string().min_len(1, "Tipo de arquivo é obrigatório"))
        .field(
            "fileSize",
            integer()
                .min(1, "Arquivo vazio")
                .max(
                    upload::ARTWORK_MAX_FILE_SIZE as i64,
                    "Arquivo excede o tamanho máximo de 100MB",
                ),
        )
        .field_with_default("tags", tags(), json!([]))
        .refine("mimeType", "Tipo de arquivo não suportado", |value| {
            value["mimeType"].as_str().is_some_and(mime::is_supported)
        })
        .build()
}

/// New feedback. Text feedback needs a body, audio feedback needs an
/// audio URL, and canvas coordinates come in pairs or not at all.
pub fn create_feedback_request() -> Schema {
    viu_valid::object()
        .field("artworkId", uuid())
        .optional_field("versionId", uuid())
        .field(
            "kind",
            enumeration(
                FeedbackKind::all().iter().map(|v| v.as_str()),
                "Tipo de feedback inválido",
            ),
        )
        .optional_field(
            "body",
            string()
                .trim()
                .max_len(field::FEEDBACK_BODY_MAX_LEN, "Comentário muito longo"),
        )
        .optional_field("audioUrl", url())
        .optional_field("positionX", coordinate())
        .optional_field("positionY", coordinate())
        .refine(
            "body",
            "Comentário é obrigatório para feedback de texto",
            |value| {
                value["kind"] != json!("TEXTO")
                    || value["body"].as_str().is_some_and(|b| !b.is_empty())
            },
        )
        .refine(
            "audioUrl",
            "URL do áudio é obrigatória para feedback de áudio",
            |value| value["kind"] != json!("AUDIO") || value["audioUrl"].is_string(),
        )
        .refine(
            "positionY",
            "Informe ambas as coordenadas ou nenhuma",
            |value| value["positionX"].is_null() == value["positionY"].is_null(),
        )
        .build()
}

/// New approval decision. Conditional approvals must state conditions.
pub fn create_approval_request() -> Schema {
    viu_valid::object()
        .field("artworkId", uuid())
        .optional_field("versionId", uuid())
        .field(
            "kind",
            enumeration(
                ApprovalKind::all().iter().map(|v| v.as_str()),
                "Tipo de aprovação inválido",
            ),
        )
        .optional_field(
            "conditions",
            string()
                .trim()
                .max_len(field::PROJECT_DESCRIPTION_MAX_LEN, "Condições muito longas"),
        )
        .refine(
            "conditions",
            "Condições são obrigatórias para aprovação condicional",
            |value| {
                value["kind"] != json!("APROVACAO_CONDICIONAL")
                    || value["conditions"].as_str().is_some_and(|c| !c.is_empty())
            },
        )
        .build()
}

pub fn create_task_request() -> Schema {
    viu_valid::object()
        .field("projectId", uuid())
        .field(
            "title",
            string()
                .trim()
                .min_len(1, "Título é obrigatório")
                .max_len(field::TASK_TITLE_MAX_LEN, "Título muito longo"),
        )
        .optional_field(
            "description",
            string().max_len(field::TASK_DESCRIPTION_MAX_LEN, "Descrição muito longa"),
        )
        .field_with_default("priority", priority(), json!("MEDIA"))
        .field_with_default(
            "status",
            enumeration(
                TaskStatus::all().iter().map(|v| v.as_str()),
                "Status de tarefa inválido",
            ),
            json!("PENDENTE"),
        )
        .optional_field("dueDate", iso_datetime())
        .optional_field("assigneeId", uuid())
        .optional_field(
            "estimatedHours",
            integer()
                .min(0, "Horas estimadas inválidas")
                .max(field::TASK_MAX_HOURS as i64, "Horas estimadas inválidas"),
        )
        .field_with_default("tags", tags_with_max(field::TASK_TAGS_MAX_COUNT), json!([]))
        .build()
}

pub fn create_notification_request() -> Schema {
    viu_valid::object()
        .field("userId", uuid())
        .field(
            "kind",
            enumeration(
                NotificationKind::all().iter().map(|v| v.as_str()),
                "Tipo de notificação inválido",
            ),
        )
        .field_with_default(
            "channel",
            enumeration(
                NotificationChannel::all().iter().map(|v| v.as_str()),
                "Canal de notificação inválido",
            ),
            json!("SISTEMA"),
        )
        .field(
            "title",
            string()
                .trim()
                .min_len(1, "Título é obrigatório")
                .max_len(field::NOTIFICATION_TITLE_MAX_LEN, "Título muito longo"),
        )
        .field(
            "message",
            string()
                .trim()
                .min_len(1, "Mensagem é obrigatória")
                .max_len(field::NOTIFICATION_MESSAGE_MAX_LEN, "Mensagem muito longa"),
        )
        .optional_field("linkUrl", url())
        .build()
}
