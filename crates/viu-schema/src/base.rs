//! # Reusable Field Primitives
//!
//! The building blocks every payload schema composes: validated
//! primitives with the platform's bounds and Portuguese violation
//! messages. Patterns compile once per process through `OnceLock`
//! statics.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::json;
use viu_core::limits::{amount, field, pagination};
use viu_valid::{
    array, datetime, enumeration, float, integer, object, string, ArraySchema, DateTimeSchema,
    FloatSchema, IntegerSchema, ObjectSchema, StringSchema,
};

macro_rules! static_pattern {
    ($name:ident, $pattern:literal) => {
        pub(crate) fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect("pattern is well-formed"))
        }
    };
}

static_pattern!(uuid_pattern, r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[1-5][0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$");
static_pattern!(email_pattern, r"^[^\s@]+@[^\s@]+\.[^\s@]+$");
static_pattern!(phone_pattern, r"^(\+55\s?)?(\(?\d{2}\)?\s?)?\d{4,5}-?\d{4}$");
static_pattern!(name_pattern, r"^[a-zA-ZÀ-ÿ\s]+$");
static_pattern!(url_pattern, r"^https?://\S+$");
static_pattern!(hex_color_pattern, r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$");
static_pattern!(tag_pattern, r"^[a-zA-Z0-9\-_]+$");

/// UUID identifier field.
pub fn uuid() -> StringSchema {
    string().pattern(uuid_pattern(), "ID deve ser um UUID válido")
}

/// Email field: trimmed, lowercased, format- and length-checked.
pub fn email() -> StringSchema {
    string()
        .trim()
        .lowercase()
        .min_len(
            field::EMAIL_MIN_LEN,
            "Email deve ter pelo menos 5 caracteres",
        )
        .max_len(
            field::EMAIL_MAX_LEN,
            "Email deve ter no máximo 255 caracteres",
        )
        .pattern(email_pattern(), "Email deve ter um formato válido")
}

/// Password field: length bounds only. Complexity is enforced by the
/// registration/password-change refinements (see [`crate::password`]),
/// since the four character-class rules need lookahead-free checks.
pub fn password() -> StringSchema {
    string()
        .min_len(
            field::PASSWORD_MIN_LEN,
            "Senha deve ter pelo menos 8 caracteres",
        )
        .max_len(
            field::PASSWORD_MAX_LEN,
            "Senha deve ter no máximo 128 caracteres",
        )
}

/// Brazilian phone number: landline, mobile, or +55-prefixed mobile.
pub fn phone() -> StringSchema {
    string().pattern(
        phone_pattern(),
        "Telefone deve estar no formato brasileiro válido",
    )
}

/// Person display name: letters and spaces, trimmed.
pub fn person_name() -> StringSchema {
    string()
        .trim()
        .min_len(field::NAME_MIN_LEN, "Nome deve ter pelo menos 2 caracteres")
        .max_len(field::NAME_MAX_LEN, "Nome deve ter no máximo 100 caracteres")
        .pattern(name_pattern(), "Nome deve conter apenas letras e espaços")
}

/// HTTP(S) URL with the platform length ceiling.
pub fn url() -> StringSchema {
    string()
        .max_len(field::URL_MAX_LEN, "URL deve ter no máximo 2048 caracteres")
        .pattern(url_pattern(), "URL deve ter um formato válido")
}

/// RFC 3339 / ISO 8601 datetime string.
pub fn iso_datetime() -> DateTimeSchema {
    datetime().message("Data deve estar no formato ISO 8601")
}

/// Hex color: `#RRGGBB` or `#RGB`.
pub fn hex_color() -> StringSchema {
    string().pattern(
        hex_color_pattern(),
        "Cor deve estar no formato hexadecimal (#RRGGBB ou #RGB)",
    )
}

/// Tag list: bounded count, bounded length, restricted charset, no
/// duplicates.
pub fn tags() -> ArraySchema {
    tags_with_max(field::TAGS_MAX_COUNT)
}

/// Tag list with a caller-chosen count ceiling (tasks use a lower one).
pub fn tags_with_max(max_count: usize) -> ArraySchema {
    array(
        string()
            .min_len(1, "Tag não pode estar vazia")
            .max_len(field::TAG_MAX_LEN, "Tag deve ter no máximo 50 caracteres")
            .pattern(
                tag_pattern(),
                "Tag deve conter apenas letras, números, hífens e underscores",
            ),
    )
    .max_items(max_count, "Número máximo de tags excedido")
    .unique("Tags não podem se repetir")
}

/// Monetary amount in cents of BRL.
pub fn money_cents() -> IntegerSchema {
    integer()
        .min(0, "Valor deve ser positivo")
        .max(amount::MONEY_MAX_CENTS, "Valor muito alto")
}

/// Percentage in `0..=100`.
pub fn percentage() -> FloatSchema {
    float()
        .min(0.0, "Porcentagem deve ser entre 0 e 100")
        .max(100.0, "Porcentagem deve ser entre 0 e 100")
}

/// Canvas coordinate for positional feedback.
pub fn coordinate() -> FloatSchema {
    float()
        .min(0.0, "Coordenada deve ser positiva")
        .max(amount::COORDINATE_MAX, "Coordenada muito alta")
}

/// Pagination parameters with platform defaults and ceilings.
pub fn pagination_params() -> ObjectSchema {
    object()
        .field_with_default(
            "page",
            integer().min(1, "Página deve ser maior que 0"),
            json!(1),
        )
        .field_with_default(
            "limit",
            integer()
                .min(pagination::MIN_LIMIT, "Limite deve ser maior que 0")
                .max(pagination::MAX_LIMIT, "Limite deve ser no máximo 100"),
            json!(pagination::DEFAULT_LIMIT),
        )
        .optional_field("sortBy", string())
        .field_with_default(
            "sortOrder",
            enumeration(["asc", "desc"], "Ordenação deve ser asc ou desc"),
            json!("desc"),
        )
}

/// Report period: two ISO datetimes with start ≤ end, the violation
/// attributed to the start field.
pub fn report_period() -> ObjectSchema {
    object()
        .field("start", iso_datetime())
        .field("end", iso_datetime())
        .refine(
            "start",
            "Data de início deve ser anterior à data de fim",
            |value| {
                // Both fields already validated as datetimes; compare
                // instants so mixed offsets order correctly.
                let start = value["start"]
                    .as_str()
                    .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok());
                let end = value["end"]
                    .as_str()
                    .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok());
                match (start, end) {
                    (Some(start), Some(end)) => start <= end,
                    _ => true,
                }
            },
        )
}

/// Free-text search request with optional filters and pagination.
pub fn search_request() -> ObjectSchema {
    object()
        .field(
            "query",
            string()
                .trim()
                .min_len(1, "Termo de busca não pode estar vazio")
                .max_len(255, "Termo de busca muito longo"),
        )
        .optional_field(
            "filters",
            object()
                .optional_field(
                    "kind",
                    array(enumeration(
                        ["projeto", "arte", "usuario", "tarefa"],
                        "Tipo de busca desconhecido",
                    )),
                )
                .optional_field("status", array(string()))
                .optional_field("tags", tags())
                .optional_field("start", iso_datetime())
                .optional_field("end", iso_datetime()),
        )
        .optional_field("pagination", pagination_params())
}
