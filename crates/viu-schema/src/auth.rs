//! # Authentication Payloads
//!
//! Schemas for the login, registration, and password-recovery flows.
//! Complexity rules live in refinements because the pattern engine has
//! no lookahead; the strength meter in [`crate::password`] shares the
//! same character-class rules.

use serde_json::Value;
use viu_core::UserRole;
use viu_valid::{boolean, enumeration, string, Schema};

use crate::base::{email, password, person_name, phone};
use crate::password::meets_complexity;

fn password_field(path: &str) -> impl Fn(&Value) -> bool + Send + Sync + 'static {
    let path = path.to_string();
    move |value: &Value| {
        value[path.as_str()]
            .as_str()
            .is_some_and(meets_complexity)
    }
}

/// Login payload. `rememberMe` defaults to `false`.
pub fn login_request() -> Schema {
    viu_valid::object()
        .field("email", email())
        .field("password", string().min_len(1, "Senha é obrigatória"))
        .field_with_default("rememberMe", boolean(), Value::Bool(false))
        .build()
}

/// Registration payload. The password must carry all four character
/// classes; acceptance flags must be `true`.
pub fn register_request() -> Schema {
    viu_valid::object()
        .field("name", person_name())
        .field("email", email())
        .field("password", password())
        .field(
            "role",
            enumeration(
                UserRole::all().iter().map(|r| r.as_str()),
                "Tipo de usuário inválido",
            ),
        )
        .optional_field("phone", phone())
        .field(
            "termsAccepted",
            boolean().must_be_true("Você deve aceitar os termos de uso"),
        )
        .field(
            "privacyAccepted",
            boolean().must_be_true("Você deve aceitar a política de privacidade"),
        )
        .field_with_default("marketingOptIn", boolean(), Value::Bool(false))
        .refine(
            "password",
            "Senha deve conter ao menos uma letra minúscula, uma maiúscula, um número e um caractere especial",
            password_field("password"),
        )
        .build()
}

pub fn refresh_token_request() -> Schema {
    viu_valid::object()
        .field("refreshToken", string().min_len(1, "Refresh token é obrigatório"))
        .build()
}

pub fn forgot_password_request() -> Schema {
    viu_valid::object().field("email", email()).build()
}

/// Reset payload: the confirmation must match the new password.
pub fn reset_password_request() -> Schema {
    viu_valid::object()
        .field(
            "token",
            string()
                .min_len(1, "Token é obrigatório")
                .max_len(500, "Token inválido"),
        )
        .field("newPassword", password())
        .field("newPasswordConfirmation", string())
        .refine(
            "newPassword",
            "Senha deve conter ao menos uma letra minúscula, uma maiúscula, um número e um caractere especial",
            password_field("newPassword"),
        )
        .refine(
            "newPasswordConfirmation",
            "As senhas não coincidem",
            |value| value["newPassword"] == value["newPasswordConfirmation"],
        )
        .build()
}

pub fn change_password_request() -> Schema {
    viu_valid::object()
        .field("currentPassword", string().min_len(1, "Senha atual é obrigatória"))
        .field("newPassword", password())
        .field("newPasswordConfirmation", string())
        .refine(
            "newPassword",
            "Senha deve conter ao menos uma letra minúscula, uma maiúscula, um número e um caractere especial",
            password_field("newPassword"),
        )
        .refine(
            "newPasswordConfirmation",
            "As senhas não coincidem",
            |value| value["newPassword"] == value["newPasswordConfirmation"],
        )
        .build()
}
