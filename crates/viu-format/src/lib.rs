//! # viu-format — Display Formatting
//!
//! Pure string-in, string-out formatting helpers shared by every VIU
//! frontend and notification template: Brazilian date and currency
//! conventions, phone and document masks, text utilities, and color
//! math for contrast decisions.
//!
//! None of these functions validate. A value that cannot be formatted
//! comes back unchanged (or as a `None`), so callers can render user
//! input without a fallible path. Checksum validation lives in
//! `viu-core`; schema validation in `viu-schema`.

pub mod color;
pub mod date;
pub mod document;
pub mod money;
pub mod phone;
pub mod text;
pub mod url;

pub use color::{hex_to_rgb, is_light_color, rgb_to_hex, Rgb};
pub use date::{format_date, format_duration, format_relative};
pub use document::{format_cep, format_cnpj, format_cpf};
pub use money::{
    format_currency_cents, format_file_size, format_number, format_percentage,
    parse_currency_to_cents,
};
pub use phone::{format_phone, mask_phone, unformat_phone};
pub use text::{
    capitalize, capitalize_words, initials, mask_email, remove_accents, slugify, truncate,
};
pub use url::{ensure_protocol, extract_domain};
