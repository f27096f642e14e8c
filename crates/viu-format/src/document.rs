//! CPF, CNPJ, and CEP display masks. Formatting is purely positional;
//! checksum validation lives in `viu-core`.

fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats 11 digits as `529.982.247-25`. Other lengths come back
/// unchanged.
pub fn format_cpf(cpf: &str) -> String {
    let digits = digits_of(cpf);
    if digits.len() != 11 {
        return cpf.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    )
}

/// Formats 14 digits as `11.222.333/0001-81`. Other lengths come back
/// unchanged.
pub fn format_cnpj(cnpj: &str) -> String {
    let digits = digits_of(cnpj);
    if digits.len() != 14 {
        return cnpj.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    )
}

/// Formats 8 digits as `01310-100`. Other lengths come back unchanged.
pub fn format_cep(cep: &str) -> String {
    let digits = digits_of(cep);
    if digits.len() != 8 {
        return cep.to_string();
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}
