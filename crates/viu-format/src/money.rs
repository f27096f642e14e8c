//! Currency and numeric formatting. Monetary values travel as integer
//! cents everywhere in the platform and only become `R$` strings here.

/// Groups an unsigned decimal string with dots every three digits.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

/// Formats integer cents as Brazilian currency: `R$ 1.234,56`.
pub fn format_currency_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = group_thousands(&(abs / 100).to_string());
    format!("{sign}R$ {reais},{:02}", abs % 100)
}

/// Parses a currency string back to cents. Everything except digits
/// and the decimal comma is ignored; unparseable input yields 0.
pub fn parse_currency_to_cents(input: &str) -> i64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) => (value * 100.0).round() as i64,
        Err(_) => 0,
    }
}

/// Formats an integer with pt-BR thousands separators: `1.234.567`.
pub fn format_number(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&value.unsigned_abs().to_string()))
}

/// Formats a percentage value (`12.5` reads as 12.5%) with the given
/// number of decimals and a decimal comma: `12,5%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%").replace('.', ",")
}

/// Renders a byte count with binary units and one decimal: `1,5 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 B".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rendered = format!("{value:.1}");
    let rendered = rendered.strip_suffix(".0").unwrap_or(rendered.as_str());
    format!("{} {}", rendered.replace('.', ","), UNITS[unit])
}
