//! Text display helpers: capitalization, truncation, slugs, initials,
//! and masking for e-mail addresses.

/// Uppercases the first letter and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Capitalizes every whitespace-separated word.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to at most `max_len` characters, ending in `...` when the
/// text is cut. The output never exceeds `max_len`, so a ceiling below
/// the ellipsis length yields a shortened ellipsis.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    if max_len <= 3 {
        return ".".repeat(max_len);
    }
    let head: String = text.chars().take(max_len - 3).collect();
    format!("{head}...")
}

/// Folds Latin accented letters to their ASCII base. Characters with
/// no mapping pass through.
pub fn remove_accents(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'ç' => 'c',
            'Ç' => 'C',
            'ñ' => 'n',
            'Ñ' => 'N',
            other => other,
        })
        .collect()
}

/// Builds a URL-safe slug: accents folded, lowercased, runs of
/// non-alphanumeric characters collapsed to single hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in remove_accents(text).to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// First letters of the first two words, uppercased: `"Ana Souza"`
/// gives `"AS"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Masks the local part of an e-mail address for display:
/// `joana@viu.com.br` becomes `j***a@viu.com.br`. Addresses with a
/// local part of two characters or fewer come back unchanged.
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let len = local.chars().count();
    if len <= 2 {
        return email.to_string();
    }
    let first = local.chars().next().unwrap_or('*');
    let last = local.chars().next_back().unwrap_or('*');
    format!("{first}{}{last}@{domain}", "*".repeat(len - 2))
}
